// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod ingest;
pub mod model;
pub mod present;
pub mod progress;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
