// src/gui/components/mod.rs
pub mod data_table;
pub mod detail_panel;
pub mod export_bar;
pub mod filter_bar;
pub mod summary;
pub mod tabs;
pub mod tile_map;
