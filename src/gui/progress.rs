// src/gui/progress.rs
use std::sync::{Arc, Mutex};
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        self.set_status(format!("Reading {} file(s)…", total));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn file_done(&mut self, name: &str) {
        self.done += 1;
        self.set_status(format!("Read {} ({}/{})", name, self.done, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("No input files found"));
        } else {
            self.set_status(format!("Loaded {} file(s)", self.done));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_counts() {
        let status = Arc::new(Mutex::new(s!()));
        let mut p = GuiProgress::new(Arc::clone(&status));
        p.begin(2);
        p.file_done("Midwest.xlsx");
        assert_eq!(*status.lock().unwrap(), "Read Midwest.xlsx (1/2)");
        p.file_done("Northeast.xlsx");
        p.finish();
        assert_eq!(*status.lock().unwrap(), "Loaded 2 file(s)");
    }
}
