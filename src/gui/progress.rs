// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ideas: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, ideas: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        let text = msg.into();
        *self.status.lock().unwrap() = text;
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, ideas: usize) {
        self.ideas = ideas;
        self.set_status(format!("Procesando {ideas} ideas..."));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn finish(&mut self) {
        if self.ideas == 0 {
            self.set_status(s!("Generando ranking..."));
        } else {
            self.set_status(format!("Generando ranking de {} ideas...", self.ideas));
        }
    }
}
