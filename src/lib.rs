// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;

pub mod controller;
pub mod dom;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod watch;

/// The bundled stand-in for the host app's ranking page.
pub fn demo_page() -> &'static str {
    include_str!("demo_page.html")
}
