// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{generate,reset}.

mod generate; // src/gui/actions/generate.rs
mod reset;    // src/gui/actions/reset.rs

pub use generate::generate;
pub use reset::reset;
