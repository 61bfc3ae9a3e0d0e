//! Terminal-facing adapters: line I/O and the menu loop.

pub mod console;
pub mod menu;
