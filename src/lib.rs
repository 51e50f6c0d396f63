//! Library crate root re-exporting boot, server, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod boot;
pub mod cli;
pub mod server;
