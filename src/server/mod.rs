//! Server assembly, configuration, dependencies, and runtime.
pub mod assembly;
pub mod config;
pub mod deps;
pub mod filters;
pub mod runtime;

pub use assembly::{create_server, AssemblyInputs, ServerBundle};
