//! Boot orchestration: one boot attempt from path resolution through
//! execution-strategy completion or fatal exit.
pub mod exec;
pub mod loader;
pub mod orchestrator;
pub mod paths;

pub use exec::{Completion, ExecStrategy, SyncExec};
pub use loader::load_config;
pub use orchestrator::{boot, BootExit, FATAL_ASSEMBLY_EXIT_CODE};
pub use paths::PackagingMode;
