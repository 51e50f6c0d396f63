//! Server runtime: the run operation behind the execution strategy.
mod service;

pub use service::serve;
