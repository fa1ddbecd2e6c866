//! Scan engine: filter, walker, dispatcher, orchestrator.

pub mod dispatch;
pub mod filter;
pub mod orchestrator;
pub mod walker;

pub use dispatch::dispatch;
pub use filter::{accept, extension_of, has_extension};
pub use orchestrator::scan;
pub use walker::Walker;
