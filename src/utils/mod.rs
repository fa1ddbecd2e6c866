//! Ambient helpers: logging setup, filesystem shims, wildcard matching.

pub mod fs_ops;
pub mod logger;
pub mod wildcard;

pub use logger::setup_logging;
pub use wildcard::{Matcher, compile_wildcard};
