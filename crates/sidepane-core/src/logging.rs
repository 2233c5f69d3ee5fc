#![forbid(unsafe_code)]

//! Logging shim.
//!
//! With the `tracing` feature enabled this re-exports the `tracing` macros.
//! Without it, same-named macros are exported at the crate root that expand
//! to nothing, so call sites compile unchanged in both configurations.

#[cfg(feature = "tracing")]
pub use tracing::{debug, trace};

/// No-op `debug!` used when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {{}};
}

/// No-op `trace!` used when the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {{}};
}
