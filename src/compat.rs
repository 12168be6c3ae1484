/// Compatibility layer for `std`/`no_std`
#[cfg(feature = "std")]
pub use std::{
    string::{String, ToString},
    vec::{IntoIter as VecIntoIter, Vec},
};

#[cfg(not(feature = "std"))]
pub use alloc::{
    string::{String, ToString},
    vec::{IntoIter as VecIntoIter, Vec},
};

/// Emit a `tracing` event for a store mutation when the `tracing` feature is on.
macro_rules! trace_op {
    ($($field:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!(target: "search_params_helper", $($field)*);
    };
}

pub(crate) use trace_op;
