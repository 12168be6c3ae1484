//! Chainable editing of URL query-string parameters.
//!
//! ```
//! use search_params_helper::SearchParams;
//!
//! let query = SearchParams::create("?key1=value1&key2=value2")
//!     .add_param("added", "yes")
//!     .remove_param("key1")
//!     .add_or_replace_param("key2", "a&b")
//!     .serialize();
//! assert_eq!(query, "key2=a%26b&added=yes");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod encoding;
mod query_parser;

mod factory;
mod mutation;
mod param_map;
mod search_params;

// Public API
pub use factory::{Operation, ParamsFactory, search_params_factory};
pub use mutation::Mutation;
pub use param_map::ParamMap;
pub use search_params::SearchParams;
