//! Resolving key paths against a layout tree.
//!
//! [`resolve_path`] walks a tree along a key path and concatenates the
//! rendered segments. [`Schema`] precomputes what each key path needs so
//! callers can check a parameter bag before resolving, or list the key paths
//! a tree offers.

pub mod resolver;
pub mod schema;

pub use resolver::{lookup, resolve_path, traverse};
pub use schema::{Requirement, Schema};
