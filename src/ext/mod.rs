//! Extension traits for standard library types.
//!
//! Each trait lives in a file named after the type it extends
//! (`path.rs` for `std::path::Path`) and is re-exported here.
pub mod path;

pub use path::PathExt;
