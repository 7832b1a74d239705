//! File system helpers.
//!
//! Every write to a target file goes through [`write_atomic`].

pub mod atomic;

pub use atomic::write_atomic;
