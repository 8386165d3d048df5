//! Miscellaneous support for the library.

pub mod log;
