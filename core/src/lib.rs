#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{format, string::String, string::ToString, vec, vec::Vec};

pub mod api;
pub mod bind;
pub mod errors;
pub mod evaluator;
pub mod explain;
pub mod parser;
pub mod syntax;
pub mod values;

pub use num_complex::Complex64;
