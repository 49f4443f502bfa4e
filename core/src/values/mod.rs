pub mod value;

pub use value::{Kind, Value};

#[cfg(test)]
mod value_test;
