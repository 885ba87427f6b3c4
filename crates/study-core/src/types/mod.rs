//! Core type definitions

mod pose;
mod transform_mode;

pub use pose::*;
pub use transform_mode::*;
