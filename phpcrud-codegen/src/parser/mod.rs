//! PHP class stub parser module using regex

mod metadata;
mod stub_parser;

pub use metadata::*;
pub use stub_parser::*;
