//! Code generation module

mod class_generator;
mod code_generator;
mod doc_comment;
mod naming;

pub use class_generator::{
    CHECK_IF_EXISTS_NAME, GET_IF_EXISTS_NAME, UPDATE_EXCLUDED_PROPERTIES,
};
pub use code_generator::*;
pub use doc_comment::*;
pub use naming::*;
