//! Configuration for phpcrud-codegen

pub mod defaults;
mod settings;

pub use settings::*;
