// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

// Use README.md as crate documentation.
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod inspect;
mod number;
mod queries;
mod value;

pub use inspect::Inspect;
pub use number::Number;
pub use queries::{variable_info, variable_properties, variable_types};
pub use value::{Instance, Value};
