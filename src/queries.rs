// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::inspect::Inspect;

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Fixed-field record produced by [`variable_info`].
#[derive(Serialize)]
struct VariableInfo {
    shape: String,
    count: usize,
    #[serde(rename = "type")]
    type_name: String,
}

/// Describe a single value: its type name, shape and element count.
///
/// Returns a JSON object with the fields `shape`, `count` and `type`.
/// Every probe is independent: a value that answers none of them still
/// yields a well-formed record with the defaults `""`, `0` and `""`.
pub fn variable_info(var: &dyn Inspect) -> Result<String> {
    // Start out without the information.
    let mut info = VariableInfo {
        shape: String::new(),
        count: 0,
        type_name: String::new(),
    };

    if let Some(name) = var.type_name() {
        info.type_name = name;
    }

    if let Some(text) = var.shape_text() {
        if let Some(shape) = recognized_shape(&text) {
            info.shape = shape;
        }
    }

    if let Some(len) = var.len() {
        info.count = len;
    }

    Ok(serde_json::to_string(&info)?)
}

/// Report the current values of the requested attributes.
///
/// Returns a JSON object mapping each requested attribute the value
/// actually has to the rendering of its current value, in request order.
/// Attributes the value lacks are omitted, not errors.
pub fn variable_properties(var: &dyn Inspect, attributes: &[&str]) -> Result<String> {
    let mut props: IndexMap<&str, String> = IndexMap::new();
    for name in attributes {
        if let Some(repr) = var.attr_repr(name) {
            props.insert(*name, repr);
        }
    }
    Ok(serde_json::to_string(&props)?)
}

/// Report the type name of each named value.
///
/// Values and names pair up positionally; pairing stops at the end of the
/// shorter sequence. A value whose type cannot be introspected is omitted
/// from the result.
pub fn variable_types(vars: &[&dyn Inspect], names: &[&str]) -> Result<String> {
    let mut types: IndexMap<&str, String> = IndexMap::new();
    for (var, name) in vars.iter().zip(names.iter()) {
        if let Some(type_name) = var.type_name() {
            types.insert(*name, type_name);
        }
    }
    Ok(serde_json::to_string(&types)?)
}

// Get a bit more restrictive with exactly what we want to count as a shape,
// since anything can define it. Only two renderings are accepted: an ordered
// tuple like `(3, 4)`, or the `torch.Size([3, 4])` form, which is rewritten
// into the tuple form. Everything else is rejected.
fn recognized_shape(text: &str) -> Option<String> {
    let n = text.chars().count();
    if n >= 3 && text.starts_with('(') && text.ends_with(')') && text.contains(',') {
        return Some(text.to_string());
    }
    if text.starts_with("torch.Size([") {
        // Keep the characters between the marker and the trailing `])`.
        let inner: String = text.chars().skip(12).take(n.saturating_sub(14)).collect();
        return Some(format!("({inner})"));
    }
    None
}
