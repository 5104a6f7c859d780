// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::number::Number;
use crate::value::Value;

/// Capability probes over a single host value.
///
/// Each probe answers "does this value support the capability, and if so
/// what does it report" — `None` always means "not applicable to this
/// value" and is never an error. Hosts that keep their own object handles
/// implement this directly; hosts that hand values over as data use
/// [`Value`], which implements it for the usual kernel types.
pub trait Inspect {
    /// Best-effort name of the value's runtime type.
    fn type_name(&self) -> Option<String>;

    /// Number of elements, for values that answer the length protocol.
    fn len(&self) -> Option<usize> {
        None
    }

    /// Textual rendering of the value's `shape` attribute, if it has one.
    ///
    /// This is the raw rendering; whether it is accepted as a real
    /// dimensional shape is decided by the descriptor query.
    fn shape_text(&self) -> Option<String> {
        None
    }

    /// Rendering of the named attribute's current value, if the value has
    /// that attribute.
    fn attr_repr(&self, _name: &str) -> Option<String> {
        None
    }
}

// Type names follow the conventional names notebook kernels report for
// their primitive types; instances report their class name.
impl Inspect for Value {
    fn type_name(&self) -> Option<String> {
        let name = match self {
            Value::Null => "NoneType",
            Value::Bool(_) => "bool",
            Value::Number(Number::Float(_)) => "float",
            Value::Number(_) => "int",
            Value::String(_) => "str",
            Value::Array(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Set(_) => "set",
            Value::Object(_) => "dict",
            Value::Instance(instance) => return Some(instance.class().to_string()),
        };
        Some(name.to_string())
    }

    fn len(&self) -> Option<usize> {
        match self {
            Value::String(s) => Some(s.chars().count()),
            Value::Array(a) | Value::Tuple(a) => Some(a.len()),
            Value::Set(s) => Some(s.len()),
            Value::Object(fields) => Some(fields.len()),
            Value::Instance(instance) => instance.len(),
            _ => None,
        }
    }

    fn shape_text(&self) -> Option<String> {
        self.attr_repr("shape")
    }

    fn attr_repr(&self, name: &str) -> Option<String> {
        match self {
            Value::Instance(instance) => instance.get_attr(name).map(Value::to_string),
            _ => None,
        }
    }
}
