// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg(test)]

use anyhow::Result;
use varprobe::*;

#[test]
fn info_for_plain_values() -> Result<()> {
    assert_eq!(
        variable_info(&Value::from(42i64))?,
        r#"{"shape":"","count":0,"type":"int"}"#
    );
    assert_eq!(
        variable_info(&Value::from(2.5))?,
        r#"{"shape":"","count":0,"type":"float"}"#
    );
    assert_eq!(
        variable_info(&Value::from("hello"))?,
        r#"{"shape":"","count":5,"type":"str"}"#
    );
    assert_eq!(
        variable_info(&Value::Null)?,
        r#"{"shape":"","count":0,"type":"NoneType"}"#
    );
    assert_eq!(
        variable_info(&Value::Bool(true))?,
        r#"{"shape":"","count":0,"type":"bool"}"#
    );
    Ok(())
}

#[test]
fn info_counts_containers() -> Result<()> {
    let list = Value::from(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]);
    assert_eq!(
        variable_info(&list)?,
        r#"{"shape":"","count":3,"type":"list"}"#
    );

    let dict = Value::from_json_str(r#"{"a": 1, "b": 2}"#)?;
    assert_eq!(
        variable_info(&dict)?,
        r#"{"shape":"","count":2,"type":"dict"}"#
    );

    let mut set = Value::new_set();
    set.as_set_mut()?.insert(Value::from(1i64));
    set.as_set_mut()?.insert(Value::from(1i64));
    set.as_set_mut()?.insert(Value::from(2i64));
    assert_eq!(
        variable_info(&set)?,
        r#"{"shape":"","count":2,"type":"set"}"#
    );

    let pair = Value::from_tuple(vec![Value::from(1i64), Value::from(2i64)]);
    assert_eq!(
        variable_info(&pair)?,
        r#"{"shape":"","count":2,"type":"tuple"}"#
    );
    Ok(())
}

#[test]
fn info_reports_tuple_shape() -> Result<()> {
    let frame = Value::from(
        Instance::new("DataFrame")
            .attr(
                "shape",
                Value::from_tuple(vec![Value::from(3i64), Value::from(4i64)]),
            )
            .with_len(3),
    );
    assert_eq!(
        variable_info(&frame)?,
        r#"{"shape":"(3, 4)","count":3,"type":"DataFrame"}"#
    );

    // One dimension still renders with a separator.
    let series = Value::from(
        Instance::new("Series")
            .attr("shape", Value::from_tuple(vec![Value::from(7i64)]))
            .with_len(7),
    );
    assert_eq!(
        variable_info(&series)?,
        r#"{"shape":"(7,)","count":7,"type":"Series"}"#
    );
    Ok(())
}

#[test]
fn info_rewrites_torch_size_shape() -> Result<()> {
    let size = Value::from(Instance::new("Size").with_repr("torch.Size([2, 5])"));
    let tensor = Value::from(Instance::new("Tensor").attr("shape", size).with_len(2));
    assert_eq!(
        variable_info(&tensor)?,
        r#"{"shape":"(2, 5)","count":2,"type":"Tensor"}"#
    );

    let empty_size = Value::from(Instance::new("Size").with_repr("torch.Size([])"));
    let scalar = Value::from(Instance::new("Tensor").attr("shape", empty_size));
    assert_eq!(
        variable_info(&scalar)?,
        r#"{"shape":"()","count":0,"type":"Tensor"}"#
    );
    Ok(())
}

#[test]
fn info_rejects_unrecognized_shapes() -> Result<()> {
    // A `shape` attribute that is not one of the two accepted renderings
    // must not be reported.
    let window = Value::from(
        Instance::new("Window")
            .attr("shape", Value::from("oblong"))
            .with_len(4),
    );
    assert_eq!(
        variable_info(&window)?,
        r#"{"shape":"","count":4,"type":"Window"}"#
    );

    // Bounded but without a separator.
    let geometry = Value::from(Instance::new("Geometry").with_repr("(800x600)"));
    let widget = Value::from(Instance::new("Widget").attr("shape", geometry));
    assert_eq!(
        variable_info(&widget)?,
        r#"{"shape":"","count":0,"type":"Widget"}"#
    );

    // A list rendering is not a tuple rendering.
    let grid = Value::from(Instance::new("Grid").attr(
        "shape",
        Value::from(vec![Value::from(3i64), Value::from(4i64)]),
    ));
    assert_eq!(
        variable_info(&grid)?,
        r#"{"shape":"","count":0,"type":"Grid"}"#
    );

    // No shape attribute at all.
    let plain = Value::from(Instance::new("Thing"));
    assert_eq!(
        variable_info(&plain)?,
        r#"{"shape":"","count":0,"type":"Thing"}"#
    );
    Ok(())
}

struct Anonymous;

impl Inspect for Anonymous {
    fn type_name(&self) -> Option<String> {
        None
    }

    fn len(&self) -> Option<usize> {
        Some(7)
    }
}

#[test]
fn info_probes_are_independent() -> Result<()> {
    // A failing type probe must not suppress the count probe.
    assert_eq!(
        variable_info(&Anonymous)?,
        r#"{"shape":"","count":7,"type":""}"#
    );
    Ok(())
}

#[test]
fn properties_skip_missing_attributes() -> Result<()> {
    let conn = Value::from(
        Instance::new("Connection")
            .attr("a", Value::from(1i64))
            .attr("b", Value::from("x")),
    );

    assert_eq!(variable_properties(&conn, &["a", "c"])?, r#"{"a":"1"}"#);
    assert_eq!(variable_properties(&conn, &["c", "d"])?, "{}");
    Ok(())
}

#[test]
fn properties_keep_request_order() -> Result<()> {
    let conn = Value::from(
        Instance::new("Connection")
            .attr("a", Value::from(1i64))
            .attr("b", Value::from("x")),
    );

    assert_eq!(
        variable_properties(&conn, &["b", "a"])?,
        r#"{"b":"\"x\"","a":"1"}"#
    );
    assert_eq!(
        variable_properties(&conn, &["a", "b"])?,
        r#"{"a":"1","b":"\"x\""}"#
    );
    Ok(())
}

#[test]
fn properties_of_non_instances_are_empty() -> Result<()> {
    assert_eq!(variable_properties(&Value::from(5i64), &["a"])?, "{}");
    assert_eq!(variable_properties(&Value::Null, &["a"])?, "{}");
    Ok(())
}

#[test]
fn types_pair_positionally() -> Result<()> {
    let vars = [Value::from(1i64), Value::from("s")];
    let refs: Vec<&dyn Inspect> = vars.iter().map(|v| v as &dyn Inspect).collect();

    assert_eq!(
        variable_types(&refs, &["n1", "n2"])?,
        r#"{"n1":"int","n2":"str"}"#
    );

    // Mismatched lengths truncate to the shorter sequence.
    assert_eq!(
        variable_types(&refs, &["n1", "n2", "n3"])?,
        r#"{"n1":"int","n2":"str"}"#
    );
    assert_eq!(variable_types(&refs, &["n1"])?, r#"{"n1":"int"}"#);
    assert_eq!(variable_types(&refs, &[])?, "{}");
    assert_eq!(variable_types(&[], &["n1"])?, "{}");
    Ok(())
}

#[test]
fn types_omit_values_without_a_type_name() -> Result<()> {
    let int = Value::from(1i64);
    let refs: Vec<&dyn Inspect> = vec![&int, &Anonymous, &int];
    assert_eq!(
        variable_types(&refs, &["a", "b", "c"])?,
        r#"{"a":"int","c":"int"}"#
    );
    Ok(())
}

#[test]
fn queries_are_idempotent() -> Result<()> {
    let frame = Value::from(
        Instance::new("DataFrame")
            .attr(
                "shape",
                Value::from_tuple(vec![Value::from(3i64), Value::from(4i64)]),
            )
            .with_len(3),
    );

    assert_eq!(variable_info(&frame)?, variable_info(&frame)?);
    assert_eq!(
        variable_properties(&frame, &["shape"])?,
        variable_properties(&frame, &["shape"])?
    );

    let refs: Vec<&dyn Inspect> = vec![&frame];
    assert_eq!(
        variable_types(&refs, &["df"])?,
        variable_types(&refs, &["df"])?
    );
    Ok(())
}
