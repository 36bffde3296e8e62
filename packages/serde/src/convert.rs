//! Moving trees between `Node` and serde.
//!
//! Everything goes through `serde_json::Value` as the intermediate shape;
//! `Node` already has the same seven cases, so the mapping is one-to-one
//! apart from numbers.

use std::any::type_name;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Number, Value};

use nodepath_core::{Map, Node};

use crate::Error;

/// Deserialize `node` into a `T`.
///
/// The node is only borrowed; a JSON copy of it is built and consumed.
pub fn from_node<T: DeserializeOwned>(node: &Node) -> Result<T, Error> {
    serde_json::from_value(node_to_json(node)).map_err(|source| Error::Deserialize {
        target: type_name::<T>(),
        kind: node.kind(),
        source,
    })
}

/// Serialize `data` into a `Node` tree.
pub fn to_node<T: Serialize>(data: &T) -> Result<Node, Error> {
    let json = serde_json::to_value(data)?;
    Ok(json_to_node(json))
}

/// Parse JSON text whose top level is an object into a root map.
pub fn parse_json(text: &str) -> Result<Map, Error> {
    let json: Value = serde_json::from_str(text)?;
    match json_to_node(json) {
        Node::Map(map) => Ok(map),
        other => Err(Error::not_a_map(&other)),
    }
}

/// Render a node as JSON.
///
/// NaN and the infinities have no JSON spelling and come out as `null`.
pub fn node_to_json(node: &Node) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Bool(*b),
        Node::Integer(i) => Value::from(*i),
        Node::Float(f) => float_to_json(*f),
        Node::String(s) => Value::String(s.clone()),
        Node::Array(items) => items.iter().map(node_to_json).collect(),
        Node::Map(entries) => Value::Object(
            entries
                .iter()
                .map(|(key, child)| (key.clone(), node_to_json(child)))
                .collect(),
        ),
    }
}

/// Take ownership of a JSON tree as a node tree.
pub fn json_to_node(json: Value) -> Node {
    match json {
        Value::Null => Node::Null,
        Value::Bool(b) => Node::Bool(b),
        Value::Number(n) => number_to_node(&n),
        Value::String(s) => Node::String(s),
        Value::Array(items) => Node::Array(items.into_iter().map(json_to_node).collect()),
        Value::Object(entries) => Node::Map(
            entries
                .into_iter()
                .map(|(key, child)| (key, json_to_node(child)))
                .collect(),
        ),
    }
}

fn float_to_json(f: f64) -> Value {
    Number::from_f64(f).map_or(Value::Null, Value::Number)
}

// Integers that fit i64 stay integral. Anything wider (u64 above i64::MAX)
// is approximated as a float, and a number neither can represent keeps its
// digits as text.
fn number_to_node(n: &Number) -> Node {
    match (n.as_i64(), n.as_f64()) {
        (Some(i), _) => Node::Integer(i),
        (None, Some(f)) => Node::Float(f),
        (None, None) => Node::String(n.to_string()),
    }
}
