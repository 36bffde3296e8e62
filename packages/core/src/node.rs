//! The Node type - an untyped tree of maps, lists and scalars.
//!
//! This is what a JSON/YAML-like document looks like once it has been parsed
//! into generic containers. Nothing about its shape is known statically.

use std::collections::BTreeMap;
use std::fmt;

/// A map node's contents: text keys to child nodes.
pub type Map = BTreeMap<String, Node>;

/// A list node's contents.
pub type List = Vec<Node>;

/// An untyped value reachable while walking a tree.
///
/// # Design Notes
///
/// - `Null` is the only "no value" shape. Traversal and the built-in
///   converters treat it exactly like a missing key.
/// - Uses `BTreeMap` for deterministic ordering (stable `Display`, comparison)
/// - Uses `i64` for integers and `f64` for decimals, which is what JSON and
///   YAML loaders produce
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    /// Absent value (JSON `null`, YAML `~`).
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Signed 64-bit integer scalar.
    Integer(i64),
    /// 64-bit floating point scalar.
    Float(f64),
    /// Text scalar.
    String(String),
    /// Ordered sequence of nodes.
    Array(List),
    /// Mapping from text key to node.
    Map(Map),
}

impl Node {
    /// A shared null, for lookups that need a `&Node` when nothing was found.
    pub const NULL: Node = Node::Null;

    /// Create an empty map node.
    pub fn map() -> Self {
        Node::Map(Map::new())
    }

    /// Create an empty array node.
    pub fn array() -> Self {
        Node::Array(List::new())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Node::Array(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&List> {
        match self {
            Node::Array(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a direct child of a map node.
    ///
    /// Returns `None` for missing keys and for every non-map node.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map()?.get(key)
    }

    /// Short name of this node's shape, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "bool",
            Node::Integer(_) => "integer",
            Node::Float(_) => "float",
            Node::String(_) => "string",
            Node::Array(_) => "array",
            Node::Map(_) => "map",
        }
    }
}

/// Human-readable rendering.
///
/// Strings are written raw at every depth, so the output is meant for
/// people and logs rather than for parsing back.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Null => write!(f, "null"),
            Node::Bool(b) => write!(f, "{}", b),
            Node::Integer(i) => write!(f, "{}", i),
            Node::Float(x) => write!(f, "{}", x),
            Node::String(s) => write!(f, "{}", s),
            Node::Array(list) => {
                write!(f, "[")?;
                for (i, item) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Node::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

// Conversion from common types

impl From<bool> for Node {
    fn from(v: bool) -> Self {
        Node::Bool(v)
    }
}

impl From<i64> for Node {
    fn from(v: i64) -> Self {
        Node::Integer(v)
    }
}

impl From<i32> for Node {
    fn from(v: i32) -> Self {
        Node::Integer(v as i64)
    }
}

impl From<f64> for Node {
    fn from(v: f64) -> Self {
        Node::Float(v)
    }
}

impl From<String> for Node {
    fn from(v: String) -> Self {
        Node::String(v)
    }
}

impl From<&str> for Node {
    fn from(v: &str) -> Self {
        Node::String(v.to_string())
    }
}

impl From<Map> for Node {
    fn from(v: Map) -> Self {
        Node::Map(v)
    }
}

impl<T: Into<Node>> From<Vec<T>> for Node {
    fn from(v: Vec<T>) -> Self {
        Node::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(v: Option<T>) -> Self {
        v.map_or(Node::Null, Into::into)
    }
}
