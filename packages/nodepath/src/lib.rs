//! nodepath: typed values out of loosely-typed trees, addressed by dot paths.
//!
//! Parse JSON, YAML or anything else into nested maps and lists, then ask
//! for `a.b.list[-1].c` as an `i32`. Missing keys, wrong shapes, bad indices
//! and unconvertible values all come back as `None`; there is nothing to
//! catch.
//!
//! ## Layers
//!
//! ```text
//! nodepath-core      Node tree, DotPath tokenizer, Segment
//! nodepath-convert   ConverterRegistry + built-in converters
//! nodepath-extract   Extractor (path walk), Chain (level-by-level access)
//! nodepath-serde     serde_json bridge, SerdeConverter   [feature "json"]
//! ```
//!
//! ## Process-wide registry
//!
//! The free functions in this crate use `ConverterRegistry::global()`. To
//! add converters, build a registry during startup and `install` it before
//! any lookup happens:
//!
//! ```rust
//! use nodepath::{ConverterRegistry, Node};
//!
//! let mut registry = ConverterRegistry::new();
//! registry.register_fn(|node: &Node| node.as_str().map(|s| s.to_uppercase().into_boxed_str()));
//! ConverterRegistry::install(registry).unwrap();
//!
//! let shout: Option<Box<str>> = nodepath::convert(&Node::from("hey"));
//! assert_eq!(shout.as_deref(), Some("HEY"));
//! ```

pub use nodepath_convert::{
    builtin, BoxedConverter, Converted, Converter, ConverterRegistry, FnConverter, RegistryError,
};
pub use nodepath_core::{dot_path, grammar, DotPath, List, Map, Node, PathError, Segment};
pub use nodepath_extract::{index_into, walk, Chain, Extractor};

#[cfg(feature = "json")]
pub use nodepath_serde as json;

#[cfg(feature = "json")]
pub use nodepath_serde::{parse_json, SerdeConverter};

/// Extract the value at `path` as a `T`, using the process-wide registry.
///
/// ```rust
/// let root = nodepath::parse_json(r#"{"a": {"b": [{"c": 5}, {"c": 7}]}}"#).unwrap();
/// assert_eq!(nodepath::extract::<i32>(&root, "a.b[1].c"), Some(7));
/// assert_eq!(nodepath::extract::<i32>(&root, "a.b[2].c"), None);
/// ```
pub fn extract<T: 'static>(root: &Map, path: &str) -> Option<T> {
    Extractor::global().extract(root, path)
}

/// `extract`, substituting `default` when there is no result.
pub fn extract_or<T: 'static>(root: &Map, path: &str, default: T) -> T {
    Extractor::global().extract_or(root, path, default)
}

/// Convert a single node with the process-wide registry.
pub fn convert<T: 'static>(node: &Node) -> Option<T> {
    ConverterRegistry::global().convert(node)
}

/// `convert`, substituting `default` when there is no result.
pub fn convert_or<T: 'static>(node: &Node, default: T) -> T {
    ConverterRegistry::global().convert_or(node, default)
}

/// A new chained accessor over the process-wide registry.
pub fn chain<'n>() -> Chain<'static, 'n> {
    Extractor::global().chain()
}
