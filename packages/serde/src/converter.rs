//! Registry converters backed by serde deserialization.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use nodepath_convert::Converter;
use nodepath_core::Node;

use crate::convert::from_node;

/// Converts a node into any `DeserializeOwned` type.
///
/// Register one per struct you want to pull out of a tree:
///
/// ```rust
/// use nodepath_convert::ConverterRegistry;
/// use nodepath_core::Node;
/// use nodepath_serde::{parse_json, SerdeConverter};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Limits {
///     max: u32,
/// }
///
/// let mut registry = ConverterRegistry::new();
/// registry.register(SerdeConverter::<Limits>::new());
///
/// let root = parse_json(r#"{"limits": {"max": 10}}"#).unwrap();
/// let limits = registry.convert::<Limits>(&root["limits"]).unwrap();
/// assert_eq!(limits.max, 10);
/// ```
///
/// `Node::Null` is always absent, even for types that could deserialize
/// from null.
pub struct SerdeConverter<T> {
    _output: PhantomData<fn() -> T>,
}

impl<T> SerdeConverter<T> {
    pub fn new() -> Self {
        Self {
            _output: PhantomData,
        }
    }
}

impl<T> Default for SerdeConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned + 'static> Converter for SerdeConverter<T> {
    type Output = T;

    fn convert(&self, node: &Node) -> Option<T> {
        if node.is_null() {
            return None;
        }

        match from_node(node) {
            Ok(value) => Some(value),
            Err(e) => {
                log::debug!("{}", e);
                None
            }
        }
    }
}
