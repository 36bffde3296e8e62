//! Serde Integration for nodepath
//!
//! - `json_to_node` / `node_to_json`: move trees between `serde_json::Value`
//!   and `Node`
//! - `from_node` / `to_node`: Node <-> any serde type
//! - `SerdeConverter`: plug any `DeserializeOwned` type into a
//!   `ConverterRegistry`, so it can be extracted by path like a built-in
//! - `parse_json`: JSON text straight to a root `Map`
//!
//! # Example
//!
//! ```rust
//! use nodepath_convert::ConverterRegistry;
//! use nodepath_serde::parse_json;
//!
//! let root = parse_json(r#"{"retries": "3"}"#).unwrap();
//! let registry = ConverterRegistry::new();
//! assert_eq!(registry.convert::<i64>(&root["retries"]), Some(3));
//! ```

mod convert;
mod converter;
mod error;

pub use convert::{from_node, json_to_node, node_to_json, parse_json, to_node};
pub use converter::SerdeConverter;
pub use error::Error;
