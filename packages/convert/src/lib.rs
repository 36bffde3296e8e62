//! Typed conversion of untyped nodes.
//!
//! A `ConverterRegistry` maps a Rust target type to a `Converter` that
//! coerces a `Node` into it on a best-effort basis. Coercion that doesn't
//! apply yields `None`, never an error or a panic.
//!
//! Built-in targets: `bool`, `char`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64`,
//! `String`, `Map`, `List` and `Node`. Any other type can be added with
//! `register`, and built-ins can be replaced the same way.
//!
//! # Example
//!
//! ```rust
//! use nodepath_convert::{Converter, ConverterRegistry};
//! use nodepath_core::Node;
//!
//! struct Port(u16);
//!
//! struct PortConverter;
//!
//! impl Converter for PortConverter {
//!     type Output = Port;
//!
//!     fn convert(&self, node: &Node) -> Option<Port> {
//!         match node {
//!             Node::Integer(i) => u16::try_from(*i).ok().map(Port),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let mut registry = ConverterRegistry::new();
//! registry.register(PortConverter);
//! assert_eq!(registry.convert::<Port>(&Node::Integer(8080)).map(|p| p.0), Some(8080));
//! ```

pub mod builtin;
mod converter;
mod error;
mod registry;

pub use converter::{Converted, Converter, FnConverter};
pub use error::RegistryError;
pub use registry::{BoxedConverter, ConverterRegistry};

// Re-export core types for convenience
pub use nodepath_core::{List, Map, Node};
