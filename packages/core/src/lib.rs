//! Core nodepath types.
//!
//! - `Node`: an untyped tree of maps, lists and scalars, as produced by
//!   parsing JSON/YAML-like data into generic containers
//! - `DotPath`: a validated `.`-separated path such as `a.b.list[-1].c`
//! - `Segment`: one path token classified as a plain key or a list index
//!
//! Traversal and typed conversion live in `nodepath-extract` and
//! `nodepath-convert`; this crate only defines the shapes they agree on.
//!
//! # Example
//!
//! ```rust
//! use nodepath_core::{dot_path, Node, Segment};
//!
//! let path = dot_path!("servers[-1].port");
//! let first = path.segments().next().unwrap();
//! assert_eq!(first, Segment::Indexed { key: "servers", index: -1 });
//! assert!(Node::NULL.is_null());
//! ```

pub mod grammar;
mod node;
mod path;

pub use node::{List, Map, Node};
pub use path::{resolve_index, DotPath, PathError, Segment};
