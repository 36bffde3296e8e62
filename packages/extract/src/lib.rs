//! Dot-path extraction of typed values from untyped node trees.
//!
//! `Extractor` tokenizes a dot path, walks a `Map` tree token by token
//! (resolving `key[index]` tokens against lists, with negative indices
//! counting from the end) and hands the node it lands on to a
//! `ConverterRegistry`. `Chain` is a builder-style alternative that descends
//! one map level at a time.
//!
//! Nothing here fails loudly: invalid paths, missing keys, non-container
//! intermediates, bad indices and unconvertible values all come back as
//! `None`. Bad index tokens and unknown target types are logged.
//!
//! # Example
//!
//! ```rust
//! use nodepath_convert::ConverterRegistry;
//! use nodepath_core::{Map, Node};
//! use nodepath_extract::Extractor;
//!
//! let mut root = Map::new();
//! root.insert("ports".to_string(), Node::from(vec!["80", "443"]));
//! let mut outer = Map::new();
//! outer.insert("web".to_string(), Node::Map(root));
//!
//! let registry = ConverterRegistry::new();
//! let extractor = Extractor::new(&registry);
//! assert_eq!(extractor.extract::<i32>(&outer, "web.ports[-1]"), Some(443));
//! assert_eq!(extractor.extract::<i32>(&outer, "web..ports"), None);
//! ```

mod chain;
mod extractor;
mod walk;

pub use chain::Chain;
pub use extractor::Extractor;
pub use walk::{index_into, walk};

// Re-export lower layers for convenience
pub use nodepath_convert::{Converter, ConverterRegistry};
pub use nodepath_core::{DotPath, List, Map, Node, PathError};
