//! Typed extraction along dot paths.

use nodepath_convert::ConverterRegistry;
use nodepath_core::{DotPath, Map, Node};

use crate::chain::Chain;
use crate::walk::walk;

/// Extracts typed values from a map tree by dot path.
///
/// An `Extractor` is a borrowed view of a `ConverterRegistry`; it is `Copy`
/// and can be shared between threads freely.
///
/// # Example
///
/// ```rust
/// use nodepath_convert::ConverterRegistry;
/// use nodepath_core::{Map, Node};
/// use nodepath_extract::Extractor;
///
/// let mut server = Map::new();
/// server.insert("port".to_string(), Node::from("8080"));
/// let mut root = Map::new();
/// root.insert("servers".to_string(), Node::Array(vec![Node::Map(server)]));
///
/// let registry = ConverterRegistry::new();
/// let extractor = Extractor::new(&registry);
/// assert_eq!(extractor.extract::<i32>(&root, "servers[-1].port"), Some(8080));
/// assert_eq!(extractor.extract_or::<i32>(&root, "servers[1].port", 80), 80);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Extractor<'r> {
    registry: &'r ConverterRegistry,
}

impl<'r> Extractor<'r> {
    pub fn new(registry: &'r ConverterRegistry) -> Self {
        Self { registry }
    }

    /// An extractor over the process-wide registry.
    pub fn global() -> Extractor<'static> {
        Extractor::new(ConverterRegistry::global())
    }

    pub fn registry(&self) -> &'r ConverterRegistry {
        self.registry
    }

    /// The node at `path`, without conversion.
    ///
    /// `None` for invalid paths (empty, blank, or with a blank token) and
    /// whenever the walk fails.
    pub fn extract_node<'n>(&self, root: &'n Map, path: &str) -> Option<&'n Node> {
        let path = match DotPath::parse(path) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("Rejected dot path: {}", e);
                return None;
            }
        };
        walk(root, &path)
    }

    /// The value at `path` converted to `T`.
    pub fn extract<T: 'static>(&self, root: &Map, path: &str) -> Option<T> {
        let node = self.extract_node(root, path)?;
        self.registry.convert(node)
    }

    /// Like `extract`, substituting `default` when there is no result.
    pub fn extract_or<T: 'static>(&self, root: &Map, path: &str, default: T) -> T {
        self.extract(root, path).unwrap_or(default)
    }

    /// Typed extraction with an already tokenized path.
    pub fn extract_path<T: 'static>(&self, root: &Map, path: &DotPath) -> Option<T> {
        let node = walk(root, path)?;
        self.registry.convert(node)
    }

    /// Start a chained, level-by-level accessor.
    ///
    /// Create one chain per traversal; chains are cheap.
    pub fn chain<'n>(&self) -> Chain<'r, 'n> {
        Chain::new(self.registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collection_literals::btree;
    use nodepath_core::{dot_path, List};

    fn scenario() -> Map {
        btree! {
            "a".to_string() => Node::Map(btree! {
                "b".to_string() => Node::Array(vec![
                    Node::Map(btree! { "c".to_string() => Node::from(5) }),
                    Node::Map(btree! { "c".to_string() => Node::from(7) }),
                ]),
            }),
            "flag".to_string() => Node::from("yes"),
            "count".to_string() => Node::from("007"),
        }
    }

    #[test]
    fn extracts_typed_values() {
        let registry = ConverterRegistry::new();
        let extractor = Extractor::new(&registry);
        let root = scenario();

        assert_eq!(extractor.extract::<i32>(&root, "a.b[1].c"), Some(7));
        assert_eq!(extractor.extract::<i64>(&root, "a.b[-1].c"), Some(7));
        assert_eq!(extractor.extract::<i32>(&root, "a.b[2].c"), None);
        assert_eq!(extractor.extract::<bool>(&root, "flag"), Some(true));
        assert_eq!(extractor.extract::<i32>(&root, "count"), Some(7));
        assert_eq!(
            extractor.extract::<String>(&root, "a.b[0].c"),
            Some("5".to_string())
        );
        assert_eq!(extractor.extract::<List>(&root, "a.b").map(|l| l.len()), Some(2));
    }

    #[test]
    fn invalid_paths_are_absent() {
        let registry = ConverterRegistry::new();
        let extractor = Extractor::new(&registry);
        let root = scenario();

        for path in ["", " ", "a..b", ".a", "a.", "a. .b", "."] {
            assert_eq!(extractor.extract::<Node>(&root, path), None, "{path:?}");
        }
    }

    #[test]
    fn wrong_type_is_absent() {
        let registry = ConverterRegistry::new();
        let extractor = Extractor::new(&registry);
        let root = scenario();

        assert_eq!(extractor.extract::<bool>(&root, "a.b[0].c"), None);
        assert_eq!(extractor.extract::<Map>(&root, "a.b"), None);
        assert_eq!(extractor.extract::<f64>(&root, "a.b[0].c"), None);
    }

    #[test]
    fn default_substitution() {
        let registry = ConverterRegistry::new();
        let extractor = Extractor::new(&registry);
        let root = scenario();

        assert_eq!(extractor.extract_or(&root, "a.b[1].c", 0i32), 7);
        assert_eq!(extractor.extract_or(&root, "a.b[9].c", -1i32), -1);
        assert_eq!(extractor.extract_or(&root, "a..b", -1i32), -1);
        assert!(!extractor.extract_or(&root, "flag.x", false));
    }

    #[test]
    fn no_break_space_keys_are_found() {
        let registry = ConverterRegistry::new();
        let extractor = Extractor::new(&registry);
        let root = btree! {
            "a".to_string() => Node::Map(btree! {
                "\u{a0}".to_string() => Node::from(1),
            }),
        };

        assert_eq!(extractor.extract::<i32>(&root, "a.\u{a0}"), Some(1));
        assert_eq!(extractor.extract::<i32>(&root, "a. "), None);
    }

    #[test]
    fn extract_node_borrows() {
        let registry = ConverterRegistry::new();
        let extractor = Extractor::new(&registry);
        let root = scenario();

        let node = extractor.extract_node(&root, "a.b[0]").unwrap();
        assert!(std::ptr::eq(node, &root["a"].as_map().unwrap()["b"].as_array().unwrap()[0]));
    }

    #[test]
    fn extract_path_uses_parsed_path() {
        let registry = ConverterRegistry::new();
        let extractor = Extractor::new(&registry);
        let root = scenario();

        let path = dot_path!("a.b[-2].c");
        assert_eq!(extractor.extract_path::<i16>(&root, &path), Some(5));
    }

    #[test]
    fn round_trip_deep_structure() {
        let registry = ConverterRegistry::new();
        let extractor = Extractor::new(&registry);

        let mut root = Map::new();
        root.insert(
            "l1".to_string(),
            Node::Map(btree! {
                "l2".to_string() => Node::Array(vec![
                    Node::Null,
                    Node::Map(btree! {
                        "l3".to_string() => Node::Map(btree! {
                            "value".to_string() => Node::from(2.5),
                        }),
                    }),
                ]),
            }),
        );

        assert_eq!(extractor.extract::<f64>(&root, "l1.l2[1].l3.value"), Some(2.5));
        assert_eq!(extractor.extract::<f64>(&root, "l1.l2[0].l3.value"), None);
    }

    #[test]
    fn custom_registry_is_honored() {
        let mut registry = ConverterRegistry::new();
        registry.register_fn(|node: &Node| node.as_str().map(str::len));
        let extractor = Extractor::new(&registry);
        let root = scenario();

        assert_eq!(extractor.extract::<usize>(&root, "flag"), Some(3));
    }
}
