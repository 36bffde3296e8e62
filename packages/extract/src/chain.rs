//! Chained, one-level-at-a-time access.

use std::borrow::Cow;

use nodepath_convert::ConverterRegistry;
use nodepath_core::{List, Map, Node};

static MISSING: Node = Node::Null;

#[derive(Clone, Debug)]
enum Cursor<'n> {
    Unset,
    Broken { key: String },
    At(Cow<'n, Map>),
}

/// Descends a map tree one key at a time and ends with a typed read.
///
/// `map_node` moves down a level through the registry's `Map` converter.
/// If that fails, or `from` was never called, the chain is *broken*: every
/// terminal read returns `None` (or the default), and `is_broken` reports
/// it. A broken chain is never confused with a valid empty map.
///
/// Methods take `&mut self`; give each traversal its own chain.
///
/// # Example
///
/// ```rust
/// use nodepath_convert::ConverterRegistry;
/// use nodepath_core::{Map, Node};
/// use nodepath_extract::Extractor;
///
/// let mut db = Map::new();
/// db.insert("port".to_string(), Node::from("5432"));
/// let mut root = Map::new();
/// root.insert("db".to_string(), Node::Map(db));
///
/// let registry = ConverterRegistry::new();
/// let extractor = Extractor::new(&registry);
/// let mut chain = extractor.chain();
/// assert_eq!(chain.from(&root).map_node("db").i32_value("port"), 5432);
/// assert_eq!(chain.from(&root).map_node("cache").i32_value("port"), 0);
/// assert!(chain.is_broken());
/// ```
#[derive(Clone, Debug)]
pub struct Chain<'r, 'n> {
    registry: &'r ConverterRegistry,
    cursor: Cursor<'n>,
}

impl<'r, 'n> Chain<'r, 'n> {
    pub fn new(registry: &'r ConverterRegistry) -> Self {
        Self {
            registry,
            cursor: Cursor::Unset,
        }
    }

    /// Set (or reset) the map this chain reads from.
    pub fn from(&mut self, root: &'n Map) -> &mut Self {
        self.cursor = Cursor::At(Cow::Borrowed(root));
        self
    }

    /// Descend into the map stored under `key`.
    ///
    /// Breaks the chain if there is no current map or `key` doesn't hold
    /// something the `Map` converter accepts. Once broken, stays broken
    /// (recording the first failing key) until `from` is called again.
    pub fn map_node(&mut self, key: &str) -> &mut Self {
        if self.is_broken() {
            return self;
        }

        // Borrowed levels stay borrowed from the caller's tree; only a map a
        // custom converter built itself is carried as an owned copy.
        let cursor = std::mem::replace(&mut self.cursor, Cursor::Unset);
        let next: Option<Cow<'n, Map>> = match cursor {
            Cursor::At(Cow::Borrowed(map)) => self
                .registry
                .convert_ref::<Map>(map.get(key).unwrap_or(&MISSING))
                .map(Cow::from),
            Cursor::At(Cow::Owned(map)) => self
                .registry
                .convert::<Map>(map.get(key).unwrap_or(&MISSING))
                .map(Cow::Owned),
            Cursor::Unset | Cursor::Broken { .. } => None,
        };

        self.cursor = match next {
            Some(map) => Cursor::At(map),
            None => {
                log::debug!("Chain broken at map node {:?}", key);
                Cursor::Broken {
                    key: key.to_string(),
                }
            }
        };
        self
    }

    /// The map the chain currently points at, if it isn't broken or unset.
    pub fn current(&self) -> Option<&Map> {
        match &self.cursor {
            Cursor::At(map) => Some(&**map),
            Cursor::Unset | Cursor::Broken { .. } => None,
        }
    }

    pub fn is_broken(&self) -> bool {
        matches!(self.cursor, Cursor::Broken { .. })
    }

    /// The key at which `map_node` first failed.
    pub fn broken_at(&self) -> Option<&str> {
        match &self.cursor {
            Cursor::Broken { key } => Some(key),
            Cursor::Unset | Cursor::At(_) => None,
        }
    }

    /// Terminal read: the value under `key` converted to `T`.
    pub fn value<T: 'static>(&self, key: &str) -> Option<T> {
        let map = self.current()?;
        self.registry.convert(map.get(key).unwrap_or(&Node::NULL))
    }

    /// Terminal read substituting `default` when there is no result.
    pub fn value_or<T: 'static>(&self, key: &str, default: T) -> T {
        self.value(key).unwrap_or(default)
    }

    // Zero-value readers. None of these report absence.

    pub fn bool_value(&self, key: &str) -> bool {
        self.value_or(key, false)
    }

    pub fn char_value(&self, key: &str) -> char {
        self.value_or(key, '\0')
    }

    pub fn i8_value(&self, key: &str) -> i8 {
        self.value_or(key, 0)
    }

    pub fn i16_value(&self, key: &str) -> i16 {
        self.value_or(key, 0)
    }

    pub fn i32_value(&self, key: &str) -> i32 {
        self.value_or(key, 0)
    }

    pub fn i64_value(&self, key: &str) -> i64 {
        self.value_or(key, 0)
    }

    pub fn f32_value(&self, key: &str) -> f32 {
        self.value_or(key, 0.0)
    }

    pub fn f64_value(&self, key: &str) -> f64 {
        self.value_or(key, 0.0)
    }

    pub fn string_value(&self, key: &str) -> String {
        self.value(key).unwrap_or_default()
    }

    pub fn map_value(&self, key: &str) -> Map {
        self.value(key).unwrap_or_default()
    }

    pub fn list_value(&self, key: &str) -> List {
        self.value(key).unwrap_or_default()
    }
}
