//! The converter registry: target type -> converter.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use nodepath_core::Node;

use crate::builtin;
use crate::converter::{Converted, Converter, FnConverter};
use crate::error::RegistryError;

/// A type-erased converter producing `T`, as stored in the registry.
pub type BoxedConverter<T> = Box<dyn Converter<Output = T>>;

struct Entry {
    type_name: &'static str,
    // Always a `BoxedConverter<T>` where `TypeId::of::<T>()` is this entry's key.
    slot: Box<dyn Any + Send + Sync>,
}

static GLOBAL: OnceLock<ConverterRegistry> = OnceLock::new();

/// Maps a target type to the converter that produces it.
///
/// # Lifecycle
///
/// Registration takes `&mut self` and lookups take `&self`, so populating a
/// registry and reading it concurrently cannot overlap: build it on one
/// thread, then share it by reference. No lock is taken on lookup.
///
/// The process-wide registry follows the same rule. `install` hands a fully
/// built registry over once during bootstrap; afterwards it is read-only.
///
/// # Example
///
/// ```rust
/// use nodepath_convert::ConverterRegistry;
/// use nodepath_core::Node;
///
/// let registry = ConverterRegistry::new();
/// assert_eq!(registry.convert::<i32>(&Node::from("007")), Some(7));
/// assert_eq!(registry.convert::<bool>(&Node::from("maybe")), None);
/// assert!(!registry.convert_or::<bool>(&Node::from("maybe"), false));
/// ```
pub struct ConverterRegistry {
    converters: HashMap<TypeId, Entry>,
}

impl ConverterRegistry {
    /// A registry with every built-in converter installed.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        builtin::register_builtins(&mut registry);
        registry
    }

    /// A registry with no converters at all.
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Install or replace the converter for `C::Output`.
    ///
    /// Returns the converter previously registered for the same type, if
    /// any, so callers can delegate to it or put it back later.
    pub fn register<C: Converter>(&mut self, converter: C) -> Option<BoxedConverter<C::Output>> {
        let slot: BoxedConverter<C::Output> = Box::new(converter);
        let previous = self.converters.insert(
            TypeId::of::<C::Output>(),
            Entry {
                type_name: type_name::<C::Output>(),
                slot: Box::new(slot),
            },
        )?;
        previous
            .slot
            .downcast::<BoxedConverter<C::Output>>()
            .ok()
            .map(|slot| *slot)
    }

    /// Install or replace a converter given as a closure.
    pub fn register_fn<T, F>(&mut self, f: F) -> Option<BoxedConverter<T>>
    where
        T: 'static,
        F: Fn(&Node) -> Option<T> + Send + Sync + 'static,
    {
        self.register(FnConverter::new(f))
    }

    /// Remove the converter for `T`, returning whether there was one.
    pub fn unregister<T: 'static>(&mut self) -> bool {
        self.converters.remove(&TypeId::of::<T>()).is_some()
    }

    pub fn contains<T: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Convert `node` into a `T`.
    ///
    /// `None` if no converter is registered for `T` (logged as a warning) or
    /// if the converter can't coerce this node.
    pub fn convert<T: 'static>(&self, node: &Node) -> Option<T> {
        let Some(entry) = self.converters.get(&TypeId::of::<T>()) else {
            log::warn!(
                "No converter registered for {}, returning nothing",
                type_name::<T>()
            );
            return None;
        };

        entry.slot.downcast_ref::<BoxedConverter<T>>()?.convert(node)
    }

    /// Like `convert`, but lets the converter borrow from `node`.
    ///
    /// The built-in `Map`, `List` and `Node` converters answer with
    /// `Converted::Borrowed`; anything else falls back to an owned result.
    pub fn convert_ref<'a, T: 'static>(&self, node: &'a Node) -> Option<Converted<'a, T>> {
        let Some(entry) = self.converters.get(&TypeId::of::<T>()) else {
            log::warn!(
                "No converter registered for {}, returning nothing",
                type_name::<T>()
            );
            return None;
        };

        entry
            .slot
            .downcast_ref::<BoxedConverter<T>>()?
            .convert_ref(node)
    }

    /// Like `convert`, substituting `default` when there is no result.
    pub fn convert_or<T: 'static>(&self, node: &Node, default: T) -> T {
        self.convert(node).unwrap_or(default)
    }

    /// Install `registry` as the process-wide registry.
    ///
    /// Call once during bootstrap, before any thread reads `global()`.
    ///
    /// # Errors
    ///
    /// `RegistryError::AlreadyInstalled` if a registry was installed before,
    /// or if `global()` was already called and fell back to the built-ins.
    pub fn install(registry: ConverterRegistry) -> Result<(), RegistryError> {
        GLOBAL
            .set(registry)
            .map_err(|_| RegistryError::AlreadyInstalled)
    }

    /// The process-wide registry.
    ///
    /// If nothing was installed yet, a built-in registry is installed and
    /// returned.
    pub fn global() -> &'static ConverterRegistry {
        GLOBAL.get_or_init(ConverterRegistry::new)
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConverterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.converters.values().map(|e| e.type_name).collect();
        names.sort_unstable();
        f.debug_struct("ConverterRegistry")
            .field("converters", &names)
            .finish()
    }
}
