//! The Converter trait.

use std::borrow::Cow;
use std::marker::PhantomData;
use std::ops::Deref;

use nodepath_core::Node;

/// Coerces an untyped node into `Output`, or reports that it can't.
///
/// Converters never fail loudly: a node of the wrong shape or with
/// unparseable content yields `None`. The registry keys converters by
/// `Output`, so there is at most one converter per target type.
pub trait Converter: Send + Sync + 'static {
    type Output: 'static;

    fn convert(&self, node: &Node) -> Option<Self::Output>;

    /// Like `convert`, but may hand back a reference into `node`.
    ///
    /// Converters whose output already lives inside the node (maps, lists)
    /// override this so callers walking a tree don't copy subtrees.
    fn convert_ref<'a>(&self, node: &'a Node) -> Option<Converted<'a, Self::Output>> {
        self.convert(node).map(Converted::Owned)
    }
}

// A converter handed back by `ConverterRegistry::register` can be
// registered again as is.
impl<T: 'static> Converter for Box<dyn Converter<Output = T>> {
    type Output = T;

    fn convert(&self, node: &Node) -> Option<T> {
        (**self).convert(node)
    }

    fn convert_ref<'a>(&self, node: &'a Node) -> Option<Converted<'a, T>> {
        (**self).convert_ref(node)
    }
}

/// A conversion result that is either borrowed from the source node or
/// freshly built.
#[derive(Debug, PartialEq)]
pub enum Converted<'a, T> {
    Borrowed(&'a T),
    Owned(T),
}

impl<T: Clone> Converted<'_, T> {
    pub fn into_owned(self) -> T {
        match self {
            Converted::Borrowed(value) => value.clone(),
            Converted::Owned(value) => value,
        }
    }
}

impl<T> Deref for Converted<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Converted::Borrowed(value) => value,
            Converted::Owned(value) => value,
        }
    }
}

impl<'a, T: Clone> From<Converted<'a, T>> for Cow<'a, T> {
    fn from(converted: Converted<'a, T>) -> Self {
        match converted {
            Converted::Borrowed(value) => Cow::Borrowed(value),
            Converted::Owned(value) => Cow::Owned(value),
        }
    }
}

/// A converter built from a closure. See `ConverterRegistry::register_fn`.
pub struct FnConverter<T, F> {
    f: F,
    _output: PhantomData<fn() -> T>,
}

impl<T, F> FnConverter<T, F>
where
    T: 'static,
    F: Fn(&Node) -> Option<T> + Send + Sync + 'static,
{
    pub fn new(f: F) -> Self {
        Self {
            f,
            _output: PhantomData,
        }
    }
}

impl<T, F> Converter for FnConverter<T, F>
where
    T: 'static,
    F: Fn(&Node) -> Option<T> + Send + Sync + 'static,
{
    type Output = T;

    fn convert(&self, node: &Node) -> Option<T> {
        (self.f)(node)
    }
}
