//! Inputs that may be fixed values or live sources.

use std::fmt;
use std::rc::Rc;

use super::observable::Observable;

/// A value that is either fixed, computed on demand, or observable.
///
/// Consumers only call [`Source::read`]. Whether a source can be *watched*
/// is a separate question answered by [`Source::as_observable`]: getters
/// are read fresh each time but produce no change notifications.
pub enum Source<T> {
    /// A plain value.
    Static(T),
    /// A function returning the current value.
    Getter(Rc<dyn Fn() -> T>),
    /// A cell that notifies on change.
    Observable(Observable<T>),
}

impl<T: Clone + PartialEq + 'static> Source<T> {
    /// Wraps a plain value as a [`Source::Static`].
    pub fn fixed(value: T) -> Self {
        Source::Static(value)
    }

    /// Wraps a closure as a [`Source::Getter`].
    pub fn getter(f: impl Fn() -> T + 'static) -> Self {
        Source::Getter(Rc::new(f))
    }

    /// The current value.
    pub fn read(&self) -> T {
        match self {
            Source::Static(value) => value.clone(),
            Source::Getter(f) => f(),
            Source::Observable(cell) => cell.get(),
        }
    }

    /// The underlying cell, if this source can be watched.
    pub fn as_observable(&self) -> Option<&Observable<T>> {
        match self {
            Source::Observable(cell) => Some(cell),
            _ => None,
        }
    }
}

impl<T: Clone> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Static(value) => Source::Static(value.clone()),
            Source::Getter(f) => Source::Getter(Rc::clone(f)),
            Source::Observable(cell) => Source::Observable(cell.clone()),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Static(value) => f.debug_tuple("Static").field(value).finish(),
            Source::Getter(_) => f.write_str("Getter(..)"),
            Source::Observable(cell) => f.debug_tuple("Observable").field(cell).finish(),
        }
    }
}

impl<T: Default> Default for Source<T> {
    fn default() -> Self {
        Source::Static(T::default())
    }
}

impl<T> From<Observable<T>> for Source<T> {
    fn from(cell: Observable<T>) -> Self {
        Source::Observable(cell)
    }
}
