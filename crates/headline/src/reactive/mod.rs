#![forbid(unsafe_code)]

//! Single-threaded reactive plumbing for the hooks.
//!
//! - [`Observable`]: shared value cell with ordered change notification
//! - [`Subscription`]: RAII guard, dropping it unsubscribes
//! - [`Source`]: a fixed value, a getter, or an observable, read uniformly
//!
//! Nothing here knows about headings; the hooks build on these types.

mod observable;
mod source;

pub use observable::{Observable, Subscription};
pub use source::Source;
