//! Route filter actions.
//!
//! An action inspects a prefix together with the path attributes of a route and decides
//! whether the route propagates. Path attributes are opaque here; callers choose the type.

mod accept;

pub use accept::AcceptAction;

use crate::models::Prefix;

/// A single step of a route filter.
///
/// `apply` returns the propagate decision and the (possibly rewritten) path attributes.
/// New kinds of action are new implementors of this trait.
pub trait Action<P> {
    fn apply(&self, prefix: &Prefix, path: P) -> (bool, P);
}
