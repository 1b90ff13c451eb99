//! Unconditional accept.

use super::Action;
use crate::models::Prefix;

/// Propagates every route and leaves its path attributes untouched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AcceptAction;

impl<P> Action<P> for AcceptAction {
    fn apply(&self, prefix: &Prefix, path: P) -> (bool, P) {
        log::trace!("accept {prefix}");
        (true, path)
    }
}
