//! Typed errors for the evaluation core.
//!
//! Failures are structured, never generic: either an operation returns a
//! complete result for the given bound, or it returns one of these and no
//! output at all.

use thiserror::Error;

/// Enumeration would hold more live partial traces than the caller's cap.
///
/// Raised at the first fork where the live count exceeds `max`, before any
/// further expansion. The caller decides whether to retry with a larger cap,
/// skip the tree, or record the failure for that evaluation unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("sequence capacity exceeded: {live} live traces over cap {max}")]
pub struct CapacityExceeded {
    /// Live partial-trace count at the fork that tripped the cap.
    pub live: usize,
    /// The caller-supplied cap.
    pub max: usize,
}

/// A tree violated a structural invariant at the construction boundary.
/// Never raised mid-computation; core algorithms only see validated trees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedTree {
    #[error("try/catch node has no handlers")]
    NoHandlers,
}
