//! Debug-only structural assertion helpers.
//!
//! Backends use these to keep storage invariants explicit while release
//! builds remain unaffected.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn invariant_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}
