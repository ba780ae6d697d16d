//! Internal traversal bookkeeping.
//!
//! This module is intentionally `pub(crate)` so the traversal algorithms can
//! share visited-set handling without exposing it as part of the public API
//! surface.

pub(crate) mod visited;
