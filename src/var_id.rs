//! Allocates the unique identities that back logic-variable and cut equality.
//!
//! Two `Variable`s (or two `Cut`s) are the same logical entity iff they
//! carry the same ID, never by comparing display names. IDs are handed out
//! from a single process-global counter, matching Suiron's `LOGIC_VAR_ID`
//! counter but without the `unsafe` `static mut` — `AtomicUsize` gives the
//! same "one counter for the whole process" behaviour safely.

use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// A unique identity for a logic variable or a cut barrier.
///
/// ID `0` is reserved and never handed out by [`next_id`]; it exists so
/// that placeholder, not-yet-relabelled values can be detected defensively.
pub type Id = usize;

/// Allocates a fresh, never-before-returned ID.
pub fn next_id() -> Id {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
