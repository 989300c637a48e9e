//! Turn metrics.
//!
//! A small struct used to observe what a turn did: how many rules were
//! triggered by the input, how many patterns were tried before one matched,
//! and how many redirects were followed. Collected on every turn (it is just a
//! few counters) and surfaced through `Eliza::respond_verbose`.

use std::time::Duration;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TurnMetrics {
    /// Total elapsed time for the turn.
    pub total: Duration,
    /// Rules whose name or synonym appeared in the input.
    pub candidates: usize,
    /// Candidate rules tried before one matched (or all of them).
    pub rules_tried: usize,
    /// Keyword and generic patterns evaluated against the input.
    pub patterns_tried: usize,
    /// Redirects followed while resolving the reply.
    pub redirects: usize,
}
