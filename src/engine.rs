//! Matching and selection engine.
//!
//! This module is the *internal entry point* for everything that happens
//! between a loaded [`Script`](crate::Script) and a reply string. The public
//! surface (`Eliza`, `Options`, `Reply`) lives in `src/api.rs` and delegates here.
//!
//! ## How the parts work together
//!
//! ```text
//! Script ── compile (compiled_rules.rs) ──┬─ Registry (registry.rs)
//!                                          │    rules sorted by rank, word index
//!                                          ├─ GenericTable
//!                                          └─ Reflector (reflect.rs)
//!
//! input ── Statement::scan (trigger.rs) ──▶ truncated text + normalized words
//!                                          │
//!                                          v
//!                          Conversation::turn (conversation.rs)
//!                            - candidate rules in rank order
//!                            - first rule with a matching pattern wins
//!                            - select + redirects + format (resolve.rs)
//!                            - memory queue (memory.rs)
//!                            - generic fallback
//!                                          │
//!                                          v
//!                               Turn { text, source, metrics }
//! ```
//!
//! ## Responsibilities by module
//!
//! - `compiled_rules.rs`: validates a `Script` and turns it into `Rule`s and a
//!   `GenericTable` with compiled regexes and parsed templates.
//! - `registry.rs`: owns the rules in descending rank order; lookup by name and
//!   by trigger word.
//! - `trigger.rs`: input truncation and keyword tokenization.
//! - `resolve.rs`: least-used selection, redirect chains and template rendering.
//! - `memory.rs`: FIFO of replies remembered from high-rank matches.
//! - `conversation.rs`: one full turn.
//! - `metrics.rs`: per-turn counters and timing for verbose replies.
//! - `reflect.rs`: pronoun/verb reflection of echoed text.
//!
//! ## Debugging
//!
//! The engine emits `tracing` events (`debug` for decisions, `trace` for
//! individual pattern attempts). The CLI honours `ROGERIAN_LOG`, e.g.
//! `ROGERIAN_LOG=rogerian=trace`.

#[path = "engine/compiled_rules.rs"]
mod compiled_rules;
#[path = "engine/conversation.rs"]
mod conversation;
#[path = "engine/memory.rs"]
mod memory;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/reflect.rs"]
mod reflect;
#[path = "engine/registry.rs"]
mod registry;
#[path = "engine/resolve.rs"]
mod resolve;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use compiled_rules::compile;
pub use compiled_rules::Policy;
pub(crate) use conversation::{Conversation, Source};
pub use metrics::TurnMetrics;
pub use reflect::Reflector;
pub(crate) use trigger::normalize_trigger;
