//! Conversation turns.
//!
//! This module is the operational core of the engine. A `Conversation` owns the
//! registry, the generic table, the reflector and the memory queue of one
//! session, and `turn` runs a single input through them:
//!
//! ```text
//! (0) scan          -> truncated match text + normalized words   (trigger.rs)
//! (1) candidates    -> rules triggered by the words, rank order  (registry.rs)
//! (2) match         -> first candidate with a matching pattern wins;
//!                      candidates whose patterns all fail are skipped
//! (3a) keyword hit  -> select/redirect/render                   (resolve.rs)
//!                      rank > threshold: also queue the reply     (memory.rs)
//! (3b) no hit       -> oldest remembered reply, else generic table
//! ```
//!
//! Nothing in a turn suspends or shares state; `turn` takes `&mut self`, so two
//! turns can never interleave on one conversation. Independent conversations
//! are built from independent compilations.

use super::compiled_rules::{Compiled, Policy};
use super::memory::Memory;
use super::metrics::TurnMetrics;
use super::reflect::Reflector;
use super::registry::Registry;
use super::resolve::{resolve_generic, resolve_keyword};
use super::trigger::Statement;
use crate::error::{Error, Result};
use crate::{GenericTable, Options, Rule};
use std::time::Instant;

/// Where a reply came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    /// A keyword rule matched. `chain` starts with `rule` and ends with the rule
    /// whose template was rendered; `pattern`/`variant` refer to that last rule.
    Keyword { rule: String, pattern: usize, variant: usize, chain: Vec<String>, memorized: bool },
    /// Replayed from the memory queue.
    Memory,
    /// Generic table entry `entry`, variant `variant`.
    Generic { entry: usize, variant: usize },
}

/// Result of one turn.
#[derive(Debug, Clone)]
pub(crate) struct Turn {
    pub text: String,
    pub source: Source,
    pub metrics: TurnMetrics,
}

#[derive(Debug, Clone)]
pub(crate) struct Conversation {
    registry: Registry,
    generic: GenericTable,
    reflector: Reflector,
    memory: Memory,
    options: Options,
}

impl Conversation {
    pub fn new(compiled: Compiled, options: Options) -> Self {
        let Compiled { registry, generic, reflector } = compiled;
        Conversation { registry, generic, reflector, memory: Memory::default(), options }
    }

    /// Run one turn: pick a reply for `input`, updating usage counters and the
    /// memory queue.
    pub fn turn(&mut self, input: &str) -> Result<Turn> {
        let start = Instant::now();
        let statement = Statement::scan(input);
        let mut metrics = TurnMetrics::default();

        let candidates = self.registry.candidates(&statement);
        metrics.candidates = candidates.len();

        let mut hit = None;
        for id in candidates {
            metrics.rules_tried += 1;
            let rule = self.registry.rule(id);
            match rule.first_match(&statement.text) {
                Some((pattern, captures)) => {
                    metrics.patterns_tried += pattern + 1;
                    tracing::trace!(rule = %rule.name, pattern, "rule matched");
                    hit = Some((id, pattern, captures));
                    break;
                }
                None => {
                    metrics.patterns_tried += rule.patterns.len();
                    tracing::trace!(rule = %rule.name, "triggered but no pattern matched");
                }
            }
        }

        let (text, source) = match hit {
            Some(matched) => {
                let rule = self.registry.rule(matched.0);
                let (name, rank) = (rule.name.clone(), rule.rank);
                let resolved = resolve_keyword(
                    &mut self.registry,
                    &self.reflector,
                    &statement.text,
                    matched,
                    self.options.max_redirect_hops,
                )?;
                metrics.patterns_tried += resolved.patterns_tried;
                metrics.redirects = resolved.chain.len().saturating_sub(1);

                let memorized =
                    self.options.policy.contains(Policy::MEMORIZE) && rank > self.options.memory_rank_threshold;
                if memorized {
                    tracing::debug!(rule = %name, rank, queued = self.memory.len() + 1, "remembering reply");
                    self.memory.remember(resolved.text.clone());
                }

                let source = Source::Keyword {
                    rule: name,
                    pattern: resolved.pattern,
                    variant: resolved.variant,
                    chain: resolved.chain,
                    memorized,
                };
                (resolved.text, source)
            }
            None => match self.memory.recall() {
                Some(text) => {
                    tracing::debug!(left = self.memory.len(), "no keyword matched, replaying memory");
                    (text, Source::Memory)
                }
                None => {
                    let Some((entry, captures)) = self.generic.first_match(&statement.text) else {
                        metrics.patterns_tried += self.generic.entries.len();
                        return Err(Error::EmptyFallback { input: input.to_string() });
                    };
                    metrics.patterns_tried += entry + 1;
                    let (variant, text) = resolve_generic(&mut self.generic, &self.reflector, entry, &captures)?;
                    tracing::debug!(entry, variant, "no keyword matched, using generic table");
                    (text, Source::Generic { entry, variant })
                }
            },
        };

        metrics.total = start.elapsed();
        Ok(Turn { text, source, metrics })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn rules(&self) -> &[Rule] {
        self.registry.by_rank_descending()
    }

    pub fn generic(&self) -> &GenericTable {
        &self.generic
    }

    pub fn memory(&self) -> impl Iterator<Item = &str> {
        self.memory.iter()
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Zero every usage counter and forget remembered replies.
    pub fn reset(&mut self) {
        self.registry.reset();
        self.generic.reset();
        self.memory.clear();
    }
}
