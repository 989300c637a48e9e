//! Error type shared by script loading, rule compilation and conversation turns.
//!
//! Almost every variant describes a defect in the rule *data* rather than a
//! problem with user input: a turn only fails when the script itself is
//! malformed (a redirect into nowhere, a placeholder that points past the
//! pattern's groups, a generic table without a catch-all, ...).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("rule '{rule}' pattern #{index} does not compile: {source}")]
    InvalidPattern {
        rule: String,
        index: usize,
        #[source]
        source: Box<regex::Error>,
    },

    #[error("rule '{0}' is defined more than once")]
    DuplicateRule(String),

    #[error("rule '{0}' has no patterns")]
    EmptyRule(String),

    #[error("rule '{rule}' has {count} patterns (limit is {limit})")]
    TooManyPatterns { rule: String, count: usize, limit: usize },

    #[error("rule '{rule}' pattern #{pattern} has no responses")]
    EmptyResponses { rule: String, pattern: usize },

    #[error("the generic table is empty")]
    EmptyGenericTable,

    #[error("rule '{rule}' pattern #{pattern} redirects to unknown rule '{target}'")]
    UnresolvedRedirect { rule: String, pattern: usize, target: String },

    #[error("redirect chain exceeded the hop limit: {}", chain.join(" -> "))]
    RedirectCycle { chain: Vec<String> },

    #[error("rule '{from}' redirects to '{target}', but no pattern of '{target}' matches the input")]
    RedirectUnmatched { from: String, target: String },

    #[error("no generic pattern matches {input:?} and the memory queue is empty")]
    EmptyFallback { input: String },

    #[error("rule '{rule}' pattern #{pattern} uses {{{index}}} but the pattern has {groups} capture group(s)")]
    Placeholder { rule: String, pattern: usize, index: usize, groups: usize },

    #[error("rule '{rule}' pattern #{pattern}: capture group {group} did not participate in the match")]
    MissingCapture { rule: String, pattern: usize, group: usize },

    #[error("invalid script: {0}")]
    Script(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
