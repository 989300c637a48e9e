//! Script: the configuration payload consumed by the engine.
//!
//! A script bundles everything that is *data* rather than behavior:
//!
//! - the pronoun/verb reflection table,
//! - the generic (fallback) pattern table,
//! - the keyword rule definitions,
//! - a few strings used by interactive front-ends (greeting, farewell, quit words).
//!
//! Scripts are plain `serde` structures so they can be written in Rust (see
//! `src/rules/`, built with the `keyword!` macro) or loaded from JSON:
//!
//! ```text
//! {
//!   "reflections": { "my": "your", "your": "my" },
//!   "generic":  [ { "pattern": "(.*)", "responses": ["Please go on."] } ],
//!   "keywords": [ { "name": "sorry", "rank": 0,
//!                   "patterns": [ { "pattern": "(.*)",
//!                                   "responses": ["Please don't apologise.", { "goto": "what" }] } ] } ]
//! }
//! ```
//!
//! Nothing here is validated; compilation into engine rules (and every check that
//! goes with it) happens in `engine/compiled_rules.rs`.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// A complete rule set plus front-end strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    /// Line printed by interactive front-ends when a session starts.
    #[serde(default)]
    pub greeting: String,
    /// Line printed when the user quits.
    #[serde(default)]
    pub farewell: String,
    /// Inputs (compared case-insensitively, trimmed) that end an interactive session.
    #[serde(default)]
    pub quit_words: Vec<String>,
    /// Lowercase word -> replacement used when echoing captured text.
    #[serde(default)]
    pub reflections: BTreeMap<String, String>,
    /// Fallback patterns, tried in order when no keyword rule matches.
    pub generic: Vec<GenericSpec>,
    /// Keyword rules, in declaration order (ties in rank keep this order).
    pub keywords: Vec<KeywordSpec>,
}

/// One generic (keyword-less) entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericSpec {
    pub pattern: String,
    pub responses: Vec<String>,
}

/// A keyword rule definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSpec {
    pub name: String,
    pub rank: i32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,
    pub patterns: Vec<PatternSpec>,
}

/// A pattern of a keyword rule and its response variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternSpec {
    pub pattern: String,
    pub responses: Vec<ResponseSpec>,
}

/// A response variant as written in a script.
///
/// Plain strings are templates; `{ "goto": "rule" }` defers to another rule. A
/// string consisting of exactly `goto <rule>` is also read as a redirect when
/// the script is compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseSpec {
    Redirect { goto: String },
    Text(String),
}

impl From<&str> for ResponseSpec {
    fn from(text: &str) -> Self {
        ResponseSpec::Text(text.to_string())
    }
}

impl From<String> for ResponseSpec {
    fn from(text: String) -> Self {
        ResponseSpec::Text(text)
    }
}

impl Script {
    /// Parse a script from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON script file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Serialize the script as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// True when `input` is one of the script's quit words.
    pub fn is_quit(&self, input: &str) -> bool {
        let input = input.trim();
        self.quit_words.iter().any(|w| w.eq_ignore_ascii_case(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn responses_accept_strings_and_goto_objects() {
        let script = Script::from_json(
            r#"{
                "generic": [{"pattern": "(.*)", "responses": ["Go on."]}],
                "keywords": [{
                    "name": "who", "rank": 0,
                    "patterns": [{"pattern": "who(.*)", "responses": [{"goto": "what"}, "Who indeed?"]}]
                }]
            }"#,
        )
        .unwrap();

        let responses = &script.keywords[0].patterns[0].responses;
        assert_eq!(responses[0], ResponseSpec::Redirect { goto: "what".to_string() });
        assert_eq!(responses[1], ResponseSpec::Text("Who indeed?".to_string()));
        assert!(script.keywords[0].synonyms.is_empty());
        assert!(script.reflections.is_empty());
    }

    #[test]
    fn json_round_trip_preserves_script() {
        let script = crate::rules::english();
        let json = script.to_json().unwrap();
        assert_eq!(Script::from_json(&json).unwrap(), script);
    }

    #[test]
    fn quit_words_are_case_insensitive() {
        let script = Script { quit_words: vec!["bye".to_string()], ..Script::default() };
        assert!(script.is_quit("  BYE "));
        assert!(!script.is_quit("goodbye"));
    }

    #[test]
    fn malformed_json_is_reported() {
        assert!(matches!(Script::from_json("{\"generic\": 3}"), Err(crate::Error::Script(_))));
    }
}
