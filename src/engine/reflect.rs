//! Pronoun/verb reflection.
//!
//! Text captured from the user is echoed back from the other side of the
//! conversation: "my mother hates me" becomes "your mother hates you".

use std::collections::{BTreeMap, HashMap};

/// Word-for-word substitution table applied to captured fragments.
#[derive(Debug, Clone, Default)]
pub struct Reflector {
    map: HashMap<String, String>,
}

impl Reflector {
    /// Build a reflector from a lowercase word -> replacement table.
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs.into_iter().map(|(k, v)| (k.into().to_lowercase(), v.into())).collect();
        Reflector { map }
    }

    /// The reflection table of the built-in English script.
    pub fn english() -> Self {
        Self::from(&crate::english_script().reflections)
    }

    /// Lowercase `text`, split it on whitespace, replace every token found in
    /// the table and rejoin with single spaces.
    pub fn reflect(&self, text: &str) -> String {
        text.to_lowercase()
            .split_whitespace()
            .map(|token| self.map.get(token).map(String::as_str).unwrap_or(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl From<&BTreeMap<String, String>> for Reflector {
    fn from(table: &BTreeMap<String, String>) -> Self {
        Self::new(table.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_core_pairs() {
        let r = Reflector::english();
        assert_eq!(r.reflect("my"), "your");
        assert_eq!(r.reflect("your"), "my");
        assert_eq!(r.reflect("i am happy"), "you are happy");
    }

    #[test]
    fn unknown_tokens_pass_through_and_whitespace_collapses() {
        let r = Reflector::new([("i", "you")]);
        assert_eq!(r.reflect("  I   like\tcake "), "you like cake");
        assert_eq!(r.reflect(""), "");
    }

    #[test]
    fn double_reflection_is_not_required_to_round_trip() {
        let r = Reflector::english();
        let once = r.reflect("i am happy");
        // "you" maps to "I", "are" maps back to "am".
        assert_eq!(r.reflect(&once), "I am happy");
        assert_eq!(r.reflect("me"), "you");
        assert_eq!(r.reflect(&r.reflect("me")), "I");
    }
}
