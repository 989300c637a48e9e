//! Rule registry.
//!
//! Rules are stored once, sorted by descending rank, and never move afterwards:
//! a `RuleId` is a stable index into that order. Only the usage counters inside
//! each rule change during a conversation.
//!
//! Two indexes are built at construction:
//!
//! - `by_name`: exact rule name -> id, used to follow redirects.
//! - `by_trigger`: normalized name/synonym -> ids in rank order, used to find the
//!   candidate rules for an input.

use super::trigger::Statement;
use crate::error::{Error, Result};
use crate::{Response, Rule, RuleId};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone)]
pub(crate) struct Registry {
    rules: Vec<Rule>,
    by_name: HashMap<String, RuleId>,
    by_trigger: HashMap<String, Vec<RuleId>>,
}

impl Registry {
    /// Sort `rules` by descending rank (stable, so equal ranks keep their
    /// declaration order), index them and check every redirect target.
    pub fn new(mut rules: Vec<Rule>) -> Result<Self> {
        rules.sort_by(|a, b| b.rank.cmp(&a.rank));

        let mut by_name = HashMap::with_capacity(rules.len());
        let mut by_trigger: HashMap<String, Vec<RuleId>> = HashMap::new();
        for (id, rule) in rules.iter().enumerate() {
            if by_name.insert(rule.name.clone(), id).is_some() {
                return Err(Error::DuplicateRule(rule.name.clone()));
            }
            for trigger in rule.triggers() {
                let ids = by_trigger.entry(trigger.to_string()).or_default();
                if ids.last() != Some(&id) {
                    ids.push(id);
                }
            }
        }

        for rule in &rules {
            for (index, entry) in rule.patterns.iter().enumerate() {
                for response in entry.responses.variants() {
                    if let Response::Redirect(target) = response {
                        if !by_name.contains_key(target) {
                            return Err(Error::UnresolvedRedirect {
                                rule: rule.name.clone(),
                                pattern: index,
                                target: target.clone(),
                            });
                        }
                    }
                }
            }
        }

        Ok(Registry { rules, by_name, by_trigger })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id]
    }

    pub fn rule_mut(&mut self, id: RuleId) -> &mut Rule {
        &mut self.rules[id]
    }

    /// All rules, highest rank first.
    pub fn by_rank_descending(&self) -> &[Rule] {
        &self.rules
    }

    pub fn find_by_name(&self, name: &str) -> Option<RuleId> {
        self.by_name.get(name).copied()
    }

    /// Highest-ranked rule triggered by `word` (its name or one of its synonyms).
    pub fn find_by_word(&self, word: &str) -> Option<RuleId> {
        self.by_trigger.get(word).and_then(|ids| ids.first().copied())
    }

    /// Ids of every rule triggered by `statement`, highest rank first.
    pub fn candidates(&self, statement: &Statement) -> Vec<RuleId> {
        let mut ids: BTreeSet<RuleId> = statement
            .words
            .iter()
            .filter_map(|w| self.by_trigger.get(w.as_str()))
            .flatten()
            .copied()
            .collect();

        // Multi-word triggers cannot be looked up one word at a time.
        for (trigger, rule_ids) in self.by_trigger.iter().filter(|(t, _)| t.contains(' ')) {
            if statement.contains_trigger(trigger) {
                ids.extend(rule_ids);
            }
        }

        ids.into_iter().collect()
    }

    pub fn reset(&mut self) {
        self.rules.iter_mut().for_each(Rule::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compile;
    use crate::{Options, Script};

    fn registry(keywords: Vec<crate::KeywordSpec>) -> Result<Registry> {
        let script = Script { generic: vec![generic!(r"(.*)" => ["Go on."])], keywords, ..Script::default() };
        compile(&script, Options::default().policy).map(|c| c.registry)
    }

    #[test]
    fn sorted_by_rank_with_stable_ties() {
        let reg = registry(vec![
            keyword! { name: "low", rank: 0, patterns: [r"(.*)" => ["a"]] },
            keyword! { name: "high", rank: 5, patterns: [r"(.*)" => ["b"]] },
            keyword! { name: "low2", rank: 0, patterns: [r"(.*)" => ["c"]] },
            keyword! { name: "neg", rank: -1, patterns: [r"(.*)" => ["d"]] },
        ])
        .unwrap();

        let names: Vec<&str> = reg.by_rank_descending().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "low", "low2", "neg"]);
        assert_eq!(reg.find_by_name("low2"), Some(2));
        assert_eq!(reg.find_by_name("missing"), None);
    }

    #[test]
    fn lookup_by_word_covers_synonyms() {
        let reg = registry(vec![
            keyword! { name: "sorry", rank: 0, synonyms: ["regretful"], patterns: [r"(.*)" => ["a"]] },
            keyword! { name: "want", rank: 2, synonyms: ["need", "regretful"], patterns: [r"(.*)" => ["b"]] },
        ])
        .unwrap();

        let want = reg.find_by_name("want");
        assert_eq!(reg.find_by_word("need"), want);
        assert_eq!(reg.find_by_word("want"), want);
        // Shared synonym resolves to the higher-ranked rule.
        assert_eq!(reg.find_by_word("regretful"), want);
        assert_eq!(reg.find_by_word("sorry"), reg.find_by_name("sorry"));
        assert_eq!(reg.find_by_word("banana"), None);
    }

    #[test]
    fn candidates_in_rank_order_including_phrases() {
        let reg = registry(vec![
            keyword! { name: "sorry", rank: 0, patterns: [r"(.*)" => ["a"]] },
            keyword! { name: "remember", rank: 5, synonyms: ["look back"], patterns: [r"(.*)" => ["b"]] },
        ])
        .unwrap();

        let ids = reg.candidates(&Statement::scan("Sorry, I look back too often"));
        let names: Vec<&str> = ids.iter().map(|&id| reg.rule(id).name.as_str()).collect();
        assert_eq!(names, vec!["remember", "sorry"]);
        assert!(reg.candidates(&Statement::scan("nothing here")).is_empty());
    }

    #[test]
    fn duplicate_names_and_dangling_redirects_fail() {
        let dup = registry(vec![
            keyword! { name: "a", rank: 0, patterns: [r"(.*)" => ["x"]] },
            keyword! { name: "a", rank: 1, patterns: [r"(.*)" => ["y"]] },
        ]);
        assert!(matches!(dup, Err(Error::DuplicateRule(name)) if name == "a"));

        let dangling = registry(vec![keyword! { name: "a", rank: 0, patterns: [r"(.*)" => ["x", goto!("nowhere")]] }]);
        assert!(matches!(
            dangling,
            Err(Error::UnresolvedRedirect { ref rule, pattern: 0, ref target }) if rule == "a" && target == "nowhere"
        ));
    }
}
