//! Script compilation and validation.
//!
//! This module holds the *static* side of the engine: turning a [`Script`]
//! (plain data) into the structures a conversation runs on.
//!
//! 1. **Compile** (this module): build regexes, parse templates, decide for each
//!    response whether it is a literal or a redirect, normalize trigger words.
//! 2. **Index** (`registry.rs`): sort rules by rank and index their triggers.
//!
//! Every check that can be made without user input happens here, so that a
//! script that compiles can only fail at runtime on a redirect chain that is
//! too long, a redirect whose target has no matching pattern, or a capture
//! group that did not participate in a match.
//!
//! ## Invariants
//!
//! - Patterns are anchored at the start of the text (`^(?:...)`) but not at the
//!   end: `I need (.*)` matches "I need a break, honestly".
//! - Every `{k}` in a template is below its pattern's capture group count.
//! - Generic responses are always literal; redirects only exist between keyword
//!   rules.

use super::reflect::Reflector;
use super::registry::Registry;
use super::trigger::normalize_trigger;
use crate::error::{Error, Result};
use crate::script::{GenericSpec, KeywordSpec, ResponseSpec, Script};
use crate::{GenericTable, PatternEntry, Response, ResponseSet, Rule, Template};
use regex::{Regex, RegexBuilder};

/// Maximum number of patterns per rule when [`Policy::PATTERN_CAP`] is set.
pub const PATTERN_LIMIT: usize = 10;

/// Label used for generic entries in diagnostics.
pub(crate) const GENERIC_LABEL: &str = "<generic>";

bitflags::bitflags! {
    /// Behavior switches for a conversation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Policy: u8 {
        /// A reply produced by a rule ranked above the memory threshold is
        /// returned *and* queued for replay on a later keyword-less turn.
        const MEMORIZE         = 1 << 0;
        /// Patterns ignore letter case.
        const CASE_INSENSITIVE = 1 << 1;
        /// Reject rules with more than `PATTERN_LIMIT` patterns.
        const PATTERN_CAP      = 1 << 2;
    }
}

impl Default for Policy {
    fn default() -> Self {
        Policy::MEMORIZE | Policy::CASE_INSENSITIVE
    }
}

/// Everything a conversation needs, built from one script.
#[derive(Debug, Clone)]
pub(crate) struct Compiled {
    pub registry: Registry,
    pub generic: GenericTable,
    pub reflector: Reflector,
}

/// Validate and compile `script`.
pub(crate) fn compile(script: &Script, policy: Policy) -> Result<Compiled> {
    let generic = compile_generic(&script.generic, policy)?;
    let rules = script.keywords.iter().map(|spec| compile_keyword(spec, policy)).collect::<Result<Vec<_>>>()?;
    let registry = Registry::new(rules)?;
    let reflector = Reflector::from(&script.reflections);

    tracing::debug!(
        rules = registry.len(),
        generic = generic.entries.len(),
        reflections = reflector.len(),
        "compiled script"
    );

    Ok(Compiled { registry, generic, reflector })
}

fn compile_generic(specs: &[GenericSpec], policy: Policy) -> Result<GenericTable> {
    if specs.is_empty() {
        return Err(Error::EmptyGenericTable);
    }

    let mut entries = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let regex = compile_pattern(GENERIC_LABEL, index, &spec.pattern, policy)?;
        if spec.responses.is_empty() {
            return Err(Error::EmptyResponses { rule: GENERIC_LABEL.to_string(), pattern: index });
        }
        let groups = regex.captures_len() - 1;
        let templates = spec
            .responses
            .iter()
            .map(|text| {
                let template = Template::parse(text);
                check_placeholders(GENERIC_LABEL, index, &template, groups)?;
                Ok(template)
            })
            .collect::<Result<Vec<_>>>()?;

        entries.push(PatternEntry { source: spec.pattern.clone(), regex, responses: ResponseSet::new(templates) });
    }

    Ok(GenericTable { entries })
}

fn compile_keyword(spec: &KeywordSpec, policy: Policy) -> Result<Rule> {
    if spec.patterns.is_empty() {
        return Err(Error::EmptyRule(spec.name.clone()));
    }
    if policy.contains(Policy::PATTERN_CAP) && spec.patterns.len() > PATTERN_LIMIT {
        let count = spec.patterns.len();
        return Err(Error::TooManyPatterns { rule: spec.name.clone(), count, limit: PATTERN_LIMIT });
    }

    let mut patterns = Vec::with_capacity(spec.patterns.len());
    for (index, pattern) in spec.patterns.iter().enumerate() {
        let regex = compile_pattern(&spec.name, index, &pattern.pattern, policy)?;
        if pattern.responses.is_empty() {
            return Err(Error::EmptyResponses { rule: spec.name.clone(), pattern: index });
        }
        let groups = regex.captures_len() - 1;
        let responses = pattern
            .responses
            .iter()
            .map(|r| {
                let response = to_response(r);
                if let Response::Literal(template) = &response {
                    check_placeholders(&spec.name, index, template, groups)?;
                }
                Ok(response)
            })
            .collect::<Result<Vec<_>>>()?;

        patterns.push(PatternEntry { source: pattern.pattern.clone(), regex, responses: ResponseSet::new(responses) });
    }

    Ok(Rule {
        name: spec.name.clone(),
        rank: spec.rank,
        trigger: normalize_trigger(&spec.name),
        synonyms: spec.synonyms.iter().map(|s| normalize_trigger(s)).filter(|s| !s.is_empty()).collect(),
        patterns,
    })
}

/// Literal or redirect. `goto <rule>` written as plain text is a redirect too.
fn to_response(spec: &ResponseSpec) -> Response {
    match spec {
        ResponseSpec::Redirect { goto } => Response::Redirect(goto.trim().to_string()),
        ResponseSpec::Text(text) => {
            let mut tokens = text.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some(keyword), Some(target), None) if keyword.eq_ignore_ascii_case("goto") => {
                    Response::Redirect(target.to_string())
                }
                _ => Response::Literal(Template::parse(text)),
            }
        }
    }
}

fn compile_pattern(rule: &str, index: usize, source: &str, policy: Policy) -> Result<Regex> {
    RegexBuilder::new(&format!("^(?:{source})"))
        .case_insensitive(policy.contains(Policy::CASE_INSENSITIVE))
        .build()
        .map_err(|err| Error::InvalidPattern { rule: rule.to_string(), index, source: Box::new(err) })
}

fn check_placeholders(rule: &str, pattern: usize, template: &Template, groups: usize) -> Result<()> {
    match template.max_group() {
        Some(index) if index >= groups => {
            Err(Error::Placeholder { rule: rule.to_string(), pattern, index, groups })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::PatternSpec;

    fn script(keywords: Vec<KeywordSpec>) -> Script {
        Script { generic: vec![generic!(r"(.*)" => ["Go on."])], keywords, ..Script::default() }
    }

    #[test]
    fn builtin_script_compiles() {
        let compiled = compile(crate::english_script(), Policy::default()).unwrap();
        assert!(compiled.registry.len() > 40);
        assert!(!compiled.reflector.is_empty());
    }

    #[test]
    fn goto_text_becomes_redirect() {
        assert_eq!(to_response(&"goto what".into()), Response::Redirect("what".to_string()));
        assert_eq!(to_response(&goto!("sorry")), Response::Redirect("sorry".to_string()));
        assert!(matches!(to_response(&"goto the shop now".into()), Response::Literal(_)));
        assert!(matches!(to_response(&"Goto?".into()), Response::Literal(_)));
    }

    #[test]
    fn patterns_are_anchored_at_start_only() {
        let re = compile_pattern("t", 0, r"I need (.*)", Policy::default()).unwrap();
        assert!(re.is_match("i need a nap, honestly"));
        assert!(!re.is_match("Now I need a nap"));

        let strict = compile_pattern("t", 0, r"I need (.*)", Policy::MEMORIZE).unwrap();
        assert!(!strict.is_match("i need a nap"));
    }

    #[test]
    fn rejects_placeholder_beyond_groups() {
        let bad = keyword! { name: "x", rank: 0, patterns: [r"(.*)" => ["{1}"]] };
        let err = compile(&script(vec![bad]), Policy::default()).unwrap_err();
        assert!(matches!(err, Error::Placeholder { index: 1, groups: 1, .. }), "{err}");
    }

    #[test]
    fn rejects_bad_regex_and_empty_sets() {
        let bad_regex = keyword! { name: "x", rank: 0, patterns: [r"(unclosed" => ["hi"]] };
        assert!(matches!(compile(&script(vec![bad_regex]), Policy::default()), Err(Error::InvalidPattern { .. })));

        let no_patterns = KeywordSpec { name: "x".into(), rank: 0, synonyms: vec![], patterns: vec![] };
        assert!(matches!(compile(&script(vec![no_patterns]), Policy::default()), Err(Error::EmptyRule(_))));

        let no_responses = KeywordSpec {
            name: "x".into(),
            rank: 0,
            synonyms: vec![],
            patterns: vec![PatternSpec { pattern: "(.*)".into(), responses: vec![] }],
        };
        assert!(matches!(
            compile(&script(vec![no_responses]), Policy::default()),
            Err(Error::EmptyResponses { pattern: 0, .. })
        ));

        let empty_generic = Script { generic: vec![], ..Script::default() };
        assert!(matches!(compile(&empty_generic, Policy::default()), Err(Error::EmptyGenericTable)));
    }

    #[test]
    fn pattern_cap_is_opt_in() {
        let many = KeywordSpec {
            name: "many".into(),
            rank: 0,
            synonyms: vec![],
            patterns: (0..11).map(|i| PatternSpec { pattern: format!("p{i}"), responses: vec!["r".into()] }).collect(),
        };
        assert!(compile(&script(vec![many.clone()]), Policy::default()).is_ok());

        let capped = Policy::default() | Policy::PATTERN_CAP;
        assert!(matches!(
            compile(&script(vec![many]), capped),
            Err(Error::TooManyPatterns { count: 11, limit: PATTERN_LIMIT, .. })
        ));
    }

    #[test]
    fn synonyms_are_normalized() {
        let spec = keyword! {
            name: "Cannot",
            rank: 1,
            synonyms: ["can't", "Won't", "!!"],
            patterns: [r"(.*)" => ["ok"]],
        };
        let rule = compile_keyword(&spec, Policy::default()).unwrap();
        assert_eq!(rule.trigger, "cannot");
        assert_eq!(rule.synonyms, vec!["cant", "wont"]);
    }
}
