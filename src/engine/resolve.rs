//! Response selection.
//!
//! Given a matched pattern, pick the variant to answer with and turn it into
//! reply text:
//!
//! ```text
//! (rule, pattern, captures)
//!     │ ResponseSet::select        least-used variant, counter += 1
//!     ├─ Literal(template) ──────▶ render: {k} -> reflect(capture k)
//!     └─ Redirect(target)
//!           │ first pattern of `target` matching the same text
//!           └─ repeat with (target, pattern, captures)
//! ```
//!
//! The counter of a redirect variant is bumped like any other selection, so a
//! rule mixing literals and redirects keeps rotating through all of them.
//! Chains are followed up to `max_hops` redirects; one more is a
//! `RedirectCycle` error.

use super::reflect::Reflector;
use super::registry::Registry;
use crate::error::{Error, Result};
use crate::{Captures, GenericTable, RenderError, Response, RuleId};

/// Outcome of resolving a keyword match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Resolved {
    /// Rule that produced the final template (the last hop of the chain).
    pub rule: RuleId,
    pub pattern: usize,
    pub variant: usize,
    pub text: String,
    /// Names of every rule visited, starting with the matched one.
    pub chain: Vec<String>,
    /// Patterns evaluated while following redirects.
    pub patterns_tried: usize,
}

pub(crate) fn resolve_keyword(
    registry: &mut Registry,
    reflector: &Reflector,
    text: &str,
    matched: (RuleId, usize, Captures<'_>),
    max_hops: usize,
) -> Result<Resolved> {
    let (mut rule_id, mut pattern, mut captures) = matched;
    let mut chain = vec![registry.rule(rule_id).name.clone()];
    let mut patterns_tried = 0;

    loop {
        let rule = registry.rule_mut(rule_id);
        let name = &rule.name;
        let entry = &mut rule.patterns[pattern];
        let variant =
            entry.responses.select().ok_or_else(|| Error::EmptyResponses { rule: name.clone(), pattern })?;

        let target = match entry.responses.get(variant) {
            Some(Response::Literal(template)) => {
                let reply = template
                    .render(&captures, reflector)
                    .map_err(|e| render_error(name, pattern, captures.0.len(), e))?;
                tracing::debug!(rule = %name, pattern, variant, "selected response");
                return Ok(Resolved { rule: rule_id, pattern, variant, text: reply, chain, patterns_tried });
            }
            Some(Response::Redirect(target)) => target.clone(),
            None => return Err(Error::EmptyResponses { rule: name.clone(), pattern }),
        };

        let from = name.clone();
        tracing::debug!(from = %from, to = %target, "following redirect");
        chain.push(target.clone());
        if chain.len() > max_hops + 1 {
            return Err(Error::RedirectCycle { chain });
        }

        let target_id = registry.find_by_name(&target).ok_or_else(|| Error::UnresolvedRedirect {
            rule: from.clone(),
            pattern,
            target: target.clone(),
        })?;
        let target_rule = registry.rule(target_id);
        match target_rule.first_match(text) {
            Some((index, caps)) => {
                patterns_tried += index + 1;
                rule_id = target_id;
                pattern = index;
                captures = caps;
            }
            None => return Err(Error::RedirectUnmatched { from, target }),
        }
    }
}

/// Least-used selection within the generic table. Returns `(variant, text)`.
pub(crate) fn resolve_generic(
    generic: &mut GenericTable,
    reflector: &Reflector,
    index: usize,
    captures: &Captures<'_>,
) -> Result<(usize, String)> {
    let label = super::compiled_rules::GENERIC_LABEL;
    let entry = &mut generic.entries[index];
    let variant =
        entry.responses.select().ok_or_else(|| Error::EmptyResponses { rule: label.to_string(), pattern: index })?;
    let template = entry
        .responses
        .get(variant)
        .ok_or_else(|| Error::EmptyResponses { rule: label.to_string(), pattern: index })?;
    let text =
        template.render(captures, reflector).map_err(|e| render_error(label, index, captures.0.len(), e))?;
    Ok((variant, text))
}

fn render_error(rule: &str, pattern: usize, groups: usize, err: RenderError) -> Error {
    match err {
        RenderError::NoSuchGroup(index) => Error::Placeholder { rule: rule.to_string(), pattern, index, groups },
        RenderError::Unmatched(group) => Error::MissingCapture { rule: rule.to_string(), pattern, group },
    }
}
