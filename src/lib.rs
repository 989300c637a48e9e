#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
mod rules;
mod script;

pub use api::{Eliza, Options, PatternSummary, Policy, Reply, ReplySource, RuleSummary, TurnMetrics, english_script};
pub use engine::Reflector;
pub use error::{Error, Result};
pub use script::{GenericSpec, KeywordSpec, PatternSpec, ResponseSpec, Script};

use regex::Regex;

// --- Internal types ---------------------------------------------------------

/// Rule identifier (index into the registry's rank-ordered rule vector).
pub(crate) type RuleId = usize;

/// Capture groups of a successful pattern match, numbered from 0 over the
/// pattern's parenthesized groups (the whole-match group is not included).
///
/// `None` marks a group that exists in the pattern but did not participate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Captures<'t>(pub Vec<Option<&'t str>>);

/// A piece of a response template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Text(String),
    /// `{k}`: reflected capture group `k`.
    Group(usize),
}

/// A response template, split into segments once at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Template {
    pub source: String,
    pub segments: Vec<Segment>,
}

/// Why a template could not be rendered against a set of captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenderError {
    /// The placeholder index is beyond the pattern's groups.
    NoSuchGroup(usize),
    /// The group exists but did not take part in the match.
    Unmatched(usize),
}

impl Template {
    /// Split `source` into literal text and `{k}` placeholders. Braces that do
    /// not enclose a plain decimal index are kept as literal text.
    pub fn parse(source: &str) -> Self {
        let placeholder = regex!(r"\{(\d+)\}");
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in placeholder.captures_iter(source) {
            let Some(whole) = caps.get(0) else { continue };
            let Ok(index) = caps[1].parse::<usize>() else { continue };
            if whole.start() > last {
                segments.push(Segment::Text(source[last..whole.start()].to_string()));
            }
            segments.push(Segment::Group(index));
            last = whole.end();
        }
        if last < source.len() {
            segments.push(Segment::Text(source[last..].to_string()));
        }

        Template { source: source.to_string(), segments }
    }

    /// Highest placeholder index used by the template, if any.
    pub fn max_group(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Group(k) => Some(*k),
                Segment::Text(_) => None,
            })
            .max()
    }

    /// Substitute every `{k}` with the reflection of capture group `k`.
    pub fn render(
        &self,
        captures: &Captures<'_>,
        reflector: &engine::Reflector,
    ) -> std::result::Result<String, RenderError> {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Group(k) => match captures.0.get(*k) {
                    None => return Err(RenderError::NoSuchGroup(*k)),
                    Some(None) => return Err(RenderError::Unmatched(*k)),
                    Some(Some(text)) => out.push_str(&reflector.reflect(text)),
                },
            }
        }
        Ok(out)
    }
}

/// A keyword rule response: either text to send, or a deferral to another rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Response {
    Literal(Template),
    Redirect(String),
}

/// Response variants of one pattern together with their usage counters.
///
/// `usage[i]` counts how many times `variants[i]` has been selected; the two
/// vectors always have the same length.
#[derive(Debug, Clone)]
pub(crate) struct ResponseSet<R> {
    variants: Vec<R>,
    usage: Vec<u32>,
}

impl<R> ResponseSet<R> {
    pub fn new(variants: Vec<R>) -> Self {
        let usage = vec![0; variants.len()];
        ResponseSet { variants, usage }
    }

    /// Pick the least-used variant (earliest on ties), bump its counter and
    /// return its index. Returns `None` only for an empty set.
    pub fn select(&mut self) -> Option<usize> {
        let (index, _) = self.usage.iter().enumerate().min_by_key(|&(i, count)| (*count, i))?;
        self.usage[index] += 1;
        Some(index)
    }

    pub fn get(&self, index: usize) -> Option<&R> {
        self.variants.get(index)
    }

    pub fn variants(&self) -> &[R] {
        &self.variants
    }

    pub fn usage(&self) -> &[u32] {
        &self.usage
    }

    pub fn reset(&mut self) {
        self.usage.iter_mut().for_each(|c| *c = 0);
    }
}

/// A compiled pattern and the responses attached to it.
#[derive(Debug, Clone)]
pub(crate) struct PatternEntry<R> {
    /// Pattern text as written in the script.
    pub source: String,
    /// Compiled, start-anchored regex.
    pub regex: Regex,
    pub responses: ResponseSet<R>,
}

impl<R> PatternEntry<R> {
    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        let caps = self.regex.captures(text)?;
        Some(Captures(caps.iter().skip(1).map(|m| m.map(|m| m.as_str())).collect()))
    }
}

/// A keyword rule: trigger words, rank, and ordered pattern entries.
#[derive(Debug, Clone)]
pub(crate) struct Rule {
    pub name: String,
    pub rank: i32,
    /// Normalized trigger word of the rule's own name.
    pub trigger: String,
    /// Normalized synonyms; multi-word synonyms keep single spaces.
    pub synonyms: Vec<String>,
    pub patterns: Vec<PatternEntry<Response>>,
}

impl Rule {
    /// Name followed by synonyms.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.trigger.as_str()).chain(self.synonyms.iter().map(String::as_str))
    }

    /// First pattern (in declaration order) matching `text`, with its captures.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<(usize, Captures<'t>)> {
        self.patterns.iter().enumerate().find_map(|(i, p)| p.captures(text).map(|c| (i, c)))
    }

    pub fn reset(&mut self) {
        self.patterns.iter_mut().for_each(|p| p.responses.reset());
    }
}

/// Keyword-less fallback entries, tried in declaration order.
#[derive(Debug, Clone)]
pub(crate) struct GenericTable {
    pub entries: Vec<PatternEntry<Template>>,
}

impl GenericTable {
    pub fn first_match<'t>(&self, text: &'t str) -> Option<(usize, Captures<'t>)> {
        self.entries.iter().enumerate().find_map(|(i, e)| e.captures(text).map(|c| (i, c)))
    }

    pub fn reset(&mut self) {
        self.entries.iter_mut().for_each(|e| e.responses.reset());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_splits_text_and_placeholders() {
        let t = Template::parse("Why do you need {0}? {1}!");
        assert_eq!(
            t.segments,
            vec![
                Segment::Text("Why do you need ".to_string()),
                Segment::Group(0),
                Segment::Text("? ".to_string()),
                Segment::Group(1),
                Segment::Text("!".to_string()),
            ]
        );
        assert_eq!(t.max_group(), Some(1));
    }

    #[test]
    fn template_keeps_non_numeric_braces() {
        let t = Template::parse("a {name} b");
        assert_eq!(t.segments, vec![Segment::Text("a {name} b".to_string())]);
        assert_eq!(t.max_group(), None);
    }

    #[test]
    fn template_render_reflects_captures() {
        let reflector = engine::Reflector::english();
        let t = Template::parse("Your {0}?");
        let caps = Captures(vec![Some(" my dog ")]);
        assert_eq!(t.render(&caps, &reflector).unwrap(), "Your your dog?");
    }

    #[test]
    fn template_render_reports_bad_groups() {
        let reflector = engine::Reflector::english();
        let t = Template::parse("{1}");
        assert_eq!(t.render(&Captures(vec![Some("x")]), &reflector), Err(RenderError::NoSuchGroup(1)));
        assert_eq!(t.render(&Captures(vec![Some("x"), None]), &reflector), Err(RenderError::Unmatched(1)));
    }

    #[test]
    fn least_used_selection_spreads_before_repeating() {
        let mut set = ResponseSet::new(vec!["a", "b", "c"]);
        let first: Vec<usize> = (0..3).filter_map(|_| set.select()).collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert_eq!(set.usage(), &[1, 1, 1]);

        let fourth = set.select().unwrap();
        assert_eq!(fourth, 0);
        assert_eq!(set.usage(), &[2, 1, 1]);
        assert!(set.usage().iter().all(|&c| c >= 1));
    }

    #[test]
    fn least_used_prefers_lowest_count_over_order() {
        let mut set = ResponseSet::new(vec!["a", "b", "c"]);
        set.usage = vec![3, 0, 1];
        assert_eq!(set.select(), Some(1));
        assert_eq!(set.select(), Some(1));
        assert_eq!(set.usage(), &[3, 2, 1]);
        assert_eq!(set.select(), Some(2));

        set.reset();
        assert_eq!(set.usage(), &[0, 0, 0]);
        assert_eq!(ResponseSet::<&str>::new(Vec::new()).select(), None);
    }
}
