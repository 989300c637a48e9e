use crate::engine::{self, Conversation, Source};
use crate::error::Result;
use crate::script::Script;
use crate::{Response, Rule};
use once_cell::sync::Lazy;

pub use crate::engine::TurnMetrics;
pub use engine::Policy;

static ENGLISH: Lazy<Script> = Lazy::new(crate::rules::english);

/// The built-in English script (reflections, generic table, keyword rules).
pub fn english_script() -> &'static Script {
    &ENGLISH
}

/// Options that affect matching and selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Behavior switches; see [`Policy`].
    pub policy: Policy,
    /// Replies from rules ranked strictly above this are remembered.
    pub memory_rank_threshold: i32,
    /// Maximum number of redirects followed while resolving one reply.
    pub max_redirect_hops: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { policy: Policy::default(), memory_rank_threshold: 2, max_redirect_hops: 10 }
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplySource {
    /// A keyword rule matched.
    Keyword {
        /// The rule whose trigger word and pattern matched the input.
        rule: String,
        /// Rules visited while following redirects, starting with `rule`. The
        /// last one supplied the template.
        chain: Vec<String>,
        /// Pattern index within the last rule of `chain`.
        pattern: usize,
        /// Response variant index within that pattern.
        variant: usize,
        /// The reply was also queued for replay.
        memorized: bool,
    },
    /// Replayed from the memory queue.
    Memory,
    /// Generic table entry.
    Generic { entry: usize, variant: usize },
}

/// Result of [`Eliza::respond_verbose`].
#[derive(Debug, Clone)]
pub struct Reply {
    /// The input as given.
    pub input: String,
    /// Reply text (the same string [`Eliza::respond`] returns).
    pub text: String,
    pub source: ReplySource,
    pub metrics: TurnMetrics,
}

/// A printable view of one pattern and its response variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSummary {
    pub pattern: String,
    /// Response templates; redirects are shown as `goto <rule>`.
    pub responses: Vec<String>,
    pub usage: Vec<u32>,
}

/// A printable view of a keyword rule and its usage counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSummary {
    pub name: String,
    pub rank: i32,
    pub synonyms: Vec<String>,
    pub patterns: Vec<PatternSummary>,
}

impl std::fmt::Display for RuleSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Keyword name: {}", self.name)?;
        writeln!(f, "Rank: {}", self.rank)?;
        writeln!(f, "Number of patterns: {}", self.patterns.len())?;
        for (i, p) in self.patterns.iter().enumerate() {
            writeln!(f, "Pattern {}: {}", i + 1, p.pattern)?;
            writeln!(f, "Responses {}: {:?}", i + 1, p.responses)?;
            writeln!(f, "Used responses {}: {:?}", i + 1, p.usage)?;
        }
        if !self.synonyms.is_empty() {
            writeln!(f, "Synonyms: {:?}", self.synonyms)?;
        }
        Ok(())
    }
}

/// A conversation session.
///
/// Each session owns its own rules, counters and memory; two sessions built
/// from the same script never influence each other.
///
/// # Example
/// ```
/// use rogerian::Eliza;
///
/// let mut eliza = Eliza::english().unwrap();
/// let reply = eliza.respond("I need help").unwrap();
/// assert!(reply.contains("help"));
/// ```
#[derive(Debug, Clone)]
pub struct Eliza {
    conversation: Conversation,
}

impl Eliza {
    /// Compile `script` with default [`Options`].
    pub fn new(script: &Script) -> Result<Self> {
        Self::with_options(script, Options::default())
    }

    /// Compile `script` with the given options.
    pub fn with_options(script: &Script, options: Options) -> Result<Self> {
        let compiled = engine::compile(script, options.policy)?;
        Ok(Eliza { conversation: Conversation::new(compiled, options) })
    }

    /// A session on the built-in English script.
    pub fn english() -> Result<Self> {
        Self::new(english_script())
    }

    /// Reply to one line of input.
    pub fn respond(&mut self, input: &str) -> Result<String> {
        Ok(self.conversation.turn(input)?.text)
    }

    /// Reply to one line of input and report how the reply was chosen.
    pub fn respond_verbose(&mut self, input: &str) -> Result<Reply> {
        let turn = self.conversation.turn(input)?;
        let source = match turn.source {
            Source::Keyword { rule, pattern, variant, chain, memorized } => {
                ReplySource::Keyword { rule, chain, pattern, variant, memorized }
            }
            Source::Memory => ReplySource::Memory,
            Source::Generic { entry, variant } => ReplySource::Generic { entry, variant },
        };
        Ok(Reply { input: input.to_string(), text: turn.text, source, metrics: turn.metrics })
    }

    /// Reflect `text` with this session's reflection table.
    pub fn reflect(&self, text: &str) -> String {
        self.conversation.reflector().reflect(text)
    }

    /// Name of the highest-ranked rule triggered by `word`, if any.
    pub fn keyword_for(&self, word: &str) -> Option<&str> {
        let registry = self.conversation.registry();
        let id = registry.find_by_word(&engine::normalize_trigger(word))?;
        Some(registry.rule(id).name.as_str())
    }

    /// Keyword rules, highest rank first, with their usage counters.
    pub fn rules(&self) -> Vec<RuleSummary> {
        self.conversation.rules().iter().map(rule_summary).collect()
    }

    /// Generic table entries in declaration order, with their usage counters.
    pub fn generic_table(&self) -> Vec<PatternSummary> {
        self.conversation
            .generic()
            .entries
            .iter()
            .map(|e| PatternSummary {
                pattern: e.source.clone(),
                responses: e.responses.variants().iter().map(|t| t.source.clone()).collect(),
                usage: e.responses.usage().to_vec(),
            })
            .collect()
    }

    /// Remembered replies, oldest first.
    pub fn memory(&self) -> Vec<String> {
        self.conversation.memory().map(str::to_string).collect()
    }

    pub fn options(&self) -> &Options {
        self.conversation.options()
    }

    /// Zero every usage counter and clear the memory queue.
    pub fn reset(&mut self) {
        self.conversation.reset();
    }
}

fn rule_summary(rule: &Rule) -> RuleSummary {
    RuleSummary {
        name: rule.name.clone(),
        rank: rule.rank,
        synonyms: rule.synonyms.clone(),
        patterns: rule
            .patterns
            .iter()
            .map(|p| PatternSummary {
                pattern: p.source.clone(),
                responses: p
                    .responses
                    .variants()
                    .iter()
                    .map(|r| match r {
                        Response::Literal(t) => t.source.clone(),
                        Response::Redirect(target) => format!("goto {target}"),
                    })
                    .collect(),
                usage: p.responses.usage().to_vec(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn respond_verbose_matches_respond() {
        let mut a = Eliza::english().unwrap();
        let mut b = Eliza::english().unwrap();
        for input in ["I need help", "Sorry about that.", "Banana plane window", "My mother hates me"] {
            let verbose = a.respond_verbose(input).unwrap();
            assert_eq!(verbose.text, b.respond(input).unwrap());
            assert_eq!(verbose.input, input);
        }
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = Eliza::english().unwrap();
        let b = Eliza::english().unwrap();
        a.respond("Sorry").unwrap();
        let used = |e: &Eliza| e.rules().iter().find(|r| r.name == "sorry").map(|r| r.patterns[0].usage.clone());
        assert_eq!(used(&a), Some(vec![1, 0, 0, 0]));
        assert_eq!(used(&b), Some(vec![0, 0, 0, 0]));
    }

    #[test]
    fn keyword_lookup_normalizes_words() {
        let eliza = Eliza::english().unwrap();
        assert_eq!(eliza.keyword_for("need"), Some("want"));
        assert_eq!(eliza.keyword_for("Can't"), Some("cannot"));
        assert_eq!(eliza.keyword_for("banana"), None);
    }

    #[test]
    fn rule_summary_display_lists_patterns_and_usage() {
        let mut eliza = Eliza::english().unwrap();
        eliza.respond("sorry").unwrap();
        let sorry = eliza.rules().into_iter().find(|r| r.name == "sorry").unwrap();
        let text = sorry.to_string();
        assert!(text.starts_with("Keyword name: sorry\nRank: 0\n"));
        assert!(text.contains("Used responses 1: [1, 0, 0, 0]"));
        assert!(text.contains("Synonyms: [\"remorseful\", \"regretful\"]"));
    }

    #[test]
    fn invalid_script_is_rejected_at_construction() {
        let mut script = english_script().clone();
        script.keywords[0].patterns[0].responses.push(goto!("no-such-rule"));
        assert!(matches!(Eliza::new(&script), Err(Error::UnresolvedRedirect { .. })));
    }

    #[test]
    fn defaults() {
        let options = Options::default();
        assert_eq!(options.memory_rank_threshold, 2);
        assert_eq!(options.max_redirect_hops, 10);
        assert!(options.policy.contains(Policy::MEMORIZE | Policy::CASE_INSENSITIVE));
        assert!(!options.policy.contains(Policy::PATTERN_CAP));
    }
}
