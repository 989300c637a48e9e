/// Lazily compiled static regex for patterns that are part of the engine itself
/// (tokenization, placeholders). Script patterns are compiled at load time instead.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Redirect response inside a `keyword!` pattern list.
#[macro_export]
macro_rules! goto {
    ($target:literal) => {
        $crate::ResponseSpec::Redirect { goto: $target.to_string() }
    };
}

/// Build a [`KeywordSpec`](crate::KeywordSpec).
///
/// ```text
/// keyword! {
///     name: "sorry",
///     rank: 0,
///     synonyms: ["remorseful", "regretful"],
///     patterns: [
///         r"(.*)" => ["Please don't apologise.", goto!("what")],
///     ],
/// }
/// ```
#[macro_export]
macro_rules! keyword {
    (
        name: $name:literal,
        rank: $rank:expr
        $(, synonyms: [ $($syn:literal),* $(,)? ])?
        , patterns: [ $( $pat:literal => [ $($resp:expr),+ $(,)? ] ),+ $(,)? ]
        $(,)?
    ) => {{
        $crate::KeywordSpec {
            name: $name.to_string(),
            rank: $rank,
            synonyms: vec![ $($($syn.to_string()),*)? ],
            patterns: vec![ $(
                $crate::PatternSpec {
                    pattern: $pat.to_string(),
                    responses: vec![ $($crate::ResponseSpec::from($resp)),+ ],
                }
            ),+ ],
        }
    }};
}

/// Build a [`GenericSpec`](crate::GenericSpec): `generic!(r"I need (.*)" => ["Why do you need {0}?"])`.
#[macro_export]
macro_rules! generic {
    ($pat:literal => [ $($resp:literal),+ $(,)? ]) => {
        $crate::GenericSpec { pattern: $pat.to_string(), responses: vec![ $($resp.to_string()),+ ] }
    };
}
