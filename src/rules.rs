//! The built-in English script.
//!
//! This is plain configuration data: reflections, the generic (fallback)
//! table and the keyword rules of the classic Rogerian-therapist conversation.
//! Nothing here is special to the engine; the same script can be exported with
//! `rogerian --export-script` and loaded back from JSON.

#[path = "rules/generic.rs"]
mod generic;
#[path = "rules/keywords.rs"]
mod keywords;
#[path = "rules/reflections.rs"]
mod reflections;
#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;

use crate::script::Script;

pub(crate) fn english() -> Script {
    Script {
        greeting: "Hello. How are you feeling today?".to_string(),
        farewell: "Goodbye. Thank you for talking to me.".to_string(),
        quit_words: ["quit", "bye", "goodbye", "exit"].into_iter().map(str::to_string).collect(),
        reflections: reflections::get(),
        generic: generic::get(),
        keywords: keywords::get(),
    }
}
