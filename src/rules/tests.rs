use crate::{Eliza, ReplySource, english_script};

fn keyword_reply(eliza: &mut Eliza, input: &str) -> (String, Vec<String>, bool) {
    let reply = eliza.respond_verbose(input).unwrap();
    match reply.source {
        ReplySource::Keyword { chain, memorized, .. } => (reply.text, chain, memorized),
        other => panic!("{input:?} was answered from {other:?}"),
    }
}

#[test]
fn keyword_replies() {
    let cases: &[(&str, &str, &[&str], bool)] = &[
        ("I need help", "What would it mean to you if you got help?", &["want"], false),
        ("Sorry about that.", "Please don't apologise.", &["sorry"], false),
        ("I apologize", "Please don't apologise.", &["apologize", "sorry"], false),
        ("When will it end", "Why do you ask?", &["when", "what"], false),
        ("Why", "Why do you ask?", &["why", "what"], false),
        ("You remind me of him", "In what way?", &["you", "alike"], false),
        ("Everybody hates me", "Can you think of anyone in particular?", &["everybody", "everyone"], false),
        ("I am sad", "I am sorry to hear that you are sad.", &["sad"], true),
        ("My computer is broken!", "Do computers worry you?", &["computer"], true),
        ("My name is Bob. And yours?", "I am not interested in names.", &["name"], true),
    ];

    for &(input, expected, chain, memorized) in cases {
        let mut eliza = Eliza::english().unwrap();
        let (text, got_chain, got_memorized) = keyword_reply(&mut eliza, input);
        assert_eq!(text, expected, "input: {input:?}");
        assert_eq!(got_chain, chain, "input: {input:?}");
        assert_eq!(got_memorized, memorized, "input: {input:?}");
    }
}

#[test]
fn echoed_fragments_are_reflected() {
    let mut eliza = Eliza::english().unwrap();
    let reply = eliza.respond("I remember my dog").unwrap();
    assert_eq!(reply, "Do you often think of your dog?");
    assert!(!reply.contains('{'));

    let reply = eliza.respond("I need you to listen to me").unwrap();
    assert_eq!(reply, "What would it mean to you if you got I to listen to you?");
}

#[test]
fn unmatched_input_uses_generic_table() {
    let mut eliza = Eliza::english().unwrap();
    let reply = eliza.respond_verbose("Banana plane window").unwrap();
    assert_eq!(reply.text, "Please tell me more.");
    let last = english_script().generic.len() - 1;
    assert_eq!(reply.source, ReplySource::Generic { entry: last, variant: 0 });
}

#[test]
fn remembered_reply_is_replayed_exactly_once() {
    let mut eliza = Eliza::english().unwrap();
    let first = eliza.respond("I remember my dog").unwrap();
    assert_eq!(eliza.memory(), vec![first.clone()]);

    let replay = eliza.respond_verbose("Banana plane window").unwrap();
    assert_eq!(replay.text, first);
    assert_eq!(replay.source, ReplySource::Memory);
    assert!(eliza.memory().is_empty());

    let next = eliza.respond_verbose("Banana plane window").unwrap();
    assert!(matches!(next.source, ReplySource::Generic { .. }));
}

#[test]
fn variants_rotate_least_used_first() {
    let mut eliza = Eliza::english().unwrap();
    let sorry = english_script().keywords.iter().find(|k| k.name == "sorry").unwrap();
    let n = sorry.patterns[0].responses.len();

    let replies: Vec<String> = (0..=n).map(|_| eliza.respond("sorry").unwrap()).collect();
    for (i, reply) in replies.iter().take(n).enumerate() {
        assert_eq!(replies.iter().take(n).filter(|r| *r == reply).count(), 1, "variant {i} repeated early");
    }
    assert_eq!(replies[n], replies[0]);

    let usage = eliza.rules().into_iter().find(|r| r.name == "sorry").unwrap().patterns[0].usage.clone();
    assert_eq!(usage.iter().sum::<u32>() as usize, n + 1);
    assert_eq!(usage[0], 2);
}

#[test]
fn redirects_never_surface_as_text() {
    let mut eliza = Eliza::english().unwrap();
    for input in ["I apologize", "I apologise", "Why?", "Who", "Where to", "How so", "Nobody", "Noone cares"] {
        for _ in 0..6 {
            let reply = eliza.respond(input).unwrap();
            assert!(!reply.to_lowercase().contains("goto"), "{input:?} -> {reply:?}");
            assert!(!reply.contains('{'), "{input:?} -> {reply:?}");
        }
    }
}

#[test]
fn rules_are_listed_by_rank() {
    let eliza = Eliza::english().unwrap();
    let rules = eliza.rules();
    assert_eq!(rules.len(), english_script().keywords.len());
    assert_eq!(rules[0].name, "computer");
    assert_eq!(rules.last().unwrap().name, "xnone");
    assert!(rules.windows(2).all(|w| w[0].rank >= w[1].rank));
}
