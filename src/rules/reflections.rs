use std::collections::BTreeMap;

/// First/second person swaps applied to echoed fragments.
pub fn get() -> BTreeMap<String, String> {
    [
        ("am", "are"),
        ("are", "am"),
        ("was", "were"),
        ("i", "you"),
        ("i'd", "you would"),
        ("i've", "you have"),
        ("i'll", "you will"),
        ("i'm", "you are"),
        ("my", "your"),
        ("mine", "yours"),
        ("myself", "yourself"),
        ("me", "you"),
        ("you", "I"),
        ("you've", "I have"),
        ("you'll", "I will"),
        ("you're", "I am"),
        ("you'd", "I would"),
        ("your", "my"),
        ("yours", "mine"),
        ("yourself", "myself"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
