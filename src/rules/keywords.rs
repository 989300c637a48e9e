use crate::script::KeywordSpec;

/// Keyword rules in declaration order. The registry sorts them by rank; rules
/// of equal rank keep the order they have here.
pub fn get() -> Vec<KeywordSpec> {
    vec![
        keyword! {
            name: "xnone",
            rank: -1,
            patterns: [
                r"(.*)" => [
                    "I'm not sure I understand you fully.",
                    "Please go on.",
                    "That is interesting. Please continue.",
                    "Tell me more about that.",
                    "Does talking about this bother you?",
                ],
            ],
        },
        keyword! {
            name: "sorry",
            rank: 0,
            synonyms: ["remorseful", "regretful"],
            patterns: [
                r"(.*)" => [
                    "Please don't apologise.",
                    "Apologies are not necessary.",
                    "I've told you that apologies are not required.",
                    "It did not bother me.  Please continue.",
                ],
            ],
        },
        keyword! {
            name: "apologize",
            rank: 0,
            synonyms: ["apologise"],
            patterns: [r"(.*)" => [goto!("sorry")]],
        },
        keyword! {
            name: "remember",
            rank: 5,
            synonyms: ["reminded", "recall", "memorize", "look back"],
            patterns: [
                r"(.*)i remember (.*)" => [
                    "Do you often think of {1}?",
                    "Does thinking of {1} bring anything else to mind?",
                    "What else do you recollect?",
                    "Why do you remember {1} just now?",
                    "What in the present situation reminds you of {1}?",
                    "What is the connection between me and {1}?",
                    "What else does {1} remind you of?",
                ],
                r"(.*)do you remember(.*)" => [
                    "Did you think I would forget {1}?",
                    "Why do you think I should recall {1} now?",
                    "What about {1}?",
                    goto!("what"),
                    "You mentioned {1}?",
                ],
                r"(.*)you remember(.*)" => [
                    "How could I forget {1}?",
                    "What about {1} should I remember?",
                    goto!("you"),
                ],
            ],
        },
        keyword! {
            name: "forget",
            rank: 5,
            patterns: [
                r"(.*)i forget(.*)" => [
                    "Can you think of why you might forget {1}?",
                    "Why can't you remember {1}?",
                    "How often do you think of {1}?",
                    "Does it bother you to forget that?",
                    "Could it be a mental block?",
                    "Are you generally forgetful?",
                    "Do you think you are suppressing {1}?",
                ],
                r"(.*)did you forget(.*)" => [
                    "Why do you ask?",
                    "Are you sure you told me?",
                    "Would it bother you if I forgot {1}?",
                    "Why should I recall {1} just now?",
                    goto!("what"),
                    "Tell me more about {1}.",
                ],
            ],
        },
        keyword! {
            name: "dreamed",
            rank: 4,
            synonyms: ["delusion", "fantasy", "imagination", "thought"],
            patterns: [
                r"(.*)i dreamed(.*)" => [
                    "Really, {1}?",
                    "Have you ever fantasized {1} while you were awake?",
                    "Have you ever dreamed {1} before?",
                    goto!("dream"),
                ],
            ],
        },
        keyword! {
            name: "dream",
            rank: 3,
            synonyms: ["dreams"],
            patterns: [
                r"(.*)" => [
                    "What does that dream suggest to you?",
                    "Do you dream often?",
                    "What persons appear in your dreams?",
                    "Do you believe that dreams have something to do with your problem?",
                ],
            ],
        },
        keyword! {
            name: "if",
            rank: 3,
            patterns: [
                r"(.*)if(.*)" => [
                    "Do you think its likely that {1}?",
                    "Do you wish that {1}?",
                    "What do you know about {1}?",
                    "Really, if {1}?",
                    "What would you do if {1}?",
                    "But what are the chances that {1}?",
                    "What does this speculation lead to?",
                ],
            ],
        },
        keyword! {
            name: "perhaps",
            rank: 0,
            synonyms: [
                "maybe", "for all one knows", "it could be", "it may be", "it's possible", "possibly",
                "conceivably", "perchance",
            ],
            patterns: [
                r"(.*)" => [
                    "You don't seem quite certain.",
                    "Why the uncertain tone?",
                    "Can't you be more positive?",
                    "You aren't sure?",
                    "Don't you know?",
                    "How likely, would you estimate?",
                ],
            ],
        },
        keyword! {
            name: "name",
            rank: 15,
            patterns: [
                r"(.*)" => [
                    "I am not interested in names.",
                    "I've told you before, I don't care about names -- please continue.",
                ],
            ],
        },
        keyword! {
            name: "hello",
            rank: 0,
            synonyms: ["hi", "hey", "howdy", "greetings"],
            patterns: [
                r"(.*)" => [
                    "How do you do.  Please state your problem.",
                    "Hi.  What seems to be your problem?",
                ],
            ],
        },
        keyword! {
            name: "computer",
            rank: 50,
            synonyms: ["computers", "machine", "machines"],
            patterns: [
                r"(.*)" => [
                    "Do computers worry you?",
                    "Why do you mention computers?",
                    "What do you think machines have to do with your problem?",
                    "Don't you think computers can help people?",
                    "What about machines worries you?",
                    "What do you think about machines?",
                ],
            ],
        },
        keyword! {
            name: "am",
            rank: 0,
            patterns: [
                r"(.*)am i(.*)" => [
                    "Do you believe you are {1}?",
                    "Would you want to be {1}?",
                    "Do you wish I would tell you you are {1}?",
                    "What would it mean if you were {1}?",
                    goto!("what"),
                ],
                r"(.*)i am(.*)" => [goto!("i")],
            ],
        },
        keyword! {
            name: "are",
            rank: 0,
            patterns: [
                r"(.*)are you(.*)" => [
                    "Why are you interested in whether I am {1} or not?",
                    "Would you prefer if I weren't {1}?",
                    "Perhaps I am {1} in your fantasies.",
                    "Do you sometimes think I am {1}?",
                    goto!("what"),
                    "Would it matter to you?",
                    "What if I were {1}?",
                ],
                r"(.*)you are(.*)" => [goto!("you")],
                r"(.*) are ([a-zA-Z]*) ([a-zA-Z]*) ([a-zA-Z]*) (.*)" => [
                    "Did you think they might not be {1} {2} {3}?",
                    "Would you like it if they were not {1} {2} {3}?",
                    "What if they were not {1} {2} {3}?",
                    "Are they always {1} {2} {3}?",
                    "Possibly they are {1} {2} {3}.",
                    "Are you positive they are {1} {2} {3}?",
                ],
            ],
        },
        keyword! {
            name: "your",
            rank: 0,
            patterns: [
                r"(.*)your(.*)" => [
                    "Why are you concerned over my {1}?",
                    "What about your own {1}?",
                    "Are you worried about someone else's {1}?",
                    "Really, my {1}?",
                    "What makes you think of my {1}?",
                    "Do you want my {1}?",
                ],
            ],
        },
        keyword! {
            name: "was",
            rank: 2,
            patterns: [
                r"(.*)was i(.*)" => [
                    "What if you were {1}?",
                    "Do you think you were {1}?",
                    "Were you {1}?",
                    "What would it mean if you were {1}?",
                    "What does ' {1} ' suggest to you?",
                    goto!("what"),
                ],
                r"(.*)i was(.*)" => [
                    "Were you really?",
                    "Why do you tell me you were {1} now?",
                    "Perhaps I already know you were {1}.",
                ],
                r"(.*)was you(.*)" => [
                    "Would you like to believe I was {1}?",
                    "What suggests that I was {1}?",
                    "What do you think?",
                    "Perhaps I was {1}.",
                    "What if I had been {1}?",
                ],
            ],
        },
        keyword! {
            name: "sad",
            rank: 3,
            synonyms: [
                "depressed", "unhappy", "sorrowful", "dejected", "downcast", "miserable", "despondent",
                "despairing", "disconsolate", "desolate", "wretched", "glum", "gloomy", "doleful", "dismal",
                "melancholy", "mournful", "woebegone", "forlorn", "crestfallen", "heartbroken", "inconsolable",
            ],
            patterns: [
                r"(.*)i am ([a-zA-Z]*)(.*)" => [
                    "I am sorry to hear that you are {1}.",
                    "Do you think coming here will help you not to be {1}?",
                    "I'm sure it's not pleasant to be {1}.",
                    "Can you explain what made you {1}?",
                ],
            ],
        },
        keyword! {
            name: "happy",
            rank: 3,
            synonyms: [
                "cheerful", "cheery", "merry", "joyful", "jovial", "jolly", "jocular", "gleeful", "carefree",
                "untroubled", "delighted", "smiling", "beaming", "grinning", "lighthearted", "pleased",
                "contented", "content", "satisfied", "gratified", "buoyant", "radiant", "sunny", "blithe",
                "joyous", "beatific", "thrilled", "elated", "exhilarated", "ecstatic", "blissful", "euphoric",
                "overjoyed", "exultant", "rapturous", "jubilant",
            ],
            patterns: [
                r"(.*)i am ([a-zA-Z]*)(.*)" => [
                    "How have I helped you to be {1}?",
                    "Has your treatment made you {1}?",
                    "What makes you {1} just now?",
                    "Can you explain why you are suddenly {1}?",
                ],
            ],
        },
        keyword! {
            name: "i",
            rank: 0,
            patterns: [
                r"(.*)i was(.*)" => [goto!("was")],
                r"(.*)i am(.*)" => [
                    "Is it because you are {1} that you came to me?",
                    "How long have you been {1}?",
                    "Do you believe it is normal to be {1}?",
                    "Do you enjoy being {1}?",
                    "Do you know anyone else who is {1}?",
                ],
                r"(.*)i don't(.*)" => [
                    "Don't you really {1}?",
                    "Why don't you {1}?",
                    "Do you wish to be able to {1}?",
                    "Does that trouble you?",
                ],
                r"(.*)i feel(.*)" => [
                    "Tell me more about such feelings.",
                    "Do you often feel {1}?",
                    "Do you enjoy feeling {1}?",
                    "Of what does feeling {1} remind you?",
                ],
                r"(.*)i(.*)you(.*)" => [
                    "Perhaps in your fantasies we {1} each other.",
                    "Do you wish to {1} me?",
                    "You seem to need to {1} me.",
                    "Do you {1} anyone else?",
                ],
                r"(.*)" => [
                    "You say {0}?",
                    "Why do you say {0}?",
                    "Can you elaborate on that?",
                    "Do you say {0} for some special reason?",
                    "That's quite interesting.",
                ],
            ],
        },
        keyword! {
            name: "you",
            rank: 0,
            patterns: [
                r"(.*)you remind me of(.*)" => [goto!("alike")],
                r"(.*)you are(.*)" => [
                    "What makes you think I am {1}?",
                    "Does it please you to believe I am {1}?",
                    "Do you sometimes wish you were {1}?",
                    "Perhaps you would like to be {1}.",
                ],
                r"(.*)you(.*) me(.*)" => [
                    "Why do you think I {1} you?",
                    "You like to think I {1} you -- don't you?",
                    "What makes you think I {1} you?",
                    "Really, I {1} you?",
                    "Do you wish to believe I {1} you?",
                    "Suppose I did {1} you -- what would that mean?",
                    "Does someone else believe I {1} you?",
                ],
                r"(.*)you(.*)" => [
                    "We were discussing you -- not me.",
                    "Oh, I {1}?",
                    "You're not really talking about me -- are you?",
                    "What are your feelings now?",
                ],
            ],
        },
        keyword! {
            name: "yes",
            rank: 0,
            patterns: [
                r"(.*)" => [
                    "Please go on.",
                    "Please tell me some more about this.",
                    "Why don't you tell me a little more about this.",
                    "I see.",
                    "I understand.",
                ],
            ],
        },
        keyword! {
            name: "no",
            rank: 0,
            patterns: [
                r"(.*)no one(.*)" => [
                    "Are you sure, no one {1}?",
                    "Surely someone {1}.",
                    "Can you think of anyone at all?",
                    "Are you thinking of a very special person?",
                    "Who, may I ask?",
                    "You have a particular person in mind, don't you?",
                    "Who do you think you are talking about?",
                ],
                r"(.*)" => [
                    "Are you saying no just to be negative?",
                    "Does this make you feel unhappy?",
                    "Why not?",
                    "Why 'no'?",
                ],
            ],
        },
        keyword! {
            name: "my",
            rank: 2,
            patterns: [
                r"(.*)my(.*)" => [
                    "Your {1}?",
                    "Why do you say your {1}?",
                    "Does that suggest anything else which belongs to you?",
                    "Is it important to you that your {1}?",
                    "Let's discuss further why your {1}.",
                    "Earlier you said your {1}.",
                    "But your {1}.",
                    "Does that have anything to do with the fact that your {1}?",
                ],
            ],
        },
        keyword! {
            name: "can",
            rank: 0,
            patterns: [
                r"(.*)can you(.*)" => [
                    "You believe I can {1} don't you?",
                    goto!("what"),
                    "You want me to be able to {1}.",
                    "Perhaps you would like to be able to {1} yourself.",
                ],
                r"(.*)can i(.*)" => [
                    "Whether or not you can {1} depends on you more than on me.",
                    "Do you want to be able to {1}?",
                    "Perhaps you don't want to {1}.",
                    goto!("what"),
                ],
            ],
        },
        keyword! {
            name: "what",
            rank: 0,
            patterns: [
                r"(.*)" => [
                    "Why do you ask?",
                    "Does that question interest you?",
                    "What is it you really want to know?",
                    "Are such questions much on your mind?",
                    "What answer would please you most?",
                    "What do you think?",
                    "What comes to mind when you ask that?",
                    "Have you asked such questions before?",
                    "Have you asked anyone else?",
                ],
            ],
        },
        keyword! { name: "who", rank: 0, patterns: [r"who(.*)" => [goto!("what")]] },
        keyword! { name: "when", rank: 0, patterns: [r"when(.*)" => [goto!("what")]] },
        keyword! { name: "where", rank: 0, patterns: [r"where(.*)" => [goto!("what")]] },
        keyword! { name: "how", rank: 0, patterns: [r"how(.*)" => [goto!("what")]] },
        keyword! {
            name: "because",
            rank: 0,
            synonyms: ["since"],
            patterns: [
                r"(.*)" => [
                    "Is that the real reason?",
                    "Don't any other reasons come to mind?",
                    "Does that reason seem to explain anything else?",
                    "What other reasons might there be?",
                ],
            ],
        },
        keyword! {
            name: "why",
            rank: 0,
            patterns: [
                r"(.*)why don't you(.*)" => [
                    "Do you believe I don't {1}?",
                    "Perhaps I will {1} in good time.",
                    "Should you {1} yourself?",
                    "You want me to {1}?",
                    goto!("what"),
                ],
                r"(.*)why can't i(.*)" => [
                    "Do you think you should be able to {1}?",
                    "Do you want to be able to {1}?",
                    "Do you believe this will help you to {1}?",
                    "Have you any idea why you can't {1}?",
                    goto!("what"),
                ],
                r"(.*)" => [goto!("what")],
            ],
        },
        keyword! {
            name: "everyone",
            rank: 2,
            patterns: [
                r"(.*) everyone (.*)" => [
                    "Really, {1}?",
                    "Surely not {1}.",
                    "Can you think of anyone in particular?",
                    "Who, for example?",
                    "Are you thinking of a very special person?",
                    "Who, may I ask?",
                    "Someone special perhaps?",
                    "You have a particular person in mind, don't you?",
                    "Who do you think you're talking about?",
                ],
                r"(.*)" => [
                    "Can you think of anyone in particular?",
                    "Who, for example?",
                    "Someone special perhaps?",
                    "Who do you think you're talking about?",
                ],
            ],
        },
        keyword! { name: "everybody", rank: 2, patterns: [r"(.*)" => [goto!("everyone")]] },
        keyword! { name: "nobody", rank: 2, patterns: [r"(.*)" => [goto!("everyone")]] },
        keyword! { name: "noone", rank: 2, patterns: [r"(.*)" => [goto!("everyone")]] },
        keyword! {
            name: "always",
            rank: 1,
            synonyms: ["consistently", "invariably", "regularly", "habitually", "unfailingly"],
            patterns: [
                r"(.*)" => [
                    "Can you think of a specific example?",
                    "When?",
                    "What incident are you thinking of?",
                    "Really, always?",
                ],
            ],
        },
        keyword! {
            name: "alike",
            rank: 10,
            synonyms: ["similar", "indistinguishable", "identical", "uniform", "interchangeable"],
            patterns: [
                r"(.*)" => [
                    "In what way?",
                    "What does that similarity suggest to you?",
                    "What do you suppose that resemblence means?",
                    "What is the connection, do you suppose?",
                    "Could there really be some connection?",
                    "How?",
                ],
            ],
        },
        keyword! {
            name: "like",
            rank: 10,
            patterns: [r"(.*) ([a-zA-Z]*)like (.*)" => [goto!("alike")]],
        },
        keyword! {
            name: "different",
            rank: 0,
            synonyms: [
                "dissimilar", "unalike", "unlike", "contrasting", "contrastive", "divergent", "differing",
                "varying", "disparate", "mismatched", "conflicting", "clashing", "unfamiliar", "unconventional",
                "uncommon",
            ],
            patterns: [
                r"(.*)" => [
                    "How is it different?",
                    "What differences do you see?",
                    "What does that difference suggest to you?",
                    "What other distinctions do you see?",
                    "What do you suppose that disparity means?",
                    "Could there be some connection, do you suppose?",
                    "How?",
                ],
            ],
        },
        keyword! {
            name: "family",
            rank: 3,
            synonyms: [
                "boyfriend", "girlfriend", "mother", "mom", "mama", "father", "dad", "dada", "papa", "sister",
                "sisters", "siblings", "brother", "brothers", "grandma", "grandmother", "grandfather",
                "grandparents", "parents", "son", "daughter", "niece", "nephew", "cousin", "husband", "wife",
                "fiancee", "partner", "soulmate", "relatives", "children", "child",
            ],
            patterns: [
                r"(.*)my ([a-zA-Z]*)(.*)" => [
                    "Tell me more about your family.",
                    "Who else in your family {2}?",
                    "Your {1}?",
                    "What else comes to mind when you think of your {1}?",
                ],
            ],
        },
        keyword! {
            name: "want",
            rank: 2,
            synonyms: ["desire", "need", "must", "wish", "longing", "yearn"],
            patterns: [
                r"(.*)i ([a-zA-Z]*)(.*)" => [
                    "What would it mean to you if you got {2}?",
                    "Why do you want {2}?",
                    "Suppose you got {2} soon.",
                    "What if you never got {2}?",
                    "What would getting {2} mean to you?",
                    "What does wanting {2} have to do with this discussion?",
                ],
            ],
        },
        keyword! {
            name: "belief",
            rank: 1,
            synonyms: ["trust", "believe", "fancy", "suppose", "presume", "understand"],
            patterns: [
                r"(.*)i ([a-zA-Z]*) i(.*)" => [
                    "Do you really think so?",
                    "But you are not sure you {2}.",
                    "Do you really doubt you {2}?",
                ],
                r"(.*)i ([a-zA-Z]*)(.*)you(.*)" => [goto!("you")],
            ],
        },
        keyword! {
            name: "cannot",
            rank: 1,
            synonyms: ["can't", "won't", "cant", "wont"],
            patterns: [
                r"(.*)i ([a-zA-z]*) (.*)" => [
                    "How do you know that you can't {2}?",
                    "Have you tried?",
                    "Perhaps you could {2} now.",
                    "Do you really want to be able to {2}?",
                    "What if you could {2}?",
                ],
            ],
        },
    ]
}
