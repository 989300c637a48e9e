use crate::script::GenericSpec;

/// Keyword-less fallbacks. Order matters: the last entry matches anything.
pub fn get() -> Vec<GenericSpec> {
    vec![
        generic!(r"I need (.*)" => [
            "Why do you need {0}?",
            "Would it really help you to get {0}?",
            "Are you sure you need {0}?",
        ]),
        generic!(r"Why don'?t you ([^\?]*)\??" => [
            "Do you really think I don't {0}?",
            "Perhaps eventually I will {0}.",
            "Do you really want me to {0}?",
        ]),
        generic!(r"Why can'?t I ([^\?]*)\??" => [
            "Do you think you should be able to {0}?",
            "If you could {0}, what would you do?",
            "I don't know -- why can't you {0}?",
            "Have you really tried?",
        ]),
        generic!(r"I can'?t (.*)" => [
            "How do you know you can't {0}?",
            "Perhaps you could {0} if you tried.",
            "What would it take for you to {0}?",
        ]),
        generic!(r"I am (.*)" => [
            "Did you come to me because you are {0}?",
            "How long have you been {0}?",
            "How do you feel about being {0}?",
        ]),
        generic!(r"I'?m (.*)" => [
            "How does being {0} make you feel?",
            "Do you enjoy being {0}?",
            "Why do you tell me you're {0}?",
            "Why do you think you're {0}?",
        ]),
        generic!(r"Are you ([^\?]*)\??" => [
            "Why does it matter whether I am {0}?",
            "Would you prefer it if I were not {0}?",
            "Perhaps you believe I am {0}.",
            "I may be {0} -- what do you think?",
        ]),
        generic!(r"What (.*)" => [
            "Why do you ask?",
            "How would an answer to that help you?",
            "What do you think?",
        ]),
        generic!(r"How (.*)" => [
            "How do you suppose?",
            "Perhaps you can answer your own question.",
            "What is it you're really asking?",
        ]),
        generic!(r"Because (.*)" => [
            "Is that the real reason?",
            "What other reasons come to mind?",
            "Does that reason apply to anything else?",
            "If {0}, what else must be true?",
        ]),
        generic!(r"(.*) sorry (.*)" => [
            "There are many times when no apology is needed.",
            "What feelings do you have when you apologize?",
        ]),
        generic!(r"Hello(.*)" => [
            "Hello... I'm glad you could drop by today.",
            "Hi there... how are you today?",
            "Hello, how are you feeling today?",
        ]),
        generic!(r"I think (.*)" => [
            "Do you doubt {0}?",
            "Do you really think so?",
            "But you're not sure {0}?",
        ]),
        generic!(r"(.*) friend (.*)" => [
            "Tell me more about your friends.",
            "When you think of a friend, what comes to mind?",
            "Why don't you tell me about a childhood friend?",
        ]),
        generic!(r"Yes" => [
            "You seem quite sure.",
            "OK, but can you elaborate a bit?",
        ]),
        generic!(r"Is it (.*)" => [
            "Do you think it is {0}?",
            "Perhaps it's {0} -- what do you think?",
            "If it were {0}, what would you do?",
            "It could well be that {0}.",
        ]),
        generic!(r"It is (.*)" => [
            "You seem very certain.",
            "If I told you that it probably isn't {0}, what would you feel?",
        ]),
        generic!(r"Can I ([^\?]*)\??" => [
            "Perhaps you don't want to {0}.",
            "Do you want to be able to {0}?",
            "If you could {0}, would you?",
        ]),
        generic!(r"You'?re (.*)" => [
            "Why do you say I am {0}?",
            "Why do you think I am {0}?",
            "Are we talking about you, or me?",
        ]),
        generic!(r"I don'?t (.*)" => [
            "Don't you really {0}?",
            "Why don't you {0}?",
            "Do you want to {0}?",
        ]),
        generic!(r"I feel (.*)" => [
            "Good, tell me more about these feelings.",
            "Do you often feel {0}?",
            "When do you usually feel {0}?",
            "When you feel {0}, what do you do?",
        ]),
        generic!(r"I have (.*)" => [
            "Why do you tell me that you've {0}?",
            "Have you really {0}?",
            "Now that you have {0}, what will you do next?",
        ]),
        generic!(r"I would (.*)" => [
            "Could you explain why you would {0}?",
            "Why would you {0}?",
            "Who else knows that you would {0}?",
        ]),
        generic!(r"Is there (.*)" => [
            "Do you think there is {0}?",
            "It's likely that there is {0}.",
            "Would you like there to be {0}?",
        ]),
        generic!(r"Why (.*)" => [
            "Why don't you tell me the reason why {0}?",
            "Why do you think {0}?",
        ]),
        generic!(r"(.*) mother(.*)" => [
            "Tell me more about your mother.",
            "What was your relationship with your mother like?",
            "How do you feel about your mother?",
        ]),
        generic!(r"(.*) father(.*)" => [
            "Tell me more about your father.",
            "How did your father make you feel?",
            "Do you have trouble showing affection with your family?",
        ]),
        generic!(r"(.*)\?" => [
            "Why do you ask that?",
            "Please consider whether you can answer your own question.",
            "Perhaps the answer lies within yourself?",
            "Why don't you tell me?",
        ]),
        generic!(r"(.*)" => [
            "Please tell me more.",
            "Let's change focus a bit... Tell me about your family.",
            "Can you elaborate on that?",
            "Why do you say that {0}?",
            "I see.",
            "Very interesting.",
            "I see. And what does that tell you?",
            "How does that make you feel?",
            "How do you feel when you say that?",
        ]),
    ]
}
