use rogerian::{PatternSummary, Reply, ReplySource, RuleSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, s: &str, code: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(s.as_ref(), color)
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(s.as_ref(), DIM)
        }
    }
}

pub fn print_turn(reply: &Reply, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("{}", palette.bold(palette.paint(&reply.text, ansi::GREEN)));

    println!("{}", palette.paint("━━━ Source ━━━", ansi::GRAY));
    match &reply.source {
        ReplySource::Keyword { rule, chain, pattern, variant, memorized } => {
            println!("  {} {}", palette.dim("rule:"), palette.paint(rule, ansi::CYAN));
            if chain.len() > 1 {
                let hops: Vec<String> = chain.iter().map(|r| palette.paint(r, ansi::BLUE)).collect();
                println!("  {} {}", palette.dim("redirects:"), hops.join(palette.dim(" → ").as_str()));
            }
            println!(
                "  {} {}  {} {}",
                palette.dim("pattern:"),
                palette.paint(pattern.to_string(), ansi::YELLOW),
                palette.dim("│ variant:"),
                palette.paint(variant.to_string(), ansi::YELLOW),
            );
            if *memorized {
                println!("  {}", palette.paint("remembered for later", ansi::MAGENTA));
            }
        }
        ReplySource::Memory => println!("  {}", palette.paint("replayed from memory", ansi::MAGENTA)),
        ReplySource::Generic { entry, variant } => {
            println!(
                "  {} {}  {} {}",
                palette.dim("generic entry:"),
                palette.paint(entry.to_string(), ansi::YELLOW),
                palette.dim("│ variant:"),
                palette.paint(variant.to_string(), ansi::YELLOW),
            );
        }
    }

    let m = &reply.metrics;
    println!("{}", palette.paint("━━━ Metrics ━━━", ansi::GRAY));
    println!(
        "  Candidates: {}  │  Rules tried: {}  │  Patterns tried: {}  │  Redirects: {}  │  Total: {}",
        palette.paint(m.candidates.to_string(), ansi::BLUE),
        palette.paint(m.rules_tried.to_string(), ansi::BLUE),
        palette.paint(m.patterns_tried.to_string(), ansi::BLUE),
        palette.paint(m.redirects.to_string(), ansi::BLUE),
        palette.dim(format!("{:?}", m.total)),
    );
}

pub fn print_rules(rules: &[RuleSummary], generic: &[PatternSummary], color: bool) {
    let palette = ansi::Palette::new(color);

    println!("{}", palette.paint("━━━ Keywords ━━━", ansi::GRAY));
    for rule in rules {
        println!(
            "{} {}",
            palette.bold(palette.paint(&rule.name, ansi::CYAN)),
            palette.dim(format!("rank {}", rule.rank)),
        );
        if !rule.synonyms.is_empty() {
            println!("  {} {}", palette.dim("synonyms:"), rule.synonyms.join(", "));
        }
        for pattern in &rule.patterns {
            print_pattern(pattern, &palette);
        }
    }

    println!("\n{}", palette.paint("━━━ Generic ━━━", ansi::GRAY));
    for pattern in generic {
        print_pattern(pattern, &palette);
    }
}

fn print_pattern(pattern: &PatternSummary, palette: &ansi::Palette) {
    println!("  {}", palette.paint(&pattern.pattern, ansi::YELLOW));
    for (response, used) in pattern.responses.iter().zip(&pattern.usage) {
        let line = format!("{} {}", palette.dim(format!("[{used}]")), response);
        if response.starts_with("goto ") {
            println!("    {}", palette.paint(line, ansi::BLUE));
        } else {
            println!("    {line}");
        }
    }
}
