mod debug_report;

use clap::Parser;
use rogerian::{Eliza, Options, Policy, Script, english_script};
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV: &str = "ROGERIAN_LOG";

#[derive(Parser)]
#[command(name = "rogerian", version)]
#[command(about = "Rule-based Rogerian conversation in the ELIZA tradition", long_about = None)]
struct Cli {
    /// JSON script to load instead of the built-in English one
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Print how each reply was chosen
    #[arg(short, long)]
    verbose: bool,

    /// Force ANSI color output
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output
    #[arg(long, overrides_with = "color")]
    no_color: bool,

    /// Do not remember replies from high-rank rules
    #[arg(long)]
    no_memory: bool,

    /// Maximum redirects followed for one reply
    #[arg(long, value_name = "N", default_value_t = 10)]
    max_hops: usize,

    /// Print every rule with its patterns and exit
    #[arg(long, conflicts_with = "export_script")]
    dump_rules: bool,

    /// Print the loaded script as JSON and exit
    #[arg(long)]
    export_script: bool,

    /// Answer these words once instead of starting a session
    input: Vec<String>,
}

fn main() {
    // clap exits with status 2 on argument errors.
    let cli = Cli::parse();
    init_tracing();

    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).with_writer(io::stderr).finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("warning: logging disabled: {err}");
    }
}

fn run(cli: &Cli) -> rogerian::Result<()> {
    let script = match &cli.script {
        Some(path) => {
            let script = Script::load(path)?;
            tracing::info!(path = %path.display(), keywords = script.keywords.len(), "loaded script");
            script
        }
        None => english_script().clone(),
    };

    if cli.export_script {
        println!("{}", script.to_json()?);
        return Ok(());
    }

    let mut policy = Policy::default();
    policy.set(Policy::MEMORIZE, !cli.no_memory);
    let options = Options { policy, max_redirect_hops: cli.max_hops, ..Options::default() };
    let mut eliza = Eliza::with_options(&script, options)?;

    let color = if cli.color {
        true
    } else if cli.no_color {
        false
    } else {
        io::stdout().is_terminal()
    };

    if cli.dump_rules {
        debug_report::print_rules(&eliza.rules(), &eliza.generic_table(), color);
        return Ok(());
    }

    if !cli.input.is_empty() {
        let input = cli.input.join(" ");
        return answer(&mut eliza, &input, cli.verbose, color);
    }

    session(&mut eliza, &script, cli.verbose, color)
}

fn answer(eliza: &mut Eliza, input: &str, verbose: bool, color: bool) -> rogerian::Result<()> {
    if verbose {
        let reply = eliza.respond_verbose(input)?;
        debug_report::print_turn(&reply, color);
    } else {
        println!("{}", eliza.respond(input)?);
    }
    Ok(())
}

fn session(eliza: &mut Eliza, script: &Script, verbose: bool, color: bool) -> rogerian::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if !script.greeting.is_empty() {
        println!("{}", script.greeting);
    }

    let mut line = String::new();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if script.is_quit(input) {
            break;
        }
        answer(eliza, input, verbose, color)?;
    }

    if !script.farewell.is_empty() {
        println!("{}", script.farewell);
    }
    Ok(())
}
