use clap::{Parser, Subcommand};
use log::info;
use numwords::{Grammar, JsonGrammar, Sampler, SamplerConfig, cardinal, digitize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Cardinal-number text tool
///
/// Without a subcommand, replaces every spelled-out number in the input with
/// digits. Subcommands expose the grammar side: enumerate the phrases the
/// grammar derives, sample a decaying subset of them, or dump the grammar
/// itself.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// Output file; writes stdout when omitted
    output: Option<PathBuf>,

    /// Overwrite the output file if it already exists
    #[arg(short, long)]
    force: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a randomly thinned sample of the grammar's sentences
    Sample {
        /// Grammar JSON file; the built-in cardinal grammar when omitted
        #[arg(long)]
        grammar: Option<PathBuf>,

        /// Maximum expansion depth
        #[arg(long, default_value_t = 8)]
        depth: usize,

        /// Maximum number of sentences to consider
        #[arg(long, default_value_t = 10_000)]
        limit: usize,

        /// Initial emission probability
        #[arg(long, default_value_t = 0.3)]
        probability: f64,

        /// Factor applied to the probability after each emission
        #[arg(long, default_value_t = 0.9)]
        decay: f64,
    },

    /// Print every sentence the grammar derives, in enumeration order
    Enumerate {
        /// Grammar JSON file; the built-in cardinal grammar when omitted
        #[arg(long)]
        grammar: Option<PathBuf>,

        /// Maximum expansion depth
        #[arg(long, default_value_t = 8)]
        depth: usize,

        /// Maximum number of sentences to print
        #[arg(long, default_value_t = 10_000)]
        limit: usize,
    },

    /// Write the built-in cardinal grammar as JSON
    Grammar {
        /// Output file; writes stdout when omitted
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Commands::Sample {
                grammar,
                depth,
                limit,
                probability,
                decay,
            } => {
                let grammar = load_grammar(grammar.as_deref())?;
                let mut sampler = Sampler::new(SamplerConfig { probability, decay });
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                let emitted = sampler.run(
                    grammar.sentences(depth).take(limit),
                    &mut rand::thread_rng(),
                    &mut out,
                )?;
                out.flush()?;
                info!("emitted {} of at most {} sentences", emitted, limit);
            }
            Commands::Enumerate {
                grammar,
                depth,
                limit,
            } => {
                let grammar = load_grammar(grammar.as_deref())?;
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                for sentence in grammar.sentences(depth).take(limit) {
                    writeln!(out, "{}", sentence)?;
                }
                out.flush()?;
            }
            Commands::Grammar { output } => {
                let grammar = cardinal::grammar()?;
                let json = JsonGrammar::from_grammar(&grammar);
                match output {
                    Some(path) => {
                        let mut out = BufWriter::new(File::create(&path)?);
                        serde_json::to_writer_pretty(&mut out, &json)?;
                        out.flush()?;
                        info!("wrote grammar to {}", path.display());
                    }
                    None => {
                        serde_json::to_writer_pretty(io::stdout().lock(), &json)?;
                        println!();
                    }
                }
            }
        }
        return Ok(());
    }

    // No subcommand: digitize input to output.
    let mut text = String::new();
    match &cli.input {
        Some(path) => {
            File::open(path)
                .map_err(|error| format!("could not access '{}': {}", path.display(), error))?
                .read_to_string(&mut text)?;
        }
        None => {
            io::stdin().read_to_string(&mut text)?;
        }
    }

    match &cli.output {
        Some(path) => {
            if path.exists() && !cli.force {
                return Err(format!(
                    "file '{}' already exists, use --force to overwrite it",
                    path.display()
                )
                .into());
            }
            let mut out = BufWriter::new(File::create(path)?);
            digitize::digitize(&text, &mut out)?;
            out.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            digitize::digitize(&text, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn load_grammar(path: Option<&Path>) -> Result<Grammar, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .map_err(|error| format!("could not access '{}': {}", path.display(), error))?;
            let json: JsonGrammar = serde_json::from_reader(BufReader::new(file))?;
            let grammar = json.into_grammar()?;
            info!(
                "loaded {} rules from {}",
                grammar.rules().len(),
                path.display()
            );
            Ok(grammar)
        }
        None => Ok(cardinal::grammar()?),
    }
}
