use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use pars_engine::{Engine, Lexicon};

const CMUDICT_URL: &str =
    "https://raw.githubusercontent.com/cmusphinx/cmudict/master/cmudict.dict";

#[derive(Parser)]
#[command(name = "parstool", about = "Transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Explain the word-level decision for a single word
    Explain {
        /// Path to the CMUdict-format lexicon file
        lexicon_file: String,
        /// English word to explain
        word: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Transliterate a text argument
    Text {
        /// Path to the CMUdict-format lexicon file
        lexicon_file: String,
        /// Input text (mixed Persian/English)
        text: String,
    },

    /// Transliterate a file line by line
    Batch {
        /// Path to the CMUdict-format lexicon file
        lexicon_file: String,
        /// Path to the input file (one text per line)
        input_file: String,
        /// Path to the output file (defaults to stdout)
        #[arg(long)]
        output: Option<String>,
    },

    /// Print lexicon statistics
    Stats {
        /// Path to the CMUdict-format lexicon file
        lexicon_file: String,
    },

    /// Download the CMU pronouncing dictionary asset
    Fetch {
        /// Destination path
        #[arg(default_value = "data/cmudict.dict")]
        dest: String,
    },
}

fn open_engine(lexicon_file: &str) -> Engine {
    let lexicon = Lexicon::open(Path::new(lexicon_file)).unwrap_or_else(|e| {
        eprintln!("Failed to open lexicon at {}: {}", lexicon_file, e);
        process::exit(1);
    });
    Engine::new(lexicon)
}

fn fetch_lexicon(dest: &str) {
    let body = ureq::get(CMUDICT_URL)
        .call()
        .and_then(|resp| resp.into_body().read_to_vec())
        .unwrap_or_else(|e| {
            eprintln!("Failed to fetch {}: {}", CMUDICT_URL, e);
            process::exit(1);
        });

    let dest_path = Path::new(dest);
    if let Some(parent) = dest_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                eprintln!("Failed to create {}: {}", parent.display(), e);
                process::exit(1);
            });
        }
    }
    fs::write(dest_path, &body).unwrap_or_else(|e| {
        eprintln!("Failed to write {}: {}", dest, e);
        process::exit(1);
    });
    eprintln!("Lexicon written to {} ({} bytes)", dest, body.len());
}

fn main() {
    pars_engine::trace_init::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Command::Explain {
            lexicon_file,
            word,
            json,
        } => {
            let engine = open_engine(&lexicon_file);
            let explanation = engine.explain(&word);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&explanation)
                        .expect("JSON serialization failed")
                );
            } else {
                print!("{}", explanation.format_text());
            }
        }

        Command::Text { lexicon_file, text } => {
            let engine = open_engine(&lexicon_file);
            println!("{}", engine.transliterate_text(&text));
        }

        Command::Batch {
            lexicon_file,
            input_file,
            output,
        } => {
            let engine = open_engine(&lexicon_file);
            let content = fs::read_to_string(&input_file).unwrap_or_else(|e| {
                eprintln!("Failed to read input file {}: {}", input_file, e);
                process::exit(1);
            });
            let lines: Vec<&str> = content.lines().collect();
            let results = engine.transliterate_batch(lines.iter().copied());

            match output {
                Some(path) => {
                    let file = fs::File::create(&path).unwrap_or_else(|e| {
                        eprintln!("Failed to create output file {}: {}", path, e);
                        process::exit(1);
                    });
                    let mut writer = BufWriter::new(file);
                    for line in &results {
                        writeln!(writer, "{}", line).unwrap_or_else(|e| {
                            eprintln!("Failed to write: {}", e);
                            process::exit(1);
                        });
                    }
                    eprintln!("{} lines -> {}", results.len(), path);
                }
                None => {
                    for line in &results {
                        println!("{}", line);
                    }
                }
            }
        }

        Command::Stats { lexicon_file } => {
            let engine = open_engine(&lexicon_file);
            let (words, prons) = engine.lexicon().stats();
            println!("words:          {words}");
            println!("pronunciations: {prons}");
        }

        Command::Fetch { dest } => fetch_lexicon(&dest),
    }
}
