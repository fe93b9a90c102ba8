//! dict-cli
//!
//! Command-line front end for querying a DICT server.

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use dictwire::{Config, Database, DictSession, MatchingStrategy, DEFAULT_PORT};

/// DICT protocol client
#[derive(Parser, Debug)]
#[command(name = "dict-cli")]
#[command(about = "Query a DICT (RFC 2229) dictionary server")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(short = 'H', long, default_value = "dict.org")]
    host: String,

    /// Server port
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Read/write timeout in milliseconds (0 = wait forever)
    #[arg(short, long, default_value = "0")]
    timeout_ms: u64,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the databases the server offers
    Databases,

    /// List the matching strategies the server supports
    Strategies,

    /// Look up definitions of a word
    Define {
        /// The word to define
        word: String,

        /// Database name, `*` for all, `!` for the first with a hit
        #[arg(short, long, default_value = Database::ALL)]
        database: String,
    },

    /// Find words matching a pattern
    Match {
        /// The word or pattern to match
        word: String,

        /// Matching strategy, `.` for the server default
        #[arg(short, long, default_value = MatchingStrategy::DEFAULT)]
        strategy: String,

        /// Database name, `*` for all, `!` for the first with a hit
        #[arg(short, long, default_value = Database::ALL)]
        database: String,
    },
}

fn main() {
    // Logs go to stderr so stdout carries only results
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,dictwire=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .connect_timeout_ms(args.timeout_ms)
        .read_timeout_ms(args.timeout_ms)
        .write_timeout_ms(args.timeout_ms)
        .client_text(format!("dictwire {}", dictwire::VERSION))
        .build();

    let session = match DictSession::connect(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to connect: {}", e);
            std::process::exit(1);
        }
    };

    let outcome = run(&session, &args);
    session.close();

    if let Err(e) = outcome {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(session: &DictSession, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    match &args.command {
        Commands::Databases => {
            let databases = session.list_databases()?;
            emit(args.json, &databases, |dbs| {
                for db in dbs {
                    println!("{:<16} {}", db.name(), db.description());
                }
            })?;
        }
        Commands::Strategies => {
            let strategies = session.list_strategies()?;
            emit(args.json, &strategies, |strats| {
                for strat in strats {
                    println!("{:<16} {}", strat.name(), strat.description());
                }
            })?;
        }
        Commands::Define { word, database } => {
            let definitions = session.define(word, database)?;
            if definitions.is_empty() && !args.json {
                println!("No definitions found for \"{}\"", word);
                return Ok(());
            }
            emit(args.json, &definitions, |defs| {
                for def in defs {
                    println!("From {} [{}]:\n", def.database().description(), def.database().name());
                    println!("{}\n", def.text());
                }
            })?;
        }
        Commands::Match {
            word,
            strategy,
            database,
        } => {
            let words = session.match_word(word, strategy, database)?;
            emit(args.json, &words, |words| {
                for w in words {
                    println!("{}", w);
                }
            })?;
        }
    }
    Ok(())
}

/// Print as JSON or through the plain-text renderer
fn emit<T: Serialize + ?Sized>(
    json: bool,
    value: &T,
    plain: impl FnOnce(&T),
) -> serde_json::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        plain(value);
    }
    Ok(())
}
