//! Forca Solver - CLI
//!
//! Hangman solver with TUI and CLI modes that learns letter positions from every word
//! it solves.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use forca_solver::{
    commands::{
        BenchmarkConfig, PlayContext, SolveConfig, analyze_pattern, collect_stats,
        reset_learning, run_benchmark, run_simple, select_words, solve_word,
    },
    config::{Config, FileConfigStore},
    dictionary::{DictionaryLookup, DictionaryType, OnlineDictionary, WordListDictionary},
    game::LearningBridge,
    output::{print_analysis_result, print_benchmark_result, print_solve_result, print_stats},
    persistence::{MemoryStore, SqliteStore, StoreType},
    solver::{PatternAnalyzer, Scorer, Solver, StrategyType},
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "forca_solver",
    about = "Hangman solver for Portuguese words that learns from every game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: heuristic (default), random
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Learned-frequency database (default: ~/.local/state/forca_solver/learned.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Keep learned frequencies in memory only
    #[arg(long, global = true)]
    ephemeral: bool,

    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Word-list file used to check secret words
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Check secret words against the online dictionary
    #[arg(long, global = true)]
    online: bool,

    /// More output: -v shows scores and info logs, -vv debug logs
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (text game loop without TUI)
    Simple,

    /// Play one game against a known word
    Solve {
        /// The secret word
        word: String,

        /// Do not learn from this game
        #[arg(long)]
        no_learn: bool,
    },

    /// Score every letter for a revealed pattern such as _a_a_a
    Analyze {
        /// Revealed pattern, '_' for unknown letters
        pattern: String,

        /// Letters already guessed, e.g. "e,s,t"
        #[arg(short, long)]
        guessed: Option<String>,

        /// How many letters to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of words to play
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Word-list file (default: embedded list)
        #[arg(short = 'w', long)]
        wordlist: Option<PathBuf>,

        /// Learn from each game in order instead of using a frozen model
        #[arg(long)]
        learn: bool,

        /// Shuffle the words with this seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show what has been learned
    Stats {
        /// Letters per position
        #[arg(short, long, default_value = "3")]
        top: usize,
    },

    /// Forget everything learned
    Reset,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    // The TUI owns the terminal, so logs are dropped there unless RUST_LOG asks for them
    init_logging(cli.verbose, matches!(command, Commands::Play));

    let config = load_config(cli.config.as_deref());
    let strategy_name = cli.strategy.clone().unwrap_or_else(|| config.strategy.clone());
    let strategy = StrategyType::from_name(&strategy_name, config.weights);
    info!(strategy = strategy.name(), "starting");

    let solver = Solver::new(strategy);
    let scorer = Scorer::new(config.weights, PatternAnalyzer::default());
    let mut bridge = LearningBridge::new(open_store(&cli, &config));
    let mut model = bridge.rehydrate();

    match command {
        Commands::Play => {
            use forca_solver::interactive::{App, run_tui};

            let ctx = PlayContext {
                solver,
                scorer,
                model,
                bridge,
                dictionary: load_dictionary(&cli, &config),
                check_dictionary: config.check_dictionary,
            };
            run_tui(App::new(ctx))
        }
        Commands::Simple => {
            let mut ctx = PlayContext {
                solver,
                scorer,
                model,
                bridge,
                dictionary: load_dictionary(&cli, &config),
                check_dictionary: config.check_dictionary,
            };
            run_simple(&mut ctx).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { word, no_learn } => {
            if config.check_dictionary
                && load_dictionary(&cli, &config).check(&word).is_known_invalid()
            {
                println!(
                    "{}",
                    format!("⚠ '{word}' is not in the dictionary, playing anyway").yellow()
                );
            }
            let mut solve_config = SolveConfig::new(word);
            solve_config.learn = !no_learn;
            let result = solve_word(solve_config, &solver, &scorer, &mut model, &mut bridge)
                .map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, cli.verbose > 0);
            Ok(())
        }
        Commands::Analyze {
            pattern,
            guessed,
            top,
        } => {
            let result = analyze_pattern(
                &pattern,
                guessed.as_deref().unwrap_or(""),
                &scorer,
                &PatternAnalyzer::default(),
                &model.table,
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            print_analysis_result(&result, top);
            Ok(())
        }
        Commands::Benchmark {
            count,
            wordlist,
            learn,
            seed,
        } => {
            let words = match wordlist {
                Some(path) => load_from_file(&path)
                    .with_context(|| format!("could not read word list {}", path.display()))?,
                None => words_from_slice(WORDS),
            };
            let words = select_words(&words, Some(count), seed);
            println!(
                "Running benchmark on {} words with the {} strategy...",
                words.len(),
                solver.strategy().name()
            );

            let bench_config = BenchmarkConfig {
                learn,
                show_progress: true,
            };
            let result = run_benchmark(&solver, &words, &mut model, &mut bridge, bench_config);
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Stats { top } => {
            println!("Store: {}", bridge.store().describe());
            print_stats(&collect_stats(&model, top));
            Ok(())
        }
        Commands::Reset => {
            let removed = reset_learning(&mut bridge, &mut model).map_err(|e| anyhow::anyhow!(e))?;
            println!("Forgot {removed} learned games.");
            Ok(())
        }
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let from_env = EnvFilter::try_from_default_env();
    if quiet && from_env.is_err() {
        return;
    }
    let filter = from_env.unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Config {
    let store = path.map_or_else(FileConfigStore::new, |p| FileConfigStore::with_path(p));
    store.load_or_init()
}

/// Open the configured store, falling back to memory so a game can always run
fn open_store(cli: &Cli, config: &Config) -> StoreType {
    if cli.ephemeral {
        return StoreType::Memory(MemoryStore::new());
    }

    let Some(path) = cli.db.clone().or_else(|| config.database_path()) else {
        warn!("no location for the learned-frequency database, learning is not saved");
        return StoreType::Memory(MemoryStore::new());
    };

    match SqliteStore::open(&path) {
        Ok(store) => StoreType::Sqlite(store),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not open database, learning is not saved");
            StoreType::Memory(MemoryStore::new())
        }
    }
}

fn load_dictionary(cli: &Cli, config: &Config) -> DictionaryType {
    let dictionary = if cli.online || config.online_dictionary {
        DictionaryType::Online(OnlineDictionary::new(
            &config.dictionary_url,
            Duration::from_millis(config.dictionary_timeout_ms),
        ))
    } else {
        match cli.dictionary.as_ref().or(config.dictionary.as_ref()) {
            Some(path) => DictionaryType::WordList(WordListDictionary::from_file(path)),
            None => DictionaryType::WordList(WordListDictionary::embedded()),
        }
    };
    info!(dictionary = %dictionary.describe(), "dictionary ready");
    dictionary
}
