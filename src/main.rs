use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use termcolor::ColorChoice;
use wordrack::config::Config;
use wordrack::dawg::stats::show_stats;
use wordrack::output::{print_stream, print_words};
use wordrack::query::{parse_parts, parse_query, Query, QueryLimits};
use wordrack::search::{search_words, SearchIter, Solver};
use wordrack::site::build_site;

#[derive(Parser)]
#[command(name = "wordrack")]
#[command(about = "Build a word graph and find the words a rack of tiles can make")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Query as `<rack> [required]` (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Payload to search (defaults to the configured one)
    #[arg(long)]
    dawg: Option<PathBuf>,

    /// Config file (defaults to ./wordrack.json when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print words as they are found instead of longest first
    #[arg(long)]
    lazy: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorArg,

    /// Group results under a line per word length
    #[arg(long, global = true)]
    heading: bool,

    /// Log progress (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the payload(s) and the service worker
    Build {
        /// Word list (overrides the config)
        #[arg(short, long)]
        words: Option<PathBuf>,

        /// Payload to write (overrides the config)
        #[arg(short, long)]
        dawg: Option<PathBuf>,

        /// Service worker to write (overrides the config)
        #[arg(long)]
        service_worker: Option<PathBuf>,

        /// No status output
        #[arg(short, long)]
        quiet: bool,
    },
    /// Find the words a rack can make
    Search {
        /// Letters, `?` for a wildcard
        rack: String,

        /// Letters that must appear together in every word
        required: Option<String>,

        /// Payload to search
        #[arg(short, long)]
        dawg: Option<PathBuf>,

        /// Print words as they are found instead of longest first
        #[arg(long)]
        lazy: bool,
    },
    /// Show payload statistics
    Stats {
        /// Payload to inspect
        dawg: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

/// How search results are printed
struct OutputMode {
    color: ColorChoice,
    heading: bool,
    lazy: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Build {
            words,
            dawg,
            service_worker,
            quiet,
        }) => {
            if let Some(words) = words {
                config.words = words;
            }
            if let Some(dawg) = dawg {
                config.dawg = dawg;
            }
            if let Some(service_worker) = service_worker {
                config.service_worker = service_worker;
            }
            build_site(&config, quiet)?;
        }
        Some(Commands::Search {
            rack,
            required,
            dawg,
            lazy,
        }) => {
            let required = required.unwrap_or_default();
            let limits = QueryLimits::from(&config);
            let label = format!("{} {}", rack, required);
            let query = parse_parts(&rack, &required, &limits)
                .with_context(|| format!("Invalid query '{}'", label.trim()))?;
            let dawg = dawg.unwrap_or_else(|| config.dawg.clone());
            let mode = OutputMode {
                color: cli.color.into(),
                heading: cli.heading,
                lazy: lazy || cli.lazy,
            };
            run_search(&query, label.trim(), &dawg, &mode)?;
        }
        Some(Commands::Stats { dawg }) => {
            let dawg = dawg.unwrap_or_else(|| config.dawg.clone());
            show_stats(&dawg)?;
        }
        None => {
            let limits = QueryLimits::from(&config);
            let label = cli.query.join(" ");
            // one argument may hold both parts: `wordrack "aetl? at"`
            let query = match cli.query.as_slice() {
                [input] => parse_query(input, &limits),
                [rack, required, ..] => parse_parts(rack, required, &limits),
                [] => anyhow::bail!("No query given. Try `wordrack <rack> [required]` or `wordrack --help`"),
            }
            .with_context(|| format!("Invalid query '{}'", label.trim()))?;
            let dawg = cli.dawg.unwrap_or_else(|| config.dawg.clone());
            let mode = OutputMode {
                color: cli.color.into(),
                heading: cli.heading,
                lazy: cli.lazy,
            };
            run_search(&query, label.trim(), &dawg, &mode)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Info);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Debug);
        }
    }
    builder.init();
}

fn run_search(query: &Query, label: &str, dawg_path: &Path, mode: &OutputMode) -> Result<()> {
    let mut solver = Solver::new();
    solver
        .load(dawg_path)
        .with_context(|| format!("Failed to load {} (run `wordrack build` first)", dawg_path.display()))?;
    let dawg = solver.dawg()?;

    let found = if mode.lazy {
        let words = SearchIter::new(dawg, &query.rack, &query.required);
        print_stream(words, mode.color)?
    } else {
        let words = search_words(dawg, &query.rack, &query.required);
        print_words(&words, mode.color, mode.heading)?;
        words.len()
    };

    if found == 0 {
        eprintln!("No words found for '{}'", label);
    }
    log::info!("{} words for '{}'", found, label);

    Ok(())
}
