// Heronym - Deterministic hero-name generator
// Copyright (c) 2025 Filipe da Veiga Ventura Alves
// Licensed under MIT License

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rand::{distributions::Alphanumeric, rngs::StdRng, Rng, SeedableRng};
use serde::Serialize;

use heronym::{
    batch::NameReport,
    settings::{NameMode, OutputFormat, Settings},
    HeroName, WordLists, CANONICAL, WORD_LIST_VERSION,
};

const ROLL_SEED_LEN: usize = 12;

#[derive(Parser)]
#[command(name = "heronym")]
#[command(about = "Deterministic hero names for movie ids and titles")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (defaults to the settings file, then text)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Settings file (defaults to ./heronym_settings.json)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the name for each seed, one per line
    Name {
        #[arg(required = true)]
        seeds: Vec<String>,

        /// Use the one-word variant
        #[arg(long)]
        short: bool,
    },
    /// Show how a seed maps to its name
    Inspect { seed: String },
    /// Name a JSON array of seeds read from FILE or stdin
    Batch {
        file: Option<PathBuf>,

        #[arg(long)]
        short: bool,
    },
    /// Name randomly drawn seeds
    Roll {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,

        /// Fix the generator so the draw is repeatable
        #[arg(long)]
        rng_seed: Option<u64>,
    },
    /// Show the word-list version and sizes
    Lists {
        /// Print every word
        #[arg(long)]
        all: bool,
    },
    /// Write a settings file with default values
    InitSettings {
        #[arg(long)]
        force: bool,
    },
}

#[derive(Serialize)]
struct Inspection<'a> {
    seed: &'a str,
    #[serde(flatten)]
    breakdown: Option<HeroName>,
    full_name: String,
    short_name: String,
}

#[derive(Serialize)]
struct ListSummary<'a> {
    word_list_version: u32,
    custom: bool,
    first_names: Vec<&'a str>,
    second_names: Vec<&'a str>,
    suffixes: Vec<&'a str>,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn words_of<S: AsRef<str>>(list: &[S]) -> Vec<&str> {
    list.iter().map(|word| word.as_ref()).collect()
}

fn mode_for(short: bool, settings: &Settings) -> NameMode {
    if short {
        NameMode::Short
    } else {
        settings.mode
    }
}

fn run<S: AsRef<str>>(
    command: Commands,
    settings: &Settings,
    format: OutputFormat,
    lists: WordLists<'_, S>,
    custom: bool,
) -> anyhow::Result<()> {
    match command {
        Commands::Name { seeds, short } => {
            let mode = mode_for(short, settings);
            let seeds: Vec<&str> = seeds.iter().map(String::as_str).collect();
            match format {
                OutputFormat::Text => {
                    for seed in seeds {
                        println!("{}", mode.name_for(&lists, seed));
                    }
                }
                OutputFormat::Json => print_json(&NameReport::new(&seeds, &lists, mode, custom).names)?,
            }
        }
        Commands::Inspect { seed } => {
            let inspection = Inspection {
                seed: &seed,
                breakdown: lists.hero_name(&seed),
                full_name: lists.full_name(&seed),
                short_name: lists.short_name(&seed),
            };
            match format {
                OutputFormat::Json => print_json(&inspection)?,
                OutputFormat::Text => {
                    println!("seed:       {:?}", inspection.seed);
                    if let Some(name) = &inspection.breakdown {
                        println!("hash:       {}", name.seed_hash);
                        println!("magnitude:  {}", name.magnitude);
                        println!(
                            "indices:    first={} second={} suffix={}",
                            name.indices.first, name.indices.second, name.indices.suffix
                        );
                        println!("shape:      {:?}", name.shape);
                    } else {
                        println!("hash:       (empty seed, not hashed)");
                    }
                    println!("full name:  {}", inspection.full_name);
                    println!("short name: {}", inspection.short_name);
                }
            }
        }
        Commands::Batch { file, short } => {
            let input = match &file {
                Some(path) => fs::read_to_string(path)
                    .with_context(|| format!("failed to read seeds from {}", path.display()))?,
                None => {
                    let mut input = String::new();
                    io::stdin().read_to_string(&mut input)?;
                    input
                }
            };
            let report = NameReport::from_json(&input, &lists, mode_for(short, settings), custom)?;
            match format {
                OutputFormat::Json => print_json(&report)?,
                OutputFormat::Text => {
                    for entry in &report.names {
                        println!("{}", entry.name);
                    }
                }
            }
        }
        Commands::Roll { count, rng_seed } => {
            let mut rng = match rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let seeds: Vec<String> = (0..count)
                .map(|_| {
                    (&mut rng)
                        .sample_iter(&Alphanumeric)
                        .take(ROLL_SEED_LEN)
                        .map(char::from)
                        .collect()
                })
                .collect();
            let seeds: Vec<&str> = seeds.iter().map(String::as_str).collect();
            let report = NameReport::new(&seeds, &lists, settings.mode, custom);
            match format {
                OutputFormat::Json => print_json(&report.names)?,
                OutputFormat::Text => {
                    for entry in &report.names {
                        println!("{}  {}", entry.seed, entry.name);
                    }
                }
            }
        }
        Commands::Lists { all } => {
            let summary = ListSummary {
                word_list_version: WORD_LIST_VERSION,
                custom,
                first_names: words_of(lists.first_names()),
                second_names: words_of(lists.second_names()),
                suffixes: words_of(lists.suffixes()),
            };
            match format {
                OutputFormat::Json => print_json(&summary)?,
                OutputFormat::Text => {
                    let origin = if custom { "custom" } else { "canonical" };
                    println!("word lists: {} (version {})", origin, summary.word_list_version);
                    for (label, list) in [
                        ("first names", &summary.first_names),
                        ("second names", &summary.second_names),
                        ("suffixes", &summary.suffixes),
                    ] {
                        println!("{:>13}: {}", label, list.len());
                        if all {
                            println!("{:>13}  {}", "", list.join(", "));
                        }
                    }
                }
            }
        }
        Commands::InitSettings { .. } => unreachable!("handled before settings are loaded"),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    use env_logger::Env;
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter))
        .init();

    let settings_path = cli.settings.clone().unwrap_or_else(Settings::default_path);

    if let Commands::InitSettings { force } = cli.command {
        if settings_path.exists() && !force {
            anyhow::bail!("{} already exists (use --force to overwrite)", settings_path.display());
        }
        Settings::default().save_to_disk(&settings_path)?;
        println!("Wrote {}", settings_path.display());
        return Ok(());
    }

    let settings = Settings::load_or_default(&settings_path)?;
    let format = cli.format.unwrap_or(settings.format);

    match &settings.word_lists {
        Some(custom) => {
            log::info!("Using custom word lists from {}", settings_path.display());
            run(cli.command, &settings, format, custom.word_lists()?, true)
        }
        None => run(cli.command, &settings, format, CANONICAL, false),
    }
}
