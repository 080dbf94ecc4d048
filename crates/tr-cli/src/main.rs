//! CLI frontend for the Tavernroll dice engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tr_mechanics::{AdvantageMode, RollerConfig};

#[derive(Parser)]
#[command(
    name = "tr",
    about = "Tavernroll: dice, checks, and presets for d20 games",
    version,
    propagate_version = true
)]
struct Cli {
    /// RNG seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ModeArgs {
    /// Roll two d20s and keep the higher
    #[arg(long, conflicts_with = "disadvantage")]
    advantage: bool,

    /// Roll two d20s and keep the lower
    #[arg(long)]
    disadvantage: bool,
}

impl ModeArgs {
    /// The requested mode, or `None` when neither flag is given.
    fn requested(&self) -> Option<AdvantageMode> {
        (self.advantage || self.disadvantage)
            .then(|| AdvantageMode::from_flags(self.advantage, self.disadvantage))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice, e.g. `2d6` or `d20`
    Roll {
        /// Dice expression: <count>d<sides>
        dice: String,

        /// Flat modifier added to the total
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        modifier: i32,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Roll a skill check, saving throw, or weapon attack
    Check {
        /// Skill, ability, or weapon name (case-insensitive)
        name: String,

        /// Check kind: skill, save, attack
        #[arg(short, long, default_value = "skill")]
        kind: String,

        /// Character profile JSON (default: the built-in sample character)
        #[arg(short, long)]
        character: Option<PathBuf>,

        /// Special ability to activate for this check (repeatable)
        #[arg(short, long = "active")]
        active: Vec<String>,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Show a character's check modifiers and weapons
    Sheet {
        /// Character profile JSON (default: the built-in sample character)
        #[arg(short, long)]
        character: Option<PathBuf>,
    },

    /// Manage and roll saved presets
    Preset {
        /// Preset file
        #[arg(short, long, default_value = "presets.json")]
        presets: PathBuf,

        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// List stored presets
    List {
        /// Only show presets in this category
        #[arg(long)]
        category: Option<String>,
    },

    /// Store a new preset
    Add {
        /// Preset name
        name: String,

        /// Dice expression: <count>d<sides>
        dice: String,

        /// Flat modifier added to the total
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        modifier: i32,

        /// Category: skill, save, ability, attack, custom
        #[arg(long)]
        category: Option<String>,

        #[command(flatten)]
        mode: ModeArgs,
    },

    /// Remove the preset at an index
    Remove {
        /// Zero-based preset index
        index: usize,
    },

    /// Roll presets by index (all of them when none are given)
    Roll {
        /// Zero-based preset indices
        indices: Vec<usize>,

        /// Write the rolled results to this file
        #[arg(long)]
        history: Option<PathBuf>,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tr_cli=warn,tr_mechanics=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let mut config = RollerConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    tracing::debug!(seed = ?config.seed, "starting");

    let result = match cli.command {
        Commands::Roll {
            dice,
            modifier,
            mode,
        } => commands::roll::run(&config, &dice, modifier, mode.requested()),
        Commands::Check {
            name,
            kind,
            character,
            active,
            mode,
        } => commands::check::run(
            &config,
            &name,
            &kind,
            character.as_deref(),
            &active,
            mode.requested(),
        ),
        Commands::Sheet { character } => commands::sheet::run(character.as_deref()),
        Commands::Preset { presets, action } => {
            let config = config.with_presets_path(presets);
            match action {
                PresetAction::List { category } => {
                    commands::preset::list(&config, category.as_deref())
                }
                PresetAction::Add {
                    name,
                    dice,
                    modifier,
                    category,
                    mode,
                } => commands::preset::add(
                    &config,
                    &name,
                    &dice,
                    modifier,
                    mode.requested(),
                    category.as_deref(),
                ),
                PresetAction::Remove { index } => commands::preset::remove(&config, index),
                PresetAction::Roll { indices, history } => {
                    let record = history.is_some();
                    let config = match history {
                        Some(path) => config.with_history_path(path),
                        None => config,
                    };
                    commands::preset::roll(&config, &indices, record)
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
