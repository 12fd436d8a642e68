mod check;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use mc_rs_config::{ConfigTree, KnownWorlds};
use mc_rs_lookup::EnchantmentNames;
use settings::CheckSettings;
use tracing::{info, warn};

#[derive(Parser)]
#[command(version, about = "Check plugin config files for mistakes")]
struct Cli {
    /// Settings file listing what to check.
    #[arg(short, long, default_value = "configcheck.toml")]
    settings: PathBuf,
    /// Check this file instead of the one named in the settings.
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let settings = match CheckSettings::load(&cli.settings) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", cli.settings.display());
            std::process::exit(1);
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let file = cli
        .file
        .unwrap_or_else(|| PathBuf::from(&settings.check.file));
    info!(
        "MC-RS configcheck v{} checking {}",
        env!("CARGO_PKG_VERSION"),
        file.display()
    );

    let tree = match ConfigTree::load(&file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Failed to load {}: {e}", file.display());
            std::process::exit(1);
        }
    };

    let worlds = KnownWorlds::new(settings.worlds.names.iter().cloned());
    let enchantment_names = EnchantmentNames::bundled();

    let summary = check::run_checks(&settings.check, &tree, &worlds, &enchantment_names);

    info!(
        "Parsed {} areas, {} potion effects, {} items, {} durations, {} enchantment entries, {} spawn egg entries",
        summary.areas,
        summary.potion_effects,
        summary.items,
        summary.durations,
        summary.enchantments,
        summary.spawn_eggs
    );
    for path in &summary.long_durations {
        warn!("Duration at {path} is longer than the configured limit");
    }

    if summary.diagnostics.is_empty() {
        info!("No problems found.");
    } else {
        warn!("{} problem(s) found.", summary.diagnostics.len());
        std::process::exit(2);
    }
}
