use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use roster_core::seed;
use shared::domain::MemberDraft;

mod controller;
mod ui;

use ui::{RosterApp, StartupConfig};

/// Desktop roster app: renders the team list and an entry form for adding
/// new members. All state lives in memory and is discarded on exit.
#[derive(Parser, Debug)]
struct Args {
    /// Start with an empty roster instead of the built-in demo trio.
    #[arg(long)]
    empty: bool,
    /// JSON file holding an array of {name, email, role} records used as
    /// the initial roster.
    #[arg(long, conflicts_with = "empty")]
    seed_file: Option<PathBuf>,
}

fn resolve_seed(args: &Args) -> Result<Vec<MemberDraft>> {
    if args.empty {
        return Ok(Vec::new());
    }
    match &args.seed_file {
        Some(path) => seed::load_seed_file(path)
            .with_context(|| format!("failed to load roster seed from {}", path.display())),
        None => Ok(seed::demo_roster()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let startup = StartupConfig {
        seed: resolve_seed(&args)?,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Team Roster")
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([480.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Team Roster",
        options,
        Box::new(move |cc| Ok(Box::new(RosterApp::new(cc, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run desktop app: {err}"))
}

#[cfg(test)]
mod tests {
    use super::{resolve_seed, Args};

    #[test]
    fn default_args_seed_the_demo_trio() {
        let args = Args {
            empty: false,
            seed_file: None,
        };
        let seed = resolve_seed(&args).expect("demo seed resolves");
        assert_eq!(seed.len(), 3);
        assert_eq!(seed[0].name, "Amy");
    }

    #[test]
    fn empty_flag_starts_with_no_members() {
        let args = Args {
            empty: true,
            seed_file: None,
        };
        assert!(resolve_seed(&args).expect("empty seed resolves").is_empty());
    }

    #[test]
    fn unreadable_seed_file_fails_startup_with_context() {
        let args = Args {
            empty: false,
            seed_file: Some(std::path::PathBuf::from("/definitely/not/here.json")),
        };
        let err = resolve_seed(&args).expect_err("missing seed file must fail");
        assert!(err.to_string().contains("failed to load roster seed"));
    }
}
