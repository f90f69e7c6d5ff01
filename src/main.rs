use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use bump::cli::{run_bump, BumpOptions};
use bump::config::{self, CONFIG_ENV};
use bump::domain::BumpLevel;
use bump::git::Git2TagSource;
use bump::ui;

#[derive(clap::Parser)]
#[command(
    name = "bump",
    about = "Print the next semantic version tag of the current git repository"
)]
struct Args {
    #[arg(
        value_name = "LEVEL",
        help = "major, minor, patch or current (default: patch)"
    )]
    level: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Usage errors and --help both exit with 2
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(2);
        }
    };

    if let Err(e) = run(args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let level = BumpLevel::from_args(args.level.as_slice());

    let config_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let config = config::load_config(config_path.as_deref())?;

    let source = Git2TagSource::open(config.repository_path())?;
    let next = run_bump(&source, &BumpOptions::from_config(level, &config))?;

    ui::display_version(&next);
    Ok(())
}
