//! Binary entrypoint for the gridcrawl CLI.
//!
//! Two ways to pick a script:
//! - `--script <path>` runs a script file directly
//! - `--new <name>` resolves `<root>/game_scripts/<name>.toml`
//!
//! `--load <name>` is declared for saved games but not yet supported.
//! Character sheets resolve under `<root>/characters/`; the root comes from
//! `--root` or the `GRIDCRAWL_DIR` environment variable.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use clap::Parser;
use log::{info, warn};

use gridcrawl::config::Config;
use gridcrawl::engine::ApRule;
use gridcrawl::game::Game;
use gridcrawl::world;

const ROOT_ENV_VAR: &str = "GRIDCRAWL_DIR";
const LOG_FILE: &str = "gridcrawl.log";

#[derive(Parser)]
#[command(name = "gridcrawl")]
#[command(about = "Turn-based ASCII dungeon crawl")]
#[command(version)]
struct Cli {
    /// Run a game script directly from a path
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Start a named game from <root>/game_scripts/<NAME>.toml
    #[arg(long, value_name = "NAME")]
    new: Option<String>,

    /// Resume a saved game (not yet supported)
    #[arg(long, value_name = "NAME")]
    load: Option<String>,

    /// Data root; overrides the GRIDCRAWL_DIR environment variable
    #[arg(long)]
    root: Option<PathBuf>,

    /// Keep the legacy behavior where moves never drain action points
    #[arg(long)]
    legacy_ap: bool,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> io::Result<()> {
    if let Some(name) = &cli.load {
        warn!("load requested for '{}': not yet supported", name);
        eprintln!("Loading saved games is not yet supported.");
        return Ok(());
    }

    let config = Config::from_flag_or_env(cli.root.clone(), ROOT_ENV_VAR)?;

    let script_path = if let Some(path) = cli.script {
        path
    } else if let Some(name) = &cli.new {
        config.script_path(name)
    } else {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "nothing to run: pass --script PATH or --new NAME",
        ));
    };

    info!("loading game script {}", script_path.display());
    let script = world::load_script_from_file(&script_path)?;

    let errors = world::validate_script(&script);
    if !errors.is_empty() {
        for err in &errors {
            eprintln!("script error: {}", err.message);
        }
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{} script error(s)", errors.len()),
        ));
    }

    let sheets = world::load_characters(&config, &script.players)?;

    let ap_rule = if cli.legacy_ap {
        ApRule::LegacyUnbounded
    } else {
        ApRule::DrainPerMove
    };

    let mut rng = rand::thread_rng();
    let mut game = Game::new(&script, sheets, ap_rule, &mut rng);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut screen = io::stdout();
    game.start(&mut input, &mut screen)
}

/// Trace goes to a fixed log file in the working directory; when stdout is a
/// terminal the same lines echo to the console formatter.
fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();

    let level = match verbosity {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);

    match OpenOptions::new().create(true).append(true).open(LOG_FILE) {
        Ok(file) => {
            let file = Mutex::new(file);
            let is_tty = atty::is(atty::Stream::Stdout);
            builder.format(move |fmt, record| {
                let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
                let line = format!("{} [{}] {}", ts, record.level(), record.args());
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{}", line);
                }
                if is_tty {
                    writeln!(fmt, "{}", line)
                } else {
                    Ok(())
                }
            });
        }
        Err(e) => {
            eprintln!("warning: could not open {}: {}", LOG_FILE, e);
        }
    }

    builder.init();
}
