//! boss - a small terminal editor with incremental C/C++ highlighting

mod display;
mod editor;
mod input;
mod terminal;

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use boss::{Config, EditorError, Result};
use editor::EditorState;
use terminal::Terminal;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    // Options come first, anything else names the file to edit
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            "--version" | "-V" => {
                print_version();
                return Ok(());
            }
            "--write-config" => {
                let config = Config::load()?;
                config.save()?;
                if let Some(path) = Config::config_path() {
                    println!("Wrote {}", path.display());
                }
                return Ok(());
            }
            arg if arg.starts_with('-') => {
                return Err(EditorError::Message(format!("unknown option '{}' (try --help)", arg)));
            }
            _ => {}
        }
    }

    init_logging()?;

    // Config errors are reported before the terminal enters raw mode
    let config = Config::load()?;
    config.language()?;

    let terminal = Terminal::enter()?;
    let mut editor = EditorState::new(terminal, config);

    if args.len() > 1 {
        let path = PathBuf::from(&args[1]);
        editor.open_file(&path)?;
    }

    editor.run()?;

    Ok(())
}

/// Install a file logger when `BOSS_LOG` is set
///
/// Output goes to `BOSS_LOG_FILE`, or `boss.log` in the temp directory, so
/// that it never mixes with the screen.
fn init_logging() -> Result<()> {
    let Ok(filter) = env::var("BOSS_LOG") else {
        return Ok(());
    };

    let path = env::var_os("BOSS_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|| env::temp_dir().join("boss.log"));
    let file = File::create(&path)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false),
        )
        .with(EnvFilter::new(filter))
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), log = %path.display(), "boss starting");
    Ok(())
}

fn print_usage() {
    println!("boss {} - terminal editor with C/C++ highlighting", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: boss [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -h, --help     Show this help message");
    println!("  -V, --version  Show version information");
    println!("  --write-config Write the current settings to ~/.boss.toml");
    println!();
    println!("Key bindings:");
    println!("  Arrows         Move the cursor");
    println!("  Enter          Break the line");
    println!("  Backspace      Delete backwards, joining lines");
    println!("  Tab            Insert a tab");
    println!("  C-s            Save");
    println!("  C-q            Quit");
    println!();
    println!("Environment:");
    println!("  BOSS_LOG       Log filter (e.g. debug, boss=trace)");
    println!("  BOSS_LOG_FILE  Log destination (default: boss.log in the temp dir)");
    println!();
    println!("Settings are read from ~/.boss.toml");
}

fn print_version() {
    println!("boss {}", env!("CARGO_PKG_VERSION"));
}
