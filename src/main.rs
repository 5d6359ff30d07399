use clap::Parser;
use linedit::config::{IndentationPreference, Settings, DEFAULT_TAB_WIDTH};
use linedit::editor::Editor;
use linedit::logging;
use std::path::PathBuf;

/// A small terminal text editor.
#[derive(Parser, Debug)]
#[command(name = "linedit", version, about)]
struct Args {
    /// File to edit; created on first save if it does not exist
    path: Option<PathBuf>,

    /// Columns between tab stops
    #[arg(
        long,
        env = "LINEDIT_TAB_WIDTH",
        default_value_t = DEFAULT_TAB_WIDTH,
        value_parser = clap::value_parser!(u8).range(1..)
    )]
    tab_width: u8,

    /// Indent with spaces instead of tab characters
    #[arg(long, env = "LINEDIT_SPACES")]
    spaces: bool,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, env = "LINEDIT_LOG")]
    log: Option<PathBuf>,
}

fn run(args: Args) -> linedit::Result<()> {
    if let Some(path) = &args.log {
        logging::init(path)?;
    }

    let indentation = match args.spaces {
        true => IndentationPreference::Spaces,
        false => IndentationPreference::Tabs,
    };
    let settings = Settings::new(args.tab_width, indentation)?;

    Editor::new(args.path, settings).start()
}

fn main() {
    if let Err(e) = run(Args::parse()) {
        eprintln!("linedit: {}", e);
        std::process::exit(1);
    }
}
