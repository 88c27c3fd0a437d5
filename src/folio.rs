//! folio - Interactive terminal portfolio

use asciifolio::shell::{interrupt, LineReader, Pacing};
use asciifolio::{FolioError, Shell, ShellOptions};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio", version, about = "Interactive terminal portfolio")]
struct Args {
    /// ASCII art shown beside the banner
    #[arg(long, default_value = asciifolio::shell::banner::DEFAULT_ART_PATH)]
    art: PathBuf,
    /// Print everything immediately, without typing or spinner delays
    #[arg(long)]
    no_animation: bool,
    /// Keep existing terminal contents on start
    #[arg(long)]
    no_clear: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), FolioError> {
    let args = Args::parse();
    asciifolio::logging::init("folio", args.verbose);

    if let Err(e) = interrupt::install() {
        tracing::warn!("Ctrl-C will terminate without a farewell: {e}");
    }

    let options = ShellOptions {
        art_path: Some(args.art),
        pacing: if args.no_animation { Pacing::instant() } else { Pacing::default() },
        clear_on_start: !args.no_clear,
    };

    let stdin = std::io::stdin();
    let mut shell = Shell::new(std::io::stdout(), options);
    shell.run(LineReader::new(stdin.lock()))
}
