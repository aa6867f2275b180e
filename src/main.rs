use std::fs;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tabshift::{parse_offset, render, TabError, TransposeSettings};

/// Transpose the [ch]...[/ch] chords of a tab sheet
#[derive(Parser, Debug)]
#[command(name = "tabshift", version, about)]
struct Cli {
    /// Tab sheet to read
    input: PathBuf,

    /// Where to write the result (stdout if omitted)
    output: Option<PathBuf>,

    /// Semitones to shift by, e.g. 2, +2 or -3
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_semitones)]
    semitones: Option<i64>,

    /// Spell accidentals with flats
    #[arg(short, long)]
    flats: bool,

    /// Spell accidentals with sharps, even if the settings file asks for flats
    #[arg(long, conflicts_with = "flats")]
    sharps: bool,

    /// YAML file with `transpose` and `useFlats`; flags override it
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print plain text: tab markers stripped, chords without markers
    #[arg(short, long)]
    plain: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_semitones(s: &str) -> Result<i64, String> {
    parse_offset(s).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn resolve_settings(cli: &Cli) -> Result<TransposeSettings, TabError> {
    let mut settings = match &cli.settings {
        Some(path) => TransposeSettings::load(path)?,
        None => TransposeSettings::default(),
    };
    if let Some(semitones) = cli.semitones {
        settings.transpose = semitones;
    }
    if cli.flats {
        settings.use_flats = true;
    } else if cli.sharps {
        settings.use_flats = false;
    }
    Ok(settings)
}

fn run(cli: &Cli) -> Result<(), TabError> {
    let settings = resolve_settings(cli)?;
    let source = fs::read_to_string(&cli.input).map_err(|e| TabError::io(&cli.input, e))?;

    log::info!(
        "transposing {} by {}{}",
        cli.input.display(),
        settings.label(),
        if settings.use_flats { " (flats)" } else { "" }
    );

    let transposed = settings.apply(&source);
    let result = if cli.plain {
        render::to_plain_text(&transposed)
    } else {
        transposed
    };

    match &cli.output {
        Some(path) => {
            fs::write(path, &result).map_err(|e| TabError::io(path, e))?;
            eprintln!("Wrote transposed tab to {}", path.display());
        }
        None => {
            print!("{}", result);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
