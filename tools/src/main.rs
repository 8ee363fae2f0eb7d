use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, info};

use svg::document::Document;
use svg::opacity::DEFAULT_THRESHOLD;
mod commands;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, value_name = "FILE")]
    filename: PathBuf,

    /// Brightness threshold (0-255), lower values treat more light grays as background
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Make near-white rects transparent
    Transparent(commands::transparent::Config),
    /// List rects with their fill and the decision taken for them
    Rects(commands::rects::Config),
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let filename = cli.filename;

    if !filename.exists() {
        error!("file not found: {}", filename.display());
        process::exit(1);
    }
    info!(
        "Process {:?} with threshold {}",
        filename.display(),
        cli.threshold
    );

    let threshold = i32::from(cli.threshold);
    let result = Document::new_from_file(filename.as_path()).and_then(|doc| match cli.command {
        Commands::Transparent(cfg) => {
            commands::transparent::command(&doc, filename.as_path(), threshold, cfg)
        }
        Commands::Rects(cfg) => commands::rects::command(&doc, threshold, cfg),
    });
    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        let cli = Cli::try_parse_from(["tools", "-f", "image.svg", "rects"]).unwrap();
        assert_eq!(cli.threshold, 180);
        assert!(matches!(cli.command, Commands::Rects(_)));
    }

    #[test]
    fn test_threshold_range() {
        let cli = Cli::try_parse_from(["tools", "-f", "a.svg", "-t", "255", "transparent"]).unwrap();
        assert_eq!(cli.threshold, 255);
        assert!(Cli::try_parse_from(["tools", "-f", "a.svg", "-t", "256", "rects"]).is_err());
        assert!(Cli::try_parse_from(["tools", "-f", "a.svg", "-t", "-1", "rects"]).is_err());
    }
}
