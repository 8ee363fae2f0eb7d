use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use svg::document::Document;
use svg::errors::SVGResult;

#[derive(Debug, Parser)]
pub struct Config {
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_transparent.svg", stem))
}

pub fn command(doc: &Document, input: &Path, threshold: i32, cfg: Config) -> SVGResult<()> {
    let outname = cfg.output.unwrap_or_else(|| default_output(input));
    let mut rendered = Vec::new();
    let report = doc.make_transparent(threshold, &mut rendered)?;
    info!("write {}", outname.display());
    fs::write(&outname, rendered)?;

    println!("Processed file: {}", input.display());
    println!("Output file: {}", outname.display());
    println!("Modified rect elements: {}", report.changed);
    println!("Brightness threshold: {}", threshold);
    Ok(())
}
