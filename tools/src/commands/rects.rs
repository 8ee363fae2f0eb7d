use clap::Parser;

use svg::document::Document;
use svg::errors::SVGResult;
use svg::transform::decide_fill;

#[derive(Debug, Parser)]
pub struct Config {}

pub fn command(doc: &Document, threshold: i32, _cfg: Config) -> SVGResult<()> {
    for (i, rect) in doc.rects()?.iter().enumerate() {
        let decision = decide_fill(rect.fill.as_deref(), threshold)?;
        println!(
            "{},{},{},{}",
            i,
            rect.id.as_deref().unwrap_or("-"),
            rect.fill.as_deref().unwrap_or("-"),
            decision
        );
    }
    Ok(())
}
