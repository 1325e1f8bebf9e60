use anyhow::Result;
use std::fmt::Write;

use crate::cli::OutputFormat;
use crate::domain::models::EpisodeMap;

pub fn render(episodes: &EpisodeMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(episodes)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(episodes)?),
    }
}

fn render_text(episodes: &EpisodeMap) -> Result<String, std::fmt::Error> {
    if episodes.is_empty() {
        return Ok("No episodes found.".to_string());
    }

    let mut out = String::new();
    for (i, (key, group)) in episodes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let noun = if group.len() == 1 { "episode" } else { "episodes" };
        writeln!(out, "{key} ({} {noun})", group.len())?;
        for episode in group {
            writeln!(
                out,
                "  S{:02}E{:02}  {}",
                episode.season,
                episode.number,
                episode.filename.display()
            )?;
        }
    }
    // drop the final newline only, filenames may end in whitespace
    out.pop();
    Ok(out)
}
