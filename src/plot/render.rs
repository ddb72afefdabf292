use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::config::{OutputFormat, StudyConfig};
use crate::data::table::ResultTable;
use crate::metrics::summary::{summarize, SeriesSummary};
use crate::plot::html::HtmlRenderer;
use crate::plot::svg::SvgRenderer;

/// Draws summarized runtimes into one file.
pub trait Renderer {
    fn extension(&self) -> &'static str;

    /// Writes `<base>.<extension>` and returns its path.
    fn render(&self, summary: &[SeriesSummary], base: &Path) -> Result<PathBuf>;
}

/// Appends an extension without touching dots already in `base`.
pub fn output_path(base: &Path, extension: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

pub fn renderer_for(format: OutputFormat, config: &StudyConfig) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Svg => Box::new(SvgRenderer::new(config.size_px())),
        OutputFormat::Html => Box::new(HtmlRenderer::new()),
    }
}

/// Summarize `table` and draw it with `renderer`.
pub fn render_table(renderer: &dyn Renderer, table: &ResultTable, base: &Path) -> Result<PathBuf> {
    let summary = summarize(table);
    let path = renderer.render(&summary, base)?;
    info!(path = %path.display(), "wrote chart");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_keeps_existing_dots() {
        assert_eq!(output_path(Path::new("out/IsingRing"), "svg"), Path::new("out/IsingRing.svg"));
        assert_eq!(output_path(Path::new("run.v2"), "html"), Path::new("run.v2.html"));
    }
}
