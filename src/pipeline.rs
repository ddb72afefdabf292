use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::config::StudyConfig;
use crate::data::loader::load_data;
use crate::data::table::ResultTable;
use crate::plot::render::{render_table, renderer_for};

/// Aggregates every problem, then draws one chart per problem and format.
///
/// All trial files are read before any chart is written, so a bad file
/// leaves no output behind. Progress lines go to `out`.
pub fn run_study<W: Write>(config: &StudyConfig, out: &mut W) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let mut tables: Vec<(&str, ResultTable)> = Vec::with_capacity(config.problems.len());
    for problem in &config.problems {
        info!(problem = %problem.name, targets = problem.targets.len(), "aggregating");
        let table = load_data(config, problem)?;
        info!(problem = %problem.name, rows = table.len(), "aggregated");
        tables.push((problem.name.as_str(), table));
    }

    let renderers: Vec<_> = config.formats.iter().map(|&f| renderer_for(f, config)).collect();
    let mut written = Vec::new();
    for (name, table) in &tables {
        writeln!(out, "Generating plot for {}", name)?;
        let base = config.output_dir.join(name);
        for renderer in &renderers {
            written.push(render_table(renderer.as_ref(), table, &base)?);
        }
    }
    writeln!(out, "Done")?;
    Ok(written)
}
