use super::{check_sizes, icon_file_name};
use crate::task::{self, TaskRunner};
use crate::{Failure, PlaceholderConfig};
use anyhow::Context;
use std::path::PathBuf;
use svgicon::PlaceholderSvg;

pub fn placeholder_icons(config: &PlaceholderConfig) -> Result<Vec<PathBuf>, Failure> {
    check_sizes(&config.sizes)?;
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create `{}`", config.output_dir.display()))?;
    let mut runner = TaskRunner::new(config.sizes.len());
    let mut icons = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = config.output_dir.join(icon_file_name(size, "svg"));
        runner.start_task(format!("Create {}", path.display()));
        PlaceholderSvg::new(size, &config.color).write(&path)?;
        runner.end_task();
        icons.push(path);
    }
    task::done("Placeholder icons created. Convert the svg files to png for production.");
    Ok(icons)
}
