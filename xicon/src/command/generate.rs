use super::{check_sizes, icon_file_name};
use crate::task::{self, TaskRunner};
use crate::{Failure, GenerateConfig};
use anyhow::Context;
use iconscale::Scaler;
use std::path::PathBuf;

/// Writes `icon{size}.png` into the output directory for every configured
/// size and returns the written paths in size order.
///
/// If the source is missing nothing is created, not even the output
/// directory. A failure while scaling stops at that size and leaves the
/// icons written so far.
pub fn generate_icons(config: &GenerateConfig) -> Result<Vec<PathBuf>, Failure> {
    check_sizes(&config.sizes)?;
    if !config.source.exists() {
        return Err(Failure::MissingInput(config.source.clone()));
    }
    let mut scaler = Scaler::open(&config.source)?.with_filter(config.filter);
    if let Some(warning) = shape_warning(scaler.dimensions()) {
        tracing::warn!("{}: {}", config.source.display(), warning);
        task::warn(warning);
    }
    if config.optimize {
        scaler.optimize();
    }
    std::fs::create_dir_all(&config.output_dir)
        .with_context(|| format!("failed to create `{}`", config.output_dir.display()))?;

    let mut runner = TaskRunner::new(config.sizes.len());
    let mut icons = Vec::with_capacity(config.sizes.len());
    for &size in &config.sizes {
        let path = config.output_dir.join(icon_file_name(size, "png"));
        runner.start_task(format!("Generate {}", path.display()));
        scaler.save(&path, size)?;
        runner.end_task();
        icons.push(path);
    }
    task::done("Icon generation complete.");
    Ok(icons)
}

fn shape_warning((width, height): (u32, u32)) -> Option<String> {
    if width == height {
        return None;
    }
    Some(format!(
        "source image is not square ({}x{}), icons will be stretched",
        width, height
    ))
}
