use crate::{write_document, SVG_NAMESPACE};
use anyhow::Result;
use serde::Serialize;
use std::path::Path;

/// Star outline in unit coordinates, closed back on its first point.
const STAR: [(f64, f64); 9] = [
    (0.5, 0.2),
    (0.6, 0.4),
    (0.8, 0.5),
    (0.6, 0.6),
    (0.5, 0.8),
    (0.4, 0.6),
    (0.2, 0.5),
    (0.4, 0.4),
    (0.5, 0.2),
];

const CORNER_RADIUS: f64 = 0.2;

/// A rounded square with a white star, used until a real logo exists.
#[derive(Clone, Debug, Serialize)]
#[serde(rename = "svg")]
pub struct PlaceholderSvg {
    width: u32,
    height: u32,
    #[serde(rename = "viewBox")]
    view_box: String,
    xmlns: String,
    rect: Rect,
    path: StarPath,
}

#[derive(Clone, Debug, Serialize)]
struct Rect {
    width: u32,
    height: u32,
    fill: String,
    rx: String,
}

#[derive(Clone, Debug, Serialize)]
struct StarPath {
    d: String,
    fill: String,
}

impl PlaceholderSvg {
    pub fn new(size: u32, color: &str) -> Self {
        let scale = f64::from(size);
        Self {
            width: size,
            height: size,
            view_box: format!("0 0 {} {}", size, size),
            xmlns: SVG_NAMESPACE.into(),
            rect: Rect {
                width: size,
                height: size,
                fill: color.into(),
                rx: (scale * CORNER_RADIUS).to_string(),
            },
            path: StarPath {
                d: star_path(scale),
                fill: "white".into(),
            },
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        Ok(quick_xml::se::to_string(self)?)
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_document(path.as_ref(), &self.to_xml()?)
    }
}

fn star_path(scale: f64) -> String {
    let mut d = String::new();
    for (i, (x, y)) in STAR.iter().enumerate() {
        let cmd = if i == 0 { "M" } else { "L" };
        d.push_str(&format!("{}{} {}", cmd, x * scale, y * scale));
    }
    d.push('Z');
    d
}
