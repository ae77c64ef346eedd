use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Serialize;
use std::path::Path;

mod placeholder;

pub use placeholder::PlaceholderSvg;

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Size the wrapper svg declares unless told otherwise.
pub const DEFAULT_SIZE: u32 = 128;

/// Returns a `data:image/png;base64,` uri holding `png`.
pub fn png_data_uri(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}

/// An svg whose only content is an embedded png.
#[derive(Clone, Debug, Serialize)]
#[serde(rename = "svg")]
pub struct EmbeddedSvg {
    width: u32,
    height: u32,
    #[serde(rename = "viewBox")]
    view_box: String,
    fill: String,
    xmlns: String,
    #[serde(rename = "xmlns:xlink")]
    xmlns_xlink: String,
    image: Image,
}

#[derive(Clone, Debug, Serialize)]
struct Image {
    width: u32,
    height: u32,
    #[serde(rename = "xlink:href")]
    href: String,
}

impl EmbeddedSvg {
    /// Wraps `png` in an svg declaring `size`x`size`. The bytes are embedded
    /// as is, they are not checked to be a png.
    pub fn new(png: &[u8], size: u32) -> Self {
        Self {
            width: size,
            height: size,
            view_box: format!("0 0 {} {}", size, size),
            fill: "none".into(),
            xmlns: SVG_NAMESPACE.into(),
            xmlns_xlink: XLINK_NAMESPACE.into(),
            image: Image {
                width: size,
                height: size,
                href: png_data_uri(png),
            },
        }
    }

    pub fn open<P: AsRef<Path>>(png: P, size: u32) -> Result<Self> {
        let png = png.as_ref();
        let bytes =
            std::fs::read(png).with_context(|| format!("failed to read `{}`", png.display()))?;
        Ok(Self::new(&bytes, size))
    }

    pub fn href(&self) -> &str {
        &self.image.href
    }

    pub fn to_xml(&self) -> Result<String> {
        Ok(quick_xml::se::to_string(self)?)
    }

    /// Writes the document to `path`, replacing any existing file.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_document(path.as_ref(), &self.to_xml()?)
    }
}

pub(crate) fn write_document(path: &Path, xml: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, xml).with_context(|| format!("failed to write `{}`", path.display()))?;
    Ok(())
}
