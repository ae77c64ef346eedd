use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

/// Resampling filter used when scaling an icon.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub enum Filter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
    Triangle,
    Nearest,
}

impl Filter {
    fn filter_type(self) -> FilterType {
        match self {
            Self::Lanczos3 => FilterType::Lanczos3,
            Self::CatmullRom => FilterType::CatmullRom,
            Self::Gaussian => FilterType::Gaussian,
            Self::Triangle => FilterType::Triangle,
            Self::Nearest => FilterType::Nearest,
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Lanczos3 => write!(f, "lanczos3"),
            Self::CatmullRom => write!(f, "catmull-rom"),
            Self::Gaussian => write!(f, "gaussian"),
            Self::Triangle => write!(f, "triangle"),
            Self::Nearest => write!(f, "nearest"),
        }
    }
}

impl std::str::FromStr for Filter {
    type Err = anyhow::Error;

    fn from_str(filter: &str) -> Result<Self> {
        Ok(match filter {
            "lanczos3" => Self::Lanczos3,
            "catmull-rom" => Self::CatmullRom,
            "gaussian" => Self::Gaussian,
            "triangle" => Self::Triangle,
            "nearest" => Self::Nearest,
            _ => anyhow::bail!("unsupported filter {}", filter),
        })
    }
}

/// A decoded source image that can be written out at several square sizes.
///
/// The source is never modified by [`Scaler::write`]; every call resizes a
/// fresh copy, so sizes can be written in any order.
pub struct Scaler {
    img: DynamicImage,
    filter: Filter,
}

impl Scaler {
    pub fn new(img: DynamicImage) -> Self {
        Self {
            img,
            filter: Filter::default(),
        }
    }

    /// Decodes the image at `path`. The format is sniffed from the file
    /// contents, falling back to the extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let img = ImageReader::open(path)
            .with_context(|| format!("failed to open `{}`", path.display()))?
            .with_guessed_format()?
            .decode()
            .with_context(|| format!("failed to decode `{}`", path.display()))?;
        Ok(Self::new(img))
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    pub fn is_square(&self) -> bool {
        let (width, height) = self.dimensions();
        width == height
    }

    /// Drops channels that carry no information: grayscale images become
    /// luma, fully opaque images lose their alpha channel.
    pub fn optimize(&mut self) {
        let rgba = self.img.to_rgba8();
        let is_grayscale = rgba.pixels().all(|p| p[0] == p[1] && p[1] == p[2]);
        let is_opaque = rgba.pixels().all(|p| p[3] == 255);
        match (is_grayscale, is_opaque) {
            (true, true) => self.img = DynamicImage::ImageLuma8(self.img.to_luma8()),
            (true, false) => self.img = DynamicImage::ImageLumaA8(self.img.to_luma_alpha8()),
            (false, true) => self.img = DynamicImage::ImageRgb8(self.img.to_rgb8()),
            (false, false) => {}
        }
    }

    /// Encodes the image resized to exactly `size`x`size` as png. Non square
    /// sources are stretched, not cropped.
    pub fn write<W: Write + Seek>(&self, w: &mut W, size: u32) -> Result<()> {
        anyhow::ensure!(size > 0, "icon size must be positive");
        self.img
            .resize_exact(size, size, self.filter.filter_type())
            .write_to(w, ImageFormat::Png)?;
        Ok(())
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, size: u32) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("failed to create `{}`", path.display()))?;
        let mut w = BufWriter::new(file);
        self.write(&mut w, size)?;
        w.flush()?;
        tracing::debug!("wrote {}x{} icon to {}", size, size, path.display());
        Ok(())
    }
}
