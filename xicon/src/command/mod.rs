use crate::Failure;

mod embed;
mod generate;
mod placeholder;

pub use embed::embed_icon_svg;
pub use generate::generate_icons;
pub use placeholder::placeholder_icons;

/// `icon{size}.{ext}`
pub fn icon_file_name(size: u32, ext: &str) -> String {
    format!("icon{}.{}", size, ext)
}

fn check_sizes(sizes: &[u32]) -> Result<(), Failure> {
    if sizes.is_empty() {
        return Err(Failure::InvalidConfig("no icon sizes configured".into()));
    }
    if sizes.contains(&0) {
        return Err(Failure::InvalidConfig("icon sizes must be positive".into()));
    }
    Ok(())
}
