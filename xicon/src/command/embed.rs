use crate::task::{self, TaskRunner};
use crate::{EmbedConfig, Failure};
use std::path::PathBuf;
use svgicon::EmbeddedSvg;

/// Wraps the input png in an svg at the output path.
///
/// The input is expected to be a square png, usually the `icon128.png`
/// written by [`generate_icons`](super::generate_icons), but its bytes are
/// embedded without being checked.
pub fn embed_icon_svg(config: &EmbedConfig) -> Result<PathBuf, Failure> {
    if config.size == 0 {
        return Err(Failure::InvalidConfig("svg size must be positive".into()));
    }
    if !config.input.exists() {
        return Err(Failure::MissingInput(config.input.clone()));
    }
    let mut runner = TaskRunner::new(1);
    runner.start_task(format!("Embed {}", config.input.display()));
    EmbeddedSvg::open(&config.input, config.size)?.write(&config.output)?;
    runner.end_task();
    task::done(format!("Embedded icon in {}", config.output.display()));
    Ok(config.output.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::tests::write_square;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use quick_xml::events::Event;
    use quick_xml::Reader;
    use std::collections::HashMap;
    use std::path::Path;

    fn config(dir: &Path) -> EmbedConfig {
        EmbedConfig {
            input: dir.join("icon128.png"),
            output: dir.join("button.svg"),
            ..Default::default()
        }
    }

    /// Collects the attributes of every element, in document order.
    fn elements(xml: &str) -> Vec<(String, HashMap<String, String>)> {
        let mut reader = Reader::from_str(xml);
        let mut elements = vec![];
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => {
                    let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
                    let attrs = e
                        .attributes()
                        .map(|attr| {
                            let attr = attr.unwrap();
                            let key = String::from_utf8(attr.key.as_ref().to_vec()).unwrap();
                            (key, attr.unescape_value().unwrap().into_owned())
                        })
                        .collect();
                    elements.push((name, attrs));
                }
                Event::Eof => break,
                _ => {}
            }
        }
        elements
    }

    #[test]
    fn test_embed() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        write_square(&config.input, 128, 128, [255, 0, 0, 255]);

        let out = embed_icon_svg(&config).unwrap();
        assert_eq!(out, config.output);
        let xml = std::fs::read_to_string(&out).unwrap();
        let elements = elements(&xml);
        assert_eq!(elements.len(), 2);

        let (name, svg) = &elements[0];
        assert_eq!(name, "svg");
        assert_eq!(svg["width"], "128");
        assert_eq!(svg["height"], "128");
        assert_eq!(svg["viewBox"], "0 0 128 128");
        assert_eq!(svg["xmlns"], "http://www.w3.org/2000/svg");
        assert_eq!(svg["xmlns:xlink"], "http://www.w3.org/1999/xlink");

        let (name, image) = &elements[1];
        assert_eq!(name, "image");
        assert_eq!(image["width"], "128");
        assert_eq!(image["height"], "128");
        let payload = image["xlink:href"]
            .strip_prefix("data:image/png;base64,")
            .unwrap();
        let png = std::fs::read(&config.input).unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), png);
    }

    #[test]
    fn test_fixed_size_ignores_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        write_square(&config.input, 32, 32, [0, 0, 0, 255]);

        embed_icon_svg(&config).unwrap();
        let xml = std::fs::read_to_string(&config.output).unwrap();
        assert!(xml.contains(r#"viewBox="0 0 128 128""#));
    }

    #[test]
    fn test_opaque_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        std::fs::write(&config.input, b"abc").unwrap();

        embed_icon_svg(&config).unwrap();
        let xml = std::fs::read_to_string(&config.output).unwrap();
        assert!(xml.contains("data:image/png;base64,YWJj"));
    }

    #[test]
    fn test_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path());
        let err = embed_icon_svg(&config).unwrap_err();
        assert!(matches!(err, Failure::MissingInput(_)));
        assert!(!config.output.exists());
    }

    #[test]
    fn test_zero_size() {
        let dir = tempfile::tempdir().unwrap();
        let config = EmbedConfig {
            size: 0,
            ..config(dir.path())
        };
        assert!(matches!(
            embed_icon_svg(&config),
            Err(Failure::InvalidConfig(_))
        ));
    }
}
