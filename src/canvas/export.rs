//! Exported patterns: data URIs for the backend, PNG files for the CLI.

use super::CanvasError;
use crate::config::{ExportConfig, expand_tilde};
use base64::{Engine, engine::general_purpose};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

pub const PNG_MIME: &str = "image/png";

/// Wraps PNG bytes as `data:image/png;base64,...`.
pub fn encode_data_uri(png: &[u8]) -> String {
    format!("data:{};base64,{}", PNG_MIME, general_purpose::STANDARD.encode(png))
}

/// Splits a base64 data URI into its mime type and decoded payload.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), CanvasError> {
    let rest = uri
        .trim()
        .strip_prefix("data:")
        .ok_or_else(|| CanvasError::DataUri("missing 'data:' prefix".to_string()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| CanvasError::DataUri("missing ',' separator".to_string()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| CanvasError::DataUri("only base64 payloads are supported".to_string()))?;

    let bytes = general_purpose::STANDARD.decode(payload)?;
    Ok((mime.to_string(), bytes))
}

/// Expands the chrono specifiers in `template` and appends `.png`.
pub fn generate_filename(template: &str) -> String {
    format!("{}.png", Local::now().format(template))
}

/// Writes `png` to the configured export directory under a timestamped name.
pub fn save_png(png: &[u8], config: &ExportConfig) -> Result<PathBuf, CanvasError> {
    let directory = expand_tilde(&config.directory);
    let path = directory.join(generate_filename(&config.filename_template));
    write_png(png, &path)?;
    Ok(path)
}

/// Writes `png` to `path`, creating missing parent directories.
pub fn write_png(png: &[u8], path: &Path) -> Result<(), CanvasError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        log::info!("Creating export directory: {}", parent.display());
        fs::create_dir_all(parent)?;
    }

    log::info!("Saving pattern to: {} ({} bytes)", path.display(), png.len());
    fs::write(path, png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_uses_template_and_png_extension() {
        let name = generate_filename("pattern_%Y");
        assert!(name.starts_with("pattern_2"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn save_png_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            directory: dir.path().join("nested").display().to_string(),
            filename_template: "fixed".to_string(),
        };
        let path = save_png(&[137, 80, 78, 71], &config).unwrap();
        assert_eq!(path, dir.path().join("nested").join("fixed.png"));
        assert_eq!(fs::read(&path).unwrap(), vec![137, 80, 78, 71]);
    }

    #[test]
    fn decodes_what_it_encodes() {
        let uri = encode_data_uri(&[137, 80, 78, 71]);
        assert!(uri.starts_with("data:image/png;base64,"));
        let (mime, bytes) = decode_data_uri(&uri).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, vec![137, 80, 78, 71]);
    }

    #[test]
    fn rejects_non_base64_uris() {
        assert!(matches!(
            decode_data_uri("data:text/plain,hello"),
            Err(CanvasError::DataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("image/png;base64,AAAA"),
            Err(CanvasError::DataUri(_))
        ));
        assert!(matches!(
            decode_data_uri("data:image/png;base64,@@@"),
            Err(CanvasError::Base64(_))
        ));
    }
}
