//! 3D model asset validation.
//!
//! Only binary glTF (`.glb`) files are accepted. Besides the extension and the
//! size limit, the 12-byte GLB header is checked so that a renamed file is
//! caught at import time instead of failing later in the gallery.

use super::FileAsset;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default import size limit (1 MiB).
pub const DEFAULT_MAX_ASSET_BYTES: u64 = 1024 * 1024;
/// Mime type recorded for imported models.
pub const GLB_MIME: &str = "model/gltf-binary";

const GLB_MAGIC: &[u8; 4] = b"glTF";
const GLB_HEADER_LEN: usize = 12;
const GLB_VERSION: u32 = 2;

/// Why a model file was rejected.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Please select a GLB file")]
    NotGlb { name: String },

    #[error("The file must be less than 1 MB")]
    TooLarge { size: u64, max: u64 },

    #[error("{name} is not a binary glTF file: {reason}")]
    BadHeader { name: String, reason: String },

    #[error("model file {} not found", .0.display())]
    Missing(PathBuf),

    #[error("failed to read model file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A validated GLB model ready to be sent as a design source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelAsset {
    pub file: FileAsset,
    /// GLB container version from the header
    pub version: u32,
    /// Total length declared in the header
    pub declared_len: u32,
}

impl ModelAsset {
    pub fn size(&self) -> usize {
        self.file.data.len()
    }
}

/// Returns true when `name` ends in `.glb`, ignoring case.
pub fn has_glb_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("glb"))
}

/// Validates an in-memory model file.
pub fn validate_model(name: &str, bytes: Vec<u8>, max_bytes: u64) -> Result<ModelAsset, AssetError> {
    if !has_glb_extension(name) {
        return Err(AssetError::NotGlb {
            name: name.to_string(),
        });
    }

    let size = bytes.len() as u64;
    if size > max_bytes {
        return Err(AssetError::TooLarge {
            size,
            max: max_bytes,
        });
    }

    let bad_header = |reason: String| AssetError::BadHeader {
        name: name.to_string(),
        reason,
    };

    if bytes.len() < GLB_HEADER_LEN {
        return Err(bad_header(format!(
            "only {} bytes, header needs {}",
            bytes.len(),
            GLB_HEADER_LEN
        )));
    }
    if &bytes[0..4] != GLB_MAGIC {
        return Err(bad_header("missing glTF magic".to_string()));
    }

    let version = read_u32_le(&bytes[4..8]);
    if version != GLB_VERSION {
        return Err(bad_header(format!("unsupported version {}", version)));
    }

    let declared_len = read_u32_le(&bytes[8..12]);
    if declared_len as u64 > size {
        return Err(bad_header(format!(
            "header declares {} bytes but file has {}",
            declared_len, size
        )));
    }

    Ok(ModelAsset {
        file: FileAsset {
            name: name.to_string(),
            mime_type: GLB_MIME.to_string(),
            data: bytes,
        },
        version,
        declared_len,
    })
}

/// Reads a model from disk and validates it.
///
/// The size limit is checked against file metadata before reading.
pub fn load_model_file(path: &Path, max_bytes: u64) -> Result<ModelAsset, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if !has_glb_extension(&name) {
        return Err(AssetError::NotGlb { name });
    }

    let io_err = |source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    };
    let size = fs::metadata(path).map_err(io_err)?.len();
    if size > max_bytes {
        return Err(AssetError::TooLarge {
            size,
            max: max_bytes,
        });
    }

    let bytes = fs::read(path).map_err(io_err)?;
    log::debug!("Read {} bytes of model data from {}", bytes.len(), path.display());
    validate_model(&name, bytes, max_bytes)
}

fn read_u32_le(bytes: &[u8]) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&bytes[..4]);
    u32::from_le_bytes(word)
}

/// Builds a minimal valid GLB container around `payload`.
#[cfg(test)]
pub(crate) fn glb_bytes(payload: &[u8]) -> Vec<u8> {
    let total = (GLB_HEADER_LEN + payload.len()) as u32;
    let mut bytes = Vec::with_capacity(total as usize);
    bytes.extend_from_slice(GLB_MAGIC);
    bytes.extend_from_slice(&GLB_VERSION.to_le_bytes());
    bytes.extend_from_slice(&total.to_le_bytes());
    bytes.extend_from_slice(payload);
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_glb() {
        let asset = validate_model("Shoe.GLB", glb_bytes(b"json"), DEFAULT_MAX_ASSET_BYTES).unwrap();
        assert_eq!(asset.version, 2);
        assert_eq!(asset.declared_len, 16);
        assert_eq!(asset.file.mime_type, GLB_MIME);
        assert_eq!(asset.file.name, "Shoe.GLB");
        assert_eq!(asset.size(), 16);
    }

    #[test]
    fn rejects_wrong_extension_first() {
        let err = validate_model("shoe.gltf", glb_bytes(b""), DEFAULT_MAX_ASSET_BYTES).unwrap_err();
        assert!(matches!(err, AssetError::NotGlb { .. }));
        assert_eq!(err.to_string(), "Please select a GLB file");
    }

    #[test]
    fn rejects_oversize_files() {
        let bytes = glb_bytes(&vec![0u8; 1024 * 1024]);
        let err = validate_model("big.glb", bytes, DEFAULT_MAX_ASSET_BYTES).unwrap_err();
        assert!(matches!(err, AssetError::TooLarge { .. }));
        assert_eq!(err.to_string(), "The file must be less than 1 MB");
    }

    #[test]
    fn exactly_at_limit_is_accepted() {
        let bytes = glb_bytes(&vec![0u8; 20]);
        assert!(validate_model("edge.glb", bytes, 32).is_ok());
    }

    #[test]
    fn rejects_bad_headers() {
        let short = validate_model("a.glb", b"glTF".to_vec(), 1024);
        assert!(matches!(short, Err(AssetError::BadHeader { .. })));

        let mut wrong_magic = glb_bytes(b"");
        wrong_magic[0] = b'x';
        assert!(matches!(
            validate_model("a.glb", wrong_magic, 1024),
            Err(AssetError::BadHeader { .. })
        ));

        let mut v1 = glb_bytes(b"");
        v1[4] = 1;
        assert!(matches!(
            validate_model("a.glb", v1, 1024),
            Err(AssetError::BadHeader { .. })
        ));

        let mut truncated = glb_bytes(b"payload");
        truncated.truncate(14);
        assert!(matches!(
            validate_model("a.glb", truncated, 1024),
            Err(AssetError::BadHeader { .. })
        ));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garment.glb");
        std::fs::write(&path, glb_bytes(b"mesh")).unwrap();

        let asset = load_model_file(&path, DEFAULT_MAX_ASSET_BYTES).unwrap();
        assert_eq!(asset.file.name, "garment.glb");

        let missing = load_model_file(&dir.path().join("nope.glb"), DEFAULT_MAX_ASSET_BYTES);
        assert!(matches!(missing, Err(AssetError::Missing(_))));
    }
}
