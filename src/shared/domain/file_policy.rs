use std::path::Path;

use super::stored_file::IncomingFile;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilePolicyError {
    #[error("File is empty")]
    EmptyFile,

    #[error("Invalid file name")]
    InvalidFileName,

    #[error("File too large (max {max_bytes} bytes, got {actual_bytes} bytes)")]
    FileTooLarge { max_bytes: usize, actual_bytes: usize },

    #[error("Invalid file type: {0}. Allowed types are JPEG, PNG and PDF")]
    InvalidMimeType(String),
}

/// Limits applied to every credential, picture and generic upload.
#[derive(Debug, Clone)]
pub struct FilePolicy {
    pub max_file_size_bytes: usize,
    pub max_file_name_len: usize,
    pub allowed_mime_types: &'static [&'static str],
}

impl Default for FilePolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: Self::DEFAULT_MAX_FILE_SIZE_BYTES,
            max_file_name_len: 255,
            allowed_mime_types: Self::DEFAULT_ALLOWED_MIME_TYPES,
        }
    }
}

impl FilePolicy {
    pub const DEFAULT_MAX_FILE_SIZE_BYTES: usize = 5 * 1024 * 1024; // 5MB
    pub const DEFAULT_ALLOWED_MIME_TYPES: &'static [&'static str] =
        &["image/jpeg", "image/png", "application/pdf"];

    /// Env var: `UPLOAD_MAX_FILE_BYTES` (falls back to 5MB).
    pub fn from_env() -> Self {
        let max_file_size_bytes = std::env::var("UPLOAD_MAX_FILE_BYTES")
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::DEFAULT_MAX_FILE_SIZE_BYTES);

        Self {
            max_file_size_bytes,
            ..Self::default()
        }
    }

    /// Checks the file and returns it with a sanitized base name.
    pub fn validate(&self, file: IncomingFile) -> Result<IncomingFile, FilePolicyError> {
        if file.data.is_empty() {
            return Err(FilePolicyError::EmptyFile);
        }

        if file.size_bytes() > self.max_file_size_bytes {
            return Err(FilePolicyError::FileTooLarge {
                max_bytes: self.max_file_size_bytes,
                actual_bytes: file.size_bytes(),
            });
        }

        let content_type = file.content_type.trim().to_ascii_lowercase();
        if !self.allowed_mime_types.contains(&content_type.as_str()) {
            return Err(FilePolicyError::InvalidMimeType(file.content_type));
        }

        let filename = sanitize_basename(&file.filename, self.max_file_name_len)?;

        Ok(IncomingFile {
            filename,
            content_type,
            data: file.data,
        })
    }
}

fn sanitize_basename(file_name: &str, max_len: usize) -> Result<String, FilePolicyError> {
    // Browsers on some platforms send the full client path.
    let normalized = file_name.replace('\\', "/");
    let base = Path::new(&normalized)
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::trim)
        .ok_or(FilePolicyError::InvalidFileName)?;

    if base.is_empty() || base.len() > max_len {
        return Err(FilePolicyError::InvalidFileName);
    }

    if base.chars().any(|c| c.is_control()) {
        return Err(FilePolicyError::InvalidFileName);
    }

    Ok(base.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, content_type: &str, size: usize) -> IncomingFile {
        IncomingFile {
            filename: name.to_string(),
            content_type: content_type.to_string(),
            data: vec![7u8; size],
        }
    }

    #[test]
    fn test_accepts_allowed_types() {
        let policy = FilePolicy::default();

        for ct in ["image/jpeg", "image/png", "application/pdf"] {
            assert!(policy.validate(file("scan.bin", ct, 10)).is_ok(), "{ct}");
        }
    }

    #[test]
    fn test_normalizes_content_type_case() {
        let policy = FilePolicy::default();
        let validated = policy.validate(file("id.PDF", "Application/PDF", 10)).unwrap();
        assert_eq!(validated.content_type, "application/pdf");
        assert_eq!(validated.filename, "id.PDF");
    }

    #[test]
    fn test_rejects_other_types() {
        let policy = FilePolicy::default();
        let err = policy
            .validate(file("notes.txt", "text/plain", 10))
            .unwrap_err();
        assert_eq!(err, FilePolicyError::InvalidMimeType("text/plain".to_string()));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let policy = FilePolicy::default();
        let max = FilePolicy::DEFAULT_MAX_FILE_SIZE_BYTES;

        assert!(policy.validate(file("a.png", "image/png", max)).is_ok());
        assert_eq!(
            policy.validate(file("a.png", "image/png", max + 1)).unwrap_err(),
            FilePolicyError::FileTooLarge {
                max_bytes: max,
                actual_bytes: max + 1
            }
        );
    }

    #[test]
    fn test_rejects_empty_file() {
        let policy = FilePolicy::default();
        assert_eq!(
            policy.validate(file("a.png", "image/png", 0)).unwrap_err(),
            FilePolicyError::EmptyFile
        );
    }

    #[test]
    fn test_strips_client_paths() {
        let policy = FilePolicy::default();

        let validated = policy
            .validate(file("C:\\Users\\me\\id.png", "image/png", 4))
            .unwrap();
        assert_eq!(validated.filename, "id.png");

        let validated = policy
            .validate(file("../../etc/id.png", "image/png", 4))
            .unwrap();
        assert_eq!(validated.filename, "id.png");
    }

    #[test]
    fn test_rejects_bad_names() {
        let policy = FilePolicy::default();

        assert_eq!(
            policy.validate(file("", "image/png", 4)).unwrap_err(),
            FilePolicyError::InvalidFileName
        );
        assert_eq!(
            policy.validate(file("a\u{7}.png", "image/png", 4)).unwrap_err(),
            FilePolicyError::InvalidFileName
        );
        let long = format!("{}.png", "x".repeat(300));
        assert_eq!(
            policy.validate(file(&long, "image/png", 4)).unwrap_err(),
            FilePolicyError::InvalidFileName
        );
    }
}
