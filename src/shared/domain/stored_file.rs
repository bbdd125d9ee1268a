use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// A file as received from a multipart body, before policy checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl IncomingFile {
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn into_stored(self, uploaded_at: DateTime<Utc>) -> StoredFile {
        StoredFile {
            filename: self.filename,
            content_type: self.content_type,
            data: self.data,
            uploaded_at,
        }
    }
}

/// A binary blob embedded in a record (credential scan, profile picture, upload).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub filename: String,
    pub content_type: String,
    pub data: Vec<u8>,
    pub uploaded_at: DateTime<Utc>,
}

impl StoredFile {
    /// Rebuilds an embedded file from its nullable table columns.
    /// Returns `None` unless every column is populated.
    pub fn from_columns(
        filename: Option<String>,
        content_type: Option<String>,
        data: Option<Vec<u8>>,
        uploaded_at: Option<DateTime<FixedOffset>>,
    ) -> Option<Self> {
        Some(Self {
            filename: filename?,
            content_type: content_type?,
            data: data?,
            uploaded_at: uploaded_at?.with_timezone(&Utc),
        })
    }

    pub fn metadata(&self) -> FileMetadata {
        FileMetadata {
            filename: self.filename.clone(),
            content_type: self.content_type.clone(),
            size_bytes: self.data.len() as u64,
            uploaded_at: self.uploaded_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    #[schema(example = "national-id.pdf")]
    pub filename: String,
    #[schema(example = "application/pdf")]
    pub content_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}
