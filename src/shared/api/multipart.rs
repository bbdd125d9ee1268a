// src/shared/api/multipart.rs
use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures::TryStreamExt;
use std::collections::HashMap;

use crate::shared::api::ApiResponse;
use crate::shared::domain::IncomingFile;

const MAX_TEXT_FIELD_BYTES: usize = 4 * 1024;
const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MultipartFormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("File too large (max {max_bytes} bytes)")]
    FileTooLarge { max_bytes: usize },

    #[error("Field '{0}' is too long")]
    FieldTooLong(String),

    #[error("Field '{0}' is not valid UTF-8")]
    InvalidUtf8(String),
}

/// Text fields plus at most one file part, read fully into memory.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<IncomingFile>,
}

impl MultipartForm {
    /// Reads every part of `payload`. The part named `file_field` is kept as the file;
    /// buffering stops as soon as it grows past `max_file_bytes`.
    pub async fn read(
        mut payload: Multipart,
        file_field: &str,
        max_file_bytes: usize,
    ) -> Result<Self, MultipartFormError> {
        let mut form = MultipartForm::default();

        while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == file_field {
                let filename = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or_default()
                    .to_string();
                let content_type = field
                    .content_type()
                    .map(|m| m.essence_str().to_string())
                    .unwrap_or_else(|| FALLBACK_CONTENT_TYPE.to_string());

                let mut data = Vec::new();
                while let Some(chunk) = field.try_next().await.map_err(malformed)? {
                    if data.len() + chunk.len() > max_file_bytes {
                        return Err(MultipartFormError::FileTooLarge {
                            max_bytes: max_file_bytes,
                        });
                    }
                    data.extend_from_slice(&chunk);
                }

                // An empty file input still produces a part with no name and no bytes.
                if filename.is_empty() && data.is_empty() {
                    continue;
                }

                form.file = Some(IncomingFile {
                    filename,
                    content_type,
                    data,
                });
                continue;
            }

            let mut buf = Vec::new();
            while let Some(chunk) = field.try_next().await.map_err(malformed)? {
                if buf.len() + chunk.len() > MAX_TEXT_FIELD_BYTES {
                    return Err(MultipartFormError::FieldTooLong(name));
                }
                buf.extend_from_slice(&chunk);
            }

            let value =
                String::from_utf8(buf).map_err(|_| MultipartFormError::InvalidUtf8(name.clone()))?;
            form.fields.insert(name, value);
        }

        Ok(form)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Text value or an empty string when the field is missing.
    pub fn text_or_empty(&self, name: &str) -> String {
        self.text(name).unwrap_or_default().to_string()
    }

    pub fn take_file(&mut self) -> Option<IncomingFile> {
        self.file.take()
    }
}

fn malformed(e: actix_multipart::MultipartError) -> MultipartFormError {
    MultipartFormError::Malformed(e.to_string())
}

pub fn multipart_error_response(err: &MultipartFormError) -> HttpResponse {
    match err {
        MultipartFormError::Malformed(_) => {
            ApiResponse::bad_request("INVALID_MULTIPART", &err.to_string())
        }
        MultipartFormError::FileTooLarge { .. } => {
            ApiResponse::bad_request("FILE_TOO_LARGE", &err.to_string())
        }
        MultipartFormError::FieldTooLong(_) | MultipartFormError::InvalidUtf8(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }
    }
}
