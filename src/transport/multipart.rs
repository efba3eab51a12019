//! Multipart form construction for file uploads.
//!
//! Parts are described here and only turned into a `reqwest` form when the request is
//! sent. File parts backed by a path are opened at that point and streamed from disk.

use crate::{Error, Result};
use bytes::Bytes;
use std::path::{Path, PathBuf};
use tokio_util::io::ReaderStream;

/// Where the bytes of a file part come from.
#[derive(Debug, Clone)]
pub enum PartSource {
    Bytes(Bytes),
    Path(PathBuf),
}

/// A named file within a multipart form.
#[derive(Debug, Clone)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub source: PartSource,
}

impl FilePart {
    pub fn from_bytes(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            source: PartSource::Bytes(data.into()),
        }
    }

    /// File name and content type are taken from the path; the file is read only on send.
    pub fn from_path(field: impl Into<String>, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());
        Self {
            field: field.into(),
            content_type: guess_content_type(path).to_string(),
            file_name,
            source: PartSource::Path(path.to_path_buf()),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    async fn into_part(self) -> Result<reqwest::multipart::Part> {
        let part = match self.source {
            PartSource::Bytes(data) => {
                let len = data.len() as u64;
                reqwest::multipart::Part::stream_with_length(reqwest::Body::from(data), len)
            }
            PartSource::Path(path) => {
                let file = tokio::fs::File::open(&path).await?;
                let len = file.metadata().await?.len();
                let body = reqwest::Body::wrap_stream(ReaderStream::new(file));
                reqwest::multipart::Part::stream_with_length(body, len)
            }
        };
        part.file_name(self.file_name)
            .mime_str(&self.content_type)
            .map_err(|e| Error::validation(format!("Invalid content type '{}': {}", self.content_type, e)))
    }
}

/// Scalar fields plus file parts, sent as `multipart/form-data`.
#[derive(Debug, Clone, Default)]
pub struct MultipartForm {
    fields: Vec<(String, String)>,
    files: Vec<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Adds the field only when a value is present.
    pub fn text_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.text(name, v.to_string()),
            None => self,
        }
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn files(&self) -> &[FilePart] {
        &self.files
    }

    pub(crate) async fn into_reqwest(self) -> Result<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let field = file.field.clone();
            form = form.part(field, file.into_part().await?);
        }
        Ok(form)
    }
}

/// Content type for common audio/video upload extensions.
pub fn guess_content_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "opus" => "audio/ogg",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        "m4a" => "audio/mp4",
        "webm" => "audio/webm",
        "mp4" => "video/mp4",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
