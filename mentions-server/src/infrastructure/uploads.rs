use std::fmt;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use chrono::{Datelike, NaiveDate, Utc};
use tokio::io::{AsyncRead, AsyncWriteExt};
use tracing::{info, warn};

use crate::domain::error::DomainError;

const FALLBACK_FILENAME: &str = "upload";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum UploadKind {
    Avatar,
}

impl UploadKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            UploadKind::Avatar => "avatar",
        }
    }
}

/// An incoming file whose bytes have not been read yet.
pub(crate) struct FileUpload {
    pub(crate) filename: String,
    pub(crate) reader: Pin<Box<dyn AsyncRead + Send>>,
}

impl FileUpload {
    pub(crate) fn new(filename: impl Into<String>, reader: impl AsyncRead + Send + 'static) -> Self {
        Self {
            filename: filename.into(),
            reader: Box::pin(reader),
        }
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("filename", &self.filename)
            .finish_non_exhaustive()
    }
}

/// Writes uploads under `<root>/<kind>/<user id>/<yyyy>/<mm>/<dd>/<filename>`.
#[derive(Debug, Clone)]
pub(crate) struct UploadStorage {
    root: PathBuf,
}

impl UploadStorage {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub(crate) fn upload_path(
        &self,
        kind: UploadKind,
        user_id: i64,
        filename: &str,
        date: NaiveDate,
    ) -> PathBuf {
        let mut path = self.root.clone();
        path.push(kind.as_str());
        path.push(user_id.to_string());
        path.push(format!("{:04}", date.year()));
        path.push(format!("{:02}", date.month()));
        path.push(format!("{:02}", date.day()));
        path.push(sanitize_filename(filename));
        path
    }

    /// Streams the upload to disk and returns the stored path once every byte
    /// has been flushed.
    pub(crate) async fn store(
        &self,
        kind: UploadKind,
        user_id: i64,
        mut upload: FileUpload,
    ) -> Result<String, DomainError> {
        let path = self.upload_path(kind, user_id, &upload.filename, Utc::now().date_naive());
        if let Some(directory) = path.parent() {
            tokio::fs::create_dir_all(directory)
                .await
                .map_err(|err| io_error("create upload directory", err))?;
        }

        let mut out = tokio::fs::File::create(&path)
            .await
            .map_err(|err| io_error("create upload file", err))?;
        let written = match copy_to_file(&mut upload.reader, &mut out).await {
            Ok(written) => written,
            Err(err) => {
                drop(out);
                discard_partial(&path).await;
                return Err(err);
            }
        };

        let stored = path.to_string_lossy().into_owned();
        info!(user_id, kind = kind.as_str(), bytes = written, path = %stored, "upload stored");
        Ok(stored)
    }
}

async fn copy_to_file(
    reader: &mut Pin<Box<dyn AsyncRead + Send>>,
    out: &mut tokio::fs::File,
) -> Result<u64, DomainError> {
    let written = tokio::io::copy(reader, out)
        .await
        .map_err(|err| io_error("write upload", err))?;
    out.flush()
        .await
        .map_err(|err| io_error("flush upload", err))?;
    Ok(written)
}

async fn discard_partial(path: &Path) {
    if let Err(err) = tokio::fs::remove_file(path).await {
        warn!(path = %path.display(), error = %err, "failed to remove partial upload");
    }
}

fn sanitize_filename(filename: &str) -> String {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if name.is_empty() || name == "." || name == ".." {
        FALLBACK_FILENAME.to_string()
    } else {
        name.to_string()
    }
}

fn io_error(action: &str, err: std::io::Error) -> DomainError {
    DomainError::Unexpected(format!("failed to {action}: {err}"))
}
