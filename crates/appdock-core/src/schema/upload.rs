//! File upload context: upload metadata paired with its byte stream

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tokio::io::AsyncRead;

/// Metadata describing a file being uploaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadDetails {
    pub name: String,

    pub size: u64,

    #[serde(rename = "type")]
    pub mime_type: String,

    /// Room the upload is posted to
    pub room_id: String,

    /// User performing the upload
    pub user_id: String,

    /// Unknown fields for forward compatibility
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

/// A single upload transaction: details plus the owned byte stream.
///
/// The context owns the stream for the duration of one upload and is consumed
/// by it; it is not reused across transactions.
pub struct FileUploadContext {
    details: UploadDetails,
    stream: Box<dyn AsyncRead + Send + Unpin>,
}

impl FileUploadContext {
    pub fn new(
        details: UploadDetails,
        stream: impl AsyncRead + Send + Unpin + 'static,
    ) -> Self {
        Self {
            details,
            stream: Box::new(stream),
        }
    }

    pub fn details(&self) -> &UploadDetails {
        &self.details
    }

    /// Consume the context, handing the stream to the upload collaborator.
    pub fn into_parts(self) -> (UploadDetails, Box<dyn AsyncRead + Send + Unpin>) {
        (self.details, self.stream)
    }
}

impl std::fmt::Debug for FileUploadContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUploadContext")
            .field("details", &self.details)
            .field("stream", &"<AsyncRead>")
            .finish()
    }
}
