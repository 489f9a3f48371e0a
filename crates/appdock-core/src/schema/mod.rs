//! Schema types shared between the host and its apps
//!
//! These are pure records: no control flow, camelCase on the wire, unknown
//! fields preserved so a newer host and an older app can exchange values
//! without data loss.

pub mod message;
pub mod upload;

pub use message::{Message, MessageAttachment, Room, User};
pub use upload::{FileUploadContext, UploadDetails};
