//! Core data contracts for appdock
//!
//! This crate provides the data-model side of the plugin host: the message
//! and upload schemas apps produce, and the builder used to assemble a
//! message before it is handed to a persistence collaborator.
//!
//! All schema types are designed to:
//! - Preserve unknown fields for forward compatibility
//! - Use camelCase on the wire via serde
//! - Support round-trip serialization without data loss

pub mod builder;
pub mod error;
pub mod logging;
pub mod schema;

pub use builder::MessageBuilder;
pub use error::BuilderError;
pub use schema::{FileUploadContext, Message, MessageAttachment, Room, UploadDetails, User};
