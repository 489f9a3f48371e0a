//! Fluent builder for assembling a [`Message`] before it is persisted

use crate::error::BuilderError;
use crate::schema::{Message, MessageAttachment, Room, User};

/// Accumulates message fields and snapshots them into an immutable
/// [`Message`] on [`build`](Self::build).
///
/// All setters return `&mut Self` so calls can be chained. That is a
/// convenience contract, not a concurrency one: the builder belongs to a
/// single owner for one construction session.
///
/// A message cannot be produced without a room and a sender. Both avatar
/// values (`emoji` and `avatar_url`) may be set; the most recently set one
/// takes display precedence in the produced message.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    room: Option<Room>,
    sender: Option<User>,
    text: Option<String>,
    emoji: Option<String>,
    avatar_url: Option<String>,
    alias: Option<String>,
    attachments: Vec<MessageAttachment>,
    editor: Option<User>,
    groupable: Option<bool>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the builder from an existing message snapshot.
    ///
    /// Any `id` on the snapshot is ignored: identity is assigned by the
    /// persistence layer, never by the builder.
    pub fn from_message(message: &Message) -> Self {
        Self {
            room: Some(message.room.clone()),
            sender: Some(message.sender.clone()),
            text: message.text.clone(),
            emoji: message.emoji.clone(),
            avatar_url: message.avatar_url.clone(),
            alias: message.alias.clone(),
            attachments: message.attachments.clone(),
            editor: message.editor.clone(),
            groupable: message.groupable,
        }
    }

    pub fn set_room(&mut self, room: Room) -> &mut Self {
        self.room = Some(room);
        self
    }

    pub fn room(&self) -> Option<&Room> {
        self.room.as_ref()
    }

    pub fn set_sender(&mut self, sender: User) -> &mut Self {
        self.sender = Some(sender);
        self
    }

    pub fn sender(&self) -> Option<&User> {
        self.sender.as_ref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Use an emoji code as the avatar. If an avatar URL was set earlier it
    /// is retained, but the emoji now wins for display.
    pub fn set_emoji_avatar(&mut self, emoji: impl Into<String>) -> &mut Self {
        self.emoji = Some(emoji.into());
        self
    }

    pub fn emoji_avatar(&self) -> Option<&str> {
        self.emoji.as_deref()
    }

    /// Use an image URL as the avatar. If an emoji was set earlier it is
    /// retained, but the URL now wins for display.
    pub fn set_avatar_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.avatar_url = Some(url.into());
        self
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn set_username_alias(&mut self, alias: impl Into<String>) -> &mut Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn username_alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Append one attachment, keeping any existing ones.
    pub fn add_attachment(&mut self, attachment: MessageAttachment) -> &mut Self {
        self.attachments.push(attachment);
        self
    }

    /// Replace the whole attachment list, discarding the prior one.
    pub fn set_attachments(&mut self, attachments: Vec<MessageAttachment>) -> &mut Self {
        self.attachments = attachments;
        self
    }

    /// Current attachments, in order. This is a view of builder state;
    /// mutate the list through the builder, not through the return value.
    pub fn attachments(&self) -> &[MessageAttachment] {
        &self.attachments
    }

    /// Replace the attachment at `position`.
    pub fn replace_attachment(
        &mut self,
        position: usize,
        attachment: MessageAttachment,
    ) -> Result<&mut Self, BuilderError> {
        let len = self.attachments.len();
        match self.attachments.get_mut(position) {
            Some(slot) => {
                *slot = attachment;
                Ok(self)
            }
            None => Err(BuilderError::IndexOutOfRange { position, len }),
        }
    }

    /// Remove the attachment at `position`, shifting later ones down.
    pub fn remove_attachment(&mut self, position: usize) -> Result<&mut Self, BuilderError> {
        let len = self.attachments.len();
        if position >= len {
            return Err(BuilderError::IndexOutOfRange { position, len });
        }
        self.attachments.remove(position);
        Ok(self)
    }

    /// Set the user editing an existing message.
    pub fn set_editor(&mut self, editor: User) -> &mut Self {
        self.editor = Some(editor);
        self
    }

    pub fn editor(&self) -> Option<&User> {
        self.editor.as_ref()
    }

    pub fn set_groupable(&mut self, groupable: bool) -> &mut Self {
        self.groupable = Some(groupable);
        self
    }

    pub fn groupable(&self) -> Option<bool> {
        self.groupable
    }

    /// Snapshot the current state into an immutable [`Message`].
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::MissingRequiredField`] when no room or no
    /// sender has been set. The builder itself is untouched and may keep
    /// being mutated after a failed build.
    pub fn build(&self) -> Result<Message, BuilderError> {
        let room = self
            .room
            .clone()
            .ok_or(BuilderError::MissingRequiredField { field: "room" })?;
        let sender = self
            .sender
            .clone()
            .ok_or(BuilderError::MissingRequiredField { field: "sender" })?;

        Ok(Message {
            id: None,
            room,
            sender,
            text: self.text.clone(),
            emoji: self.emoji.clone(),
            avatar_url: self.avatar_url.clone(),
            alias: self.alias.clone(),
            attachments: self.attachments.clone(),
            editor: self.editor.clone(),
            groupable: self.groupable,
            unknown_fields: Default::default(),
        })
    }
}
