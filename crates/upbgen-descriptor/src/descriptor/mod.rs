//! Read-only descriptor model.
//!
//! A [`DescriptorPool`] owns every message and field record. Callers only ever
//! see the borrowed handles [`MessageDescriptor`] and [`FieldDescriptor`],
//! which resolve through the pool on each lookup.

mod field;
mod message;

pub use field::FieldDescriptor;
pub use message::MessageDescriptor;

use crate::FieldNumber;
use std::collections::HashMap;

///
/// MessageId
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct MessageId(usize);

impl MessageId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

///
/// FieldId
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldId(usize);

impl FieldId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

///
/// MessageRecord
///

#[derive(Clone, Debug)]
pub(crate) struct MessageRecord {
    pub(crate) full_name: String,
    pub(crate) fields: Vec<FieldId>,
}

///
/// FieldRecord
///
/// `parent` is a handle into the owning pool, never a copy of the message.
///

#[derive(Clone, Debug)]
pub(crate) struct FieldRecord {
    pub(crate) name: String,
    pub(crate) number: FieldNumber,
    pub(crate) parent: Option<MessageId>,
}

///
/// DescriptorPool
///
/// Immutable once built; see [`crate::PoolBuilder`].
///

#[derive(Clone, Debug, Default)]
pub struct DescriptorPool {
    messages: Vec<MessageRecord>,
    fields: Vec<FieldRecord>,
    by_name: HashMap<String, MessageId>,
}

impl DescriptorPool {
    /// Look up a message by fully-qualified name.
    #[must_use]
    pub fn message(&self, full_name: &str) -> Option<MessageDescriptor<'_>> {
        self.by_name
            .get(full_name)
            .map(|&id| MessageDescriptor::new(self, id))
    }

    #[must_use]
    pub fn message_by_id(&self, id: MessageId) -> Option<MessageDescriptor<'_>> {
        (id.0 < self.messages.len()).then(|| MessageDescriptor::new(self, id))
    }

    #[must_use]
    pub fn field_by_id(&self, id: FieldId) -> Option<FieldDescriptor<'_>> {
        (id.0 < self.fields.len()).then(|| FieldDescriptor::new(self, id))
    }

    /// All messages in the order they were added.
    pub fn messages(&self) -> impl ExactSizeIterator<Item = MessageDescriptor<'_>> {
        (0..self.messages.len()).map(move |i| MessageDescriptor::new(self, MessageId(i)))
    }

    /// Fields that belong to no message.
    pub fn orphan_fields(&self) -> impl Iterator<Item = FieldDescriptor<'_>> {
        self.fields
            .iter()
            .enumerate()
            .filter(|(_, record)| record.parent.is_none())
            .map(move |(i, _)| FieldDescriptor::new(self, FieldId(i)))
    }

    #[must_use]
    pub const fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Total field count, orphans included.
    #[must_use]
    pub const fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub(crate) fn message_record(&self, id: MessageId) -> &MessageRecord {
        &self.messages[id.0]
    }

    pub(crate) fn field_record(&self, id: FieldId) -> &FieldRecord {
        &self.fields[id.0]
    }

    // Push a message and its fields; names and numbers are already validated.
    pub(crate) fn push_message(
        &mut self,
        full_name: String,
        fields: impl IntoIterator<Item = (String, FieldNumber)>,
    ) -> MessageId {
        let id = MessageId(self.messages.len());
        let field_ids = fields
            .into_iter()
            .map(|(name, number)| self.push_field(name, number, Some(id)))
            .collect();

        self.by_name.insert(full_name.clone(), id);
        self.messages.push(MessageRecord {
            full_name,
            fields: field_ids,
        });

        id
    }

    pub(crate) fn push_field(
        &mut self,
        name: String,
        number: FieldNumber,
        parent: Option<MessageId>,
    ) -> FieldId {
        let id = FieldId(self.fields.len());
        self.fields.push(FieldRecord {
            name,
            number,
            parent,
        });

        id
    }
}
