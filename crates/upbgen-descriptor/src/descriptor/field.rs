use super::{DescriptorPool, FieldId, FieldRecord, MessageDescriptor};
use crate::FieldNumber;
use std::{fmt, ptr};

///
/// FieldDescriptor
///
/// Borrowed view of one field in a [`DescriptorPool`].
///

#[derive(Clone, Copy)]
pub struct FieldDescriptor<'pool> {
    pool: &'pool DescriptorPool,
    id: FieldId,
}

impl<'pool> FieldDescriptor<'pool> {
    pub(crate) const fn new(pool: &'pool DescriptorPool, id: FieldId) -> Self {
        Self { pool, id }
    }

    fn record(&self) -> &'pool FieldRecord {
        self.pool.field_record(self.id)
    }

    #[must_use]
    pub const fn id(&self) -> FieldId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &'pool str {
        &self.record().name
    }

    /// `<message full name>.<field name>`, or the bare name for an orphan.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.containing_message() {
            Some(message) => format!("{}.{}", message.full_name(), self.name()),
            None => self.name().to_string(),
        }
    }

    #[must_use]
    pub fn number(&self) -> FieldNumber {
        self.record().number
    }

    /// Message this field is declared on.
    ///
    /// Always `Some` for fields declared through a message; `None` only for
    /// orphan fields.
    #[must_use]
    pub fn containing_message(&self) -> Option<MessageDescriptor<'pool>> {
        self.record()
            .parent
            .map(|id| MessageDescriptor::new(self.pool, id))
    }

    /// Position within the containing message's declaration order.
    #[must_use]
    pub fn declaration_index(&self) -> Option<usize> {
        let message = self.containing_message()?;

        message.fields().position(|f| f.id == self.id)
    }
}

impl PartialEq for FieldDescriptor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.pool, other.pool) && self.id == other.id
    }
}

impl Eq for FieldDescriptor<'_> {}

impl fmt::Debug for FieldDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("full_name", &self.full_name())
            .field("number", &self.number())
            .finish()
    }
}
