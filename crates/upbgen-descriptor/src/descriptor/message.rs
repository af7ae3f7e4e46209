use super::{DescriptorPool, FieldDescriptor, MessageId, MessageRecord};
use crate::FieldNumber;
use std::{fmt, ptr};

///
/// MessageDescriptor
///
/// Borrowed view of one message in a [`DescriptorPool`].
///

#[derive(Clone, Copy)]
pub struct MessageDescriptor<'pool> {
    pool: &'pool DescriptorPool,
    id: MessageId,
}

impl<'pool> MessageDescriptor<'pool> {
    pub(crate) const fn new(pool: &'pool DescriptorPool, id: MessageId) -> Self {
        Self { pool, id }
    }

    fn record(&self) -> &'pool MessageRecord {
        self.pool.message_record(self.id)
    }

    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub const fn pool(&self) -> &'pool DescriptorPool {
        self.pool
    }

    /// Dot-separated name, e.g. `pkg.Outer.Inner`.
    #[must_use]
    pub fn full_name(&self) -> &'pool str {
        &self.record().full_name
    }

    /// Last segment of the full name.
    #[must_use]
    pub fn name(&self) -> &'pool str {
        let full_name = self.full_name();
        full_name
            .rsplit_once('.')
            .map_or(full_name, |(_, name)| name)
    }

    /// Everything before the last segment, `None` at top level.
    #[must_use]
    pub fn package(&self) -> Option<&'pool str> {
        self.full_name()
            .rsplit_once('.')
            .map(|(package, _)| package)
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = FieldDescriptor<'pool>> + 'pool {
        let pool = self.pool;

        self.record()
            .fields
            .iter()
            .map(move |&id| FieldDescriptor::new(pool, id))
    }

    #[must_use]
    pub fn field_count(&self) -> usize {
        self.record().fields.len()
    }

    /// Field at `index` in declaration order.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<FieldDescriptor<'pool>> {
        self.record()
            .fields
            .get(index)
            .map(|&id| FieldDescriptor::new(self.pool, id))
    }

    #[must_use]
    pub fn field_by_name(&self, name: &str) -> Option<FieldDescriptor<'pool>> {
        self.fields().find(|f| f.name() == name)
    }

    #[must_use]
    pub fn field_by_number(&self, number: FieldNumber) -> Option<FieldDescriptor<'pool>> {
        self.fields().find(|f| f.number() == number)
    }
}

impl PartialEq for MessageDescriptor<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.pool, other.pool) && self.id == other.id
    }
}

impl Eq for MessageDescriptor<'_> {}

impl fmt::Debug for MessageDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageDescriptor")
            .field("full_name", &self.full_name())
            .field("field_count", &self.field_count())
            .finish()
    }
}

impl fmt::Display for MessageDescriptor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}
