mod validate;

use crate::{
    def::{FieldDef, MessageDef},
    descriptor::DescriptorPool,
    error::ErrorTree,
};
use thiserror::Error as ThisError;

///
/// DescriptorError
///

#[derive(Debug, ThisError)]
pub enum DescriptorError {
    #[error("validation failed: {0}")]
    Validation(ErrorTree),
}

///
/// PoolBuilder
///
/// Collects message definitions and turns them into a validated
/// [`DescriptorPool`].
///

#[derive(Clone, Debug, Default)]
pub struct PoolBuilder {
    messages: Vec<MessageDef>,
    orphans: Vec<FieldDef>,
}

impl PoolBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message(&mut self, message: MessageDef) -> &mut Self {
        self.messages.push(message);
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: MessageDef) -> Self {
        self.add_message(message);
        self
    }

    /// Add a field that is not attached to any message, such as an extension
    /// whose extendee has not been linked yet.
    pub fn add_orphan_field(&mut self, field: FieldDef) -> &mut Self {
        self.orphans.push(field);
        self
    }

    /// Validate everything collected so far and build the pool.
    pub fn build(self) -> Result<DescriptorPool, DescriptorError> {
        let errs = validate::validate_defs(&self.messages, &self.orphans);
        if !errs.is_empty() {
            tracing::debug!(problems = errs.len(), "rejected descriptor pool");
            return Err(DescriptorError::Validation(errs));
        }

        let mut pool = DescriptorPool::default();
        for message in self.messages {
            let fields = message.fields.into_iter().map(|f| (f.name, f.number));
            pool.push_message(message.full_name, fields);
        }
        for orphan in self.orphans {
            pool.push_field(orphan.name, orphan.number, None);
        }

        tracing::debug!(
            messages = pool.message_count(),
            fields = pool.field_count(),
            "built descriptor pool"
        );

        Ok(pool)
    }
}

impl Extend<MessageDef> for PoolBuilder {
    fn extend<I: IntoIterator<Item = MessageDef>>(&mut self, iter: I) {
        self.messages.extend(iter);
    }
}

impl FromIterator<MessageDef> for PoolBuilder {
    fn from_iter<I: IntoIterator<Item = MessageDef>>(iter: I) -> Self {
        let mut builder = Self::new();
        builder.extend(iter);
        builder
    }
}
