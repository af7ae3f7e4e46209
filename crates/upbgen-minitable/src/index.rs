//! Minitable field indices.
//!
//! The upb minitable builder lays field storage out in ascending field-number
//! order and does not expose the resulting position. Everything here
//! reproduces that order; if the builder's sort key changes, this module
//! changes with it.

use derive_more::Display;
use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, TokenStreamExt};
use std::collections::HashMap;
use upbgen_descriptor::{FieldDescriptor, FieldId, MessageDescriptor};

///
/// FieldIndex
///
/// Zero-based slot of a field in its message's minitable storage.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldIndex(u32);

impl FieldIndex {
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<FieldIndex> for u32 {
    fn from(index: FieldIndex) -> Self {
        index.0
    }
}

impl ToTokens for FieldIndex {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.append(Literal::u32_unsuffixed(self.0));
    }
}

///
/// FieldIndexResolver
///
/// Maps a field to its minitable slot. Callers go through this trait so the
/// recomputation can be swapped for a direct lookup without touching them.
///

pub trait FieldIndexResolver {
    /// Panics if `field` has no containing message.
    fn field_index(&self, field: FieldDescriptor<'_>) -> FieldIndex;
}

impl<R: FieldIndexResolver + ?Sized> FieldIndexResolver for &R {
    fn field_index(&self, field: FieldDescriptor<'_>) -> FieldIndex {
        (**self).field_index(field)
    }
}

///
/// WireOrder
///
/// Recomputes the slot on every call by counting the siblings with a smaller
/// field number. Numbers are unique per message, so the count is the rank.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct WireOrder;

impl FieldIndexResolver for WireOrder {
    fn field_index(&self, field: FieldDescriptor<'_>) -> FieldIndex {
        let parent = field.containing_message().unwrap_or_else(|| {
            panic!("field '{}' has no containing message", field.full_name())
        });

        let number = field.number();
        let lower = parent
            .fields()
            .fold(0_u32, |n, sibling| n + u32::from(sibling.number() < number));

        FieldIndex(lower)
    }
}

/// Minitable slot of `field`, as a raw index.
#[must_use]
pub fn minitable_field_index(field: FieldDescriptor<'_>) -> u32 {
    WireOrder.field_index(field).get()
}

///
/// MessageFieldOrder
///
/// Storage order of one message, sorted once. Answers must match
/// [`WireOrder`] for every field of the message.
///

#[derive(Clone, Debug)]
pub struct MessageFieldOrder<'pool> {
    message: MessageDescriptor<'pool>,
    sorted: Vec<FieldDescriptor<'pool>>,
    slots: HashMap<FieldId, FieldIndex>,
}

impl<'pool> MessageFieldOrder<'pool> {
    #[must_use]
    pub fn new(message: MessageDescriptor<'pool>) -> Self {
        let mut sorted: Vec<_> = message.fields().collect();
        sorted.sort_by_key(FieldDescriptor::number);

        let slots = sorted
            .iter()
            .zip(0_u32..)
            .map(|(field, slot)| (field.id(), FieldIndex(slot)))
            .collect();

        tracing::trace!(
            message = message.full_name(),
            fields = sorted.len(),
            "computed minitable field order"
        );

        Self {
            message,
            sorted,
            slots,
        }
    }

    #[must_use]
    pub const fn message(&self) -> MessageDescriptor<'pool> {
        self.message
    }

    /// Fields in minitable storage order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor<'pool>] {
        &self.sorted
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.sorted.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }
}

impl FieldIndexResolver for MessageFieldOrder<'_> {
    fn field_index(&self, field: FieldDescriptor<'_>) -> FieldIndex {
        let parent = field.containing_message().unwrap_or_else(|| {
            panic!("field '{}' has no containing message", field.full_name())
        });
        assert!(
            parent == self.message,
            "field '{}' is not declared on '{}'",
            field.full_name(),
            self.message.full_name()
        );

        self.slots[&field.id()]
    }
}

///
/// TESTS
///
