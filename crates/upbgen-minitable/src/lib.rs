//! Minitable symbol names and field indices for upb-backed generated code.
//!
//! [`minitable_name`] names the minitable of a message and
//! [`minitable_field_index`] gives a field's slot in that minitable's
//! storage. Both are pure functions of the descriptor they are handed.

pub mod index;
pub mod mangle;
pub mod name;

pub use index::{
    FieldIndex, FieldIndexResolver, MessageFieldOrder, WireOrder, minitable_field_index,
};
pub use name::{MiniTableSymbol, minitable_name, minitable_ptr_name};

use thiserror::Error as ThisError;
use upbgen_descriptor::{DescriptorError, DescriptorPool};

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),

    #[error("unknown message '{0}'")]
    UnknownMessage(String),
}

/// Minitable symbol for the message called `full_name` in `pool`.
pub fn minitable_name_for(
    pool: &DescriptorPool,
    full_name: &str,
) -> Result<MiniTableSymbol, Error> {
    pool.message(full_name)
        .map(minitable_name)
        .ok_or_else(|| Error::UnknownMessage(full_name.to_string()))
}
