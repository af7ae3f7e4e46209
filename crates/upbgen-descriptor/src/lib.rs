//! Read-only protobuf descriptor model consumed by the upb minitable helpers.
//!
//! Definitions go in through [`PoolBuilder`]; code generation reads the
//! resulting [`DescriptorPool`] through borrowed [`MessageDescriptor`] and
//! [`FieldDescriptor`] handles.

pub mod build;
pub mod def;
pub mod descriptor;
pub mod error;
pub mod number;

pub use build::{DescriptorError, PoolBuilder};
pub use def::{FieldDef, MessageDef};
pub use descriptor::{DescriptorPool, FieldDescriptor, FieldId, MessageDescriptor, MessageId};
pub use error::ErrorTree;
pub use number::FieldNumber;

/// Maximum length for fully-qualified message names.
pub const MAX_FULL_NAME_LEN: usize = 1024;

/// Maximum number of fields on one message; upb stores the count as a `u16`.
pub const MAX_FIELDS_PER_MESSAGE: usize = u16::MAX as usize;

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn foo_pool() -> DescriptorPool {
        PoolBuilder::new()
            .with_message(
                MessageDef::new("pkg.Foo")
                    .field("b", 5)
                    .field("a", 1)
                    .field("c", 3),
            )
            .with_message(MessageDef::new("Bare"))
            .build()
            .expect("pool should build")
    }

    #[test]
    fn message_names_split_on_last_dot() {
        let pool = foo_pool();
        let foo = pool.message("pkg.Foo").expect("pkg.Foo exists");

        assert_eq!(foo.full_name(), "pkg.Foo");
        assert_eq!(foo.name(), "Foo");
        assert_eq!(foo.package(), Some("pkg"));

        let bare = pool.message("Bare").expect("Bare exists");
        assert_eq!(bare.name(), "Bare");
        assert_eq!(bare.package(), None);
        assert_eq!(bare.field_count(), 0);
    }

    #[test]
    fn fields_keep_declaration_order() {
        let pool = foo_pool();
        let foo = pool.message("pkg.Foo").expect("pkg.Foo exists");

        let names: Vec<_> = foo.fields().map(|f| f.name()).collect();
        assert_eq!(names, ["b", "a", "c"]);

        let a = foo.field(1).expect("second field");
        assert_eq!(a.name(), "a");
        assert_eq!(a.declaration_index(), Some(1));
        assert_eq!(a.full_name(), "pkg.Foo.a");
    }

    #[test]
    fn back_reference_resolves_to_the_same_message() {
        let pool = foo_pool();
        let foo = pool.message("pkg.Foo").expect("pkg.Foo exists");

        for field in foo.fields() {
            assert_eq!(field.containing_message(), Some(foo));
        }
    }

    #[test]
    fn lookup_by_name_and_number() {
        let pool = foo_pool();
        let foo = pool.message("pkg.Foo").expect("pkg.Foo exists");

        let c = foo.field_by_name("c").expect("field c");
        assert_eq!(c.number(), FieldNumber::new(3));
        assert_eq!(foo.field_by_number(FieldNumber::new(3)), Some(c));
        assert_eq!(foo.field_by_number(FieldNumber::new(4)), None);
        assert!(pool.message("pkg.Missing").is_none());
    }

    #[test]
    fn ids_round_trip_through_the_pool() {
        let pool = foo_pool();
        let foo = pool.message("pkg.Foo").expect("pkg.Foo exists");
        let c = foo.field_by_name("c").expect("field c");

        assert_eq!(foo.id().index(), 0);
        assert_eq!(pool.message_by_id(foo.id()), Some(foo));
        assert_eq!(c.id().index(), 2);
        assert_eq!(pool.field_by_id(c.id()), Some(c));
        assert!(std::ptr::eq(foo.pool(), &pool));

        // ids are dense indices into the pool that issued them
        let empty = DescriptorPool::default();
        assert!(empty.message_by_id(foo.id()).is_none());
        assert!(empty.field_by_id(c.id()).is_none());
    }

    #[test]
    fn orphan_fields_have_no_containing_message() {
        let mut builder = PoolBuilder::new();
        builder.add_orphan_field(FieldDef::new("ext", 100));
        let pool = builder.build().expect("pool should build");

        let orphan = pool.orphan_fields().next().expect("one orphan");
        assert!(orphan.containing_message().is_none());
        assert_eq!(orphan.declaration_index(), None);
        assert_eq!(orphan.full_name(), "ext");
    }

    #[test]
    fn invalid_pool_is_rejected_with_every_problem() {
        let err = PoolBuilder::new()
            .with_message(MessageDef::new("pkg.Foo").field("a", 1).field("b", 1))
            .with_message(MessageDef::new("bad name"))
            .build()
            .expect_err("pool should be rejected");

        let DescriptorError::Validation(errs) = err;
        assert_eq!(errs.len(), 2, "{errs}");
    }
}
