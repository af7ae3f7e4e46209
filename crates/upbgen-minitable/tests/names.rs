use proptest::prelude::*;
use quote::quote;
use std::collections::BTreeMap;
use upbgen_descriptor::{MessageDef, PoolBuilder};
use upbgen_minitable::{
    Error, FieldIndexResolver, WireOrder, mangle, minitable_field_index, minitable_name,
    minitable_name_for, minitable_ptr_name,
};

#[test]
fn nested_message_symbol_is_stable() {
    let pool = PoolBuilder::new()
        .with_message(MessageDef::new("Bar.Baz"))
        .build()
        .expect("pool should build");
    let baz = pool.message("Bar.Baz").expect("Bar.Baz");

    let first = minitable_name(baz);
    let second = minitable_name(baz);

    assert_eq!(first, second);
    assert_eq!(first.as_str(), "Bar__Baz_msg_init");
    assert_eq!(first.as_str(), mangle::message_init("Bar.Baz"));
    assert_eq!(minitable_ptr_name(baz).as_str(), "Bar__Baz_msg_init_ptr");
}

#[test]
fn symbol_is_a_rust_identifier() {
    let pool = PoolBuilder::new()
        .with_message(MessageDef::new("google.protobuf.Any"))
        .with_message(MessageDef::new("_private.Thing_"))
        .build()
        .expect("pool should build");

    for message in pool.messages() {
        let symbol = minitable_name(message);
        let parsed: syn::Ident = syn::parse_str(&symbol).expect("symbol should parse as ident");
        assert_eq!(parsed, symbol.as_str());
    }
}

#[test]
fn symbol_and_index_interpolate_into_tokens() {
    let pool = PoolBuilder::new()
        .with_message(MessageDef::new("pkg.Foo").field("b", 5).field("a", 1))
        .build()
        .expect("pool should build");
    let foo = pool.message("pkg.Foo").expect("pkg.Foo");
    let b = foo.field_by_name("b").expect("b");

    let table = minitable_name(foo);
    let index = WireOrder.field_index(b);
    let tokens = quote! { upb_MiniTable_GetFieldByIndex(&#table, #index) };

    assert_eq!(
        tokens.to_string(),
        "upb_MiniTable_GetFieldByIndex (& pkg__Foo_msg_init , 1)"
    );
    assert_eq!(minitable_field_index(b), 1);
}

#[test]
fn lookup_by_name_reports_unknown_messages() -> Result<(), Error> {
    let pool = PoolBuilder::new()
        .with_message(MessageDef::new("pkg.Foo"))
        .build()?;

    assert_eq!(
        minitable_name_for(&pool, "pkg.Foo")?.into_string(),
        "pkg__Foo_msg_init"
    );

    let err = minitable_name_for(&pool, "pkg.Nope").expect_err("pkg.Nope is not in the pool");
    assert!(matches!(err, Error::UnknownMessage(ref name) if name == "pkg.Nope"));
    assert_eq!(err.to_string(), "unknown message 'pkg.Nope'");

    Ok(())
}

#[test]
fn invalid_pool_surfaces_as_descriptor_error() {
    let result = PoolBuilder::new()
        .with_message(MessageDef::new("pkg.Foo").field("a", 3).field("b", 3))
        .build()
        .map_err(Error::from);

    assert!(matches!(result, Err(Error::Descriptor(_))));
}

fn ident_strategy() -> BoxedStrategy<String> {
    "[A-Za-z_][A-Za-z0-9_]{0,6}".boxed()
}

fn full_name_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(ident_strategy(), 1..4)
        .prop_map(|segments| segments.join("."))
        .boxed()
}

proptest! {
    #[test]
    fn mangling_is_injective(names in proptest::collection::btree_set(full_name_strategy(), 1..32)) {
        let mut seen = BTreeMap::new();

        for name in &names {
            let symbol = mangle::message_init(name);
            if let Some(prev) = seen.insert(symbol.clone(), name.clone()) {
                prop_assert!(false, "'{prev}' and '{name}' both mangle to '{symbol}'");
            }
        }
    }

    #[test]
    fn demangle_recovers_the_full_name(name in full_name_strategy()) {
        prop_assert_eq!(mangle::demangle_name(&mangle::mangle_name(&name)), Some(name));
    }

    #[test]
    fn pool_symbols_match_the_oracle(names in proptest::collection::btree_set(full_name_strategy(), 1..16)) {
        let pool = names
            .iter()
            .map(MessageDef::new)
            .collect::<PoolBuilder>()
            .build()
            .expect("generated names are valid");

        for message in pool.messages() {
            prop_assert_eq!(
                minitable_name(message).into_string(),
                mangle::message_init(message.full_name())
            );
        }
    }
}
