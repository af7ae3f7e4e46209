use crate::{
    FieldNumber, MAX_FIELDS_PER_MESSAGE, MAX_FULL_NAME_LEN, err,
    def::{FieldDef, MessageDef},
    error::ErrorTree,
};
use std::collections::{BTreeMap, BTreeSet, btree_map::Entry};

/// Run every check over the pending definitions and collect all problems.
pub(crate) fn validate_defs(messages: &[MessageDef], orphans: &[FieldDef]) -> ErrorTree {
    let mut errs = ErrorTree::new();

    // Phase 1: each message on its own.
    for message in messages {
        errs.merge(&message.full_name, validate_message(message));
    }

    // Phase 2: pool-wide uniqueness.
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for message in messages {
        *seen.entry(message.full_name.as_str()).or_default() += 1;
    }
    for (name, count) in seen {
        if count > 1 {
            errs.add_for(name, format!("message declared {count} times"));
        }
    }

    for orphan in orphans {
        let mut field_errs = ErrorTree::new();
        validate_field(orphan, &mut field_errs);
        errs.merge(&orphan.name, field_errs);
    }

    errs
}

fn validate_message(message: &MessageDef) -> ErrorTree {
    let mut errs = ErrorTree::new();

    if let Err(e) = validate_full_name(&message.full_name) {
        errs.add(e);
    }

    if message.fields.len() > MAX_FIELDS_PER_MESSAGE {
        err!(
            errs,
            "message declares {} fields, max is {MAX_FIELDS_PER_MESSAGE}",
            message.fields.len()
        );
    }

    let mut names = BTreeSet::new();
    let mut numbers: BTreeMap<FieldNumber, &str> = BTreeMap::new();

    for field in &message.fields {
        let mut field_errs = ErrorTree::new();
        validate_field(field, &mut field_errs);

        if !names.insert(field.name.as_str()) {
            err!(field_errs, "duplicate field name '{}'", field.name);
        }

        match numbers.entry(field.number) {
            Entry::Vacant(slot) => {
                slot.insert(field.name.as_str());
            }
            Entry::Occupied(prev) => {
                err!(
                    field_errs,
                    "field number {} already used by '{}'",
                    field.number,
                    prev.get()
                );
            }
        }

        errs.merge(&field.name, field_errs);
    }

    errs
}

fn validate_field(field: &FieldDef, errs: &mut ErrorTree) {
    if let Err(e) = validate_ident(&field.name) {
        errs.add(e);
    }

    let number = field.number;
    if !number.is_in_range() {
        err!(
            errs,
            "field number {number} outside of range {}-{}",
            FieldNumber::MIN,
            FieldNumber::MAX
        );
    } else if number.is_reserved() {
        err!(
            errs,
            "field number {number} is in the reserved range {}-{}",
            FieldNumber::RESERVED.start(),
            FieldNumber::RESERVED.end()
        );
    }
}

/// Ensure a fully-qualified name is non-empty, bounded, and made of identifiers.
pub(crate) fn validate_full_name(full_name: &str) -> Result<(), String> {
    if full_name.is_empty() {
        return Err("full name is empty".to_string());
    }
    if full_name.len() > MAX_FULL_NAME_LEN {
        return Err(format!(
            "full name '{full_name}' exceeds max length {MAX_FULL_NAME_LEN}"
        ));
    }

    for segment in full_name.split('.') {
        validate_ident(segment).map_err(|e| format!("full name '{full_name}': {e}"))?;
    }

    Ok(())
}

/// Ensure an identifier is a non-empty ASCII `[A-Za-z_][A-Za-z0-9_]*`.
pub(crate) fn validate_ident(ident: &str) -> Result<(), String> {
    let mut chars = ident.chars();

    let Some(first) = chars.next() else {
        return Err("ident is empty".to_string());
    };
    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(format!("ident '{ident}' must start with a letter or '_'"));
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!("ident '{ident}' must be ASCII alphanumeric or '_'"));
    }

    Ok(())
}

///
/// TESTS
///
