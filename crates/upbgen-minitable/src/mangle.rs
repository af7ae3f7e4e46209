//! Symbol mangling shared with the upb C generator.
//!
//! `_` becomes `_0` and `.` becomes `__`, so every `_` in the output is
//! followed by either `0` or `_` and the mapping can be reversed.

pub const MESSAGE_INIT_SUFFIX: &str = "_msg_init";
pub const MESSAGE_INIT_PTR_SUFFIX: &str = "_msg_init_ptr";
pub const ENUM_INIT_SUFFIX: &str = "_enum_init";

/// Mangle a fully-qualified name into a C identifier fragment.
#[must_use]
pub fn mangle_name(full_name: &str) -> String {
    let mut out = String::with_capacity(full_name.len() + 8);

    for c in full_name.chars() {
        match c {
            '_' => out.push_str("_0"),
            '.' => out.push_str("__"),
            c => out.push(c),
        }
    }

    out
}

/// Reverse [`mangle_name`]; `None` if no name mangles to `mangled`.
#[must_use]
pub fn demangle_name(mangled: &str) -> Option<String> {
    let mut out = String::with_capacity(mangled.len());
    let mut chars = mangled.chars();

    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }

        match chars.next()? {
            '0' => out.push('_'),
            '_' => out.push('.'),
            _ => return None,
        }
    }

    Some(out)
}

/// Symbol of the message's minitable.
#[must_use]
pub fn message_init(full_name: &str) -> String {
    mangle_name(full_name) + MESSAGE_INIT_SUFFIX
}

/// Symbol of the pointer to the message's minitable.
#[must_use]
pub fn message_init_ptr(full_name: &str) -> String {
    mangle_name(full_name) + MESSAGE_INIT_PTR_SUFFIX
}

/// Symbol of the enum's minitable.
#[must_use]
pub fn enum_init(full_name: &str) -> String {
    mangle_name(full_name) + ENUM_INIT_SUFFIX
}

///
/// TESTS
///
