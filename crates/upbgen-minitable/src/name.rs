use crate::mangle;
use derive_more::{Deref, Display};
use proc_macro2::{Ident, Span, TokenStream};
use quote::{ToTokens, TokenStreamExt};
use upbgen_descriptor::MessageDescriptor;

///
/// MiniTableSymbol
///
/// Mangled symbol naming a minitable in generated code. Built only from
/// validated full names, so it is always a valid identifier.
///

#[derive(Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[deref(forward)]
pub struct MiniTableSymbol(String);

impl MiniTableSymbol {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for MiniTableSymbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl ToTokens for MiniTableSymbol {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.append(Ident::new(&self.0, Span::call_site()));
    }
}

/// Symbol of the message's minitable, e.g. `Bar__Baz_msg_init` for `Bar.Baz`.
#[must_use]
pub fn minitable_name(message: MessageDescriptor<'_>) -> MiniTableSymbol {
    MiniTableSymbol(mangle::message_init(message.full_name()))
}

/// Symbol of the pointer to the message's minitable.
#[must_use]
pub fn minitable_ptr_name(message: MessageDescriptor<'_>) -> MiniTableSymbol {
    MiniTableSymbol(mangle::message_init_ptr(message.full_name()))
}
