use crate::FieldNumber;
use serde::{Deserialize, Serialize};

///
/// MessageDef
///
/// Unvalidated input for one message. Fields keep the order they were
/// declared in.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct MessageDef {
    pub full_name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldDef>,
}

impl MessageDef {
    #[must_use]
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field declaration.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, number: u32) -> Self {
        self.fields.push(FieldDef::new(name, number));
        self
    }
}

///
/// FieldDef
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldDef {
    pub name: String,
    pub number: FieldNumber,
}

impl FieldDef {
    #[must_use]
    pub fn new(name: impl Into<String>, number: u32) -> Self {
        Self {
            name: name.into(),
            number: FieldNumber::new(number),
        }
    }
}
