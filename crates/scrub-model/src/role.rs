//! Semantic column roles and the keyword table that infers them.

use serde::{Deserialize, Serialize};

/// Inferred semantic category of a column.
///
/// Name-derived roles come from keyword matches against the column
/// name; [`Role::Numeric`] is assigned from stored value types instead.
/// A column may carry several roles at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Phone,
    Email,
    Date,
    Website,
    Zip,
    Identifier,
    Numeric,
    Text,
}

impl Role {
    /// Roles inferred from column names, in classification order.
    pub const NAME_DERIVED: [Self; 7] = [
        Self::Phone,
        Self::Email,
        Self::Date,
        Self::Website,
        Self::Zip,
        Self::Identifier,
        Self::Text,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Date => "date",
            Self::Website => "website",
            Self::Zip => "zip",
            Self::Identifier => "identifier",
            Self::Numeric => "numeric",
            Self::Text => "text",
        }
    }
}

/// Keyword table driving name-based role inference.
///
/// A column name matches a role when its lower-cased form contains any
/// of that role's keywords as a substring. The table is plain data so
/// callers can override it from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleKeywords {
    pub phone: Vec<String>,
    pub email: Vec<String>,
    pub date: Vec<String>,
    pub website: Vec<String>,
    pub zip: Vec<String>,
    pub identifier: Vec<String>,
    pub text: Vec<String>,
}

fn keywords(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| (*word).to_string()).collect()
}

impl Default for RoleKeywords {
    fn default() -> Self {
        Self {
            phone: keywords(&["phone", "contact", "mobile", "cell"]),
            email: keywords(&["email", "e-mail"]),
            date: keywords(&["date", "dob", "admission", "discharge"]),
            website: keywords(&["website", "web", "url", "link"]),
            zip: keywords(&["zip", "zipcode", "postal"]),
            identifier: keywords(&["id", "patient", "record", "case"]),
            text: keywords(&[
                "name", "city", "country", "state", "company", "clinic", "doctor", "hospital",
            ]),
        }
    }
}

impl RoleKeywords {
    /// Keyword list for a name-derived role; `None` for [`Role::Numeric`].
    pub fn for_role(&self, role: Role) -> Option<&[String]> {
        match role {
            Role::Phone => Some(&self.phone),
            Role::Email => Some(&self.email),
            Role::Date => Some(&self.date),
            Role::Website => Some(&self.website),
            Role::Zip => Some(&self.zip),
            Role::Identifier => Some(&self.identifier),
            Role::Text => Some(&self.text),
            Role::Numeric => None,
        }
    }

    /// Whether a column name matches the given role.
    pub fn matches(&self, role: Role, column_name: &str) -> bool {
        let lowered = column_name.to_lowercase();
        self.for_role(role)
            .is_some_and(|words| words.iter().any(|word| lowered.contains(word.as_str())))
    }
}
