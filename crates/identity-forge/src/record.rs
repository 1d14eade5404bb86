//! Generated identity record type.
//!
//! An [`IdentityRecord`] is a plain value: it is built once per
//! generation call and never referenced by the generator afterwards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A fictitious identity.
///
/// # Example
///
/// ```
/// use identity_forge::IdentityRecord;
/// use uuid::Uuid;
///
/// let record = IdentityRecord {
///     internal_id: 42,
///     uuid: Uuid::nil(),
///     alias: "0xN0m4D".to_owned(),
///     real_name: "Kira Tosavu".to_owned(),
///     email: "kira.tosavu@example.test".to_owned(),
///     phone: "+44-512-907-3310".to_owned(),
///     address: "12 Becate St, Mowa City, 40512".to_owned(),
///     company: "Lupaki Labs".to_owned(),
///     credit_card: "4539-1488-0343-6467".to_owned(),
/// };
///
/// assert_eq!(record.fields()[3], ("Real_Name", "Kira Tosavu".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    /// Small internal identifier.
    pub internal_id: u32,
    /// Version-4 layout identifier drawn from the generator's random source.
    pub uuid: Uuid,
    /// Stylised handle.
    pub alias: String,
    /// First and last name separated by a space.
    pub real_name: String,
    /// Email address derived from the real name.
    pub email: String,
    /// Phone number.
    pub phone: String,
    /// One-line postal address.
    pub address: String,
    /// Company name.
    pub company: String,
    /// Luhn-valid card number.
    pub credit_card: String,
}

impl IdentityRecord {
    /// Returns `(label, value)` pairs in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, String); 9] {
        [
            ("Internal_ID", self.internal_id.to_string()),
            ("UUID", self.uuid.to_string()),
            ("Alias", self.alias.clone()),
            ("Real_Name", self.real_name.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("Address", self.address.clone()),
            ("Company", self.company.clone()),
            ("Credit_Card", self.credit_card.clone()),
        ]
    }
}
