//! Registration record model and boundary validation

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One registration submission.
///
/// All six fields are required text. A record is immutable once stored;
/// nothing in the system mutates a field after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    /// Unique key in the submission store
    pub phone: String,
    pub group: String,
    pub school: String,
    pub location: String,
}

impl RegistrationRecord {
    /// True when every one of the six fields is non-blank after trimming.
    pub fn is_complete(&self) -> bool {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.group,
            &self.school,
            &self.location,
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// A submission as it arrives on the wire.
///
/// Every field is optional at this layer (absent fields deserialize to
/// empty strings). [`RegistrationForm::validate`] converts the form into a
/// [`RegistrationRecord`] all-or-nothing, so no partially-valid record ever
/// reaches the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub location: String,
}

impl RegistrationForm {
    /// Validate the form into a record.
    ///
    /// Any blank field (absent, empty, or whitespace-only) rejects the
    /// whole submission with [`Error::MissingFields`].
    pub fn validate(self) -> Result<RegistrationRecord> {
        let record = RegistrationRecord {
            name: self.name,
            email: self.email,
            phone: self.phone,
            group: self.group,
            school: self.school,
            location: self.location,
        };
        if !record.is_complete() {
            return Err(Error::MissingFields);
        }
        Ok(record)
    }
}
