use super::fields::{validate_phone, BirthDate, EmailAddress, FreeText, PhoneNumber};
use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name plus any number of phones and optional email, address
/// and birthday.
///
/// The name is the record's key in an [`crate::book::AddressBook`] and is
/// fixed at construction. Every mutator validates its input before touching
/// the record, so a failed call leaves the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordHelper")]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    email: Option<EmailAddress>,
    address: Option<FreeText>,
    birthday: Option<BirthDate>,
}

// Shape of a record on disk. Missing optional fields default to absent, and
// the name goes back through `Record::new`.
#[derive(Deserialize)]
struct RecordHelper {
    name: String,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
    #[serde(default)]
    email: Option<EmailAddress>,
    #[serde(default)]
    address: Option<FreeText>,
    #[serde(default)]
    birthday: Option<BirthDate>,
}

impl TryFrom<RecordHelper> for Record {
    type Error = ValidationError;

    fn try_from(helper: RecordHelper) -> Result<Self, Self::Error> {
        let mut record = Record::new(helper.name)?;
        record.phones = helper.phones;
        record.email = helper.email;
        record.address = helper.address;
        record.birthday = helper.birthday;
        Ok(record)
    }
}

impl Record {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self {
            name,
            phones: Vec::new(),
            email: None,
            address: None,
            birthday: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&FreeText> {
        self.address.as_ref()
    }

    pub fn birthday(&self) -> Option<&BirthDate> {
        self.birthday.as_ref()
    }

    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(validate_phone(phone)?);
        Ok(())
    }

    /// Removes the first phone equal to `phone`. Returns whether one was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.phones.iter().position(|p| p.as_str() == phone) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone equal to `old` with `new`, keeping its position.
    ///
    /// `new` is validated even when `old` is not present. Returns whether a
    /// replacement happened.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<bool, ValidationError> {
        let new = validate_phone(new)?;
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    pub fn add_email(&mut self, email: &str) -> Result<(), ValidationError> {
        self.email = Some(email.parse()?);
        Ok(())
    }

    pub fn add_address(&mut self, address: &str) {
        self.address = Some(FreeText::new(address));
    }

    pub fn add_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(birthday.parse()?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = if self.phones.is_empty() {
            "No phone".to_string()
        } else {
            self.phones
                .iter()
                .map(PhoneNumber::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        let email = self
            .email
            .as_ref()
            .map_or_else(|| "No email".to_string(), ToString::to_string);
        let address = self
            .address
            .as_ref()
            .map_or_else(|| "No address".to_string(), ToString::to_string);
        let birthday = self
            .birthday
            .as_ref()
            .map_or_else(|| "No birthday".to_string(), ToString::to_string);

        write!(
            f,
            "Name: {}, Phones: {}, Email: {}, Address: {}, Birthday: {}",
            self.name, phones, email, address, birthday
        )
    }
}
