//! Field value types and their validators.
//!
//! Each field of a contact is its own type, and the only way to obtain one is
//! through its validating constructor (`FromStr`, `TryFrom<String>` or the
//! free `validate_*` / `parse_*` functions). Deserialization goes through the
//! same path, so data read back from disk is held to the same rules as typed
//! input.
//!
//! | type            | accepted input                                 |
//! |-----------------|------------------------------------------------|
//! | [`PhoneNumber`] | exactly 10 ASCII decimal digits                |
//! | [`EmailAddress`]| `local@domain.ext`, alphanumeric extension     |
//! | [`BirthDate`]   | a real calendar date written `DD.MM.YYYY`      |
//! | [`FreeText`]    | anything                                       |

use crate::error::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const PHONE_DIGITS: usize = 10;
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[A-Za-z0-9]+$").expect("valid email regex"));

// chrono alone accepts short years, signs and padding
static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}\.[0-9]{1,2}\.[0-9]{4}$").expect("valid birthday regex"));

/// Validates a phone number.
///
/// ```
/// use pal::model::fields::validate_phone;
///
/// assert!(validate_phone("0671234567").is_ok());
/// assert!(validate_phone("067123456").is_err());
/// assert!(validate_phone("067123456a").is_err());
/// ```
pub fn validate_phone(s: &str) -> Result<PhoneNumber, ValidationError> {
    s.parse()
}

/// Validates an email address.
pub fn validate_email(s: &str) -> Result<EmailAddress, ValidationError> {
    s.parse()
}

/// Parses a `DD.MM.YYYY` birthday.
///
/// ```
/// use pal::model::fields::parse_birthday;
///
/// assert!(parse_birthday("29.02.2020").is_ok());
/// assert!(parse_birthday("29.02.2021").is_err());
/// ```
pub fn parse_birthday(s: &str) -> Result<BirthDate, ValidationError> {
    s.parse()
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for PhoneNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == PHONE_DIGITS && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::Phone(s.to_string()))
        }
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if EMAIL_RE.is_match(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(ValidationError::Email(s.to_string()))
        }
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A birthday. Stored as a date, rendered and persisted as `DD.MM.YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for BirthDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for BirthDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !BIRTHDAY_RE.is_match(s) {
            return Err(ValidationError::Birthday(s.to_string()));
        }
        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::Birthday(s.to_string()))
    }
}

impl TryFrom<String> for BirthDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BirthDate> for String {
    fn from(value: BirthDate) -> Self {
        value.to_string()
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

/// Unvalidated text, used for the address slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FreeText(String);

impl FreeText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FreeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
