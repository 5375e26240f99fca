use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::{
    Error,
    error::Result,
};

/// Store-assigned contact identifier. Opaque, immutable, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i64);

impl ContactId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        input.parse::<i64>().map(ContactId).map_err(|_| {
            Error::Argument(format!("Invalid contact id: {}", input))
        })
    }
}

impl From<i64> for ContactId {
    fn from(value: i64) -> Self {
        ContactId(value)
    }
}

/// A phone number as free-form text. Observed numbers exceed integer
/// precision, so the value is never treated as numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    #[serde(rename = "number")]
    number: String,
}

impl Phone {
    pub fn new(number: &str) -> Self {
        Self {
            number: number.to_string()
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

pub struct ContactBuilder {
    id          : ContactId,
    first_name  : Option<String>,
    last_name   : Option<String>,
    created     : Option<String>,
    phones      : Vec<Phone>,
}

impl ContactBuilder {
    pub fn new(id: ContactId) -> Self {
        Self {
            id,
            first_name  : None,
            last_name   : None,
            created     : None,
            phones      : Vec::new(),
        }
    }

    pub fn with_first_name(&mut self, first_name: &str) -> &mut Self {
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn with_last_name(&mut self, last_name: &str) -> &mut Self {
        self.last_name = Some(last_name.to_string());
        self
    }

    pub fn with_created(&mut self, created: &str) -> &mut Self {
        self.created = Some(created.to_string());
        self
    }

    pub fn with_phone(&mut self, number: &str) -> &mut Self {
        self.phones.push(Phone::new(number));
        self
    }

    pub fn with_phones(&mut self, numbers: &[String]) -> &mut Self {
        self.phones.extend(numbers.iter().map(|v| Phone::new(v)));
        self
    }

    pub fn build(&mut self) -> Result<Contact> {
        if crate::is_none_or_empty(&self.first_name) {
            return Err(Error::Argument("Missing contact first name".into()));
        }
        Ok(Contact::new(self))
    }
}

/// A person record as issued by the external store. The id and creation
/// timestamp are store-assigned and immutable; phones keep insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "id")]
    id:             ContactId,

    #[serde(rename = "first_name")]
    first_name:     String,

    #[serde(rename = "last_name", default)]
    last_name:      String,

    #[serde(rename = "created_at", default)]
    created:        String,

    #[serde(rename = "phones", default)]
    phones:         Vec<Phone>,
}

impl Contact {
    pub(crate) fn new(b: &mut ContactBuilder) -> Self {
        Self {
            id:         b.id,
            first_name: b.first_name.take().unwrap_or_default(),
            last_name:  b.last_name.take().unwrap_or_default(),
            created:    b.created.take().unwrap_or_default(),
            phones:     std::mem::take(&mut b.phones),
        }
    }

    pub fn id(&self) -> ContactId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn display_name(&self) -> String {
        match self.last_name.is_empty() {
            true  => self.first_name.clone(),
            false => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn created(&self) -> &str {
        &self.created
    }

    /// Creation timestamp rendered as "Month D, YYYY", falling back to the
    /// raw value when the stored timestamp is not ISO-8601.
    pub fn created_display(&self) -> String {
        const MONTHS: [&str; 12] = [
            "January", "February", "March", "April", "May", "June",
            "July", "August", "September", "October", "November", "December"
        ];

        let mut parts = self.created.splitn(3, '-');
        let year  = parts.next().and_then(|v| v.parse::<i32>().ok());
        let month = parts.next().and_then(|v| v.parse::<usize>().ok());
        let day   = parts.next()
            .and_then(|v| v.get(..2))
            .and_then(|v| v.parse::<u32>().ok());

        match (year, month, day) {
            (Some(y), Some(m), Some(d)) if (1..=12).contains(&m) => {
                format!("{} {}, {}", MONTHS[m - 1], d, y)
            }
            _ => self.created.clone(),
        }
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The number shown on the contact card: the first phone in insertion
    /// order, if any.
    pub fn primary_number(&self) -> Option<&str> {
        self.phones.first().map(|v| v.number())
    }
}

/// Partial name change handed to the update mutation.
#[derive(Debug, Default, Clone)]
pub struct ContactChange {
    first_name: Option<String>,
    last_name : Option<String>,
}

impl ContactChange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_name(&mut self, first_name: &str) -> &mut Self {
        self.first_name = Some(first_name.to_string());
        self
    }

    pub fn with_last_name(&mut self, last_name: &str) -> &mut Self {
        self.last_name = Some(last_name.to_string());
        self
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none()
    }
}
