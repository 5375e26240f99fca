use super::contact::Contact;

/// Coarse category for the form's single error slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTag {
    Name,
    Number,
}

/// Transient form state for the add/edit interaction. Exists only for the
/// duration of the dialog; discarded on save or cancel.
#[derive(Debug, Clone)]
pub struct DraftContact {
    first_name  : String,
    last_name   : String,
    numbers     : Vec<String>,

    error       : Option<String>,
    error_tag   : Option<ErrorTag>,
}

impl DraftContact {
    /// A fresh draft starts with exactly one empty phone-number field.
    pub fn new() -> Self {
        Self {
            first_name  : String::new(),
            last_name   : String::new(),
            numbers     : vec![String::new()],
            error       : None,
            error_tag   : None,
        }
    }

    pub fn from_contact(contact: &Contact) -> Self {
        let mut numbers = contact.phones().iter()
            .map(|v| v.number().to_string())
            .collect::<Vec<_>>();
        if numbers.is_empty() {
            numbers.push(String::new());
        }

        Self {
            first_name  : contact.first_name().to_string(),
            last_name   : contact.last_name().to_string(),
            numbers,
            error       : None,
            error_tag   : None,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, first_name: &str) {
        self.first_name = first_name.to_string();
        self.clear_error();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, last_name: &str) {
        self.last_name = last_name.to_string();
        self.clear_error();
    }

    pub fn numbers(&self) -> &[String] {
        &self.numbers
    }

    pub fn add_number_field(&mut self) {
        self.numbers.push(String::new());
    }

    /// Removes the field at `index`. A no-op while only one field remains,
    /// or when the index is out of range.
    pub fn remove_number_field(&mut self, index: usize) -> bool {
        if self.numbers.len() <= 1 || index >= self.numbers.len() {
            return false;
        }
        self.numbers.remove(index);
        true
    }

    pub fn set_number(&mut self, index: usize, value: &str) -> bool {
        let Some(slot) = self.numbers.get_mut(index) else {
            return false;
        };
        *slot = value.to_string();
        true
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn error_tag(&self) -> Option<ErrorTag> {
        self.error_tag
    }

    pub fn set_error(&mut self, message: &str, tag: ErrorTag) {
        self.error = Some(message.to_string());
        self.error_tag = Some(tag);
    }

    pub fn clear_error(&mut self) {
        self.error = None;
        self.error_tag = None;
    }
}

impl Default for DraftContact {
    fn default() -> Self {
        Self::new()
    }
}
