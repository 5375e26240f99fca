use super::{
    contact::Contact,
    draft::ErrorTag,
};

/// The single user-facing message for every validation failure. The three
/// failure causes are deliberately collapsed into one message, matching the
/// behavior the directory has always shipped with.
pub const INVALID_NAME_MESSAGE: &str =
    "Invalid name format. Names must be fill, unique, and contain only letters.";

/// Outcome of the caller's equality-filter lookup for contacts whose first
/// and last name both match the draft. The gate never performs the network
/// call itself; it only inspects this result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Similarity {
    /// The lookup has not resolved yet.
    Pending,
    /// The lookup failed; uniqueness cannot be established.
    Failed,
    /// The lookup resolved with this many exact-name matches.
    Resolved(usize),
}

impl Similarity {
    pub fn from_matches(matches: &[Contact]) -> Self {
        Similarity::Resolved(matches.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cause {
    Empty,
    Duplicate,
    InvalidChars,
    Unresolved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(Cause),
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn message(&self) -> Option<&'static str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(_) => Some(INVALID_NAME_MESSAGE),
        }
    }

    pub fn tag(&self) -> Option<ErrorTag> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(_) => Some(ErrorTag::Name),
        }
    }
}

fn letters_only(input: &str) -> bool {
    input.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

/// Decides whether a proposed contact name may be submitted. Pure and
/// caller-driven: re-invoke whenever the first or last name changes, since
/// the similarity lookup depends on the current draft values.
///
/// Rules apply in order and short-circuit: the first name must be non-empty
/// after trimming, the (first, last) pair must be unique among existing
/// contacts (case-sensitive), and both names may contain only letters and
/// whitespace. An unresolved or failed similarity lookup conservatively
/// fails validation.
pub fn validate(first_name: &str, last_name: &str, similar: &Similarity) -> Validation {
    if first_name.trim().is_empty() {
        return Validation::Invalid(Cause::Empty);
    }

    match similar {
        Similarity::Resolved(0) => {},
        Similarity::Resolved(_) => return Validation::Invalid(Cause::Duplicate),
        Similarity::Pending |
        Similarity::Failed      => return Validation::Invalid(Cause::Unresolved),
    }

    if !letters_only(first_name) || !letters_only(last_name) {
        return Validation::Invalid(Cause::InvalidChars);
    }

    Validation::Valid
}
