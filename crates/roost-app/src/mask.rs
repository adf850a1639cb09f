//! Contact masking for display.
//!
//! The OTP screen shows where the code was sent without revealing the whole
//! contact value. Masking is lossy and never fails: input that does not have
//! the expected shape is shown unmasked.
//!
//! - Email: the first two characters of the local part and the full domain
//!   are kept, the rest of the local part becomes [`EMAIL_MARKER`].
//! - Phone: only digits are kept, all but the last four become
//!   [`PHONE_MARKER`], and a leading `+` is preserved.

use std::fmt;

/// Marker replacing the hidden part of an email's local part.
pub const EMAIL_MARKER: &str = "***";

/// Marker replacing each hidden phone digit.
pub const PHONE_MARKER: char = 'X';

const EMAIL_REVEAL: usize = 2;
const PHONE_REVEAL: usize = 4;

/// Kind of contact being verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerificationKind {
    /// Email address.
    Email,
    /// Phone number.
    Phone,
}

impl VerificationKind {
    /// Lowercase name (`"email"` or `"phone"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for VerificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Destination identity a code is sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationTarget {
    /// Selects display copy and masking rule.
    pub kind: VerificationKind,
    /// Raw contact value as entered by the user.
    pub contact: String,
}

impl VerificationTarget {
    /// Create a target of the given kind.
    pub fn new(kind: VerificationKind, contact: impl Into<String>) -> Self {
        Self { kind, contact: contact.into() }
    }

    /// Email target.
    pub fn email(contact: impl Into<String>) -> Self {
        Self::new(VerificationKind::Email, contact)
    }

    /// Phone target.
    pub fn phone(contact: impl Into<String>) -> Self {
        Self::new(VerificationKind::Phone, contact)
    }
}

/// Read-only masked rendering of a [`VerificationTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedDisplay(String);

impl MaskedDisplay {
    /// Masked text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MaskedDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Mask a target's contact value according to its kind.
pub fn compute_masked_display(target: &VerificationTarget) -> MaskedDisplay {
    let masked = match target.kind {
        VerificationKind::Email => mask_email(&target.contact),
        VerificationKind::Phone => mask_phone(&target.contact),
    };
    MaskedDisplay(masked)
}

/// Mask an email address.
///
/// Values without a non-empty local part and domain around the first `@`
/// are returned as-is.
pub fn mask_email(contact: &str) -> String {
    let Some((local, domain)) = contact.split_once('@') else {
        return contact.to_string();
    };
    if local.is_empty() || domain.is_empty() {
        return contact.to_string();
    }

    let visible: String = local.chars().take(EMAIL_REVEAL).collect();
    format!("{visible}{EMAIL_MARKER}@{domain}")
}

/// Mask a phone number.
///
/// Non-digit characters are dropped. Numbers with at most four digits are
/// returned unmasked.
pub fn mask_phone(contact: &str) -> String {
    let prefix = if contact.starts_with('+') { "+" } else { "" };
    let digits: String = contact.chars().filter(char::is_ascii_digit).collect();

    let hidden = digits.len().saturating_sub(PHONE_REVEAL);
    let mut masked = String::with_capacity(prefix.len() + digits.len());
    masked.push_str(prefix);
    masked.extend(std::iter::repeat_n(PHONE_MARKER, hidden));
    masked.push_str(&digits[hidden..]);
    masked
}
