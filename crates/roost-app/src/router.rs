//! Screen navigation.
//!
//! The [`Navigator`] owns the screen stack of the authentication flow and
//! the table that decides where a successful verification leads. The OTP
//! flow only reports *what* was verified; the destination lives here.

use std::fmt;

use crate::VerificationKind;

/// Screens of the authentication flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Initial language picker.
    LanguageSelection,
    /// Phone login.
    Login,
    /// Email signup.
    Signup,
    /// Code entry.
    OtpVerification,
    /// Personal details form shown after an email signup.
    PersonalDetails,
    /// Final confirmation.
    Success,
}

impl Screen {
    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Self::LanguageSelection => "Choose your language",
            Self::Login => "Log in",
            Self::Signup => "Sign up",
            Self::OtpVerification => "Verification",
            Self::PersonalDetails => "Personal details",
            Self::Success => "All set",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Screen stack with a fixed root.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    /// Create a navigator showing `root`.
    pub fn new(root: Screen) -> Self {
        Self { stack: vec![root] }
    }

    /// Create a navigator positioned on the OTP screen, entered the way a
    /// user reaches it for `kind`.
    pub fn for_verification(kind: VerificationKind) -> Self {
        let mut navigator = Self::new(Screen::LanguageSelection);
        navigator.navigate(Self::origin_for(kind));
        navigator.navigate(Screen::OtpVerification);
        navigator
    }

    /// Screen currently shown.
    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::LanguageSelection)
    }

    /// Number of screens on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `screen`.
    pub fn navigate(&mut self, screen: Screen) {
        tracing::debug!(from = %self.current(), to = %screen, "navigate");
        self.stack.push(screen);
    }

    /// Pop the current screen and return the one now shown.
    ///
    /// Returns `None` when already at the root.
    pub fn back(&mut self) -> Option<Screen> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop();
        Some(self.current())
    }

    /// Screen a user comes from when verifying `kind`.
    pub fn origin_for(kind: VerificationKind) -> Screen {
        match kind {
            VerificationKind::Email => Screen::Signup,
            VerificationKind::Phone => Screen::Login,
        }
    }

    /// Screen that follows a successful verification of `kind`.
    pub fn destination_after_verification(kind: VerificationKind) -> Screen {
        match kind {
            VerificationKind::Email => Screen::PersonalDetails,
            VerificationKind::Phone => Screen::Success,
        }
    }

    /// Navigate past a successful verification and return the new screen.
    pub fn complete_verification(&mut self, kind: VerificationKind) -> Screen {
        let destination = Self::destination_after_verification(kind);
        self.navigate(destination);
        destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_never_pops_root() {
        let mut nav = Navigator::new(Screen::LanguageSelection);
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), Screen::LanguageSelection);

        nav.navigate(Screen::Login);
        assert_eq!(nav.back(), Some(Screen::LanguageSelection));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn email_verification_leads_to_personal_details() {
        let mut nav = Navigator::for_verification(VerificationKind::Email);
        assert_eq!(nav.current(), Screen::OtpVerification);

        assert_eq!(nav.complete_verification(VerificationKind::Email), Screen::PersonalDetails);
        assert_eq!(nav.current(), Screen::PersonalDetails);
    }

    #[test]
    fn phone_verification_leads_to_success() {
        let mut nav = Navigator::for_verification(VerificationKind::Phone);
        assert_eq!(nav.complete_verification(VerificationKind::Phone), Screen::Success);
    }

    #[test]
    fn backing_out_of_otp_returns_to_origin() {
        let mut nav = Navigator::for_verification(VerificationKind::Phone);
        assert_eq!(nav.back(), Some(Screen::Login));

        let mut nav = Navigator::for_verification(VerificationKind::Email);
        assert_eq!(nav.back(), Some(Screen::Signup));
    }
}
