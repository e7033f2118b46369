//! Two-factor authentication set-up state.
//!
//! There is no OTP backend: a code is accepted as soon as it has the right shape.

use serde::{Deserialize, Serialize};

use crate::Error;

/// The number of digits in a verification code.
pub const OTP_CODE_LENGTH: usize = 6;

pub const INVALID_CODE_MESSAGE: &str = "Enter a valid 6-digit code.";

/// How the user receives verification codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationMethod {
    /// An authenticator app (TOTP).
    #[default]
    Totp,
    /// A text message.
    Sms,
}

impl VerificationMethod {
    pub const ALL: [VerificationMethod; 2] = [VerificationMethod::Totp, VerificationMethod::Sms];

    /// The form value.
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationMethod::Totp => "totp",
            VerificationMethod::Sms => "sms",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerificationMethod::Totp => "Authenticator App (TOTP)",
            VerificationMethod::Sms => "SMS Code",
        }
    }
}

/// Check that `code` is exactly six ASCII digits.
///
/// # Errors
/// Returns [Error::InvalidOtpCode] otherwise.
pub fn validate_code(code: &str) -> Result<(), Error> {
    if code.len() == OTP_CODE_LENGTH && code.bytes().all(|byte| byte.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Error::InvalidOtpCode)
    }
}

/// Remove everything but ASCII digits from `raw` and keep at most six of them.
pub fn sanitize_code(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(OTP_CODE_LENGTH)
        .collect()
}

/// The state of the two-factor set-up panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TwoFactorSettings {
    pub enabled: bool,
    pub method: VerificationMethod,
    /// The sanitized code last entered by the user.
    pub code: String,
    /// The inline message shown under the code input.
    pub error: Option<&'static str>,
    pub verified: bool,
}

impl TwoFactorSettings {
    /// Switch two-factor authentication on or off.
    ///
    /// Switching off discards the code, the error and the verified flag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        if !enabled {
            self.code.clear();
            self.error = None;
            self.verified = false;
        }
    }

    pub fn set_method(&mut self, method: VerificationMethod) {
        self.method = method;
    }

    /// Store the sanitized `raw_code` and check it.
    ///
    /// # Errors
    /// Returns [Error::InvalidOtpCode] if the sanitized code is not six digits,
    /// in which case the inline error is set.
    pub fn verify(&mut self, raw_code: &str) -> Result<(), Error> {
        self.code = sanitize_code(raw_code);

        match validate_code(&self.code) {
            Ok(()) => {
                self.error = None;
                self.verified = true;
                Ok(())
            }
            Err(error) => {
                self.error = Some(INVALID_CODE_MESSAGE);
                self.verified = false;
                Err(error)
            }
        }
    }

    /// Abandon set-up.
    pub fn cancel(&mut self) {
        self.set_enabled(false);
    }
}


#[cfg(test)]
mod validate_code_tests {
    use crate::{Error, settings::two_factor::validate_code};

    #[test]
    fn accepts_six_digits() {
        assert_eq!(validate_code("012345"), Ok(()));
    }

    #[test]
    fn rejects_wrong_length_or_characters() {
        for code in ["", "12345", "1234567", "12345a", " 12345"] {
            assert_eq!(
                validate_code(code),
                Err(Error::InvalidOtpCode),
                "want error for {code:?}"
            );
        }
    }
}
