//! # Password recovery
//!
//! A four-step flow driven by [`PasswordRecovery`]:
//!
//! | Step | Leaves via | Guard |
//! |------|-----------|-------|
//! | [`RecoveryStep::EmailEntry`] | [`request_code`](PasswordRecovery::request_code) | non-empty email |
//! | [`RecoveryStep::OtpVerification`] | [`verify_code`](PasswordRecovery::verify_code) | code present, unexpired, equal |
//! | [`RecoveryStep::PasswordReset`] | [`reset_password`](PasswordRecovery::reset_password) | both fields, equal, 6+ chars |
//! | [`RecoveryStep::Complete`] | view redirects to `/login` | |
//!
//! [`cancel`](PasswordRecovery::cancel) returns to the first step from
//! anywhere.
//!
//! The one-time code comes from an [`OtpIssuer`]. [`DemoOtpIssuer`] makes one
//! up on the client; it stands in for a server-issued code and is not a real
//! reset mechanism. Nothing here talks to the network.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use thiserror::Error;

pub const OTP_LENGTH: usize = 6;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const DEFAULT_OTP_TTL_SECS: i64 = 300;

/// Source of one-time codes.
pub trait OtpIssuer {
    /// A fresh [`OTP_LENGTH`]-digit code.
    fn issue(&mut self) -> String;
}

/// Client-side code generator for the demo flow.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DemoOtpIssuer;

impl OtpIssuer for DemoOtpIssuer {
    fn issue(&mut self) -> String {
        rand::thread_rng().gen_range(100_000..1_000_000).to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OtpChallenge {
    pub code: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl OtpChallenge {
    pub fn new(code: String, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            code,
            issued_at,
            expires_at: issued_at + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whole seconds until expiry, never negative.
    pub fn seconds_left(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecoveryStep {
    EmailEntry,
    OtpVerification,
    PasswordReset,
    Complete,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RecoveryError {
    #[error("Please enter your email address")]
    EmailRequired,
    #[error("Please enter the OTP")]
    OtpRequired,
    #[error("OTP has expired. Please request a new one.")]
    OtpExpired,
    #[error("Invalid OTP. Please try again.")]
    OtpInvalid,
    #[error("Please wait for the current OTP to expire before requesting a new one")]
    ResendUnavailable,
    #[error("Please fill in all password fields")]
    PasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters long")]
    PasswordTooShort,
    #[error("This step is not available right now")]
    WrongStep,
}

/// State of one password-recovery attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct PasswordRecovery<I = DemoOtpIssuer> {
    issuer: I,
    ttl: Duration,
    step: RecoveryStep,
    email: String,
    challenge: Option<OtpChallenge>,
}

impl Default for PasswordRecovery<DemoOtpIssuer> {
    fn default() -> Self {
        Self::new(DemoOtpIssuer, Duration::seconds(DEFAULT_OTP_TTL_SECS))
    }
}

impl<I: OtpIssuer> PasswordRecovery<I> {
    pub fn new(issuer: I, ttl: Duration) -> Self {
        Self {
            issuer,
            ttl,
            step: RecoveryStep::EmailEntry,
            email: String::new(),
            challenge: None,
        }
    }

    pub fn step(&self) -> RecoveryStep {
        self.step
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn challenge(&self) -> Option<&OtpChallenge> {
        self.challenge.as_ref()
    }

    fn expect_step(&self, step: RecoveryStep) -> Result<(), RecoveryError> {
        if self.step == step {
            Ok(())
        } else {
            Err(RecoveryError::WrongStep)
        }
    }

    fn issue_challenge(&mut self, now: DateTime<Utc>) -> &OtpChallenge {
        let code = self.issuer.issue();
        tracing::debug!("Issued recovery code");
        self.challenge.insert(OtpChallenge::new(code, now, self.ttl))
    }

    /// Issue a code for `email` and move to verification.
    pub fn request_code(
        &mut self,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<&OtpChallenge, RecoveryError> {
        self.expect_step(RecoveryStep::EmailEntry)?;
        let email = email.trim();
        if email.is_empty() {
            return Err(RecoveryError::EmailRequired);
        }
        self.email = email.to_string();
        self.step = RecoveryStep::OtpVerification;
        Ok(self.issue_challenge(now))
    }

    /// A new code may be requested once the current one has expired.
    pub fn can_resend(&self, now: DateTime<Utc>) -> bool {
        self.step == RecoveryStep::OtpVerification
            && self.challenge.as_ref().is_none_or(|c| c.is_expired(now))
    }

    pub fn resend_code(&mut self, now: DateTime<Utc>) -> Result<&OtpChallenge, RecoveryError> {
        self.expect_step(RecoveryStep::OtpVerification)?;
        if !self.can_resend(now) {
            return Err(RecoveryError::ResendUnavailable);
        }
        Ok(self.issue_challenge(now))
    }

    /// Check `code` against the live challenge.
    ///
    /// A mismatch leaves the state untouched so the user can retry.
    pub fn verify_code(&mut self, code: &str, now: DateTime<Utc>) -> Result<(), RecoveryError> {
        self.expect_step(RecoveryStep::OtpVerification)?;
        let code = code.trim();
        if code.is_empty() {
            return Err(RecoveryError::OtpRequired);
        }
        let challenge = match &self.challenge {
            Some(challenge) if !challenge.is_expired(now) => challenge,
            _ => return Err(RecoveryError::OtpExpired),
        };
        if challenge.code != code {
            return Err(RecoveryError::OtpInvalid);
        }
        self.challenge = None;
        self.step = RecoveryStep::PasswordReset;
        Ok(())
    }

    pub fn reset_password(&mut self, password: &str, confirm: &str) -> Result<(), RecoveryError> {
        self.expect_step(RecoveryStep::PasswordReset)?;
        if password.is_empty() || confirm.is_empty() {
            return Err(RecoveryError::PasswordRequired);
        }
        if password != confirm {
            return Err(RecoveryError::PasswordMismatch);
        }
        if password.chars().count() < MIN_PASSWORD_LEN {
            return Err(RecoveryError::PasswordTooShort);
        }
        tracing::debug!("Password reset completed");
        self.step = RecoveryStep::Complete;
        Ok(())
    }

    /// Abandon the attempt and start over.
    pub fn cancel(&mut self) {
        self.step = RecoveryStep::EmailEntry;
        self.email.clear();
        self.challenge = None;
    }

    /// Seconds left on the live challenge; 0 when there is none.
    pub fn seconds_left(&self, now: DateTime<Utc>) -> i64 {
        self.challenge
            .as_ref()
            .map(|c| c.seconds_left(now))
            .unwrap_or(0)
    }
}

/// Keep the digits of a typed code, at most [`OTP_LENGTH`] of them.
pub fn sanitize_code(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LENGTH)
        .collect()
}

/// `m:ss` for a countdown.
pub fn format_countdown(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedIssuer(Vec<&'static str>);

    impl OtpIssuer for FixedIssuer {
        fn issue(&mut self) -> String {
            self.0.remove(0).to_string()
        }
    }

    fn t0() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2025-01-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn flow(codes: Vec<&'static str>) -> PasswordRecovery<FixedIssuer> {
        PasswordRecovery::new(FixedIssuer(codes), Duration::seconds(300))
    }

    fn at_reset() -> PasswordRecovery<FixedIssuer> {
        let mut r = flow(vec!["123456"]);
        r.request_code("a@b.c", t0()).unwrap();
        r.verify_code("123456", t0()).unwrap();
        r
    }

    #[test]
    fn test_demo_issuer_six_digits() {
        let mut issuer = DemoOtpIssuer;
        for _ in 0..50 {
            let code = issuer.issue();
            assert_eq!(code.len(), OTP_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            assert!(!code.starts_with('0'));
        }
    }

    #[test]
    fn test_request_requires_email() {
        let mut r = flow(vec!["123456"]);
        assert_eq!(
            r.request_code("   ", t0()).unwrap_err(),
            RecoveryError::EmailRequired
        );
        assert_eq!(r.step(), RecoveryStep::EmailEntry);
        assert!(r.challenge().is_none());
    }

    #[test]
    fn test_request_starts_countdown() {
        let mut r = flow(vec!["123456"]);
        let challenge = r.request_code(" ada@example.com ", t0()).unwrap().clone();
        assert_eq!(challenge.code, "123456");
        assert_eq!(challenge.expires_at, t0() + Duration::seconds(300));
        assert_eq!(r.step(), RecoveryStep::OtpVerification);
        assert_eq!(r.email(), "ada@example.com");
        assert_eq!(r.seconds_left(t0()), 300);
        assert_eq!(r.seconds_left(t0() + Duration::seconds(61)), 239);
    }

    #[test]
    fn test_verify_matching_code() {
        let mut r = flow(vec!["123456"]);
        r.request_code("a@b.c", t0()).unwrap();
        r.verify_code("123456", t0() + Duration::seconds(30)).unwrap();
        assert_eq!(r.step(), RecoveryStep::PasswordReset);
        assert!(r.challenge().is_none());
    }

    #[test]
    fn test_verify_mismatch_stays() {
        let mut r = flow(vec!["123456"]);
        r.request_code("a@b.c", t0()).unwrap();
        for wrong in ["654321", "000000", "123457"] {
            assert_eq!(
                r.verify_code(wrong, t0()).unwrap_err(),
                RecoveryError::OtpInvalid
            );
            assert_eq!(r.step(), RecoveryStep::OtpVerification);
        }
        assert!(r.challenge().is_some());
    }

    #[test]
    fn test_verify_empty_code() {
        let mut r = flow(vec!["123456"]);
        r.request_code("a@b.c", t0()).unwrap();
        assert_eq!(
            r.verify_code("", t0()).unwrap_err(),
            RecoveryError::OtpRequired
        );
        assert_eq!(
            RecoveryError::OtpRequired.to_string(),
            "Please enter the OTP"
        );
    }

    #[test]
    fn test_expired_code_rejected() {
        let mut r = flow(vec!["123456"]);
        r.request_code("a@b.c", t0()).unwrap();
        let later = t0() + Duration::seconds(300);
        assert_eq!(
            r.verify_code("123456", later).unwrap_err(),
            RecoveryError::OtpExpired
        );
        assert_eq!(r.step(), RecoveryStep::OtpVerification);
        assert_eq!(r.seconds_left(later), 0);
    }

    #[test]
    fn test_resend_only_after_expiry() {
        let mut r = flow(vec!["111111", "222222"]);
        r.request_code("a@b.c", t0()).unwrap();
        assert!(!r.can_resend(t0() + Duration::seconds(299)));
        assert_eq!(
            r.resend_code(t0() + Duration::seconds(10)).unwrap_err(),
            RecoveryError::ResendUnavailable
        );

        let later = t0() + Duration::seconds(301);
        assert!(r.can_resend(later));
        let fresh = r.resend_code(later).unwrap();
        assert_eq!(fresh.code, "222222");
        assert!(!r.can_resend(later));
        r.verify_code("222222", later + Duration::seconds(5)).unwrap();
        assert_eq!(r.step(), RecoveryStep::PasswordReset);
    }

    #[test]
    fn test_reset_checks_in_order() {
        let mut r = at_reset();
        assert_eq!(
            r.reset_password("", "abc").unwrap_err(),
            RecoveryError::PasswordRequired
        );
        // Mismatch wins over length.
        assert_eq!(
            r.reset_password("abc", "abd").unwrap_err(),
            RecoveryError::PasswordMismatch
        );
        assert_eq!(
            r.reset_password("abc", "abc").unwrap_err(),
            RecoveryError::PasswordTooShort
        );
        assert_eq!(r.step(), RecoveryStep::PasswordReset);

        r.reset_password("secret", "secret").unwrap();
        assert_eq!(r.step(), RecoveryStep::Complete);
    }

    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_logs_never_carry_the_email() {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut r = flow(vec!["123456"]);
            r.request_code("ada@example.com", t0()).unwrap();
            r.verify_code("123456", t0()).unwrap();
            r.reset_password("secret", "secret").unwrap();
        });

        let logs = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("Issued recovery code"), "{logs}");
        assert!(logs.contains("Password reset completed"), "{logs}");
        assert!(!logs.contains("ada@example.com"), "{logs}");
    }

    #[test]
    fn test_out_of_order_calls() {
        let mut r = flow(vec!["123456"]);
        assert_eq!(
            r.verify_code("123456", t0()).unwrap_err(),
            RecoveryError::WrongStep
        );
        assert_eq!(
            r.reset_password("secret", "secret").unwrap_err(),
            RecoveryError::WrongStep
        );
    }

    #[test]
    fn test_cancel_resets() {
        let mut r = flow(vec!["123456"]);
        r.request_code("a@b.c", t0()).unwrap();
        r.cancel();
        assert_eq!(r.step(), RecoveryStep::EmailEntry);
        assert_eq!(r.email(), "");
        assert!(r.challenge().is_none());
    }

    #[test]
    fn test_sanitize_code() {
        assert_eq!(sanitize_code("12 34-56"), "123456");
        assert_eq!(sanitize_code("12345678"), "123456");
        assert_eq!(sanitize_code("abc"), "");
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(300), "5:00");
        assert_eq!(format_countdown(61), "1:01");
        assert_eq!(format_countdown(9), "0:09");
        assert_eq!(format_countdown(-3), "0:00");
    }
}
