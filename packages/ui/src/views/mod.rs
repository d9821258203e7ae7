//! Page views that live in the shared crate because they carry their own
//! state machine.

mod forgot_password;
pub use forgot_password::ForgotPassword;
