//! App lock
//!
//! A 4-digit PIN guarding the app. Only an Argon2 hash is kept in
//! preferences.

pub mod pin;

pub use pin::{disable_pin, set_pin, verify_pin, PIN_LENGTH};
