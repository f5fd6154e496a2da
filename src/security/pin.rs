//! PIN hashing and verification using Argon2id

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::info;

use crate::config::Settings;
use crate::error::{SmartSaveError, SmartSaveResult};

/// Number of digits in an app PIN
pub const PIN_LENGTH: usize = 4;

fn validate_pin(pin: &str) -> SmartSaveResult<()> {
    if pin.len() != PIN_LENGTH || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SmartSaveError::Validation(format!(
            "PIN must be exactly {} digits",
            PIN_LENGTH
        )));
    }
    Ok(())
}

/// Hash and store a new PIN, enabling the lock
pub fn set_pin(settings: &mut Settings, pin: &str) -> SmartSaveResult<()> {
    validate_pin(pin)?;

    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(pin.as_bytes(), &salt)
        .map_err(|e| SmartSaveError::Config(format!("Failed to hash PIN: {}", e)))?;

    settings.app_pin = Some(hash.to_string());
    settings.pin_set = true;
    info!("app PIN set");
    Ok(())
}

/// Remove the stored PIN and disable the lock
pub fn disable_pin(settings: &mut Settings) {
    settings.app_pin = None;
    settings.pin_set = false;
    info!("app PIN disabled");
}

/// Check a PIN attempt against the stored hash
pub fn verify_pin(settings: &Settings, attempt: &str) -> SmartSaveResult<bool> {
    let stored = match (&settings.app_pin, settings.pin_set) {
        (Some(stored), true) => stored,
        _ => return Err(SmartSaveError::Config("No PIN is set".into())),
    };

    let hash = PasswordHash::new(stored)
        .map_err(|e| SmartSaveError::Config(format!("Stored PIN hash is invalid: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(attempt.as_bytes(), &hash)
        .is_ok())
}
