//! Secret generation for the config injector
//!
//! Secrets are sampled from the OS CSPRNG and restricted to alphanumerics so
//! they are always safe on the right of an unquoted `KEY=VALUE` line (no `=`,
//! `+` or `/` as base64 would produce).

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;

/// Length of every generated secret
pub const SECRET_LEN: usize = 32;

/// Generate a fresh 32-character alphanumeric secret
pub fn generate() -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(SECRET_LEN)
        .map(char::from)
        .collect()
}
