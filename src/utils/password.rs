use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::OsRng;
use std::{fmt, str::FromStr, sync::OnceLock};

/// How the `pass` column is populated and checked.
///
/// `Sha1` is what the existing `users` schema expects: an unsalted digest
/// computed by the database with `SHA1(?)`. It is fast and unsalted, so it
/// only stays the default for compatibility with rows already stored that
/// way. `Argon2` stores a salted PHC string and needs a `pass` column wide
/// enough to hold it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PasswordScheme {
    #[default]
    Sha1,
    Argon2,
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Sha1 => write!(f, "sha1"),
            PasswordScheme::Argon2 => write!(f, "argon2"),
        }
    }
}

impl FromStr for PasswordScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" => Ok(PasswordScheme::Sha1),
            "argon2" => Ok(PasswordScheme::Argon2),
            other => Err(format!("unknown password scheme `{other}`")),
        }
    }
}

pub fn hash(password: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

static DUMMY_HASH: OnceLock<String> = OnceLock::new();

/// A real Argon2id hash of a throwaway password, built once. Checking
/// against it costs the same as checking a stored hash.
pub fn dummy_hash() -> &'static str {
    DUMMY_HASH.get_or_init(|| hash("not-a-real-password").unwrap_or_default())
}

/// A stored value that isn't a PHC string is an error, a mismatch is `Ok(false)`.
pub fn verify(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok())
}
