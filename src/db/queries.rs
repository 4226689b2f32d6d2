//! Statement templates for the `users` table. Every caller-supplied value
//! is a `?` placeholder bound at execution time.

pub const AUTHENTICATE: &str =
    "SELECT user_id AS id, username, token_balance FROM users WHERE username = ? AND pass = SHA1(?)";

pub const INSERT_USER: &str =
    "INSERT INTO users (user_id, username, pass, token_balance) VALUES (?, ?, SHA1(?), ?)";

pub const FIND_USER_BY_ID: &str =
    "SELECT user_id AS id, username, token_balance FROM users WHERE user_id = ?";

pub const FIND_USER_BY_USERNAME: &str =
    "SELECT user_id AS id, username, token_balance FROM users WHERE username = ?";

pub const DELETE_USER: &str = "DELETE FROM users WHERE user_id = ?";

// argon2: the hash is computed and checked in-process
pub const INSERT_USER_PREHASHED: &str =
    "INSERT INTO users (user_id, username, pass, token_balance) VALUES (?, ?, ?, ?)";

pub const FIND_CREDENTIALS_BY_USERNAME: &str =
    "SELECT user_id AS id, username, token_balance, pass FROM users WHERE username = ?";
