use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row of `users` as seen outside the repository. There is no password
/// field, so nothing built from this type can leak the stored hash.
#[derive(Clone, Debug, PartialEq, Eq, FromQueryResult, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub token_balance: i64,
}

/// Input to `MysqlService::create_user`.
///
/// Leave `id` as `None` to have the database assign one; `create_user`
/// writes the assigned value back here.
#[derive(Clone, Deserialize)]
pub struct NewUser {
    #[serde(default)]
    pub id: Option<i64>,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub token_balance: i64,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>, token_balance: i64) -> Self {
        NewUser {
            id: None,
            username: username.into(),
            password: password.into(),
            token_balance,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}

impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("token_balance", &self.token_balance)
            .finish()
    }
}

// Only used to check an argon2 hash in-process; never leaves `db::user`.
#[derive(FromQueryResult)]
pub(crate) struct Credentials {
    pub id: i64,
    pub username: String,
    pub token_balance: i64,
    pub pass: String,
}

impl Credentials {
    pub(crate) fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            token_balance: self.token_balance,
        }
    }
}
