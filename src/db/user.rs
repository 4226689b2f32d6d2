use crate::db::mysql_service::MysqlService;
use crate::db::queries;
use crate::types::{
    error::AppError,
    user::{Credentials, NewUser, User},
};
use crate::utils::password::{self, PasswordScheme};
use sea_orm::{ConnectionTrait, DbErr, FromQueryResult, Statement, Value};
use tracing::{debug, warn};

impl MysqlService {
    fn statement<I>(&self, sql: &str, values: I) -> Statement
    where
        I: IntoIterator<Item = Value>,
    {
        Statement::from_sql_and_values(self.db.get_database_backend(), sql, values)
    }

    /// Returns the user only if both the username and the password match.
    /// An unknown username and a wrong password both give `None`.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>, AppError> {
        debug!(username, scheme = %self.scheme, "authenticating user");
        match self.scheme {
            PasswordScheme::Sha1 => {
                let stmt = self.statement(queries::AUTHENTICATE, [username.into(), password.into()]);
                Ok(User::find_by_statement(stmt).one(&self.db).await?)
            }
            PasswordScheme::Argon2 => {
                let stmt = self.statement(queries::FIND_CREDENTIALS_BY_USERNAME, [username.into()]);
                let Some(credentials) = Credentials::find_by_statement(stmt).one(&self.db).await? else {
                    // unknown usernames pay for one verify too
                    let _ = password::verify(password, password::dummy_hash());
                    return Ok(None);
                };
                match password::verify(password, &credentials.pass) {
                    Ok(true) => Ok(Some(credentials.into_user())),
                    Ok(false) => Ok(None),
                    Err(_) => {
                        warn!(username, "stored hash is not argon2");
                        Ok(None)
                    }
                }
            }
        }
    }

    /// Insert a user. When `user.id` is unset (or 0) the database picks
    /// the id and it is written back into `user`.
    pub async fn create_user(&self, user: &mut NewUser) -> Result<i64, AppError> {
        let stmt = match self.scheme {
            PasswordScheme::Sha1 => self.statement(
                queries::INSERT_USER,
                [
                    user.id.into(),
                    user.username.as_str().into(),
                    user.password.as_str().into(),
                    user.token_balance.into(),
                ],
            ),
            PasswordScheme::Argon2 => {
                let hash = password::hash(&user.password)?;
                self.statement(
                    queries::INSERT_USER_PREHASHED,
                    [
                        user.id.into(),
                        user.username.as_str().into(),
                        hash.into(),
                        user.token_balance.into(),
                    ],
                )
            }
        };

        let result = self.db.execute(stmt).await?;

        let id = match user.id {
            Some(id) if id != 0 => id,
            _ => {
                let assigned = i64::try_from(result.last_insert_id())
                    .map_err(|_| DbErr::Custom("insert id out of range".into()))?;
                user.id = Some(assigned);
                assigned
            }
        };
        debug!(id, username = %user.username, "created user");
        Ok(id)
    }

    pub async fn find_user_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        debug!(id, "finding user by id");
        let stmt = self.statement(queries::FIND_USER_BY_ID, [id.into()]);
        Ok(User::find_by_statement(stmt).one(&self.db).await?)
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        debug!(username, "finding user by username");
        let stmt = self.statement(queries::FIND_USER_BY_USERNAME, [username.into()]);
        Ok(User::find_by_statement(stmt).one(&self.db).await?)
    }

    /// Returns the number of rows deleted: 1, or 0 if there was no such user.
    pub async fn remove_user(&self, id: i64) -> Result<u64, AppError> {
        let stmt = self.statement(queries::DELETE_USER, [id.into()]);
        let removed = self.db.execute(stmt).await?.rows_affected();
        debug!(id, removed, "removed user");
        Ok(removed)
    }
}
