use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

use crate::config::EnvConfig;
use crate::utils::password::PasswordScheme;

/// Handle on the `users` table. Share it behind an `Arc`.
#[derive(Debug)]
pub struct MysqlService {
    pub(crate) db: DatabaseConnection,
    pub(crate) scheme: PasswordScheme,
}

impl MysqlService {
    pub async fn new(config: &EnvConfig) -> Result<Self, DbErr> {
        info!("Connecting to MySQL...");
        let mut options = ConnectOptions::new(config.db_url.clone());
        options
            .max_connections(config.max_connections)
            .sqlx_logging(false);
        let db = Database::connect(options).await?;
        info!(scheme = %config.password_scheme, "Connected to MySQL.");
        Ok(Self::from_connection(db, config.password_scheme))
    }

    pub fn from_connection(db: DatabaseConnection, scheme: PasswordScheme) -> Self {
        Self { db, scheme }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn into_connection(self) -> DatabaseConnection {
        self.db
    }

    pub fn password_scheme(&self) -> PasswordScheme {
        self.scheme
    }
}
