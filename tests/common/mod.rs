#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Arc;

use asgn4_users::{config::EnvConfig, MysqlService, PasswordScheme};
use sea_orm::{ConnectionTrait, DatabaseBackend, MockDatabase, Value};
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::mysql::Mysql;

pub const USERS_TABLE: &str = "CREATE TABLE users (
    user_id INT NOT NULL AUTO_INCREMENT PRIMARY KEY,
    username VARCHAR(64) NOT NULL UNIQUE,
    pass VARCHAR(255) NOT NULL,
    token_balance INT NOT NULL DEFAULT 0
)";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn mock_db() -> MockDatabase {
    MockDatabase::new(DatabaseBackend::MySql)
}

pub fn mock_service(db: MockDatabase) -> MysqlService {
    init_logging();
    MysqlService::from_connection(db.into_connection(), PasswordScheme::Sha1)
}

pub fn mock_service_with(db: MockDatabase, scheme: PasswordScheme) -> MysqlService {
    init_logging();
    MysqlService::from_connection(db.into_connection(), scheme)
}

/// A projected row as the executor hands it back.
pub fn user_row(id: i64, username: &str, token_balance: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([
        ("id", Value::from(id)),
        ("username", Value::from(username)),
        ("token_balance", Value::from(token_balance)),
    ])
}

pub fn credentials_row(id: i64, username: &str, token_balance: i64, pass: &str) -> BTreeMap<&'static str, Value> {
    let mut row = user_row(id, username, token_balance);
    row.insert("pass", Value::from(pass));
    row
}

/// A throwaway MySQL with an empty `users` table.
pub struct TestContext {
    pub db: Arc<MysqlService>,
    pub _container: ContainerAsync<Mysql>,
}

impl TestContext {
    pub async fn new() -> TestContext {
        Self::with_scheme(PasswordScheme::Sha1).await
    }

    pub async fn with_scheme(scheme: PasswordScheme) -> TestContext {
        init_logging();
        let container = Mysql::default().start().await.expect("Failed to start mysql container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container.get_host_port_ipv4(3306).await.expect("Failed to get port");

        let mut config = EnvConfig::new(format!("mysql://root@{}:{}/test", host, port));
        config.password_scheme = scheme;

        let service = MysqlService::new(&config)
            .await
            .expect("Failed to initialize MysqlService");
        service
            .connection()
            .execute_unprepared(USERS_TABLE)
            .await
            .expect("Failed to create users table");

        TestContext {
            db: Arc::new(service),
            _container: container,
        }
    }
}

pub fn no_rows() -> Vec<BTreeMap<&'static str, Value>> {
    Vec::new()
}
