pub mod config;
pub mod db;
pub mod types;
pub mod utils;

pub use db::mysql_service::MysqlService;
pub use types::error::AppError;
pub use types::user::{NewUser, User};
pub use utils::password::PasswordScheme;
