pub mod mysql_service;
pub mod queries;
pub mod user;
