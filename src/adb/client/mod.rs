pub mod file_client;
pub mod queries;
pub mod transfer;
