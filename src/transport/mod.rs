pub mod server_connection;
