pub mod database;
pub mod http;
pub mod kv;
pub mod upstream;
