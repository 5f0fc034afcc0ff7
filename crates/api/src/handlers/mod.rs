pub mod content;
pub mod gateway;
pub mod home;
pub mod record;

pub use content::serve_content;
pub use gateway::handle_gateway;
pub use home::serve_home;
pub use record::query_record;
