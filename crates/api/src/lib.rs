pub mod dto;
pub mod handlers;
pub mod routes;
pub mod routing;
pub mod state;
pub mod utils;

pub use routes::create_gateway_routes;
pub use state::AppState;
