pub mod app;
pub mod app_state;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod render;

pub use app::create_app;
pub use app_state::AppState;
