pub mod app;
pub mod checklist;
pub mod config;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod history;
pub mod mailer;
pub mod models;
pub mod pdf;
pub mod relay;
pub mod session;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use session::Session;
pub use state::AppState;
pub use storage::Store;
