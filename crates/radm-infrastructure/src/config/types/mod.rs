//! Configuration sections

mod app;
mod logging;
mod operations;
mod server;
mod store;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use operations::OperationsConfig;
pub use server::ServerConfig;
pub use store::StoreConfig;
