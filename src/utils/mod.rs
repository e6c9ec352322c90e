pub mod errors;
pub mod logging;
pub mod time;

pub use errors::AppError;
pub use logging::init_tracing;
pub use time::{format_time, progress_ratio};
