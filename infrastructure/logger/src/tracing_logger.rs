use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `tracing` target for every event emitted through the domain logger.
pub const TARGET: &str = "product_catalog";

/// Forwards domain log calls to the globally installed `tracing` subscriber.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
}
