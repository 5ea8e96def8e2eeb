use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business log messages to the `tracing` subscriber installed in `main`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "textify", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "textify", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "textify", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "textify", "{}", message);
    }
}
