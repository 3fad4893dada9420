use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards use-case log lines to `tracing` under the `use_case` target,
/// so they can be filtered with `RUST_LOG=use_case=debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "use_case", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "use_case", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "use_case", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "use_case", "{}", message);
    }
}
