//! Fan-out of `tracing` events to registered log sinks.

use crate::model::{LogEvent, Severity};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Receiver of log events. Implementations must accept events from any thread.
pub trait LogSink: Send + Sync {
    /// Called once per log event, on the emitting thread.
    fn on_log(&self, event: LogEvent);
}

/// Tracing layer that converts events into [`LogEvent`]s for every registered sink.
///
/// Clones share the same sink list, so the host can install one clone in its
/// subscriber and hand another to whoever registers sinks later.
#[derive(Clone, Default)]
pub struct LogDispatcher {
    sinks: Arc<RwLock<Vec<Arc<dyn LogSink>>>>,
}

impl LogDispatcher {
    /// Dispatcher with no sinks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink for every severity.
    pub fn register(&self, sink: Arc<dyn LogSink>) {
        self.sinks
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sink);
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Deliver an already-built event to every sink.
    pub fn dispatch(&self, event: LogEvent) {
        let sinks = self.sinks.read().unwrap_or_else(PoisonError::into_inner);
        if let Some((last, rest)) = sinks.split_last() {
            for sink in rest {
                sink.on_log(event.clone());
            }
            last.on_log(event);
        }
    }
}

impl fmt::Debug for LogDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogDispatcher")
            .field("sinks", &self.sink_count())
            .finish()
    }
}

impl<S: Subscriber> Layer<S> for LogDispatcher {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if self.sink_count() == 0 {
            return;
        }

        let metadata = event.metadata();
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let prefix = visitor.prefix.take().unwrap_or_default();
        self.dispatch(LogEvent {
            severity: Severity::code_for_tracing(metadata.level()),
            file: metadata.file().unwrap_or("<unknown>").to_string(),
            line: metadata.line().unwrap_or(0),
            message: visitor.into_message(),
            preamble: preamble(metadata.target()),
            prefix,
        });
    }
}

/// `"{HH:MM:SS.mmm} [{thread}] {target}"`
fn preamble(target: &str) -> String {
    let now = chrono::Local::now().format("%H:%M:%S%.3f");
    let thread = std::thread::current();
    match thread.name() {
        Some(name) => format!("{now} [{name}] {target}"),
        None => format!("{now} [{:?}] {target}", thread.id()),
    }
}

/// Collects the `message` field, the optional `prefix` field and any other
/// fields as trailing `key=value` pairs.
#[derive(Default)]
struct EventVisitor {
    message: String,
    prefix: Option<String>,
    extra: Vec<String>,
}

impl EventVisitor {
    fn push(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" => self.message = value,
            "prefix" => self.prefix = Some(value),
            name => self.extra.push(format!("{name}={value}")),
        }
    }

    fn into_message(self) -> String {
        if self.extra.is_empty() {
            return self.message;
        }
        let extra = self.extra.join(" ");
        if self.message.is_empty() {
            extra
        } else {
            format!("{} {extra}", self.message)
        }
    }
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.push(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.push(field, format!("{value:?}"));
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
