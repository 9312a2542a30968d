use super::command::ViewCommand;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};

/// Events buffered between the debouncer task and its consumer
const EVENT_BUFFER: usize = 16;

/// Trims and lower-cases a raw search value
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// What the search pipeline delivers, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    /// A debounced, normalized model query
    Query(String),
    /// A view command, delivered without delay
    Command(ViewCommand),
}

/// SearchDebouncer - turns a stream of keystrokes into accepted queries
///
/// Text and commands share one ordered channel into a spawned task. The
/// task keeps only the latest text and waits until it has been quiet for
/// `interval`, drops it when the raw text equals the last one it handled,
/// normalizes it, skips it when empty, and forwards the rest to the
/// subscription.
///
/// Commands bypass the delay. A command flushes pending text first, so
/// events reach the subscription in the order they were entered. Closing
/// the input flushes a pending value before the subscription ends.
pub struct SearchDebouncer;

impl SearchDebouncer {
    /// Spawns the debouncer task on the current tokio runtime
    pub fn spawn(interval: Duration) -> (SearchInput, SearchSubscription) {
        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(EVENT_BUFFER);
        let handle = tokio::spawn(run(input_rx, event_tx, interval));

        tracing::debug!(interval_ms = interval.as_millis() as u64, "search debouncer started");

        (
            SearchInput { inputs: input_tx },
            SearchSubscription {
                events: event_rx,
                handle: Some(handle),
            },
        )
    }
}

enum Input {
    Text(String),
    Command(ViewCommand),
}

/// Write side of the search pipeline
pub struct SearchInput {
    inputs: mpsc::UnboundedSender<Input>,
}

impl SearchInput {
    /// Replaces the current search text; only the latest value is kept
    pub fn push(&self, value: impl Into<String>) {
        self.send(Input::Text(value.into()));
    }

    /// Queues a view command behind any text pushed before it
    pub fn command(&self, command: ViewCommand) {
        self.send(Input::Command(command));
    }

    /// True once the debouncer task has gone away
    pub fn is_closed(&self) -> bool {
        self.inputs.is_closed()
    }

    fn send(&self, input: Input) {
        if self.inputs.send(input).is_err() {
            tracing::debug!("search debouncer gone, input dropped");
        }
    }
}

/// Read side of the search pipeline
///
/// Dropping the subscription aborts the debouncer task.
pub struct SearchSubscription {
    events: mpsc::Receiver<SearchEvent>,
    handle: Option<JoinHandle<()>>,
}

impl SearchSubscription {
    /// Next event, or `None` once the input is closed and drained
    pub async fn next(&mut self) -> Option<SearchEvent> {
        self.events.recv().await
    }

    /// Stops the debouncer task and waits for it to finish
    pub async fn shutdown(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }
        tracing::debug!("search debouncer stopped");
    }
}

impl Drop for SearchSubscription {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Latest text plus the raw value last handed on
#[derive(Default)]
struct PendingText {
    latest: String,
    last_raw: String,
    pending: bool,
}

impl PendingText {
    /// The query to emit for the pending text, if any
    fn take(&mut self) -> Option<String> {
        if !std::mem::take(&mut self.pending) || self.latest == self.last_raw {
            return None;
        }
        self.last_raw = self.latest.clone();
        let query = normalize_query(&self.latest);
        (!query.is_empty()).then_some(query)
    }
}

async fn run(
    mut inputs: mpsc::UnboundedReceiver<Input>,
    events: mpsc::Sender<SearchEvent>,
    interval: Duration,
) {
    let mut text = PendingText::default();
    let deadline = sleep(interval);
    tokio::pin!(deadline);

    loop {
        tokio::select! {
            input = inputs.recv() => match input {
                Some(Input::Text(value)) => {
                    text.latest = value;
                    text.pending = true;
                    deadline.as_mut().reset(Instant::now() + interval);
                }
                Some(Input::Command(command)) => {
                    if !flush(&mut text, &events).await {
                        return;
                    }
                    if events.send(SearchEvent::Command(command)).await.is_err() {
                        return;
                    }
                }
                None => {
                    flush(&mut text, &events).await;
                    return;
                }
            },
            _ = &mut deadline, if text.pending => {
                if !flush(&mut text, &events).await {
                    return;
                }
            }
        }
    }
}

/// Emits the pending text unless it was already handled
///
/// Returns false once the subscription is gone.
async fn flush(text: &mut PendingText, events: &mpsc::Sender<SearchEvent>) -> bool {
    let Some(query) = text.take() else {
        return true;
    };
    tracing::debug!(query = %query, "search query accepted");
    events.send(SearchEvent::Query(query)).await.is_ok()
}
