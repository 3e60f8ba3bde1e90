use futures::Stream;

use crate::domain::account::Snapshot;
use crate::domain::error::Error;
use crate::domain::operation::{Request, ScriptRequest};
use crate::domain::transaction::LogEntry;

/// Source of one session's requests, delivered in arrival order.
pub trait RequestStream {
    type Requests: Stream<Item = Request> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::Requests;
}

/// Multiplexed source of requests addressed to named sessions.
pub trait ScriptStream {
    type Entries: Stream<Item = Result<ScriptRequest, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::Entries;
}

/// Display sink: receives each post-operation snapshot together with the
/// log entries that operation appended. May render asynchronously; the
/// snapshot is an owned copy and never a torn read.
pub trait Presenter {
    fn render(&self, user: &str, snapshot: Snapshot, entries: &[LogEntry]);
}

/// Surface for rejected input. A report never stops the owning session.
pub trait DeadLetterQueue {
    fn report(&self, user: &str, error: &Error);
}
