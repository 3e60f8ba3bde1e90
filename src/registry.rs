use std::collections::HashMap;
use std::pin::Pin;

use futures::channel::mpsc;
use futures::stream::{self, Stream};
use futures::{SinkExt, StreamExt};
use tokio::task::JoinHandle;

use crate::domain::{
    Account, DeadLetterQueue, Error, Presenter, Request, RequestStream, ScriptStream,
};
use crate::session::Session;

/// Requests buffered per session before a sender has to wait.
const SESSION_BUFFER: usize = 32;

/// Input endpoint handed to a session: the receiving half of its channel.
#[derive(Debug)]
pub struct ChannelInput {
    receiver: Option<mpsc::Receiver<Request>>,
}

/// Builds a session input endpoint and the sender that feeds it.
pub fn channel() -> (mpsc::Sender<Request>, ChannelInput) {
    let (sender, receiver) = mpsc::channel(SESSION_BUFFER);
    (
        sender,
        ChannelInput {
            receiver: Some(receiver),
        },
    )
}

impl RequestStream for ChannelInput {
    type Requests = Pin<Box<dyn Stream<Item = Request> + Send>>;

    fn stream(&mut self) -> Self::Requests {
        match self.receiver.take() {
            Some(receiver) => Box::pin(receiver),
            // Already consumed; nothing more will arrive.
            None => Box::pin(stream::empty()),
        }
    }
}

/// Owns every session: one account and one task per configured user, with
/// no state shared between them. Cross-account operations do not exist.
#[derive(Debug)]
pub struct Registry<D>
where
    D: DeadLetterQueue,
{
    senders: HashMap<String, mpsc::Sender<Request>>,
    sessions: Vec<JoinHandle<Account>>,
    dlq: D,
}

impl<D> Registry<D>
where
    D: DeadLetterQueue + Clone + Send + 'static,
{
    /// Creates one account per user name and spawns its session task.
    /// Duplicate names collapse to a single session.
    pub fn spawn<P>(users: &[String], presenter: P, dlq: D) -> Self
    where
        P: Presenter + Clone + Send + 'static,
    {
        let mut senders = HashMap::new();
        let mut sessions = Vec::new();

        for user in users {
            if senders.contains_key(user) {
                continue;
            }
            let (sender, input) = channel();
            let session = Session::new(
                Account::new(user.clone()),
                input,
                presenter.clone(),
                dlq.clone(),
            );
            tracing::info!(user = %user, "session started");
            sessions.push(tokio::spawn(session.run()));
            senders.insert(user.clone(), sender);
        }

        Self {
            senders,
            sessions,
            dlq,
        }
    }

    /// Hands a request to the owning session. The session applies requests
    /// in the order they arrive; nothing here touches account state.
    pub async fn send(&mut self, user: &str, request: Request) -> Result<(), Error> {
        let sender = self
            .senders
            .get_mut(user)
            .ok_or_else(|| Error::UnknownUser(user.to_owned()))?;
        sender
            .send(request)
            .await
            .map_err(|_| Error::SessionClosed(user.to_owned()))
    }

    /// Drives a whole script, dispatching each row to its session.
    /// Undeliverable rows are reported and skipped; a bad row never
    /// affects any session other than the one it addressed.
    pub async fn route<S>(&mut self, script: &mut S)
    where
        S: ScriptStream,
    {
        let mut entries = script.stream();

        while let Some(entry) = entries.next().await {
            match entry {
                Ok(addressed) => {
                    if let Err(e) = self.send(&addressed.user, addressed.request).await {
                        self.dlq.report(&addressed.user, &e);
                    }
                }
                Err(e) => self.dlq.report("script", &e),
            }
        }
    }

    /// Closes every input endpoint and waits for the sessions to finish,
    /// returning the final accounts sorted by user name.
    pub async fn close(self) -> Vec<Account> {
        let Registry {
            senders,
            sessions,
            dlq: _,
        } = self;
        drop(senders);

        let mut accounts = Vec::new();
        for handle in sessions {
            match handle.await {
                Ok(account) => accounts.push(account),
                // A crashed session must not take the others down with it.
                Err(e) => tracing::error!(error = %e, "session task failed"),
            }
        }
        accounts.sort_by(|a, b| a.name().cmp(b.name()));
        accounts
    }
}
