//! Per-user pocket-money tracking: isolated account sessions with an
//! expense cascade that pays from balance, then savings, then debt.

pub mod dlq;
pub mod domain;
pub mod ingestion;
pub mod presenter;
pub mod registry;
pub mod session;

pub use domain::{
    Account, DeadLetterQueue, Error, LogEntry, Money, Operation, Presenter, Request,
    RequestStream, ScriptRequest, ScriptStream, Snapshot, Source, Transaction,
};
