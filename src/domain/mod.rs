pub mod account;
pub mod error;
pub mod money;
pub mod operation;
pub mod traits;
pub mod transaction;

pub use account::{Account, Snapshot};
pub use error::Error;
pub use money::Money;
pub use operation::{DEFAULT_CATEGORY, Operation, Request, ScriptRequest};
pub use traits::{DeadLetterQueue, Presenter, RequestStream, ScriptStream};
pub use transaction::{LogEntry, Source, Transaction};
