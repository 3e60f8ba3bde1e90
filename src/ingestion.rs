use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use serde::Deserialize;

use crate::domain::{Error, Request, ScriptRequest, ScriptStream};

/// Reads an operation script: one CSV row per request, addressed to a
/// user. Columns are `user, op, amount, category, date` with
/// `op` one of deposit, expense, reset, snapshot.
pub struct ScriptReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> ScriptReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct ScriptRow {
    user: String,
    op: String,
    amount: Option<String>,
    category: Option<String>,
    date: Option<String>,
}

impl TryFrom<ScriptRow> for ScriptRequest {
    type Error = Error;

    fn try_from(row: ScriptRow) -> Result<Self, Self::Error> {
        if row.user.is_empty() {
            return Err(Error::Script("row is missing a user".to_owned()));
        }

        // Amounts and dates stay raw here; the owning session validates
        // them and reports rejections on its own surface.
        let request = match row.op.to_ascii_lowercase().as_str() {
            "deposit" => Request::Deposit {
                income: row.amount.unwrap_or_default(),
            },
            "expense" => Request::Expense {
                amount: row.amount.unwrap_or_default(),
                category: row.category.unwrap_or_default(),
                date: row.date,
            },
            "reset" => Request::Reset,
            "snapshot" => Request::Snapshot,
            other => {
                return Err(Error::Script(format!("unknown operation: {}", other)));
            }
        };

        Ok(ScriptRequest {
            user: row.user,
            request,
        })
    }
}

impl<R: Read + Send + 'static> ScriptStream for ScriptReader<R> {
    type Entries = Pin<Box<dyn Stream<Item = Result<ScriptRequest, Error>> + Send>>;

    fn stream(&mut self) -> Self::Entries {
        // Take ownership of the reader so the iterator we build owns all
        // data and is 'static.
        let reader = match self.reader.take() {
            Some(r) => r,
            None => {
                // Already consumed; return an empty stream.
                return Box::pin(stream::iter(Vec::<Result<ScriptRequest, Error>>::new()));
            }
        };

        let iter = reader
            .into_deserialize::<ScriptRow>()
            .map(|row_res| match row_res {
                Ok(row) => ScriptRequest::try_from(row),
                Err(e) => Err(Error::Script(format!("CSV deserialization error: {}", e))),
            });

        Box::pin(stream::iter(iter))
    }
}
