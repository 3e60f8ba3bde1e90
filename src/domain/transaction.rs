use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Which pool a settled expense record drew from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Source {
    Balance,
    Savings,
    Debt,
}

impl core::fmt::Display for Source {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Source::Balance => "Balance",
            Source::Savings => "Savings",
            Source::Debt => "Debt",
        };
        write!(f, "{}", label)
    }
}

/// One draw against a single pool, immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub source: Source,
    pub date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
}

impl core::fmt::Display for Transaction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{}|{}|{}|{:.2}",
            self.source, self.date, self.category, self.amount
        )
    }
}

/// An account log line: a settled draw, or the marker emitted when an
/// expense wipes out everything spendable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LogEntry {
    Spend(Transaction),
    SavingsExhausted,
}

impl LogEntry {
    pub(crate) fn spend(
        source: Source,
        date: NaiveDate,
        category: String,
        amount: Decimal,
    ) -> Self {
        Self::Spend(Transaction {
            source,
            date,
            category,
            amount,
        })
    }
}

impl core::fmt::Display for LogEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LogEntry::Spend(tx) => write!(f, "{}", tx),
            LogEntry::SavingsExhausted => write!(f, "Savings exhausted. Used up all savings."),
        }
    }
}
