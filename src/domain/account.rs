use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::money::Money;
use crate::domain::transaction::{LogEntry, Source};

/// Fraction of every deposit set aside as savings.
const SAVINGS_RATE: Decimal = Decimal::from_parts(20, 0, 0, false, 2);

/// One user's finances. Exclusively owned and mutated by the session the
/// user belongs to.
#[derive(Debug)]
pub struct Account {
    name: String,
    balance: Decimal,
    savings: Decimal,
    debt: Decimal,
    log: Vec<LogEntry>,
}

/// Read-only copy of the three pools, taken after an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub balance: Decimal,
    pub savings: Decimal,
    pub debt: Decimal,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            balance: Decimal::ZERO,
            savings: Decimal::ZERO,
            debt: Decimal::ZERO,
            log: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Splits a deposit 80/20 into balance and savings.
    ///
    /// A later deposit re-splits the new income; accrued debt stays in
    /// place until reset.
    pub fn deposit(&mut self, income: Money) -> Snapshot {
        self.savings = income.amount() * SAVINGS_RATE;
        self.balance = income.amount() - self.savings;
        self.snapshot()
    }

    /// Settles one expense against balance, then savings, then debt.
    /// Exactly one branch runs per call; no pool ever goes below zero.
    pub fn add_expense(&mut self, amount: Money, category: String, date: NaiveDate) -> Snapshot {
        let amount = amount.amount();

        if self.balance >= amount {
            self.balance -= amount;
            self.log
                .push(LogEntry::spend(Source::Balance, date, category, amount));
        } else if self.savings > Decimal::ZERO && self.balance + self.savings >= amount {
            let from_savings = amount - self.balance;
            self.balance = Decimal::ZERO;
            self.savings -= from_savings;
            self.log
                .push(LogEntry::spend(Source::Savings, date, category, from_savings));
        } else {
            let spendable = self.balance + self.savings;
            let shortfall = amount - spendable;
            self.balance = Decimal::ZERO;
            self.savings = Decimal::ZERO;
            self.debt += shortfall;
            if spendable > Decimal::ZERO {
                self.log.push(LogEntry::spend(
                    Source::Savings,
                    date,
                    category.clone(),
                    spendable,
                ));
                self.log.push(LogEntry::SavingsExhausted);
            }
            self.log
                .push(LogEntry::spend(Source::Debt, date, category, shortfall));
        }

        self.snapshot()
    }

    /// Returns the account to its freshly created state.
    pub fn reset(&mut self) -> Snapshot {
        self.balance = Decimal::ZERO;
        self.savings = Decimal::ZERO;
        self.debt = Decimal::ZERO;
        self.log.clear();
        self.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            balance: self.balance,
            savings: self.savings,
            debt: self.debt,
        }
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }
}
