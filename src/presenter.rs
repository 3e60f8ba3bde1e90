use crate::domain::{Account, LogEntry, Presenter, Snapshot};

/// Prints each post-operation state to stdout: one line per freshly
/// appended log entry, then the snapshot.
#[derive(Default, Debug, Clone)]
pub struct StdOutPresenter {}

impl Presenter for StdOutPresenter {
    fn render(&self, user: &str, snapshot: Snapshot, entries: &[LogEntry]) {
        for entry in entries {
            println!("{}: {}", user, entry);
        }
        println!(
            "{}: balance={:.2} savings={:.2} debt={:.2}",
            user, snapshot.balance, snapshot.savings, snapshot.debt
        );
    }
}

/// Final account table, one row per user.
pub fn print_summary(accounts: &[Account]) {
    println!("user,balance,savings,debt");
    for account in accounts {
        let snapshot = account.snapshot();
        println!(
            "{},{:.2},{:.2},{:.2}",
            account.name(),
            snapshot.balance,
            snapshot.savings,
            snapshot.debt
        );
    }
}
