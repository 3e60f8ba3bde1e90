use futures::StreamExt;

use crate::domain::{Account, DeadLetterQueue, Operation, Presenter, RequestStream, Snapshot};

/// Runs one user's lifecycle: applies requests strictly in arrival order,
/// publishes each resulting snapshot, and reports rejected input without
/// stopping.
#[derive(Debug)]
pub struct Session<I, P, D>
where
    I: RequestStream,
    P: Presenter,
    D: DeadLetterQueue,
{
    account: Account,
    input: I,
    presenter: P,
    dlq: D,
}

impl<I, P, D> Session<I, P, D>
where
    I: RequestStream,
    P: Presenter,
    D: DeadLetterQueue,
{
    pub fn new(account: Account, input: I, presenter: P, dlq: D) -> Self {
        Self {
            account,
            input,
            presenter,
            dlq,
        }
    }

    /// Consumes the input stream to its end and returns the final account.
    pub async fn run(mut self) -> Account {
        let mut requests = self.input.stream();

        while let Some(request) = requests.next().await {
            match Operation::try_from(request) {
                Ok(op) => {
                    let seen = self.account.log().len();
                    let snapshot = self.apply(op);
                    self.presenter
                        .render(self.account.name(), snapshot, &self.account.log()[seen..]);
                }
                Err(e) => {
                    tracing::debug!(user = self.account.name(), error = %e, "request rejected");
                    self.dlq.report(self.account.name(), &e);
                }
            }
        }

        tracing::debug!(user = self.account.name(), "input closed, session finished");
        self.account
    }

    fn apply(&mut self, op: Operation) -> Snapshot {
        match op {
            Operation::Deposit { income } => self.account.deposit(income),
            Operation::Expense {
                amount,
                category,
                date,
            } => self.account.add_expense(amount, category, date),
            Operation::Reset => self.account.reset(),
            Operation::Snapshot => self.account.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::pin::Pin;
    use std::sync::{Arc, Mutex};

    use futures::stream::{self, Stream};
    use rust_decimal::Decimal;

    use super::*;
    use crate::domain::{Error, LogEntry, Request};

    struct VecInput(Vec<Request>);

    impl RequestStream for VecInput {
        type Requests = Pin<Box<dyn Stream<Item = Request> + Send>>;

        fn stream(&mut self) -> Self::Requests {
            Box::pin(stream::iter(std::mem::take(&mut self.0)))
        }
    }

    #[derive(Default, Clone, Debug)]
    struct Recorder {
        snapshots: Arc<Mutex<Vec<Snapshot>>>,
        rejections: Arc<Mutex<Vec<String>>>,
    }

    impl Presenter for Recorder {
        fn render(&self, _user: &str, snapshot: Snapshot, _entries: &[LogEntry]) {
            self.snapshots.lock().unwrap().push(snapshot);
        }
    }

    impl DeadLetterQueue for Recorder {
        fn report(&self, user: &str, error: &Error) {
            self.rejections
                .lock()
                .unwrap()
                .push(format!("{}: {}", user, error));
        }
    }

    fn deposit(income: &str) -> Request {
        Request::Deposit {
            income: income.to_owned(),
        }
    }

    fn expense(amount: &str, category: &str, date: &str) -> Request {
        Request::Expense {
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: Some(date.to_owned()),
        }
    }

    #[tokio::test]
    async fn applies_requests_in_arrival_order() {
        let recorder = Recorder::default();
        let input = VecInput(vec![
            deposit("1000"),
            expense("300", "Food", "2024-01-01"),
            expense("600", "Rent", "2024-01-02"),
        ]);
        let session = Session::new(
            Account::new("alice"),
            input,
            recorder.clone(),
            recorder.clone(),
        );

        let account = session.run().await;

        let snapshot = account.snapshot();
        assert_eq!(snapshot.balance, Decimal::ZERO);
        assert_eq!(snapshot.savings, Decimal::from(100));
        assert_eq!(snapshot.debt, Decimal::ZERO);

        let snapshots = recorder.snapshots.lock().unwrap();
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[0].balance, Decimal::from(800));
        assert_eq!(snapshots[2], snapshot);
    }

    #[tokio::test]
    async fn rejected_requests_leave_state_unchanged_and_session_alive() {
        let recorder = Recorder::default();
        let input = VecInput(vec![
            deposit("1000"),
            expense("-5", "X", "2024-01-01"),
            expense("5", "X", "not-a-date"),
            expense("100", "Food", "2024-01-03"),
        ]);
        let session = Session::new(
            Account::new("alice"),
            input,
            recorder.clone(),
            recorder.clone(),
        );

        let account = session.run().await;

        let snapshot = account.snapshot();
        assert_eq!(snapshot.balance, Decimal::from(700));
        assert_eq!(snapshot.savings, Decimal::from(200));
        assert_eq!(snapshot.debt, Decimal::ZERO);

        let rejections = recorder.rejections.lock().unwrap();
        assert_eq!(rejections.len(), 2);
        assert!(rejections[0].contains("positive number"));
        assert!(rejections[1].contains("calendar date"));
        // Only the valid requests produced a render.
        assert_eq!(recorder.snapshots.lock().unwrap().len(), 2);
    }
}
