use crate::domain::{DeadLetterQueue, Error};

/// Rejection surface: one stderr line per refused request, tagged with
/// the session it belonged to.
#[derive(Default, Debug, Clone)]
pub struct StdErrDlq {}

impl DeadLetterQueue for StdErrDlq {
    fn report(&self, user: &str, error: &Error) {
        eprintln!("{}: {}", user, error);
    }
}
