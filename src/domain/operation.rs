use chrono::{Local, NaiveDate};

use crate::domain::error::Error;
use crate::domain::money::Money;

/// Category label applied when the caller left it blank.
pub const DEFAULT_CATEGORY: &str = "Miscellaneous";

/// A request exactly as a presentation layer collected it. Amounts and
/// dates are raw text and not to be trusted; an absent date means "use the
/// current date".
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Deposit {
        income: String,
    },
    Expense {
        amount: String,
        category: String,
        date: Option<String>,
    },
    Reset,
    Snapshot,
}

/// A validated request, ready to apply to an account.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    Deposit {
        income: Money,
    },
    Expense {
        amount: Money,
        category: String,
        date: NaiveDate,
    },
    Reset,
    Snapshot,
}

impl TryFrom<Request> for Operation {
    type Error = Error;

    fn try_from(request: Request) -> Result<Self, Self::Error> {
        match request {
            Request::Deposit { income } => {
                let income = Money::parse(&income).ok_or(Error::InvalidIncome(income))?;
                Ok(Operation::Deposit { income })
            }
            Request::Expense {
                amount,
                category,
                date,
            } => {
                let amount = Money::parse(&amount).ok_or(Error::InvalidAmount(amount))?;
                let date = match date {
                    Some(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                        .map_err(|_| Error::InvalidDate(text))?,
                    None => Local::now().date_naive(),
                };
                let category = if category.trim().is_empty() {
                    DEFAULT_CATEGORY.to_owned()
                } else {
                    category
                };
                Ok(Operation::Expense {
                    amount,
                    category,
                    date,
                })
            }
            Request::Reset => Ok(Operation::Reset),
            Request::Snapshot => Ok(Operation::Snapshot),
        }
    }
}

/// A request addressed to a named session, as read from a script row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptRequest {
    pub user: String,
    pub request: Request,
}

#[cfg(test)]
mod tests {
    use chrono::Local;

    use super::{DEFAULT_CATEGORY, Operation, Request};
    use crate::domain::error::Error;

    fn expense(amount: &str, category: &str, date: Option<&str>) -> Request {
        Request::Expense {
            amount: amount.to_owned(),
            category: category.to_owned(),
            date: date.map(str::to_owned),
        }
    }

    #[test]
    fn blank_category_defaults() {
        let op = Operation::try_from(expense("5", "   ", Some("2024-01-01"))).unwrap();
        match op {
            Operation::Expense { category, .. } => assert_eq!(category, DEFAULT_CATEGORY),
            other => panic!("expected expense, got {:?}", other),
        }
    }

    #[test]
    fn named_category_is_kept() {
        let op = Operation::try_from(expense("5", "Food", Some("2024-01-01"))).unwrap();
        match op {
            Operation::Expense { category, .. } => assert_eq!(category, "Food"),
            other => panic!("expected expense, got {:?}", other),
        }
    }

    #[test]
    fn missing_date_uses_today() {
        let op = Operation::try_from(expense("5", "Food", None)).unwrap();
        match op {
            Operation::Expense { date, .. } => assert_eq!(date, Local::now().date_naive()),
            other => panic!("expected expense, got {:?}", other),
        }
    }

    #[test]
    fn rejections_are_distinguishable() {
        assert!(matches!(
            Operation::try_from(Request::Deposit {
                income: "abc".to_owned()
            }),
            Err(Error::InvalidIncome(_))
        ));
        assert!(matches!(
            Operation::try_from(expense("-5", "X", Some("2024-01-01"))),
            Err(Error::InvalidAmount(_))
        ));
        assert!(matches!(
            Operation::try_from(expense("5", "X", Some("not-a-date"))),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            Operation::try_from(expense("5", "X", Some("2024-02-30"))),
            Err(Error::InvalidDate(_))
        ));
    }
}
