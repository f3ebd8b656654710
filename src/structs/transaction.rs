use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/* A Transaction is one ledger entry of the personal-finance app: either money coming in
(income) or going out (expense). Investment purchases are plain expense entries whose
category is the literal "Investasi"; the instrument bought is encoded in the free-text
description (see functions::aggregate for the extraction rules).

Amounts are in the smallest IDR unit. IDR has no decimal subdivision in the app, so u64 is
enough and we never round.

Dates are calendar dates in local wall-clock terms. There is no time component and no
timezone: a purchase made "on the 3rd" stays on the 3rd.
*/

pub const INVESTMENT_CATEGORY: &str = "Investasi";

pub type TransactionId = String;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId, // Unique within a user ledger, assigned by whoever created the entry
    pub kind: TransactionKind,
    pub amount: u64,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    /* For entries created locally (the cloud store hands us its own ids) */
    pub fn new(
        kind: TransactionKind,
        amount: u64,
        category: &str,
        description: &str,
        date: NaiveDate,
    ) -> Self {
        return Transaction {
            id: Uuid::new_v4().to_string(),
            kind,
            amount,
            category: category.to_string(),
            description: description.to_string(),
            date,
        };
    }

    pub fn is_investment(&self) -> bool {
        return self.category == INVESTMENT_CATEGORY;
    }
}
