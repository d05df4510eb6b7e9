#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::schemas::{Bill, Money, Person};

/// One share paid back to whoever covered the bill.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Exchange {
    pub payer: Person,
    pub receiver: Person,
    pub amount: Money,
}

impl Bill {
    // The payer's own share stays with them, so only the others get an exchange
    pub fn debts(&self) -> Result<Vec<Exchange>> {
        let share = self.split_evenly()?;

        Ok(self
            .get_people()
            .into_iter()
            .map(|payer| Exchange {
                payer,
                receiver: self.paid_by().to_string(),
                amount: share,
            })
            .collect())
    }
}
