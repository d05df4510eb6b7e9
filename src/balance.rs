use crate::error::{Result, SplitError};
use crate::schemas::{Bill, Money, People};

impl Bill {
    /// Splits the bill evenly by head count, the payer included, using
    /// truncating integer division. The remainder is left unassigned.
    pub fn split_evenly(&self) -> Result<Money> {
        let amount = self.amount();
        if !amount.is_positive() {
            return Err(SplitError::InvalidAmount(amount));
        }

        let head_count = self.people().len() as i64;
        let share = amount
            .amount()
            .checked_div(head_count)
            .ok_or(SplitError::EmptyGroup)?;
        log::trace!("splitting {amount} between {head_count} people: {share} each");

        Ok(Money::from_i64(share))
    }

    /// Everyone in the group except the payer, in the original order.
    pub fn get_people(&self) -> People {
        self.people()
            .iter()
            .filter(|person| person.as_str() != self.paid_by())
            .cloned()
            .collect()
    }
}
