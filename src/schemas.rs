use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type Person = String;

pub type People = Vec<Person>;

/// An integer amount in whatever smallest unit the caller picked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize), serde(transparent))]
pub struct Money(i64);

impl Money {
    pub fn zero() -> Self {
        Self(0)
    }

    pub fn from_i64(value: i64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> i64 {
        self.0
    }

    pub fn is_positive(self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A bill that one person already paid for the whole group.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Bill {
    // total including tax, payable once
    amount: Money,
    paid_by: Person,
    // everyone in the group, the payer included
    people: People,
}

impl Bill {
    pub fn new(amount: i64, paid_by: impl Into<Person>, people: People) -> Self {
        Self {
            amount: Money::from_i64(amount),
            paid_by: paid_by.into(),
            people,
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn paid_by(&self) -> &str {
        &self.paid_by
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }
}
