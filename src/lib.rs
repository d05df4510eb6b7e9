//! Even splitting of a shared bill between the people of a group.
//!
//! ```
//! use splitbill::{Bill, Money};
//!
//! let bill = Bill::new(100000, "A", vec!["A".into(), "B".into(), "C".into()]);
//! assert_eq!(bill.split_evenly(), Ok(Money::from_i64(33333)));
//! assert_eq!(bill.get_people(), vec!["B".to_string(), "C".to_string()]);
//! ```

mod balance;
mod error;
mod exchange;
mod schemas;

pub use error::{Result, SplitError};
pub use exchange::Exchange;
pub use schemas::{Bill, Money, People, Person};
