pub mod dates;

pub use dates::{date_to_epoch_days, parse_date};
