pub mod dates;

pub use dates::{birthday_in_year, days_until_next, is_leap_year};
