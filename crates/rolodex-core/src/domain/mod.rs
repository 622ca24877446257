pub mod birthday;
pub mod name;
pub mod phone;
pub mod record;

pub use birthday::Birthday;
pub use name::{normalize_name, Name};
pub use phone::{Phone, MAX_PHONE_DIGITS};
pub use record::Record;
