pub mod book;
pub mod domain;
pub mod error;
pub mod rules;
pub mod search;
pub mod time;

pub use book::{AddressBook, Storage};
pub use domain::*;
pub use error::{CoreError, ErrorKind};
pub use search::SearchQuery;
