pub mod announce;
pub mod logging;
pub mod person;

pub use announce::{announcement, fetch_and_announce, fetch_person, DEFAULT_PERSON_URL};
pub use person::PersonRecord;
