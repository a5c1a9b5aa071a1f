pub mod response;
pub mod status_code;

pub use response::{DefaultBody, DetailedBody, NameMessageBody};
pub use status_code::{ErrorStatus, StatusCode};
