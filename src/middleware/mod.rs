pub mod response;

pub use response::{ApiResult, Envelope, Status};
