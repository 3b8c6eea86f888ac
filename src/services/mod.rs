pub mod admin_service;
pub mod notice_service;

pub use admin_service::AdminService;
pub use notice_service::NoticeService;

use crate::database::manager::DatabaseError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Record not found: {0}")]
    NotFound(i32),
    #[error("Old password does not match")]
    PasswordMismatch,
    #[error("Invalid id list: {0}")]
    InvalidIds(String),
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Split a comma-separated key list.
///
/// Whitespace around keys and empty segments are ignored. Any segment that is
/// not an integer rejects the whole list, so nothing is deleted on bad input.
pub fn parse_ids(csv: &str) -> Result<Vec<i32>, ServiceError> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map_err(|_| ServiceError::InvalidIds(format!("'{}' is not a valid id", s)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_list() {
        assert_eq!(parse_ids("1,2,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn tolerates_spaces_and_trailing_comma() {
        assert_eq!(parse_ids(" 4 , 5,,6, ").unwrap(), vec![4, 5, 6]);
        assert!(parse_ids("").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_numeric() {
        assert!(matches!(parse_ids("1,two,3"), Err(ServiceError::InvalidIds(_))));
        assert!(matches!(parse_ids("99999999999"), Err(ServiceError::InvalidIds(_))));
    }
}
