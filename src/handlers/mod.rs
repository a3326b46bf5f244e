pub mod medicines;

use uuid::Uuid;

use crate::error::ApiError;

/// Single identifier validator applied uniformly to every id-bearing
/// operation. Ids are store-native UUIDs.
pub fn parse_id(field: &str, value: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(value)
        .map_err(|_| ApiError::invalid_identifier(format!("Invalid {} format", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_id_parses() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id("userId", &id.to_string()).unwrap(), id);
    }

    #[test]
    fn test_malformed_id_is_a_client_error() {
        let err = parse_id("userId", "not-a-uuid").unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_IDENTIFIER");
        assert_eq!(err.message(), "Invalid userId format");
    }

    #[test]
    fn test_empty_id_is_a_client_error() {
        assert!(parse_id("medicineId", "").is_err());
    }
}
