//! AWS error response formatting
//!
//! JSON-protocol AWS services (awsJson and restJson) report errors as
//! `{"__type": "ResourceNotFoundException", "message": "..."}`, optionally with
//! the error type repeated in the `x-amzn-ErrorType` header.

use serde_json::{json, Value};

/// Header carrying the error type for restJson services
pub const ERROR_TYPE_HEADER: &str = "x-amzn-ErrorType";

/// AWS error body
pub fn aws_error_body(error_type: &str, message: &str) -> Value {
    json!({
        "__type": error_type,
        "message": message
    })
}

/// AWS error type constants used by the example fixtures
pub mod aws_error_types {
    pub const RESOURCE_NOT_FOUND: &str = "ResourceNotFoundException";
    pub const NOT_FOUND: &str = "NotFoundException";
    pub const BAD_REQUEST: &str = "BadRequestException";
    pub const ALREADY_EXISTS: &str = "AlreadyExistsException";
    pub const INVALID_REQUEST: &str = "InvalidRequestException";
    pub const INVALID_ARN: &str = "InvalidArnException";
    pub const INVALID_TAG: &str = "InvalidTagException";
    pub const RESOURCE_ALREADY_EXISTS: &str = "ResourceAlreadyExistsException";
    pub const UNAUTHORIZED: &str = "UnauthorizedException";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aws_error_body_shape() {
        let body = aws_error_body(aws_error_types::RESOURCE_NOT_FOUND, "Could not find thing");
        assert_eq!(body["__type"], "ResourceNotFoundException");
        assert_eq!(body["message"], "Could not find thing");
        assert_eq!(body.as_object().map(serde_json::Map::len), Some(2));
    }
}
