//! gRPC status mapping.

use tonic::{Code, Status};

use tradfri_domain::error::{TradfriError, ValidationError};

/// Wraps a gateway failure so it can be turned into a [`Status`].
#[derive(Debug)]
pub struct GrpcError(TradfriError);

impl From<TradfriError> for GrpcError {
    fn from(err: TradfriError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for GrpcError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<GrpcError> for Status {
    fn from(GrpcError(err): GrpcError) -> Self {
        let code = if err.is_validation() {
            Code::InvalidArgument
        } else if err.is_not_found() {
            Code::NotFound
        } else {
            tracing::error!(error = %err, "gateway error");
            Code::Internal
        };
        Status::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use tradfri_domain::error::RejectedError;
    use tradfri_domain::message::Code as CoapCode;

    use super::*;

    #[test]
    fn should_map_validation_to_invalid_argument() {
        let status = Status::from(GrpcError::from(ValidationError::InvalidPower(5)));
        assert_eq!(status.code(), Code::InvalidArgument);
    }

    #[test]
    fn should_map_missing_resource_to_not_found() {
        let err = TradfriError::from(RejectedError {
            path: "/15001/65599".to_string(),
            code: CoapCode::NOT_FOUND,
        });
        let status = Status::from(GrpcError::from(err));
        assert_eq!(status.code(), Code::NotFound);
        assert!(status.message().contains("/15001/65599"));
    }

    #[test]
    fn should_map_other_rejections_to_internal() {
        let err = TradfriError::from(RejectedError {
            path: "/15004".to_string(),
            code: CoapCode::UNAUTHORIZED,
        });
        let status = Status::from(GrpcError::from(err));
        assert_eq!(status.code(), Code::Internal);
    }
}
