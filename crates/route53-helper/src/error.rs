//! Error types for the Route 53 helper
//!
//! Provider errors are kept as the error source exactly as the SDK returned
//! them. The only error raised locally is [`Error::ZoneNotFound`].

use aws_sdk_route53::error::{BuildError, DisplayErrorContext, SdkError};
use aws_sdk_route53::operation::change_resource_record_sets::ChangeResourceRecordSetsError;
use aws_sdk_route53::operation::list_hosted_zones::ListHostedZonesError;
use thiserror::Error;

/// Result type alias for helper operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the helper
#[derive(Error, Debug)]
pub enum Error {
    /// No hosted zone name equals the requested name
    #[error("unable to find zone: {0}")]
    ZoneNotFound(String),

    /// ListHostedZones failed
    #[error("failed to list hosted zones: {}", DisplayErrorContext(.0))]
    ListHostedZones(#[source] SdkError<ListHostedZonesError>),

    /// ChangeResourceRecordSets failed
    #[error("failed to change resource record sets: {}", DisplayErrorContext(.0))]
    ChangeResourceRecordSets(#[source] SdkError<ChangeResourceRecordSetsError>),

    /// A request builder rejected a missing required field
    #[error("failed to build request: {0}")]
    Build(#[from] BuildError),

    /// Credential resolution failed
    #[error("credential error: {0}")]
    Credentials(String),
}

impl Error {
    /// Create a "zone not found" error
    pub fn zone_not_found(name: impl Into<String>) -> Self {
        Self::ZoneNotFound(name.into())
    }

    /// Create a credential error
    pub fn credentials(msg: impl Into<String>) -> Self {
        Self::Credentials(msg.into())
    }

    /// Whether this error came back from the Route 53 API
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            Self::ListHostedZones(_) | Self::ChangeResourceRecordSets(_)
        )
    }
}

impl From<SdkError<ListHostedZonesError>> for Error {
    fn from(err: SdkError<ListHostedZonesError>) -> Self {
        Self::ListHostedZones(err)
    }
}

impl From<SdkError<ChangeResourceRecordSetsError>> for Error {
    fn from(err: SdkError<ChangeResourceRecordSetsError>) -> Self {
        Self::ChangeResourceRecordSets(err)
    }
}
