//! Configuration types for client construction
//!
//! Both types deserialize with serde so applications can embed them in their
//! own configuration files.

use serde::{Deserialize, Serialize};

/// Region used when neither the options nor the default chain supply one.
///
/// Route 53 is a global service homed in us-east-1.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Options applied on top of the default AWS configuration chain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientOptions {
    /// Region override
    #[serde(default)]
    pub region: Option<String>,

    /// Endpoint URL override (e.g. a local Route 53 emulator)
    #[serde(default)]
    pub endpoint_url: Option<String>,

    /// Named profile from the shared config/credentials files
    #[serde(default)]
    pub profile_name: Option<String>,
}

impl ClientOptions {
    /// Create options with no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the endpoint URL
    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Set the shared-config profile
    pub fn with_profile_name(mut self, profile: impl Into<String>) -> Self {
        self.profile_name = Some(profile.into());
        self
    }
}

/// Explicit static credentials
///
/// The `Debug` implementation does not expose the secret key or the
/// session token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticCredentials {
    /// AWS access key id
    pub access_key_id: String,

    /// AWS secret access key
    pub secret_access_key: String,

    /// Optional session token for temporary credentials
    #[serde(default)]
    pub session_token: Option<String>,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<REDACTED>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<REDACTED>"),
            )
            .finish()
    }
}

impl StaticCredentials {
    /// Create static credentials.
    ///
    /// An empty `session_token` is treated as absent.
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        let session_token = session_token.into();
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: (!session_token.is_empty()).then_some(session_token),
        }
    }

    /// Validate the credentials
    pub fn validate(&self) -> crate::Result<()> {
        if self.access_key_id.is_empty() {
            return Err(crate::Error::credentials("access key id cannot be empty"));
        }
        if self.secret_access_key.is_empty() {
            return Err(crate::Error::credentials(
                "secret access key cannot be empty",
            ));
        }
        Ok(())
    }
}
