// # Hosted Zone API Trait
//
// The Route 53 operations the helper depends on, behind a trait so zone
// lookup and record updates can run against in-memory doubles.
//
// ## Implementations
//
// - `aws_sdk_route53::Client` (below)
// - Test doubles in `tests/common`
//
// ## Usage
//
// ```rust,ignore
// use route53_helper::{find_zone, get_client};
//
// let client = get_client().await?;
// let zone = find_zone(&client, "example.com.").await?;
// ```

use async_trait::async_trait;

use crate::error::Result;
use crate::record::RecordChange;

/// A hosted zone as returned by the provider.
///
/// Only the identifier and the name are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    /// Provider identifier (e.g. `/hostedzone/Z1D633PJN98FT9`)
    pub id: String,
    /// Fully qualified zone name, including the trailing dot
    pub name: String,
}

impl HostedZone {
    /// Create a hosted zone
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl From<&aws_sdk_route53::types::HostedZone> for HostedZone {
    fn from(zone: &aws_sdk_route53::types::HostedZone) -> Self {
        Self::new(zone.id(), zone.name())
    }
}

/// Route 53 operations used by the helper
///
/// # Thread Safety
///
/// Implementations must be usable across async tasks.
///
/// Implementations perform exactly one provider call per method and do
/// not retry. Errors are returned as the provider reported them.
#[async_trait]
pub trait HostedZoneApi: Send + Sync {
    /// List hosted zones (first page only)
    async fn list_zones(&self) -> Result<Vec<HostedZone>>;

    /// Submit a single-change batch to the zone with the given id
    async fn submit_change(&self, zone_id: &str, change: &RecordChange) -> Result<()>;
}

#[async_trait]
impl HostedZoneApi for aws_sdk_route53::Client {
    async fn list_zones(&self) -> Result<Vec<HostedZone>> {
        let output = self.list_hosted_zones().send().await?;

        if output.is_truncated() {
            tracing::warn!(
                "Hosted zone listing is truncated, only the first {} zone(s) are searched",
                output.hosted_zones().len()
            );
        }

        Ok(output.hosted_zones().iter().map(HostedZone::from).collect())
    }

    async fn submit_change(&self, zone_id: &str, change: &RecordChange) -> Result<()> {
        let batch = change.to_change_batch()?;

        self.change_resource_record_sets()
            .hosted_zone_id(zone_id)
            .change_batch(batch)
            .send()
            .await?;

        Ok(())
    }
}
