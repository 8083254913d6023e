//! Hosted zone lookup

use crate::error::{Error, Result};
use crate::traits::{HostedZone, HostedZoneApi};

/// Find the hosted zone whose name is exactly `zone_name`
///
/// Scans the provider's zone listing in order and returns the first zone
/// with an equal name. Names are compared as-is: Route 53 reports zone names
/// fully qualified, so `"example.com."` matches and `"example.com"` does not.
///
/// # Errors
///
/// - [`Error::ZoneNotFound`] when no zone has that name
/// - [`Error::ListHostedZones`] when the listing call fails
pub async fn find_zone<A>(api: &A, zone_name: &str) -> Result<HostedZone>
where
    A: HostedZoneApi + ?Sized,
{
    tracing::debug!("Looking up hosted zone: {}", zone_name);

    let zones = api.list_zones().await?;

    let zone = zones
        .into_iter()
        .find(|zone| zone.name == zone_name)
        .ok_or_else(|| Error::zone_not_found(zone_name))?;

    tracing::debug!("Found hosted zone ID: {}", zone.id);
    Ok(zone)
}
