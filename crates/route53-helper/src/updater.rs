//! Zone lookup and record upsert in one call
//!
//! [`Route53Updater`] owns a [`HostedZoneApi`] and runs [`find_zone`]
//! followed by [`update_record`].
//!
//! # Dry-Run Mode
//!
//! When dry-run is enabled the updater:
//! - performs the zone lookup
//! - logs the change it would submit
//! - does **not** submit the change

use std::net::Ipv4Addr;

use crate::error::Result;
use crate::record::{RecordChange, update_record};
use crate::traits::HostedZoneApi;
use crate::zone::find_zone;

/// Environment variable selecting the update mode
pub const MODE_ENV_VAR: &str = "ROUTE53_MODE";

/// Result of a [`Route53Updater::update`] call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The change batch was accepted by the provider
    Submitted {
        /// Zone the change was submitted to
        zone_id: String,
    },
    /// Dry-run: the change was logged, not submitted
    DryRun {
        /// Zone the change would have been submitted to
        zone_id: String,
    },
}

/// Looks up a zone and upserts an A record in it
pub struct Route53Updater {
    api: Box<dyn HostedZoneApi>,
    dry_run: bool,
}

impl std::fmt::Debug for Route53Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route53Updater")
            .field("dry_run", &self.dry_run)
            .finish_non_exhaustive()
    }
}

impl Route53Updater {
    /// Create an updater in live mode
    pub fn new(api: impl HostedZoneApi + 'static) -> Self {
        Self {
            api: Box::new(api),
            dry_run: false,
        }
    }

    /// Create an updater in dry-run mode
    pub fn dry_run(api: impl HostedZoneApi + 'static) -> Self {
        Self {
            api: Box::new(api),
            dry_run: true,
        }
    }

    /// Create an updater whose mode comes from `ROUTE53_MODE`
    ///
    /// `dry-run` (case-insensitive) selects dry-run mode; anything else,
    /// including an unset variable, selects live mode.
    pub fn from_env_mode(api: impl HostedZoneApi + 'static) -> Self {
        let dry_run = std::env::var(MODE_ENV_VAR)
            .unwrap_or_default()
            .eq_ignore_ascii_case("dry-run");

        if dry_run {
            tracing::warn!("Route 53 updater running in DRY-RUN mode - no changes will be made");
        }

        Self {
            api: Box::new(api),
            dry_run,
        }
    }

    /// Whether changes are logged instead of submitted
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Upsert `domain A ip` in the zone named `zone_name`
    pub async fn update(&self, zone_name: &str, domain: &str, ip: Ipv4Addr) -> Result<UpdateOutcome> {
        tracing::info!(
            "Updating Route 53 record: {} -> {} [mode: {}]",
            domain,
            ip,
            if self.dry_run { "DRY-RUN" } else { "LIVE" }
        );

        let zone = find_zone(self.api.as_ref(), zone_name).await?;

        if self.dry_run {
            let change = RecordChange::upsert_a(domain, ip);
            tracing::info!(
                "[DRY-RUN] Would submit to zone {}: {:?} {} {:?} {} (ttl {})",
                zone.id,
                change.action(),
                change.name(),
                change.record_type(),
                change.value(),
                change.ttl()
            );
            return Ok(UpdateOutcome::DryRun { zone_id: zone.id });
        }

        update_record(self.api.as_ref(), &zone, domain, ip).await?;
        Ok(UpdateOutcome::Submitted { zone_id: zone.id })
    }
}
