//! A record upserts
//!
//! [`RecordChange`] is the only change the helper knows how to make: UPSERT
//! of a single A record with a fixed TTL. Its fields are private so a change
//! can only be built through [`RecordChange::upsert_a`].

use std::net::Ipv4Addr;

use aws_sdk_route53::error::BuildError;
use aws_sdk_route53::types::{
    Change, ChangeAction, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};

use crate::error::Result;
use crate::traits::{HostedZone, HostedZoneApi};

/// TTL applied to every record written by the helper, in seconds
pub const RECORD_TTL: i64 = 300;

/// Comment attached to every change batch
pub const CHANGE_COMMENT: &str = "Automated update from route53 helper";

/// A single record change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordChange {
    action: ChangeAction,
    record_type: RrType,
    name: String,
    value: Ipv4Addr,
    ttl: i64,
}

impl RecordChange {
    /// UPSERT an A record pointing `name` at `ip`
    pub fn upsert_a(name: impl Into<String>, ip: Ipv4Addr) -> Self {
        Self {
            action: ChangeAction::Upsert,
            record_type: RrType::A,
            name: name.into(),
            value: ip,
            ttl: RECORD_TTL,
        }
    }

    /// Change action, always UPSERT
    pub fn action(&self) -> &ChangeAction {
        &self.action
    }

    /// Record type, always A
    pub fn record_type(&self) -> &RrType {
        &self.record_type
    }

    /// Record name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Target IPv4 address
    pub fn value(&self) -> Ipv4Addr {
        self.value
    }

    /// Record TTL in seconds, always [`RECORD_TTL`]
    pub fn ttl(&self) -> i64 {
        self.ttl
    }

    /// Build the SDK change batch for this change
    pub fn to_change_batch(&self) -> std::result::Result<ChangeBatch, BuildError> {
        let record = ResourceRecord::builder()
            .value(self.value.to_string())
            .build()?;

        let record_set = ResourceRecordSet::builder()
            .name(&self.name)
            .r#type(self.record_type.clone())
            .ttl(self.ttl)
            .resource_records(record)
            .build()?;

        let change = Change::builder()
            .action(self.action.clone())
            .resource_record_set(record_set)
            .build()?;

        ChangeBatch::builder()
            .changes(change)
            .comment(CHANGE_COMMENT)
            .build()
    }
}

/// Upsert an A record for `domain` in `zone`
///
/// Submits one change batch and returns the provider's error unchanged on
/// failure.
pub async fn update_record<A>(api: &A, zone: &HostedZone, domain: &str, ip: Ipv4Addr) -> Result<()>
where
    A: HostedZoneApi + ?Sized,
{
    let change = RecordChange::upsert_a(domain, ip);

    tracing::debug!(
        "Submitting UPSERT {} A {} (ttl {}) to zone {}",
        domain,
        ip,
        RECORD_TTL,
        zone.id
    );

    api.submit_change(&zone.id, &change).await?;

    tracing::info!("DNS record upserted: {} -> {}", domain, ip);
    Ok(())
}
