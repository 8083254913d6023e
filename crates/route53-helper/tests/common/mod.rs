//! Test doubles shared by the contract tests
//!
//! The mock records every call it receives so tests can assert on exactly
//! what would have been sent to Route 53.

#![allow(dead_code)]

use aws_sdk_route53::error::SdkError;
use route53_helper::error::{Error, Result};
use route53_helper::{HostedZone, HostedZoneApi, RecordChange};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// A recorded `submit_change` call
#[derive(Debug, Clone)]
pub struct SubmittedChange {
    pub zone_id: String,
    pub change: RecordChange,
}

/// An in-memory HostedZoneApi
///
/// Clones share their counters and recorded changes, so a test can keep a
/// handle after moving the mock into an updater.
#[derive(Clone, Default)]
pub struct MockHostedZoneApi {
    zones: Vec<HostedZone>,
    fail_list: bool,
    fail_change: bool,
    list_call_count: Arc<AtomicUsize>,
    submitted: Arc<Mutex<Vec<SubmittedChange>>>,
}

impl MockHostedZoneApi {
    /// Create a mock that lists the given zones
    pub fn with_zones(zones: Vec<HostedZone>) -> Self {
        Self {
            zones,
            ..Self::default()
        }
    }

    /// Make `list_zones` fail with a provider error
    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    /// Make `submit_change` fail with a provider error
    pub fn failing_change(mut self) -> Self {
        self.fail_change = true;
        self
    }

    /// Number of times list_zones() was called
    pub fn list_call_count(&self) -> usize {
        self.list_call_count.load(Ordering::SeqCst)
    }

    /// Changes passed to submit_change(), in call order
    pub fn submitted(&self) -> Vec<SubmittedChange> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl HostedZoneApi for MockHostedZoneApi {
    async fn list_zones(&self) -> Result<Vec<HostedZone>> {
        self.list_call_count.fetch_add(1, Ordering::SeqCst);

        if self.fail_list {
            return Err(Error::ListHostedZones(SdkError::construction_failure(
                "mock list failure",
            )));
        }

        Ok(self.zones.clone())
    }

    async fn submit_change(&self, zone_id: &str, change: &RecordChange) -> Result<()> {
        self.submitted.lock().unwrap().push(SubmittedChange {
            zone_id: zone_id.to_string(),
            change: change.clone(),
        });

        if self.fail_change {
            return Err(Error::ChangeResourceRecordSets(
                SdkError::construction_failure("mock change failure"),
            ));
        }

        Ok(())
    }
}

/// The zones most tests run against
pub fn sample_zones() -> Vec<HostedZone> {
    vec![
        HostedZone::new("/hostedzone/Z0001", "example.org."),
        HostedZone::new("/hostedzone/Z0002", "example.com."),
        HostedZone::new("/hostedzone/Z0003", "sub.example.com."),
    ]
}
