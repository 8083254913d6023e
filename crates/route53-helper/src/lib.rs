// # route53-helper
//
// Helper library for pointing DNS "A" records in AWS Route 53 at an IPv4
// address.
//
// ## Overview
//
// - **Client construction**: [`get_client`] (default credential chain) and
//   [`get_client_with_credentials`] (static credentials)
// - **Zone lookup**: [`find_zone`], exact name match over the zone listing
// - **Record upsert**: [`update_record`], one UPSERT of an A record, TTL 300
// - **Updater**: [`Route53Updater`], lookup + upsert in one call, with dry-run
//
// Authentication, zone listing and record mutation are delegated to the AWS
// SDK. There is no retry, pagination or caching here; provider errors are
// returned unchanged.
//
// ## Example
//
// ```rust,ignore
// use route53_helper::{find_zone, get_client, update_record};
//
// let client = get_client().await?;
// let zone = find_zone(&client, "example.com.").await?;
// update_record(&client, &zone, "home.example.com", "203.0.113.7".parse()?).await?;
// ```

pub mod client;
pub mod config;
pub mod error;
pub mod record;
pub mod traits;
pub mod updater;
pub mod zone;

// Re-export core types for convenience
pub use client::{get_client, get_client_with_credentials, get_client_with_options};
pub use config::{ClientOptions, StaticCredentials};
pub use error::{Error, Result};
pub use record::{RecordChange, update_record};
pub use traits::{HostedZone, HostedZoneApi};
pub use updater::{Route53Updater, UpdateOutcome};
pub use zone::find_zone;
