//! Core traits for the Route 53 helper
//!
//! - [`HostedZoneApi`]: the two Route 53 calls the helper makes

pub mod hosted_zone_api;

pub use hosted_zone_api::{HostedZone, HostedZoneApi};
