//! SDK client contract
//!
//! Runs the `HostedZoneApi` implementation for `aws_sdk_route53::Client`
//! against mocked operation responses. Request rules only match the exact
//! input the helper is expected to send, so a wrong request fails the call.

use aws_sdk_route53::operation::change_resource_record_sets::{
    ChangeResourceRecordSetsError, ChangeResourceRecordSetsInput, ChangeResourceRecordSetsOutput,
};
use aws_sdk_route53::operation::list_hosted_zones::{ListHostedZonesError, ListHostedZonesOutput};
use aws_sdk_route53::primitives::DateTime;
use aws_sdk_route53::types::error::{InvalidInput, NoSuchHostedZone};
use aws_sdk_route53::types::{ChangeAction, ChangeInfo, ChangeStatus, RrType};
use aws_sdk_route53::{Client, types};
use aws_smithy_mocks::{RuleMode, mock, mock_client};
use route53_helper::record::CHANGE_COMMENT;
use route53_helper::{
    Error, HostedZone, HostedZoneApi, RecordChange, Route53Updater, UpdateOutcome, find_zone,
};
use std::net::Ipv4Addr;

const IP: Ipv4Addr = Ipv4Addr::new(203, 0, 113, 7);

fn sdk_zone(id: &str, name: &str) -> types::HostedZone {
    types::HostedZone::builder()
        .id(id)
        .name(name)
        .caller_reference(format!("ref-{id}"))
        .build()
        .unwrap()
}

fn listing(zones: Vec<types::HostedZone>, truncated: bool) -> ListHostedZonesOutput {
    let mut builder = ListHostedZonesOutput::builder()
        .set_hosted_zones(Some(zones))
        .is_truncated(truncated)
        .max_items(100)
        .marker("");
    if truncated {
        builder = builder.next_marker("Z9999");
    }
    builder.build().unwrap()
}

fn change_accepted() -> ChangeResourceRecordSetsOutput {
    let info = ChangeInfo::builder()
        .id("/change/C0001")
        .status(ChangeStatus::Pending)
        .submitted_at(DateTime::from_secs(0))
        .build()
        .unwrap();
    ChangeResourceRecordSetsOutput::builder()
        .change_info(info)
        .build()
}

/// Whether `input` is the single A record UPSERT for home.example.com
fn is_expected_upsert(input: &ChangeResourceRecordSetsInput) -> bool {
    let zone_id = input
        .hosted_zone_id()
        .map(|id| id.trim_start_matches("/hostedzone/"));
    if zone_id != Some("Z0002") {
        return false;
    }

    let Some(batch) = input.change_batch() else {
        return false;
    };
    if batch.comment() != Some(CHANGE_COMMENT) || batch.changes().len() != 1 {
        return false;
    }

    let change = &batch.changes()[0];
    let Some(set) = change.resource_record_set() else {
        return false;
    };

    change.action() == &ChangeAction::Upsert
        && set.name() == "home.example.com"
        && set.r#type() == &RrType::A
        && set.ttl() == Some(300)
        && set.resource_records().len() == 1
        && set.resource_records()[0].value() == "203.0.113.7"
}

#[tokio::test]
async fn test_list_zones_converts_sdk_zones() {
    let rule = mock!(Client::list_hosted_zones).then_output(|| {
        listing(
            vec![
                sdk_zone("/hostedzone/Z0001", "example.org."),
                sdk_zone("/hostedzone/Z0002", "example.com."),
            ],
            false,
        )
    });
    let client = mock_client!(aws_sdk_route53, [&rule]);

    let zones = client.list_zones().await.unwrap();

    assert_eq!(
        zones,
        vec![
            HostedZone::new("/hostedzone/Z0001", "example.org."),
            HostedZone::new("/hostedzone/Z0002", "example.com."),
        ]
    );
    assert_eq!(rule.num_calls(), 1);
}

#[tokio::test]
async fn test_truncated_listing_returns_first_page_only() {
    let rule = mock!(Client::list_hosted_zones)
        .then_output(|| listing(vec![sdk_zone("/hostedzone/Z0001", "example.org.")], true));
    let client = mock_client!(aws_sdk_route53, [&rule]);

    let zones = client.list_zones().await.unwrap();

    assert_eq!(zones, vec![HostedZone::new("/hostedzone/Z0001", "example.org.")]);
    assert_eq!(rule.num_calls(), 1, "no follow-up request for the next page");
}

#[tokio::test]
async fn test_zone_on_later_page_is_not_found() {
    let rule = mock!(Client::list_hosted_zones)
        .then_output(|| listing(vec![sdk_zone("/hostedzone/Z0001", "example.org.")], true));
    let client = mock_client!(aws_sdk_route53, [&rule]);

    let result = find_zone(&client, "example.com.").await;

    assert!(matches!(result, Err(Error::ZoneNotFound(_))));
    assert_eq!(rule.num_calls(), 1);
}

#[tokio::test]
async fn test_list_error_maps_to_list_hosted_zones() {
    let rule = mock!(Client::list_hosted_zones).then_error(|| {
        ListHostedZonesError::InvalidInput(InvalidInput::builder().message("bad marker").build())
    });
    let client = mock_client!(aws_sdk_route53, [&rule]);

    let err = client.list_zones().await.unwrap_err();

    match err {
        Error::ListHostedZones(sdk) => assert!(matches!(
            sdk.as_service_error(),
            Some(ListHostedZonesError::InvalidInput(_))
        )),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_submit_change_sends_single_upsert() {
    let rule = mock!(Client::change_resource_record_sets)
        .match_requests(is_expected_upsert)
        .then_output(change_accepted);
    let client = mock_client!(aws_sdk_route53, [&rule]);

    let change = RecordChange::upsert_a("home.example.com", IP);
    tokio_test::assert_ok!(client.submit_change("/hostedzone/Z0002", &change).await);

    assert_eq!(rule.num_calls(), 1);
}

#[tokio::test]
async fn test_change_error_maps_to_change_resource_record_sets() {
    let rule = mock!(Client::change_resource_record_sets).then_error(|| {
        ChangeResourceRecordSetsError::NoSuchHostedZone(
            NoSuchHostedZone::builder().message("no zone").build(),
        )
    });
    let client = mock_client!(aws_sdk_route53, [&rule]);

    let change = RecordChange::upsert_a("home.example.com", IP);
    let err = tokio_test::assert_err!(client.submit_change("/hostedzone/Z0002", &change).await);

    match err {
        Error::ChangeResourceRecordSets(sdk) => assert!(matches!(
            sdk.as_service_error(),
            Some(ChangeResourceRecordSetsError::NoSuchHostedZone(_))
        )),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_updater_on_sdk_client_looks_up_then_upserts() {
    let list_rule = mock!(Client::list_hosted_zones).then_output(|| {
        listing(
            vec![
                sdk_zone("/hostedzone/Z0001", "example.org."),
                sdk_zone("/hostedzone/Z0002", "example.com."),
            ],
            false,
        )
    });
    let change_rule = mock!(Client::change_resource_record_sets)
        .match_requests(is_expected_upsert)
        .then_output(change_accepted);
    let client = mock_client!(aws_sdk_route53, RuleMode::MatchAny, [&list_rule, &change_rule]);

    let outcome = Route53Updater::new(client)
        .update("example.com.", "home.example.com", IP)
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateOutcome::Submitted {
            zone_id: "/hostedzone/Z0002".to_string()
        }
    );
    assert_eq!(list_rule.num_calls(), 1);
    assert_eq!(change_rule.num_calls(), 1);
}
