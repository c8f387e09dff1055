mod common;

use serde_json::{json, Value};

use azclassic::cloudprovider::{CloudEip, EipMode};
use azclassic::models::ClassicInstanceRecord;
use azclassic::services::resolve_external_address;

use common::{eip_json, instance_json, reserved_ip_id, FakeApi, VM_ID};

const OTHER_VM: &str =
    "/subscriptions/sub-1/resourceGroups/rg-1/providers/Microsoft.ClassicCompute/virtualMachines/vm-2";

fn record_with_reserved(status: Option<&str>, names: &[&str]) -> ClassicInstanceRecord {
    let mut v: Value = instance_json(status);
    let reserved: Vec<Value> = names
        .iter()
        .map(|n| json!({"id": reserved_ip_id(n), "name": n}))
        .collect();
    v["properties"]["networkProfile"]["reservedIps"] = json!(reserved);
    serde_json::from_value(v).unwrap()
}

#[tokio::test]
async fn test_reserved_ip_attached_to_this_instance() {
    let api = FakeApi::new();
    api.respond(&reserved_ip_id("rip-1"), eip_json(&reserved_ip_id("rip-1"), "40.0.0.1", Some(VM_ID)));
    let record = record_with_reserved(Some("ReadyRole"), &["rip-1"]);

    let eip = resolve_external_address(&api, &record).await.unwrap();
    assert_eq!(eip.ip_addr(), "40.0.0.1");
    assert_eq!(eip.id(), reserved_ip_id("rip-1"));
    assert_eq!(eip.mode(), EipMode::ElasticIp);
    assert_eq!(eip.associated_instance_id(), Some(VM_ID));
    assert_eq!(eip.status(), "ready");
}

#[tokio::test]
async fn test_unattached_reservation_is_accepted() {
    let api = FakeApi::new();
    api.respond(&reserved_ip_id("rip-1"), eip_json(&reserved_ip_id("rip-1"), "40.0.0.1", None));
    let record = record_with_reserved(None, &["rip-1"]);

    let eip = resolve_external_address(&api, &record).await.unwrap();
    assert_eq!(eip.ip_addr(), "40.0.0.1");
}

#[tokio::test]
async fn test_empty_attachment_target_is_accepted() {
    let api = FakeApi::new();
    let mut empty_target = eip_json(&reserved_ip_id("rip-1"), "40.0.0.1", None);
    empty_target["properties"]["attachedTo"] = json!({});
    api.respond(&reserved_ip_id("rip-1"), empty_target);
    let mut null_fields = eip_json(&reserved_ip_id("rip-2"), "40.0.0.2", None);
    null_fields["properties"]["attachedTo"] = json!({"id": null, "name": null});
    null_fields["properties"]["status"] = json!(null);
    api.respond(&reserved_ip_id("rip-2"), null_fields);

    let record = record_with_reserved(Some("ReadyRole"), &["rip-1"]);
    let eip = resolve_external_address(&api, &record).await.unwrap();
    assert_eq!(eip.ip_addr(), "40.0.0.1");
    assert_eq!(eip.mode(), EipMode::ElasticIp);

    let record = record_with_reserved(Some("ReadyRole"), &["rip-2"]);
    let eip = resolve_external_address(&api, &record).await.unwrap();
    assert_eq!(eip.ip_addr(), "40.0.0.2");
    assert_eq!(eip.status(), "ready");
}

#[tokio::test]
async fn test_reassigned_reservation_is_skipped() {
    let api = FakeApi::new();
    api.respond(&reserved_ip_id("rip-1"), eip_json(&reserved_ip_id("rip-1"), "40.0.0.1", Some(OTHER_VM)));
    api.respond(&reserved_ip_id("rip-2"), eip_json(&reserved_ip_id("rip-2"), "40.0.0.2", Some(VM_ID)));
    let record = record_with_reserved(Some("ReadyRole"), &["rip-1", "rip-2"]);

    let eip = resolve_external_address(&api, &record).await.unwrap();
    assert_eq!(eip.ip_addr(), "40.0.0.2");
    assert_eq!(api.count("GET "), 2);
}

#[tokio::test]
async fn test_lookup_failure_moves_to_next_candidate() {
    let api = FakeApi::new();
    api.fail(&reserved_ip_id("rip-1"));
    api.respond(&reserved_ip_id("rip-2"), eip_json(&reserved_ip_id("rip-2"), "40.0.0.2", None));
    let record = record_with_reserved(None, &["rip-1", "rip-2"]);

    let eip = resolve_external_address(&api, &record).await.unwrap();
    assert_eq!(eip.ip_addr(), "40.0.0.2");
}

#[tokio::test]
async fn test_falls_back_to_instance_public_ip() {
    let api = FakeApi::new();
    api.respond(&reserved_ip_id("rip-1"), eip_json(&reserved_ip_id("rip-1"), "40.0.0.1", Some(OTHER_VM)));
    let record = record_with_reserved(Some("ReadyRole"), &["rip-1"]);

    let eip = resolve_external_address(&api, &record).await.unwrap();
    assert_eq!(eip.ip_addr(), "52.0.0.9");
    assert_eq!(eip.id(), VM_ID);
    assert_eq!(eip.mode(), EipMode::InstancePublicIp);
}

#[tokio::test]
async fn test_public_ip_without_reservations_needs_no_calls() {
    let api = FakeApi::new();
    let record = record_with_reserved(Some("ReadyRole"), &[]);

    let eip = resolve_external_address(&api, &record).await.unwrap();
    assert_eq!(eip.ip_addr(), "52.0.0.9");
    assert!(api.calls().is_empty());
}

#[tokio::test]
async fn test_no_external_address() {
    let api = FakeApi::new();
    api.fail(&reserved_ip_id("rip-1"));
    let record = record_with_reserved(None, &["rip-1"]);
    assert!(resolve_external_address(&api, &record).await.is_none());

    let mut view_without_public = instance_json(Some("ReadyRole"));
    view_without_public["properties"]["instanceView"]["publicIpAddresses"] = json!([]);
    let record: ClassicInstanceRecord = serde_json::from_value(view_without_public).unwrap();
    assert!(resolve_external_address(&api, &record).await.is_none());
}
