//! End-to-end round-trip behavior across the model family.

use graph_models::prelude::*;
use proptest::prelude::*;
use serde_json::json;
use test_case::test_case;

#[test]
fn drive_item_scenario_decodes_and_reencodes() {
    let payload = br##"{"@odata.type":"#microsoft.graph.driveItem","name":"a.txt","size":42}"##;

    let item: DriveItem = serialization::from_json_slice(payload).unwrap();
    assert_eq!(item.name(), Some("a.txt"));
    assert_eq!(item.size(), Some(42));

    let encoded = serialization::to_json_value(&item).unwrap();
    assert_eq!(
        encoded,
        json!({
            "@odata.type": "#microsoft.graph.driveItem",
            "name": "a.txt",
            "size": 42
        })
    );
}

#[test]
fn unknown_keys_are_preserved_verbatim() {
    let value = json!({
        "@odata.type": "#microsoft.graph.driveItem",
        "name": "a.txt",
        "malware": {"description": "clean"},
        "@odata.context": "https://graph.example/$metadata#driveItem",
        "futureCollection": [1, {"deep": null}, "three"]
    });

    let item: DriveItem = serialization::from_json_value(&value).unwrap();
    assert_eq!(
        item.additional_data().get("malware"),
        Some(&json!({"description": "clean"}))
    );
    assert_eq!(serialization::to_json_value(&item).unwrap(), value);
}

#[test_case(json!({"@odata.type": "#microsoft.graph.baseItem"}) => "baseItem"; "base item")]
#[test_case(json!({"@odata.type": "#microsoft.graph.drive"}) => "drive"; "drive")]
#[test_case(json!({"@odata.type": "#microsoft.graph.driveItem"}) => "driveItem"; "drive item")]
#[test_case(json!({"@odata.type": "#microsoft.graph.list"}) => "list"; "list")]
#[test_case(json!({"@odata.type": "#microsoft.graph.listItem"}) => "listItem"; "list item")]
#[test_case(json!({"@odata.type": "#microsoft.graph.permission"}) => "permission"; "permission")]
#[test_case(json!({"@odata.type": "#microsoft.graph.subscription"}) => "subscription"; "subscription")]
#[test_case(json!({"@odata.type": "#microsoft.graph.teamsApp"}) => "entity"; "unrecognized tag")]
#[test_case(json!({"id": "no-tag"}) => "entity"; "absent tag")]
fn discriminator_selects_concrete_type(payload: serde_json::Value) -> &'static str {
    match AnyEntity::from_json_value(&payload).unwrap() {
        AnyEntity::BaseItem(_) => "baseItem",
        AnyEntity::Drive(_) => "drive",
        AnyEntity::DriveItem(_) => "driveItem",
        AnyEntity::List(_) => "list",
        AnyEntity::ListItem(_) => "listItem",
        AnyEntity::Permission(_) => "permission",
        AnyEntity::Subscription(_) => "subscription",
        AnyEntity::Entity(_) => "entity",
        _ => "unexpected",
    }
}

#[test]
fn deeply_nested_payload_round_trips() {
    let value = json!({
        "@odata.type": "#microsoft.graph.driveItem",
        "id": "root",
        "createdBy": {"user": {"displayName": "Alice", "id": "u-1"}},
        "createdDateTime": "2016-03-21T20:01:37Z",
        "folder": {"childCount": 1},
        "parentReference": {"driveId": "b!x", "driveType": "business", "path": "/drive/root:"},
        "children": [
            {
                "@odata.type": "#microsoft.graph.driveItem",
                "id": "child",
                "name": "a.txt",
                "size": 42,
                "file": {
                    "mimeType": "text/plain",
                    "hashes": {"sha256Hash": "9f86d081"}
                },
                "content": "aGVsbG8="
            }
        ]
    });

    let item: DriveItem = serialization::from_json_value(&value).unwrap();
    let child = &item.children().unwrap()[0];
    assert_eq!(child.content(), Some(b"hello".as_slice()));
    assert_eq!(
        child.file().and_then(|f| f.hashes()).and_then(|h| h.sha256_hash()),
        Some("9f86d081")
    );
    assert_eq!(serialization::to_json_value(&item).unwrap(), value);
}

#[test]
fn mutation_after_decode_supports_minimal_reserialization() {
    let value = json!({
        "@odata.type": "#microsoft.graph.driveItem",
        "id": "item-1",
        "name": "a.txt",
        "size": 42
    });
    let mut item: DriveItem = serialization::from_json_value(&value).unwrap();

    // Decoding is not a mutation.
    assert_eq!(item.backing_store().changed_keys().count(), 0);

    item.set_name(Some("b.txt".to_string()));
    item.backing_store_mut().set_return_only_changed_values(true);
    let patch = serialization::to_json_value(&item).unwrap();
    assert_eq!(patch, json!({"name": "b.txt"}));

    item.backing_store_mut().set_return_only_changed_values(false);
    let full = serialization::to_json_value(&item).unwrap();
    assert_eq!(full["name"], json!("b.txt"));
    assert_eq!(full["size"], json!(42));
}

#[test]
fn any_entity_round_trip_keeps_unknown_subtype_payload() {
    let value = json!({
        "@odata.type": "#microsoft.graph.site",
        "id": "site-1",
        "sharepointIds": {"siteId": "s"}
    });
    let decoded = AnyEntity::from_json_value(&value).unwrap();
    assert_eq!(decoded.odata_type(), Some("#microsoft.graph.site"));
    assert_eq!(decoded.to_json_value().unwrap(), value);
}

#[test]
fn serde_bridge_round_trip() {
    let value = json!({
        "@odata.type": "#microsoft.graph.driveItem",
        "name": "a.txt",
        "unknown": true
    });
    let item: DriveItem = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(serde_json::to_value(&item).unwrap(), value);
}

fn timestamp_strategy() -> impl Strategy<Value = chrono::DateTime<chrono::Utc>> {
    // Whole seconds between 1970 and 2100; the wire format carries
    // fractions only when present.
    (0i64..4_102_444_800).prop_map(|secs| {
        chrono::DateTime::from_timestamp(secs, 0).unwrap_or_default()
    })
}

proptest! {
    #[test]
    fn prop_drive_item_round_trip(
        name in proptest::option::of(".*"),
        size in proptest::option::of(any::<i64>()),
        c_tag in proptest::option::of("[ -~]{0,32}"),
        content in proptest::option::of(proptest::collection::vec(any::<u8>(), 0..64)),
        stamp in proptest::option::of(timestamp_strategy()),
    ) {
        let mut item = DriveItem::new();
        item.set_name(name.clone());
        item.set_size(size);
        item.set_c_tag(c_tag.clone());
        item.set_content(content.clone());
        item.set_created_date_time(stamp);

        let encoded = serialization::to_json_value(&item).unwrap();
        let decoded: DriveItem = serialization::from_json_value(&encoded).unwrap();

        prop_assert_eq!(decoded.name(), name.as_deref());
        prop_assert_eq!(decoded.size(), size);
        prop_assert_eq!(decoded.c_tag(), c_tag.as_deref());
        prop_assert_eq!(decoded.content(), content.as_deref());
        prop_assert_eq!(decoded.created_date_time(), stamp);
        prop_assert_eq!(decoded.odata_type(), Some(DriveItem::ODATA_TYPE));
    }

    #[test]
    fn prop_set_then_get_is_identity(value in ".*") {
        let mut item = DriveItem::new();
        item.set_name(Some(value.clone()));
        prop_assert_eq!(item.name(), Some(value.as_str()));
    }

    #[test]
    fn prop_additional_data_survives_round_trip(
        keys in proptest::collection::btree_map("[a-zA-Z@.][a-zA-Z0-9@.]{0,16}", any::<i64>(), 0..8)
    ) {
        let mut entity = Entity::new();
        for (key, number) in &keys {
            // Avoid colliding with modeled envelope properties.
            if key == "id" || key == "@odata.type" {
                continue;
            }
            entity
                .additional_data_mut()
                .insert(key.clone(), json!(number));
        }

        let encoded = serialization::to_json_value(&entity).unwrap();
        let decoded: Entity = serialization::from_json_value(&encoded).unwrap();
        prop_assert_eq!(decoded.additional_data(), entity.additional_data());
    }

    #[test]
    fn prop_permission_roles_round_trip(
        roles in proptest::collection::vec("[a-z]{1,12}", 0..6)
    ) {
        let mut permission = Permission::new();
        permission.set_roles(Some(roles.clone()));

        let encoded = serialization::to_json_value(&permission).unwrap();
        let decoded: Permission = serialization::from_json_value(&encoded).unwrap();
        prop_assert_eq!(decoded.roles(), Some(roles.as_slice()));
    }
}
