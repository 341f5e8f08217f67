use serde_json::json;
use webrecon::scope::rdap::{owner_name, RdapError, RdapResponse};

fn response(v: serde_json::Value) -> RdapResponse {
    serde_json::from_value(v).expect("test document must deserialize")
}

#[test]
fn owner_from_arin_shaped_document() {
    let resp = response(json!({
        "handle": "NET-8-8-8-0-1",
        "name": "LVLT-GOGL-8-8-8",
        "entities": [{
            "roles": ["registrant"],
            "vcardArray": ["vcard", [
                ["version", {}, "text", "4.0"],
                ["fn", {}, "text", "Google LLC"],
                ["kind", {}, "text", "org"],
                ["adr", {"label": "1600 Amphitheatre Parkway"}, "text",
                 ["", "", "", "", "", "", ""]]
            ]]
        }]
    }));
    assert_eq!(owner_name(&resp).unwrap(), "Google LLC");
}

#[test]
fn no_entities_is_schema_error() {
    let resp = response(json!({"handle": "X", "entities": []}));
    assert!(matches!(
        owner_name(&resp),
        Err(RdapError::UnexpectedSchema(_))
    ));
}

#[test]
fn entities_field_may_be_absent_entirely() {
    let resp = response(json!({"handle": "X"}));
    assert!(matches!(
        owner_name(&resp),
        Err(RdapError::UnexpectedSchema(_))
    ));
}

#[test]
fn truncated_vcard_is_schema_error() {
    let resp = response(json!({
        "entities": [{"vcardArray": ["vcard"]}]
    }));
    assert!(matches!(
        owner_name(&resp),
        Err(RdapError::UnexpectedSchema(_))
    ));
}

#[test]
fn vcard_without_fn_is_schema_error() {
    let resp = response(json!({
        "entities": [{
            "vcardArray": ["vcard", [
                ["version", {}, "text", "4.0"],
                ["kind", {}, "text", "org"]
            ]]
        }]
    }));
    assert!(matches!(
        owner_name(&resp),
        Err(RdapError::UnexpectedSchema(_))
    ));
}

#[test]
fn non_array_property_entries_are_skipped() {
    let resp = response(json!({
        "entities": [{
            "vcardArray": ["vcard", [
                "stray string",
                ["fn", {}, "text", "Example Networks"]
            ]]
        }]
    }));
    assert_eq!(owner_name(&resp).unwrap(), "Example Networks");
}
