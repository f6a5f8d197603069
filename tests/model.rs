// ABOUTME: Integration tests for the inspect report model.
// ABOUTME: Wire-format deserialization, array/object forms, and defaults.

use respec::model::ContainerDetails;

#[test]
fn parses_docker_inspect_array_form() {
    let json = include_str!("fixtures/inspect.json");
    let details = ContainerDetails::from_json(json).unwrap();

    assert_eq!(details.name.as_deref(), Some("/web"));
    let host = details.host_config.as_ref().unwrap();
    assert_eq!(host.memory, Some(536_870_912));
    assert_eq!(host.mounts.as_ref().unwrap().len(), 1);
    assert_eq!(details.mounts.as_ref().unwrap().len(), 3);
    assert_eq!(details.node.as_ref().unwrap().name.as_deref(), Some("node-1"));
}

#[test]
fn parses_bare_object_form() {
    let json = r#"{"Id": "abc123", "Config": {}, "HostConfig": {}}"#;
    let details = ContainerDetails::from_json(json).unwrap();
    assert_eq!(details.id.as_deref(), Some("abc123"));
    assert!(details.mounts.is_none());
}

#[test]
fn empty_array_is_an_error() {
    assert!(ContainerDetails::from_json("[]").is_err());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(ContainerDetails::from_json("{not json").is_err());
}

#[test]
fn unknown_wire_fields_are_ignored() {
    let json = r#"{
        "Id": "abc",
        "Config": {"NewEngineField": true},
        "HostConfig": {"CgroupnsMode": "host"},
        "GraphDriver": {"Name": "overlay2"}
    }"#;
    assert!(ContainerDetails::from_json(json).is_ok());
}

#[test]
fn mount_point_rw_defaults_to_writable() {
    let json = r#"{
        "Config": {},
        "HostConfig": {},
        "Mounts": [{"Type": "bind", "Source": "/a", "Destination": "/b"}]
    }"#;
    let details = ContainerDetails::from_json(json).unwrap();
    let point = &details.mounts.as_ref().unwrap()[0];
    assert!(point.rw);
    assert!(!point.system);
}

#[test]
fn system_flag_deserializes_when_present() {
    let json = r#"{
        "Config": {},
        "HostConfig": {
            "Mounts": [{"Type": "volume", "Source": "state", "Target": "/run/state", "System": true}]
        }
    }"#;
    let details = ContainerDetails::from_json(json).unwrap();
    let mount = &details.host_config.unwrap().mounts.unwrap()[0];
    assert!(mount.system);
}
