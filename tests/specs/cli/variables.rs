//! `shellcmd variables` specs

use crate::prelude::*;

#[test]
fn variables_lists_builtins_and_custom_variables() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["variables"])
        .passes()
        .stdout_has("{{date:format}}")
        .stdout_has("{{file_path:absolute|relative}}")
        .stdout_has("{{_target}}");
}

#[test]
fn availability_follows_the_event() {
    let workspace = Workspace::with_settings(SETTINGS);
    let available = |event: Option<&str>| {
        let mut args = vec!["-o", "json", "variables"];
        if let Some(event) = event {
            args.extend(["--event", event]);
        }
        let json = workspace.shellcmd().args(&args).passes().json();
        json.as_array()
            .unwrap()
            .iter()
            .find(|v| v["name"] == "event_file_name")
            .map(|v| v["available"].as_bool().unwrap())
            .unwrap()
    };
    assert!(!available(None));
    assert!(available(Some("file-created")));
    assert!(!available(Some("folder-created")));
}

#[test]
fn unknown_event_fails() {
    Workspace::with_settings(SETTINGS)
        .shellcmd()
        .args(&["variables", "--event", "file-exploded"])
        .fails()
        .stderr_has("unknown event: file-exploded");
}
