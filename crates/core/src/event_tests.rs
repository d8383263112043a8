// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::path::Path;

#[test]
fn codes_round_trip_through_from_str() {
    for kind in EventKind::ALL {
        assert_eq!(kind.code().parse::<EventKind>(), Ok(kind));
    }
}

#[test]
fn unknown_code_is_rejected() {
    assert_eq!(
        "file-exploded".parse::<EventKind>(),
        Err(UnknownEvent("file-exploded".to_string()))
    );
}

#[test]
fn serde_uses_event_codes() {
    #[derive(Serialize, Deserialize)]
    struct Holder {
        kind: EventKind,
    }
    let text = toml::to_string(&Holder {
        kind: EventKind::FileContentModified,
    })
    .unwrap();
    assert_eq!(text.trim(), r#"kind = "file-content-modified""#);
    let parsed: Holder = toml::from_str(r#"kind = "on-quit""#).unwrap();
    assert_eq!(parsed.kind, EventKind::OnQuit);
}

#[yare::parameterized(
    file_menu  = { EventKind::FileMenu, true, false },
    renamed    = { EventKind::FileRenamed, true, false },
    folder     = { EventKind::FolderCreated, false, true },
    quit       = { EventKind::OnQuit, false, false },
    editor     = { EventKind::EditorMenu, false, false },
)]
fn event_categories(kind: EventKind, file: bool, folder: bool) {
    assert_eq!(kind.is_file_event(), file);
    assert_eq!(kind.is_folder_event(), folder);
}

#[test]
fn file_event_exposes_file_and_parent_folder() {
    let event = EventContext::new(EventKind::FileCreated).with_subject(FileRef::new("a/b.md"));
    assert_eq!(event.file().map(FileRef::name), Some("b.md".to_string()));
    assert_eq!(
        event.folder().map(|f| f.relative().to_path_buf()),
        Some(Path::new("a").to_path_buf())
    );
}

#[test]
fn folder_event_has_no_file() {
    let event = EventContext::new(EventKind::FolderMenu).with_subject(FileRef::new("a/b"));
    assert!(event.file().is_none());
    assert_eq!(event.folder().map(|f| f.name()), Some("b".to_string()));
}

#[test]
fn workspace_event_has_no_subject() {
    let event = EventContext::new(EventKind::OnQuit);
    assert!(event.file().is_none());
    assert!(event.folder().is_none());
    assert!(!event.is_supported(&EventKind::FILE_EVENTS));
    assert!(event.is_supported(&[EventKind::OnQuit]));
}
