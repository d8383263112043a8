// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::grammar::bind_arguments;
use crate::values::CustomVariableValues;
use crate::variable::{resolve, HostState, ResolveContext, VariableError};
use shellcmd_core::test_support::{empty_workspace, file_event, test_clock, workspace_with_file};
use shellcmd_core::{Clock, EventContext, EventKind, StaticWorkspace};
use yare::parameterized;

fn state(workspace: StaticWorkspace) -> HostState {
    HostState::new(
        Arc::new(workspace),
        Arc::new(test_clock()),
        CustomVariableValues::new(),
    )
}

async fn value(
    variable: &dyn Variable,
    raw: &[&str],
    state: &HostState,
    event: Option<&EventContext>,
) -> Result<String, VariableError> {
    let raw: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
    let args = bind_arguments(variable.name(), variable.parameters(), &raw).unwrap();
    resolve(variable, &args, &ResolveContext::new(state, event)).await
}

#[test]
fn builtin_names_are_unique() {
    let all = all();
    let mut names: Vec<&str> = all.iter().map(|v| v.name()).collect();
    let count = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), count);
    assert_eq!(count, 14);
}

#[parameterized(
    year_month_day = { "YYYY-MM-DD", "2024-03-05" },
    time = { "HH:mm:ss", "14:07:09" },
    ordinal_day = { "Do MMMM", "5th March" },
    weekday = { "dddd", "Tuesday" },
    short_weekday = { "ddd dd d", "Tue Tu 2" },
    twelve_hour = { "h A", "2 PM" },
    padded_twelve_hour = { "hh a", "02 pm" },
    day_of_year = { "DDDD DDD", "065 65" },
    iso_week = { "W WW", "10 10" },
    quarter = { "Q", "1" },
    short_year = { "YY M D", "24 3 5" },
    offset = { "Z ZZ", "+02:00 +0200" },
    bracket_escape = { "[Week] W", "Week 10" },
    separators_pass_through = { "YYYY/MM_DD.", "2024/03_05." },
)]
fn moment_formats(format: &str, expected: &str) {
    assert_eq!(format_moment(&test_clock().now(), format), expected);
}

#[parameterized(
    first = { 1, "1st" },
    second = { 2, "2nd" },
    third = { 3, "3rd" },
    eleventh = { 11, "11th" },
    twelfth = { 12, "12th" },
    thirteenth = { 13, "13th" },
    twenty_first = { 21, "21st" },
    thirtieth = { 30, "30th" },
)]
fn ordinal_suffixes(day: u32, expected: &str) {
    assert_eq!(date::ordinal(day), expected);
}

#[tokio::test]
async fn date_uses_host_clock() {
    let state = state(empty_workspace());
    let result = value(&Date, &["YYYY-MM-DD"], &state, None).await;
    assert_eq!(result, Ok("2024-03-05".to_string()));
}

#[tokio::test]
async fn environment_reads_process_environment() {
    std::env::set_var("SHELLCMD_BUILTIN_TEST_VALUE", "from-env");
    let state = state(empty_workspace());
    let result = value(&Environment, &["SHELLCMD_BUILTIN_TEST_VALUE"], &state, None).await;
    assert_eq!(result, Ok("from-env".to_string()));
}

#[tokio::test]
async fn environment_fails_when_unset() {
    let state = state(empty_workspace());
    let result = value(&Environment, &["SHELLCMD_BUILTIN_TEST_NEVER_SET"], &state, None).await;
    assert_eq!(
        result,
        Err(VariableError::NotSet {
            variable: "environment".to_string(),
            name: "SHELLCMD_BUILTIN_TEST_NEVER_SET".to_string(),
        })
    );
}

#[parameterized(
    with_dot = { "notes/today.md", "with-dot", ".md" },
    no_dot = { "notes/today.md", "no-dot", "md" },
    with_dot_no_extension = { "notes/README", "with-dot", "" },
    no_dot_no_extension = { "notes/README", "no-dot", "" },
)]
fn file_extension(path: &str, dot: &str, expected: &str) {
    let state = state(workspace_with_file(path));
    let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
    let result = rt.block_on(value(&FileExtension, &[dot], &state, None));
    assert_eq!(result, Ok(expected.to_string()));
}

#[tokio::test]
async fn active_file_variables() {
    let state = state(workspace_with_file("notes/today.md"));
    assert_eq!(value(&FileName, &[], &state, None).await.unwrap(), "today.md");
    assert_eq!(value(&Title, &[], &state, None).await.unwrap(), "today");
    assert_eq!(
        value(&FilePath, &["relative"], &state, None).await.unwrap(),
        "notes/today.md"
    );
    assert_eq!(
        value(&FilePath, &["absolute"], &state, None).await.unwrap(),
        "/vault/notes/today.md"
    );
    assert_eq!(value(&FolderName, &[], &state, None).await.unwrap(), "notes");
    assert_eq!(
        value(&FolderPath, &["relative"], &state, None).await.unwrap(),
        "notes"
    );
    assert_eq!(
        value(&FolderPath, &["absolute"], &state, None).await.unwrap(),
        "/vault/notes"
    );
}

#[tokio::test]
async fn root_level_file_uses_workspace_for_folder() {
    let state = state(workspace_with_file("inbox.md"));
    assert_eq!(value(&FolderName, &[], &state, None).await.unwrap(), "vault");
    assert_eq!(value(&FolderPath, &["relative"], &state, None).await.unwrap(), ".");
}

#[tokio::test]
async fn workspace_path_needs_no_active_file() {
    let state = state(empty_workspace());
    assert_eq!(value(&WorkspacePath, &[], &state, None).await.unwrap(), "/vault");
}

#[tokio::test]
async fn active_file_variables_fail_without_active_file() {
    let state = state(empty_workspace());
    for variable in [&FileName as &dyn Variable, &Title, &FolderName] {
        let result = value(variable, &[], &state, None).await;
        assert_eq!(
            result,
            Err(VariableError::NoActiveFile {
                variable: variable.name().to_string()
            })
        );
    }
}

#[tokio::test]
async fn event_file_variables() {
    let state = state(empty_workspace());
    let event = file_event(EventKind::FileCreated, "inbox/new.txt");
    let event = Some(&event);
    assert_eq!(value(&EventFileName, &[], &state, event).await.unwrap(), "new.txt");
    assert_eq!(
        value(&EventFileExtension, &["no-dot"], &state, event).await.unwrap(),
        "txt"
    );
    assert_eq!(
        value(&EventFilePath, &["absolute"], &state, event).await.unwrap(),
        "/vault/inbox/new.txt"
    );
    assert_eq!(
        value(&EventFolderPath, &["relative"], &state, event).await.unwrap(),
        "inbox"
    );
    assert_eq!(value(&EventType, &[], &state, event).await.unwrap(), "file-created");
}

#[tokio::test]
async fn event_folder_path_in_folder_event() {
    let state = state(empty_workspace());
    let event = file_event(EventKind::FolderCreated, "projects/alpha");
    let result = value(&EventFolderPath, &["relative"], &state, Some(&event)).await;
    assert_eq!(result, Ok("projects/alpha".to_string()));
}

#[tokio::test]
async fn event_file_variable_rejects_folder_event() {
    let state = state(empty_workspace());
    let event = file_event(EventKind::FolderCreated, "projects/alpha");
    let result = value(&EventFileName, &[], &state, Some(&event)).await;
    assert_eq!(
        result,
        Err(VariableError::UnsupportedEvent {
            variable: "event_file_name".to_string(),
            event: Some(EventKind::FolderCreated),
        })
    );
}

#[tokio::test]
async fn event_variables_need_an_event() {
    let state = state(empty_workspace());
    let result = value(&EventType, &[], &state, None).await;
    assert_eq!(
        result,
        Err(VariableError::UnsupportedEvent {
            variable: "event_type".to_string(),
            event: None,
        })
    );
}

#[tokio::test]
async fn event_type_works_in_subjectless_events() {
    let state = state(empty_workspace());
    let event = EventContext::new(EventKind::OnStartup);
    let result = value(&EventType, &[], &state, Some(&event)).await;
    assert_eq!(result, Ok("on-startup".to_string()));
}

#[tokio::test]
async fn event_file_without_subject_is_reported() {
    let state = state(empty_workspace());
    let event = EventContext::new(EventKind::FileMenu);
    let result = value(&EventFileName, &[], &state, Some(&event)).await;
    assert_eq!(
        result,
        Err(VariableError::MissingEventSubject {
            variable: "event_file_name".to_string(),
            event: EventKind::FileMenu,
        })
    );
}
