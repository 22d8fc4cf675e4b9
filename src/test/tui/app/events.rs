use super::dispatch_event;
use crate::config::{ClientKind, ConnectionProfile, ProfileStore};
use crate::process::{ClientError, build_client_command};
use crate::tui::{AppState, SelectorMode};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::io;

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn profile_line_texts(app: &AppState) -> Vec<String> {
    app.selector_lines()
        .iter()
        .map(|line| line.spans.iter().map(|span| span.content.as_ref()).collect::<String>())
        .collect()
}

fn loaded_store() -> ProfileStore {
    ProfileStore::new(
        ClientKind::from_config_value(None).expect("default client"),
        vec![
            ConnectionProfile::new("db1", 3306, "root", "pw1", "app"),
            ConnectionProfile::new("db2", 3307, "admin", "pw2", "app2"),
        ],
    )
    .expect("non-empty store")
}

#[test]
fn resize_and_focus_events_are_no_ops() {
    let mut app = AppState::new(loaded_store());
    dispatch_event(&mut app, Event::Resize(80, 24)).expect("resize");
    dispatch_event(&mut app, Event::FocusGained).expect("focus");
    assert_eq!(app.cursor, 0);
    assert_eq!(app.mode(), SelectorMode::Browsing);
}

#[test]
fn select_second_profile_fail_and_navigate_back() {
    let mut app = AppState::new(loaded_store());
    assert_eq!(app.store.client(), ClientKind::Mysql);

    let lines = profile_line_texts(&app);
    assert_eq!(lines[1], "* db1/app");
    assert_eq!(lines[2], "  db2/app2");

    dispatch_event(&mut app, key(KeyCode::Down)).expect("move down");
    let lines = profile_line_texts(&app);
    assert_eq!(lines[1], "  db1/app");
    assert_eq!(lines[2], "* db2/app2");

    dispatch_event(&mut app, key(KeyCode::Enter)).expect("confirm");
    let request = app.take_connect_request().expect("handoff requested");
    assert_eq!(request.client, ClientKind::Mysql);
    let command = build_client_command(request.client, &app.store.profiles()[request.profile_index]);
    assert_eq!(command.program, "mysql");
    assert_eq!(command.args, ["-h", "db2", "-P", "3307", "-u", "admin", "-ppw2", "-D", "app2"]);

    app.finish_client(Err(ClientError::Launch {
        program: "mysql",
        source: io::Error::other("exit status 1"),
    }));
    let lines = profile_line_texts(&app);
    assert_eq!(lines[0], "Error: failed to launch mysql: exit status 1");

    dispatch_event(&mut app, key(KeyCode::Up)).expect("move up");
    let lines = profile_line_texts(&app);
    assert_eq!(lines[0], "Error: failed to launch mysql: exit status 1");
    assert_eq!(lines[2], "* db1/app");
    assert_eq!(lines[3], "  db2/app2");

    dispatch_event(&mut app, key(KeyCode::Enter)).expect("confirm again");
    assert!(app.last_error.is_none());
}

#[test]
fn quit_stops_before_any_further_transition() {
    let mut app = AppState::new(loaded_store());
    dispatch_event(&mut app, key(KeyCode::Down)).expect("move down");
    dispatch_event(&mut app, key(KeyCode::Char('q'))).expect("quit");

    assert!(app.should_exit);
    assert_eq!(app.cursor, 1);
    assert!(app.take_connect_request().is_none());
}
