//! Shared helpers for the integration tests

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rndline::config::ConsoleSettings;
use rndline::console::io::{MockEventStream, MockRenderStream};
use rndline::{AppController, Catalog};

pub type TestController = AppController<MockEventStream, MockRenderStream>;

/// Indices of the built-in endpoints
pub const INTEGER: usize = 0;
pub const FLOAT: usize = 1;
pub const ULID: usize = 3;
pub const WORD: usize = 6;

pub fn settings(base_url: &str) -> ConsoleSettings {
    ConsoleSettings {
        base_url: base_url.trim_end_matches('/').to_string(),
        ..ConsoleSettings::default()
    }
}

/// Controller over the built-in catalog with mock terminal streams
pub fn controller(base_url: &str) -> TestController {
    controller_with_catalog(base_url, &Catalog::builtin())
}

pub fn controller_with_catalog(base_url: &str, catalog: &Catalog) -> TestController {
    AppController::with_io_streams(
        &settings(base_url),
        catalog,
        MockEventStream::empty(),
        MockRenderStream::with_size((100, 30)),
    )
    .expect("controller should build")
}

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn ctrl(ch: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
}

pub fn press(controller: &mut TestController, code: KeyCode) {
    controller.handle_event(key(code)).expect("key should be handled");
}

pub fn type_text(controller: &mut TestController, text: &str) {
    for ch in text.chars() {
        press(controller, KeyCode::Char(ch));
    }
}

/// Move to panel `index` with the arrow keys
pub fn go_to_panel(controller: &mut TestController, index: usize) {
    while controller.view_model().current_panel_index() != index {
        press(controller, KeyCode::Right);
    }
}

pub fn screen_text(controller: &TestController) -> String {
    controller.renderer().render_stream().visible_text()
}
