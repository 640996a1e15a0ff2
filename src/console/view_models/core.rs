//! # Core ViewModel Structure
//!
//! The central coordinator of the console. Owns every endpoint panel, the
//! session's keyword colors, focus and the status line, and queues view events
//! for the renderer. All mutation happens on the UI loop.

use crate::console::errors::ConsoleResult;
use crate::console::events::ViewEvent;
use crate::console::geometry::Position;
use crate::console::models::{Catalog, Documentation, Parameter, StatusLine};
use crate::console::services::{
    copy_to_clipboard, Clipboard, CompletedRequest, MemoryClipboard, RequestTicket,
};
use crate::console::view_models::color_allocator::ColorAllocator;
use crate::console::view_models::endpoint_panel::EndpointPanel;
use crate::console::view_models::request_controller::CompletionEffect;
use crate::console::views::layout::{output_body_rows, output_lines, overlay_content_box};
use crossterm::style::Color;

/// Terminal size assumed until the first resize event
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (80, 24);

pub struct ViewModel {
    panels: Vec<EndpointPanel>,
    current_panel: usize,
    base_url: String,
    colors: ColorAllocator,
    status_line: StatusLine,
    clipboard: Box<dyn Clipboard>,
    pending_view_events: Vec<ViewEvent>,
    terminal_size: (u16, u16),
    verbose: bool,
}

impl ViewModel {
    /// Create a view model with one panel per catalog endpoint.
    ///
    /// Every keyword the panels can show is bound to a color up front, in
    /// catalog order. Keywords beyond the palette keep the default color.
    pub fn new(catalog: &Catalog, base_url: impl Into<String>, colors: ColorAllocator) -> Self {
        let base_url = base_url.into();
        let panels = catalog
            .endpoints()
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, spec)| EndpointPanel::new(index, spec))
            .collect();

        let mut view_model = Self {
            panels,
            current_panel: 0,
            status_line: StatusLine::new("default", base_url.clone()),
            base_url,
            colors,
            clipboard: Box::new(MemoryClipboard::new()),
            pending_view_events: Vec::new(),
            terminal_size: DEFAULT_TERMINAL_SIZE,
            verbose: false,
        };
        view_model.register_keywords();
        view_model
    }

    fn register_keywords(&mut self) {
        let keywords: Vec<String> = self
            .panels
            .iter()
            .flat_map(|panel| {
                let names = panel.parameters().iter().map(|p| p.name().to_string());
                let documented = panel
                    .spec()
                    .documentation()
                    .map(Documentation::keywords)
                    .unwrap_or_default();
                names.chain(documented).collect::<Vec<_>>()
            })
            .collect();

        for keyword in keywords {
            if let Err(e) = self.colors.color_for(&keyword) {
                tracing::warn!("{e}; drawing it in the default color");
            }
        }
    }

    pub fn panels(&self) -> &[EndpointPanel] {
        &self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&EndpointPanel> {
        self.panels.get(index)
    }

    pub fn current_panel_index(&self) -> usize {
        self.current_panel
    }

    pub fn current_panel(&self) -> Option<&EndpointPanel> {
        self.panels.get(self.current_panel)
    }

    fn current_panel_mut(&mut self) -> Option<&mut EndpointPanel> {
        self.panels.get_mut(self.current_panel)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn colors(&self) -> &ColorAllocator {
        &self.colors
    }

    /// Color bound to `keyword`, `None` when the palette ran out before it
    pub fn keyword_color(&self, keyword: &str) -> Option<Color> {
        self.colors.assigned_color(keyword)
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn set_profile_name(&mut self, profile_name: impl Into<String>) {
        self.status_line.set_profile_name(profile_name);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_line.set_status_message(message);
        self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
    }

    pub fn clear_status_message(&mut self) {
        if self.status_line.status_message().is_some() {
            self.status_line.clear_status_message();
            self.emit_view_event(ViewEvent::StatusBarUpdateRequired);
        }
    }

    pub fn set_clipboard(&mut self, clipboard: Box<dyn Clipboard>) {
        self.clipboard = clipboard;
    }

    pub fn clipboard(&self) -> &dyn Clipboard {
        self.clipboard.as_ref()
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    // Navigation

    pub fn next_panel(&mut self) {
        self.switch_panel(true);
    }

    pub fn previous_panel(&mut self) {
        self.switch_panel(false);
    }

    fn switch_panel(&mut self, forward: bool) {
        let count = self.panels.len();
        if count < 2 {
            return;
        }
        self.current_panel = if forward {
            (self.current_panel + 1) % count
        } else {
            (self.current_panel + count - 1) % count
        };
        tracing::debug!("Switched to panel {}", self.current_panel);
        self.emit_view_event(ViewEvent::FullRedrawRequired);
    }

    pub fn next_field(&mut self) {
        self.move_field_focus(true);
    }

    pub fn previous_field(&mut self) {
        self.move_field_focus(false);
    }

    fn move_field_focus(&mut self, forward: bool) {
        let events = self
            .current_panel_mut()
            .map(|panel| panel.move_focus(forward))
            .unwrap_or_default();
        self.emit_view_events(events);
    }

    // Editing

    /// Type `ch` into the focused field. Returns false when the field rejects it.
    pub fn type_char(&mut self, ch: char) -> bool {
        self.edit_focused(|parameter| parameter.typed(ch))
    }

    pub fn backspace(&mut self) -> bool {
        self.edit_focused(|parameter| parameter.backspaced())
    }

    /// Step the focused choice field through its options
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        self.edit_focused(|parameter| parameter.cycle_option(forward))
    }

    fn edit_focused<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&Parameter) -> Option<Parameter>,
    {
        let events = match self.current_panel_mut() {
            Some(panel) => {
                let field = panel.focused_field();
                panel.edit_parameter(field, edit)
            }
            None => Vec::new(),
        };
        let changed = !events.is_empty();
        self.emit_view_events(events);
        changed
    }

    pub fn set_parameter_value(&mut self, panel: usize, index: usize, value: &str) {
        let events = self
            .panels
            .get_mut(panel)
            .map(|p| p.set_parameter_value(index, value))
            .unwrap_or_default();
        self.emit_view_events(events);
    }

    // Requests

    pub fn current_url(&self) -> ConsoleResult<Option<String>> {
        self.current_panel()
            .map(|panel| panel.url(&self.base_url))
            .transpose()
    }

    /// Start a request for `panel` with its current values
    pub fn submit(&mut self, panel: usize) -> ConsoleResult<Option<RequestTicket>> {
        let base_url = self.base_url.clone();
        let Some(target) = self.panels.get_mut(panel) else {
            return Ok(None);
        };

        let (ticket, events) = target.submit(&base_url)?;
        self.emit_view_events(events);
        Ok(Some(ticket))
    }

    /// Start a request for the current panel. Failures go to the status line.
    pub fn submit_current(&mut self) -> Option<RequestTicket> {
        match self.submit(self.current_panel) {
            Ok(ticket) => ticket,
            Err(e) => {
                tracing::error!("Cannot submit: {e}");
                self.set_status_message(format!("Cannot submit: {e}"));
                None
            }
        }
    }

    /// Route a completion to its panel
    pub fn apply_completion(&mut self, completed: CompletedRequest) {
        let panel_index = completed.panel;
        let Some(panel) = self.panels.get_mut(panel_index) else {
            tracing::warn!("Completion for unknown panel {}", panel_index);
            return;
        };

        let (effect, events) = panel.apply_completion(completed);
        self.emit_view_events(events);

        if let CompletionEffect::TransportFailed(message) = effect {
            self.set_status_message(format!("Request failed: {message}"));
        }
    }

    /// Page the current panel's result up or down, clamped to its last page
    pub fn scroll_output(&mut self, forward: bool) {
        let (width, height) = self.terminal_size;
        let Some(panel) = self.current_panel_mut() else {
            return;
        };
        let rows = output_body_rows(height, panel.parameters().len());
        let total = output_lines(panel.result().body(), width).len();
        let last_offset = total.saturating_sub(rows);
        let offset = if forward {
            (panel.output_scroll() + rows.max(1)).min(last_offset)
        } else {
            panel.output_scroll().saturating_sub(rows.max(1))
        };
        let events = panel.scroll_output_to(offset);
        self.emit_view_events(events);
    }

    // Overlay

    pub fn is_overlay_open(&self) -> bool {
        self.current_panel()
            .is_some_and(EndpointPanel::is_overlay_open)
    }

    pub fn open_overlay(&mut self) {
        let events = self
            .current_panel_mut()
            .map(EndpointPanel::open_overlay)
            .unwrap_or_default();
        if events.is_empty() && !self.is_overlay_open() {
            self.set_status_message("No documentation for this endpoint");
        }
        self.emit_overlay_events(events);
    }

    pub fn close_overlay(&mut self) {
        let events = self
            .current_panel_mut()
            .map(EndpointPanel::close_overlay)
            .unwrap_or_default();
        self.emit_overlay_events(events);
    }

    /// Pointer press at `point`; closes the overlay when it lands on the backdrop
    pub fn handle_pointer_down(&mut self, point: Position) {
        let (width, height) = self.terminal_size;
        let content_box = overlay_content_box(width, height);
        let events = self
            .current_panel_mut()
            .map(|panel| panel.handle_pointer_down(point, content_box))
            .unwrap_or_default();
        self.emit_overlay_events(events);
    }

    fn emit_overlay_events(&mut self, events: Vec<ViewEvent>) {
        if !events.is_empty() {
            // The overlay covers the panel, so both directions repaint fully
            self.emit_view_events(events);
            self.emit_view_event(ViewEvent::FullRedrawRequired);
        }
    }

    // Clipboard

    /// Copy the current panel's URL
    pub fn copy_current_url(&mut self) -> ConsoleResult<()> {
        let Some(url) = self.current_url()? else {
            return Ok(());
        };

        match copy_to_clipboard(self.clipboard.as_mut(), &url) {
            Ok(()) => {
                self.set_status_message(format!("Copied {url}"));
                Ok(())
            }
            Err(e) => {
                self.set_status_message(e.to_string());
                Err(e)
            }
        }
    }

    // View events

    pub(crate) fn emit_view_event(&mut self, event: ViewEvent) {
        self.pending_view_events.push(event);
        tracing::debug!("View event emitted: {:?}", event);
    }

    fn emit_view_events(&mut self, events: Vec<ViewEvent>) {
        for event in events {
            self.emit_view_event(event);
        }
    }

    /// Collect and clear pending view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::errors::ConsoleError;
    use crate::console::models::EndpointSpec;
    use crate::console::services::RequestOutcome;

    const BASE: &str = "https://rnd.bgenc.dev";

    fn view_model() -> ViewModel {
        ViewModel::new(&Catalog::builtin(), BASE, ColorAllocator::new())
    }

    fn response(body: &str) -> RequestOutcome {
        RequestOutcome::Response {
            status_code: 200,
            body: body.to_string(),
            duration_ms: 2,
        }
    }

    #[test]
    fn new_should_create_one_panel_per_endpoint() {
        let vm = view_model();

        assert_eq!(vm.panels().len(), 7);
        assert_eq!(vm.current_panel_index(), 0);
        assert_eq!(vm.current_panel().map(EndpointPanel::name), Some("Integer"));
    }

    #[test]
    fn shared_keyword_should_have_one_color_across_panels() {
        let vm = view_model();

        // Integer and Floating-Point Number both declare min and max
        let min = vm.keyword_color("min");
        assert!(min.is_some());
        assert_eq!(vm.colors().assigned_count(), 9);
        assert_ne!(vm.keyword_color("min"), vm.keyword_color("max"));
    }

    #[test]
    fn keywords_beyond_palette_should_stay_uncolored() {
        let mut spec = EndpointSpec::new("Wide", "/v1/wide");
        for i in 0..12 {
            spec = spec.with_parameter(Parameter::text(format!("p{i}")));
        }
        let catalog = Catalog::new(vec![spec]).unwrap();

        let vm = ViewModel::new(&catalog, BASE, ColorAllocator::new());

        assert!(vm.keyword_color("p10").is_some());
        assert_eq!(vm.keyword_color("p11"), None);
        assert_eq!(vm.colors().remaining(), 0);
    }

    #[test]
    fn typing_should_edit_only_the_focused_field() {
        let mut vm = view_model();
        vm.collect_pending_view_events();

        assert!(vm.type_char('5'));
        assert!(!vm.type_char('x'));

        assert_eq!(
            vm.collect_pending_view_events(),
            vec![
                ViewEvent::ParameterChanged { panel: 0, index: 0 },
                ViewEvent::UrlPreviewChanged { panel: 0 },
            ]
        );
        assert_eq!(
            vm.current_url().unwrap().as_deref(),
            Some("https://rnd.bgenc.dev/v1/int?min=5")
        );
    }

    #[test]
    fn backspace_should_clear_last_character() {
        let mut vm = view_model();
        vm.type_char('4');
        vm.type_char('2');

        assert!(vm.backspace());
        assert!(vm.backspace());
        assert!(!vm.backspace());
        assert_eq!(
            vm.current_url().unwrap().as_deref(),
            Some("https://rnd.bgenc.dev/v1/int")
        );
    }

    #[test]
    fn cycle_choice_should_only_affect_choice_fields() {
        let mut vm = view_model();
        vm.next_panel();
        vm.next_panel();
        assert_eq!(vm.current_panel().map(EndpointPanel::name), Some("Dice"));

        assert!(!vm.cycle_choice(true));
        vm.next_field();
        assert!(vm.cycle_choice(false));

        assert_eq!(
            vm.current_url().unwrap().as_deref(),
            Some("https://rnd.bgenc.dev/v1/dice?output=full")
        );
    }

    #[test]
    fn panel_navigation_should_wrap() {
        let mut vm = view_model();

        vm.previous_panel();
        assert_eq!(vm.current_panel().map(EndpointPanel::name), Some("Word"));
        vm.next_panel();
        assert_eq!(vm.current_panel_index(), 0);
        assert!(vm
            .collect_pending_view_events()
            .contains(&ViewEvent::FullRedrawRequired));
    }

    #[test]
    fn submit_on_one_panel_should_not_touch_another() {
        let mut vm = view_model();
        vm.set_parameter_value(1, 0, "0.5");
        let before = vm.panel(1).map(|p| p.result().clone());

        let ticket = vm.submit(0).unwrap().unwrap();
        vm.apply_completion(CompletedRequest {
            panel: ticket.panel,
            sequence: ticket.sequence,
            outcome: response("7"),
        });

        assert_eq!(vm.panel(0).map(|p| p.result().body()), Some("7"));
        assert_eq!(vm.panel(1).map(|p| p.result().clone()), before);
        assert_eq!(
            vm.panel(1).and_then(|p| p.parameter(0)).and_then(Parameter::value),
            Some("0.5")
        );
    }

    #[test]
    fn transport_failure_should_set_status_message() {
        let mut vm = view_model();
        let ticket = vm.submit_current().unwrap();

        vm.apply_completion(CompletedRequest {
            panel: ticket.panel,
            sequence: ticket.sequence,
            outcome: RequestOutcome::TransportFailure {
                message: "connection refused".to_string(),
            },
        });

        assert_eq!(
            vm.status_line().status_message(),
            Some("Request failed: connection refused")
        );
        assert!(vm.panel(0).is_some_and(|p| p.result().is_empty()));
    }

    #[test]
    fn scroll_output_should_page_within_result() {
        let mut vm = view_model();
        vm.update_terminal_size(40, 24);
        let ticket = vm.submit_current().unwrap();
        let body = (1..=30).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
        vm.apply_completion(CompletedRequest {
            panel: ticket.panel,
            sequence: ticket.sequence,
            outcome: response(&body),
        });
        vm.collect_pending_view_events();

        // Two parameters leave nine body rows at height 24
        vm.scroll_output(true);
        assert_eq!(vm.current_panel().map(EndpointPanel::output_scroll), Some(9));
        assert_eq!(
            vm.collect_pending_view_events(),
            vec![ViewEvent::OutputScrolled { panel: 0 }]
        );

        vm.scroll_output(true);
        vm.scroll_output(true);
        vm.scroll_output(true);
        assert_eq!(vm.current_panel().map(EndpointPanel::output_scroll), Some(21));

        vm.scroll_output(false);
        vm.scroll_output(false);
        vm.scroll_output(false);
        assert_eq!(vm.current_panel().map(EndpointPanel::output_scroll), Some(0));
    }

    #[test]
    fn scroll_output_should_ignore_short_results() {
        let mut vm = view_model();
        vm.collect_pending_view_events();

        vm.scroll_output(true);

        assert!(vm.collect_pending_view_events().is_empty());
    }

    #[test]
    fn completion_for_unknown_panel_should_be_ignored() {
        let mut vm = view_model();
        vm.collect_pending_view_events();

        vm.apply_completion(CompletedRequest {
            panel: 99,
            sequence: 1,
            outcome: response("lost"),
        });

        assert!(vm.collect_pending_view_events().is_empty());
    }

    #[test]
    fn copy_should_write_current_url_to_clipboard() {
        let mut vm = view_model();
        vm.type_char('3');

        vm.copy_current_url().unwrap();

        assert_eq!(
            vm.clipboard().last_text(),
            Some("https://rnd.bgenc.dev/v1/int?min=3")
        );
        assert_eq!(
            vm.status_line().status_message(),
            Some("Copied https://rnd.bgenc.dev/v1/int?min=3")
        );
    }

    #[test]
    fn clipboard_failure_should_only_set_status() {
        let mut vm = view_model();
        vm.set_clipboard(Box::new(MemoryClipboard::unavailable()));
        vm.type_char('3');

        let result = vm.copy_current_url();

        assert!(matches!(result, Err(ConsoleError::ClipboardUnavailable(_))));
        assert!(vm
            .status_line()
            .status_message()
            .is_some_and(|m| m.starts_with("clipboard unavailable")));
        assert_eq!(
            vm.current_url().unwrap().as_deref(),
            Some("https://rnd.bgenc.dev/v1/int?min=3")
        );
    }

    #[test]
    fn backdrop_press_should_close_overlay() {
        let mut vm = view_model();
        vm.update_terminal_size(80, 24);
        vm.open_overlay();
        assert!(vm.is_overlay_open());

        vm.handle_pointer_down(Position::new(12, 40));
        assert!(vm.is_overlay_open());

        vm.handle_pointer_down(Position::new(0, 0));
        assert!(!vm.is_overlay_open());
    }

    #[test]
    fn opening_undocumented_overlay_should_report_in_status() {
        let catalog = Catalog::new(vec![EndpointSpec::new("Bare", "/v1/bare")]).unwrap();
        let mut vm = ViewModel::new(&catalog, BASE, ColorAllocator::new());

        vm.open_overlay();

        assert!(!vm.is_overlay_open());
        assert_eq!(
            vm.status_line().status_message(),
            Some("No documentation for this endpoint")
        );
    }
}
