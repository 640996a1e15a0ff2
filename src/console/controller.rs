//! # Console Application Controller
//!
//! The controller owns the event loop. It turns terminal input into commands,
//! applies them to the view model, hands request tickets to the HTTP service,
//! feeds completions back and redraws whatever the view model reports stale.

use crate::config::ConsoleSettings;
use crate::console::{
    commands::{CommandContext, CommandEvent, CommandRegistry},
    events::ViewEvent,
    geometry::Position,
    io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream},
    models::Catalog,
    services::{HttpService, SystemClipboard},
    view_models::{ColorAllocator, ViewModel},
    views::{TerminalRenderer, ViewRenderer},
};
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use std::collections::BTreeSet;
use std::io;
use std::time::Duration;

/// How long one loop iteration waits for terminal input
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// The main application controller
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: ViewModel,
    view_renderer: TerminalRenderer<RS>,
    command_registry: CommandRegistry,
    http_service: HttpService,
    event_stream: ES,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<io::Stdout>> {
    /// Create a controller drawing to the real terminal
    pub fn new(settings: &ConsoleSettings, catalog: &Catalog) -> Result<Self> {
        let mut controller = Self::with_io_streams(
            settings,
            catalog,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
        )?;
        controller
            .view_model
            .set_clipboard(Box::new(SystemClipboard::new()));
        Ok(controller)
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create new application controller with injected I/O streams (dependency injection)
    pub fn with_io_streams(
        settings: &ConsoleSettings,
        catalog: &Catalog,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let mut view_model = ViewModel::new(catalog, &settings.base_url, ColorAllocator::new());
        view_model.set_profile_name(&settings.profile_name);
        view_model.set_verbose(settings.verbose);

        let view_renderer = TerminalRenderer::with_render_stream(render_stream)?;

        // Synchronize view model with actual terminal size
        let (width, height) = view_renderer.terminal_size();
        view_model.update_terminal_size(width, height);
        view_model.collect_pending_view_events();

        let http_service = HttpService::new(&settings.http)?;

        tracing::info!(
            "Console ready: {} endpoints against {}",
            catalog.len(),
            settings.base_url
        );

        Ok(Self {
            view_model,
            view_renderer,
            command_registry: CommandRegistry::new(),
            http_service,
            event_stream,
            should_quit: false,
        })
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.view_renderer.initialize()?;

        let result = self.event_loop().await;

        // Restore the terminal even when the loop failed
        let cleanup = self.view_renderer.cleanup();
        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.view_renderer.render_full(&self.view_model)?;

        while !self.should_quit {
            self.apply_ready_completions()?;

            if self.event_stream.poll(POLL_INTERVAL)? {
                let event = self.event_stream.read()?;
                self.handle_event(event)?;
            }

            // Let request tasks progress on a single-threaded runtime
            tokio::task::yield_now().await;
        }

        Ok(())
    }

    /// Apply every completion that has already arrived
    fn apply_ready_completions(&mut self) -> Result<()> {
        let mut applied = false;
        while let Some(completed) = self.http_service.poll_completion() {
            self.view_model.apply_completion(completed);
            applied = true;
        }
        if applied {
            self.render_pending()?;
        }
        Ok(())
    }

    /// Wait for the next request to finish and apply it (for testing)
    pub async fn wait_for_completion(&mut self) -> Result<bool> {
        match self.http_service.next_completion().await {
            Some(completed) => {
                self.view_model.apply_completion(completed);
                self.render_pending()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Process one terminal event
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)?;
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                self.view_model
                    .handle_pointer_down(Position::new(row, column));
            }
            Event::Resize(width, height) => {
                self.view_renderer.update_size(width, height);
                self.view_model.update_terminal_size(width, height);
            }
            _ => {}
        }

        if !self.should_quit {
            self.render_pending()?;
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        tracing::trace!("Received key event: {:?}", key_event);

        let context = CommandContext::from_view_model(&self.view_model);
        let events = self.command_registry.process_event(key_event, &context)?;
        for event in events {
            self.apply_command_event(event);
        }
        Ok(())
    }

    /// Apply a command event to the view model
    fn apply_command_event(&mut self, event: CommandEvent) {
        match event {
            CommandEvent::FieldFocusRequested { forward: true } => self.view_model.next_field(),
            CommandEvent::FieldFocusRequested { forward: false } => {
                self.view_model.previous_field()
            }
            CommandEvent::PanelSwitchRequested { forward: true } => self.view_model.next_panel(),
            CommandEvent::PanelSwitchRequested { forward: false } => {
                self.view_model.previous_panel()
            }
            CommandEvent::OutputScrollRequested { forward } => {
                self.view_model.scroll_output(forward)
            }
            CommandEvent::CharInsertRequested { ch } => {
                if !self.view_model.type_char(ch) {
                    tracing::trace!("Field rejected {:?}", ch);
                }
            }
            CommandEvent::BackspaceRequested => {
                self.view_model.backspace();
            }
            CommandEvent::ChoiceCycleRequested { forward } => {
                self.view_model.cycle_choice(forward);
            }
            CommandEvent::SubmitRequested => {
                if let Some(ticket) = self.view_model.submit_current() {
                    tracing::info!("{} {}", ticket.method, ticket.url);
                    self.http_service.dispatch(ticket);
                }
            }
            CommandEvent::CopyUrlRequested => {
                // The view model already put the failure on the status line
                if let Err(e) = self.view_model.copy_current_url() {
                    tracing::warn!("Copy failed: {}", e);
                }
            }
            CommandEvent::OverlayOpenRequested => self.view_model.open_overlay(),
            CommandEvent::OverlayCloseRequested => self.view_model.close_overlay(),
            CommandEvent::QuitRequested => {
                tracing::info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn render_pending(&mut self) -> Result<()> {
        let view_events = self.view_model.collect_pending_view_events();
        self.process_view_events(view_events)
    }

    /// Redraw only the regions the view events name
    fn process_view_events(&mut self, view_events: Vec<ViewEvent>) -> Result<()> {
        if view_events.is_empty() {
            return Ok(());
        }
        tracing::trace!("Processing view events: {:?}", view_events);

        // The overlay sits on top of the panel, so any change repaints it all
        if view_events.contains(&ViewEvent::FullRedrawRequired)
            || self.view_model.is_overlay_open()
        {
            return self.view_renderer.render_full(&self.view_model);
        }

        let current = self.view_model.current_panel_index();
        let mut parameters = BTreeSet::new();
        let mut all_parameters = false;
        let mut preview = false;
        let mut output = false;
        let mut status_bar = false;

        for event in view_events {
            if event.panel().is_some_and(|panel| panel != current) {
                continue;
            }
            match event {
                ViewEvent::ParameterChanged { index, .. } => {
                    parameters.insert(index);
                }
                ViewEvent::UrlPreviewChanged { .. } => preview = true,
                ViewEvent::ResultChanged { .. }
                | ViewEvent::RequestStateChanged { .. }
                | ViewEvent::OutputScrolled { .. } => {
                    output = true
                }
                ViewEvent::FocusChanged { .. } => all_parameters = true,
                ViewEvent::StatusBarUpdateRequired => status_bar = true,
                ViewEvent::OverlayChanged { .. } | ViewEvent::FullRedrawRequired => {}
            }
        }

        if all_parameters {
            self.view_renderer.render_parameters(&self.view_model)?;
        } else {
            for index in parameters {
                self.view_renderer
                    .render_parameter(&self.view_model, index)?;
            }
        }
        if preview {
            self.view_renderer.render_url_preview(&self.view_model)?;
        }
        if output {
            self.view_renderer.render_output(&self.view_model)?;
        }
        if status_bar {
            self.view_renderer.render_status_bar(&self.view_model)?;
        }
        Ok(())
    }

    /// Get reference to view model (for testing)
    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    /// Get mutable reference to view model (for testing)
    pub fn view_model_mut(&mut self) -> &mut ViewModel {
        &mut self.view_model
    }

    /// Get the renderer and its stream (for testing)
    pub fn renderer(&self) -> &TerminalRenderer<RS> {
        &self.view_renderer
    }

    /// Check if the application should quit (for testing)
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
