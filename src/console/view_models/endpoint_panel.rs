//! # Endpoint Panel
//!
//! One endpoint's form: its parameter inputs, the live URL preview, the
//! submit action with its result slot and, when the endpoint is documented,
//! the documentation overlay.

use crate::console::errors::ConsoleResult;
use crate::console::events::ViewEvent;
use crate::console::geometry::{Position, Rect};
use crate::console::models::{EndpointSpec, Parameter, RequestResult};
use crate::console::services::{build_url, CompletedRequest, RequestTicket};
use crate::console::view_models::overlay::OverlayController;
use crate::console::view_models::request_controller::{
    CompletionEffect, RequestController, RequestState,
};

/// Piece of the URL preview line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSegment {
    /// Base URL followed by the endpoint path
    Base(String),
    /// The `?` shown once any parameter is set
    QueryMarker,
    /// `&` between two parameters
    Separator,
    /// Parameter name, drawn in its keyword color
    Name(String),
    Equals,
    /// Raw value as typed
    Value(String),
}

#[derive(Debug, Clone)]
pub struct EndpointPanel {
    index: usize,
    spec: EndpointSpec,
    parameters: Vec<Parameter>,
    result: RequestResult,
    requests: RequestController,
    overlay: Option<OverlayController>,
    focused_field: usize,
    /// First result row shown in the output region
    output_scroll: usize,
}

impl EndpointPanel {
    pub fn new(index: usize, spec: EndpointSpec) -> Self {
        let parameters = spec.parameters().iter().map(Parameter::cleared).collect();
        let overlay = spec
            .documentation()
            .map(|_| OverlayController::new(spec.name()));
        let requests = RequestController::new(index, spec.method().clone());

        Self {
            index,
            spec,
            parameters,
            result: RequestResult::new(),
            requests,
            overlay,
            focused_field: 0,
            output_scroll: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn spec(&self) -> &EndpointSpec {
        &self.spec
    }

    pub fn name(&self) -> &str {
        self.spec.name()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter(&self, index: usize) -> Option<&Parameter> {
        self.parameters.get(index)
    }

    pub fn result(&self) -> &RequestResult {
        &self.result
    }

    pub fn request_state(&self) -> RequestState {
        self.requests.state()
    }

    pub fn is_pending(&self) -> bool {
        self.requests.is_pending()
    }

    pub fn requests(&self) -> &RequestController {
        &self.requests
    }

    /// Overlay controller, present only for documented endpoints
    pub fn overlay(&self) -> Option<&OverlayController> {
        self.overlay.as_ref()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.overlay.as_ref().is_some_and(OverlayController::is_open)
    }

    pub fn focused_field(&self) -> usize {
        self.focused_field
    }

    pub fn focused_parameter(&self) -> Option<&Parameter> {
        self.parameters.get(self.focused_field)
    }

    /// Move field focus forward or back, wrapping around
    pub fn move_focus(&mut self, forward: bool) -> Vec<ViewEvent> {
        let count = self.parameters.len();
        if count < 2 {
            return Vec::new();
        }
        self.focused_field = if forward {
            (self.focused_field + 1) % count
        } else {
            (self.focused_field + count - 1) % count
        };
        vec![ViewEvent::FocusChanged { panel: self.index }]
    }

    /// Replace the value of parameter `index`. Empty clears it.
    pub fn set_parameter_value(&mut self, index: usize, value: &str) -> Vec<ViewEvent> {
        self.edit_parameter(index, |parameter| Some(parameter.with_value(value)))
    }

    /// Replace parameter `index` with whatever `edit` returns.
    ///
    /// `None` from `edit` means the edit does not apply and nothing changes.
    pub fn edit_parameter<F>(&mut self, index: usize, edit: F) -> Vec<ViewEvent>
    where
        F: FnOnce(&Parameter) -> Option<Parameter>,
    {
        let Some(current) = self.parameters.get(index) else {
            tracing::warn!("{}: no parameter at index {}", self.name(), index);
            return Vec::new();
        };
        let Some(replacement) = edit(current) else {
            return Vec::new();
        };
        if replacement == *current {
            return Vec::new();
        }

        tracing::debug!(
            "{}: {} = {:?}",
            self.name(),
            replacement.name(),
            replacement.value()
        );
        self.parameters[index] = replacement;

        vec![
            ViewEvent::ParameterChanged {
                panel: self.index,
                index,
            },
            ViewEvent::UrlPreviewChanged { panel: self.index },
        ]
    }

    /// Full request URL for the current values
    pub fn url(&self, base: &str) -> ConsoleResult<String> {
        build_url(base, self.spec.path(), &self.parameters)
    }

    /// URL preview split for colored display. Values are shown as typed.
    pub fn preview_segments(&self, base: &str) -> Vec<PreviewSegment> {
        let mut segments = vec![PreviewSegment::Base(format!("{base}{}", self.spec.path()))];

        let mut set = self.parameters.iter().filter(|p| p.is_set()).peekable();
        if set.peek().is_some() {
            segments.push(PreviewSegment::QueryMarker);
        }
        for (i, parameter) in set.enumerate() {
            if i > 0 {
                segments.push(PreviewSegment::Separator);
            }
            segments.push(PreviewSegment::Name(parameter.name().to_string()));
            segments.push(PreviewSegment::Equals);
            segments.push(PreviewSegment::Value(
                parameter.value().unwrap_or_default().to_string(),
            ));
        }

        segments
    }

    /// Snapshot the current URL and start a request
    pub fn submit(&mut self, base: &str) -> ConsoleResult<(RequestTicket, Vec<ViewEvent>)> {
        let url = self.url(base)?;
        let was_pending = self.is_pending();
        let ticket = self.requests.begin(url);

        let mut events = Vec::new();
        if !was_pending {
            events.push(ViewEvent::RequestStateChanged { panel: self.index });
        }
        Ok((ticket, events))
    }

    pub fn apply_completion(
        &mut self,
        completed: CompletedRequest,
    ) -> (CompletionEffect, Vec<ViewEvent>) {
        let effect = self
            .requests
            .complete(completed.sequence, completed.outcome, &mut self.result);

        let mut events = Vec::new();
        if effect == CompletionEffect::Applied {
            self.output_scroll = 0;
            events.push(ViewEvent::ResultChanged { panel: self.index });
        }
        if !self.is_pending() {
            events.push(ViewEvent::RequestStateChanged { panel: self.index });
        }
        (effect, events)
    }

    pub fn output_scroll(&self) -> usize {
        self.output_scroll
    }

    /// Show the result from row `offset` on
    pub fn scroll_output_to(&mut self, offset: usize) -> Vec<ViewEvent> {
        if offset == self.output_scroll {
            return Vec::new();
        }
        self.output_scroll = offset;
        vec![ViewEvent::OutputScrolled { panel: self.index }]
    }

    /// Open the documentation overlay. Undocumented endpoints ignore this.
    pub fn open_overlay(&mut self) -> Vec<ViewEvent> {
        self.update_overlay(OverlayController::open)
    }

    pub fn close_overlay(&mut self) -> Vec<ViewEvent> {
        self.update_overlay(OverlayController::close)
    }

    pub fn handle_pointer_down(
        &mut self,
        point: Position,
        content_box: Rect,
    ) -> Vec<ViewEvent> {
        self.update_overlay(|overlay| overlay.handle_pointer_down(point, content_box))
    }

    fn update_overlay<F>(&mut self, update: F) -> Vec<ViewEvent>
    where
        F: FnOnce(&mut OverlayController) -> bool,
    {
        if let Some(overlay) = self.overlay.as_mut() {
            if update(overlay) {
                return vec![ViewEvent::OverlayChanged { panel: self.index }];
            }
        }
        Vec::new()
    }
}
