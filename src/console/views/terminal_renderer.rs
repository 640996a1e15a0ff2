//! # Terminal Renderer
//!
//! Draws the console through an injected `RenderStream`. Every screen region
//! can be redrawn on its own so that view events repaint only what changed.

use crate::console::io::RenderStream;
use crate::console::models::{DocSegment, Documentation, Parameter};
use crate::console::view_models::{EndpointPanel, PreviewSegment, ViewModel};
use crate::console::views::layout::{
    self, hard_wrap_styled, sanitize_for_display, truncate_to_width, wrap_styled, ELLIPSIS,
    HEADER_ROW, LABEL_WIDTH, PREVIEW_ROW, PREVIEW_ROWS, SUBTITLE_ROW, TITLE_ROW,
};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! execute_term {
    ($($arg:expr),* $(,)?) => {
        execute!($($arg),*).map_err(anyhow::Error::from)
    };
}

const MUTED: Color = Color::AnsiValue(240);
const KEY_HINTS: &str = "Tab field  ←/→ endpoint  Enter generate  PgUp/PgDn output  \
                         Ctrl+Y copy URL  F1 docs  Ctrl+C quit";
const FOOTER: &str = "This is open source software, licensed under AGPLv3.  \
                      https://github.com/SeriousBug/random-api";

/// How a run of characters is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Muted,
    Bold,
    Accent(Color),
}

type StyledChars = Vec<(char, Tone)>;

fn styled(text: &str, tone: Tone) -> StyledChars {
    text.chars().map(|c| (c, tone)).collect()
}

fn printable(ch: char) -> char {
    if ch.is_control() {
        char::REPLACEMENT_CHARACTER
    } else {
        ch
    }
}

/// Keyword tone, plain when the keyword never got a color
fn keyword_tone(view_model: &ViewModel, keyword: &str) -> Tone {
    view_model
        .keyword_color(keyword)
        .map_or(Tone::Plain, Tone::Accent)
}

/// Trait for rendering views
pub trait ViewRenderer {
    /// Initialize the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the full application state
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the input line of one parameter of the current panel
    fn render_parameter(&mut self, view_model: &ViewModel, index: usize) -> Result<()>;

    /// Render every parameter line of the current panel
    fn render_parameters(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the method and URL preview of the current panel
    fn render_url_preview(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the output header and result body of the current panel
    fn render_output(&mut self, view_model: &ViewModel) -> Result<()>;

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the documentation dialog over the current panel
    fn render_overlay(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Terminal-based view renderer using crossterm
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer drawing to `render_stream`
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Underlying stream (for testing)
    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    fn width(&self) -> usize {
        self.terminal_size.0 as usize
    }

    fn clear_row(&mut self, row: u16) -> Result<()> {
        execute_term!(
            self.render_stream,
            MoveTo(0, row),
            Clear(ClearType::UntilNewLine)
        )
    }

    /// Print styled characters at `(col, row)`, grouping runs of one tone.
    /// Control characters never reach the terminal.
    fn print_styled(&mut self, col: u16, row: u16, chars: &[(char, Tone)]) -> Result<()> {
        execute_term!(self.render_stream, MoveTo(col, row))?;

        let mut start = 0;
        while start < chars.len() {
            let tone = chars[start].1;
            let end = chars[start..]
                .iter()
                .position(|(_, t)| *t != tone)
                .map_or(chars.len(), |offset| start + offset);
            let text: String = chars[start..end]
                .iter()
                .map(|&(c, _)| printable(c))
                .collect();

            match tone {
                Tone::Plain => execute_term!(self.render_stream, Print(text))?,
                Tone::Muted => execute_term!(
                    self.render_stream,
                    SetForegroundColor(MUTED),
                    Print(text),
                    ResetColor
                )?,
                Tone::Bold => execute_term!(
                    self.render_stream,
                    SetAttribute(Attribute::Bold),
                    Print(text),
                    SetAttribute(Attribute::Reset)
                )?,
                Tone::Accent(color) => execute_term!(
                    self.render_stream,
                    SetForegroundColor(color),
                    Print(text),
                    ResetColor
                )?,
            }
            start = end;
        }
        Ok(())
    }

    fn render_header(&mut self, view_model: &ViewModel) -> Result<()> {
        self.clear_row(HEADER_ROW)?;
        let width = self.width();

        let mut chars = styled(" Random Generation API ", Tone::Bold);
        for panel in view_model.panels() {
            let tone = if panel.index() == view_model.current_panel_index() {
                Tone::Accent(Color::Cyan)
            } else {
                Tone::Muted
            };
            chars.extend(styled(&format!(" {} ", panel.name()), tone));
        }
        chars.truncate(width);
        self.print_styled(0, HEADER_ROW, &chars)
    }

    fn render_title(&mut self, view_model: &ViewModel, panel: &EndpointPanel) -> Result<()> {
        let width = self.width();
        self.clear_row(TITLE_ROW)?;
        self.clear_row(SUBTITLE_ROW)?;

        let position = format!(
            "  ({}/{})",
            panel.index() + 1,
            view_model.panels().len()
        );
        let mut title = styled(&truncate_to_width(panel.name(), width), Tone::Bold);
        title.extend(styled(&position, Tone::Muted));
        title.truncate(width);
        self.print_styled(1, TITLE_ROW, &title)?;

        if let Some(subtitle) = panel.spec().subtitle() {
            let text = truncate_to_width(subtitle, width.saturating_sub(2));
            self.print_styled(1, SUBTITLE_ROW, &styled(&text, Tone::Plain))?;
        }
        Ok(())
    }

    fn parameter_line(
        view_model: &ViewModel,
        parameter: &Parameter,
        focused: bool,
        width: usize,
    ) -> StyledChars {
        let marker = if focused { "› " } else { "  " };
        let mut chars = styled(marker, Tone::Accent(Color::Cyan));

        let label = format!("{:<width$}", parameter.name(), width = LABEL_WIDTH);
        chars.extend(styled(&label, keyword_tone(view_model, parameter.name())));
        chars.push((' ', Tone::Plain));

        match parameter {
            Parameter::Choice { .. } => {
                chars.extend(styled("< ", Tone::Muted));
                match parameter.value() {
                    Some(value) => chars.extend(styled(value, Tone::Plain)),
                    None => chars.extend(styled("default", Tone::Muted)),
                }
                chars.extend(styled(" >", Tone::Muted));
            }
            Parameter::Text { .. } | Parameter::Number { .. } => {
                chars.extend(styled(parameter.value().unwrap_or_default(), Tone::Plain));
                if focused {
                    chars.push(('_', Tone::Accent(Color::Cyan)));
                }
            }
        }

        chars.extend(styled(&format!("  ({})", parameter.input_hint()), Tone::Muted));
        if chars.len() > width {
            chars.truncate(width.saturating_sub(1));
            chars.push((ELLIPSIS, Tone::Muted));
        }
        chars
    }

    fn overlay_lines(
        view_model: &ViewModel,
        documentation: &Documentation,
        width: usize,
    ) -> Vec<StyledChars> {
        let mut lines = Vec::new();
        for (i, paragraph) in documentation.paragraphs().iter().enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            let chars: StyledChars = Documentation::segments(paragraph)
                .iter()
                .flat_map(|segment| match segment {
                    DocSegment::Text(text) => styled(text, Tone::Plain),
                    DocSegment::Keyword(keyword) => {
                        styled(keyword, keyword_tone(view_model, keyword))
                    }
                })
                .collect();
            lines.extend(wrap_styled(&chars, width));
        }
        lines
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.enable_mouse_capture()?;
        self.render_stream.hide_cursor()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.clear_screen()?;
        self.render_header(view_model)?;

        if let Some(panel) = view_model.current_panel() {
            self.render_title(view_model, panel)?;
            self.render_url_preview(view_model)?;
            self.render_parameters(view_model)?;
            self.render_output(view_model)?;
        }

        let hint_row = layout::hint_row(self.terminal_size.1);
        self.clear_row(hint_row)?;
        let hints = truncate_to_width(KEY_HINTS, self.width().saturating_sub(1));
        self.print_styled(1, hint_row, &styled(&hints, Tone::Muted))?;

        let footer_row = layout::footer_row(self.terminal_size.1);
        self.clear_row(footer_row)?;
        let footer = truncate_to_width(FOOTER, self.width().saturating_sub(1));
        self.print_styled(1, footer_row, &styled(&footer, Tone::Muted))?;

        self.render_status_bar(view_model)?;

        if view_model.is_overlay_open() {
            self.render_overlay(view_model)?;
        }

        self.render_stream.flush()?;
        Ok(())
    }

    fn render_parameter(&mut self, view_model: &ViewModel, index: usize) -> Result<()> {
        let Some(panel) = view_model.current_panel() else {
            return Ok(());
        };
        let Some(parameter) = panel.parameter(index) else {
            return Ok(());
        };

        let row = layout::parameter_row(index);
        let line = Self::parameter_line(
            view_model,
            parameter,
            index == panel.focused_field(),
            self.width(),
        );
        self.clear_row(row)?;
        self.print_styled(0, row, &line)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_parameters(&mut self, view_model: &ViewModel) -> Result<()> {
        let Some(panel) = view_model.current_panel() else {
            return Ok(());
        };

        if panel.parameters().is_empty() {
            let row = layout::parameter_row(0);
            self.clear_row(row)?;
            self.print_styled(2, row, &styled("No parameters", Tone::Muted))?;
            return Ok(());
        }
        for index in 0..panel.parameters().len() {
            self.render_parameter(view_model, index)?;
        }
        Ok(())
    }

    fn render_url_preview(&mut self, view_model: &ViewModel) -> Result<()> {
        let Some(panel) = view_model.current_panel() else {
            return Ok(());
        };
        let width = self.width().saturating_sub(2);

        let mut chars = styled(&format!("{} ", panel.spec().method()), Tone::Muted);
        for segment in panel.preview_segments(view_model.base_url()) {
            match segment {
                PreviewSegment::Base(base) => chars.extend(styled(&base, Tone::Plain)),
                PreviewSegment::QueryMarker => chars.push(('?', Tone::Muted)),
                PreviewSegment::Separator => chars.push(('&', Tone::Muted)),
                PreviewSegment::Equals => chars.push(('=', Tone::Muted)),
                PreviewSegment::Name(name) => {
                    chars.extend(styled(&name, keyword_tone(view_model, &name)))
                }
                PreviewSegment::Value(value) => chars.extend(styled(&value, Tone::Plain)),
            }
        }

        let mut lines = hard_wrap_styled(&chars, width);
        if lines.len() > PREVIEW_ROWS as usize {
            lines.truncate(PREVIEW_ROWS as usize);
            if let Some(last) = lines.last_mut() {
                last.pop();
                last.push((ELLIPSIS, Tone::Muted));
            }
        }

        for offset in 0..PREVIEW_ROWS {
            let row = PREVIEW_ROW + offset;
            self.clear_row(row)?;
            if let Some(line) = lines.get(offset as usize) {
                self.print_styled(1, row, line)?;
            }
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_output(&mut self, view_model: &ViewModel) -> Result<()> {
        let Some(panel) = view_model.current_panel() else {
            return Ok(());
        };
        let header_row = layout::output_row(panel.parameters().len());
        let body_rows = layout::output_body_rows(self.terminal_size.1, panel.parameters().len());
        let result = panel.result();
        let lines = layout::output_lines(result.body(), self.terminal_size.0);
        let first = panel
            .output_scroll()
            .min(lines.len().saturating_sub(body_rows));

        let mut header = styled("Output", Tone::Bold);
        if panel.is_pending() {
            header.extend(styled("  ● generating", Tone::Accent(Color::Yellow)));
        }
        if view_model.is_verbose() {
            if let (Some(status), Some(duration)) = (result.status_code(), result.duration_ms()) {
                let color = if result.is_success() {
                    Color::Green
                } else {
                    Color::Red
                };
                header.extend(styled(
                    &format!("  {status} · {duration} ms"),
                    Tone::Accent(color),
                ));
            }
        }
        if lines.len() > body_rows && body_rows > 0 {
            let last = (first + body_rows).min(lines.len());
            header.extend(styled(
                &format!("  lines {}-{} of {}  PgUp/PgDn", first + 1, last, lines.len()),
                Tone::Muted,
            ));
        }
        header.truncate(self.width().saturating_sub(1));
        self.clear_row(header_row)?;
        self.print_styled(1, header_row, &header)?;

        for offset in 0..body_rows {
            let row = header_row + 1 + offset as u16;
            self.clear_row(row)?;
            if let Some(line) = lines.get(first + offset) {
                self.print_styled(1, row, &styled(line, Tone::Plain))?;
            }
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let status_row = layout::status_row(self.terminal_size.1);
        let width = self.width();
        self.clear_row(status_row)?;

        let status = view_model.status_line();
        let right = format!("[{}] {} ", status.profile_name(), status.base_url());
        let right_width = layout::display_width(&right);

        if let Some(message) = status.status_message() {
            let room = width.saturating_sub(right_width + 2);
            let message = sanitize_for_display(message).replace('\n', " ");
            let message = truncate_to_width(&message, room);
            self.print_styled(1, status_row, &styled(&message, Tone::Plain))?;
        }
        if right_width < width {
            let col = (width - right_width) as u16;
            self.print_styled(col, status_row, &styled(&right, Tone::Muted))?;
        }
        self.render_stream.flush()?;
        Ok(())
    }

    fn render_overlay(&mut self, view_model: &ViewModel) -> Result<()> {
        let Some(panel) = view_model.current_panel() else {
            return Ok(());
        };
        let Some(documentation) = panel.spec().documentation() else {
            return Ok(());
        };
        let (width, height) = self.terminal_size;
        let content = layout::overlay_content_box(width, height);
        if content.width < 4 || content.height < 4 {
            return Ok(());
        }

        let inner_width = content.width as usize - 2;
        let horizontal: String = "─".repeat(inner_width);
        self.print_styled(
            content.x,
            content.y,
            &styled(&format!("┌{horizontal}┐"), Tone::Muted),
        )?;
        for row in content.y + 1..content.bottom() - 1 {
            let mut line = styled("│", Tone::Muted);
            line.extend(styled(&" ".repeat(inner_width), Tone::Plain));
            line.extend(styled("│", Tone::Muted));
            self.print_styled(content.x, row, &line)?;
        }
        self.print_styled(
            content.x,
            content.bottom() - 1,
            &styled(&format!("└{horizontal}┘"), Tone::Muted),
        )?;

        let text_col = content.x + 2;
        let text_width = inner_width.saturating_sub(2);
        let first_row = content.y + 1;
        let close_row = content.bottom() - 2;

        let title = truncate_to_width(panel.name(), text_width);
        self.print_styled(text_col, first_row, &styled(&title, Tone::Bold))?;

        // Title, blank line, text, blank line, close hint
        let text_rows = close_row.saturating_sub(first_row + 2) as usize;
        let mut lines = Self::overlay_lines(view_model, documentation, text_width);
        if lines.len() > text_rows && text_rows > 0 {
            lines.truncate(text_rows);
            if let Some(last) = lines.last_mut() {
                last.truncate(text_width.saturating_sub(1));
                last.push((ELLIPSIS, Tone::Muted));
            }
        }
        for (offset, line) in lines.iter().take(text_rows).enumerate() {
            self.print_styled(text_col, first_row + 2 + offset as u16, line)?;
        }

        self.print_styled(text_col, close_row, &styled("[Esc] Close", Tone::Muted))?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.disable_mouse_capture()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::io::{MockRenderStream, RenderCommand};
    use crate::console::models::Catalog;
    use crate::console::view_models::ColorAllocator;

    fn view_model() -> ViewModel {
        ViewModel::new(
            &Catalog::builtin(),
            "https://rnd.bgenc.dev",
            ColorAllocator::new(),
        )
    }

    fn renderer() -> TerminalRenderer<MockRenderStream> {
        TerminalRenderer::with_render_stream(MockRenderStream::with_size((100, 30))).unwrap()
    }

    #[test]
    fn renderer_should_take_size_from_stream() {
        assert_eq!(renderer().terminal_size(), (100, 30));
    }

    #[test]
    fn initialize_and_cleanup_should_toggle_terminal_modes() {
        let mut renderer = renderer();

        renderer.initialize().unwrap();
        assert!(renderer.render_stream().is_raw_mode());
        assert!(renderer.render_stream().is_mouse_captured());

        renderer.cleanup().unwrap();
        assert!(!renderer.render_stream().is_raw_mode());
        assert!(!renderer.render_stream().is_alternate_screen());
        assert!(renderer.render_stream().is_cursor_visible());
    }

    #[test]
    fn full_render_should_show_endpoint_and_url() {
        let mut renderer = renderer();
        let vm = view_model();

        renderer.render_full(&vm).unwrap();
        let text = renderer.render_stream().visible_text();

        assert!(renderer
            .render_stream()
            .has_command(&RenderCommand::ClearScreen));
        assert!(text.contains("Integer"));
        assert!(text.contains("Returns a random integer"));
        assert!(text.contains("GET https://rnd.bgenc.dev/v1/int"));
        assert!(text.contains("min"));
        assert!(text.contains("Output"));
    }

    #[test]
    fn url_preview_should_show_set_parameters() {
        let mut renderer = renderer();
        let mut vm = view_model();
        vm.set_parameter_value(0, 0, "5");
        vm.set_parameter_value(0, 1, "10");

        renderer.render_url_preview(&vm).unwrap();

        assert!(renderer
            .render_stream()
            .visible_text()
            .contains("https://rnd.bgenc.dev/v1/int?min=5&max=10"));
    }

    #[test]
    fn keyword_should_be_drawn_in_its_color() {
        let mut renderer = renderer();
        let vm = view_model();
        let color = vm.keyword_color("min").unwrap();

        renderer.render_parameter(&vm, 0).unwrap();

        let mut expected = Vec::new();
        execute!(expected, SetForegroundColor(color), Print("min")).unwrap();
        let expected = String::from_utf8(expected).unwrap();
        assert!(renderer
            .render_stream()
            .get_buffer_string()
            .contains(&expected));
    }

    #[test]
    fn output_should_show_result_body() {
        let mut renderer = renderer();
        let mut vm = view_model();
        let ticket = vm.submit_current().unwrap();
        vm.apply_completion(crate::console::services::CompletedRequest {
            panel: ticket.panel,
            sequence: ticket.sequence,
            outcome: crate::console::services::RequestOutcome::Response {
                status_code: 200,
                body: "42".to_string(),
                duration_ms: 9,
            },
        });
        vm.set_verbose(true);

        renderer.render_output(&vm).unwrap();
        let text = renderer.render_stream().visible_text();

        assert!(text.contains("42"));
        assert!(text.contains("200 · 9 ms"));
    }

    fn vm_with_body(body: &str) -> ViewModel {
        let mut vm = view_model();
        let ticket = vm.submit_current().unwrap();
        vm.apply_completion(crate::console::services::CompletedRequest {
            panel: ticket.panel,
            sequence: ticket.sequence,
            outcome: crate::console::services::RequestOutcome::Response {
                status_code: 200,
                body: body.to_string(),
                duration_ms: 1,
            },
        });
        vm
    }

    #[test]
    fn output_should_not_pass_escape_sequences_through() {
        let mut renderer = renderer();
        let vm = vm_with_body("ok\x1b[2J\x1b]0;pwned\x07\r\nX");

        renderer.render_output(&vm).unwrap();
        let raw = renderer.render_stream().get_buffer_string();
        let text = renderer.render_stream().visible_text();

        assert!(!raw.contains("\x1b[2J"));
        assert!(!raw.contains("\x1b]0;"));
        assert!(!raw.contains('\x07'));
        assert!(!raw.contains('\r'));
        assert!(text.contains("ok"));
        assert!(text.contains('X'));
        assert_eq!(
            vm.current_panel().map(|p| p.result().body()),
            Some("ok\x1b[2J\x1b]0;pwned\x07\r\nX")
        );
    }

    #[test]
    fn status_bar_should_neutralize_control_characters() {
        let mut renderer = renderer();
        let mut vm = view_model();
        vm.set_status_message("Request failed: \x1b[31mred\x1b[0m\r\nnext");

        renderer.render_status_bar(&vm).unwrap();
        let raw = renderer.render_stream().get_buffer_string();

        assert!(!raw.contains("\x1b[31m"));
        assert!(!raw.contains('\r'));
        assert!(raw.contains("red"));
        assert!(raw.contains("next"));
    }

    #[test]
    fn long_output_should_show_window_from_scroll_offset() {
        let body = (1..=40).map(|n| format!("line{n}")).collect::<Vec<_>>().join("\n");
        let mut vm = vm_with_body(&body);
        vm.update_terminal_size(100, 30);

        // Two parameters leave fifteen body rows at height 30
        let mut top = renderer();
        top.render_output(&vm).unwrap();
        let text = top.render_stream().visible_text();
        assert!(text.contains("lines 1-15 of 40"));
        assert!(text.contains("line15"));
        assert!(!text.contains("line16"));

        vm.scroll_output(true);
        let mut paged = renderer();
        paged.render_output(&vm).unwrap();
        let text = paged.render_stream().visible_text();
        assert!(text.contains("lines 16-30 of 40"));
        assert!(text.contains("line16"));
        assert!(!text.contains("line15"));
    }

    #[test]
    fn full_render_should_show_license_footer() {
        let mut renderer = renderer();

        renderer.render_full(&view_model()).unwrap();
        let text = renderer.render_stream().visible_text();

        assert!(text.contains("licensed under AGPLv3"));
        assert!(text.contains("github.com/SeriousBug/random-api"));
    }

    #[test]
    fn overlay_should_render_documentation() {
        let mut renderer = renderer();
        let mut vm = view_model();
        vm.open_overlay();

        renderer.render_full(&vm).unwrap();
        let text = renderer.render_stream().visible_text();

        assert!(text.contains("[Esc] Close"));
        assert!(text.contains("The limits are inclusive of"));
    }

    #[test]
    fn status_bar_should_show_message_and_profile() {
        let mut renderer = renderer();
        let mut vm = view_model();
        vm.set_status_message("Copied https://rnd.bgenc.dev/v1/int");

        renderer.render_status_bar(&vm).unwrap();
        let text = renderer.render_stream().visible_text();

        assert!(text.contains("Copied https://rnd.bgenc.dev/v1/int"));
        assert!(text.contains("[default] https://rnd.bgenc.dev"));
    }
}
