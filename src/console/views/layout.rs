//! # Screen Layout
//!
//! Row assignments of the console screen and the text wrapping used to fit
//! content into them. Everything here is pure so that the renderer and the
//! view model agree on where things are.

use crate::console::geometry::Rect;
use unicode_width::UnicodeWidthChar;

pub const HEADER_ROW: u16 = 0;
pub const TITLE_ROW: u16 = 2;
pub const SUBTITLE_ROW: u16 = 3;
pub const PREVIEW_ROW: u16 = 5;
/// Rows reserved for the URL preview; longer URLs are cut with an ellipsis
pub const PREVIEW_ROWS: u16 = 2;
pub const PARAMETERS_ROW: u16 = PREVIEW_ROW + PREVIEW_ROWS + 1;
/// Width of the parameter name column
pub const LABEL_WIDTH: usize = 12;

pub const ELLIPSIS: char = '…';

/// Row of parameter `index`
pub fn parameter_row(index: usize) -> u16 {
    PARAMETERS_ROW.saturating_add(index as u16)
}

/// Row of the output header, below the last parameter
pub fn output_row(parameter_count: usize) -> u16 {
    parameter_row(parameter_count).saturating_add(1)
}

pub fn hint_row(height: u16) -> u16 {
    height.saturating_sub(3)
}

pub fn footer_row(height: u16) -> u16 {
    height.saturating_sub(2)
}

pub fn status_row(height: u16) -> u16 {
    height.saturating_sub(1)
}

/// Rows available to the response body below the output header
pub fn output_body_rows(height: u16, parameter_count: usize) -> usize {
    hint_row(height).saturating_sub(output_row(parameter_count).saturating_add(1)) as usize
}

/// Response body as the output region shows it, one entry per screen row
pub fn output_lines(body: &str, terminal_width: u16) -> Vec<String> {
    hard_wrap(
        &sanitize_for_display(body),
        (terminal_width as usize).saturating_sub(2),
    )
}

/// Rectangle of the documentation dialog. Anything outside is backdrop.
pub fn overlay_content_box(width: u16, height: u16) -> Rect {
    let margin_x = (width / 10).max(2);
    let margin_y = (height / 8).max(1);
    Rect::new(
        margin_x,
        margin_y,
        width.saturating_sub(margin_x.saturating_mul(2)),
        height.saturating_sub(margin_y.saturating_mul(2)),
    )
}

/// Make untrusted text safe to print. CRLF becomes LF, tabs become a
/// space and every other control character becomes U+FFFD, so nothing
/// but newlines can reach the terminal as a control sequence.
pub fn sanitize_for_display(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => out.push('\n'),
            '\t' => out.push(' '),
            c if c.is_control() => out.push(char::REPLACEMENT_CHARACTER),
            c => out.push(c),
        }
    }
    out
}

pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Greedy word wrap of styled characters. Newlines always break; words
/// longer than `width` are split.
pub fn wrap_styled<S: Copy>(chars: &[(char, S)], width: usize) -> Vec<Vec<(char, S)>> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut line: Vec<(char, S)> = Vec::new();
    let mut line_width = 0;

    for &(ch, style) in chars {
        if ch == '\n' {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
            continue;
        }

        let w = char_width(ch);
        if line_width + w > width {
            if ch == ' ' {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
                continue;
            }
            match line.iter().rposition(|(c, _)| *c == ' ') {
                Some(space) => {
                    let rest = line.split_off(space + 1);
                    line.pop();
                    lines.push(std::mem::replace(&mut line, rest));
                    line_width = line.iter().map(|(c, _)| char_width(*c)).sum();
                }
                None => {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
            }
        }

        line.push((ch, style));
        line_width += w;
    }

    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Word wrap plain text
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<(char, ())> = text.chars().map(|c| (c, ())).collect();
    wrap_styled(&chars, width)
        .into_iter()
        .map(|line| line.into_iter().map(|(c, _)| c).collect())
        .collect()
}

/// Break styled text at exactly `width` columns, ignoring word boundaries.
/// Every newline starts a new line, so the result is never empty.
pub fn hard_wrap_styled<S: Copy>(chars: &[(char, S)], width: usize) -> Vec<Vec<(char, S)>> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut line: Vec<(char, S)> = Vec::new();
    let mut line_width = 0;
    for &(ch, style) in chars {
        if ch == '\n' {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
            continue;
        }
        let w = char_width(ch);
        if line_width + w > width {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        line.push((ch, style));
        line_width += w;
    }
    lines.push(line);
    lines
}

/// Break text at exactly `width` columns, ignoring word boundaries
pub fn hard_wrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<(char, ())> = text.chars().map(|c| (c, ())).collect();
    hard_wrap_styled(&chars, width)
        .into_iter()
        .map(|line| line.into_iter().map(|(c, _)| c).collect())
        .collect()
}

/// Cut `text` to `width` columns, marking the cut with an ellipsis
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = char_width(ch);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push(ELLIPSIS);
    out
}
