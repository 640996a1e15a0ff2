//! # Keyword Color Allocation
//!
//! Every distinct keyword label (parameter names in the URL preview and
//! backticked words in documentation) gets one color for the whole session,
//! so the same name looks the same in every panel. Colors come from a fixed
//! palette and run out after eleven keywords.

use crate::console::errors::{ConsoleError, ConsoleResult};
use crossterm::style::Color;
use std::collections::HashMap;

/// Palette in declaration order. Colors are handed out from the end.
pub const DEFAULT_PALETTE: [Color; 11] = [
    Color::Red,
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Blue,
    // indigo
    Color::Rgb {
        r: 99,
        g: 102,
        b: 241,
    },
    // rose
    Color::Rgb {
        r: 244,
        g: 63,
        b: 94,
    },
    Color::Magenta,
    // pink
    Color::Rgb {
        r: 236,
        g: 72,
        b: 153,
    },
    Color::DarkCyan,
    // emerald
    Color::Rgb {
        r: 16,
        g: 185,
        b: 129,
    },
];

#[derive(Debug, Clone)]
pub struct ColorAllocator {
    available: Vec<Color>,
    capacity: usize,
    assignments: HashMap<String, Color>,
    /// Assignment order, for display
    order: Vec<String>,
}

impl ColorAllocator {
    pub fn new() -> Self {
        Self::with_palette(DEFAULT_PALETTE.to_vec())
    }

    pub fn with_palette(palette: Vec<Color>) -> Self {
        Self {
            capacity: palette.len(),
            available: palette,
            assignments: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Color bound to `keyword`, binding the next free one on first use
    pub fn color_for(&mut self, keyword: &str) -> ConsoleResult<Color> {
        if let Some(color) = self.assignments.get(keyword) {
            return Ok(*color);
        }

        let color = self
            .available
            .pop()
            .ok_or_else(|| ConsoleError::OutOfCapacity {
                keyword: keyword.to_string(),
                capacity: self.capacity,
            })?;

        tracing::debug!("Assigned {:?} to keyword '{}'", color, keyword);
        self.assignments.insert(keyword.to_string(), color);
        self.order.push(keyword.to_string());
        Ok(color)
    }

    /// Color already bound to `keyword`, without allocating
    pub fn assigned_color(&self, keyword: &str) -> Option<Color> {
        self.assignments.get(keyword).copied()
    }

    /// Keywords with their colors, in the order they were bound
    pub fn assigned(&self) -> Vec<(&str, Color)> {
        self.order
            .iter()
            .map(|keyword| (keyword.as_str(), self.assignments[keyword]))
            .collect()
    }

    pub fn assigned_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of colors still free
    pub fn remaining(&self) -> usize {
        self.available.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new()
    }
}
