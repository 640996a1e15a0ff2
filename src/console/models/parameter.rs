//! # Parameter Model
//!
//! One typed form field of an endpoint together with the value the user
//! has entered so far. Values are raw strings; numeric hints such as `step`
//! are advisory and never validated here.

use crate::console::errors::{ConsoleError, ConsoleResult};
use serde::{Deserialize, Serialize};

/// Characters accepted by number inputs
const NUMERIC_ENTRY_CHARS: &[char] = &['+', '-', '.', 'e', 'E'];

/// Catalog declaration of a parameter, as read from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDecl {
    pub name: String,
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

/// Discriminant of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Text,
    Number,
    Choice,
}

impl ParameterKind {
    /// Parse the catalog spelling of a kind
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "text" => Some(Self::Text),
            "number" => Some(Self::Number),
            "enum" => Some(Self::Choice),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Choice => "enum",
        }
    }
}

/// A typed, named input field bound to one endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parameter {
    Text {
        name: String,
        value: Option<String>,
    },
    Number {
        name: String,
        step: Option<String>,
        value: Option<String>,
    },
    Choice {
        name: String,
        options: Vec<String>,
        value: Option<String>,
    },
}

impl Parameter {
    pub fn text(name: impl Into<String>) -> Self {
        Self::Text {
            name: name.into(),
            value: None,
        }
    }

    pub fn number(name: impl Into<String>, step: Option<&str>) -> Self {
        Self::Number {
            name: name.into(),
            step: step.map(str::to_string),
            value: None,
        }
    }

    pub fn choice<S: AsRef<str>>(name: impl Into<String>, options: &[S]) -> Self {
        Self::Choice {
            name: name.into(),
            options: options.iter().map(|o| o.as_ref().to_string()).collect(),
            value: None,
        }
    }

    /// Build a parameter from its catalog declaration, with no value.
    ///
    /// This is the only place an unknown kind can show up; once constructed
    /// a `Parameter` is always one of the three known variants.
    pub fn create(decl: ParameterDecl) -> ConsoleResult<Self> {
        let kind =
            ParameterKind::parse(&decl.kind).ok_or_else(|| ConsoleError::UnknownParameterKind {
                name: decl.name.clone(),
                kind: decl.kind.clone(),
            })?;

        Ok(match kind {
            ParameterKind::Text => Self::Text {
                name: decl.name,
                value: None,
            },
            ParameterKind::Number => Self::Number {
                name: decl.name,
                step: decl.step,
                value: None,
            },
            ParameterKind::Choice => Self::Choice {
                name: decl.name,
                options: decl.options,
                value: None,
            },
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::Number { name, .. } | Self::Choice { name, .. } => name,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Text { value, .. } | Self::Number { value, .. } | Self::Choice { value, .. } => {
                value.as_deref()
            }
        }
    }

    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Text { .. } => ParameterKind::Text,
            Self::Number { .. } => ParameterKind::Number,
            Self::Choice { .. } => ParameterKind::Choice,
        }
    }

    /// Stable element identifier, `param-<name>`
    pub fn id(&self) -> String {
        format!("param-{}", self.name())
    }

    /// True iff a non-empty value is present
    pub fn is_set(&self) -> bool {
        self.value().is_some_and(|v| !v.is_empty())
    }

    /// Options of a choice parameter; empty for other kinds
    pub fn options(&self) -> &[String] {
        match self {
            Self::Choice { options, .. } => options,
            _ => &[],
        }
    }

    /// Copy of this parameter with the value replaced. An empty value clears it.
    pub fn with_value(&self, new_value: impl Into<String>) -> Self {
        let new_value = new_value.into();
        let new_value = (!new_value.is_empty()).then_some(new_value);

        let mut replaced = self.clone();
        match &mut replaced {
            Self::Text { value, .. } | Self::Number { value, .. } | Self::Choice { value, .. } => {
                *value = new_value
            }
        }
        replaced
    }

    /// Copy of this parameter with no value
    pub fn cleared(&self) -> Self {
        self.with_value(String::new())
    }

    /// Whether the input widget for this kind accepts the typed character
    pub fn accepts(&self, ch: char) -> bool {
        match self {
            Self::Text { .. } => !ch.is_control(),
            Self::Number { .. } => ch.is_ascii_digit() || NUMERIC_ENTRY_CHARS.contains(&ch),
            Self::Choice { .. } => false,
        }
    }

    /// Parameter with `ch` appended, or `None` when the widget rejects it
    pub fn typed(&self, ch: char) -> Option<Self> {
        if !self.accepts(ch) {
            return None;
        }
        let mut value = self.value().unwrap_or_default().to_string();
        value.push(ch);
        Some(self.with_value(value))
    }

    /// Parameter with the last character removed, or `None` when already empty
    pub fn backspaced(&self) -> Option<Self> {
        if matches!(self, Self::Choice { .. }) {
            return None;
        }
        let mut value = self.value()?.to_string();
        value.pop();
        Some(self.with_value(value))
    }

    /// Step through `[unset, options...]`, wrapping around.
    ///
    /// Returns `None` for kinds other than choice.
    pub fn cycle_option(&self, forward: bool) -> Option<Self> {
        let Self::Choice { options, .. } = self else {
            return None;
        };

        // Slot 0 is the implicit empty choice
        let slots = options.len() + 1;
        let current = self
            .value()
            .and_then(|v| options.iter().position(|o| o == v))
            .map_or(0, |i| i + 1);
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };

        Some(match next {
            0 => self.cleared(),
            i => self.with_value(options[i - 1].clone()),
        })
    }

    /// Short hint describing what the input expects
    pub fn input_hint(&self) -> String {
        match self {
            Self::Text { .. } => "text".to_string(),
            Self::Number { step: Some(step), .. } => format!("number, step {step}"),
            Self::Number { step: None, .. } => "number".to_string(),
            Self::Choice { options, .. } => options.join(" | "),
        }
    }
}
