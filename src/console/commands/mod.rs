//! # Command Pattern Implementation
//!
//! Key bindings of the console. Each command owns one action: it decides
//! from a `CommandContext` whether a key is its own and answers with the
//! `CommandEvent`s the controller should apply. Commands never mutate state.

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod context;
pub mod editing;
pub mod events;
pub mod navigation;
pub mod overlay;
pub mod request;

pub use app::AppTerminateCommand;
pub use context::CommandContext;
pub use editing::{BackspaceCommand, CycleChoiceCommand, InsertCharCommand};
pub use events::CommandEvent;
pub use navigation::{FieldFocusCommand, ScrollOutputCommand, SwitchPanelCommand};
pub use overlay::{CloseOverlayCommand, OpenOverlayCommand};
pub use request::{CopyUrlCommand, SubmitRequestCommand};

/// Trait for handling one key binding
pub trait Command: Send + Sync {
    /// Check if this command handles `event` in the given context
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Translate the key into the changes it requests
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Get command name for debugging and logging
    fn name(&self) -> &'static str;
}

/// Type alias for the registered commands
type CommandCollection = Vec<Box<dyn Command>>;

/// Registry that dispatches a key to the first relevant command
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    /// Register all default commands. Order matters: the first relevant wins.
    fn register_default_commands(&mut self) {
        self.add_command(Box::new(AppTerminateCommand));

        // The overlay claims its keys before anything else
        self.add_command(Box::new(CloseOverlayCommand));
        self.add_command(Box::new(OpenOverlayCommand));

        self.add_command(Box::new(FieldFocusCommand));
        self.add_command(Box::new(SwitchPanelCommand));
        self.add_command(Box::new(ScrollOutputCommand));

        self.add_command(Box::new(SubmitRequestCommand));
        self.add_command(Box::new(CopyUrlCommand));

        self.add_command(Box::new(InsertCharCommand));
        self.add_command(Box::new(BackspaceCommand));
        self.add_command(Box::new(CycleChoiceCommand));
    }

    /// Add a command to the registry
    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Process a key event through all commands
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                return command.execute(event, context);
            }
        }
        tracing::trace!("No command for key {:?}", event.code);
        Ok(Vec::new())
    }

    /// Get all commands (for testing/debugging)
    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
