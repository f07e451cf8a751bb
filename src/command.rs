//! Input vocabulary consumed by the simulation core.
//!
//! The terminal layer decodes raw key events into these; the core never sees a
//! physical key.

/// Discrete commands, delivered once per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleMode,
    SelectPrev,
    SelectNext,
    Confirm,
    Cancel,
    Retry,
    Quit,
}

/// Continuous commands, active for as long as the key is held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub slow: bool,
    pub fire: bool,
}

/// Everything the core needs to advance one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Monotonic logical clock value used for cooldowns
    pub now: u64,
    pub held: HeldKeys,
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn new(now: u64) -> Self {
        Self {
            now,
            ..Self::default()
        }
    }

    pub fn with_held(mut self, held: HeldKeys) -> Self {
        self.held = held;
        self
    }

    pub fn with_command(mut self, command: Command) -> Self {
        self.commands.push(command);
        self
    }
}
