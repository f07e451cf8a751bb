use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode,
};
use std::time::Duration;

use crate::command::{Command, HeldKeys, TickInput};
use crate::game::Scene;

/// Manages input polling and translates raw key events into game commands
pub struct InputManager {
    held: HeldKeys,
    oneshot_commands: Vec<Command>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    /// Creates a new InputManager with nothing held
    pub fn new() -> Self {
        Self {
            held: HeldKeys::default(),
            oneshot_commands: Vec::new(),
        }
    }

    /// Polls for all input events and stores one-shot commands
    /// Should be called once per frame before `tick_input`
    pub fn poll_events(&mut self, scene: Scene) -> color_eyre::Result<()> {
        // Clear previous one-shot commands
        self.oneshot_commands.clear();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event, scene);
            }
        }

        Ok(())
    }

    /// Processes a key event and updates held keys and one-shot commands
    pub fn handle_key_event(&mut self, key_event: KeyEvent, scene: Scene) {
        match key_event.kind {
            KeyEventKind::Press => {
                self.handle_key_press(key_event, scene);
            }
            KeyEventKind::Repeat => {
                self.track_held(key_event, scene);
            }
            KeyEventKind::Release => {
                self.handle_key_release(key_event);
            }
        }
    }

    /// Handles key press events
    fn handle_key_press(&mut self, key_event: KeyEvent, scene: Scene) {
        // Quit works in any scene
        if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key_event.code == KeyCode::Char('c')
                && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_commands.push(Command::Quit);
            return;
        }

        let command = match (scene, key_event.code) {
            (_, KeyCode::Esc) => Some(Command::Cancel),
            (_, KeyCode::Char(' ') | KeyCode::Enter) => Some(Command::Confirm),
            (Scene::Select, KeyCode::Char('z') | KeyCode::Char('Z')) => Some(Command::Confirm),
            (Scene::Select, KeyCode::Left) => Some(Command::SelectPrev),
            (Scene::Select, KeyCode::Right) => Some(Command::SelectNext),
            (Scene::Playing, KeyCode::Char('x') | KeyCode::Char('X')) => {
                Some(Command::ToggleMode)
            }
            (Scene::GameOver, KeyCode::Char('r') | KeyCode::Char('R')) => Some(Command::Retry),
            _ => None,
        };
        if let Some(command) = command {
            self.oneshot_commands.push(command);
        }

        self.track_held(key_event, scene);
    }

    /// Continuous keys are only tracked while playing
    fn track_held(&mut self, key_event: KeyEvent, scene: Scene) {
        if scene != Scene::Playing {
            return;
        }
        // Presses carry the live modifier state
        self.held.slow = key_event.modifiers.contains(KeyModifiers::SHIFT);

        match key_event.code {
            KeyCode::Up => {
                self.held.up = true;
                self.held.down = false;
            }
            KeyCode::Down => {
                self.held.down = true;
                self.held.up = false;
            }
            KeyCode::Left => {
                self.held.left = true;
                self.held.right = false;
            }
            KeyCode::Right => {
                self.held.right = true;
                self.held.left = false;
            }
            KeyCode::Char('z') | KeyCode::Char('Z') => {
                self.held.fire = true;
            }
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                self.held.slow = true;
            }
            _ => {}
        }
    }

    /// Handles key release events
    fn handle_key_release(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Up => {
                self.held.up = false;
            }
            KeyCode::Down => {
                self.held.down = false;
            }
            KeyCode::Left => {
                self.held.left = false;
            }
            KeyCode::Right => {
                self.held.right = false;
            }
            KeyCode::Char('z') | KeyCode::Char('Z') => {
                self.held.fire = false;
            }
            KeyCode::Modifier(ModifierKeyCode::LeftShift | ModifierKeyCode::RightShift) => {
                self.held.slow = false;
            }
            _ => {}
        }
        if !key_event.modifiers.contains(KeyModifiers::SHIFT)
            && !matches!(key_event.code, KeyCode::Modifier(_))
        {
            self.held.slow = false;
        }
    }

    pub fn held(&self) -> HeldKeys {
        self.held
    }

    /// Builds this frame's input for the simulation
    /// Must be called after poll_events()
    pub fn tick_input(&self, now: u64) -> TickInput {
        TickInput {
            now,
            held: self.held,
            commands: self.oneshot_commands.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
    }

    #[test]
    fn test_quit_in_any_scene() {
        for scene in [Scene::Title, Scene::Select, Scene::Playing, Scene::GameOver] {
            let mut input = InputManager::new();
            input.handle_key_event(press(KeyCode::Char('q')), scene);
            assert_eq!(input.tick_input(0).commands, vec![Command::Quit]);
        }
        let mut input = InputManager::new();
        input.handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Scene::Playing,
        );
        assert_eq!(input.tick_input(0).commands, vec![Command::Quit]);
    }

    #[test]
    fn test_select_scene_arrows_are_commands() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Left), Scene::Select);
        input.handle_key_event(press(KeyCode::Right), Scene::Select);
        input.handle_key_event(press(KeyCode::Char('z')), Scene::Select);
        let tick = input.tick_input(0);
        assert_eq!(
            tick.commands,
            vec![Command::SelectPrev, Command::SelectNext, Command::Confirm]
        );
        assert_eq!(tick.held, HeldKeys::default());
    }

    #[test]
    fn test_playing_keys_are_held_until_release() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Left), Scene::Playing);
        input.handle_key_event(press(KeyCode::Char('z')), Scene::Playing);
        let held = input.held();
        assert!(held.left && held.fire);
        assert!(input.tick_input(0).commands.is_empty());

        input.handle_key_event(release(KeyCode::Left), Scene::Playing);
        let held = input.held();
        assert!(!held.left && held.fire);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Up), Scene::Playing);
        input.handle_key_event(press(KeyCode::Down), Scene::Playing);
        let held = input.held();
        assert!(held.down && !held.up);
    }

    #[test]
    fn test_shift_modifier_slows() {
        let mut input = InputManager::new();
        input.handle_key_event(
            press(KeyCode::Modifier(ModifierKeyCode::LeftShift)),
            Scene::Playing,
        );
        assert!(input.held().slow);
        input.handle_key_event(
            release(KeyCode::Modifier(ModifierKeyCode::LeftShift)),
            Scene::Playing,
        );
        assert!(!input.held().slow);

        input.handle_key_event(
            KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT),
            Scene::Playing,
        );
        assert!(input.held().slow && input.held().right);
    }

    #[test]
    fn test_slow_clears_on_unshifted_press() {
        let mut input = InputManager::new();
        input.handle_key_event(
            KeyEvent::new(KeyCode::Left, KeyModifiers::SHIFT),
            Scene::Playing,
        );
        assert!(input.held().slow);

        // No release event in between, as on terminals without enhancement
        input.handle_key_event(press(KeyCode::Left), Scene::Playing);
        assert!(!input.held().slow);
        assert!(input.held().left);
    }

    #[test]
    fn test_scene_specific_commands() {
        let mut input = InputManager::new();
        input.handle_key_event(press(KeyCode::Char('x')), Scene::Playing);
        input.handle_key_event(press(KeyCode::Char('r')), Scene::GameOver);
        input.handle_key_event(press(KeyCode::Esc), Scene::Select);
        input.handle_key_event(press(KeyCode::Char(' ')), Scene::Title);
        // Retry only means something on the game over screen
        input.handle_key_event(press(KeyCode::Char('r')), Scene::Playing);
        assert_eq!(
            input.tick_input(5).commands,
            vec![
                Command::ToggleMode,
                Command::Retry,
                Command::Cancel,
                Command::Confirm
            ]
        );
        assert_eq!(input.tick_input(5).now, 5);
    }
}
