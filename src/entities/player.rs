use super::bullet::{Bullet, BulletVariant};
use super::{Field, Hitbox};
use crate::consts::{
    FIRE_INTERVAL, PLAYER_BULLET_SPEED, PLAYER_SIZE, PLAYER_SPAWN_OFFSET, RAPID_FIRE_INTERVAL,
    SPREAD_ANGLES, TOGGLE_COOLDOWN, TWIN_ANGLES,
};

/// Selectable characters, in select-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Balanced,
    Fast,
    Switching,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 3] = [PlayerKind::Balanced, PlayerKind::Fast, PlayerKind::Switching];

    /// Wraps any index onto the character list
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            PlayerKind::Balanced => 0,
            PlayerKind::Fast => 1,
            PlayerKind::Switching => 2,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            PlayerKind::Balanced => "Type A: Balanced",
            PlayerKind::Fast => "Type B: Fast",
            PlayerKind::Switching => "Type C: Switching",
        }
    }

    pub fn speed(self) -> f32 {
        match self {
            PlayerKind::Balanced => 5.0,
            PlayerKind::Fast => 8.0,
            PlayerKind::Switching => 5.0,
        }
    }

    pub fn bullet_variant(self) -> BulletVariant {
        match self {
            PlayerKind::Balanced => BulletVariant::Cyan,
            PlayerKind::Fast => BulletVariant::LightRed,
            PlayerKind::Switching => BulletVariant::Yellow,
        }
    }
}

/// Fire mode of the Switching character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireMode {
    /// One bullet straight up, fast cadence
    Single,
    /// Two bullets at ±10°, normal cadence
    Twin,
}

impl FireMode {
    pub fn toggled(self) -> Self {
        match self {
            FireMode::Single => FireMode::Twin,
            FireMode::Twin => FireMode::Single,
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            FireMode::Single => "1-WAY",
            FireMode::Twin => "2-WAY",
        }
    }
}

/// Per-character state. Only the Switching character carries extra fields.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerVariant {
    Balanced,
    Fast,
    Switching {
        mode: FireMode,
        last_toggle: Option<u64>,
    },
}

impl PlayerVariant {
    pub fn for_kind(kind: PlayerKind) -> Self {
        match kind {
            PlayerKind::Balanced => PlayerVariant::Balanced,
            PlayerKind::Fast => PlayerVariant::Fast,
            PlayerKind::Switching => PlayerVariant::Switching {
                mode: FireMode::Twin,
                last_toggle: None,
            },
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            PlayerVariant::Balanced => PlayerKind::Balanced,
            PlayerVariant::Fast => PlayerKind::Fast,
            PlayerVariant::Switching { .. } => PlayerKind::Switching,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub variant: PlayerVariant,
    /// Clock value of the last shot; `None` until the first one
    pub last_shot: Option<u64>,
}

impl Player {
    /// Spawns the chosen character near the bottom centre of the field
    pub fn new(kind: PlayerKind, field: &Field) -> Self {
        let hitbox = Hitbox::from_center(
            field.center_x(),
            field.height - PLAYER_SPAWN_OFFSET,
            PLAYER_SIZE,
            PLAYER_SIZE,
        );
        Self {
            x: hitbox.x,
            y: hitbox.y,
            variant: PlayerVariant::for_kind(kind),
            last_shot: None,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        self.variant.kind()
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }

    pub fn center(&self) -> (f32, f32) {
        self.hitbox().center()
    }

    pub fn fire_mode(&self) -> Option<FireMode> {
        match self.variant {
            PlayerVariant::Switching { mode, .. } => Some(mode),
            _ => None,
        }
    }

    /// Speed for this tick; the slow modifier halves it without changing state
    pub fn current_speed(&self, slow: bool) -> f32 {
        let speed = self.kind().speed();
        if slow { speed / 2.0 } else { speed }
    }

    pub fn move_left(&mut self, speed: f32) {
        self.x = (self.x - speed).max(0.0);
    }

    pub fn move_right(&mut self, speed: f32, field: &Field) {
        self.x = (self.x + speed).min(field.width - PLAYER_SIZE);
    }

    pub fn move_up(&mut self, speed: f32) {
        self.y = (self.y - speed).max(0.0);
    }

    pub fn move_down(&mut self, speed: f32, field: &Field) {
        self.y = (self.y + speed).min(field.height - PLAYER_SIZE);
    }

    pub fn fire_interval(&self) -> u64 {
        match self.variant {
            PlayerVariant::Switching {
                mode: FireMode::Single,
                ..
            } => RAPID_FIRE_INTERVAL,
            _ => FIRE_INTERVAL,
        }
    }

    pub fn can_fire(&self, now: u64) -> bool {
        self.last_shot
            .is_none_or(|last| now.saturating_sub(last) >= self.fire_interval())
    }

    /// Attempts to fire if the cooldown allows.
    /// Returns the new bullets, or an empty vec while cooling down.
    pub fn try_fire(&mut self, now: u64) -> Vec<Bullet> {
        if !self.can_fire(now) {
            return vec![];
        }
        self.last_shot = Some(now);

        let angles: &[f32] = match self.variant {
            PlayerVariant::Balanced | PlayerVariant::Fast => &SPREAD_ANGLES,
            PlayerVariant::Switching {
                mode: FireMode::Twin,
                ..
            } => &TWIN_ANGLES,
            PlayerVariant::Switching {
                mode: FireMode::Single,
                ..
            } => &[0.0],
        };

        let hitbox = self.hitbox();
        let (center_x, _) = hitbox.center();
        let variant = self.kind().bullet_variant();
        angles
            .iter()
            .map(|&angle| {
                Bullet::player_shot(center_x, hitbox.top(), angle, PLAYER_BULLET_SPEED, variant)
            })
            .collect()
    }

    /// Flips the Switching character's fire mode, at most once per toggle cooldown.
    /// Returns whether the mode changed; always false for the other characters.
    pub fn toggle_mode(&mut self, now: u64) -> bool {
        match &mut self.variant {
            PlayerVariant::Switching { mode, last_toggle } => {
                let ready = last_toggle.is_none_or(|last| now.saturating_sub(last) >= TOGGLE_COOLDOWN);
                if ready {
                    *mode = mode.toggled();
                    *last_toggle = Some(now);
                }
                ready
            }
            _ => false,
        }
    }
}
