use super::bullet::Bullet;
use super::{Field, Hitbox};
use crate::consts::{
    AIMED_SHOT_SPEED, ENEMY_SIZE, ENEMY_SPAWN_Y, SHOOTER_FIRE_TICKS, WAVY_AMPLITUDE,
    WAVY_PHASE_STEP,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Normal,
    Wavy,
    Shooter,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Normal, EnemyKind::Wavy, EnemyKind::Shooter];

    /// Downward speed in field units per tick
    pub fn speed(self) -> f32 {
        match self {
            EnemyKind::Normal => 3.0,
            EnemyKind::Wavy => 2.0,
            EnemyKind::Shooter => 1.0,
        }
    }
}

/// Variant-specific timers
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnemyState {
    Normal,
    Wavy { phase: f32 },
    Shooter { timer: u32 },
}

/// Horizontal displacement applied to a wavy enemy at the given phase
pub fn wavy_offset(phase: f32) -> f32 {
    WAVY_AMPLITUDE * phase.sin()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub state: EnemyState,
}

impl Enemy {
    /// Creates an enemy just above the top edge with its left edge at `x`
    pub fn new(kind: EnemyKind, x: f32) -> Self {
        let state = match kind {
            EnemyKind::Normal => EnemyState::Normal,
            EnemyKind::Wavy => EnemyState::Wavy { phase: 0.0 },
            EnemyKind::Shooter => EnemyState::Shooter { timer: 0 },
        };
        Self {
            x,
            y: ENEMY_SPAWN_Y,
            state,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        match self.state {
            EnemyState::Normal => EnemyKind::Normal,
            EnemyState::Wavy { .. } => EnemyKind::Wavy,
            EnemyState::Shooter { .. } => EnemyKind::Shooter,
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    pub fn center(&self) -> (f32, f32) {
        self.hitbox().center()
    }

    /// Advances one tick. `target` is the player's centre, if a player exists.
    /// Returns the aimed shot a shooter fires this tick.
    pub fn update(&mut self, target: Option<(f32, f32)>) -> Option<Bullet> {
        self.y += self.kind().speed();

        match &mut self.state {
            EnemyState::Normal => None,
            EnemyState::Wavy { phase } => {
                *phase += WAVY_PHASE_STEP;
                self.x += wavy_offset(*phase);
                None
            }
            EnemyState::Shooter { timer } => {
                *timer += 1;
                if *timer < SHOOTER_FIRE_TICKS {
                    return None;
                }
                *timer = 0;
                // No player, no shot
                let from = self.hitbox().center();
                target.map(|target| Bullet::aimed(from, target, AIMED_SHOT_SPEED))
            }
        }
    }

    /// True once the top edge has passed the bottom of the field
    pub fn is_off_field(&self, field: &Field) -> bool {
        self.y > field.height
    }
}
