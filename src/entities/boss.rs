use super::bullet::Bullet;
use super::{Field, Hitbox};
use crate::consts::{
    BOSS_BATTLE_DEPTH, BOSS_BULLET_SPEED, BOSS_ENTRY_SPEED, BOSS_HP_PER_LEVEL, BOSS_SIZE,
    BOSS_SPAWN_CENTER_Y, BOSS_SWAY_AMPLITUDE, BOSS_SWAY_RATE, BOSS_VOLLEY_SPREAD_DEG,
    BOSS_VOLLEY_STEP_DEG, BOSS_VOLLEY_TICKS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BossPhase {
    /// Descending into view; no shots
    Entry,
    /// Swaying and firing rotating volleys
    Battle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Boss {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub level: u32,
    pub max_hp: u32,
    pub hp: u32,
    pub phase: BossPhase,
    /// Rotation of the volley pattern in degrees
    pub angle: f32,
    /// Ticks spent in the battle phase
    pub timer: u32,
}

impl Boss {
    pub fn new(level: u32, field: &Field) -> Self {
        let hitbox = Hitbox::from_center(field.center_x(), BOSS_SPAWN_CENTER_Y, BOSS_SIZE, BOSS_SIZE);
        let max_hp = BOSS_HP_PER_LEVEL * level;
        Self {
            x: hitbox.x,
            y: hitbox.y,
            level,
            max_hp,
            hp: max_hp,
            phase: BossPhase::Entry,
            angle: 0.0,
            timer: 0,
        }
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, BOSS_SIZE, BOSS_SIZE)
    }

    pub fn center(&self) -> (f32, f32) {
        self.hitbox().center()
    }

    /// Advances one tick and returns any bullets fired
    pub fn update(&mut self, field: &Field) -> Vec<Bullet> {
        match self.phase {
            BossPhase::Entry => {
                self.y += BOSS_ENTRY_SPEED;
                if self.y >= BOSS_BATTLE_DEPTH {
                    self.phase = BossPhase::Battle;
                }
                vec![]
            }
            BossPhase::Battle => {
                self.timer += 1;
                // Sway moves the left edge, not the centre
                self.x = field.center_x()
                    + (self.timer as f32 * BOSS_SWAY_RATE).sin() * BOSS_SWAY_AMPLITUDE;

                if self.timer.is_multiple_of(BOSS_VOLLEY_TICKS) {
                    self.volley()
                } else {
                    vec![]
                }
            }
        }
    }

    /// Rotates the pattern by one step and fires four bullets 90° apart
    pub fn volley(&mut self) -> Vec<Bullet> {
        self.angle += BOSS_VOLLEY_STEP_DEG;
        let (center_x, center_y) = self.center();
        BOSS_VOLLEY_SPREAD_DEG
            .iter()
            .map(|offset| Bullet::radial(center_x, center_y, self.angle + offset, BOSS_BULLET_SPEED))
            .collect()
    }

    /// Registers one bullet hit. Hit points stop at zero.
    /// Returns true once the boss is defeated.
    pub fn take_hit(&mut self) -> bool {
        self.hp = self.hp.saturating_sub(1);
        self.is_defeated()
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
