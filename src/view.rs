//! Per-tick output handed to the renderer

use crate::entities::{BulletVariant, EnemyKind, FireMode, Hitbox, PlayerKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Player,
    Enemy,
    Boss,
    PlayerBullet,
    EnemyBullet,
}

/// What an entity should look like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    Player(PlayerKind),
    Enemy(EnemyKind),
    Boss,
    Bullet(BulletVariant),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityView {
    pub category: EntityCategory,
    pub visual: Visual,
    pub hitbox: Hitbox,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayingView {
    pub entities: Vec<EntityView>,
    pub score: u32,
    pub boss_active: bool,
    /// (current, max) hit points while a boss is active
    pub boss_hp: Option<(u32, u32)>,
    /// Points left before the next boss; `None` during a boss fight
    pub next_boss_in: Option<u32>,
    /// Fire mode of the Switching character
    pub fire_mode: Option<FireMode>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneView {
    Title,
    Select { selected: PlayerKind },
    Playing(PlayingView),
    GameOver { final_score: u32 },
}
