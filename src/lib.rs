//! Danmaku Shooter - a top-down arcade shooter for the terminal
//!
//! Core modules:
//! - `entities`: actor types and their per-tick movement rules
//! - `world`: the entity registry owning every live actor
//! - `movement`, `spawn`, `collision`: the simulation passes run each tick
//! - `game`: the scene state machine tying the passes together
//!
//! `input`, `renderer` and `app` are the terminal front-end around the core.

pub mod app;
pub mod clock;
pub mod collision;
pub mod command;
pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod movement;
pub mod renderer;
pub mod spawn;
pub mod view;
pub mod world;

// Library exports for testing
pub use command::{Command, HeldKeys, TickInput};
pub use config::GameConfig;
pub use entities::{
    Boss, BossPhase, Bullet, BulletOwner, BulletVariant, Enemy, EnemyKind, Field, FireMode,
    Hitbox, Player, PlayerKind,
};
pub use game::{Game, RunState, Scene};
pub use view::{EntityCategory, EntityView, PlayingView, SceneView, Visual};
pub use world::World;

/// Gameplay constants. Field dimensions, frame rate, spawn chance and the boss
/// interval are defaults for [`GameConfig`]; everything else is fixed.
pub mod consts {
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 800.0;
    pub const FRAME_RATE: u32 = 60;
    /// Bullets survive this far past any field edge
    pub const OFFSCREEN_MARGIN: f32 = 50.0;

    pub const PLAYER_SIZE: f32 = 30.0;
    /// Player spawns centred this far above the field bottom
    pub const PLAYER_SPAWN_OFFSET: f32 = 50.0;
    pub const PLAYER_BULLET_SIZE: f32 = 10.0;
    pub const PLAYER_BULLET_SPEED: f32 = 10.0;
    /// Clock units between shots for spread and 2-way fire
    pub const FIRE_INTERVAL: u64 = 80;
    /// Clock units between shots in 1-way mode
    pub const RAPID_FIRE_INTERVAL: u64 = 20;
    pub const TOGGLE_COOLDOWN: u64 = 300;
    pub const SPREAD_ANGLES: [f32; 3] = [-15.0, 0.0, 15.0];
    pub const TWIN_ANGLES: [f32; 2] = [-10.0, 10.0];

    pub const ENEMY_SIZE: f32 = 30.0;
    pub const ENEMY_SPAWN_Y: f32 = -50.0;
    pub const ENEMY_BULLET_SIZE: f32 = 8.0;
    pub const WAVY_PHASE_STEP: f32 = 0.1;
    pub const WAVY_AMPLITUDE: f32 = 5.0;
    pub const SHOOTER_FIRE_TICKS: u32 = 120;
    pub const AIMED_SHOT_SPEED: f32 = 5.0;

    pub const BOSS_SIZE: f32 = 60.0;
    pub const BOSS_SPAWN_CENTER_Y: f32 = -100.0;
    pub const BOSS_HP_PER_LEVEL: u32 = 100;
    pub const BOSS_ENTRY_SPEED: f32 = 2.0;
    /// Top edge depth at which the boss stops its entry and starts fighting
    pub const BOSS_BATTLE_DEPTH: f32 = 100.0;
    pub const BOSS_SWAY_AMPLITUDE: f32 = 150.0;
    pub const BOSS_SWAY_RATE: f32 = 0.05;
    pub const BOSS_VOLLEY_TICKS: u32 = 5;
    pub const BOSS_VOLLEY_STEP_DEG: f32 = 12.0;
    pub const BOSS_VOLLEY_SPREAD_DEG: [f32; 4] = [0.0, 90.0, 180.0, 270.0];
    pub const BOSS_BULLET_SPEED: f32 = 4.0;

    pub const ENEMY_SPAWN_CHANCE: f64 = 0.03;
    pub const BOSS_SCORE_INTERVAL: u32 = 150;
    pub const ENEMY_POINTS: u32 = 10;
    pub const BOSS_HIT_POINTS: u32 = 1;
    pub const BOSS_DEFEAT_POINTS: u32 = 1000;
}
