//! Spawn cadence for regular enemies and boss encounters

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{ENEMY_POINTS, ENEMY_SIZE};
use crate::entities::{Boss, Enemy, EnemyKind, Field};
use crate::game::RunState;
use crate::world::World;

/// Rolls for regular enemy spawns from a seeded generator
#[derive(Debug, Clone)]
pub struct SpawnDirector {
    rng: Pcg32,
    spawn_chance: f64,
}

impl SpawnDirector {
    pub fn new(seed: u64, spawn_chance: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            spawn_chance: spawn_chance.clamp(0.0, 1.0),
        }
    }

    /// Rolls once for a regular enemy. Nothing spawns while a boss is active.
    pub fn spawn_regular(&mut self, world: &mut World, field: &Field) -> Option<EnemyKind> {
        if world.boss.is_some() || !self.rng.random_bool(self.spawn_chance) {
            return None;
        }

        let kind = EnemyKind::ALL[self.rng.random_range(0..EnemyKind::ALL.len())];
        let max_x = (field.width - ENEMY_SIZE).max(1.0);
        let x = self.rng.random_range(0.0..max_x).floor();
        log::debug!("Spawning {kind:?} enemy at x={x}");
        world.add_enemy(Enemy::new(kind, x));
        Some(kind)
    }
}

/// Starts a boss encounter once the score reaches the threshold.
/// Every regular enemy on screen is cleared and scored as a kill.
/// Returns true if a boss was spawned.
pub fn trigger_boss(world: &mut World, run: &mut RunState, field: &Field) -> bool {
    if world.boss.is_some() || run.score < run.next_boss_score {
        return false;
    }

    let cleared = world.enemies.len() as u32;
    world.enemies.clear();
    run.award(cleared * ENEMY_POINTS);
    world.boss = Some(Boss::new(run.boss_level, field));
    log::info!(
        "Boss level {} appears at score {} ({cleared} enemies cleared)",
        run.boss_level,
        run.score
    );
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_spawn_with_zero_chance() {
        let field = Field::default();
        let mut world = World::new();
        let mut director = SpawnDirector::new(7, 0.0);
        for _ in 0..1000 {
            assert!(director.spawn_regular(&mut world, &field).is_none());
        }
        assert!(world.enemies.is_empty());
    }

    #[test]
    fn test_spawn_every_tick_with_full_chance() {
        let field = Field::default();
        let mut world = World::new();
        let mut director = SpawnDirector::new(7, 1.0);
        for _ in 0..100 {
            assert!(director.spawn_regular(&mut world, &field).is_some());
        }
        assert_eq!(world.enemies.len(), 100);
        for enemy in &world.enemies {
            assert_eq!(enemy.y, -50.0);
            assert!(enemy.x >= 0.0 && enemy.x < 570.0);
        }
        // All three kinds turn up
        for kind in EnemyKind::ALL {
            assert!(world.enemies.iter().any(|e| e.kind() == kind));
        }
    }

    #[test]
    fn test_no_spawn_during_boss() {
        let field = Field::default();
        let mut world = World::new();
        world.boss = Some(Boss::new(1, &field));
        let mut director = SpawnDirector::new(7, 1.0);
        assert!(director.spawn_regular(&mut world, &field).is_none());
    }

    #[test]
    fn test_same_seed_same_spawns() {
        let field = Field::default();
        let mut a = World::new();
        let mut b = World::new();
        let mut director_a = SpawnDirector::new(1234, 0.03);
        let mut director_b = SpawnDirector::new(1234, 0.03);
        for _ in 0..2000 {
            director_a.spawn_regular(&mut a, &field);
            director_b.spawn_regular(&mut b, &field);
        }
        assert!(!a.enemies.is_empty());
        assert_eq!(a.enemies, b.enemies);
    }

    #[test]
    fn test_spawn_rate_roughly_matches_chance() {
        let field = Field::default();
        let mut world = World::new();
        let mut director = SpawnDirector::new(99, 0.03);
        for _ in 0..10_000 {
            director.spawn_regular(&mut world, &field);
        }
        let spawned = world.enemies.len();
        assert!((200..=400).contains(&spawned), "spawned {spawned}");
    }

    #[test]
    fn test_trigger_boss_below_threshold() {
        let field = Field::default();
        let mut world = World::new();
        let mut run = RunState::new(150);
        run.score = 149;
        assert!(!trigger_boss(&mut world, &mut run, &field));
        assert!(world.boss.is_none());
    }

    #[test]
    fn test_trigger_boss_clears_and_scores_enemies() {
        let field = Field::default();
        let mut world = World::new();
        let mut run = RunState::new(150);
        run.score = 150;
        world.add_enemy(Enemy::new(EnemyKind::Normal, 0.0));
        world.add_enemy(Enemy::new(EnemyKind::Wavy, 100.0));

        assert!(trigger_boss(&mut world, &mut run, &field));
        assert!(world.enemies.is_empty());
        assert_eq!(run.score, 170);
        let boss = world.boss.as_ref().expect("boss spawned");
        assert_eq!(boss.level, 1);
        assert_eq!(boss.hp, 100);

        // Never a second boss
        run.score = 10_000;
        assert!(!trigger_boss(&mut world, &mut run, &field));
    }
}
