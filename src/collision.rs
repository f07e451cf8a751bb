//! Collision resolution between actor populations

use crate::consts::{BOSS_DEFEAT_POINTS, BOSS_HIT_POINTS, ENEMY_POINTS};
use crate::game::RunState;
use crate::world::World;

/// What the collision pass did this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub enemies_destroyed: u32,
    pub boss_hits: u32,
    pub boss_defeated: bool,
    /// The player touched an enemy, an enemy bullet or the boss
    pub player_hit: bool,
}

/// Runs every collision rule in order and applies scoring.
/// Player contact is judged against the actors as they stood before any kill this tick.
pub fn resolve(world: &mut World, run: &mut RunState) -> CollisionReport {
    let player_hit = player_is_hit(world);
    let mut report = CollisionReport {
        enemies_destroyed: enemies_vs_player_bullets(world),
        player_hit,
        ..CollisionReport::default()
    };
    run.award(report.enemies_destroyed * ENEMY_POINTS);

    let (boss_hits, boss_defeated) = boss_vs_player_bullets(world);
    report.boss_hits = boss_hits;
    report.boss_defeated = boss_defeated;
    run.award(boss_hits * BOSS_HIT_POINTS);
    if boss_defeated {
        run.award(BOSS_DEFEAT_POINTS);
        run.boss_defeated();
    }

    report
}

/// Every overlapping enemy/bullet pair destroys both. Returns the enemies destroyed.
fn enemies_vs_player_bullets(world: &mut World) -> u32 {
    let mut bullet_hit = vec![false; world.player_bullets.len()];
    let mut destroyed = 0;

    world.enemies.retain(|enemy| {
        let hitbox = enemy.hitbox();
        let mut hit = false;
        for (idx, bullet) in world.player_bullets.iter().enumerate() {
            if hitbox.overlaps(&bullet.hitbox()) {
                bullet_hit[idx] = true;
                hit = true;
            }
        }
        if hit {
            destroyed += 1;
        }
        !hit
    });

    let mut flags = bullet_hit.into_iter();
    world
        .player_bullets
        .retain(|_| !flags.next().unwrap_or(false));
    destroyed
}

/// Each bullet touching the boss is consumed and costs it one hit point.
/// Returns the hits landed and whether the boss went down.
fn boss_vs_player_bullets(world: &mut World) -> (u32, bool) {
    let Some(boss) = world.boss.as_mut() else {
        return (0, false);
    };

    let hitbox = boss.hitbox();
    let mut hits = 0;
    world.player_bullets.retain(|bullet| {
        let hit = hitbox.overlaps(&bullet.hitbox());
        if hit {
            boss.take_hit();
            hits += 1;
        }
        !hit
    });

    let defeated = boss.is_defeated();
    if defeated {
        log::info!("Boss level {} defeated", boss.level);
        world.boss = None;
    }
    (hits, defeated)
}

fn player_is_hit(world: &World) -> bool {
    let Some(player) = world.player.as_ref() else {
        return false;
    };
    let hitbox = player.hitbox();
    world.enemies.iter().any(|e| hitbox.overlaps(&e.hitbox()))
        || world.enemy_bullets.iter().any(|b| hitbox.overlaps(&b.hitbox()))
        || world.boss.as_ref().is_some_and(|b| hitbox.overlaps(&b.hitbox()))
}
