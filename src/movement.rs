//! Per-tick movement pass over every live entity

use crate::command::HeldKeys;
use crate::entities::Field;
use crate::world::World;

/// Moves the player according to the held direction keys
pub fn steer_player(world: &mut World, held: &HeldKeys, field: &Field) {
    let Some(player) = world.player.as_mut() else {
        return;
    };
    let speed = player.current_speed(held.slow);
    if held.left {
        player.move_left(speed);
    }
    if held.right {
        player.move_right(speed, field);
    }
    if held.up {
        player.move_up(speed);
    }
    if held.down {
        player.move_down(speed, field);
    }
}

/// Fires the player's weapon if its cooldown allows. Returns the number of bullets fired.
pub fn fire_player(world: &mut World, now: u64) -> usize {
    let Some(player) = world.player.as_mut() else {
        return 0;
    };
    let bullets = player.try_fire(now);
    let fired = bullets.len();
    world.add_bullets(bullets);
    fired
}

/// Flips the Switching character's fire mode. No-op without a player.
pub fn toggle_player_mode(world: &mut World, now: u64) -> bool {
    world
        .player
        .as_mut()
        .is_some_and(|player| player.toggle_mode(now))
}

/// Advances bullets, enemies and the boss by one tick and drops whatever left the field.
/// Bullets fired during this pass start moving next tick.
pub fn advance(world: &mut World, field: &Field) {
    for bullet in world
        .player_bullets
        .iter_mut()
        .chain(world.enemy_bullets.iter_mut())
    {
        bullet.update();
    }
    world.player_bullets.retain(|b| !b.is_out_of_bounds(field));
    world.enemy_bullets.retain(|b| !b.is_out_of_bounds(field));

    let target = world.player_center();
    let mut fired = Vec::new();
    for enemy in &mut world.enemies {
        if let Some(bullet) = enemy.update(target) {
            fired.push(bullet);
        }
    }
    world.enemies.retain(|e| !e.is_off_field(field));

    if let Some(boss) = world.boss.as_mut() {
        fired.extend(boss.update(field));
    }

    world.add_bullets(fired);
}
