use crate::entities::{Boss, Bullet, BulletOwner, Enemy, Field, Player, PlayerKind};
use crate::view::{EntityCategory, EntityView, Visual};

/// Owns every live actor of a run
#[derive(Debug, Clone, Default)]
pub struct World {
    pub player: Option<Player>,
    pub enemies: Vec<Enemy>,
    /// At most one boss exists at a time
    pub boss: Option<Boss>,
    pub player_bullets: Vec<Bullet>,
    pub enemy_bullets: Vec<Bullet>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every collection
    pub fn clear(&mut self) {
        self.player = None;
        self.enemies.clear();
        self.boss = None;
        self.player_bullets.clear();
        self.enemy_bullets.clear();
    }

    pub fn spawn_player(&mut self, kind: PlayerKind, field: &Field) {
        self.player = Some(Player::new(kind, field));
    }

    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Files a bullet under its owner's collection
    pub fn add_bullet(&mut self, bullet: Bullet) {
        match bullet.owner {
            BulletOwner::Player => self.player_bullets.push(bullet),
            BulletOwner::Enemy => self.enemy_bullets.push(bullet),
        }
    }

    pub fn add_bullets(&mut self, bullets: impl IntoIterator<Item = Bullet>) {
        for bullet in bullets {
            self.add_bullet(bullet);
        }
    }

    pub fn player_center(&self) -> Option<(f32, f32)> {
        self.player.as_ref().map(Player::center)
    }

    pub fn count(&self, category: EntityCategory) -> usize {
        match category {
            EntityCategory::Player => usize::from(self.player.is_some()),
            EntityCategory::Enemy => self.enemies.len(),
            EntityCategory::Boss => usize::from(self.boss.is_some()),
            EntityCategory::PlayerBullet => self.player_bullets.len(),
            EntityCategory::EnemyBullet => self.enemy_bullets.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_none()
            && self.enemies.is_empty()
            && self.boss.is_none()
            && self.player_bullets.is_empty()
            && self.enemy_bullets.is_empty()
    }

    /// All renderable entities, back to front: enemies and boss, bullets, then the player
    pub fn entities(&self) -> Vec<EntityView> {
        let enemies = self.enemies.iter().map(|enemy| EntityView {
            category: EntityCategory::Enemy,
            visual: Visual::Enemy(enemy.kind()),
            hitbox: enemy.hitbox(),
        });
        let boss = self.boss.iter().map(|boss| EntityView {
            category: EntityCategory::Boss,
            visual: Visual::Boss,
            hitbox: boss.hitbox(),
        });
        let player_bullets = self.player_bullets.iter().map(|bullet| EntityView {
            category: EntityCategory::PlayerBullet,
            visual: Visual::Bullet(bullet.variant),
            hitbox: bullet.hitbox(),
        });
        let enemy_bullets = self.enemy_bullets.iter().map(|bullet| EntityView {
            category: EntityCategory::EnemyBullet,
            visual: Visual::Bullet(bullet.variant),
            hitbox: bullet.hitbox(),
        });
        let player = self.player.iter().map(|player| EntityView {
            category: EntityCategory::Player,
            visual: Visual::Player(player.kind()),
            hitbox: player.hitbox(),
        });

        enemies
            .chain(boss)
            .chain(player_bullets)
            .chain(enemy_bullets)
            .chain(player)
            .collect()
    }
}
