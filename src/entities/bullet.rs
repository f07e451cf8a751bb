use super::{Field, Hitbox};
use crate::consts::{ENEMY_BULLET_SIZE, OFFSCREEN_MARGIN, PLAYER_BULLET_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// Visual variant, chosen by whoever fires the bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletVariant {
    Cyan,
    LightRed,
    Yellow,
    RedOrb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    /// Top-left corner
    pub x: f32,
    pub y: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub owner: BulletOwner,
    pub variant: BulletVariant,
}

impl Bullet {
    /// Creates a bullet centred on the given point
    pub fn new(
        center_x: f32,
        center_y: f32,
        velocity_x: f32,
        velocity_y: f32,
        owner: BulletOwner,
        variant: BulletVariant,
    ) -> Self {
        let size = Self::size_for(owner);
        Self {
            x: center_x - size / 2.0,
            y: center_y - size / 2.0,
            velocity_x,
            velocity_y,
            owner,
            variant,
        }
    }

    /// Player shot tilted `angle_deg` degrees from straight up (positive leans right)
    pub fn player_shot(
        center_x: f32,
        center_y: f32,
        angle_deg: f32,
        speed: f32,
        variant: BulletVariant,
    ) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(
            center_x,
            center_y,
            rad.sin() * speed,
            -rad.cos() * speed,
            BulletOwner::Player,
            variant,
        )
    }

    /// Enemy bullet travelling at `angle_deg` in screen space (0 = right, 90 = down)
    pub fn radial(center_x: f32, center_y: f32, angle_deg: f32, speed: f32) -> Self {
        let rad = angle_deg.to_radians();
        Self::new(
            center_x,
            center_y,
            rad.cos() * speed,
            rad.sin() * speed,
            BulletOwner::Enemy,
            BulletVariant::RedOrb,
        )
    }

    /// Enemy bullet aimed from `from` toward `target`. No homing after launch.
    pub fn aimed(from: (f32, f32), target: (f32, f32), speed: f32) -> Self {
        let angle = (target.1 - from.1).atan2(target.0 - from.0);
        Self::new(
            from.0,
            from.1,
            angle.cos() * speed,
            angle.sin() * speed,
            BulletOwner::Enemy,
            BulletVariant::RedOrb,
        )
    }

    fn size_for(owner: BulletOwner) -> f32 {
        match owner {
            BulletOwner::Player => PLAYER_BULLET_SIZE,
            BulletOwner::Enemy => ENEMY_BULLET_SIZE,
        }
    }

    pub fn size(&self) -> f32 {
        Self::size_for(self.owner)
    }

    pub fn hitbox(&self) -> Hitbox {
        let size = self.size();
        Hitbox::new(self.x, self.y, size, size)
    }

    pub fn update(&mut self) {
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    /// True once the bullet has left the field by more than the off-screen margin
    pub fn is_out_of_bounds(&self, field: &Field) -> bool {
        let hitbox = self.hitbox();
        hitbox.bottom() < -OFFSCREEN_MARGIN
            || hitbox.top() > field.height + OFFSCREEN_MARGIN
            || hitbox.left() < -OFFSCREEN_MARGIN
            || hitbox.right() > field.width + OFFSCREEN_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_bullet_new_is_centred() {
        let bullet = Bullet::new(
            100.0,
            200.0,
            0.0,
            -10.0,
            BulletOwner::Player,
            BulletVariant::Cyan,
        );
        assert_eq!(bullet.hitbox().center(), (100.0, 200.0));
        assert_eq!(bullet.size(), 10.0);
    }

    #[test]
    fn test_enemy_bullet_is_smaller() {
        let bullet = Bullet::radial(0.0, 0.0, 0.0, 4.0);
        assert_eq!(bullet.size(), 8.0);
        assert_eq!(bullet.owner, BulletOwner::Enemy);
        assert_eq!(bullet.variant, BulletVariant::RedOrb);
    }

    #[test]
    fn test_player_shot_straight_up() {
        let bullet = Bullet::player_shot(50.0, 50.0, 0.0, 10.0, BulletVariant::Yellow);
        assert!(bullet.velocity_x.abs() < EPSILON);
        assert!((bullet.velocity_y + 10.0).abs() < EPSILON);
    }

    #[test]
    fn test_player_shot_tilts_right_for_positive_angle() {
        let bullet = Bullet::player_shot(50.0, 50.0, 15.0, 10.0, BulletVariant::Cyan);
        assert!((bullet.velocity_x - 15f32.to_radians().sin() * 10.0).abs() < EPSILON);
        assert!(bullet.velocity_y < 0.0);
    }

    #[test]
    fn test_aimed_bullet_points_at_target() {
        let bullet = Bullet::aimed((0.0, 0.0), (30.0, 40.0), 5.0);
        assert!((bullet.velocity_x - 3.0).abs() < EPSILON);
        assert!((bullet.velocity_y - 4.0).abs() < EPSILON);
    }

    #[test]
    fn test_bullet_update_applies_velocity() {
        let mut bullet = Bullet::radial(100.0, 100.0, 90.0, 4.0);
        let start_y = bullet.y;
        bullet.update();
        assert!((bullet.y - (start_y + 4.0)).abs() < EPSILON);
    }

    #[test]
    fn test_bullet_out_of_bounds_margin() {
        let field = Field::default();
        // Bottom edge just above -50: still alive
        let mut bullet = Bullet::new(300.0, -54.0, 0.0, -1.0, BulletOwner::Player, BulletVariant::Cyan);
        assert!(!bullet.is_out_of_bounds(&field));
        bullet.update();
        bullet.update();
        assert!(bullet.is_out_of_bounds(&field));

        let right = Bullet::new(700.0, 400.0, 0.0, 0.0, BulletOwner::Enemy, BulletVariant::RedOrb);
        assert!(right.is_out_of_bounds(&field));

        let inside = Bullet::new(-40.0, 400.0, 0.0, 0.0, BulletOwner::Enemy, BulletVariant::RedOrb);
        assert!(!inside.is_out_of_bounds(&field));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_bullet_eventually_leaves_field(
                x in 0.0f32..600.0,
                y in 0.0f32..800.0,
                angle in 0.0f32..360.0,
                speed in 1.0f32..10.0
            ) {
                let field = Field::default();
                let mut bullet = Bullet::radial(x, y, angle, speed);
                // Longest path: field diagonal plus both margins
                let max_ticks = ((1000.0 + 200.0) / speed) as usize + 2;
                let mut ticks = 0;
                while !bullet.is_out_of_bounds(&field) && ticks <= max_ticks {
                    bullet.update();
                    ticks += 1;
                }
                prop_assert!(bullet.is_out_of_bounds(&field));
            }
        }
    }
}
