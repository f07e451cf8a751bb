mod boss;
mod bullet;
mod enemy;
mod player;

// Re-export all public types
pub use boss::{Boss, BossPhase};
pub use bullet::{Bullet, BulletOwner, BulletVariant};
pub use enemy::{Enemy, EnemyKind, EnemyState, wavy_offset};
pub use player::{FireMode, Player, PlayerKind, PlayerVariant};

/// Dimensions of the play field in field units (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Field {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(crate::consts::FIELD_WIDTH, crate::consts::FIELD_HEIGHT)
    }
}

/// Axis-aligned bounding box, stored as top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hitbox {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Hitbox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_center(center_x: f32, center_y: f32, width: f32, height: f32) -> Self {
        Self::new(center_x - width / 2.0, center_y - height / 2.0, width, height)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap test: boxes that only share an edge do not collide
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_from_center() {
        let hitbox = Hitbox::from_center(100.0, 50.0, 30.0, 20.0);
        assert_eq!(hitbox.left(), 85.0);
        assert_eq!(hitbox.top(), 40.0);
        assert_eq!(hitbox.right(), 115.0);
        assert_eq!(hitbox.bottom(), 60.0);
        assert_eq!(hitbox.center(), (100.0, 50.0));
    }

    #[test]
    fn test_hitbox_overlap() {
        let a = Hitbox::new(0.0, 0.0, 30.0, 30.0);
        let b = Hitbox::new(20.0, 20.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_hitbox_touching_edges_do_not_overlap() {
        let a = Hitbox::new(0.0, 0.0, 30.0, 30.0);
        let right = Hitbox::new(30.0, 0.0, 10.0, 10.0);
        let below = Hitbox::new(0.0, 30.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_field_center() {
        assert_eq!(Field::default().center_x(), 300.0);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_overlap_is_symmetric(
                ax in -100.0f32..700.0, ay in -100.0f32..900.0,
                bx in -100.0f32..700.0, by in -100.0f32..900.0,
                aw in 1.0f32..60.0, bw in 1.0f32..60.0
            ) {
                let a = Hitbox::new(ax, ay, aw, aw);
                let b = Hitbox::new(bx, by, bw, bw);
                prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
            }
        }
    }
}
