//! Entity records.
//!
//! Positions are reference points used for collision; each kind also knows
//! the screen rectangle it covers at a given position. `prev` holds the
//! position last drawn to the screen, `None` until the first draw.

use embedded_graphics::prelude::{
    Point,
    Size,
};
use embedded_graphics::primitives::Rectangle;

/// Axis-aligned proximity test: both axis distances strictly below `r`.
pub const fn hit(a: Point, b: Point, r: i32) -> bool {
    (a.x - b.x).abs() < r && (a.y - b.y).abs() < r
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Point,
    pub prev: Option<Point>,
}

impl Player {
    pub const SIZE: u32 = 5;

    pub const fn new(pos: Point) -> Self {
        Self { pos, prev: None }
    }

    pub fn footprint_at(pos: Point) -> Rectangle {
        let half = (Self::SIZE / 2) as i32;
        Rectangle::new(pos - Point::new(half, half), Size::new_equal(Self::SIZE))
    }

    pub fn footprint(&self) -> Rectangle {
        Self::footprint_at(self.pos)
    }

    /// Moved since it was last drawn. A never-drawn player counts as moved.
    pub fn moved(&self) -> bool {
        self.prev != Some(self.pos)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerBullet {
    pub pos: Point,
    /// Last drawn y; the x never changes.
    pub prev_y: Option<i32>,
    /// Pixels per tick towards the top edge.
    pub speed: i32,
}

impl PlayerBullet {
    pub const SIZE: Size = Size::new(2, 4);

    pub const fn new(pos: Point, speed: i32) -> Self {
        Self {
            pos,
            prev_y: None,
            speed,
        }
    }

    pub fn footprint_at(pos: Point) -> Rectangle {
        Rectangle::new(pos, Self::SIZE)
    }

    pub fn footprint(&self) -> Rectangle {
        Self::footprint_at(self.pos)
    }

    pub fn prev_footprint(&self) -> Option<Rectangle> {
        self.prev_y
            .map(|y| Self::footprint_at(Point::new(self.pos.x, y)))
    }
}

/// Colour class of an enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EnemyShade {
    Charging,
    /// One hit point left.
    Weak,
    Tough,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub pos: Point,
    pub prev: Option<Point>,
    pub health: i32,
    /// Descent stops here until the enemy starts charging.
    pub stop_y: i32,
    /// Edge length of the square footprint.
    pub size: i32,
    pub spawned_at: u32,
    /// Set by the physics step each tick.
    pub charging: bool,
}

impl Enemy {
    pub const fn new(pos: Point, size: i32, stop_y: i32, spawned_at: u32) -> Self {
        Self {
            pos,
            prev: None,
            health: Self::health_for_size(size),
            stop_y,
            size,
            spawned_at,
            charging: false,
        }
    }

    /// Bigger enemies take more hits.
    pub const fn health_for_size(size: i32) -> i32 {
        if size < 10 {
            1
        } else if size < 12 {
            2
        } else {
            4
        }
    }

    pub const fn half(&self) -> i32 {
        self.size / 2
    }

    pub const fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub const fn shade(&self) -> EnemyShade {
        if self.charging {
            EnemyShade::Charging
        } else if self.health == 1 {
            EnemyShade::Weak
        } else {
            EnemyShade::Tough
        }
    }

    pub fn footprint_at(&self, pos: Point) -> Rectangle {
        let half = self.half();
        Rectangle::new(
            pos - Point::new(half, half),
            Size::new_equal(self.size as u32),
        )
    }

    pub fn footprint(&self) -> Rectangle {
        self.footprint_at(self.pos)
    }

    pub fn prev_footprint(&self) -> Option<Rectangle> {
        self.prev.map(|p| self.footprint_at(p))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyBullet {
    pub pos: Point,
    pub prev: Option<Point>,
}

impl EnemyBullet {
    pub const SIZE: Size = Size::new(2, 2);

    pub const fn new(pos: Point) -> Self {
        Self { pos, prev: None }
    }

    pub fn footprint_at(pos: Point) -> Rectangle {
        Rectangle::new(pos, Self::SIZE)
    }

    pub fn footprint(&self) -> Rectangle {
        Self::footprint_at(self.pos)
    }

    pub fn prev_footprint(&self) -> Option<Rectangle> {
        self.prev.map(Self::footprint_at)
    }
}
