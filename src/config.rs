//! Gameplay tuning and colours.
//!
//! All times are milliseconds, all distances are pixels on the 128×160 field.

use embedded_graphics::pixelcolor::{
    Rgb565,
    WebColors as _,
};
use embedded_graphics::prelude::RgbColor as _;

use crate::entities::EnemyShade;

/// Every constant the simulation reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tuning {
    // ── Play field ──────────────────────────────────────────────────────────
    pub field_w: i32,
    pub field_h: i32,
    /// Minimum distance between the player and any field edge.
    pub margin: i32,

    // ── Player ──────────────────────────────────────────────────────────────
    pub player_start: (i32, i32),
    pub player_speed: i32,
    pub shot_cooldown_ms: u32,
    pub bullet_speed: i32,
    /// Extra bullet speed when the player is moving up while firing.
    pub bullet_speed_bonus: i32,
    /// Bullets leave this far above the player's centre.
    pub muzzle_offset: i32,

    // ── Enemies ─────────────────────────────────────────────────────────────
    pub max_enemies: usize,
    pub enemy_spawn_interval_ms: u32,
    pub enemy_x_range: (i32, i32),
    pub enemy_spawn_y: i32,
    pub enemy_size_range: (i32, i32),
    pub enemy_stop_y_range: (i32, i32),
    pub charge_delay_ms: u32,
    pub charge_step: i32,
    pub descend_step: i32,
    /// An idle enemy fires with probability `1 / enemy_fire_odds` per tick.
    pub enemy_fire_odds: u32,
    /// Added to the enemy half-size for the player contact test.
    pub enemy_contact_pad: i32,

    // ── Enemy bullets ───────────────────────────────────────────────────────
    pub enemy_bullet_speed: i32,
    pub enemy_bullet_hit_radius: i32,

    // ── Pacing ──────────────────────────────────────────────────────────────
    pub tick_period_ms: u32,
    pub game_over_hold_ms: u32,
    pub restart_poll_ms: u32,

    // ── Joystick ────────────────────────────────────────────────────────────
    pub axis_center: u16,
    pub deadzone: u16,
}

impl Tuning {
    /// The values the game was balanced with on the 1.8" ST7735 board.
    pub const REFERENCE: Self = Self {
        field_w: 128,
        field_h: 160,
        margin: 5,

        player_start: (64, 140),
        player_speed: 2,
        shot_cooldown_ms: 180,
        bullet_speed: 10,
        bullet_speed_bonus: 2,
        muzzle_offset: 5,

        max_enemies: crate::session::MAX_ENEMIES,
        enemy_spawn_interval_ms: 1500,
        enemy_x_range: (15, 110),
        enemy_spawn_y: -10,
        enemy_size_range: (8, 13),
        enemy_stop_y_range: (20, 50),
        charge_delay_ms: 10_000,
        charge_step: 4,
        descend_step: 1,
        enemy_fire_odds: 60,
        enemy_contact_pad: 3,

        enemy_bullet_speed: 4,
        enemy_bullet_hit_radius: 4,

        tick_period_ms: 10,
        game_over_hold_ms: 1000,
        restart_poll_ms: 100,

        axis_center: 2048,
        deadzone: 1000,
    };

    /// Player x range, inclusive.
    pub const fn player_x_bounds(&self) -> (i32, i32) {
        (self.margin, self.field_w - self.margin - 1)
    }

    /// Player y range, inclusive.
    pub const fn player_y_bounds(&self) -> (i32, i32) {
        (self.margin, self.field_h - self.margin - 1)
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::REFERENCE
    }
}

/// Colours for every footprint kind and the game-over screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb565,
    pub player: Rgb565,
    pub player_bullet: Rgb565,
    pub enemy_bullet: Rgb565,
    /// Enemy with one hit point left.
    pub enemy_weak: Rgb565,
    /// Enemy with more than one hit point.
    pub enemy_tough: Rgb565,
    pub enemy_charging: Rgb565,
    pub alert: Rgb565,
    pub banner: Rgb565,
    pub banner_text: Rgb565,
}

impl Palette {
    pub const REFERENCE: Self = Self {
        background: Rgb565::BLACK,
        player: Rgb565::RED,
        player_bullet: Rgb565::YELLOW,
        enemy_bullet: Rgb565::WHITE,
        enemy_weak: Rgb565::GREEN,
        enemy_tough: Rgb565::CYAN,
        enemy_charging: Rgb565::CSS_MAROON,
        alert: Rgb565::RED,
        banner: Rgb565::BLACK,
        banner_text: Rgb565::WHITE,
    };

    pub const fn enemy(&self, shade: EnemyShade) -> Rgb565 {
        match shade {
            EnemyShade::Charging => self.enemy_charging,
            EnemyShade::Weak => self.enemy_weak,
            EnemyShade::Tough => self.enemy_tough,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::REFERENCE
    }
}
