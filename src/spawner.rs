//! Time-gated creation of enemies and player bullets.

use embedded_graphics::prelude::Point;

use crate::config::Tuning;
use crate::entities::{
    Enemy,
    PlayerBullet,
};
use crate::rng::Dice;
use crate::session::{
    GameSession,
    MAX_ENEMIES,
    expired,
};

/// Add an enemy if there is room and the spawn interval has passed.
///
/// Returns whether an enemy was created. A full store skips the attempt
/// without touching the spawn timer.
pub fn maybe_spawn_enemy(
    now: u32,
    session: &mut GameSession,
    dice: &mut impl Dice,
    tuning: &Tuning,
) -> bool {
    let cap = tuning.max_enemies.min(MAX_ENEMIES);
    if session.enemies.len() >= cap
        || !expired(
            session.last_enemy_spawn_at,
            now,
            tuning.enemy_spawn_interval_ms,
        )
    {
        return false;
    }

    let (min_size, max_size) = tuning.enemy_size_range;
    let size = dice.between(min_size, max_size);
    let (min_x, max_x) = tuning.enemy_x_range;
    let x = dice.between(min_x, max_x);
    let (min_stop, max_stop) = tuning.enemy_stop_y_range;
    let stop_y = dice.between(min_stop, max_stop);

    let enemy = Enemy::new(Point::new(x, tuning.enemy_spawn_y), size, stop_y, now);
    debug!(
        "enemy spawned x={} size={} hp={} stop={}",
        x, size, enemy.health, stop_y
    );
    if session.enemies.push(enemy).is_err() {
        debug_assert!(false, "enemy store overflow");
        return false;
    }
    session.last_enemy_spawn_at = Some(now);
    session.stats.enemies_spawned += 1;
    true
}

/// Fire from the player's current position if the trigger is held and the
/// cooldown has passed. A shot fired while moving up travels faster.
pub fn maybe_fire_player_bullet(
    now: u32,
    firing: bool,
    moving_up: bool,
    session: &mut GameSession,
    tuning: &Tuning,
) -> bool {
    if !firing || !expired(session.last_shot_at, now, tuning.shot_cooldown_ms) {
        return false;
    }

    let speed = if moving_up {
        tuning.bullet_speed + tuning.bullet_speed_bonus
    } else {
        tuning.bullet_speed
    };
    let muzzle = session.player.pos - Point::new(0, tuning.muzzle_offset);
    session.player_bullets.push(PlayerBullet::new(muzzle, speed));
    session.last_shot_at = Some(now);
    session.stats.shots_fired += 1;
    trace!("shot at ({}, {}) speed {}", muzzle.x, muzzle.y, speed);
    true
}
