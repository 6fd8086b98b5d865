//! Per-round entity store.

use alloc::vec::Vec;

use embedded_graphics::prelude::Point;
use embedded_graphics::primitives::Rectangle;

use crate::config::Tuning;
use crate::entities::{
    Enemy,
    EnemyBullet,
    Player,
    PlayerBullet,
};

/// Hard cap on live enemies.
pub const MAX_ENEMIES: usize = 3;

/// What ended the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameOverCause {
    /// An enemy touched the player.
    EnemyContact,
    /// An enemy got past the bottom edge.
    EnemyBreach,
    /// An enemy bullet touched the player.
    EnemyBullet,
}

/// Counters for the round summary log.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RoundStats {
    pub ticks: u32,
    pub shots_fired: u32,
    pub enemies_spawned: u32,
    pub enemies_destroyed: u32,
}

/// Everything one round owns. Dropped wholesale on restart.
#[derive(Debug)]
pub struct GameSession {
    pub player: Player,
    pub player_bullets: Vec<PlayerBullet>,
    pub enemies: heapless::Vec<Enemy, MAX_ENEMIES>,
    pub enemy_bullets: Vec<EnemyBullet>,
    /// Screen areas of entities removed this tick, still to be erased.
    pub vacated: Vec<Rectangle>,
    pub last_shot_at: Option<u32>,
    pub last_enemy_spawn_at: Option<u32>,
    game_over: Option<GameOverCause>,
    pub stats: RoundStats,
}

impl GameSession {
    pub fn new(tuning: &Tuning) -> Self {
        let (x, y) = tuning.player_start;
        Self {
            player: Player::new(Point::new(x, y)),
            player_bullets: Vec::new(),
            enemies: heapless::Vec::new(),
            enemy_bullets: Vec::new(),
            vacated: Vec::new(),
            last_shot_at: None,
            last_enemy_spawn_at: None,
            game_over: None,
            stats: RoundStats::default(),
        }
    }

    pub const fn is_over(&self) -> bool {
        self.game_over.is_some()
    }

    /// First cause raised this round, if any.
    pub const fn game_over_cause(&self) -> Option<GameOverCause> {
        self.game_over
    }

    /// Raise the game-over flag. Later causes do not replace the first one.
    pub fn end(&mut self, cause: GameOverCause) {
        if self.game_over.is_none() {
            info!("game over: {}", cause);
            self.game_over = Some(cause);
        }
    }

    pub fn live_enemies(&self) -> usize {
        self.enemies.len()
    }
}

/// Milliseconds from `since` to `now`, tolerating clock wraparound.
pub const fn elapsed(since: u32, now: u32) -> u32 {
    now.wrapping_sub(since)
}

/// Whether more than `interval` has passed since `since`. Never-set counts as long ago.
pub const fn expired(since: Option<u32>, now: u32, interval: u32) -> bool {
    match since {
        Some(t) => elapsed(t, now) > interval,
        None => true,
    }
}
