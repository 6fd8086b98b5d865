//! Round sequencing and the Playing → GameOver → WaitForRestart cycle.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::DrawTarget,
};
use embedded_hal_async::delay::DelayNs;

use crate::config::{
    Palette,
    Tuning,
};
use crate::input::{
    self,
    InputSource,
};
use crate::rng::Dice;
use crate::session::{
    GameSession,
    RoundStats,
    elapsed,
};
use crate::{
    physics,
    render,
    spawner,
};

/// Monotonic millisecond clock.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    Playing,
    /// Round ended; the game-over screen has not been shown yet.
    GameOver,
    /// Game-over screen is up; waiting for the fire input.
    WaitForRestart,
}

/// The whole game: input, randomness, tuning and the current round.
pub struct Game<I, R> {
    input: I,
    dice: R,
    tuning: Tuning,
    palette: Palette,
    state: GameState,
    session: GameSession,
    round: u32,
}

impl<I, R> Game<I, R>
where
    I: InputSource,
    R: Dice,
{
    pub fn new(input: I, dice: R) -> Self {
        Self::with_config(input, dice, Tuning::REFERENCE, Palette::REFERENCE)
    }

    pub fn with_config(input: I, dice: R, tuning: Tuning, palette: Palette) -> Self {
        Self {
            input,
            dice,
            session: GameSession::new(&tuning),
            tuning,
            palette,
            state: GameState::Playing,
            round: 1,
        }
    }

    pub const fn state(&self) -> GameState {
        self.state
    }

    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    /// 1-based round counter.
    pub const fn round(&self) -> u32 {
        self.round
    }

    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Run one simulation tick and update the screen.
    ///
    /// Does nothing outside `Playing`. Returns the state after the tick.
    pub fn tick<D>(&mut self, now: u32, display: &mut D) -> Result<GameState, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.state != GameState::Playing {
            return Ok(self.state);
        }

        let tuning = &self.tuning;
        let session = &mut self.session;

        let controls = input::sample(&mut self.input, tuning);
        physics::move_player(session, controls, tuning);
        spawner::maybe_fire_player_bullet(
            now,
            controls.firing,
            controls.moving_up(),
            session,
            tuning,
        );
        spawner::maybe_spawn_enemy(now, session, &mut self.dice, tuning);
        physics::advance(now, session, &mut self.dice, tuning);
        render::sync(display, session, &self.palette)?;
        session.stats.ticks += 1;

        if session.is_over() {
            self.state = GameState::GameOver;
        }
        Ok(self.state)
    }

    /// Show the game-over screen and start waiting for restart.
    pub fn show_game_over<D>(&mut self, display: &mut D) -> Result<RoundStats, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        debug_assert_eq!(self.state, GameState::GameOver);
        let stats = self.session.stats;
        info!(
            "round {} over after {} ticks: {} shots, {} enemies spawned, {} destroyed",
            self.round,
            stats.ticks,
            stats.shots_fired,
            stats.enemies_spawned,
            stats.enemies_destroyed
        );
        render::draw_game_over(display, &self.tuning, &self.palette)?;
        self.state = GameState::WaitForRestart;
        Ok(stats)
    }

    /// Check the fire input once; on press, discard the round and start a new one.
    pub fn poll_restart(&mut self) -> bool {
        if self.state != GameState::WaitForRestart || !self.input.fire_pressed() {
            return false;
        }
        self.session = GameSession::new(&self.tuning);
        self.state = GameState::Playing;
        self.round += 1;
        info!("restart, round {}", self.round);
        true
    }

    /// Play one round to completion, including the game-over screen and the
    /// wait for the player to restart.
    ///
    /// Ticks are paced to at least `tick_period_ms` apart.
    pub async fn run_round<D, C, T>(
        &mut self,
        display: &mut D,
        clock: &C,
        delay: &mut T,
    ) -> Result<RoundStats, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        C: Clock,
        T: DelayNs,
    {
        debug_assert_eq!(self.state, GameState::Playing);
        info!("round {} start", self.round);
        render::clear_field(display, &self.tuning, &self.palette)?;

        let period = self.tuning.tick_period_ms;
        loop {
            let started = clock.now_ms();
            if self.tick(started, display)? != GameState::Playing {
                break;
            }
            let spent = elapsed(started, clock.now_ms());
            if spent < period {
                delay.delay_ms(period - spent).await;
            } else {
                trace!("tick overran: {} ms", spent);
            }
        }

        let stats = self.show_game_over(display)?;
        delay.delay_ms(self.tuning.game_over_hold_ms).await;
        while !self.poll_restart() {
            delay.delay_ms(self.tuning.restart_poll_ms).await;
        }
        Ok(stats)
    }
}
