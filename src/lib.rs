//! # tft-barrage
//!
//! Dodge-and-shoot arcade game for an ESP32 driving a 1.8" 128×160 ST7735
//! TFT, steered with an analog joystick and a fire button.
//!
//! The simulation is hardware independent and runs anywhere `alloc` is
//! available:
//! - **Input**: joystick readings reduced to a step per axis plus fire
//! - **Session**: per-round store of the player, bullets and up to three enemies
//! - **Spawner**: time-gated enemy waves and player shots
//! - **Physics**: movement, box collisions, damage and game-over detection
//! - **Render**: dirty-rectangle updates on any `embedded-graphics` target
//! - **Game**: tick pacing and the Playing → GameOver → WaitForRestart cycle
//!
//! With the `board` feature the crate also provides the ESP32 bring-up.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = tft_barrage::init();
//! let resources = tft_barrage::split_resources!(peripherals);
//!
//! let mut display: tft_barrage::Display = resources.display.into();
//! let joystick: tft_barrage::Joystick = resources.joystick.into();
//! let mut game = tft_barrage::Game::new(joystick, tft_barrage::Xorshift32::new(seed));
//! loop {
//!     game.run_round(&mut display, &tft_barrage::BootClock, &mut embassy_time::Delay).await?;
//! }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod config;
pub mod entities;
pub mod game;
pub mod input;
pub mod physics;
pub mod render;
pub mod rng;
pub mod session;
pub mod spawner;

pub use config::{
    Palette,
    Tuning,
};
pub use game::{
    Clock,
    Game,
    GameState,
};
pub use input::{
    Axis,
    Controls,
    InputSource,
};
pub use rng::{
    Dice,
    Xorshift32,
};
pub use session::{
    GameOverCause,
    GameSession,
    RoundStats,
};

#[cfg(feature = "board")]
mod backlight;
#[cfg(feature = "board")]
mod display;
#[cfg(feature = "board")]
mod joystick;

#[cfg(feature = "board")]
pub use backlight::Backlight;
#[cfg(feature = "board")]
pub use display::Display;
#[cfg(feature = "board")]
pub use joystick::Joystick;

/// StaticCell helper: moves a value into a `static` exactly once.
#[cfg(feature = "board")]
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}

// ── Pin / peripheral assignments ────────────────────────────────────────────

#[cfg(feature = "board")]
esp_hal::assign_resources! {
    pub Resources<'d> {
        display: DisplayResources<'d> {
            dc: GPIO17,
            rst: GPIO5,
            sck: GPIO18,
            cs: GPIO16,
            mosi: GPIO23,
            spi: SPI2,
        },
        backlight: BacklightResources<'d> {
            led: GPIO2,
        },
        joystick: JoystickResources<'d> {
            x: GPIO34,
            y: GPIO35,
            fire: GPIO33,
            adc: ADC1,
        },
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Initialise the board at full CPU clock and return the raw peripheral set.
///
/// Call this once at the top of `main`. Then use [`split_resources!`] to
/// break the peripherals into typed resource groups.
#[cfg(feature = "board")]
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(esp_hal::clock::CpuClock::max());
    esp_hal::init(config)
}

#[cfg(feature = "board")]
impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

/// Milliseconds since boot from the embassy time driver.
#[cfg(feature = "board")]
pub struct BootClock;

#[cfg(feature = "board")]
impl Clock for BootClock {
    fn now_ms(&self) -> u32 {
        embassy_time::Instant::now().as_millis() as u32
    }
}
