//! Dodge-and-shoot on a 1.8" ST7735 TFT.
//!
//! Enemies drop in from the top, park, take potshots and eventually charge.
//! Shoot them before they reach you or the bottom edge.
//!
//! Controls:
//! - Joystick: move
//! - Fire button: shoot, and restart after game over

#![no_std]
#![no_main]

use defmt::info;
#[allow(clippy::wildcard_imports)]
use tft_barrage::*;
use embassy_executor::Spawner;
use embassy_time::{
    Duration,
    Instant,
    Timer,
};
use esp_backtrace as _;
use esp_hal::timer::timg::TimerGroup;
use esp_println as _;

extern crate alloc;

esp_bootloader_esp_idf::esp_app_desc!();

#[embassy_executor::task]
async fn game_task(
    display: &'static mut Display<'static>,
    backlight: &'static mut Backlight,
    mut joystick: Joystick,
) {
    let seed = joystick.noise_seed(16) ^ Instant::now().as_ticks() as u32;
    info!("Shooter started, seed {:#x}", seed);

    let mut game = Game::new(joystick, Xorshift32::new(seed));
    let mut delay = embassy_time::Delay;

    render::clear_field(display, game.tuning(), &Palette::REFERENCE).unwrap();
    backlight.on();

    loop {
        let stats = game
            .run_round(display, &BootClock, &mut delay)
            .await
            .unwrap();
        info!(
            "Round {} done: {} of {} enemies destroyed",
            game.round() - 1,
            stats.enemies_destroyed,
            stats.enemies_spawned
        );
    }
}

#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    let peripherals = tft_barrage::init();
    let resources = split_resources!(peripherals);

    esp_alloc::heap_allocator!(size: 32 * 1024);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    let display = mk_static!(Display<'static>, resources.display.into());
    let backlight = mk_static!(Backlight, resources.backlight.into());
    let joystick: Joystick = resources.joystick.into();

    spawner.must_spawn(game_task(display, backlight, joystick));

    loop {
        Timer::after(Duration::from_secs(600)).await;
    }
}
