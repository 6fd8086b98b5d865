//! Dirty-rectangle screen updates.
//!
//! Nothing is redrawn wholesale during play. Each tick first erases every
//! stale footprint (removed entities and the old position of moved ones),
//! then draws every survivor at its new position. Erasing everything before
//! drawing anything keeps one sprite's erase from punching a hole in
//! another sprite drawn earlier in the same tick.

use embedded_graphics::{
    mono_font::{
        MonoTextStyle,
        ascii::FONT_10X20,
    },
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{
        PrimitiveStyle,
        Rectangle,
    },
    text::{
        Alignment,
        Baseline,
        Text,
        TextStyleBuilder,
    },
};

use crate::config::{
    Palette,
    Tuning,
};
use crate::entities::Player;
use crate::session::GameSession;

/// Fill `area`, clipped to the display. Areas fully off-screen are skipped.
pub fn fill_rect<D>(display: &mut D, area: Rectangle, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let clipped = area.intersection(&display.bounding_box());
    if clipped.is_zero_sized() {
        return Ok(());
    }
    clipped
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
}

/// Paint the whole field with the background colour.
pub fn clear_field<D>(display: &mut D, tuning: &Tuning, palette: &Palette) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, field(tuning), palette.background)
}

/// Bring the screen in line with the session after a physics step.
///
/// Consumes `session.vacated` and records every survivor's drawn position.
pub fn sync<D>(display: &mut D, session: &mut GameSession, palette: &Palette) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let bg = palette.background;
    let player_now = session.player.footprint();
    let mut player_dirty = session.player.moved();

    let mut erase = |display: &mut D, area: Rectangle| {
        if !area.intersection(&player_now).is_zero_sized() {
            player_dirty = true;
        }
        fill_rect(display, area, bg)
    };

    // ── Erase ───────────────────────────────────────────────────────────────
    for area in session.vacated.drain(..) {
        erase(display, area)?;
    }
    for b in &session.player_bullets {
        if let Some(old) = b.prev_footprint() {
            erase(display, old)?;
        }
    }
    for e in &session.enemies {
        debug_assert!(e.is_alive(), "dead enemy left in the store");
        if e.prev != Some(e.pos)
            && let Some(old) = e.prev_footprint()
        {
            erase(display, old)?;
        }
    }
    for b in &session.enemy_bullets {
        if let Some(old) = b.prev_footprint() {
            erase(display, old)?;
        }
    }
    if session.player.moved()
        && let Some(old) = session.player.prev
    {
        erase(display, Player::footprint_at(old))?;
    }

    // ── Draw ────────────────────────────────────────────────────────────────
    for b in &mut session.player_bullets {
        fill_rect(display, b.footprint(), palette.player_bullet)?;
        b.prev_y = Some(b.pos.y);
    }
    for e in &mut session.enemies {
        fill_rect(display, e.footprint(), palette.enemy(e.shade()))?;
        e.prev = Some(e.pos);
    }
    for b in &mut session.enemy_bullets {
        fill_rect(display, b.footprint(), palette.enemy_bullet)?;
        b.prev = Some(b.pos);
    }
    if player_dirty {
        fill_rect(display, player_now, palette.player)?;
    }
    session.player.prev = Some(session.player.pos);

    Ok(())
}

/// Red field with a black banner reading GAME OVER.
pub fn draw_game_over<D>(display: &mut D, tuning: &Tuning, palette: &Palette) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    fill_rect(display, field(tuning), palette.alert)?;

    let bar = banner(tuning);
    fill_rect(display, bar, palette.banner)?;

    let style = MonoTextStyle::new(&FONT_10X20, palette.banner_text);
    let layout = TextStyleBuilder::new()
        .alignment(Alignment::Center)
        .baseline(Baseline::Middle)
        .build();
    Text::with_text_style("GAME OVER", bar.center(), style, layout).draw(display)?;
    Ok(())
}

fn field(tuning: &Tuning) -> Rectangle {
    Rectangle::new(
        Point::zero(),
        Size::new(tuning.field_w as u32, tuning.field_h as u32),
    )
}

/// Banner strip across the middle of the field.
fn banner(tuning: &Tuning) -> Rectangle {
    const HEIGHT: u32 = 30;
    let top = tuning.field_h / 2 - HEIGHT as i32 / 2;
    Rectangle::new(
        Point::new(0, top),
        Size::new(tuning.field_w as u32, HEIGHT),
    )
}
