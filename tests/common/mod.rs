#![allow(dead_code)]

use std::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use tft_barrage::render::fill_rect;
use tft_barrage::*;

/// 128×160 RGB565 framebuffer standing in for the panel.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame(pub Vec<Rgb565>);

impl Frame {
    pub const W: u32 = 128;
    pub const H: u32 = 160;

    pub fn new() -> Self {
        Self(vec![Rgb565::BLACK; (Self::W * Self::H) as usize])
    }

    pub fn at(&self, x: i32, y: i32) -> Rgb565 {
        self.0[(y as u32 * Self::W + x as u32) as usize]
    }

    /// First pixel that differs from `other`, for readable failures.
    pub fn first_difference(&self, other: &Self) -> Option<(u32, u32)> {
        self.0
            .iter()
            .zip(&other.0)
            .position(|(a, b)| a != b)
            .map(|i| (i as u32 % Self::W, i as u32 / Self::W))
    }
}

impl OriginDimensions for Frame {
    fn size(&self) -> Size {
        Size::new(Self::W, Self::H)
    }
}

impl DrawTarget for Frame {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(p, c) in pixels {
            if p.x >= 0 && p.y >= 0 && (p.x as u32) < Self::W && (p.y as u32) < Self::H {
                self.0[(p.y as u32 * Self::W + p.x as u32) as usize] = c;
            }
        }
        Ok(())
    }
}

/// What the panel should show for `session`, painted from scratch.
pub fn painted(session: &GameSession, palette: &Palette) -> Frame {
    let mut f = Frame::new();
    for b in &session.player_bullets {
        fill_rect(&mut f, b.footprint(), palette.player_bullet).unwrap();
    }
    for e in &session.enemies {
        fill_rect(&mut f, e.footprint(), palette.enemy(e.shade())).unwrap();
    }
    for b in &session.enemy_bullets {
        fill_rect(&mut f, b.footprint(), palette.enemy_bullet).unwrap();
    }
    fill_rect(&mut f, session.player.footprint(), palette.player).unwrap();
    f
}

/// Dice that always rolls the top of the range, so enemies never fire.
pub struct Top;

impl Dice for Top {
    fn between(&mut self, _lo: i32, hi: i32) -> i32 {
        hi
    }
}

/// Replays draws in order, then falls back to the top of the range.
pub struct Script(pub Vec<i32>);

impl Dice for Script {
    fn between(&mut self, lo: i32, hi: i32) -> i32 {
        if self.0.is_empty() {
            hi
        } else {
            self.0.remove(0).clamp(lo, hi)
        }
    }
}

/// Fixed stick position and fire level.
#[derive(Clone, Copy)]
pub struct Held {
    pub x: u16,
    pub y: u16,
    pub fire: bool,
}

impl Held {
    pub const CENTRED: Self = Self {
        x: 2048,
        y: 2048,
        fire: false,
    };
}

impl InputSource for Held {
    fn read_axis(&mut self, axis: Axis) -> u16 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn fire_pressed(&mut self) -> bool {
        self.fire
    }
}

/// A restless player: random stick and trigger every read.
pub struct Wander(pub Xorshift32);

impl InputSource for Wander {
    fn read_axis(&mut self, _axis: Axis) -> u16 {
        self.0.range(4096) as u16
    }

    fn fire_pressed(&mut self) -> bool {
        self.0.one_in(3)
    }
}
