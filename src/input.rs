//! Joystick sampling.
//!
//! Raw readings are reduced to one step per axis and a fire flag. Only the
//! relation to the centre and deadzone matters, not the ADC's resolution.

use crate::config::Tuning;

/// Joystick axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// Anything that can report raw joystick and fire-button state.
pub trait InputSource {
    /// Raw axis reading in `0..MAX` of the underlying converter.
    fn read_axis(&mut self, axis: Axis) -> u16;

    /// Level of the fire input; `true` when pressed.
    fn fire_pressed(&mut self) -> bool;
}

/// One tick's worth of player intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controls {
    /// -1 left, 0 none, +1 right.
    pub dx: i8,
    /// -1 up (towards the top edge), 0 none, +1 down.
    pub dy: i8,
    pub firing: bool,
}

impl Controls {
    pub const fn moving_up(&self) -> bool {
        self.dy < 0
    }
}

/// Reduce a raw reading to a step: strictly beyond `center ± deadzone` counts.
pub const fn axis_step(raw: u16, center: u16, deadzone: u16) -> i8 {
    let raw = raw as i32;
    let center = center as i32;
    let deadzone = deadzone as i32;
    if raw < center - deadzone {
        -1
    } else if raw > center + deadzone {
        1
    } else {
        0
    }
}

/// Read the joystick once.
pub fn sample(source: &mut impl InputSource, tuning: &Tuning) -> Controls {
    let x = source.read_axis(Axis::X);
    let y = source.read_axis(Axis::Y);
    Controls {
        dx: axis_step(x, tuning.axis_center, tuning.deadzone),
        dy: axis_step(y, tuning.axis_center, tuning.deadzone),
        firing: source.fire_pressed(),
    }
}
