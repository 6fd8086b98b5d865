//! Analog joystick on ADC1 plus an active-high fire button.
//!
//! - X axis on GPIO34, Y axis on GPIO35, both at 11 dB attenuation
//! - Fire on GPIO33, pulled down

use esp_hal::{
    Blocking,
    analog::adc::{
        Adc,
        AdcConfig,
        AdcPin,
        Attenuation,
    },
    gpio::{
        Input,
        InputConfig,
        Pull,
    },
    peripherals::{
        ADC1,
        GPIO34,
        GPIO35,
    },
};

use crate::JoystickResources;
use crate::input::{
    Axis,
    InputSource,
};

pub struct Joystick {
    adc: Adc<'static, ADC1<'static>, Blocking>,
    x: AdcPin<GPIO34<'static>, ADC1<'static>>,
    y: AdcPin<GPIO35<'static>, ADC1<'static>>,
    fire: Input<'static>,
}

impl From<JoystickResources<'static>> for Joystick {
    fn from(res: JoystickResources<'static>) -> Self {
        let mut config = AdcConfig::new();
        let x = config.enable_pin(res.x, Attenuation::_11dB);
        let y = config.enable_pin(res.y, Attenuation::_11dB);
        Self {
            adc: Adc::new(res.adc, config),
            x,
            y,
            fire: Input::new(res.fire, InputConfig::default().with_pull(Pull::Down)),
        }
    }
}

impl Joystick {
    /// Mix the low bits of a few axis conversions into a seed.
    ///
    /// The least significant bits of an idle stick wander with supply noise,
    /// which is enough to vary enemy waves between power cycles.
    pub fn noise_seed(&mut self, rounds: usize) -> u32 {
        let mut seed = 0_u32;
        for _ in 0..rounds {
            let x = self.read_axis(Axis::X) as u32;
            let y = self.read_axis(Axis::Y) as u32;
            seed = seed.rotate_left(5) ^ ((x << 16) | y);
        }
        seed
    }
}

impl InputSource for Joystick {
    fn read_axis(&mut self, axis: Axis) -> u16 {
        // Oneshot conversions report WouldBlock until the sample is ready.
        loop {
            let reading = match axis {
                Axis::X => self.adc.read_oneshot(&mut self.x),
                Axis::Y => self.adc.read_oneshot(&mut self.y),
            };
            if let Ok(raw) = reading {
                return raw;
            }
        }
    }

    fn fire_pressed(&mut self) -> bool {
        self.fire.is_high()
    }
}
