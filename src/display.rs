//! ST7735 display driver: 128×160 TFT over blocking SPI.

use embedded_hal_bus::spi::ExclusiveDevice;
use esp_hal::{
    Blocking,
    gpio::{
        Level,
        Output,
        OutputConfig,
    },
    spi::master::Spi,
    time::Rate,
};

use crate::DisplayResources;

/// Bytes the SPI interface batches per transfer.
const SPI_BUFFER: usize = 1024;

type SpiInterface<'a> = mipidsi::interface::SpiInterface<
    'a,
    ExclusiveDevice<Spi<'a, Blocking>, Output<'a>, esp_hal::delay::Delay>,
    Output<'a>,
>;

/// The 1.8" ST7735 panel, ready to draw on with `embedded-graphics`.
pub type Display<'a> = mipidsi::Display<SpiInterface<'a>, mipidsi::models::ST7735s, Output<'a>>;

impl From<DisplayResources<'static>> for Display<'static> {
    fn from(res: DisplayResources<'static>) -> Self {
        let mut delay = esp_hal::delay::Delay::new();

        let dc = Output::new(res.dc, Level::Low, OutputConfig::default());
        let mut rst = Output::new(res.rst, Level::Low, OutputConfig::default());
        rst.set_high();

        let spi = Spi::new(
            res.spi,
            esp_hal::spi::master::Config::default().with_frequency(Rate::from_mhz(26)),
        )
        .unwrap()
        .with_sck(res.sck)
        .with_mosi(res.mosi);

        let cs = Output::new(res.cs, Level::High, OutputConfig::default());
        let spi_device = ExclusiveDevice::new(spi, cs, delay).unwrap();

        let buffer = crate::mk_static!([u8; SPI_BUFFER], [0_u8; SPI_BUFFER]);
        let di = mipidsi::interface::SpiInterface::new(spi_device, dc, buffer);

        mipidsi::Builder::new(mipidsi::models::ST7735s, di)
            .reset_pin(rst)
            .display_size(128, 160)
            .color_order(mipidsi::options::ColorOrder::Rgb)
            .init(&mut delay)
            .unwrap()
    }
}
