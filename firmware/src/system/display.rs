//! Presenter of the control state on the SSD1306 OLED.

use display_interface::DisplayError;
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder};
use pedalo_control::{PotView, Screen, StatusView};
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use crate::system::hal::i2c::I2c;
use crate::system::hal::pac::I2C1;

const WIDTH: i32 = 128;
const LINE_1: i32 = 4;
const LINE_2: i32 = 36;

type Driver = Ssd1306<
    I2CInterface<I2c<I2C1>>,
    DisplaySize128x64,
    BufferedGraphicsMode<DisplaySize128x64>,
>;

pub struct Display {
    driver: Driver,
    shown: Option<Screen>,
}

impl Display {
    /// # Errors
    ///
    /// Fails when the display does not respond on the bus.
    pub fn init(i2c: I2c<I2C1>) -> Result<Self, DisplayError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut driver = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        driver.init()?;
        driver.clear(BinaryColor::Off)?;
        driver.flush()?;
        Ok(Self {
            driver,
            shown: None,
        })
    }

    /// Draw the screen unless it is already shown.
    ///
    /// # Errors
    ///
    /// Fails when the frame could not be transferred to the display.
    pub fn show(&mut self, screen: Screen) -> Result<(), DisplayError> {
        if self.shown == Some(screen) {
            return Ok(());
        }

        self.driver.clear(BinaryColor::Off)?;
        match screen {
            Screen::Status(view) => self.draw_status(&view)?,
            Screen::Pot(view) => self.draw_pot(&view)?,
        }
        self.driver.flush()?;

        self.shown = Some(screen);
        Ok(())
    }

    fn draw_status(&mut self, view: &StatusView) -> Result<(), DisplayError> {
        Text::with_text_style(
            view.line_1(),
            Point::new(WIDTH / 2, LINE_1),
            character_style(),
            text_style(Alignment::Center),
        )
        .draw(&mut self.driver)?;
        Text::with_text_style(
            view.line_2().as_str(),
            Point::new(0, LINE_2),
            character_style(),
            text_style(Alignment::Left),
        )
        .draw(&mut self.driver)?;
        Ok(())
    }

    fn draw_pot(&mut self, view: &PotView) -> Result<(), DisplayError> {
        Text::with_text_style(
            "VOL",
            Point::new(WIDTH / 2, LINE_1),
            character_style(),
            text_style(Alignment::Center),
        )
        .draw(&mut self.driver)?;
        Text::with_text_style(
            view.text().as_str(),
            Point::new(WIDTH / 2, LINE_2),
            character_style(),
            text_style(Alignment::Center),
        )
        .draw(&mut self.driver)?;
        Ok(())
    }
}

fn character_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyle::new(&FONT_10X20, BinaryColor::On)
}

fn text_style(alignment: Alignment) -> TextStyle {
    TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build()
}
