use spot_bmp::Rgb;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// Per-channel reference levels used as one-sided thresholds.
///
/// A pixel matches when it is at least as red as `red` and at most as
/// green and blue as `green` and `blue`. This targets objects that are
/// redder than the reference; it is not a distance to a target color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorSignature {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Default for ColorSignature {
    fn default() -> Self {
        Self {
            red: 230,
            green: 160,
            blue: 210,
        }
    }
}

impl ColorSignature {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub fn level(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
        }
    }

    pub fn with_level(mut self, channel: Channel, value: u8) -> Self {
        match channel {
            Channel::Red => self.red = value,
            Channel::Green => self.green = value,
            Channel::Blue => self.blue = value,
        }
        self
    }

    pub fn matches(&self, pixel: Rgb<u8>) -> bool {
        let [r, g, b] = pixel.0;
        r >= self.red && g <= self.green && b <= self.blue
    }

    /// Same predicate on a pixel as stored in the bitmap (blue first).
    #[inline]
    pub fn matches_bgr(&self, bgr: &[u8]) -> bool {
        bgr[2] >= self.red && bgr[1] <= self.green && bgr[0] <= self.blue
    }
}

impl fmt::Display for ColorSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "red_level:{} green_level:{} blue_level:{}",
            self.red, self.green, self.blue
        )
    }
}
