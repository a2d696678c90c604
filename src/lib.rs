//! A rotatable color wheel widget for druid.
//!
//! The wheel spins in response to a vertical drag gesture and eases toward its
//! new rotation over a fixed duration. A fixed pointer at 12 o'clock marks the
//! selected segment; once the animation settles the committed color label and
//! angle are published to the app data.
///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// Modules
///
///////////////////////////////////////////////////////////////////////////////////////////////////
pub mod easing;
pub mod segments;
pub mod spinning;
pub mod wheel;

use std::fmt;

use druid::{Color, Data};

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// ColorLabel
///
///////////////////////////////////////////////////////////////////////////////////////////////////
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Data)]
pub enum ColorLabel {
    Red,
    Green,
    Yellow,
    Blue,
}

impl ColorLabel {
    /// The fill used when painting this label's wheel segment.
    pub fn fill(self) -> Color {
        match self {
            ColorLabel::Red => Color::rgb8(0xce, 0x42, 0x57),
            ColorLabel::Green => Color::rgb8(0x06, 0xd6, 0xa0),
            ColorLabel::Yellow => Color::rgb8(0xfe, 0xe4, 0x40),
            ColorLabel::Blue => Color::rgb8(0x43, 0x61, 0xee),
        }
    }
}

impl fmt::Display for ColorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorLabel::Red => "Red",
            ColorLabel::Green => "Green",
            ColorLabel::Yellow => "Yellow",
            ColorLabel::Blue => "Blue",
        };
        f.write_str(name)
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
///
/// SpinPhase
///
///////////////////////////////////////////////////////////////////////////////////////////////////

/// The two states of the wheel's animation lifecycle.
///
/// A gesture update moves the wheel to `Animating`; the settle event commits
/// the classification and returns it to `Settled`. Settling an already
/// settled wheel is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Data)]
pub enum SpinPhase {
    Settled,
    Animating,
}
