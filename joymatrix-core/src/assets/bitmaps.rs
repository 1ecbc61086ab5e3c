//! LED matrix images
//!
//! One 8x8 image per screen, row 0 at the top, MSB on the left.

use crate::state::ScreenId;

/// An 8x8 monochrome image
pub type Bitmap = [u8; 8];

/// Images indexed by [`ScreenId::index`]
pub static IMAGES: [Bitmap; ScreenId::COUNT] = [
    // Welcome: stick figure
    [
        0b00011000,
        0b00111100,
        0b00011000,
        0b00111100,
        0b01011010,
        0b00011000,
        0b00100100,
        0b00100100,
    ],
    // PlayGame: play symbol in a ring
    [
        0b00111100,
        0b01000010,
        0b10011001,
        0b10010101,
        0b10011001,
        0b10010001,
        0b01000010,
        0b00111100,
    ],
    // Highscore: medal
    [
        0b10000001,
        0b10000001,
        0b01000010,
        0b00100100,
        0b00011000,
        0b00100100,
        0b00100100,
        0b00011000,
    ],
    // Settings: wrench
    [
        0b01100110,
        0b10001111,
        0b10100111,
        0b01011010,
        0b00011000,
        0b00100100,
        0b01000010,
        0b10000001,
    ],
    // About: question mark
    [
        0b00011000,
        0b00100100,
        0b00100100,
        0b00000100,
        0b00011000,
        0b00010000,
        0b00000000,
        0b00010000,
    ],
    // HowToPlay: gamepad
    [
        0b01000010,
        0b10111101,
        0b10000001,
        0b10100101,
        0b10000001,
        0b10011001,
        0b10100101,
        0b01000010,
    ],
    // EndGame: crossed-out eyes, frown
    [
        0b00000000,
        0b10100101,
        0b01000010,
        0b10100101,
        0b00000000,
        0b00011000,
        0b00100100,
        0b01000010,
    ],
    // WinGame: trophy
    [
        0b01111110,
        0b01111110,
        0b01111110,
        0b00111100,
        0b00011000,
        0b00011000,
        0b00011000,
        0b00111100,
    ],
];

// One image per screen, in discriminant order
const _: () = assert!(IMAGES.len() == ScreenId::COUNT);

/// Image shown for a screen
pub fn bitmap_for(screen: ScreenId) -> &'static Bitmap {
    let image = IMAGES.get(screen.index());
    debug_assert!(image.is_some(), "no image for screen");
    image.unwrap_or(&IMAGES[ScreenId::Welcome.index()])
}

/// Check whether a pixel is lit (`x` from the left, `y` from the top)
pub fn pixel(bitmap: &Bitmap, x: u8, y: u8) -> bool {
    match bitmap.get(y as usize) {
        Some(row) if x < 8 => row & (0x80 >> x) != 0,
        _ => false,
    }
}
