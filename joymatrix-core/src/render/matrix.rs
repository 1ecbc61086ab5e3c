//! LED matrix adapter

use crate::assets::{bitmap_for, Bitmap};
use crate::state::ScreenId;
use crate::traits::matrix::MAX_BRIGHTNESS;
use crate::traits::LedMatrix;

/// Device that shows the screen images
pub const IMAGE_DEVICE: u8 = 0;

/// Stateless LED matrix facade
pub struct MatrixAdapter;

impl MatrixAdapter {
    /// Show the image of a screen
    pub fn render<M: LedMatrix>(matrix: &mut M, screen: ScreenId) {
        Self::draw(matrix, bitmap_for(screen));
    }

    /// Write all rows of an image
    pub fn draw<M: LedMatrix>(matrix: &mut M, bitmap: &Bitmap) {
        for (row, bits) in bitmap.iter().enumerate() {
            matrix.set_row(IMAGE_DEVICE, row as u8, *bits);
        }
    }

    /// Turn the image off
    pub fn blank<M: LedMatrix>(matrix: &mut M) {
        matrix.clear(IMAGE_DEVICE);
    }

    /// Set the intensity of every device, clamped to the supported range
    pub fn apply_brightness<M: LedMatrix>(matrix: &mut M, device_count: u8, level: u8) {
        let level = level.min(MAX_BRIGHTNESS);
        for device in 0..device_count {
            matrix.set_brightness(device, level);
        }
    }
}
