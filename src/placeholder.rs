//! Local stand-ins for the `/api/placeholder/{w}/{h}` project images.

use image::{ImageBuffer, Rgba, RgbaImage};

pub const DEFAULT_SIZE: (u32, u32) = (800, 400);
const MAX_SIDE: u32 = 4096;
const FRAME: u32 = 2;

const FILL: Rgba<u8> = Rgba([229, 231, 235, 255]);
const EDGE: Rgba<u8> = Rgba([156, 163, 175, 255]);

/// Width and height encoded in a placeholder path, if it is one.
pub fn parse_dimensions(src: &str) -> Option<(u32, u32)> {
    let rest = src.trim_end_matches('/').strip_prefix("/api/placeholder/")?;
    let (width, height) = rest.split_once('/')?;
    let width: u32 = width.parse().ok()?;
    let height: u32 = height.parse().ok()?;
    if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
        return None;
    }
    Some((width, height))
}

/// Draw a neutral framed image sized after `src`, falling back to [`DEFAULT_SIZE`].
pub fn render(src: &str) -> RgbaImage {
    let (width, height) = parse_dimensions(src).unwrap_or(DEFAULT_SIZE);
    ImageBuffer::from_fn(width, height, |x, y| {
        let on_frame = x < FRAME || y < FRAME || x >= width.saturating_sub(FRAME) || y >= height.saturating_sub(FRAME);
        if on_frame { EDGE } else { FILL }
    })
}
