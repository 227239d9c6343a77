//! GIF assembly

use std::fs;
use std::path::Path;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, RgbaImage};

use crate::error::{GraphAnimError, Result};

/// Quantizer speed; 1 is slowest and best, 30 fastest
const ENCODER_SPEED: i32 = 10;

/// Encode `frames` as an animated GIF
///
/// Without `repeat` no looping extension is written and viewers play the
/// animation once.
pub fn encode_gif(frames: Vec<RgbaImage>, delay_ms: u32, repeat: bool) -> Result<Vec<u8>> {
    if frames.is_empty() {
        return Err(GraphAnimError::invalid_value("frame count", 0));
    }

    let mut buffer = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut buffer, ENCODER_SPEED);
        if repeat {
            encoder.set_repeat(Repeat::Infinite)?;
        }
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        encoder.encode_frames(
            frames
                .into_iter()
                .map(|image| Frame::from_parts(image, 0, 0, delay)),
        )?;
    }
    Ok(buffer)
}

/// Encode `frames` and write them to `path`
#[tracing::instrument(skip(frames, path), fields(file = %path.display(), count = frames.len()))]
pub fn write_gif(frames: Vec<RgbaImage>, path: &Path, delay_ms: u32, repeat: bool) -> Result<()> {
    let bytes = encode_gif(frames, delay_ms, repeat)?;
    fs::write(path, &bytes).map_err(|e| GraphAnimError::ExportFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    tracing::debug!(bytes = bytes.len(), "gif_written");
    Ok(())
}
