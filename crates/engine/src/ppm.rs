//! Plain-text PPM ("P3") codec.
//!
//! The dialect is deliberately narrow: magic `P3`, width, height, a max
//! channel value that must be 255, then `3*w*h` whitespace-separated channel
//! values in row-major order. `#`-comment lines are recognized ahead of the
//! magic line only; a `#` anywhere later is an ordinary (and unparseable)
//! token.

use core_types::RasterImage;

use crate::{FormatError, Result};

/// Decode a P3 stream into an image. A failed decode constructs nothing, so
/// callers keep whatever image they already had.
pub fn decode(text: &str) -> Result<RasterImage> {
    let mut lines = text.lines();
    let magic = loop {
        match lines.next() {
            Some(line) if line.starts_with('#') => continue,
            Some(line) => break line,
            None => return Err(FormatError::BadMagic),
        }
    };
    if magic != "P3" {
        return Err(FormatError::BadMagic);
    }

    let mut tokens = lines.flat_map(str::split_whitespace);
    let width = header_value(tokens.next())?;
    let height = header_value(tokens.next())?;
    let max = header_value(tokens.next())?;
    if max != 255 {
        return Err(FormatError::UnsupportedMaxValue(max));
    }

    // The header dimensions are untrusted: their product may not fit, and
    // must not size an allocation before the tokens back it up.
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(3);
    let mut data = Vec::with_capacity(expected.min(text.len()));
    for token in tokens {
        let value = channel_value(token)?;
        if value > 255 {
            return Err(FormatError::ChannelOutOfRange(value));
        }
        data.push(value as u8);
    }

    let found = data.len();
    RasterImage::from_raw(width, height, data)
        .ok_or(FormatError::PixelCountMismatch { expected, found })
}

/// Encode an image as a P3 stream: header, then one line per pixel row with
/// `3*w` space-separated values and no trailing space.
pub fn encode(img: &RasterImage) -> String {
    let mut out = String::with_capacity(img.data().len() * 4 + 16);
    out.push_str(&format!("P3\n{} {}\n255\n", img.width(), img.height()));
    for y in 0..img.height() {
        let row: Vec<String> = img.row(y).iter().map(|v| v.to_string()).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}

fn header_value(token: Option<&str>) -> Result<u32> {
    channel_value(token.ok_or(FormatError::IncompleteHeader)?)
}

fn channel_value(token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|_| FormatError::InvalidToken(token.to_string()))
}
