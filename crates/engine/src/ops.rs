//! Pixel-level transforms.
//!
//! Every function here is pure: it borrows one source image, allocates the
//! result, and never retains a reference to either. That keeps each history
//! snapshot a complete, independently valid image.

use core_types::{MirrorDirection, RasterImage, RepeatDirection, RotateDirection};

/// Zero the red channel of every pixel; green and blue pass through.
pub fn zero_red(img: &RasterImage) -> RasterImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        px[0] = 0;
    }
    out
}

/// Convert to grayscale with the standard luma weights, rounding
/// half-away-from-zero, and store the result into all three channels.
pub fn grayscale(img: &RasterImage) -> RasterImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        let luma = 0.299 * px[0] as f64 + 0.587 * px[1] as f64 + 0.114 * px[2] as f64;
        let g = luma.round() as u8;
        px.copy_from_slice(&[g, g, g]);
    }
    out
}

/// Replace every channel value `c` with `255 - c`.
pub fn invert(img: &RasterImage) -> RasterImage {
    let mut out = img.clone();
    for px in out.pixels_mut() {
        for c in px {
            *c = 255 - *c;
        }
    }
    out
}

/// Mirror across the middle of the chosen axis.
///
/// Horizontal keeps rows above the midline and reflects them onto the rows
/// below it, so the bottom half becomes a mirror of the top half rather than
/// the whole image flipping. Vertical is the column analogue: the left half
/// is kept and reflected onto the right. Longstanding behavior; editors built
/// on this engine rely on it.
pub fn mirror(img: &RasterImage, dir: MirrorDirection) -> RasterImage {
    let (w, h) = (img.width(), img.height());
    let mut out = RasterImage::new(w, h);
    match dir {
        MirrorDirection::Horizontal => {
            for y in 0..h {
                let src = if y < h / 2 { y } else { h - 1 - y };
                out.row_mut(y).copy_from_slice(img.row(src));
            }
        }
        MirrorDirection::Vertical => {
            for y in 0..h {
                for x in 0..w {
                    let src = if x < w / 2 { x } else { w - 1 - x };
                    out.set_pixel(x, y, img.pixel(src, y));
                }
            }
        }
    }
    out
}

/// Rotate a quarter turn; the output dimensions are the input's swapped.
pub fn rotate(img: &RasterImage, dir: RotateDirection) -> RasterImage {
    let (w, h) = (img.width(), img.height());
    let mut out = RasterImage::new(h, w);
    for y in 0..h {
        for x in 0..w {
            let px = img.pixel(x, y);
            match dir {
                RotateDirection::Clockwise => out.set_pixel(h - 1 - y, x, px),
                RotateDirection::CounterClockwise => out.set_pixel(y, w - 1 - x, px),
            }
        }
    }
    out
}

/// Tile the image `count` times along the chosen axis. A count of zero, or
/// one whose tiled dimension overflows `u32`, degenerates to an empty image;
/// callers reject both upstream.
pub fn repeat(img: &RasterImage, count: u32, dir: RepeatDirection) -> RasterImage {
    let (w, h) = (img.width(), img.height());
    match dir {
        RepeatDirection::Horizontal => {
            let Some(out_w) = w.checked_mul(count) else {
                return RasterImage::new(0, h);
            };
            let mut out = RasterImage::new(out_w, h);
            for y in 0..h {
                let src = img.row(y);
                let stride = src.len();
                for tile in 0..count as usize {
                    out.row_mut(y)[tile * stride..(tile + 1) * stride].copy_from_slice(src);
                }
            }
            out
        }
        RepeatDirection::Vertical => {
            let Some(out_h) = h.checked_mul(count) else {
                return RasterImage::new(w, 0);
            };
            let mut out = RasterImage::new(w, out_h);
            for y in 0..out_h {
                out.row_mut(y).copy_from_slice(img.row(y % h));
            }
            out
        }
    }
}

/// Resample to `floor(w * factor) x floor(h * factor)` with bilinear
/// interpolation. Each output pixel maps back to the source by the inverse
/// scale, blends its four nearest source neighbors, and clamps at the edges.
///
/// Either output dimension reaching zero yields an empty image rather than a
/// panic; the same holds for non-positive factors, which truncate to zero
/// under the saturating cast.
pub fn zoom(img: &RasterImage, factor: f64) -> RasterImage {
    let out_w = (img.width() as f64 * factor) as u32;
    let out_h = (img.height() as f64 * factor) as u32;
    let mut out = RasterImage::new(out_w, out_h);
    if out.is_empty() || img.is_empty() {
        return out;
    }

    let max_x = img.width() - 1;
    let max_y = img.height() - 1;
    for y in 0..out_h {
        let src_y = y as f64 / factor;
        let y0 = (src_y as u32).min(max_y);
        let y1 = (y0 + 1).min(max_y);
        let fy = (src_y - y0 as f64).clamp(0.0, 1.0);
        for x in 0..out_w {
            let src_x = x as f64 / factor;
            let x0 = (src_x as u32).min(max_x);
            let x1 = (x0 + 1).min(max_x);
            let fx = (src_x - x0 as f64).clamp(0.0, 1.0);

            let p00 = img.pixel(x0, y0);
            let p10 = img.pixel(x1, y0);
            let p01 = img.pixel(x0, y1);
            let p11 = img.pixel(x1, y1);
            let mut px = [0u8; 3];
            for c in 0..3 {
                let top = p00[c] as f64 * (1.0 - fx) + p10[c] as f64 * fx;
                let bottom = p01[c] as f64 * (1.0 - fx) + p11[c] as f64 * fx;
                px[c] = (top * (1.0 - fy) + bottom * fy).round() as u8;
            }
            out.set_pixel(x, y, px);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> RasterImage {
        // 2x2: red, green / blue, white
        RasterImage::from_raw(
            2,
            2,
            vec![
                255, 0, 0, 0, 255, 0, //
                0, 0, 255, 255, 255, 255,
            ],
        )
        .unwrap()
    }

    #[test]
    fn zero_red_clears_only_the_red_channel() {
        let out = zero_red(&quad());
        assert_eq!(out.pixel(0, 0), [0, 0, 0]);
        assert_eq!(out.pixel(1, 0), [0, 255, 0]);
        assert_eq!(out.pixel(0, 1), [0, 0, 255]);
        assert_eq!(out.pixel(1, 1), [0, 255, 255]);
    }

    #[test]
    fn grayscale_uses_luma_weights_and_rounds() {
        let img = RasterImage::from_raw(2, 1, vec![255, 0, 0, 10, 20, 30]).unwrap();
        let out = grayscale(&img);
        // 0.299 * 255 = 76.245 -> 76
        assert_eq!(out.pixel(0, 0), [76, 76, 76]);
        // 2.99 + 11.74 + 3.42 = 18.15 -> 18
        assert_eq!(out.pixel(1, 0), [18, 18, 18]);
    }

    #[test]
    fn grayscale_is_idempotent() {
        let once = grayscale(&quad());
        assert_eq!(grayscale(&once), once);
    }

    #[test]
    fn invert_twice_is_identity() {
        let img = quad();
        assert_eq!(invert(&img).pixel(0, 0), [0, 255, 255]);
        assert_eq!(invert(&invert(&img)), img);
    }

    #[test]
    fn horizontal_mirror_reflects_the_top_half_downward() {
        // 1x4 column: rows 0,1 kept; rows 2,3 take rows 1,0.
        let img = RasterImage::from_raw(1, 4, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]).unwrap();
        let out = mirror(&img, MirrorDirection::Horizontal);
        assert_eq!(out.pixel(0, 0), [1, 1, 1]);
        assert_eq!(out.pixel(0, 1), [2, 2, 2]);
        assert_eq!(out.pixel(0, 2), [2, 2, 2]);
        assert_eq!(out.pixel(0, 3), [1, 1, 1]);
    }

    #[test]
    fn vertical_mirror_reflects_the_left_half_rightward() {
        let img = RasterImage::from_raw(4, 1, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]).unwrap();
        let out = mirror(&img, MirrorDirection::Vertical);
        assert_eq!(out.pixel(0, 0), [1, 1, 1]);
        assert_eq!(out.pixel(1, 0), [2, 2, 2]);
        assert_eq!(out.pixel(2, 0), [2, 2, 2]);
        assert_eq!(out.pixel(3, 0), [1, 1, 1]);
    }

    #[test]
    fn clockwise_rotation_maps_the_four_corners() {
        let img = quad();
        let out = rotate(&img, RotateDirection::Clockwise);
        assert_eq!(out.width(), 2);
        assert_eq!(out.height(), 2);
        assert_eq!(out.pixel(1, 0), img.pixel(0, 0));
        assert_eq!(out.pixel(1, 1), img.pixel(1, 0));
        assert_eq!(out.pixel(0, 1), img.pixel(1, 1));
        assert_eq!(out.pixel(0, 0), img.pixel(0, 1));
    }

    #[test]
    fn counter_clockwise_undoes_clockwise() {
        let img = RasterImage::from_raw(3, 2, (0u8..18).collect()).unwrap();
        let cw = rotate(&img, RotateDirection::Clockwise);
        assert_eq!(cw.width(), 2);
        assert_eq!(cw.height(), 3);
        assert_eq!(rotate(&cw, RotateDirection::CounterClockwise), img);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let img = RasterImage::from_raw(3, 2, (0u8..18).collect()).unwrap();
        let mut turned = img.clone();
        for _ in 0..4 {
            turned = rotate(&turned, RotateDirection::Clockwise);
        }
        assert_eq!(turned, img);
    }

    #[test]
    fn repeat_once_is_identity() {
        let img = quad();
        assert_eq!(repeat(&img, 1, RepeatDirection::Horizontal), img);
        assert_eq!(repeat(&img, 1, RepeatDirection::Vertical), img);
    }

    #[test]
    fn repeat_tiles_exact_copies() {
        let img = quad();
        let wide = repeat(&img, 3, RepeatDirection::Horizontal);
        assert_eq!(wide.width(), 6);
        assert_eq!(wide.height(), 2);
        for tile in 0..3 {
            assert_eq!(wide.pixel(tile * 2, 0), img.pixel(0, 0));
            assert_eq!(wide.pixel(tile * 2 + 1, 1), img.pixel(1, 1));
        }

        let tall = repeat(&img, 2, RepeatDirection::Vertical);
        assert_eq!(tall.width(), 2);
        assert_eq!(tall.height(), 4);
        assert_eq!(tall.pixel(0, 2), img.pixel(0, 0));
        assert_eq!(tall.pixel(1, 3), img.pixel(1, 1));
    }

    #[test]
    fn repeat_zero_degenerates_without_panicking() {
        let out = repeat(&quad(), 0, RepeatDirection::Horizontal);
        assert!(out.is_empty());
        assert_eq!(out.height(), 2);
    }

    #[test]
    fn repeat_overflowing_the_dimension_range_degenerates() {
        // 2 * u32::MAX does not fit a dimension in either direction.
        assert!(repeat(&quad(), u32::MAX, RepeatDirection::Horizontal).is_empty());
        assert!(repeat(&quad(), u32::MAX, RepeatDirection::Vertical).is_empty());
    }

    #[test]
    fn zoom_at_factor_one_is_identity() {
        let img = quad();
        assert_eq!(zoom(&img, 1.0), img);
    }

    #[test]
    fn zoom_truncates_output_dimensions() {
        let img = RasterImage::new(3, 2);
        let out = zoom(&img, 1.4);
        // floor(3 * 1.4) = 4, floor(2 * 1.4) = 2
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 2);
    }

    #[test]
    fn zoom_doubling_interpolates_between_neighbors() {
        let img = RasterImage::from_raw(2, 1, vec![0, 0, 0, 100, 100, 100]).unwrap();
        let out = zoom(&img, 2.0);
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 2);
        assert_eq!(out.pixel(0, 0), [0, 0, 0]);
        assert_eq!(out.pixel(1, 0), [50, 50, 50]);
        assert_eq!(out.pixel(2, 0), [100, 100, 100]);
        // Right edge clamps to the last source column.
        assert_eq!(out.pixel(3, 0), [100, 100, 100]);
    }

    #[test]
    fn degenerate_zooms_yield_empty_images() {
        let img = quad();
        assert!(zoom(&img, 0.1).is_empty());
        assert!(zoom(&img, 0.0).is_empty());
        assert!(zoom(&img, -2.0).is_empty());
        assert!(zoom(&RasterImage::new(0, 0), 3.0).is_empty());
    }
}
