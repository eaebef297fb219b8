//! Bicubic resampling with tile-flip edge wrapping.
//!
//! Hand-rolled rather than delegated to `image::imageops::resize` because the
//! ecosystem resamplers clamp out-of-bounds taps to the edge pixel, while the
//! resize contract here mirrors them across the edges instead.

use image::{Rgba, RgbaImage};

/// Catmull-Rom spline, the bicubic kernel with a = -0.5. Support radius 2.
fn catmull_rom(t: f32) -> f32 {
    let t = t.abs();
    if t < 1.0 {
        (1.5 * t - 2.5) * t * t + 1.0
    } else if t < 2.0 {
        ((-0.5 * t + 2.5) * t - 4.0) * t + 2.0
    } else {
        0.0
    }
}

/// Resolve a sample coordinate that may fall outside `[0, len)` by mirroring
/// across the image edges: `.., 1, 0 | 0, 1, .., len-1 | len-1, .., 0 | ..`
pub(crate) fn mirror_index(coord: i64, len: u32) -> u32 {
    debug_assert!(len > 0);
    let len = i64::from(len);
    let m = coord.rem_euclid(2 * len);
    if m < len {
        m as u32
    } else {
        (2 * len - 1 - m) as u32
    }
}

/// Per-output-pixel tap start positions and normalized weights for one axis.
///
/// When minifying, the kernel is stretched by the scale factor so the filter
/// window covers every contributing source pixel; the discrete weight sum is
/// then divided out.
fn filter_bank(in_len: u32, out_len: u32) -> (Vec<i64>, Vec<Vec<f32>>) {
    let scale = in_len as f32 / out_len as f32;
    let filter_scale = scale.max(1.0);
    let support = 2.0 * filter_scale;

    let mut starts = Vec::with_capacity(out_len as usize);
    let mut banks = Vec::with_capacity(out_len as usize);
    for o in 0..out_len {
        // Pixel-center mapping between source and destination grids.
        let center = (o as f32 + 0.5) * scale - 0.5;
        let start = (center - support).ceil() as i64;
        let end = (center + support).floor() as i64;

        let mut weights = Vec::with_capacity((end - start + 1) as usize);
        let mut sum = 0.0f32;
        for i in start..=end {
            let w = catmull_rom((i as f32 - center) / filter_scale);
            sum += w;
            weights.push(w);
        }
        for w in &mut weights {
            *w /= sum;
        }

        starts.push(start);
        banks.push(weights);
    }
    (starts, banks)
}

/// Resample the full source bounds into a fresh `width` x `height` buffer.
///
/// Separable two-pass convolution: rows first into an f32 intermediate, then
/// columns into the destination. Direct overwrite, no blending.
pub(crate) fn resample(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (src_w, src_h) = src.dimensions();
    debug_assert!(src_w > 0 && src_h > 0);
    debug_assert!(width > 0 && height > 0);

    let (h_starts, h_banks) = filter_bank(src_w, width);
    let mut mid = vec![0.0f32; width as usize * src_h as usize * 4];
    for y in 0..src_h {
        for x in 0..width {
            let start = h_starts[x as usize];
            let mut acc = [0.0f32; 4];
            for (k, &w) in h_banks[x as usize].iter().enumerate() {
                let sx = mirror_index(start + k as i64, src_w);
                let p = src.get_pixel(sx, y).0;
                for (a, &c) in acc.iter_mut().zip(&p) {
                    *a += w * f32::from(c);
                }
            }
            let off = (y as usize * width as usize + x as usize) * 4;
            mid[off..off + 4].copy_from_slice(&acc);
        }
    }

    let (v_starts, v_banks) = filter_bank(src_h, height);
    let mut dst = RgbaImage::new(width, height);
    for y in 0..height {
        let start = v_starts[y as usize];
        for x in 0..width {
            let mut acc = [0.0f32; 4];
            for (k, &w) in v_banks[y as usize].iter().enumerate() {
                let sy = mirror_index(start + k as i64, src_h);
                let off = (sy as usize * width as usize + x as usize) * 4;
                for (a, &m) in acc.iter_mut().zip(&mid[off..off + 4]) {
                    *a += w * m;
                }
            }
            let mut px = [0u8; 4];
            for (o, &a) in px.iter_mut().zip(&acc) {
                *o = a.round().clamp(0.0, 255.0) as u8;
            }
            dst.put_pixel(x, y, Rgba(px));
        }
    }

    dst
}
