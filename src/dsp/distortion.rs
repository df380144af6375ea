//! Soft clipping.
//!
//! Every voice is soft-clipped on its own before it reaches the mix, and the
//! effects bus applies the same curve as its final limiter:
//!
//!   f(x) = x / (1 + k·|x|),  k = 0.5
//!
//! - Nearly linear for small signals (f(0.1) ≈ 0.095)
//! - Smoothly compresses peaks, no hard corner
//! - Output magnitude stays strictly below 1/k = 2 for any finite input,
//!   and strictly below 1 for any |x| < 2
//!
//! Clipping per voice rather than on the sum means one loud hit cannot
//! squash quieter voices sounding alongside it.

/// Knee of the soft clip curve.
pub const SOFT_CLIP_KNEE: f64 = 0.5;

#[inline]
pub fn soft_clip(sample: f64) -> f64 {
    sample / (1.0 + SOFT_CLIP_KNEE * sample.abs())
}

/// Apply soft clipping to an entire buffer in place.
pub fn soft_clip_buffer(buffer: &mut [f64]) {
    for sample in buffer.iter_mut() {
        *sample = soft_clip(*sample);
    }
}
