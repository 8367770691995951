//! Luminance to glyph mapping.

/// Glyph palette ordered from densest (darkest input) to blank (brightest input).
///
/// The eleventh entry only exists so that a luminance of exactly 250..=255
/// has a slot after the `/ 25` bucketing.
pub const PALETTE: [char; 11] = ['#', '@', '%', '+', '*', '=', ':', '-', '.', ' ', ' '];

/// Width of one palette bucket in grey levels.
pub const BUCKET_WIDTH: u32 = 25;

/// Channel weights for blue, green and red.
const BLUE_WEIGHT: f64 = 0.07;
const GREEN_WEIGHT: f64 = 0.72;
const RED_WEIGHT: f64 = 0.21;

/// Compute the average weighted luminance of `sample_count` pixels.
///
/// The weighted sum is truncated to an integer before it is divided by the
/// sample count. A `sample_count` of zero is treated as one.
#[inline]
pub fn luminance(blue_sum: u64, green_sum: u64, red_sum: u64, sample_count: u64) -> u32 {
    let weighted =
        BLUE_WEIGHT * blue_sum as f64 + GREEN_WEIGHT * green_sum as f64 + RED_WEIGHT * red_sum as f64;
    ((weighted as u64) / sample_count.max(1)).min(u64::from(u32::MAX)) as u32
}

/// Palette slot for a grey level. Values above 255 clamp to the last slot.
#[inline]
pub fn palette_index(luminance: u32) -> usize {
    ((luminance / BUCKET_WIDTH) as usize).min(PALETTE.len() - 1)
}

/// Pick the glyph for accumulated channel intensities.
#[inline]
pub fn glyph_for(blue_sum: u64, green_sum: u64, red_sum: u64, sample_count: u64) -> char {
    PALETTE[palette_index(luminance(blue_sum, green_sum, red_sum, sample_count))]
}

/// Running per-channel totals over a block of BGR pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelSums {
    pub blue: u64,
    pub green: u64,
    pub red: u64,
}

impl ChannelSums {
    /// Add one pixel. `bgr` must hold at least three bytes.
    #[inline]
    pub fn add(&mut self, bgr: &[u8]) {
        self.blue += u64::from(bgr[0]);
        self.green += u64::from(bgr[1]);
        self.red += u64::from(bgr[2]);
    }

    /// Glyph for the average over `sample_count` added pixels.
    #[inline]
    pub fn glyph(&self, sample_count: u64) -> char {
        glyph_for(self.blue, self.green, self.red, sample_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_is_densest() {
        assert_eq!(glyph_for(0, 0, 0, 1), '#');
    }

    #[test]
    fn test_white_is_blank() {
        assert_eq!(glyph_for(255, 255, 255, 1), ' ');
    }

    #[test]
    fn test_green_dominates() {
        // 0.72 * 255 = 183.6 -> 183 -> bucket 7
        assert_eq!(luminance(0, 255, 0, 1), 183);
        assert_eq!(glyph_for(0, 255, 0, 1), '-');
        // 0.07 * 255 = 17.85 -> 17 -> bucket 0
        assert_eq!(glyph_for(255, 0, 0, 1), '#');
    }

    #[test]
    fn test_zero_samples_treated_as_one() {
        assert_eq!(luminance(0, 100, 0, 0), luminance(0, 100, 0, 1));
    }

    #[test]
    fn test_out_of_range_clamps() {
        assert_eq!(palette_index(10_000), PALETTE.len() - 1);
    }

    #[test]
    fn test_large_sample_count_not_truncated() {
        // 65537^2 does not fit in 32 bits
        let samples = 65_537u64 * 65_537;
        let sum = 128 * samples;
        assert_eq!(palette_index(luminance(sum, sum, sum, samples)), 5);
        assert_eq!(glyph_for(sum, sum, sum, samples), '=');
    }

    #[test]
    fn test_channel_sums_average() {
        let mut sums = ChannelSums::default();
        for _ in 0..9 {
            sums.add(&[128, 128, 128]);
        }
        assert_eq!(sums.green, 1152);
        assert_eq!(sums.glyph(9), '=');
    }
}
