//! Return-to-color mapping for the treemap

/// Lowest return with its own color, in percent
pub const RETURN_LOWER: f64 = -2.0;
/// Highest return with its own color, in percent
pub const RETURN_UPPER: f64 = 2.0;
/// Width of one color bin, in percent
pub const RETURN_STEP: f64 = 0.2;
/// Number of color bins between the bounds
pub const COLOR_BINS: usize = 20;

/// Color of the bin containing `ret`.
///
/// Bins are right-closed, `(-2.0, -1.8]` and so on, except that the lowest
/// one includes `-2.0`. Returns outside `[-2, 2]` take the outermost color.
/// Colors run from red to green through orange and yellow.
pub fn color_for_return(ret: f64) -> String {
    let bin = if ret <= RETURN_LOWER {
        0
    } else if ret >= RETURN_UPPER {
        COLOR_BINS - 1
    } else {
        // Rounded so float noise does not push an edge into the next bin
        let offset = ((ret - RETURN_LOWER) / RETURN_STEP * 1e9).round() / 1e9;
        (offset.ceil() as usize).saturating_sub(1).min(COLOR_BINS - 1)
    };
    bin_color(bin)
}

/// Hex color of bin `i`, interpolated in HSL from red to green
fn bin_color(i: usize) -> String {
    let t = i as f64 / (COLOR_BINS - 1) as f64;
    let hue = t / 3.0;
    let lightness = 0.5 - 0.25 * t;
    let (r, g, b) = hsl_to_rgb(hue, 1.0, lightness);
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let channel = |mut t: f64| {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };
    (channel(h + 1.0 / 3.0), channel(h), channel(h - 1.0 / 3.0))
}

/// Quantile `q` in `[0, 1]` with linear interpolation between order
/// statistics. `None` for an empty slice.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let pos = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64))
}

/// Symmetric color scale bound for `returns`, ignoring `outliers_pct`
/// percent of the values split between both tails. Rounded to the nearest
/// 0.5, ties to even.
pub fn color_range(returns: &[f64], outliers_pct: f64) -> Option<f64> {
    let low = quantile(returns, outliers_pct / 2.0 / 100.0)?;
    let high = quantile(returns, (100.0 - outliers_pct) / 2.0 / 100.0)?;
    let bound = low.abs().max(high.abs());
    Some((bound * 2.0).round_ties_even() / 2.0)
}
