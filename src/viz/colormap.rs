//! Linear color gradients

use image::Rgb;

/// Piecewise-linear gradient over `[0, 1]`
#[derive(Clone, Debug, PartialEq)]
pub struct Colormap {
    stops: Vec<(f64, [u8; 3])>,
}

impl Colormap {
    /// Gradient through sorted `(position, color)` stops
    pub fn new(mut stops: Vec<(f64, [u8; 3])>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { stops }
    }

    /// Five-stop approximation of matplotlib's viridis
    pub fn viridis() -> Self {
        Self::new(vec![
            (0.0, [68, 1, 84]),
            (0.25, [59, 82, 139]),
            (0.5, [33, 145, 140]),
            (0.75, [94, 201, 98]),
            (1.0, [253, 231, 37]),
        ])
    }

    /// Color for `value`, clamped into the stop range; NaN maps to the first stop
    pub fn color(&self, value: f64) -> Rgb<u8> {
        let Some(&(first_pos, first)) = self.stops.first() else {
            return Rgb([0, 0, 0]);
        };
        if value.is_nan() || value <= first_pos {
            return Rgb(first);
        }

        for pair in self.stops.windows(2) {
            let (lo_pos, lo) = pair[0];
            let (hi_pos, hi) = pair[1];
            if value <= hi_pos {
                let span = hi_pos - lo_pos;
                let t = if span > 0.0 { (value - lo_pos) / span } else { 1.0 };
                return Rgb(lerp(lo, hi, t));
            }
        }

        Rgb(self.stops[self.stops.len() - 1].1)
    }
}

fn lerp(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    [mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2])]
}
