//! Rotated bounding-box computation.
//!
//! The interactive crop widget reports its pixel rectangle relative to the
//! axis-aligned bounding box of the *rotated* image, so the extractor needs
//! the exact same box dimensions the widget worked against.

/// Compute the axis-aligned bounding box of an image rotated by the
/// given angle.
///
/// For a source of `width` x `height` and angle θ:
///
/// ```text
/// bw = |cos θ| * width + |sin θ| * height
/// bh = |sin θ| * width + |cos θ| * height
/// ```
///
/// Angles that are multiples of 90° take exact fast paths so that a quarter
/// turn swaps the dimensions with no floating-point drift. Results are never
/// zero.
pub fn rotated_bounds(width: u32, height: u32, angle_degrees: f64) -> (u32, u32) {
    // Normalize so 450° behaves like 90° and -90° like 270°
    let angle = angle_degrees.rem_euclid(360.0);

    const EPS: f64 = 0.001;
    if angle < EPS || angle > 360.0 - EPS || (angle - 180.0).abs() < EPS {
        return (width, height);
    }
    if (angle - 90.0).abs() < EPS || (angle - 270.0).abs() < EPS {
        return (height, width);
    }

    let rad = angle.to_radians();
    let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
    let (w, h) = (width as f64, height as f64);

    let bw = (cos * w + sin * h).round() as u32;
    let bh = (sin * w + cos * h).round() as u32;

    (bw.max(1), bh.max(1))
}
