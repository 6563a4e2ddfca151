//! Shared score curves. All inputs are non-negative counts or measurements;
//! outputs are points within a component's range.

/// `value * per_unit`, capped at `cap`.
pub fn saturating(value: f64, per_unit: f64, cap: f64) -> f64 {
    (value.max(0.0) * per_unit).min(cap)
}

/// Full `max` inside `[low, high]`, dropping linearly to zero `falloff`
/// units outside the band.
pub fn band(value: f64, low: f64, high: f64, max: f64, falloff: f64) -> f64 {
    let distance = if value < low {
        low - value
    } else if value > high {
        value - high
    } else {
        0.0
    };
    if falloff <= 0.0 {
        return if distance == 0.0 { max } else { 0.0 };
    }
    (max * (1.0 - distance / falloff)).max(0.0)
}

pub fn flag(present: bool, points: f64) -> f64 {
    if present {
        points
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturating_caps() {
        assert_eq!(saturating(3.0, 4.0, 20.0), 12.0);
        assert_eq!(saturating(10.0, 4.0, 20.0), 20.0);
        assert_eq!(saturating(-2.0, 4.0, 20.0), 0.0);
    }

    #[test]
    fn band_edges() {
        assert_eq!(band(45.0, 30.0, 60.0, 25.0, 30.0), 25.0);
        assert_eq!(band(75.0, 30.0, 60.0, 25.0, 30.0), 12.5);
        assert_eq!(band(0.0, 30.0, 60.0, 25.0, 30.0), 0.0);
        assert_eq!(band(10.0, 20.0, 20.0, 5.0, 0.0), 0.0);
    }
}
