//! # Confidence Range
//!
//! Every confidence score attached to an extracted or refined metric lies in
//! `[CONFIDENCE_FLOOR, CONFIDENCE_CEILING]`. No score ever reaches 1.0: the
//! engine reads numbers out of prose and never claims certainty.

/// Lowest confidence any metric can carry.
pub const CONFIDENCE_FLOOR: f64 = 0.1;

/// Highest confidence any metric can carry.
pub const CONFIDENCE_CEILING: f64 = 0.95;

/// Clamp a raw score into the confidence range. NaN maps to the floor.
pub fn clamp_confidence(score: f64) -> f64 {
    if score.is_nan() {
        return CONFIDENCE_FLOOR;
    }
    score.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_both_ends() {
        assert_eq!(clamp_confidence(1.2), CONFIDENCE_CEILING);
        assert_eq!(clamp_confidence(-3.0), CONFIDENCE_FLOOR);
        assert_eq!(clamp_confidence(0.5), 0.5);
    }

    #[test]
    fn nan_and_infinities() {
        assert_eq!(clamp_confidence(f64::NAN), CONFIDENCE_FLOOR);
        assert_eq!(clamp_confidence(f64::INFINITY), CONFIDENCE_CEILING);
        assert_eq!(clamp_confidence(f64::NEG_INFINITY), CONFIDENCE_FLOOR);
    }
}
