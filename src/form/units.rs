//! Height unit conversion between the stored centimeter value and the
//! (foot, inches) pair the form displays.

const CM_PER_INCH: f64 = 2.54;
const INCHES_PER_FOOT: f64 = 12.0;

/// Tolerance for snapping a converted value to a whole inch. Centimeter
/// values produced by [`foot_inches_to_cm`] land within this of an integer
/// and must survive the round trip exactly.
const WHOLE_INCH_EPSILON: f64 = 1e-6;

/// Convert stored centimeters to a (foot, inches) display pair.
///
/// Returns `None` for absent heights (`cm <= 0` or non-finite) so callers can
/// render empty fields — "unset" is distinct from "zero height". Inches use
/// floor semantics after snapping to the nearest whole inch.
pub fn cm_to_foot_inches(cm: f64) -> Option<(u32, u32)> {
    if !cm.is_finite() || cm <= 0.0 {
        return None;
    }

    let total_inches = cm / CM_PER_INCH;
    let nearest = total_inches.round();
    let total = if (total_inches - nearest).abs() < WHOLE_INCH_EPSILON {
        nearest
    } else {
        total_inches
    };

    let foot = (total / INCHES_PER_FOOT).floor();
    let inches = (total - foot * INCHES_PER_FOOT).floor();
    Some((foot as u32, inches as u32))
}

/// Convert the form's (foot, inches) strings back to centimeters.
///
/// Returns `None` when either input is empty or non-numeric (or negative),
/// so the submission layer can omit height entirely.
pub fn foot_inches_to_cm(foot: &str, inches: &str) -> Option<f64> {
    let foot: f64 = foot.trim().parse().ok()?;
    let inches: f64 = inches.trim().parse().ok()?;
    if foot < 0.0 || inches < 0.0 {
        return None;
    }
    Some(foot * INCHES_PER_FOOT * CM_PER_INCH + inches * CM_PER_INCH)
}
