//! Axis normalization: centering, scaling, and dead-zone suppression.

/// Per-axis calibration for [`normalize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisCalib {
    /// Raw reading of the axis at rest.
    pub center: u16,
    /// Largest raw deviation from center, maps to full scale.
    pub max_deviation: u16,
    /// Magnitude of full-scale output.
    pub scale: u16,
    /// Outputs with magnitude below this are forced to 0.
    pub deadzone: u16,
}

/// Map a filtered raw sample to a signed output in `-scale..=scale`.
///
/// Computes `((filtered - center) * scale) / max_deviation` in integer
/// arithmetic with truncation toward zero, then suppresses jitter: any
/// result with magnitude strictly below the dead-zone comes out as exactly
/// 0. A 0 output means "at rest" and is not worth an event; the caller
/// decides that.
#[must_use]
pub fn normalize(filtered: u16, calib: &AxisCalib) -> i16 {
    debug_assert!(calib.max_deviation > 0, "max_deviation must be nonzero");

    let centered = filtered as i32 - calib.center as i32;
    let scaled = (centered * calib.scale as i32) / calib.max_deviation as i32;
    let scaled = scaled.clamp(-(calib.scale as i32), calib.scale as i32) as i16;
    if scaled.unsigned_abs() < calib.deadzone {
        0
    } else {
        scaled
    }
}
