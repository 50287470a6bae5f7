//! Hardware Calibration Values

/// Flow sensor pulses per litre.
///
/// Hall-effect flow sensors in the YF-S201 class emit ~450 pulses per litre
/// at the flow rates seen on a residential supply line.
///
/// Source: YF-S201 datasheet
pub const PULSES_PER_LITRE: u64 = 450;
