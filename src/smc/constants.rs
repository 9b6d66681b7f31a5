//! Well-known SMC keys.
//!
//! Key names differ between machine generations; these are the ones read by the default report.

/// CPU heatsink temperature
pub const SMC_KEY_CPU_HEATSINK_TEMP: &str = "TC0H";
/// GPU heatsink temperature
pub const SMC_KEY_GPU_HEATSINK_TEMP: &str = "TG0H";

/// Fan 0 (optical drive bay) minimum speed
pub const SMC_KEY_FAN0_RPM_MIN: &str = "F0Mn";
/// Fan 0 maximum speed
pub const SMC_KEY_FAN0_RPM_MAX: &str = "F0Mx";
/// Fan 0 current speed
pub const SMC_KEY_FAN0_RPM_CUR: &str = "F0Ac";

/// Fan 2 (CPU) minimum speed
pub const SMC_KEY_FAN2_RPM_MIN: &str = "F2Mn";
/// Fan 2 maximum speed
pub const SMC_KEY_FAN2_RPM_MAX: &str = "F2Mx";
/// Fan 2 current speed
pub const SMC_KEY_FAN2_RPM_CUR: &str = "F2Ac";

/// Factory minimum of fan 0 in RPM
pub const FAN0_DEFAULT_MIN_RPM: u32 = 1150;
/// Factory minimum of fan 2 in RPM
pub const FAN2_DEFAULT_MIN_RPM: u32 = 940;
