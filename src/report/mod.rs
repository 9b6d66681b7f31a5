//! The temperature and fan report printed by `smc-report`.
//!
//! Fan speeds are shown as "boosts": how far a fan's configured minimum and its current speed sit above the factory
//! minimum, as a percentage of the range between the factory minimum and the maximum.

pub mod config;

use std::fmt;

pub use config::{FanProfile, ReportConfig, TemperatureProbe, CONFIG_ENV_VAR};

use crate::smc::{Session, SmcChannel};

/// Fan boost percentages, truncated toward zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FanBoost {
    /// Configured minimum above the factory minimum
    pub min_boost: i32,
    /// Current speed above the configured minimum
    pub current_boost: i32,
}

impl FanBoost {
    /// Compute boosts from raw RPM readings.
    ///
    /// The arithmetic runs in `f32` and each result is truncated toward zero. Readings that came back as zero still
    /// produce numbers; a zero-width range yields no boost.
    pub fn compute(default_min: u32, min: u32, max: u32, current: u32) -> Self {
        let delta = |rpm: u32| (i64::from(rpm) - i64::from(default_min)) as f32;
        let range = delta(max);
        if range == 0.0 {
            return Self::default();
        }

        let min_boost = (100.0 * delta(min) / range) as i32;
        let current_boost = (100.0 * delta(current) / range - min_boost as f32) as i32;
        Self { min_boost, current_boost }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureReading {
    pub label: String,
    pub celsius: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanReading {
    pub label: String,
    pub min_rpm: u32,
    pub max_rpm: u32,
    pub current_rpm: u32,
    pub boost: FanBoost,
}

/// One pass over the sensors named by a [`ReportConfig`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    pub temperatures: Vec<TemperatureReading>,
    pub fans: Vec<FanReading>,
}

impl Report {
    /// Read every configured sensor.
    ///
    /// Temperatures come first, then each fan's minimum, maximum and current speed. Failed reads count as zero.
    pub fn collect<C: SmcChannel>(session: &Session<C>, config: &ReportConfig) -> Self {
        let temperatures = config
            .temperatures
            .iter()
            .map(|probe| TemperatureReading { label: probe.label.clone(), celsius: session.read_temperature(&probe.key) })
            .collect();

        let fans = config
            .fans
            .iter()
            .map(|fan| {
                let min_rpm = session.read_fan_rpm(&fan.min_key);
                let max_rpm = session.read_fan_rpm(&fan.max_key);
                let current_rpm = session.read_fan_rpm(&fan.current_key);
                FanReading {
                    label: fan.label.clone(),
                    min_rpm,
                    max_rpm,
                    current_rpm,
                    boost: FanBoost::compute(fan.default_min_rpm, min_rpm, max_rpm, current_rpm),
                }
            })
            .collect();

        Self { temperatures, fans }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for t in &self.temperatures {
            writeln!(f, "{}: {:.1}°C", t.label, t.celsius)?;
        }
        for fan in &self.fans {
            writeln!(f, "{}: +{}% +{}%", fan.label, fan.boost.min_boost, fan.boost.current_boost)?;
        }
        Ok(())
    }
}
