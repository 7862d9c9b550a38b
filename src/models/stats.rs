use serde::Serialize;
use std::collections::BTreeMap;

/// Shift counts and worked hours over one period (a month or a year).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PeriodStats {
    pub counts: BTreeMap<String, u32>,
    pub total_hours: f64,
}

impl PeriodStats {
    pub fn count(&self, shift_id: &str) -> u32 {
        self.counts.get(shift_id).copied().unwrap_or(0)
    }

    pub fn assigned_days(&self) -> u32 {
        self.counts.values().sum()
    }
}

/// Aggregated statistics for one year.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScheduleStats {
    pub year: i32,
    /// Index 0 = January.
    pub per_month: [PeriodStats; 12],
    pub annual: PeriodStats,
}

impl ScheduleStats {
    /// Signed difference against the annual target (positive = surplus).
    pub fn hour_difference(&self, target_annual_hours: f64) -> f64 {
        self.annual.total_hours - target_annual_hours
    }
}
