use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Blood pressure assumed when no reading has been recorded.
pub const DEFAULT_BP: f64 = 120.0;
/// Pulse assumed when no reading has been recorded.
pub const DEFAULT_PULSE: f64 = 75.0;
/// Blood sugar assumed when no reading has been recorded.
pub const DEFAULT_SUGAR: f64 = 100.0;

/// Vitals snapshot handed to the response formatter.
///
/// Every field is always populated; missing readings are replaced by the
/// defaults above before a `Vitals` is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vitals {
    /// Systolic blood pressure (mmHg).
    pub bp: f64,
    /// Heart rate (bpm).
    pub pulse: f64,
    /// Blood glucose (mg/dL).
    pub sugar: f64,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            bp: DEFAULT_BP,
            pulse: DEFAULT_PULSE,
            sugar: DEFAULT_SUGAR,
        }
    }
}

/// Incoming vitals reading, as posted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVitals {
    pub user_id: String,
    pub bp: Option<f64>,
    pub pulse: Option<f64>,
    pub sugar: Option<f64>,
}

/// A stored vitals reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalsRecord {
    pub id: Uuid,
    pub user_id: String,
    pub bp: Option<f64>,
    pub pulse: Option<f64>,
    pub sugar: Option<f64>,
    pub created_at: NaiveDateTime,
}

impl VitalsRecord {
    /// Build a record from a client reading, stamped now to the whole second
    /// (the precision the store keeps).
    pub fn from_new(new: NewVitals) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            bp: new.bp,
            pulse: new.pulse,
            sugar: new.sugar,
            created_at: chrono::Local::now().naive_local().trunc_subsecs(0),
        }
    }

    /// Snapshot for the formatter, defaulting each missing reading independently.
    pub fn to_vitals(&self) -> Vitals {
        Vitals {
            bp: self.bp.unwrap_or(DEFAULT_BP),
            pulse: self.pulse.unwrap_or(DEFAULT_PULSE),
            sugar: self.sugar.unwrap_or(DEFAULT_SUGAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(bp: Option<f64>, pulse: Option<f64>, sugar: Option<f64>) -> VitalsRecord {
        VitalsRecord::from_new(NewVitals {
            user_id: "patient-1".into(),
            bp,
            pulse,
            sugar,
        })
    }

    #[test]
    fn defaults_match_resting_adult() {
        let v = Vitals::default();
        assert_eq!(v.bp, 120.0);
        assert_eq!(v.pulse, 75.0);
        assert_eq!(v.sugar, 100.0);
    }

    #[test]
    fn missing_readings_default_per_field() {
        let v = record(Some(155.0), None, None).to_vitals();
        assert_eq!(v.bp, 155.0);
        assert_eq!(v.pulse, DEFAULT_PULSE);
        assert_eq!(v.sugar, DEFAULT_SUGAR);
    }

    #[test]
    fn full_reading_passes_through() {
        let v = record(Some(130.0), Some(110.0), Some(90.0)).to_vitals();
        assert_eq!(v, Vitals { bp: 130.0, pulse: 110.0, sugar: 90.0 });
    }

    #[test]
    fn new_record_gets_unique_id() {
        let a = record(None, None, None);
        let b = record(None, None, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn new_record_has_whole_second_timestamp() {
        use chrono::Timelike;
        assert_eq!(record(None, None, None).created_at.nanosecond(), 0);
    }
}
