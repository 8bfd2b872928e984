//! Scoring tables for the fixed clinical rubric.
//!
//! Each scorer is a deterministic lookup with no side effects. The blood
//! pressure bands overlap, so rule order is load-bearing: the first matching
//! row wins, and the rows must stay in exactly this order.

use crate::entities::BloodPressureReading;

/// Score a blood pressure reading, 0-3.
///
/// An unparseable reading scores 0. This means a data-quality problem
/// silently contributes the lowest band to the risk total instead of
/// excluding the patient; that is the rubric's documented behavior and is
/// kept as-is (the patient still surfaces through the data-quality list).
pub fn score_blood_pressure(reading: Option<BloodPressureReading>) -> u8 {
    let Some(reading) = reading else {
        return 0;
    };
    let (systolic, diastolic) = (reading.systolic, reading.diastolic);

    if systolic < 120 && diastolic < 80 {
        0
    } else if (120..=129).contains(&systolic) && diastolic < 80 {
        1
    } else if (130..=139).contains(&systolic) || (80..=89).contains(&diastolic) {
        2
    } else if systolic >= 140 || diastolic >= 90 {
        3
    } else {
        0
    }
}

/// Score a temperature reading in degrees Fahrenheit, 0-2.
/// Unparseable scores 0.
pub fn score_temperature(temperature: Option<f64>) -> u8 {
    match temperature {
        None => 0,
        Some(t) if t <= 99.5 => 0,
        Some(t) if t <= 100.9 => 1,
        Some(_) => 2,
    }
}

/// Score an age in years, 0-2. Unparseable scores 0.
pub fn score_age(age: Option<i64>) -> u8 {
    match age {
        None => 0,
        Some(a) if a < 40 => 0,
        Some(a) if a <= 65 => 1,
        Some(_) => 2,
    }
}
