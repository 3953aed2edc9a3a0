//! Per-parameter range and severity tables.
//!
//! Three nested bands drive validation: values outside `absolute` are
//! physiologically impossible and block analysis; values outside
//! `plausible` but inside `absolute` are implausible-but-possible and
//! warn; `normal` is the reference interval. Severity grading uses a
//! separate five-tier band table so a blocked value still receives a
//! grade (a pH of 6.75 is both impossible to analyze and critical to
//! report).

use stewart_model::{Parameter, SeverityTier};

/// Inclusive interval.
pub type Band = (f64, f64);

/// Three-tier plausibility ranges for one parameter.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable {
    pub parameter: Parameter,
    pub normal: Band,
    pub plausible: Band,
    pub absolute: Band,
}

/// Nested severity bands; values outside `severe` grade critical.
#[derive(Debug, Clone, Copy)]
pub struct SeverityBands {
    pub parameter: Parameter,
    pub normal: Band,
    pub mild: Band,
    pub moderate: Band,
    pub severe: Band,
}

pub const RANGE_TABLES: &[RangeTable] = &[
    RangeTable {
        parameter: Parameter::Ph,
        normal: (7.35, 7.45),
        plausible: (7.00, 7.65),
        absolute: (6.80, 7.80),
    },
    RangeTable {
        parameter: Parameter::Pco2,
        normal: (35.0, 45.0),
        plausible: (15.0, 100.0),
        absolute: (10.0, 120.0),
    },
    RangeTable {
        parameter: Parameter::Hco3,
        normal: (22.0, 26.0),
        plausible: (8.0, 45.0),
        absolute: (5.0, 50.0),
    },
    RangeTable {
        parameter: Parameter::BaseExcess,
        normal: (-2.0, 2.0),
        plausible: (-25.0, 25.0),
        absolute: (-30.0, 30.0),
    },
    RangeTable {
        parameter: Parameter::Sodium,
        normal: (135.0, 145.0),
        plausible: (110.0, 170.0),
        absolute: (100.0, 180.0),
    },
    RangeTable {
        parameter: Parameter::Potassium,
        normal: (3.5, 5.0),
        plausible: (2.2, 7.5),
        absolute: (2.0, 8.0),
    },
    RangeTable {
        parameter: Parameter::Calcium,
        normal: (1.1, 1.3),
        plausible: (0.6, 2.2),
        absolute: (0.5, 2.5),
    },
    RangeTable {
        parameter: Parameter::Magnesium,
        normal: (0.7, 1.0),
        plausible: (0.4, 2.5),
        absolute: (0.3, 3.0),
    },
    RangeTable {
        parameter: Parameter::Chloride,
        normal: (98.0, 106.0),
        plausible: (75.0, 135.0),
        absolute: (70.0, 140.0),
    },
    RangeTable {
        parameter: Parameter::Lactate,
        normal: (0.0, 2.0),
        plausible: (0.0, 20.0),
        absolute: (0.0, 25.0),
    },
    RangeTable {
        parameter: Parameter::Albumin,
        normal: (3.5, 5.0),
        plausible: (1.0, 5.8),
        absolute: (0.5, 6.0),
    },
    RangeTable {
        parameter: Parameter::Phosphate,
        normal: (0.8, 1.45),
        plausible: (0.35, 3.5),
        absolute: (0.3, 4.0),
    },
];

pub const SEVERITY_BANDS: &[SeverityBands] = &[
    SeverityBands {
        parameter: Parameter::Ph,
        normal: (7.35, 7.45),
        mild: (7.30, 7.50),
        moderate: (7.20, 7.60),
        severe: (7.00, 7.70),
    },
    SeverityBands {
        parameter: Parameter::Pco2,
        normal: (35.0, 45.0),
        mild: (30.0, 50.0),
        moderate: (25.0, 60.0),
        severe: (20.0, 80.0),
    },
    SeverityBands {
        parameter: Parameter::Hco3,
        normal: (22.0, 26.0),
        mild: (18.0, 30.0),
        moderate: (14.0, 35.0),
        severe: (10.0, 40.0),
    },
    SeverityBands {
        parameter: Parameter::BaseExcess,
        normal: (-2.0, 2.0),
        mild: (-5.0, 5.0),
        moderate: (-10.0, 10.0),
        severe: (-15.0, 15.0),
    },
    SeverityBands {
        parameter: Parameter::Sodium,
        normal: (135.0, 145.0),
        mild: (130.0, 150.0),
        moderate: (125.0, 155.0),
        severe: (120.0, 160.0),
    },
    SeverityBands {
        parameter: Parameter::Potassium,
        normal: (3.5, 5.0),
        mild: (3.0, 5.5),
        moderate: (2.8, 6.0),
        severe: (2.5, 6.5),
    },
    SeverityBands {
        parameter: Parameter::Calcium,
        normal: (1.1, 1.3),
        mild: (1.0, 1.4),
        moderate: (0.9, 1.6),
        severe: (0.8, 1.9),
    },
    SeverityBands {
        parameter: Parameter::Magnesium,
        normal: (0.7, 1.0),
        mild: (0.6, 1.2),
        moderate: (0.5, 1.6),
        severe: (0.4, 2.2),
    },
    SeverityBands {
        parameter: Parameter::Chloride,
        normal: (98.0, 106.0),
        mild: (94.0, 110.0),
        moderate: (88.0, 115.0),
        severe: (80.0, 125.0),
    },
    SeverityBands {
        parameter: Parameter::Lactate,
        normal: (0.0, 2.0),
        mild: (0.0, 4.0),
        moderate: (0.0, 6.0),
        severe: (0.0, 10.0),
    },
    SeverityBands {
        parameter: Parameter::Albumin,
        normal: (3.5, 5.0),
        mild: (3.0, 5.3),
        moderate: (2.5, 5.6),
        severe: (1.5, 5.9),
    },
    SeverityBands {
        parameter: Parameter::Phosphate,
        normal: (0.8, 1.45),
        mild: (0.6, 1.8),
        moderate: (0.45, 2.5),
        severe: (0.35, 3.2),
    },
];

pub fn range_table(parameter: Parameter) -> Option<&'static RangeTable> {
    RANGE_TABLES.iter().find(|t| t.parameter == parameter)
}

pub fn severity_bands(parameter: Parameter) -> Option<&'static SeverityBands> {
    SEVERITY_BANDS.iter().find(|b| b.parameter == parameter)
}

fn within(band: Band, value: f64) -> bool {
    value >= band.0 && value <= band.1
}

/// Grade a value against the parameter's nested severity bands.
pub fn grade_severity(parameter: Parameter, value: f64) -> SeverityTier {
    let Some(bands) = severity_bands(parameter) else {
        return SeverityTier::Normal;
    };
    if within(bands.normal, value) {
        SeverityTier::Normal
    } else if within(bands.mild, value) {
        SeverityTier::Mild
    } else if within(bands.moderate, value) {
        SeverityTier::Moderate
    } else if within(bands.severe, value) {
        SeverityTier::Severe
    } else {
        SeverityTier::Critical
    }
}

/// True when the value is outside physiologically possible limits.
pub fn is_impossible(table: &RangeTable, value: f64) -> bool {
    !within(table.absolute, value)
}

/// True when the value is possible but outside the plausible band.
pub fn is_implausible(table: &RangeTable, value: f64) -> bool {
    within(table.absolute, value) && !within(table.plausible, value)
}
