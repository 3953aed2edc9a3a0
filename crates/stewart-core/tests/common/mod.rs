use stewart_model::{ClinicalRecord, Parameter};

/// Build a record from (parameter, value) pairs; everything else missing.
pub fn record(values: &[(Parameter, f64)]) -> ClinicalRecord {
    let mut record = ClinicalRecord::default();
    for &(parameter, value) in values {
        let slot = match parameter {
            Parameter::Ph => &mut record.ph,
            Parameter::Pco2 => &mut record.pco2,
            Parameter::Hco3 => &mut record.hco3,
            Parameter::BaseExcess => &mut record.be,
            Parameter::Sodium => &mut record.na,
            Parameter::Potassium => &mut record.k,
            Parameter::Calcium => &mut record.ca,
            Parameter::Magnesium => &mut record.mg,
            Parameter::Chloride => &mut record.cl,
            Parameter::Lactate => &mut record.lactate,
            Parameter::Albumin => &mut record.albumin,
            Parameter::Phosphate => &mut record.po4,
        };
        *slot = Some(value);
    }
    record
}
