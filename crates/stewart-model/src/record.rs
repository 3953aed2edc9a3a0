use serde::{Deserialize, Serialize};

/// Analysis mode selecting the minimal required parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnalysisMode {
    /// Blood gas plus the core electrolytes.
    Quick,
    /// Full panel for SIG/Atot work (K, Ca, Mg, albumin also required).
    Advanced,
    /// One row of a batch file; same required set as quick mode.
    BatchRow,
}

/// Panel parameters understood by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parameter {
    Ph,
    Pco2,
    Hco3,
    BaseExcess,
    Sodium,
    Potassium,
    Calcium,
    Magnesium,
    Chloride,
    Lactate,
    Albumin,
    Phosphate,
}

impl Parameter {
    /// Display label with the conventional clinical notation.
    pub fn label(self) -> &'static str {
        match self {
            Parameter::Ph => "pH",
            Parameter::Pco2 => "pCO2",
            Parameter::Hco3 => "HCO3",
            Parameter::BaseExcess => "BE",
            Parameter::Sodium => "Na",
            Parameter::Potassium => "K",
            Parameter::Calcium => "Ca",
            Parameter::Magnesium => "Mg",
            Parameter::Chloride => "Cl",
            Parameter::Lactate => "lactate",
            Parameter::Albumin => "albumin",
            Parameter::Phosphate => "phosphate",
        }
    }

    /// Column/field name accepted in delimited input.
    pub fn field_name(self) -> &'static str {
        match self {
            Parameter::Ph => "ph",
            Parameter::Pco2 => "pco2",
            Parameter::Hco3 => "hco3",
            Parameter::BaseExcess => "be",
            Parameter::Sodium => "na",
            Parameter::Potassium => "k",
            Parameter::Calcium => "ca",
            Parameter::Magnesium => "mg",
            Parameter::Chloride => "cl",
            Parameter::Lactate => "lactate",
            Parameter::Albumin => "albumin",
            Parameter::Phosphate => "po4",
        }
    }

    /// Negative values are only meaningful for base excess.
    pub fn allows_negative(self) -> bool {
        matches!(self, Parameter::BaseExcess)
    }

    /// All parameters in panel order.
    pub fn all() -> &'static [Parameter] {
        &[
            Parameter::Ph,
            Parameter::Pco2,
            Parameter::Hco3,
            Parameter::BaseExcess,
            Parameter::Sodium,
            Parameter::Potassium,
            Parameter::Calcium,
            Parameter::Magnesium,
            Parameter::Chloride,
            Parameter::Lactate,
            Parameter::Albumin,
            Parameter::Phosphate,
        ]
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One sanitized arterial blood-gas and electrolyte panel.
///
/// Every field is either a present finite value or explicitly missing.
/// Albumin is always stored in g/dL; unit normalization happens during
/// sanitization, before a record exists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub ph: Option<f64>,
    pub pco2: Option<f64>,
    /// Measured bicarbonate (mEq/L); computed from pH/pCO2 when absent.
    pub hco3: Option<f64>,
    /// Measured base excess (mEq/L); computed when absent.
    pub be: Option<f64>,
    pub na: Option<f64>,
    pub k: Option<f64>,
    pub ca: Option<f64>,
    pub mg: Option<f64>,
    pub cl: Option<f64>,
    pub lactate: Option<f64>,
    /// Albumin in g/dL.
    pub albumin: Option<f64>,
    pub po4: Option<f64>,
}

impl ClinicalRecord {
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Ph => self.ph,
            Parameter::Pco2 => self.pco2,
            Parameter::Hco3 => self.hco3,
            Parameter::BaseExcess => self.be,
            Parameter::Sodium => self.na,
            Parameter::Potassium => self.k,
            Parameter::Calcium => self.ca,
            Parameter::Magnesium => self.mg,
            Parameter::Chloride => self.cl,
            Parameter::Lactate => self.lactate,
            Parameter::Albumin => self.albumin,
            Parameter::Phosphate => self.po4,
        }
    }

    pub fn is_present(&self, parameter: Parameter) -> bool {
        self.get(parameter).is_some()
    }

    /// Parameters that carry a value, in panel order.
    pub fn present_parameters(&self) -> Vec<Parameter> {
        Parameter::all()
            .iter()
            .copied()
            .filter(|p| self.is_present(*p))
            .collect()
    }
}
