//! Stewart physicochemical acid-base calculation core.
//!
//! Deterministic, side-effect-free single-record pipeline: derived
//! bicarbonate/base-excess, the three-tier SID ladder with SIG,
//! compensation assessment and contribution-based mechanism
//! attribution. Validation and the Na/Cl swap heuristic live in
//! `stewart-validate`; input sanitization in `stewart-ingest`.

pub mod compensation;
pub mod constants;
pub mod derived;
pub mod mechanism;
pub mod pipeline;
pub mod sid;

pub use compensation::assess_compensation;
pub use derived::{calculate_be, calculate_hco3, compute_derived_values};
pub use mechanism::analyze_mechanisms;
pub use pipeline::analyze;
pub use sid::build_sid_profile;
