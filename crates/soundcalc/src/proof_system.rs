//! Soundness errors of the proof system wrapped around FRI: algebraic linking (ALI), the DEEP
//! out-of-domain check and the permutation/lookup arguments.

use crate::{error::RegimeError, DerivedParams};

/// Errors of the non-FRI components for a list size bound `L⁺`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProofSystemErrors {
    pub ali: f64,
    pub deep: f64,
    pub plonk: f64,
    pub plookup: f64,
}

impl ProofSystemErrors {
    /// Computes all four errors, see Theorem 8 of [Ha22](https://eprint.iacr.org/2022/1216.pdf)
    /// for ALI and DEEP.
    pub fn new(list_size: f64, params: &DerivedParams) -> Result<Self, RegimeError> {
        Ok(Self {
            ali: ali_error(list_size, params),
            deep: deep_error(list_size, params)?,
            plonk: plonk_error(params),
            plookup: plookup_error(params),
        })
    }
}

/// `L⁺ · C / |F|`: a random linear combination of `C` column constraints vanishes by accident.
pub fn ali_error(list_size: f64, params: &DerivedParams) -> f64 {
    list_size * params.config().num_columns as f64 / params.field_size()
}

/// `L⁺ · (deg · (H + max_combo - 1) + (H - 1)) / (|F| - H - D)`.
///
/// The out-of-domain point must avoid both the trace domain and the evaluation domain, hence the
/// denominator; it must be positive.
pub fn deep_error(list_size: f64, params: &DerivedParams) -> Result<f64, RegimeError> {
    let config = params.config();
    let h = params.trace_length();
    let d = params.domain_size();
    let f = params.field_size();
    let denominator = f - h - d;
    if denominator <= 0.0 {
        return Err(RegimeError::DeepDenominator {
            field_size: f,
            trace_length: h,
            domain_size: d,
        });
    }
    let degree = config.air_max_degree as f64;
    let numerator = degree * (h + config.max_combo as f64 - 1.0) + (h - 1.0);
    Ok(list_size * numerator / denominator)
}

/// `plonk_factor · (deg - 2) · H / (|F| · e)`.
///
/// Not positive for `deg <= 2`, which `bits` rejects.
pub fn plonk_error(params: &DerivedParams) -> f64 {
    let config = params.config();
    config.argument_constants.plonk_factor
        * (config.air_max_degree as f64 - 2.0)
        * params.trace_length()
        / (params.field_size() * params.field_extension_degree() as f64)
}

/// `plookup_factor · (deg - 1) · H / (|F| · e)`.
pub fn plookup_error(params: &DerivedParams) -> f64 {
    let config = params.config();
    config.argument_constants.plookup_factor
        * (config.air_max_degree as f64 - 1.0)
        * params.trace_length()
        / (params.field_size() * params.field_extension_degree() as f64)
}
