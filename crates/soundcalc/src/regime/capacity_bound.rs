//! List decoding up to capacity (CBR). Conjectured: relies on the proximity gap and list size
//! conjectures for Reed-Solomon codes up to the capacity bound.

use crate::{
    error::RegimeError,
    fri::{batched_fri_commit_phase_error, fri_query_phase_error, DEFAULT_JOHNSON_M},
    proof_system::ProofSystemErrors,
    soundness::{ErrorComponent, RegimeResult},
    DerivedParams,
};

/// Default distance `η` from the capacity bound.
pub const DEFAULT_ETA: f64 = 0.05;

/// Constants of the capacity bound conjectures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapacityBoundParams {
    /// Distance from capacity; the proximity parameter is `θ = 1 - ρ - η`.
    pub eta: f64,
    /// Exponent of `1 / (ηρ)` in the proximity gap error.
    pub c1: f64,
    /// Exponent of `D` in the proximity gap error.
    pub c2: f64,
    /// Exponent of the list size bound.
    pub c3: f64,
    /// Johnson parameter of the batched commit phase bound.
    pub m: f64,
}

impl Default for CapacityBoundParams {
    fn default() -> Self {
        Self {
            eta: DEFAULT_ETA,
            c1: 1.0,
            c2: 1.0,
            c3: 1.0,
            m: DEFAULT_JOHNSON_M,
        }
    }
}

impl CapacityBoundParams {
    pub fn theta(&self, rho: f64) -> f64 {
        1.0 - rho - self.eta
    }

    /// Second item of Conjecture 8.4 of [BCIKS20](https://eprint.iacr.org/2020/654):
    /// `1 / (ηρ)^c1 · N · D^c2 / |F|`.
    pub fn proximity_gap_error(&self, params: &DerivedParams) -> f64 {
        1.0 / (self.eta * params.rho()).powf(self.c1) * params.num_polys()
            * params.domain_size().powf(self.c2)
            / params.field_size()
    }

    /// Conjectured list size `⌈(D / η⁺)^c3⌉` with `η⁺ = 1 - ρ⁺ - θ`, cf. Conjecture 5.6 of
    /// [STIR](https://eprint.iacr.org/2024/390).
    pub fn list_size(&self, params: &DerivedParams, theta: f64) -> Result<f64, RegimeError> {
        let bound = 1.0 - params.rho_plus();
        if !(theta < bound) {
            return Err(RegimeError::CapacityRadius { theta, bound });
        }
        let eta_plus = bound - theta;
        Ok((params.domain_size() / eta_plus).powf(self.c3).ceil())
    }
}

pub(super) fn compute_security(
    regime: &CapacityBoundParams,
    params: &DerivedParams,
) -> Result<RegimeResult, RegimeError> {
    let config = params.config();
    let theta = regime.theta(params.rho());
    let list_size = regime.list_size(params, theta)?;
    tracing::debug!("capacity_bound | theta: {theta} | list size: {list_size}");

    let proximity_gap_error = regime.proximity_gap_error(params);
    // The commit phase reuses the Johnson bound batched FRI formula.
    let commit_phase_error = batched_fri_commit_phase_error(params, proximity_gap_error, regime.m);
    let query_phase_error =
        fri_query_phase_error(theta, config.num_queries, config.grinding_query_phase);
    let proof_system_errors = ProofSystemErrors::new(list_size, params)?;

    let mut result = RegimeResult::new("capacity_bound");
    result.push(ErrorComponent::FriBatching, proximity_gap_error)?;
    result.push_commit_rounds(params.fri_rounds(), commit_phase_error)?;
    result.push(ErrorComponent::FriQueryPhase, query_phase_error)?;
    result.push_proof_system(&proof_system_errors)?;
    Ok(result)
}
