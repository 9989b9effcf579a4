//! List decoding up to the Johnson bound (JBR).

use crate::{
    error::RegimeError,
    fri::{batched_fri_commit_phase_error, fri_query_phase_error, DEFAULT_JOHNSON_M},
    proof_system::ProofSystemErrors,
    soundness::{ErrorComponent, RegimeResult},
    DerivedParams,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JohnsonBoundParams {
    /// Johnson parameter `m` of [Ha22](https://eprint.iacr.org/2022/1216.pdf).
    pub m: f64,
}

impl Default for JohnsonBoundParams {
    fn default() -> Self {
        Self {
            m: DEFAULT_JOHNSON_M,
        }
    }
}

impl JohnsonBoundParams {
    /// `α = (1 + 1/2m) · √ρ` and `θ = 1 - α`, see Theorem 2 of Ha22.
    pub fn alpha_and_theta(&self, rho: f64) -> (f64, f64) {
        let alpha = (1.0 + 1.0 / (2.0 * self.m)) * rho.sqrt();
        (alpha, 1.0 - alpha)
    }

    /// Proximity gap error of the correlated agreement theorem of
    /// [BCIKS20](https://eprint.iacr.org/2020/654), `(m + 1/2)^7 / (3 ρ^1.5) · D^2 / |F|`.
    pub fn proximity_gap_error(&self, params: &DerivedParams) -> f64 {
        let rho = params.rho();
        let d = params.domain_size();
        let mut error = (self.m + 0.5).powi(7) / (3.0 * rho.powf(1.5)) * d * d / params.field_size();
        if params.config().power_batching {
            error *= params.num_polys();
        }
        error
    }
}

/// Guruswami-Sudan list size `L⁺ = (m⁺ + 1/2) / √ρ⁺` for the smallest admissible multiplicity
/// `m⁺`.
pub(super) fn list_size(params: &DerivedParams, alpha: f64, theta: f64) -> Result<f64, RegimeError> {
    let sqrt_rho_plus = params.rho_plus().sqrt();
    let radius = 1.0 - sqrt_rho_plus;
    if !(theta < radius) {
        return Err(RegimeError::JohnsonRadius {
            theta,
            bound: radius,
        });
    }
    // Positive since α = 1 - θ > √ρ⁺.
    let m_plus = (1.0 / (2.0 * (alpha / sqrt_rho_plus - 1.0))).ceil();
    let bound = 1.0 - sqrt_rho_plus * (1.0 + 1.0 / (2.0 * m_plus));
    if !(theta <= bound) {
        return Err(RegimeError::JohnsonMultiplicity {
            theta,
            bound,
            m_plus,
        });
    }
    Ok((m_plus + 0.5) / sqrt_rho_plus)
}

pub(super) fn compute_security(
    regime: &JohnsonBoundParams,
    params: &DerivedParams,
) -> Result<RegimeResult, RegimeError> {
    let config = params.config();
    let (alpha, theta) = regime.alpha_and_theta(params.rho());
    let list_size = list_size(params, alpha, theta)?;
    tracing::debug!("johnson_bound | alpha: {alpha} | theta: {theta} | list size: {list_size}");

    let proximity_gap_error = regime.proximity_gap_error(params);
    let commit_phase_error = batched_fri_commit_phase_error(params, proximity_gap_error, regime.m);
    let query_phase_error =
        fri_query_phase_error(theta, config.num_queries, config.grinding_query_phase);
    let proof_system_errors = ProofSystemErrors::new(list_size, params)?;

    let mut result = RegimeResult::new("johnson_bound");
    result.push(ErrorComponent::FriBatching, proximity_gap_error)?;
    result.push_commit_rounds(params.fri_rounds(), commit_phase_error)?;
    result.push(ErrorComponent::FriQueryPhase, query_phase_error)?;
    result.push_proof_system(&proof_system_errors)?;
    Ok(result)
}
