//! Regime of the ethSTARK toy problem conjecture, Conjecture 2.1 of
//! [ethSTARK](https://eprint.iacr.org/2021/582.pdf).
//!
//! Kept for comparison with previously published numbers. It models neither the batching round
//! nor the ALI and DEEP checks.

use crate::{
    error::RegimeError,
    fri::powi_saturating,
    proof_system::{plonk_error, plookup_error},
    soundness::{ErrorComponent, RegimeResult},
    DerivedParams,
};

pub(super) fn compute_security(params: &DerivedParams) -> Result<RegimeResult, RegimeError> {
    let config = params.config();
    let commit_phase_error = 1.0 / params.field_size();
    // Each query is assumed to catch a cheating prover with probability 1 - ρ.
    let query_phase_error = powi_saturating(params.rho(), config.num_queries)
        * powi_saturating(0.5, config.grinding_query_phase);

    let mut result = RegimeResult::new("ethstark");
    result.push_commit_rounds(params.fri_rounds(), commit_phase_error)?;
    result.push(ErrorComponent::FriQueryPhase, query_phase_error)?;
    result.push(ErrorComponent::Plonk, plonk_error(params))?;
    result.push(ErrorComponent::Plookup, plookup_error(params))?;
    Ok(result)
}
