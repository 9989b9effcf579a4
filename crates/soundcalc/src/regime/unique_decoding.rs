//! Unique decoding regime (UDR).
//!
//! Follows the UDR analysis of Paul Gafni and Al Kindi, <https://hackmd.io/@pgaf/HkKs_1ytT>.

use crate::{
    error::RegimeError,
    fri::fri_query_phase_error,
    proof_system::ProofSystemErrors,
    soundness::{ErrorComponent, RegimeResult},
    DerivedParams,
};

/// Below the unique decoding radius a word is close to at most one codeword.
const LIST_SIZE: f64 = 1.0;

pub(super) fn compute_security(params: &DerivedParams) -> Result<RegimeResult, RegimeError> {
    let config = params.config();
    let field_size = params.field_size();
    let theta = (1.0 - params.rho()) / 2.0;

    // Correlated agreement differs between the two batching methods of BCIKS20: batching with
    // powers r^0, ..., r^{N-1} (parameterized curves, Theorem 1.5) depends on N, batching over an
    // affine space (Theorem 1.6) does not.
    let mut batching_error = params.num_polys() / field_size;
    if config.power_batching {
        batching_error *= params.num_polys();
    }

    let folding_error = params.domain_size()
        * (config.fri_folding_factor - 1) as f64
        * params.fri_rounds() as f64
        / field_size;
    let commit_phase_error = batching_error + folding_error;
    let query_phase_error =
        fri_query_phase_error(theta, config.num_queries, config.grinding_query_phase);
    let proof_system_errors = ProofSystemErrors::new(LIST_SIZE, params)?;

    let mut result = RegimeResult::new("unique_decoding");
    result.push(ErrorComponent::FriBatching, batching_error)?;
    result.push_commit_rounds(params.fri_rounds(), commit_phase_error)?;
    result.push(ErrorComponent::FriQueryPhase, query_phase_error)?;
    result.push_proof_system(&proof_system_errors)?;
    Ok(result)
}
