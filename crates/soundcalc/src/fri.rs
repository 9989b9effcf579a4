//! FRI formulas shared by several regimes: round counting, proof size estimation and the commit
//! and query phase soundness errors.

use crate::DerivedParams;

/// Default Johnson parameter `m` of the batched FRI bound of
/// [Ha22, Theorem 2](https://eprint.iacr.org/2022/1216.pdf).
///
/// Fixed rather than optimized per configuration; Winterfell searches over `m` instead.
pub const DEFAULT_JOHNSON_M: f64 = 16.0;

/// Number of FRI folding rounds until the codeword, measured in extension field elements, has at
/// most `early_stop_degree` entries.
///
/// Follows the round count of the RISC Zero prover: the remainder is sent in the clear instead of
/// being committed and folded again.
pub fn num_fri_folding_rounds(
    witness_size: u64,
    field_extension_degree: u64,
    folding_factor: u64,
    early_stop_degree: u64,
) -> usize {
    debug_assert!(folding_factor > 1);
    let mut rounds = 0;
    let mut n = witness_size;
    while n / field_extension_degree > early_stop_degree {
        n /= folding_factor;
        rounds += 1;
    }
    rounds
}

#[inline]
fn log2_ceil(n: u64) -> u64 {
    debug_assert!(n > 0);
    (u64::BITS - (n - 1).leading_zeros()) as u64
}

/// `base^exp` for a count exponent. Counts beyond `i32::MAX` saturate instead of wrapping.
#[inline]
pub(crate) fn powi_saturating(base: f64, exp: usize) -> f64 {
    base.powi(i32::try_from(exp).unwrap_or(i32::MAX))
}

/// Size in bits of one Merkle opening: the opened leaf, its sibling leaf and the co-path above
/// the siblings. Returns `None` for a tree without leaves or if the size overflows `u64`.
pub fn merkle_path_size_bits(
    num_leaves: u64,
    tuple_size: u64,
    element_size_bits: u64,
    hash_size_bits: u64,
) -> Option<u64> {
    if num_leaves == 0 {
        return None;
    }
    let leaf_size = tuple_size.checked_mul(element_size_bits)?;
    let tree_depth = log2_ceil(num_leaves);
    let sibling_size = leaf_size;
    // A single leaf is its own root and has no co-path.
    let co_path_size = tree_depth.saturating_sub(1).checked_mul(hash_size_bits)?;
    leaf_size.checked_add(sibling_size)?.checked_add(co_path_size)
}

/// Shape of a batched FRI proof, as needed to estimate its size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FriProofShape {
    /// Length of the initial codewords.
    pub witness_size: u64,
    /// Number of polynomials committed in the initial round.
    pub num_functions: u64,
    pub num_queries: u64,
    pub folding_factor: u64,
    pub field_extension_degree: u64,
    pub early_stop_degree: u64,
    pub base_element_bits: u64,
    pub extension_element_bits: u64,
    pub hash_size_bits: u64,
}

/// Estimated size in bits of the Merkle roots and authentication paths of a FRI proof.
///
/// The initial commitment stores all `num_functions` base field evaluations at a point in one
/// leaf. Every later commitment groups the `folding_factor` extension field entries that fold
/// together into one leaf; a codeword shorter than one leaf still takes a single leaf. Returns
/// `None` if the size overflows `u64`.
pub fn fri_proof_size_bits(shape: &FriProofShape) -> Option<u64> {
    let FriProofShape {
        witness_size,
        num_functions,
        num_queries,
        folding_factor,
        field_extension_degree,
        early_stop_degree,
        base_element_bits,
        extension_element_bits,
        hash_size_bits,
    } = *shape;

    // One root plus one opening per query.
    let commitment_size = |num_leaves: u64, tuple_size: u64, element_size_bits: u64| {
        let path = merkle_path_size_bits(
            num_leaves.max(1),
            tuple_size,
            element_size_bits,
            hash_size_bits,
        )?;
        num_queries.checked_mul(path)?.checked_add(hash_size_bits)
    };

    let mut size = commitment_size(witness_size / folding_factor, num_functions, base_element_bits)?;
    let mut n = witness_size;
    while n / folding_factor.saturating_mul(field_extension_degree) > early_stop_degree {
        n /= folding_factor;
        let round_size =
            commitment_size(n / folding_factor, folding_factor, extension_element_bits)?;
        size = size.checked_add(round_size)?;
    }
    Some(size)
}

/// FRI query phase error `(1 - θ)^s · 2^-g`: every one of the `s` queries must miss the
/// `θ`-fraction of disagreeing positions, after `g` bits of grinding.
///
/// See the last term of Equation 7 in Theorem 2 of [Ha22](https://eprint.iacr.org/2022/1216.pdf),
/// and Section 6.3 of [ethSTARK](https://eprint.iacr.org/2021/582.pdf) for grinding.
pub fn fri_query_phase_error(theta: f64, num_queries: usize, grinding_bits: usize) -> f64 {
    powi_saturating(1.0 - theta, num_queries) * powi_saturating(0.5, grinding_bits)
}

/// Batched FRI commit phase error, [Ha22, Theorem 2](https://eprint.iacr.org/2022/1216.pdf):
///
/// `(N - 1/2) · ε_gap + (2m + 1)(D + 1) · Σ_rounds arity / (√ρ · |F|)`
///
/// where `ε_gap` is the proximity gap error of the regime.
pub fn batched_fri_commit_phase_error(
    params: &DerivedParams,
    proximity_gap_error: f64,
    m: f64,
) -> f64 {
    let config = params.config();
    let batching = (params.num_polys() - 0.5) * proximity_gap_error;
    let folding_sum = (params.fri_rounds() * config.fri_folding_factor) as f64;
    let folding = (2.0 * m + 1.0) * (params.domain_size() + 1.0) * folding_sum
        / (params.rho().sqrt() * params.field_size());
    batching + folding
}
