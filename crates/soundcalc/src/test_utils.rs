//! Fixtures shared by unit and integration tests.

use crate::{FieldParams, ProofSystemConfig};

pub const BABY_BEAR_P: u64 = (1 << 31) - (1 << 27) + 1;
pub const GOLDILOCKS_P: u64 = 0xffff_ffff_0000_0001;

pub fn baby_bear_4() -> FieldParams {
    FieldParams::new("BabyBear^4", BABY_BEAR_P, 4).unwrap()
}

pub fn goldilocks_2() -> FieldParams {
    FieldParams::new("Goldilocks^2", GOLDILOCKS_P, 2).unwrap()
}

pub fn goldilocks_3() -> FieldParams {
    FieldParams::new("Goldilocks^3", GOLDILOCKS_P, 3).unwrap()
}

/// RISC0-style parameters: `ρ = 1/4`, `H = 2^21`, BabyBear^4, 50 queries, 16-ary folding.
pub fn risc0_like_config() -> ProofSystemConfig {
    ProofSystemConfig {
        name: "risc0-like".to_string(),
        rho: 0.25,
        trace_length: 1 << 21,
        field: baby_bear_4(),
        num_columns: 279,
        num_polys: 283,
        power_batching: true,
        num_queries: 50,
        air_max_degree: 4,
        fri_folding_factor: 16,
        fri_early_stop_degree: 1 << 8,
        max_combo: 9,
        grinding_query_phase: 0,
        hash_size_bits: 256,
        argument_constants: Default::default(),
        best_attack_bits: None,
    }
}

/// Winterfell-style parameters over Goldilocks^2 with binary folding and 20 bits of grinding.
pub fn miden_like_config() -> ProofSystemConfig {
    ProofSystemConfig {
        name: "miden-like".to_string(),
        rho: 0.25,
        trace_length: 1 << 18,
        field: goldilocks_2(),
        num_columns: 100,
        num_polys: 104,
        power_batching: false,
        num_queries: 119,
        air_max_degree: 5,
        fri_folding_factor: 2,
        fri_early_stop_degree: 1 << 7,
        max_combo: 2,
        grinding_query_phase: 20,
        hash_size_bits: 256,
        argument_constants: Default::default(),
        best_attack_bits: None,
    }
}

/// Rate one half over Goldilocks^3 with 8-ary folding.
pub fn zisk_like_config() -> ProofSystemConfig {
    ProofSystemConfig {
        name: "zisk-like".to_string(),
        rho: 0.5,
        trace_length: 1 << 22,
        field: goldilocks_3(),
        num_columns: 300,
        num_polys: 320,
        power_batching: true,
        num_queries: 128,
        air_max_degree: 3,
        fri_folding_factor: 8,
        fri_early_stop_degree: 1 << 5,
        max_combo: 2,
        grinding_query_phase: 16,
        hash_size_bits: 256,
        argument_constants: Default::default(),
        best_attack_bits: None,
    }
}

/// A short trace whose constraints reach far across rows, so `ρ⁺` is too large for the Johnson
/// and capacity bound analyses.
pub fn wide_combo_config() -> ProofSystemConfig {
    ProofSystemConfig {
        name: "wide-combo".to_string(),
        rho: 0.25,
        trace_length: 1 << 10,
        field: baby_bear_4(),
        num_columns: 10,
        num_polys: 12,
        power_batching: false,
        num_queries: 50,
        air_max_degree: 4,
        fri_folding_factor: 2,
        fri_early_stop_degree: 1 << 4,
        max_combo: 1 << 10,
        grinding_query_phase: 0,
        hash_size_bits: 256,
        argument_constants: Default::default(),
        best_attack_bits: None,
    }
}
