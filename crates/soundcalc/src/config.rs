use getset::{CopyGetters, Getters};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{
    error::ConfigError,
    fri::{fri_proof_size_bits, num_fri_folding_rounds, powi_saturating, FriProofShape},
};

/// Default multiplier of the permutation (PLONK) argument error.
pub const DEFAULT_PLONK_FACTOR: f64 = 10.0;
/// Default multiplier of the lookup (PLOOKUP) argument error.
pub const DEFAULT_PLOOKUP_FACTOR: f64 = 30.0;

/// An extension field `F_p^d` given by its base field characteristic and extension degree.
///
/// Only the size of the field matters to the calculator; no arithmetic is ever performed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Getters, CopyGetters)]
#[serde(try_from = "RawFieldParams", into = "RawFieldParams")]
pub struct FieldParams {
    #[getset(get = "pub")]
    name: String,
    /// Characteristic of the base field.
    #[getset(get_copy = "pub")]
    p: u64,
    #[getset(get_copy = "pub")]
    extension_degree: usize,
    /// `|F| = p^d`, kept as a float since it routinely exceeds `2^128`.
    #[getset(get_copy = "pub")]
    field_size: f64,
}

#[derive(Serialize, Deserialize)]
struct RawFieldParams {
    name: String,
    #[serde(deserialize_with = "deserialize_characteristic")]
    p: u64,
    extension_degree: usize,
}

/// Accepts the characteristic as an integer or as a decimal string, since TOML integers are signed
/// and cannot hold e.g. the Goldilocks prime.
fn deserialize_characteristic<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Characteristic {
        Integer(u64),
        Decimal(String),
    }
    match Characteristic::deserialize(deserializer)? {
        Characteristic::Integer(p) => Ok(p),
        Characteristic::Decimal(p) => p.parse().map_err(serde::de::Error::custom),
    }
}

impl FieldParams {
    pub fn new(
        name: impl Into<String>,
        p: u64,
        extension_degree: usize,
    ) -> Result<Self, ConfigError> {
        if p < 2 {
            return Err(ConfigError::InvalidCharacteristic { p });
        }
        if extension_degree == 0 {
            return Err(ConfigError::ZeroExtensionDegree);
        }
        Ok(Self {
            name: name.into(),
            p,
            extension_degree,
            field_size: powi_saturating(p as f64, extension_degree),
        })
    }

    /// `log2 |F|`, computed additively so it stays exact even where `field_size` would not.
    pub fn log2_field_size(&self) -> f64 {
        self.extension_degree as f64 * (self.p as f64).log2()
    }

    /// Bits needed to encode one base field element.
    pub fn base_element_bits(&self) -> u64 {
        (self.p as f64).log2().ceil() as u64
    }

    /// Bits needed to encode one extension field element.
    pub fn extension_element_bits(&self) -> u64 {
        self.log2_field_size().ceil() as u64
    }
}

impl TryFrom<RawFieldParams> for FieldParams {
    type Error = ConfigError;

    fn try_from(raw: RawFieldParams) -> Result<Self, Self::Error> {
        Self::new(raw.name, raw.p, raw.extension_degree)
    }
}

impl From<FieldParams> for RawFieldParams {
    fn from(field: FieldParams) -> Self {
        Self {
            name: field.name,
            p: field.p,
            extension_degree: field.extension_degree,
        }
    }
}

/// Multipliers of the permutation and lookup argument errors.
///
/// These count the argument instances of the proof system (e.g. the number of memory and byte
/// lookup accumulators) and are provisional; override them per proof system when known.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, derive_new::new)]
pub struct ArgumentConstants {
    pub plonk_factor: f64,
    pub plookup_factor: f64,
}

impl Default for ArgumentConstants {
    fn default() -> Self {
        Self {
            plonk_factor: DEFAULT_PLONK_FACTOR,
            plookup_factor: DEFAULT_PLOOKUP_FACTOR,
        }
    }
}

/// User supplied description of a FRI-based proof system.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProofSystemConfig {
    /// Name of the proof system.
    pub name: String,
    /// Code rate `ρ` of the Reed-Solomon code.
    pub rho: f64,
    /// Trace length `H`, i.e. the domain size before low-degree extension.
    pub trace_length: u64,
    pub field: FieldParams,
    /// Number of columns of the AIR.
    pub num_columns: usize,
    /// Number of polynomials in the FRI batch. Never smaller than `num_columns`.
    pub num_polys: usize,
    /// Batching with powers of a single challenge (`true`) or with independent challenges of an
    /// affine combination (`false`).
    pub power_batching: bool,
    pub num_queries: usize,
    pub air_max_degree: usize,
    /// Arity of each FRI folding round.
    pub fri_folding_factor: usize,
    /// Folding stops once the remaining codeword, measured in extension field elements, is no
    /// longer larger than this. The remainder is checked directly.
    pub fri_early_stop_degree: usize,
    /// Maximum number of entries of a single column referenced by one constraint.
    pub max_combo: usize,
    /// Bits of proof of work ground before the query phase.
    pub grinding_query_phase: usize,
    pub hash_size_bits: usize,
    #[serde(default)]
    pub argument_constants: ArgumentConstants,
    /// Complexity of the best known attack, in bits, supplied from outside for comparison.
    #[serde(default)]
    pub best_attack_bits: Option<f64>,
}

impl ProofSystemConfig {
    /// Checks the structural invariants of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let name = || self.name.clone();
        if !(self.rho > 0.0 && self.rho < 1.0) {
            return Err(ConfigError::RateOutOfRange {
                name: name(),
                rho: self.rho,
            });
        }
        if !self.trace_length.is_power_of_two() {
            return Err(ConfigError::TraceLengthNotPowerOfTwo {
                name: name(),
                trace_length: self.trace_length,
            });
        }
        if self.num_columns > self.num_polys {
            return Err(ConfigError::ColumnsExceedPolys {
                name: name(),
                num_columns: self.num_columns,
                num_polys: self.num_polys,
            });
        }
        if self.fri_folding_factor < 2 {
            return Err(ConfigError::FoldingFactorTooSmall {
                name: name(),
                folding_factor: self.fri_folding_factor,
            });
        }
        if self.num_queries == 0 {
            return Err(ConfigError::NoQueries { name: name() });
        }
        if self.hash_size_bits == 0 {
            return Err(ConfigError::ZeroHashSize { name: name() });
        }
        Ok(())
    }
}

/// Quantities derived once from a validated [ProofSystemConfig] and shared read-only by all
/// regimes.
#[derive(Clone, Debug, PartialEq, Getters, CopyGetters)]
pub struct DerivedParams {
    #[getset(get = "pub")]
    config: ProofSystemConfig,
    /// `k = round(-log2(ρ))`.
    #[getset(get_copy = "pub")]
    log_inv_rate: u32,
    /// `h = log2(H)`.
    #[getset(get_copy = "pub")]
    log_trace_length: u32,
    /// `D = H / ρ`, the evaluation domain size after low-degree extension.
    #[getset(get_copy = "pub")]
    domain_size: f64,
    #[getset(get_copy = "pub")]
    field_extension_degree: usize,
    #[getset(get_copy = "pub")]
    field_size: f64,
    #[getset(get_copy = "pub")]
    fri_rounds: usize,
    /// Estimated size of the FRI part of the proof, `None` if it does not fit in a `u64`.
    #[getset(get_copy = "pub")]
    proof_size_bits: Option<u64>,
}

impl DerivedParams {
    pub fn new(config: ProofSystemConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let log_inv_rate = (-config.rho.log2()).round() as u32;
        let log_trace_length = config.trace_length.trailing_zeros();
        let domain_size = config.trace_length as f64 / config.rho;
        let field_extension_degree = config.field.extension_degree();
        let field_size = config.field.field_size();

        // Codeword lengths are integral; a non dyadic rate is truncated like any other length.
        let witness_size = domain_size as u64;
        let fri_rounds = num_fri_folding_rounds(
            witness_size,
            field_extension_degree as u64,
            config.fri_folding_factor as u64,
            config.fri_early_stop_degree as u64,
        );
        let proof_size_bits = fri_proof_size_bits(&FriProofShape {
            witness_size,
            num_functions: config.num_polys as u64,
            num_queries: config.num_queries as u64,
            folding_factor: config.fri_folding_factor as u64,
            field_extension_degree: field_extension_degree as u64,
            early_stop_degree: config.fri_early_stop_degree as u64,
            base_element_bits: config.field.base_element_bits(),
            extension_element_bits: config.field.extension_element_bits(),
            hash_size_bits: config.hash_size_bits as u64,
        });

        tracing::debug!(
            "{} | k: {log_inv_rate} | h: {log_trace_length} | D: {domain_size} | FRI rounds: {fri_rounds} | proof size: {proof_size_bits:?} bits",
            config.name
        );

        Ok(Self {
            config,
            log_inv_rate,
            log_trace_length,
            domain_size,
            field_extension_degree,
            field_size,
            fri_rounds,
            proof_size_bits,
        })
    }

    #[inline]
    pub fn rho(&self) -> f64 {
        self.config.rho
    }

    /// `H` as a float, as it appears in the error formulas.
    #[inline]
    pub fn trace_length(&self) -> f64 {
        self.config.trace_length as f64
    }

    #[inline]
    pub fn num_polys(&self) -> f64 {
        self.config.num_polys as f64
    }

    /// `ρ⁺ = (H + max_combo) / D`, the rate of the code the DEEP quotients live in.
    pub fn rho_plus(&self) -> f64 {
        (self.trace_length() + self.config.max_combo as f64) / self.domain_size
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::test_utils::risc0_like_config;

    #[test_case(0.5, 1 << 10 ; "rate one half")]
    #[test_case(0.25, 1 << 21 ; "rate one quarter")]
    #[test_case(0.125, 1 << 16 ; "rate one eighth")]
    #[test_case(1.0 / 16.0, 1 ; "single row trace")]
    fn test_domain_and_log_trace_length(rho: f64, trace_length: u64) {
        let config = ProofSystemConfig {
            rho,
            trace_length,
            ..risc0_like_config()
        };
        let params = DerivedParams::new(config).unwrap();
        assert_eq!(params.domain_size(), trace_length as f64 / rho);
        assert_eq!(1u64 << params.log_trace_length(), trace_length);
        assert_eq!(2f64.powi(-(params.log_inv_rate() as i32)), rho);
    }

    #[test_case(0.0 ; "zero")]
    #[test_case(1.0 ; "one")]
    #[test_case(-0.25 ; "negative")]
    #[test_case(f64::NAN ; "nan")]
    fn test_rate_out_of_range(rho: f64) {
        let config = ProofSystemConfig {
            rho,
            ..risc0_like_config()
        };
        assert!(matches!(
            DerivedParams::new(config),
            Err(ConfigError::RateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_trace_length_must_be_power_of_two() {
        for trace_length in [0, 3, (1 << 20) + 1] {
            let config = ProofSystemConfig {
                trace_length,
                ..risc0_like_config()
            };
            assert!(matches!(
                DerivedParams::new(config),
                Err(ConfigError::TraceLengthNotPowerOfTwo { .. })
            ));
        }
    }

    #[test]
    fn test_columns_exceed_polys() {
        let config = ProofSystemConfig {
            num_columns: 300,
            num_polys: 299,
            ..risc0_like_config()
        };
        assert_eq!(
            DerivedParams::new(config),
            Err(ConfigError::ColumnsExceedPolys {
                name: "risc0-like".to_string(),
                num_columns: 300,
                num_polys: 299,
            })
        );
    }

    #[test]
    fn test_folding_factor_too_small() {
        let config = ProofSystemConfig {
            fri_folding_factor: 1,
            ..risc0_like_config()
        };
        assert!(matches!(
            DerivedParams::new(config),
            Err(ConfigError::FoldingFactorTooSmall { .. })
        ));
    }

    #[test]
    fn test_field_params() {
        let field = FieldParams::new("BabyBear^4", (1 << 31) - (1 << 27) + 1, 4).unwrap();
        assert!((field.log2_field_size() - 123.627).abs() < 1e-3);
        assert!((field.field_size().log2() - field.log2_field_size()).abs() < 1e-9);
        assert_eq!(field.base_element_bits(), 31);
        assert_eq!(field.extension_element_bits(), 124);

        assert_eq!(
            FieldParams::new("trivial", 1, 4),
            Err(ConfigError::InvalidCharacteristic { p: 1 })
        );
        assert_eq!(
            FieldParams::new("base", 7, 0),
            Err(ConfigError::ZeroExtensionDegree)
        );
    }

    #[test]
    fn test_risc0_like_derived_params() {
        let params = DerivedParams::new(risc0_like_config()).unwrap();
        assert_eq!(params.log_inv_rate(), 2);
        assert_eq!(params.log_trace_length(), 21);
        assert_eq!(params.domain_size(), (1u64 << 23) as f64);
        assert_eq!(params.field_extension_degree(), 4);
        assert_eq!(params.fri_rounds(), 4);
        assert_eq!(params.proof_size_bits(), Some(2_087_924));
    }

    #[test_case(1, 1 << 21, 0.25 ; "folding to a constant")]
    #[test_case(0, 1 << 21, 0.25 ; "no early stop")]
    #[test_case(256, 4, 0.5 ; "domain smaller than one leaf")]
    fn test_short_codewords_keep_proof_size(early_stop_degree: usize, trace_length: u64, rho: f64) {
        let config = ProofSystemConfig {
            fri_early_stop_degree: early_stop_degree,
            trace_length,
            rho,
            ..risc0_like_config()
        };
        let params = DerivedParams::new(config).unwrap();
        assert!(params.proof_size_bits().is_some());
    }

    #[test]
    fn test_proof_size_overflow_is_not_a_config_error() {
        let config = ProofSystemConfig {
            num_polys: usize::MAX,
            ..risc0_like_config()
        };
        let params = DerivedParams::new(config).unwrap();
        assert_eq!(params.proof_size_bits(), None);
        assert_eq!(params.fri_rounds(), 4);
    }

    #[test]
    fn test_huge_extension_degree_saturates() {
        let field = FieldParams::new("huge", 3, usize::MAX).unwrap();
        assert_eq!(field.field_size(), f64::INFINITY);
    }
}
