use thiserror::Error;

/// Errors raised while validating a [`ProofSystemConfig`](crate::ProofSystemConfig) and deriving
/// its parameters. A configuration that fails here is never handed to any regime.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("FieldParams::new: characteristic {p} must be at least 2")]
    InvalidCharacteristic { p: u64 },
    #[error("FieldParams::new: extension degree must be at least 1")]
    ZeroExtensionDegree,
    #[error("{name}: code rate {rho} is not in (0, 1)")]
    RateOutOfRange { name: String, rho: f64 },
    #[error("{name}: trace length {trace_length} is not a positive power of two")]
    TraceLengthNotPowerOfTwo { name: String, trace_length: u64 },
    #[error("{name}: num_columns ({num_columns}) exceeds num_polys ({num_polys})")]
    ColumnsExceedPolys {
        name: String,
        num_columns: usize,
        num_polys: usize,
    },
    #[error("{name}: FRI folding factor {folding_factor} must be at least 2")]
    FoldingFactorTooSmall { name: String, folding_factor: usize },
    #[error("{name}: num_queries must be positive")]
    NoQueries { name: String },
    #[error("{name}: hash_size_bits must be positive")]
    ZeroHashSize { name: String },
}

/// Errors raised while evaluating a single regime for an already validated configuration.
///
/// These never abort evaluation of the other regimes for the same configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegimeError {
    #[error("johnson_bound: theta {theta} is not below the Johnson radius 1 - sqrt(rho+) = {bound}")]
    JohnsonRadius { theta: f64, bound: f64 },
    #[error("johnson_bound: theta {theta} exceeds 1 - sqrt(rho+)(1 + 1/2m+) = {bound} for m+ = {m_plus}")]
    JohnsonMultiplicity { theta: f64, bound: f64, m_plus: f64 },
    #[error("capacity_bound: theta {theta} is not below 1 - rho+ = {bound}")]
    CapacityRadius { theta: f64, bound: f64 },
    #[error("DEEP: field size {field_size} does not exceed H + D = {trace_length} + {domain_size}")]
    DeepDenominator {
        field_size: f64,
        trace_length: f64,
        domain_size: f64,
    },
    #[error("{component}: soundness error {error} is not a positive finite number")]
    NonPositiveError { component: String, error: f64 },
}
