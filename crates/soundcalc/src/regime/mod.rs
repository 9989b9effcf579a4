//! The proximity regimes under which FRI soundness is analyzed.
//!
//! The regimes are alternative, non-equivalent bounds from the literature. They range from the
//! proven unique decoding analysis to the optimistic ethSTARK toy problem conjecture.

use crate::{error::RegimeError, soundness::RegimeResult, DerivedParams};

mod capacity_bound;
mod ethstark;
mod johnson_bound;
mod unique_decoding;

pub use capacity_bound::CapacityBoundParams;
pub use johnson_bound::JohnsonBoundParams;

/// A FRI soundness regime together with its (overridable) constants.
#[derive(
    Clone, Copy, Debug, PartialEq, strum::Display, strum::EnumString, strum::IntoStaticStr,
)]
pub enum Regime {
    /// Unique decoding regime (UDR), proven.
    #[strum(serialize = "unique_decoding")]
    UniqueDecoding,
    /// List decoding up to the Johnson bound (JBR), proven.
    #[strum(serialize = "johnson_bound")]
    JohnsonBound(JohnsonBoundParams),
    /// List decoding up to capacity (CBR), conjectured.
    #[strum(serialize = "capacity_bound")]
    CapacityBound(CapacityBoundParams),
    /// ethSTARK toy problem regime, conjectured and for historical reference only.
    #[strum(serialize = "ethstark")]
    EthStark,
}

impl Regime {
    /// All four regimes with their default constants, most conservative first.
    pub fn standard() -> [Regime; 4] {
        [
            Regime::UniqueDecoding,
            Regime::JohnsonBound(JohnsonBoundParams::default()),
            Regime::CapacityBound(CapacityBoundParams::default()),
            Regime::EthStark,
        ]
    }

    pub fn identifier(&self) -> &'static str {
        self.into()
    }

    /// Computes the round-by-round soundness of the proof system described by `params`.
    pub fn compute_security(&self, params: &DerivedParams) -> Result<RegimeResult, RegimeError> {
        match self {
            Regime::UniqueDecoding => unique_decoding::compute_security(params),
            Regime::JohnsonBound(regime) => johnson_bound::compute_security(regime, params),
            Regime::CapacityBound(regime) => capacity_bound::compute_security(regime, params),
            Regime::EthStark => ethstark::compute_security(params),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::test_utils::{risc0_like_config, zisk_like_config};

    #[test]
    fn test_identifier_round_trip() {
        for regime in Regime::standard() {
            assert_eq!(Regime::from_str(regime.identifier()).unwrap(), regime);
            assert_eq!(regime.to_string(), regime.identifier());
        }
        assert!(Regime::from_str("list_decoding").is_err());
    }

    #[test]
    fn test_regimes_are_repeatable() {
        let params = DerivedParams::new(zisk_like_config()).unwrap();
        for regime in Regime::standard() {
            let first = regime.compute_security(&params).unwrap();
            let second = regime.compute_security(&params).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_regime_result_carries_identifier() {
        let params = DerivedParams::new(risc0_like_config()).unwrap();
        for regime in Regime::standard() {
            let result = regime.compute_security(&params).unwrap();
            assert_eq!(result.regime(), regime.identifier());
        }
    }
}
