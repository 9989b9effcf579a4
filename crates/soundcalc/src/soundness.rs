//! Round-by-round soundness of FRI-based proof systems.
//!
//! Every regime reports the soundness error of each round of the protocol:
//! 1. FRI batching - the proximity gap of the random linear combination of all polynomials
//! 2. FRI commit rounds - one entry per folding round
//! 3. FRI query phase - including grinding
//! 4. ALI, DEEP, PLONK and PLOOKUP - the proof system around FRI
//!
//! Each error is converted into bits of security, and the total security of a regime is the
//! minimum across all of its components.

use std::fmt;

use serde::{Serialize, Serializer};
use tracing::instrument;

use crate::{
    error::{ConfigError, RegimeError},
    proof_system::ProofSystemErrors,
    regime::Regime,
    DerivedParams, ProofSystemConfig,
};

/// Converts a soundness error into bits of security, `floor(-log2(error))`.
///
/// The error must be a positive finite number; nothing is clamped.
pub fn bits_of_security(component: &str, error: f64) -> Result<f64, RegimeError> {
    if !(error > 0.0 && error.is_finite()) {
        return Err(RegimeError::NonPositiveError {
            component: component.to_string(),
            error,
        });
    }
    Ok((-error.log2()).floor())
}

/// A named round of the protocol that contributes a soundness error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorComponent {
    FriBatching,
    /// 1-based index of the folding round.
    FriCommitRound(usize),
    FriQueryPhase,
    Ali,
    Deep,
    Plonk,
    Plookup,
}

impl fmt::Display for ErrorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorComponent::FriBatching => write!(f, "FRI batching round"),
            ErrorComponent::FriCommitRound(round) => write!(f, "FRI commit round {round}"),
            ErrorComponent::FriQueryPhase => write!(f, "FRI query phase"),
            ErrorComponent::Ali => write!(f, "ALI"),
            ErrorComponent::Deep => write!(f, "DEEP"),
            ErrorComponent::Plonk => write!(f, "PLONK"),
            ErrorComponent::Plookup => write!(f, "PLOOKUP"),
        }
    }
}

impl Serialize for ErrorComponent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ComponentSoundness {
    pub component: ErrorComponent,
    /// Soundness error of the round, a probability.
    pub error: f64,
    pub bits: f64,
}

/// Round-by-round soundness of one regime. Components the regime does not model are absent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RegimeResult {
    regime: &'static str,
    components: Vec<ComponentSoundness>,
}

impl RegimeResult {
    pub(crate) fn new(regime: &'static str) -> Self {
        Self {
            regime,
            components: Vec::new(),
        }
    }

    pub(crate) fn push(
        &mut self,
        component: ErrorComponent,
        error: f64,
    ) -> Result<(), RegimeError> {
        let bits = bits_of_security(&component.to_string(), error)?;
        tracing::debug!("{} | {component}: {bits} bits", self.regime);
        self.components.push(ComponentSoundness {
            component,
            error,
            bits,
        });
        Ok(())
    }

    /// Adds the same commit phase error for each of the `num_rounds` folding rounds.
    pub(crate) fn push_commit_rounds(
        &mut self,
        num_rounds: usize,
        error: f64,
    ) -> Result<(), RegimeError> {
        for round in 1..=num_rounds {
            self.push(ErrorComponent::FriCommitRound(round), error)?;
        }
        Ok(())
    }

    pub(crate) fn push_proof_system(&mut self, errors: &ProofSystemErrors) -> Result<(), RegimeError> {
        self.push(ErrorComponent::Ali, errors.ali)?;
        self.push(ErrorComponent::Deep, errors.deep)?;
        self.push(ErrorComponent::Plonk, errors.plonk)?;
        self.push(ErrorComponent::Plookup, errors.plookup)
    }

    /// Identifier of the regime that produced this result.
    pub fn regime(&self) -> &'static str {
        self.regime
    }

    /// Components in protocol order.
    pub fn components(&self) -> &[ComponentSoundness] {
        &self.components
    }

    pub fn component(&self, component: ErrorComponent) -> Option<&ComponentSoundness> {
        self.components.iter().find(|c| c.component == component)
    }

    /// Bits of security of the component with the given label, e.g. `"FRI commit round 2"`.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.components
            .iter()
            .find(|c| c.component.to_string() == label)
            .map(|c| c.bits)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// `(label, bits)` pairs in protocol order.
    pub fn bits_by_label(&self) -> impl Iterator<Item = (String, f64)> + '_ {
        self.components
            .iter()
            .map(|c| (c.component.to_string(), c.bits))
    }

    /// Security of the regime: the weakest round bounds the whole protocol.
    pub fn total_bits(&self) -> f64 {
        self.components
            .iter()
            .map(|c| c.bits)
            .fold(f64::INFINITY, f64::min)
    }
}

/// The outcome of one regime for one configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RegimeOutcome {
    pub regime: Regime,
    pub result: Result<RegimeResult, RegimeError>,
}

/// Soundness of one proof system under every requested regime.
#[derive(Clone, Debug, PartialEq)]
pub struct SoundnessReport {
    pub params: DerivedParams,
    pub outcomes: Vec<RegimeOutcome>,
}

impl SoundnessReport {
    pub fn name(&self) -> &str {
        &self.params.config().name
    }

    /// Best known attack supplied with the configuration, for comparison only.
    pub fn best_attack_bits(&self) -> Option<f64> {
        self.params.config().best_attack_bits
    }

    pub fn get(&self, identifier: &str) -> Option<&Result<RegimeResult, RegimeError>> {
        self.outcomes
            .iter()
            .find(|outcome| outcome.regime.identifier() == identifier)
            .map(|outcome| &outcome.result)
    }

    /// Total bits per successfully evaluated regime, in request order.
    pub fn totals(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.outcomes.iter().filter_map(|outcome| {
            outcome
                .result
                .as_ref()
                .ok()
                .map(|result| (outcome.regime.identifier(), result.total_bits()))
        })
    }
}

/// Evaluates configurations under a fixed list of regimes.
#[derive(Clone, Debug, PartialEq, derive_new::new)]
pub struct SoundnessCalculator {
    pub regimes: Vec<Regime>,
}

impl Default for SoundnessCalculator {
    fn default() -> Self {
        Self::new(Regime::standard().to_vec())
    }
}

impl SoundnessCalculator {
    /// Derives the parameters of `config` once and evaluates every regime on them.
    ///
    /// A regime whose preconditions do not hold for this configuration is reported as failed; the
    /// other regimes are still evaluated.
    #[instrument(level = "debug", skip_all, fields(name = %config.name))]
    pub fn calculate(&self, config: &ProofSystemConfig) -> Result<SoundnessReport, ConfigError> {
        let params = DerivedParams::new(config.clone())?;
        let outcomes = self
            .regimes
            .iter()
            .map(|regime| {
                let result = regime.compute_security(&params);
                match &result {
                    Ok(result) => tracing::debug!(
                        "{} | {}: {} bits",
                        config.name,
                        regime.identifier(),
                        result.total_bits()
                    ),
                    Err(err) => tracing::warn!("{} | {}: {err}", config.name, regime.identifier()),
                }
                RegimeOutcome {
                    regime: *regime,
                    result,
                }
            })
            .collect();
        Ok(SoundnessReport { params, outcomes })
    }

    /// Evaluates the cross product of `configs` and the regimes. Results are in input order and a
    /// rejected configuration does not affect the others.
    pub fn calculate_all(
        &self,
        configs: &[ProofSystemConfig],
    ) -> Vec<Result<SoundnessReport, ConfigError>> {
        let calculate = |config: &ProofSystemConfig| {
            let report = self.calculate(config);
            if let Err(err) = &report {
                tracing::warn!("rejected configuration: {err}");
            }
            report
        };
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            configs.par_iter().map(calculate).collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            configs.iter().map(calculate).collect()
        }
    }
}
