//! Parameters of deployed zkVMs, and loading of user supplied ones.

use std::{fs, path::Path};

use serde::Deserialize;
use soundcalc::{ArgumentConstants, ConfigError, ProofSystemConfig};
use thiserror::Error;

use super::fields::{baby_bear_4, goldilocks_2, goldilocks_3};

/// RISC0, from <https://github.com/risc0/risc0/blob/main/risc0/zkp/src/docs/soundness.ipynb> and
/// Section 3.2 of <https://dev.risczero.com/proof-system-in-detail.pdf>.
pub fn risc0() -> ProofSystemConfig {
    let num_control = 16;
    let num_data = 223;
    let num_accum = 40;
    let num_columns = num_control + num_data + num_accum;
    ProofSystemConfig {
        name: "risc0".to_string(),
        rho: 0.25,
        trace_length: 1 << 21,
        field: baby_bear_4(),
        num_columns,
        num_polys: num_columns + 4,
        power_batching: true,
        num_queries: 50,
        air_max_degree: 4,
        fri_folding_factor: 16,
        fri_early_stop_degree: 1 << 8,
        max_combo: 9,
        grinding_query_phase: 0,
        hash_size_bits: 256,
        argument_constants: ArgumentConstants::default(),
        best_attack_bits: None,
    }
}

/// Miden, with the parameters of the `get_100_bits_security` test of
/// <https://github.com/facebook/winterfell/blob/main/air/src/proof/security.rs>.
///
/// The batch holds the constraint columns plus the composition polynomial segments.
pub fn miden() -> ProofSystemConfig {
    ProofSystemConfig {
        name: "miden".to_string(),
        rho: 0.25,
        trace_length: 1 << 18,
        field: goldilocks_2(),
        num_columns: 100,
        num_polys: 104,
        power_batching: false,
        num_queries: 119,
        air_max_degree: 5,
        fri_folding_factor: 2,
        // fri_remainder_max_degree = 127
        fri_early_stop_degree: 1 << 7,
        max_combo: 2,
        grinding_query_phase: 20,
        hash_size_bits: 256,
        argument_constants: ArgumentConstants::default(),
        best_attack_bits: None,
    }
}

/// ZisK-style parameters: rate one half over Goldilocks^3 with 8-ary folding.
pub fn zisk() -> ProofSystemConfig {
    ProofSystemConfig {
        name: "zisk".to_string(),
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
        argument_constants: ArgumentConstants::default(),
        best_attack_bits: None,
    }
}

pub fn standard_presets() -> Vec<ProofSystemConfig> {
    vec![risc0(), miden(), zisk()]
}

#[derive(Error, Debug)]
pub enum LoadConfigError {
    #[error("load_configs: failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("load_configs: failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("load_configs: invalid configuration in {path}: {source}")]
    Invalid { path: String, source: ConfigError },
}

/// Layout of a configuration file: one `[[zkvm]]` table per proof system.
#[derive(Clone, Debug, Deserialize)]
pub struct ConfigFile {
    #[serde(default, rename = "zkvm")]
    pub zkvms: Vec<ProofSystemConfig>,
}

/// Reads and validates every proof system of a TOML configuration file.
pub fn load_configs(path: impl AsRef<Path>) -> Result<Vec<ProofSystemConfig>, LoadConfigError> {
    let path = path.as_ref();
    let display = || path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|source| LoadConfigError::Io {
        path: display(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&contents).map_err(|source| LoadConfigError::Parse {
        path: display(),
        source,
    })?;
    for config in &file.zkvms {
        config
            .validate()
            .map_err(|source| LoadConfigError::Invalid {
                path: display(),
                source,
            })?;
    }
    tracing::debug!("loaded {} configurations from {}", file.zkvms.len(), path.display());
    Ok(file.zkvms)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use soundcalc::test_utils::{miden_like_config, risc0_like_config, zisk_like_config};
    use test_case::test_case;

    use super::*;
    use crate::config::fields::baby_bear_5;

    #[test_case(risc0(), risc0_like_config())]
    #[test_case(miden(), miden_like_config())]
    #[test_case(zisk(), zisk_like_config())]
    fn test_presets_match_fixtures(preset: ProofSystemConfig, fixture: ProofSystemConfig) {
        preset.validate().unwrap();
        assert_eq!(
            preset,
            ProofSystemConfig {
                name: preset.name.clone(),
                field: preset.field.clone(),
                ..fixture.clone()
            }
        );
        assert_eq!(preset.field.p(), fixture.field.p());
        assert_eq!(preset.field.field_size(), fixture.field.field_size());
    }

    const CONFIG: &str = r#"
[[zkvm]]
name = "custom"
rho = 0.125
trace_length = 1048576
num_columns = 50
num_polys = 60
power_batching = false
num_queries = 40
air_max_degree = 3
fri_folding_factor = 4
fri_early_stop_degree = 64
max_combo = 2
grinding_query_phase = 16
hash_size_bits = 256
best_attack_bits = 110.0

[zkvm.field]
name = "BabyBear^5"
p = 2013265921
extension_degree = 5

[[zkvm]]
name = "custom-constants"
rho = 0.5
trace_length = 4096
num_columns = 8
num_polys = 8
power_batching = true
num_queries = 100
air_max_degree = 2
fri_folding_factor = 2
fri_early_stop_degree = 8
max_combo = 1
grinding_query_phase = 0
hash_size_bits = 256
field = { name = "Goldilocks^2", p = "18446744069414584321", extension_degree = 2 }
argument_constants = { plonk_factor = 4.0, plookup_factor = 12.0 }
"#;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_configs() {
        let file = write_config(CONFIG);
        let configs = load_configs(file.path()).unwrap();
        assert_eq!(configs.len(), 2);

        assert_eq!(configs[0].name, "custom");
        assert_eq!(configs[0].field, baby_bear_5());
        assert_eq!(configs[0].argument_constants, ArgumentConstants::default());
        assert_eq!(configs[0].best_attack_bits, Some(110.0));

        assert_eq!(configs[1].field, goldilocks_2());
        assert_eq!(configs[1].argument_constants, ArgumentConstants::new(4.0, 12.0));
        assert_eq!(configs[1].best_attack_bits, None);
    }

    #[test]
    fn test_load_rejects_invalid_config() {
        let invalid = CONFIG.replace("num_polys = 60", "num_polys = 40");
        let file = write_config(&invalid);
        assert!(matches!(
            load_configs(file.path()),
            Err(LoadConfigError::Invalid {
                source: ConfigError::ColumnsExceedPolys { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_load_rejects_invalid_field() {
        let invalid = CONFIG.replace("extension_degree = 5", "extension_degree = 0");
        let file = write_config(&invalid);
        assert!(matches!(
            load_configs(file.path()),
            Err(LoadConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_configs(dir.path().join("missing.toml")),
            Err(LoadConfigError::Io { .. })
        ));
    }
}
