/// Field presets with characteristics taken from the Plonky3 field implementations.
pub mod fields;
/// zkVM presets and TOML configuration loading.
pub mod zkvms;
