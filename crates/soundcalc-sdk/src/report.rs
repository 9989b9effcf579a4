//! Markdown and JSON renderings of [SoundnessReport]s.

use std::fmt::Write;

use itertools::Itertools;
use serde_json::{json, Value};
use soundcalc::SoundnessReport;

/// Placeholder for components a regime does not model.
pub const ABSENT: &str = "—";

fn anchor(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Renders one section per proof system: its parameters and a table with one row per regime and
/// one column per component, in the order components first appear.
pub fn build_markdown_report(reports: &[SoundnessReport]) -> String {
    let mut md = String::new();
    let _ = write_markdown_report(&mut md, reports);
    md
}

fn write_markdown_report(md: &mut String, reports: &[SoundnessReport]) -> std::fmt::Result {
    writeln!(md, "# soundcalc report")?;
    writeln!(md)?;
    writeln!(
        md,
        "Each row is a soundness regime and each column a round of the proof system. Cells hold \
         bits of security; the total of a regime is the minimum of its row."
    )?;
    writeln!(md)?;

    writeln!(md, "## Proof systems")?;
    for report in reports {
        writeln!(md, "- [{}](#{})", report.name(), anchor(report.name()))?;
    }

    for report in reports {
        writeln!(md)?;
        write_section(md, report)?;
    }
    Ok(())
}

fn write_section(md: &mut String, report: &SoundnessReport) -> std::fmt::Result {
    let params = &report.params;
    let config = params.config();
    writeln!(md, "## {}", report.name())?;
    writeln!(md)?;
    writeln!(md, "**Parameters:**")?;
    writeln!(md, "- Field: {}", config.field.name())?;
    writeln!(md, "- Rate (ρ): {}", config.rho)?;
    writeln!(md, "- Trace length (H): 2^{}", params.log_trace_length())?;
    writeln!(md, "- Number of queries: {}", config.num_queries)?;
    writeln!(md, "- Grinding (bits): {}", config.grinding_query_phase)?;
    let batching = if config.power_batching { "Powers" } else { "Affine" };
    writeln!(md, "- Batching: {batching}")?;
    writeln!(
        md,
        "- FRI folding: {} rounds of arity {}",
        params.fri_rounds(),
        config.fri_folding_factor
    )?;
    if let Some(size) = params.proof_size_bits() {
        writeln!(
            md,
            "- Estimated FRI proof size: {:.1} KiB",
            size as f64 / 8.0 / 1024.0
        )?;
    }
    if let Some(bits) = report.best_attack_bits() {
        writeln!(md, "- Best known attack (bits): {bits}")?;
    }
    writeln!(md)?;

    let labels = report
        .outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok())
        .flat_map(|result| result.bits_by_label().map(|(label, _)| label))
        .unique()
        .collect_vec();

    let header = ["regime".to_string(), "total".to_string()]
        .into_iter()
        .chain(labels.iter().cloned())
        .collect_vec();
    writeln!(md, "| {} |", header.join(" | "))?;
    writeln!(md, "|{}", " --- |".repeat(header.len()))?;

    for outcome in &report.outcomes {
        let mut row = vec![outcome.regime.identifier().to_string()];
        match &outcome.result {
            Ok(result) => {
                row.push(result.total_bits().to_string());
                row.extend(labels.iter().map(|label| {
                    result
                        .get(label)
                        .map_or_else(|| ABSENT.to_string(), |bits| bits.to_string())
                }));
            }
            Err(err) => {
                row.push(format!("failed: {err}"));
                row.extend(labels.iter().map(|_| ABSENT.to_string()));
            }
        }
        writeln!(md, "| {} |", row.join(" | "))?;
    }
    Ok(())
}

/// One object per proof system with its configuration, derived quantities and the outcome of
/// every regime in evaluation order.
pub fn build_json_report(reports: &[SoundnessReport]) -> Value {
    Value::Array(reports.iter().map(json_section).collect())
}

fn json_section(report: &SoundnessReport) -> Value {
    let params = &report.params;
    let regimes = report
        .outcomes
        .iter()
        .map(|outcome| match &outcome.result {
            Ok(result) => json!({
                "regime": outcome.regime.identifier(),
                "total_bits": result.total_bits(),
                "components": result.components(),
            }),
            Err(err) => json!({
                "regime": outcome.regime.identifier(),
                "error": err.to_string(),
            }),
        })
        .collect_vec();
    json!({
        "name": report.name(),
        "config": params.config(),
        "fri_rounds": params.fri_rounds(),
        "proof_size_bits": params.proof_size_bits(),
        "best_attack_bits": report.best_attack_bits(),
        "regimes": regimes,
    })
}

#[cfg(test)]
mod tests {
    use soundcalc::{
        test_utils::{risc0_like_config, wide_combo_config},
        ProofSystemConfig, SoundnessCalculator,
    };

    use super::*;

    fn reports() -> Vec<SoundnessReport> {
        let risc0 = ProofSystemConfig {
            best_attack_bits: Some(96.0),
            ..risc0_like_config()
        };
        SoundnessCalculator::default()
            .calculate_all(&[risc0, wide_combo_config()])
            .into_iter()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn test_markdown_report() {
        let md = build_markdown_report(&reports());

        assert!(md.starts_with("# soundcalc report\n"));
        assert!(md.contains("- [risc0-like](#risc0-like)\n"));
        assert!(md.contains("- [wide-combo](#wide-combo)\n"));
        assert!(md.contains("## risc0-like\n"));
        assert!(md.contains("- Trace length (H): 2^21\n"));
        assert!(md.contains("- Batching: Powers\n"));
        assert!(md.contains("- Best known attack (bits): 96\n"));
        // 2_087_924 bits
        assert!(md.contains("- Estimated FRI proof size: 254.9 KiB\n"));
        assert!(md.contains("| regime | total | FRI batching round | FRI commit round 1 |"));

        for regime in ["unique_decoding", "johnson_bound", "capacity_bound", "ethstark"] {
            assert_eq!(md.matches(&format!("| {regime} |")).count(), 2, "{regime}");
        }
        // ethSTARK models neither the batching round nor ALI and DEEP
        assert!(md.contains(&format!("| ethstark | 98 | {ABSENT} | 123 |")));
        assert!(md.contains("| unique_decoding | 33 | 107 | 94 |"));
        assert!(md.contains("| johnson_bound | failed: johnson_bound: theta"));
    }

    #[test]
    fn test_markdown_table_is_rectangular() {
        let md = build_markdown_report(&reports());
        let widths = md
            .lines()
            .filter(|line| line.starts_with('|'))
            .map(|line| line.matches(" |").count())
            .collect_vec();
        // risc0-like: regime, total, batching, 4 commit rounds, query, ALI, DEEP, PLONK, PLOOKUP
        assert_eq!(&widths[..6], &[12; 6]);
        assert!(widths.iter().all(|&w| w >= 12));
    }

    #[test]
    fn test_json_report() {
        let json = build_json_report(&reports());
        let sections = json.as_array().unwrap();
        assert_eq!(sections.len(), 2);

        let risc0 = &sections[0];
        assert_eq!(risc0["name"], "risc0-like");
        assert_eq!(risc0["fri_rounds"], 4);
        assert_eq!(risc0["proof_size_bits"], 2_087_924);
        assert_eq!(risc0["best_attack_bits"], 96.0);
        assert_eq!(risc0["config"]["field"]["name"], "BabyBear^4");
        assert_eq!(risc0["regimes"][3]["regime"], "ethstark");
        assert_eq!(risc0["regimes"][3]["total_bits"], 98.0);
        assert_eq!(
            risc0["regimes"][0]["components"][0]["component"],
            "FRI batching round"
        );

        let wide = &sections[1];
        assert_eq!(wide["best_attack_bits"], Value::Null);
        assert!(wide["regimes"][1]["error"]
            .as_str()
            .unwrap()
            .starts_with("johnson_bound:"));
    }
}
