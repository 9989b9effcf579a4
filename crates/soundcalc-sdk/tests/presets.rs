use soundcalc::{Regime, SoundnessCalculator};
use soundcalc_sdk::{
    config::zkvms::standard_presets,
    report::{build_markdown_report, ABSENT},
    utils::setup_tracing,
};
use test_case::test_case;

#[test_case("risc0", 33.0, 98.0)]
#[test_case("miden", 100.0, 104.0)]
#[test_case("zisk", 69.0, 144.0)]
fn test_standard_presets(name: &str, unique_decoding: f64, ethstark: f64) {
    setup_tracing();
    let config = standard_presets()
        .into_iter()
        .find(|config| config.name == name)
        .unwrap();
    let report = SoundnessCalculator::default().calculate(&config).unwrap();
    let totals: Vec<_> = report.totals().collect();
    assert_eq!(totals.len(), 4);
    assert_eq!(totals[0], ("unique_decoding", unique_decoding));
    assert_eq!(totals[3], ("ethstark", ethstark));
}

#[test]
fn test_report_for_single_regime() {
    setup_tracing();
    let reports: Vec<_> = SoundnessCalculator::new(vec![Regime::EthStark])
        .calculate_all(&standard_presets())
        .into_iter()
        .map(Result::unwrap)
        .collect();
    let md = build_markdown_report(&reports);
    assert_eq!(md.matches("| ethstark |").count(), 3);
    assert!(!md.contains("unique_decoding"));
    assert!(!md.contains(ABSENT));
}
