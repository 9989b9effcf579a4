//! Extension fields used by deployed proof systems.

use p3_baby_bear::BabyBear;
use p3_field::PrimeField64;
use p3_goldilocks::Goldilocks;
use p3_koala_bear::KoalaBear;
use soundcalc::FieldParams;

fn extension_of<F: PrimeField64>(name: &str, extension_degree: usize) -> FieldParams {
    FieldParams::new(name, F::ORDER_U64, extension_degree)
        .unwrap_or_else(|err| unreachable!("prime field presets are valid: {err}"))
}

/// Quadratic extension of Goldilocks, `p = 2^64 - 2^32 + 1`.
pub fn goldilocks_2() -> FieldParams {
    extension_of::<Goldilocks>("Goldilocks^2", 2)
}

/// Cubic extension of Goldilocks.
pub fn goldilocks_3() -> FieldParams {
    extension_of::<Goldilocks>("Goldilocks^3", 3)
}

/// Quartic extension of BabyBear, `p = 2^31 - 2^27 + 1`.
pub fn baby_bear_4() -> FieldParams {
    extension_of::<BabyBear>("BabyBear^4", 4)
}

/// Quintic extension of BabyBear.
pub fn baby_bear_5() -> FieldParams {
    extension_of::<BabyBear>("BabyBear^5", 5)
}

/// Quartic extension of KoalaBear, `p = 2^31 - 2^24 + 1`.
pub fn koala_bear_4() -> FieldParams {
    extension_of::<KoalaBear>("KoalaBear^4", 4)
}

/// All field presets, by name.
pub fn field_presets() -> Vec<FieldParams> {
    vec![
        goldilocks_2(),
        goldilocks_3(),
        baby_bear_4(),
        baby_bear_5(),
        koala_bear_4(),
    ]
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_characteristics() {
        assert_eq!(goldilocks_2().p(), (1 << 32) * ((1 << 32) - 1) + 1);
        assert_eq!(baby_bear_4().p(), (1 << 31) - (1 << 27) + 1);
        assert_eq!(koala_bear_4().p(), (1 << 31) - (1 << 24) + 1);
    }

    #[test_case(goldilocks_2(), 128.0 ; "goldilocks quadratic")]
    #[test_case(goldilocks_3(), 192.0 ; "goldilocks cubic")]
    #[test_case(baby_bear_4(), 123.6 ; "baby bear quartic")]
    #[test_case(baby_bear_5(), 154.5 ; "baby bear quintic")]
    #[test_case(koala_bear_4(), 124.0 ; "koala bear quartic")]
    fn test_field_size(field: FieldParams, expected_bits: f64) {
        assert!(
            (field.log2_field_size() - expected_bits).abs() < 0.1,
            "{}: {}",
            field.name(),
            field.log2_field_size()
        );
    }

    #[test]
    fn test_names_are_unique() {
        let presets = field_presets();
        for (i, field) in presets.iter().enumerate() {
            assert!(presets[i + 1..].iter().all(|other| other.name() != field.name()));
        }
    }
}
