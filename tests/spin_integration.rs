//! Integration tests for the Spin operator
//!
//! Tests the full path: base vector → SpinGenerator → CorrelationVector

use cvspin::core::{FixedClock, FixedEntropy, SpinGenerator};
use cvspin::types::{
    CvVersion, ErrorKind, SpinCounterInterval, SpinCounterPeriodicity, SpinEntropy,
    SpinParameters,
};
use cvspin::{spin, spin_with_parameters, SpinConfig};
use pretty_assertions::assert_eq;

const V1_CV: &str = "tul4NUsfs9Cl7mOf.1";
const V2_CV: &str = "KZY+dsX2jEaZesgCPjJ2Ng.1";

fn fixed(config: SpinConfig, ticks: u64, bytes: &[u8]) -> SpinGenerator<FixedClock, FixedEntropy> {
    SpinGenerator::with_sources(config, FixedClock(ticks), FixedEntropy(bytes.to_vec()))
}

/// Shifted ticks 5, entropy [1, 2], default parameters
#[test]
fn test_worked_example() {
    let gen = fixed(
        SpinConfig::default(),
        FixedClock::from_shifted(5, 24).0,
        &[0x01, 0x02],
    );
    let params = SpinParameters::new(
        SpinCounterInterval::Coarse,
        SpinCounterPeriodicity::Short,
        SpinEntropy::TWO,
    );

    let cv = gen.spin_with_parameters("abc.1", &params).unwrap();

    // (5 << 8 | 1) << 8 | 2
    assert_eq!(cv.base(), "abc.1.327938");
    assert_eq!(cv.value(), "abc.1.327938.0");
    assert_eq!(cv.version(), CvVersion::V1);
}

/// Same clock and entropy always give the same vector
#[test]
fn test_determinism() {
    let gen = fixed(SpinConfig::default(), 0x0123_4567_89AB_CDEF, &[9, 8, 7, 6]);
    let params = SpinParameters::new(
        SpinCounterInterval::Fine,
        SpinCounterPeriodicity::Long,
        SpinEntropy::FOUR,
    );

    let a = gen.spin_with_parameters(V1_CV, &params).unwrap();
    let b = gen.spin_with_parameters(V1_CV, &params).unwrap();
    assert_eq!(a, b);
}

/// Output always starts with the base vector and a dot
#[test]
fn test_prefix_preserved() {
    for cv in [V1_CV, V2_CV, "abc", "abc.1.2.3"] {
        let spun = spin(cv).unwrap();
        assert!(
            spun.base().starts_with(&format!("{}.", cv)),
            "{} does not start with {}.",
            spun.base(),
            cv
        );
    }
}

/// Version is inferred and carried through; extension resets to 0
#[test]
fn test_version_and_extension() {
    let gen = fixed(SpinConfig::validating(), 1 << 30, &[1, 2]);

    let v1 = gen.spin(V1_CV).unwrap();
    assert_eq!(v1.version(), CvVersion::V1);
    assert_eq!(v1.extension(), 0);

    let v2 = gen.spin(V2_CV).unwrap();
    assert_eq!(v2.version(), CvVersion::V2);
    assert_eq!(v2.extension(), 0);
}

/// Invalid base spins when validation is off, fails when it is on
#[test]
fn test_validation_gating() {
    let invalid = "not-a-valid!base.1";

    let lenient = fixed(SpinConfig::default(), 1 << 24, &[0, 0]);
    let cv = lenient.spin(invalid).unwrap();
    assert!(cv.base().starts_with("not-a-valid!base.1."));

    let strict = fixed(SpinConfig::validating(), 1 << 24, &[0, 0]);
    let err = strict.spin(invalid).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

/// Validation applies to the input, not the spun output
#[test]
fn test_validation_uses_input() {
    let strict = fixed(SpinConfig::validating(), u64::MAX, &[0xFF; 4]);
    let params = SpinParameters::new(
        SpinCounterInterval::Fine,
        SpinCounterPeriodicity::Long,
        SpinEntropy::FOUR,
    );
    let cv = strict.spin_with_parameters(V1_CV, &params).unwrap();
    assert_eq!(cv.base(), format!("{}.4294967295.4294967295", V1_CV));
}

/// Empty input fails inference regardless of validation
#[test]
fn test_empty_input() {
    let err = spin("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VersionInference);

    let err = spin(".1.2").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VersionInference);
}

/// Exactly one field up to 32 bits, two beyond
#[test]
fn test_field_count_boundary() {
    let cases = [
        (SpinCounterPeriodicity::Short, SpinEntropy::TWO, 1),   // 32
        (SpinCounterPeriodicity::Long, SpinEntropy::NONE, 1),   // 32
        (SpinCounterPeriodicity::Medium, SpinEntropy::ONE, 1),  // 32
        (SpinCounterPeriodicity::Medium, SpinEntropy::TWO, 2),  // 40
        (SpinCounterPeriodicity::Long, SpinEntropy::ONE, 2),    // 40
        (SpinCounterPeriodicity::None, SpinEntropy::FOUR, 1),   // 32
        (SpinCounterPeriodicity::Short, SpinEntropy::THREE, 2), // 40
    ];

    for (periodicity, entropy, fields) in cases {
        let params = SpinParameters::new(SpinCounterInterval::Coarse, periodicity, entropy);
        let cv = spin_with_parameters("abc.1", &params).unwrap();
        let suffix = cv.base().strip_prefix("abc.1.").unwrap();
        assert_eq!(
            suffix.split('.').count(),
            fields,
            "{} produced {:?}",
            params,
            suffix
        );
    }
}

/// 32 bit counter with 4 entropy bytes uses the whole u64
#[test]
fn test_sixty_four_bits() {
    let gen = fixed(SpinConfig::default(), 0xFFFF_FFFF << 16, &[0xFF, 0xFF, 0xFF, 0xFF]);
    let params = SpinParameters::new(
        SpinCounterInterval::Fine,
        SpinCounterPeriodicity::Long,
        SpinEntropy::FOUR,
    );
    let cv = gen.spin_with_parameters("abc.1", &params).unwrap();
    assert_eq!(cv.base(), "abc.1.4294967295.4294967295");
}

/// Coarse counter advances once every 2^24 ticks
#[test]
fn test_coarse_counter_cadence() {
    let params = SpinParameters::new(
        SpinCounterInterval::Coarse,
        SpinCounterPeriodicity::Short,
        SpinEntropy::NONE,
    );
    let before = fixed(SpinConfig::default(), (10 << 24) + (1 << 24) - 1, &[]);
    let after = fixed(SpinConfig::default(), 11 << 24, &[]);

    assert_eq!(before.spin_with_parameters("abc", &params).unwrap().base(), "abc.10");
    assert_eq!(after.spin_with_parameters("abc", &params).unwrap().base(), "abc.11");
}

/// One generator shared across threads
#[test]
fn test_concurrent_spins() {
    let gen = SpinGenerator::new(SpinConfig::validating());

    let results: Vec<_> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gen = &gen;
                s.spawn(move || {
                    (0..100)
                        .map(|_| gen.spin(V2_CV))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(results.len(), 800);
    for result in results {
        let cv = result.unwrap();
        assert!(cv.base().starts_with(&format!("{}.", V2_CV)));
        assert_eq!(cv.version(), CvVersion::V2);
    }
}
