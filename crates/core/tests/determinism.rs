use generals_core::{GenerationConfig, Mapper};

#[test]
fn test_determinism_identical_seeds_produce_same_fingerprint() {
    let config = GenerationConfig { random_seed: Some(12_345), ..GenerationConfig::default() };

    let first = Mapper::new(config.clone()).expect("generation 1 failed");
    let second = Mapper::new(config).expect("generation 2 failed");

    assert_eq!(
        first.grid().fingerprint(),
        second.grid().fingerprint(),
        "identical configs must produce identical maps"
    );
    assert_eq!(first.map_text(), second.map_text());
}

#[test]
fn test_determinism_different_seeds_produce_different_maps() {
    let first =
        Mapper::new(GenerationConfig { random_seed: Some(123), ..GenerationConfig::default() })
            .expect("generation 1 failed");
    let second =
        Mapper::new(GenerationConfig { random_seed: Some(456), ..GenerationConfig::default() })
            .expect("generation 2 failed");

    assert_ne!(
        first.grid().fingerprint(),
        second.grid().fingerprint(),
        "different seeds should produce different maps"
    );
}

#[test]
fn test_unseeded_mappers_record_a_replayable_seed() {
    let unseeded = Mapper::new(GenerationConfig::default()).expect("unseeded generation failed");

    let replayed = Mapper::new(GenerationConfig {
        random_seed: Some(unseeded.seed()),
        ..GenerationConfig::default()
    })
    .expect("replayed generation failed");

    assert_eq!(unseeded.map_text(), replayed.map_text());
}
