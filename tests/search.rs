//! End-to-end search runs.

use std::fs;

use numeric_ga::evolution::{DnaRng, Population};
use numeric_ga::schema::{ConfigError, Sampling};
use numeric_ga::{SearchConfig, SearchEngine, StopReason};
use tempfile::tempdir;

#[test]
fn population_loop_converges_on_target() {
    let mut pop =
        Population::with_sampling(10, 0.0, 1000.0, Sampling::Integral, DnaRng::new(254)).unwrap();
    pop.set_target(254.0);

    let mut count = 0;
    while !pop.has_found() && count < 50_000 {
        count += 1;
        pop.generate_mating_pool(6).unwrap();
        pop.reproduce(10, 2).unwrap();
        pop.mutate(0.1, 0.2).unwrap();
    }

    assert!(pop.has_found(), "no convergence after {} generations", count);
    assert_eq!(pop.len(), 10);
}

#[test]
fn engine_converges_with_default_config() {
    let config = SearchConfig {
        random_seed: Some(42),
        max_generations: 50_000,
        ..Default::default()
    };
    let mut engine = SearchEngine::new(config).unwrap();

    let mut last_generation = 0;
    let result = engine
        .run_with_callback(|report| last_generation = report.generation)
        .unwrap();

    assert_eq!(result.stats.stop_reason, StopReason::Converged);
    assert!(result.stats.found);
    assert!(engine.population().found());
    assert_eq!(last_generation, result.stats.generations);
    assert_eq!(
        result.history.best_fitness.len(),
        result.stats.generations + 1
    );
}

#[test]
fn fixed_seed_is_reproducible() {
    let config = SearchConfig {
        random_seed: Some(7),
        max_generations: 200,
        ..Default::default()
    };

    let first = SearchEngine::new(config.clone()).unwrap().run().unwrap();
    let second = SearchEngine::new(config).unwrap().run().unwrap();

    assert_eq!(first.stats.generations, second.stats.generations);
    assert_eq!(first.history.mean_value, second.history.mean_value);
}

#[test]
fn config_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("search.json");
    fs::write(
        &path,
        r#"{
            "population": { "size": 8, "low_bound": -50.0, "high_bound": 50.0 },
            "target": 5.0,
            "generation": {
                "pool_size": 4,
                "offspring_size": 8,
                "mating_partners": 3,
                "random_chance": 0.2,
                "increment_chance": 0.3
            },
            "random_seed": 99
        }"#,
    )
    .unwrap();

    let config = SearchConfig::from_json_file(&path).unwrap();
    assert_eq!(config.population.size, 8);
    assert_eq!(config.population.sampling, Sampling::Integral);
    assert_eq!(config.generation.mating_partners, 3);
    assert!(config.validate().is_ok());
}

#[test]
fn missing_and_malformed_config_files() {
    let dir = tempdir().unwrap();

    let missing = SearchConfig::from_json_file(dir.path().join("absent.json"));
    assert!(matches!(missing, Err(ConfigError::Io(_))));

    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        SearchConfig::from_json_file(&path),
        Err(ConfigError::Parse(_))
    ));
}
