use ontalign_core::config::*;
use ontalign_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = OntAlignConfig::from_toml("").unwrap();

    // Semantic defaults
    assert_eq!(config.semantic.ic_model, IcModel::Seco);
    assert_eq!(config.semantic.measure, SimilarityMeasure::Resnik);
    assert_eq!(config.semantic.strategy, Strategy::Maximum);
    assert_eq!(config.semantic.weighting, Weighting::TConorm);
    assert_eq!(config.semantic.final_score, FinalScore::Average);
    assert_eq!(config.semantic.radius, 3);
    assert_eq!(config.semantic.threads, 0);

    // Extension defaults
    assert_eq!(config.extension.threshold, 0.6);
    assert_eq!(config.extension.lower_threshold, 0.4);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[semantic]
ic_model = "resnik"
measure = "jiang_conrath"
strategy = "average"
radius = 1

[extension]
threshold = 0.75
"#;
    let config = OntAlignConfig::from_toml(toml).unwrap();
    assert_eq!(config.semantic.ic_model, IcModel::Resnik);
    assert_eq!(config.semantic.measure, SimilarityMeasure::JiangConrath);
    assert_eq!(config.semantic.strategy, Strategy::Average);
    assert_eq!(config.semantic.radius, 1);
    // Non-overridden fields keep defaults
    assert_eq!(config.semantic.weighting, Weighting::TConorm);
    assert_eq!(config.extension.threshold, 0.75);
    assert_eq!(config.extension.lower_threshold, 0.4);
}

#[test]
fn config_rejects_unknown_enum_value() {
    let err = OntAlignConfig::from_toml("[semantic]\nstrategy = \"median\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn config_rejects_threshold_out_of_range() {
    let err = OntAlignConfig::from_toml("[extension]\nthreshold = 1.5\n").unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "extension.threshold"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn config_rejects_excessive_radius() {
    let err = OntAlignConfig::from_toml("[semantic]\nradius = 1000\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn semantic_config_setters_override_defaults() {
    let config = SemanticConfig::default()
        .with_ic_model(IcModel::Resnik)
        .with_measure(SimilarityMeasure::Lin)
        .with_strategy(Strategy::Descendants)
        .with_weighting(Weighting::Average)
        .with_final_score(FinalScore::TConorm)
        .with_radius(2)
        .with_threads(4);
    assert_eq!(config.ic_model, IcModel::Resnik);
    assert_eq!(config.measure, SimilarityMeasure::Lin);
    assert_eq!(config.strategy, Strategy::Descendants);
    assert_eq!(config.weighting, Weighting::Average);
    assert_eq!(config.final_score, FinalScore::TConorm);
    assert_eq!(config.radius, 2);
    assert_eq!(config.threads, 4);
}

#[test]
fn strategy_sides() {
    assert!(Strategy::Ancestors.uses_ancestors());
    assert!(!Strategy::Ancestors.uses_descendants());
    assert!(!Strategy::Descendants.uses_ancestors());
    assert!(Strategy::Maximum.uses_ancestors() && Strategy::Maximum.uses_descendants());
}
