use crate::scoring::{validate, validate_draft, SmartBand, SmartCriterion};

#[test]
fn well_formed_objective_passes_every_check() {
    let assessment = validate(
        "Aumentar Arrecadação Própria",
        "Otimizar IPTU e ISS através de recadastramento",
        true,
        true,
    );

    assert_eq!(assessment.score, 100);
    assert_eq!(assessment.checks.len(), 5);
    assert!(assessment.checks.iter().all(|check| check.valid));
    assert_eq!(assessment.band(), SmartBand::Excellent);
    assert_eq!(assessment.failing().count(), 0);
}

#[test]
fn empty_objective_only_keeps_the_relevance_check() {
    let assessment = validate("abc", "", false, false);

    let passing: Vec<SmartCriterion> = assessment
        .checks
        .iter()
        .filter(|check| check.valid)
        .map(|check| check.id)
        .collect();
    assert_eq!(passing, vec![SmartCriterion::Relevant]);
    assert_eq!(assessment.score, 20);
    assert_eq!(assessment.band(), SmartBand::Weak);
}

#[test]
fn checks_are_reported_in_fixed_order_with_tips() {
    let assessment = validate("abc", "", false, false);

    let order: Vec<SmartCriterion> = assessment.checks.iter().map(|check| check.id).collect();
    assert_eq!(order, SmartCriterion::ordered().to_vec());
    assert!(assessment
        .checks
        .iter()
        .all(|check| !check.label.is_empty() && !check.tip.is_empty()));
}

#[test]
fn specific_requires_leading_verb_in_any_case() {
    let lower = validate("reduzir custos operacionais", "", false, false);
    let buried = validate("Plano para reduzir filas", "", false, false);

    assert!(lower.checks[0].valid);
    assert!(!buried.checks[0].valid);
}

#[test]
fn specific_counts_characters_not_bytes() {
    // Ten characters, eleven bytes.
    let short = validate("Aumentar é", "", false, false);
    let long_enough = validate("Aumentar XY", "", false, false);

    assert!(!short.checks[0].valid);
    assert!(long_enough.checks[0].valid);
}

#[test]
fn attainable_needs_more_than_twenty_characters() {
    let exact = validate("abc", "Treinamento contínuo", false, false);
    let longer = validate("abc", "Treinamento contínuo.", false, false);

    assert!(!exact.checks[2].valid);
    assert!(longer.checks[2].valid);
}

#[test]
fn bands_follow_score_boundaries() {
    assert_eq!(SmartBand::for_score(100), SmartBand::Excellent);
    assert_eq!(SmartBand::for_score(80), SmartBand::Medium);
    assert_eq!(SmartBand::for_score(60), SmartBand::Medium);
    assert_eq!(SmartBand::for_score(40), SmartBand::Weak);
    assert_eq!(SmartBand::for_score(0), SmartBand::Weak);
}

#[test]
fn measurable_and_time_bound_follow_flags() {
    let assessment = validate("Melhorar Qualidade da Saúde", "Reduzir filas", true, false);

    let failing: Vec<SmartCriterion> = assessment.failing().map(|check| check.id).collect();
    assert_eq!(
        failing,
        vec![SmartCriterion::Attainable, SmartCriterion::TimeBound]
    );
    assert_eq!(assessment.score, 60);
    assert_eq!(assessment.band(), SmartBand::Medium);
}

#[test]
fn draft_score_uses_its_own_weights() {
    assert_eq!(validate_draft("abc", ""), 0);
    assert_eq!(
        validate_draft(
            "Aumentar Arrecadação Própria",
            "Otimizar IPTU e ISS através de recadastramento"
        ),
        100
    );
    // Long title and any description: 20 + 40.
    assert_eq!(validate_draft("Digitalizar Serviços", "Implantar"), 60);
    // Verb found anywhere in the title.
    assert_eq!(validate_draft("Plano para reduzir filas", ""), 40);
}

#[test]
fn draft_verbs_are_narrower_than_full_check() {
    // "Melhorar" opens a specific title but earns nothing in the draft score.
    assert!(validate("Melhorar atendimento", "", false, false).checks[0].valid);
    assert_eq!(validate_draft("Melhorar atendimento", ""), 20);
}

#[test]
fn smart_scores_are_deterministic() {
    let first = validate("Garantir acesso à saúde", "Ampliar unidades básicas na zona rural", true, false);
    let second = validate("Garantir acesso à saúde", "Ampliar unidades básicas na zona rural", true, false);

    assert_eq!(first, second);
    assert_eq!(
        validate_draft("Manter equilíbrio fiscal", "Controle de gastos"),
        validate_draft("Manter equilíbrio fiscal", "Controle de gastos")
    );
}
