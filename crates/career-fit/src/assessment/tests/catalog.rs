use super::common::*;
use crate::assessment::catalog::{CatalogError, QuestionCatalog, DIMENSION_PREFIX};
use crate::assessment::domain::{Dimension, QuestionKind};

#[test]
fn standard_catalog_is_valid() {
    let catalog = QuestionCatalog::standard();

    assert_eq!(catalog.validate(), Ok(()));
    let ids: Vec<&str> = catalog.sections().iter().map(|section| section.id).collect();
    assert_eq!(
        ids,
        vec!["introduction", "psychometric", "technical", "wiscar", "results"]
    );
    assert_eq!(catalog.total_estimated_minutes(), 32);
    assert_eq!(catalog.section_index("technical"), Some(2));
}

#[test]
fn knowledge_checks_carry_their_answer_key() {
    let catalog = QuestionCatalog::standard();

    let keys: Vec<(&str, Option<usize>)> = catalog
        .sections()
        .iter()
        .flat_map(|section| &section.questions)
        .filter(|question| question.kind == QuestionKind::MultipleChoice)
        .map(|question| (question.id, question.correct_answer))
        .collect();

    assert_eq!(
        keys,
        vec![
            ("tech_1", Some(1)),
            ("tech_2", Some(2)),
            ("tech_3", Some(0)),
            ("tech_5", Some(1)),
        ]
    );
}

#[test]
fn dimension_questions_cover_every_dimension() {
    let catalog = QuestionCatalog::standard();
    let section = catalog.section("wiscar").expect("dimension section");

    let covered: Vec<Dimension> = section
        .questions
        .iter()
        .inspect(|question| assert!(question.id.starts_with(DIMENSION_PREFIX)))
        .filter_map(|question| question.subcategory.and_then(Dimension::from_subcategory))
        .collect();

    assert_eq!(covered, Dimension::ordered().to_vec());
    assert_eq!(
        catalog.section_of("wiscar_3").map(|section| section.id),
        Some("wiscar")
    );
    assert_eq!(
        catalog.question("wiscar_3").map(|question| question.kind),
        Some(QuestionKind::Scale)
    );
}

#[test]
fn validation_flags_unkeyed_knowledge_checks() {
    let catalog = single_section_catalog(vec![question(
        "q_unkeyed",
        QuestionKind::MultipleChoice,
        "trivia",
    )]);

    assert_eq!(
        catalog.validate(),
        Err(CatalogError::MissingCorrectAnswer("q_unkeyed".to_string()))
    );
}

#[test]
fn validation_flags_structural_problems() {
    let duplicate = single_section_catalog(vec![
        question("q_dup", QuestionKind::Scale, "a"),
        question("q_dup", QuestionKind::Scale, "b"),
    ]);
    assert_eq!(
        duplicate.validate(),
        Err(CatalogError::DuplicateQuestion("q_dup".to_string()))
    );

    let mut bare = question("q_bare", QuestionKind::Likert, "a");
    bare.options.clear();
    assert!(matches!(
        single_section_catalog(vec![bare]).validate(),
        Err(CatalogError::MissingOptions { kind: "likert", .. })
    ));

    let mut weightless = question("q_weightless", QuestionKind::Scale, "a");
    weightless.weight = 0.0;
    assert_eq!(
        single_section_catalog(vec![weightless]).validate(),
        Err(CatalogError::InvalidWeight("q_weightless".to_string()))
    );

    let mut overshoot = question("q_overshoot", QuestionKind::MultipleChoice, "a");
    overshoot.correct_answer = Some(3);
    assert_eq!(
        single_section_catalog(vec![overshoot]).validate(),
        Err(CatalogError::CorrectAnswerOutOfRange {
            question_id: "q_overshoot".to_string(),
            index: 3,
            options: 3,
        })
    );
}
