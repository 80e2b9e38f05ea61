//! Level lifecycle integration tests.
//!
//! These tests drive the public API end to end:
//! - Loading a corpus from chapter documents on disk
//! - Building every catalog level
//! - Playing the built set through a scoring session

use gita_core::games::{game_modes, CardKind, QuestionSet};
use gita_core::testing::fixtures;
use gita_core::{
    build_question_set, load_corpus_dir, seeded_rng, Corpus, GameMode, ScoringRules,
    SessionState,
};
use tempfile::TempDir;

/// Write the gita-shaped corpus to disk and load it back.
fn load_fixture_corpus() -> (TempDir, Corpus) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let chapters = fixtures::gita_shaped_corpus().list_chapters().to_vec();
    fixtures::write_corpus_dir(dir.path(), &chapters);
    let corpus = load_corpus_dir(dir.path()).expect("Failed to load corpus");
    (dir, corpus)
}

/// The answers a perfect player gives, one entry per scored action.
fn perfect_answers(set: &QuestionSet) -> Vec<bool> {
    match set {
        QuestionSet::Quiz(questions) => {
            questions.iter().map(|q| q.is_correct(&q.answer)).collect()
        }
        QuestionSet::ChapterMatch(questions) => {
            questions.iter().map(|q| q.is_correct(q.answer)).collect()
        }
        QuestionSet::FillBlank(questions) => questions
            .iter()
            .map(|q| q.is_correct(&q.correct_word))
            .collect(),
        QuestionSet::TranslationMatch(rounds) => rounds
            .iter()
            .flat_map(|round| round.cards.iter().map(|card| round.is_match(&card.id, &card.id)))
            .collect(),
        // One scored action per flipped pair
        QuestionSet::Memory(cards) => cards
            .iter()
            .filter(|card| card.kind == CardKind::Transliteration)
            .map(|card| cards.iter().any(|other| card.pairs_with(other)))
            .collect(),
    }
}

#[test]
fn test_every_catalog_level_plays_to_a_perfect_score() {
    let (_dir, corpus) = load_fixture_corpus();
    assert_eq!(corpus.total_verse_count(), 701);

    let mut rng = seeded_rng(Some(2024));
    for definition in game_modes() {
        for level in &definition.levels {
            let set = build_question_set(definition.id, &corpus, &level.config, &mut rng)
                .unwrap_or_else(|e| panic!("{} failed: {}", level.id, e));
            assert_eq!(set.mode(), definition.id);

            let answers = perfect_answers(&set);
            assert!(answers.iter().all(|&correct| correct), "{}", level.id);

            let total = answers.len() as u32;
            let mut session = SessionState::for_mode(definition.id, total);
            for correct in answers {
                session.record_answer(correct);
            }

            assert!(session.is_complete());
            let summary = session.summary();
            let rules = ScoringRules::for_mode(definition.id);
            let expected_score =
                total * rules.base_points + rules.streak_bonus * total * (total - 1) / 2;
            assert_eq!(summary.score, expected_score, "{}", level.id);
            assert_eq!(summary.accuracy, 1.0);
            assert_eq!(summary.streak, total);
        }
    }
}

#[test]
fn test_translation_match_mistakes_cost_points() {
    let corpus = fixtures::gita_shaped_corpus();
    let mut rng = seeded_rng(Some(5));
    let level = game_modes()
        .iter()
        .find(|definition| definition.id == GameMode::TranslationMatch)
        .and_then(|definition| definition.level("translation-gentle"))
        .expect("catalog level exists");

    let set = build_question_set(GameMode::TranslationMatch, &corpus, &level.config, &mut rng)
        .expect("Failed to build rounds");
    let QuestionSet::TranslationMatch(rounds) = set else {
        panic!("expected translation rounds");
    };
    let round = &rounds[0];
    let first = &round.cards[0];
    let second = &round.cards[1];

    let total = round.match_count() as u32;
    let mut session = SessionState::for_mode(GameMode::TranslationMatch, total);

    // A wrong drop on an empty score costs nothing
    assert!(!round.is_match(&first.id, &second.id));
    assert_eq!(session.record_answer(false), 0);

    assert!(round.is_match(&first.id, &first.id));
    assert_eq!(session.record_answer(true), 120);

    assert_eq!(session.record_answer(false), -20);
    assert_eq!(session.score, 100);
    assert!(session.is_complete());
}
