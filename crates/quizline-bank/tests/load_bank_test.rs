//! Integration tests for loading and reordering question banks.

use std::path::PathBuf;

use quizline_bank::{Question, QuestionBank, load_bank};
use quizline_core::error::QuizError;
use quizline_core::rng::SeededRng;

/// Writes `contents` to a uniquely named file in the temp directory.
fn write_bank_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("quizline-{}-{name}", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_yaml_file_then_shuffle_keeps_every_question() {
    let path = write_bank_file(
        "geo.yaml",
        r#"
questions:
  - prompt: "Largest ocean?"
    options: ["Atlantic", "Pacific", "Indian"]
    correct_option_index: 1
  - prompt: "Longest river?"
    options: ["Nile", "Danube"]
    correct_option_index: 0
  - prompt: "Highest peak?"
    options: ["K2", "Everest", "Denali", "Kilimanjaro"]
    correct_option_index: 1
"#,
    );

    let mut bank = load_bank(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    let before: Vec<Question> = bank.questions().to_vec();

    bank.shuffle(&mut SeededRng::from_seed(11));

    assert_eq!(bank.size(), 3);
    for question in &before {
        assert!(bank.iter().any(|q| q == question));
    }
}

#[test]
fn test_load_json_file() {
    let path = write_bank_file(
        "colors.json",
        r#"{ "questions": [
            { "question": "Mix of blue and yellow?", "options": ["green", "purple"], "correctAnswer": 0 }
        ] }"#,
    );

    let bank = load_bank(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let question = bank.at(0).unwrap();
    assert_eq!(question.prompt(), "Mix of blue and yellow?");
    assert!(question.is_correct(0));
}

#[test]
fn test_load_rejects_unknown_top_level_fields() {
    let path = write_bank_file("typo.yaml", "questons: []\n");

    let result = load_bank(&path);
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(QuizError::Load(_))));
}

#[test]
fn test_appended_question_is_reachable_by_index() {
    let mut bank = QuestionBank::new();
    bank.append(Question::new("First?", ["a", "b"], 0).unwrap());
    bank.append(Question::new("Second?", ["a", "b"], 1).unwrap());

    assert_eq!(bank.at(1).unwrap().prompt(), "Second?");
    assert!(matches!(
        bank.at(2),
        Err(QuizError::OutOfRange { index: 2, size: 2 })
    ));
}
