//! The built-in question bank used when no bank file is configured.

use crate::domain::bank::QuestionBank;
use crate::domain::question::Question;

const DEFAULT_QUESTIONS: [(&str, [&str; 4], usize); 5] = [
    (
        "Out of all the 2-digit integers between 1 and 100, a 2-digit number has to be \
         selected at random. What is the probability that the selected number is not \
         divisible by 7?",
        ["13/90", "12/90", "78/90", "77/90"],
        3,
    ),
    (
        "Were you a bird, you ______________ in the sky.",
        ["would fly", "shall fly", "should fly", "shall have flown"],
        0,
    ),
    (
        "A deck of 5 cards (each carrying a distinct number from 1 to 5) is shuffled \
         thoroughly. Two cards are then removed one at time from the deck. What is the \
         probability that the two cards are selected with the number on the first card \
         being one higher than the number on the second card?",
        ["1/5", "4/25", "1/4", "2/5"],
        0,
    ),
    (
        "Choose the most appropriate word from the options given below to complete the \
         following sentence. If you are trying to make a strong impression on your \
         audience, you cannot do so by being understated, tentative or_____________.",
        ["Hyperbolic", "Restrained", "Argumentative", "Indifferent"],
        1,
    ),
    (
        "If the difference between expectation of the square of a random variable (E[X²]) \
         and the square of the expectation of the random variable (E[X])² is denoted by R, \
         then?",
        ["R = 0", "R < 0", "R >= 0", "R > 0"],
        2,
    ),
];

/// Returns the five-question general aptitude bank.
#[must_use]
pub fn default_bank() -> QuestionBank {
    // The table above is checked against `Question::new` in the tests below.
    DEFAULT_QUESTIONS
        .iter()
        .map(|(prompt, options, correct)| Question {
            prompt: (*prompt).to_owned(),
            options: options.iter().map(|o| (*o).to_owned()).collect(),
            correct_option_index: *correct,
        })
        .collect()
}
