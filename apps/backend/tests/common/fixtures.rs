//! Request bodies for question payloads.

use serde_json::json;

/// Categorize payload with two categories and two items.
pub fn categorize_request() -> serde_json::Value {
    json!({
        "type": "categorize",
        "data": {
            "categories": ["Fruit", "Veg"],
            "items": [
                { "name": "Apple", "category": "Fruit" },
                { "name": "Carrot", "category": "Veg" }
            ]
        }
    })
}

/// Cloze payload for the given sentence and answers, with a consistent blank count.
pub fn cloze_request(sentence: &str, answers: &[&str]) -> serde_json::Value {
    json!({
        "type": "cloze",
        "data": {
            "sentence": sentence,
            "blankCount": sentence.matches('_').count(),
            "answers": answers
        }
    })
}

/// The capital-of-France cloze payload.
pub fn france_cloze_request() -> serde_json::Value {
    cloze_request(
        "The capital of France is _ and the currency is _.",
        &["Paris", "Euro"],
    )
}

/// Comprehension payload with one question.
pub fn comprehension_request(correct_index: usize) -> serde_json::Value {
    json!({
        "type": "comprehension",
        "data": {
            "passage": "Ferris is a crab who loves Rust.",
            "questions": [
                {
                    "questionText": "What is Ferris?",
                    "options": ["A crab", "A gopher"],
                    "correctIndex": correct_index
                }
            ]
        }
    })
}

/// Cloze parse request body.
pub fn cloze_parse_request(sentence: &str, answers: &[&str]) -> serde_json::Value {
    json!({ "sentence": sentence, "answers": answers })
}
