//! Content shipped with the trainer.

use crate::error::CatalogError;
use crate::models::{Phrase, Question, Quiz};

/// The seven built-in Hausa quizzes.
pub fn builtin_catalog() -> Result<super::Catalog, CatalogError> {
    super::Catalog::new(vec![
        Quiz::new(
            1,
            "Quiz 1: Greetings in Hausa",
            vec![
                Question::new(
                    "What does 'Ina kwana' mean?",
                    ["Good evening", "Good morning", "Thank you"],
                    1,
                ),
                Question::new(
                    "What does 'Nagode' mean?",
                    ["Thank you", "Goodbye", "Hello"],
                    0,
                ),
                Question::new(
                    "How do you say 'How are you?' in Hausa?",
                    ["Yaya lafiya", "Kana lafiya", "Lahiya lau"],
                    0,
                ),
            ],
        )
        .with_message("Well done! You can now greet people in Hausa!"),
        Quiz::new(
            2,
            "Quiz 2: Everyday expressions",
            vec![
                Question::new(
                    "What does 'Barka da yamma' mean?",
                    ["Good evening", "Good morning", "Thank you"],
                    0,
                ),
                Question::new("What does 'Sannu' mean?", ["Hi", "Thank you", "Goodbye"], 0),
                Question::new(
                    "How do you say 'See you tomorrow' in Hausa?",
                    ["Sai anjima", "Sai gobe", "Sai wata rana"],
                    1,
                ),
            ],
        )
        .with_message("Excellent! You know the everyday expressions!"),
        Quiz::new(
            3,
            "Quiz 3: Numbers",
            vec![
                Question::new("How do you say 'one' in Hausa?", ["Daya", "Biyu", "Uku"], 0),
                Question::new("How do you say 'five' in Hausa?", ["Hudu", "Biyar", "Shida"], 1),
                Question::new("How do you say 'ten' in Hausa?", ["Tara", "Goma", "Ashirin"], 1),
            ],
        )
        .with_message("Congratulations! You can count in Hausa!"),
        Quiz::new(
            4,
            "Quiz 4: Colours",
            vec![
                Question::new("How do you say 'red' in Hausa?", ["Ja", "Baki", "Fari"], 0),
                Question::new("How do you say 'black' in Hausa?", ["Kore", "Rawaya", "Baki"], 2),
                Question::new(
                    "How do you say 'blue' in Hausa?",
                    ["Shuɗi", "Ja", "Ruwan sama"],
                    0,
                ),
            ],
        )
        .with_message("Superb! You know your colours in Hausa!"),
        Quiz::new(
            5,
            "Quiz 5: Animals",
            vec![
                Question::new("How do you say 'dog' in Hausa?", ["Kare", "Zaki", "Doki"], 0),
                Question::new("How do you say 'cat' in Hausa?", ["Mage", "Kyanwa", "Kaji"], 1),
                Question::new("How do you say 'horse' in Hausa?", ["Doki", "Zaki", "Kaji"], 0),
            ],
        )
        .with_message("Great! You can name the animals in Hausa!"),
        Quiz::new(
            6,
            "Quiz 6: Food",
            vec![
                Question::new(
                    "How do you say 'rice' in Hausa?",
                    ["Shinkafa", "Kayan gwari", "Koko"],
                    0,
                ),
                Question::new(
                    "How do you say 'bread' in Hausa?",
                    ["Burodi", "Fura", "Kayan marmari"],
                    0,
                ),
                Question::new("How do you say 'chicken' in Hausa?", ["Kaji", "Zaki", "Kare"], 0),
            ],
        )
        .with_message("Nice! You can order food in Hausa!"),
        Quiz::new(
            7,
            "Quiz 7: Parts of the body",
            vec![
                Question::new("How do you say 'hand' in Hausa?", ["Hannu", "Kafa", "Ido"], 0),
                Question::new("How do you say 'foot' in Hausa?", ["Kafa", "Hannu", "Goshi"], 0),
                Question::new("How do you say 'eye' in Hausa?", ["Ido", "Baki", "Hannu"], 0),
            ],
        )
        .with_message("Brilliant! You know the parts of the body in Hausa!"),
    ])
}

/// Phrases on the listen screen.
pub fn listen_phrases() -> Vec<Phrase> {
    [
        ("Ina kwana?", "Good morning"),
        ("Ina yini?", "How is your day going?"),
        ("Na gode", "Thank you"),
        ("Sai anjima", "See you later"),
        ("Lafiya lau", "All is well"),
        ("Yaya gida?", "How is the family?"),
        ("Me ya faru?", "What happened?"),
        ("Ina zuwa kasuwa", "I am going to the market"),
        ("Ka ci abinci?", "Have you eaten?"),
        ("Ina son shayi", "I like tea"),
        ("Zan taimaka maka", "I will help you"),
        ("Na yi kuskure", "I made a mistake"),
        ("Me kake so?", "What do you want?"),
        ("Ka ji dadin hutu", "Enjoy your holiday"),
        ("Allah ya taimaka", "May God help you"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((text, translation), id)| Phrase::new(id, text, translation))
    .collect()
}

/// Phrases in the repeat-after-me drill.
pub fn repeat_phrases() -> Vec<Phrase> {
    vec![
        Phrase::new(1, "Ina kwana?", "Good morning"),
        Phrase::new(2, "Nagode", "Thank you"),
        Phrase::new(3, "Sannu", "Hello"),
    ]
}
