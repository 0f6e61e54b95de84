//! The built-in question bank and category metadata.
//!
//! The catalog is a static, read-only collection loaded wholesale at
//! startup. Filtering and shuffling live in the services crate; this module
//! only owns the data and id lookups.

use crate::model::{Category, CategoryId, Difficulty, Question, QuestionId};

/// Static, immutable set of all available questions and categories.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
    categories: Vec<Category>,
}

impl Catalog {
    /// The built-in catalog shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            questions: builtin_questions(),
            categories: builtin_categories(),
        }
    }

    /// A catalog from explicit parts, mostly for tests.
    #[must_use]
    pub fn new(questions: Vec<Question>, categories: Vec<Category>) -> Self {
        Self {
            questions,
            categories,
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    #[must_use]
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|category| &category.id == id)
    }
}

fn category(id: &str, name: &str, description: &str, icon: &str, color: &str) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

fn builtin_categories() -> Vec<Category> {
    vec![
        category(
            "general-knowledge",
            "General Knowledge",
            "Test your general knowledge across various topics",
            "🧠",
            "#3b82f6",
        ),
        category(
            "science",
            "Science",
            "Biology, Chemistry, Physics, and Earth Sciences",
            "🔬",
            "#22c55e",
        ),
        category(
            "technology",
            "Technology",
            "Computing, Programming, and Digital Innovation",
            "💻",
            "#a855f7",
        ),
        category(
            "history",
            "History",
            "World History, Events, and Historical Figures",
            "📚",
            "#f59e0b",
        ),
    ]
}

fn q(
    id: &str,
    prompt: &str,
    options: [&str; 4],
    correct_answer: usize,
    category: &str,
    difficulty: Difficulty,
    explanation: &str,
) -> Question {
    Question::new(
        QuestionId::new(id),
        prompt,
        options.iter().map(ToString::to_string).collect(),
        correct_answer,
        CategoryId::new(category),
        difficulty,
        Some(explanation.to_string()),
    )
    .expect("builtin catalog entry should be valid")
}

#[rustfmt::skip]
fn builtin_questions() -> Vec<Question> {
    use Difficulty::{Easy, Medium};

    vec![
        // General Knowledge
        q(
            "gk-easy-1",
            "What is the capital of France?",
            ["London", "Berlin", "Paris", "Madrid"],
            2,
            "general-knowledge",
            Easy,
            "Paris is the capital and most populous city of France.",
        ),
        q(
            "gk-easy-2",
            "Which planet is known as the Red Planet?",
            ["Venus", "Mars", "Jupiter", "Saturn"],
            1,
            "general-knowledge",
            Easy,
            "Mars is called the Red Planet due to its reddish appearance caused by iron oxide on its surface.",
        ),
        q(
            "gk-easy-3",
            "How many continents are there?",
            ["5", "6", "7", "8"],
            2,
            "general-knowledge",
            Easy,
            "There are seven continents: Asia, Africa, North America, South America, Antarctica, Europe, and Australia.",
        ),
        q(
            "gk-medium-1",
            "What is the smallest country in the world?",
            ["Monaco", "San Marino", "Vatican City", "Liechtenstein"],
            2,
            "general-knowledge",
            Medium,
            "Vatican City is the smallest sovereign state in the world, with an area of approximately 0.17 square miles.",
        ),
        q(
            "gk-medium-2",
            "Which element has the chemical symbol \"Au\"?",
            ["Silver", "Gold", "Aluminum", "Argon"],
            1,
            "general-knowledge",
            Medium,
            "Gold has the chemical symbol \"Au\" from its Latin name \"aurum\".",
        ),
        // Science
        q(
            "science-easy-1",
            "What gas do plants absorb from the atmosphere during photosynthesis?",
            ["Oxygen", "Nitrogen", "Carbon Dioxide", "Hydrogen"],
            2,
            "science",
            Easy,
            "Plants absorb carbon dioxide from the atmosphere and convert it into glucose during photosynthesis.",
        ),
        q(
            "science-easy-2",
            "How many bones are in the adult human body?",
            ["196", "206", "216", "226"],
            1,
            "science",
            Easy,
            "An adult human body has 206 bones, while babies are born with about 270 bones.",
        ),
        q(
            "science-medium-1",
            "What is the hardest natural substance on Earth?",
            ["Graphite", "Diamond", "Quartz", "Titanium"],
            1,
            "science",
            Medium,
            "Diamond is the hardest natural substance on Earth, rating 10 on the Mohs scale of hardness.",
        ),
        q(
            "science-medium-2",
            "What type of animal is a Komodo dragon?",
            ["Snake", "Lizard", "Crocodile", "Salamander"],
            1,
            "science",
            Medium,
            "The Komodo dragon is the largest living species of lizard, found in Indonesia.",
        ),
        // Technology
        q(
            "tech-easy-1",
            "What does \"WWW\" stand for?",
            ["World Wide Web", "World Wide Wire", "World Web Wide", "Wide World Web"],
            0,
            "technology",
            Easy,
            "WWW stands for World Wide Web, the information system on the Internet.",
        ),
        q(
            "tech-easy-2",
            "Which company developed the iPhone?",
            ["Samsung", "Google", "Apple", "Microsoft"],
            2,
            "technology",
            Easy,
            "Apple Inc. developed and manufactures the iPhone smartphone.",
        ),
        q(
            "tech-medium-1",
            "What does \"CPU\" stand for in computer terminology?",
            ["Central Processing Unit", "Computer Processing Unit", "Central Program Unit", "Computer Program Unit"],
            0,
            "technology",
            Medium,
            "CPU stands for Central Processing Unit, often called the \"brain\" of the computer.",
        ),
        q(
            "tech-medium-2",
            "Which programming language is known as the \"language of the web\"?",
            ["Python", "Java", "JavaScript", "C++"],
            2,
            "technology",
            Medium,
            "JavaScript is often called the \"language of the web\" as it runs in web browsers and enables interactive web pages.",
        ),
        // History
        q(
            "history-easy-1",
            "In which year did World War II end?",
            ["1944", "1945", "1946", "1947"],
            1,
            "history",
            Easy,
            "World War II ended in 1945 with the surrender of Japan in September.",
        ),
        q(
            "history-easy-2",
            "Who was the first person to walk on the moon?",
            ["Buzz Aldrin", "Neil Armstrong", "John Glenn", "Alan Shepard"],
            1,
            "history",
            Easy,
            "Neil Armstrong was the first person to walk on the moon on July 20, 1969.",
        ),
        q(
            "history-medium-1",
            "Which ancient wonder of the world was located in Alexandria?",
            ["Hanging Gardens", "Lighthouse", "Colossus", "Mausoleum"],
            1,
            "history",
            Medium,
            "The Lighthouse of Alexandria (Pharos) was one of the Seven Wonders of the Ancient World.",
        ),
        q(
            "history-medium-2",
            "The Berlin Wall fell in which year?",
            ["1987", "1988", "1989", "1990"],
            2,
            "history",
            Medium,
            "The Berlin Wall fell on November 9, 1989, marking a key moment in the end of the Cold War.",
        ),
    ]
}
