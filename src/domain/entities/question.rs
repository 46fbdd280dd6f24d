//! The fixed questionnaire catalog.
//!
//! Questions are a compile-time constant: ids, wording, and option lists are
//! immutable for the process lifetime and every answer key is derived from
//! this list.

/// Rendering and capture style for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free numeric input.
    Number,
    /// Mutually exclusive option list.
    Radio,
    /// Single-select dropdown (long option list).
    Select,
}

/// One questionnaire entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Stable id, also the wire field name.
    pub id: &'static str,
    /// Prompt shown to the user.
    pub prompt: &'static str,
    /// Capture style.
    pub kind: QuestionKind,
    /// Options for radio/select questions, empty for numeric input.
    pub options: &'static [&'static str],
    /// Input placeholder for numeric questions.
    pub placeholder: Option<&'static str>,
}

impl Question {
    /// Returns whether the question is answered by picking from options.
    #[must_use]
    pub const fn has_options(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Inclusive age bounds accepted at submission.
pub const AGE_RANGE: std::ops::RangeInclusive<i64> = 1..=120;

/// The 28 Indian states, alphabetical.
pub const INDIAN_STATES: [&str; 28] = [
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

const QUESTIONS: [Question; 10] = [
    Question {
        id: "age",
        prompt: "What is your age?",
        kind: QuestionKind::Number,
        options: &[],
        placeholder: Some("Enter your age"),
    },
    Question {
        id: "gender",
        prompt: "What is your gender?",
        kind: QuestionKind::Radio,
        options: &["Male", "Female", "Other"],
        placeholder: None,
    },
    Question {
        id: "state",
        prompt: "Which state do you belong to?",
        kind: QuestionKind::Select,
        options: &INDIAN_STATES,
        placeholder: None,
    },
    Question {
        id: "area",
        prompt: "Do you live in Urban or Rural area?",
        kind: QuestionKind::Radio,
        options: &["Urban", "Rural"],
        placeholder: None,
    },
    Question {
        id: "income",
        prompt: "What is your annual family income?",
        kind: QuestionKind::Radio,
        options: &[
            "Below ₹1,00,000",
            "₹1,00,000 – ₹3,00,000",
            "₹3,00,000 – ₹8,00,000",
            "Above ₹8,00,000",
        ],
        placeholder: None,
    },
    Question {
        id: "occupation",
        prompt: "What is your current occupation?",
        kind: QuestionKind::Radio,
        options: &[
            "Student",
            "Farmer",
            "Self-employed",
            "Salaried",
            "Unemployed",
            "Senior Citizen",
        ],
        placeholder: None,
    },
    Question {
        id: "education",
        prompt: "What is your highest education level?",
        kind: QuestionKind::Radio,
        options: &[
            "School",
            "Diploma",
            "Undergraduate",
            "Postgraduate",
            "Not Applicable",
        ],
        placeholder: None,
    },
    Question {
        id: "category",
        prompt: "Do you belong to any of these categories?",
        kind: QuestionKind::Radio,
        options: &["SC", "ST", "OBC", "General", "Prefer not to say"],
        placeholder: None,
    },
    Question {
        id: "has_land",
        prompt: "Do you have agricultural land?",
        kind: QuestionKind::Radio,
        options: &["Yes", "No"],
        placeholder: None,
    },
    Question {
        id: "is_disabled",
        prompt: "Are you a person with disability (Divyang)?",
        kind: QuestionKind::Radio,
        options: &["Yes", "No"],
        placeholder: None,
    },
];

/// Returns the ordered question catalog.
#[must_use]
pub const fn catalog() -> &'static [Question] {
    &QUESTIONS
}
