use std::collections::BTreeMap;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One response to a question. The wire form is an integer on the fixed
/// five-point product scale or the string `"unknown"`; a raw `0` is the
/// legacy spelling of "don't know" and maps to the same sentinel. Catalogs
/// with a different scale validate ratings at the session boundary instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerValue {
    Unknown,
    Rating(u8),
}

impl AnswerValue {
    /// Numeric value when the respondent actually rated the question.
    /// `Unknown` contributes to neither numerator nor denominator.
    pub fn rating(self) -> Option<u8> {
        match self {
            AnswerValue::Rating(value) => Some(value),
            AnswerValue::Unknown => None,
        }
    }
}

impl Serialize for AnswerValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AnswerValue::Unknown => serializer.serialize_str("unknown"),
            AnswerValue::Rating(value) => serializer.serialize_u8(*value),
        }
    }
}

impl<'de> Deserialize<'de> for AnswerValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(0) => Ok(AnswerValue::Unknown),
            Raw::Number(value) if (1..=5).contains(&value) => Ok(AnswerValue::Rating(value as u8)),
            Raw::Number(value) => Err(D::Error::custom(format!(
                "answer value {value} is outside the 0-5 scale"
            ))),
            Raw::Text(text) if text == "unknown" => Ok(AnswerValue::Unknown),
            Raw::Text(text) => Err(D::Error::custom(format!(
                "unrecognized answer value '{text}'"
            ))),
        }
    }
}

/// A (question, value) pair as submitted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
}

/// The deduplicated answer collection consumed by the scoring engine.
/// Re-answering a question replaces the prior value (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse an ordered submission into the canonical sheet.
    pub fn from_answers(answers: impl IntoIterator<Item = Answer>) -> Self {
        let mut sheet = Self::new();
        for answer in answers {
            sheet.record(answer.question_id, answer.value);
        }
        sheet
    }

    pub fn record(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.answers.insert(question_id.into(), value);
    }

    pub fn get(&self, question_id: &str) -> Option<AnswerValue> {
        self.answers.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}
