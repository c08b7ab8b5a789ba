use serde::{Deserialize, Serialize};

use crate::{model::LogEntry, types::Uuid};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
}

/// A field that arrives as a string from forms and query strings but may be a
/// number in json bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumberOrString {
    /// Whole numbers only. Surrounding whitespace is ignored
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            Self::Float(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
                Some(*v as i64)
            },
            Self::Float(_) => None,
            Self::Text(v) => v.trim().parse().ok(),
        }
    }

    pub fn raw(&self) -> String {
        match self {
            Self::Integer(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Text(v) => v.clone(),
        }
    }
}

impl From<&str> for NumberOrString {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExerciseRequest {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub duration: Option<NumberOrString>,
    #[serde(default)]
    pub date: Option<String>,
}

impl NewExerciseRequest {
    pub fn new<D: Into<String>, N: Into<NumberOrString>>(
        description: D,
        duration: N,
        date: Option<&str>,
    ) -> Self {
        Self {
            description: description.into(),
            duration: Some(duration.into()),
            date: date.map(str::to_owned),
        }
    }
}

/// The exercise merged with its user. `id` is the user's id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub date: String,
    pub duration: i64,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogParams {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod test {
    use super::{NewExerciseRequest, NumberOrString};

    #[test]
    fn test_duration_coercion() {
        assert_eq!(NumberOrString::Integer(30).to_integer(), Some(30));
        assert_eq!(NumberOrString::Float(30.0).to_integer(), Some(30));
        assert_eq!(NumberOrString::Float(30.5).to_integer(), None);
        assert_eq!(NumberOrString::Float(f64::NAN).to_integer(), None);
        assert_eq!(NumberOrString::from(" 45 ").to_integer(), Some(45));
        assert_eq!(NumberOrString::from("-5").to_integer(), Some(-5));
        assert_eq!(NumberOrString::from("30min").to_integer(), None);
        assert_eq!(NumberOrString::from("").to_integer(), None);
    }

    #[test]
    fn test_json_duration_may_be_number_or_string() {
        let number: NewExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":30}"#).unwrap();
        assert_eq!(number.duration, Some(NumberOrString::Integer(30)));
        assert_eq!(number.date, None);

        let text: NewExerciseRequest =
            serde_json::from_str(r#"{"description":"run","duration":"30","date":"2023-01-01"}"#)
                .unwrap();
        assert_eq!(text.duration, Some(NumberOrString::Text("30".to_string())));
        assert_eq!(text.date.as_deref(), Some("2023-01-01"));
    }

    #[test]
    fn test_missing_fields_default() {
        let req: NewExerciseRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.description, "");
        assert_eq!(req.duration, None);
    }
}
