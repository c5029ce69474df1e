//! Sign catalog contract
//!
//! Sign lookup is a read-only collaborator of the core. [`SignRepository`] is the seam;
//! [`MemorySignRepository`] is an in-memory catalog loaded from the JSON export of the sign
//! list (`[{"_id": "KUR", "values": [{"value": "kur", "subIndex": 1}]}]`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignValue {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_index: Option<u32>,
}

impl SignValue {
    pub fn new(value: impl Into<String>, sub_index: Option<u32>) -> Self {
        Self {
            value: value.into(),
            sub_index,
        }
    }
}

/// A catalog entry. `name` is the canonical sign id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sign {
    #[serde(rename = "_id")]
    pub name: String,
    #[serde(default)]
    pub values: Vec<SignValue>,
}

impl Sign {
    pub fn new(name: impl Into<String>, values: Vec<SignValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn has_reading(&self, reading: &str, sub_index: u32) -> bool {
        self.values
            .iter()
            .any(|value| value.value == reading && value.sub_index == Some(sub_index))
    }
}

pub trait SignRepository {
    /// Find the sign with the reading `reading` and sub-index `sub_index`.
    fn search(&self, reading: &str, sub_index: u32) -> Option<Sign>;
}

impl<R: SignRepository + ?Sized> SignRepository for &R {
    fn search(&self, reading: &str, sub_index: u32) -> Option<Sign> {
        (**self).search(reading, sub_index)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySignRepository {
    signs: Vec<Sign>,
}

impl MemorySignRepository {
    pub fn new(signs: Vec<Sign>) -> Self {
        Self { signs }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json).map(Self::new)
    }

    pub fn signs(&self) -> &[Sign] {
        &self.signs
    }
}

impl SignRepository for MemorySignRepository {
    fn search(&self, reading: &str, sub_index: u32) -> Option<Sign> {
        self.signs
            .iter()
            .find(|sign| sign.has_reading(reading, sub_index))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let repository = MemorySignRepository::from_json(
            r#"[{"_id": "KUR", "lists": [], "values": [{"value": "kur", "subIndex": 1}, {"value": "mat", "subIndex": 3}]}]"#,
        )
        .unwrap();

        assert_eq!(
            repository.search("mat", 3).map(|sign| sign.name),
            Some("KUR".to_string())
        );
        assert_eq!(repository.search("mat", 1), None);
        assert_eq!(repository.search("ku", 1), None);
    }

    #[test]
    fn test_value_without_sub_index_is_not_found() {
        let repository = MemorySignRepository::new(vec![Sign::new(
            "KUR",
            vec![SignValue::new("kur", None)],
        )]);

        assert_eq!(repository.search("kur", 1), None);
    }
}
