use serde::{Deserialize, Serialize};

use crate::error::{DeckError, DeckResult};

/// One labeled value of a chart dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub label: String,
    pub value: f64,
    pub category: String,
}

impl ChartRecord {
    pub fn new(
        label: impl Into<String>,
        value: f64,
        category: impl Into<String>,
    ) -> DeckResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(DeckError::InvalidData(
                "record label must not be empty".to_owned(),
            ));
        }
        if !value.is_finite() || value < 0.0 {
            return Err(DeckError::InvalidData(format!(
                "record `{label}` value must be finite and >= 0"
            )));
        }
        Ok(Self {
            label,
            value,
            category: category.into(),
        })
    }
}

/// Immutable, non-empty sequence of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ChartRecord>", into = "Vec<ChartRecord>")]
pub struct ChartDataset {
    records: Vec<ChartRecord>,
}

impl ChartDataset {
    pub fn new(records: Vec<ChartRecord>) -> DeckResult<Self> {
        if records.is_empty() {
            return Err(DeckError::InvalidData(
                "dataset must contain at least one record".to_owned(),
            ));
        }
        for record in &records {
            if record.label.is_empty() || !record.value.is_finite() || record.value < 0.0 {
                return Err(DeckError::InvalidData(format!(
                    "dataset record `{}` is malformed",
                    record.label
                )));
            }
        }
        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[ChartRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ChartRecord> {
        self.records.get(index)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.label.as_str()).collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.value).collect()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.records.iter().map(|r| r.value).sum()
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.records.iter().map(|r| r.value).fold(0.0, f64::max)
    }
}

impl TryFrom<Vec<ChartRecord>> for ChartDataset {
    type Error = DeckError;

    fn try_from(records: Vec<ChartRecord>) -> DeckResult<Self> {
        Self::new(records)
    }
}

impl From<ChartDataset> for Vec<ChartRecord> {
    fn from(dataset: ChartDataset) -> Self {
        dataset.records
    }
}

fn dataset_from_rows(rows: &[(&str, f64, &str)]) -> DeckResult<ChartDataset> {
    let records = rows
        .iter()
        .map(|&(label, value, category)| ChartRecord::new(label, value, category))
        .collect::<DeckResult<Vec<_>>>()?;
    ChartDataset::new(records)
}

/// Daily newspaper circulation in millions, with editorial stance.
pub fn newspaper_circulation() -> DeckResult<ChartDataset> {
    dataset_from_rows(&[
        ("Yomiuri", 5.85, "Conservative"),
        ("Asahi", 3.39, "Center-left"),
        ("Mainichi", 3.3, "Centrist"),
        ("Nikkei", 2.77, "Business"),
        ("Sankei", 1.6, "Conservative"),
    ])
}

/// Social media platform users in millions, with platform type.
pub fn social_media_users() -> DeckResult<ChartDataset> {
    dataset_from_rows(&[
        ("LINE", 97.0, "Messaging"),
        ("YouTube", 78.7, "Video"),
        ("X (Twitter)", 67.0, "Microblogging"),
        ("Instagram", 57.5, "Photo/Video"),
        ("TikTok", 26.9, "Short Video"),
        ("Facebook", 26.0, "Social Network"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_datasets_are_well_formed() {
        let newspapers = newspaper_circulation().expect("newspapers");
        assert_eq!(newspapers.len(), 5);
        assert_eq!(newspapers.labels()[0], "Yomiuri");

        let platforms = social_media_users().expect("platforms");
        assert_eq!(platforms.len(), 6);
        assert_eq!(platforms.max_value(), 97.0);
    }

    #[test]
    fn negative_and_non_finite_values_are_rejected() {
        assert!(ChartRecord::new("a", -1.0, "x").is_err());
        assert!(ChartRecord::new("a", f64::NAN, "x").is_err());
        assert!(ChartRecord::new("", 1.0, "x").is_err());
    }

    #[test]
    fn empty_dataset_is_rejected() {
        assert!(ChartDataset::new(Vec::new()).is_err());
    }

    #[test]
    fn deserializing_rejects_malformed_records() {
        let json = r#"[{"label":"a","value":-2.0,"category":"x"}]"#;
        assert!(serde_json::from_str::<ChartDataset>(json).is_err());
    }
}
