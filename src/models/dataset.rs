use crate::models::records::{IssuanceRecord, MetricRecord, RetirementRecord, TransactionRecord};
use crate::models::serde_utils::section;
use serde::{Deserialize, Serialize};

/// The whole dashboard document. Every section defaults to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "Overview", default, deserialize_with = "section")]
    pub overview: Vec<MetricRecord>,
    #[serde(rename = "Credits Summary", default, deserialize_with = "section")]
    pub credits_summary: Vec<MetricRecord>,
    #[serde(rename = "Issuances Over Time", default, deserialize_with = "section")]
    pub issuances: Vec<IssuanceRecord>,
    #[serde(rename = "Retirements Over Time", default, deserialize_with = "section")]
    pub retirements: Vec<RetirementRecord>,
    #[serde(rename = "Transactions", default, deserialize_with = "section")]
    pub transactions: Vec<TransactionRecord>,
}

impl Dataset {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;

    #[test]
    fn missing_and_null_sections_are_empty() {
        let dataset = Dataset::from_slice(br#"{"Overview": null, "Unrelated": [1, 2]}"#).unwrap();
        assert_eq!(dataset, Dataset::default());
    }

    #[test]
    fn reads_sections_by_their_display_names() {
        let dataset = Dataset::from_slice(
            br#"{
                "Credits Summary": [{"Metric": "Credits Issued", "Value": "1,000"}],
                "Issuances Over Time": [{"Year": 2021, "Issued Credits": 100}],
                "Transactions": [{"Date": "2021-04-01", "Quantity": 5, "Extra": true}]
            }"#,
        )
        .unwrap();

        assert_eq!(dataset.credits_summary[0].metric_name(), Some("Credits Issued"));
        assert_eq!(dataset.issuances[0].year, Some(FieldValue::from(2021)));
        assert_eq!(dataset.transactions[0].vintage, None);
        assert!(dataset.retirements.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(Dataset::from_slice(b"{\"Overview\": [").is_err());
    }
}
