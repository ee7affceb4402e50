use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of money movement on a record.
///
/// Serialized in lowercase, which is both the wire value and what the
/// table column shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    #[default]
    Receiving,
    Sending,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Receiving => "receiving",
            RecordType::Sending => "sending",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One accounting-info record, shaped exactly as the backend stores and
/// returns it. Field names on the wire are camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(rename = "accountNumber")]
    pub account_number: String,
    #[serde(rename = "accountName")]
    pub account_name: String,
    pub iban: String,
    pub address: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> AccountRecord {
        AccountRecord {
            account_number: "123456".to_string(),
            account_name: "Acme Corp".to_string(),
            iban: "DE89370400440532013000".to_string(),
            address: "1 Main St".to_string(),
            amount: 100.5,
            record_type: RecordType::Sending,
        }
    }

    #[test]
    fn record_serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["accountNumber"], "123456");
        assert_eq!(json["accountName"], "Acme Corp");
        assert_eq!(json["iban"], "DE89370400440532013000");
        assert_eq!(json["amount"], 100.5);
        assert_eq!(json["type"], "sending");
    }

    #[test]
    fn record_parses_a_backend_payload() {
        let payload = r#"[{
            "accountNumber": "123456",
            "accountName": "Acme Corp",
            "iban": "DE89370400440532013000",
            "address": "1 Main St",
            "amount": 100.5,
            "type": "receiving"
        }]"#;

        let records: Vec<AccountRecord> = serde_json::from_str(payload).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].account_name, "Acme Corp");
        assert_eq!(records[0].record_type, RecordType::Receiving);
    }

    #[test]
    fn record_type_defaults_to_receiving() {
        assert_eq!(RecordType::default(), RecordType::Receiving);
        assert_eq!(RecordType::Sending.to_string(), "sending");
    }
}
