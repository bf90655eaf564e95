use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// What staff should do about an order's shipment.
///
/// Exactly one label applies to an order at a time. The string forms are the
/// ones the dashboard filters and badges on, and are used verbatim for
/// `Display`, `FromStr` and serde.
///
/// Variants are declared in rule precedence order, which is also their `Ord`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum InstructionLabel {
    #[serde(rename = "DELIVERED")]
    #[strum(serialize = "DELIVERED")]
    Delivered,
    #[serde(rename = "SHIPPED")]
    #[strum(serialize = "SHIPPED")]
    Shipped,
    #[serde(rename = "TO BE SHIPPED BUT NO STICKER")]
    #[strum(serialize = "TO BE SHIPPED BUT NO STICKER")]
    ToBeShippedButNoSticker,
    #[serde(rename = "TO SHIP")]
    #[strum(serialize = "TO SHIP")]
    ToShip,
    #[serde(rename = "DO NOT SHIP")]
    #[strum(serialize = "DO NOT SHIP")]
    DoNotShip,
    #[serde(rename = "NO ACTION REQUIRED")]
    #[strum(serialize = "NO ACTION REQUIRED")]
    NoActionRequired,
    /// Fallback when no rule matches.
    #[serde(rename = "ACTION REQUIRED")]
    #[strum(serialize = "ACTION REQUIRED")]
    ActionRequired,
}

/// Short status shown next to an order in the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DisplayStatus {
    /// No tracking link yet.
    Empty,
    /// Tracking link present, carrier has not reported a status.
    Pending,
    /// The carrier's status, uppercased.
    Carrier(String),
}

impl DisplayStatus {
    pub fn as_str(&self) -> &str {
        match self {
            DisplayStatus::Empty => "EMPTY",
            DisplayStatus::Pending => "PENDING",
            DisplayStatus::Carrier(status) => status,
        }
    }
}

impl fmt::Display for DisplayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DisplayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn labels_render_their_dashboard_strings() {
        let rendered: Vec<String> = InstructionLabel::iter().map(|l| l.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "DELIVERED",
                "SHIPPED",
                "TO BE SHIPPED BUT NO STICKER",
                "TO SHIP",
                "DO NOT SHIP",
                "NO ACTION REQUIRED",
                "ACTION REQUIRED",
            ]
        );
    }

    #[test]
    fn labels_parse_back_exactly() {
        for label in InstructionLabel::iter() {
            assert_eq!(InstructionLabel::from_str(label.as_ref()).unwrap(), label);
        }
        assert!(InstructionLabel::from_str("to ship").is_err());
        assert!(InstructionLabel::from_str("TO_SHIP").is_err());
    }

    #[test]
    fn serde_uses_the_same_strings() {
        let json = serde_json::to_string(&InstructionLabel::ToBeShippedButNoSticker).unwrap();
        assert_eq!(json, "\"TO BE SHIPPED BUT NO STICKER\"");

        let label: InstructionLabel = serde_json::from_str("\"DO NOT SHIP\"").unwrap();
        assert_eq!(label, InstructionLabel::DoNotShip);
    }

    #[test]
    fn display_status_strings() {
        assert_eq!(DisplayStatus::Empty.to_string(), "EMPTY");
        assert_eq!(DisplayStatus::Pending.to_string(), "PENDING");
        assert_eq!(DisplayStatus::Carrier("IN TRANSIT".into()).to_string(), "IN TRANSIT");
        assert_eq!(
            serde_json::to_string(&DisplayStatus::Pending).unwrap(),
            "\"PENDING\""
        );
    }
}
