//! Staff (personnel) models and filter parameters.

use linarqa_core::Searchable;
use linarqa_core::serde::{deserialize_null_default, deserialize_optional_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

use crate::ids::StaffId;

/// Role of a staff member in the kindergarten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffType {
    Assistant,
    Educatrice,
    AideEducatrice,
    #[serde(other)]
    Other,
}

impl StaffType {
    /// Backend enum name, used as breakdown key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Assistant => "ASSISTANT",
            Self::Educatrice => "EDUCATRICE",
            Self::AideEducatrice => "AIDE_EDUCATRICE",
            Self::Other => "OTHER",
        }
    }

    /// French display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Assistant => "Assistant",
            Self::Educatrice => "Éducatrice",
            Self::AideEducatrice => "Aide-éducatrice",
            Self::Other => "Autre",
        }
    }
}

fn default_active() -> bool {
    true
}

/// A member of the personnel, paid a monthly salary while active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: StaffId,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name_arabic: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name_arabic: Option<String>,
    /// National identity card number (CIN)
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub identity_number: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub salary: Decimal,
    #[serde(rename = "type")]
    pub staff_type: StaffType,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl Searchable for StaffMember {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        let mut fields = vec![
            Cow::Borrowed(self.first_name.as_str()),
            Cow::Borrowed(self.last_name.as_str()),
        ];
        fields.extend(self.first_name_arabic.as_deref().map(Cow::Borrowed));
        fields.extend(self.last_name_arabic.as_deref().map(Cow::Borrowed));
        fields.push(Cow::Borrowed(self.identity_number.as_str()));
        fields.push(Cow::Borrowed(self.phone_number.as_str()));
        fields
    }
}

/// Criteria for filtering staff. All criteria combine with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffFilterParams {
    /// Matched against names (both scripts), identity number and phone
    #[validate(length(max = 100))]
    pub search: Option<String>,
    #[serde(rename = "type")]
    pub staff_type: Option<StaffType>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_staff_deserialize() {
        let member: StaffMember = serde_json::from_str(
            r#"{
                "id": "st1",
                "firstName": "Fatima",
                "lastName": "Zahra",
                "identityNumber": "AB12345",
                "phoneNumber": "0612345678",
                "salary": 4500.00,
                "type": "AIDE_EDUCATRICE"
            }"#,
        )
        .unwrap();
        assert_eq!(member.staff_type, StaffType::AideEducatrice);
        assert_eq!(member.salary, dec!(4500));
        assert!(member.active);
    }

    #[test]
    fn test_inactive_and_unknown_type() {
        let member: StaffMember = serde_json::from_str(
            r#"{"id":"st2","firstName":"Omar","lastName":"Tazi","type":"DRIVER","active":false}"#,
        )
        .unwrap();
        assert_eq!(member.staff_type, StaffType::Other);
        assert!(!member.active);
        assert_eq!(member.salary, Decimal::ZERO);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(StaffType::Educatrice.as_str(), "EDUCATRICE");
        assert_eq!(StaffType::Educatrice.display_name(), "Éducatrice");
    }

    #[test]
    fn test_filter_params_type_key() {
        let params: StaffFilterParams =
            serde_json::from_str(r#"{"type":"ASSISTANT","active":true}"#).unwrap();
        assert_eq!(params.staff_type, Some(StaffType::Assistant));
        assert_eq!(params.active, Some(true));
    }
}
