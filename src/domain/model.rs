use serde::{Deserialize, Serialize};
use std::str::FromStr;

// Conventional response shape shared by every catalog endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl ResponseEnvelope {
    /// Envelope for a call that never produced a usable response.
    /// `data` and `meta` stay empty; only the failure flag and message are set.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            message: Some(message.into()),
            data: None,
            meta: None,
        }
    }
}

/// Parameters for the product listing endpoint.
///
/// Every field is optional and serialized to the camelCase query-string name
/// the backend expects. `None` fields are omitted from the query string
/// entirely rather than sent with a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_sub_category: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!(
                "unknown sort order: {} (expected asc or desc)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_tolerates_missing_fields() {
        let envelope: ResponseEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.success, None);
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data, None);
        assert_eq!(envelope.meta, None);
    }

    #[test]
    fn envelope_keeps_fields_it_gets() {
        let envelope: ResponseEnvelope =
            serde_json::from_str(r#"{"success":true,"data":[1,2],"meta":{"total":2}}"#).unwrap();
        assert_eq!(envelope.success, Some(true));
        assert_eq!(envelope.message, None);
        assert_eq!(envelope.data, Some(serde_json::json!([1, 2])));
        assert_eq!(envelope.meta, Some(serde_json::json!({"total": 2})));
    }

    #[test]
    fn failure_envelope_leaves_data_and_meta_empty() {
        let envelope = ResponseEnvelope::failure("boom");
        assert_eq!(envelope.success, Some(false));
        assert_eq!(envelope.message.as_deref(), Some("boom"));
        assert!(envelope.data.is_none());
        assert!(envelope.meta.is_none());
    }

    #[test]
    fn product_query_serializes_camel_case_and_omits_none() {
        let query = ProductQuery {
            page: Some(2),
            items_per_page: Some(10),
            sort_by: Some("name".to_string()),
            order_by: Some(SortOrder::Asc),
            selected_category: None,
            selected_sub_category: None,
        };
        let value = serde_json::to_value(&query).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(object["page"], 2);
        assert_eq!(object["itemsPerPage"], 10);
        assert_eq!(object["sortBy"], "name");
        assert_eq!(object["orderBy"], "asc");
        assert!(!object.contains_key("selectedCategory"));
        assert!(!object.contains_key("selectedSubCategory"));
    }

    #[test]
    fn sort_order_parses_and_rejects() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("desc".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("ascending".parse::<SortOrder>().is_err());
    }
}
