//! The tracked license record and its flattened text view for search.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use licensedesk_core::{Entity, RecordId};

use crate::query::SearchQuery;

/// One tracked client license row, as delivered by the record store.
///
/// Expiry dates are kept as the stored text: they are parsed when classified,
/// and a value that does not parse is treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub modality: Option<String>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub license_brand: Option<String>,
    #[serde(default)]
    pub license_quantity: Option<i64>,
    #[serde(default)]
    pub licensed_version: Option<String>,
    #[serde(default)]
    pub installed_version: Option<String>,
    #[serde(default)]
    pub license_owner: Option<String>,
    #[serde(default)]
    pub license_expiry: Option<String>,
    #[serde(default)]
    pub contract_expiry: Option<String>,
    #[serde(default)]
    pub contact_person: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Every attribute of a [`Record`] except its store-assigned id.
///
/// Submitted on create and on edit (which replaces the record wholesale).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDraft {
    pub client: Option<String>,
    pub vendor: Option<String>,
    pub product_name: Option<String>,
    pub modality: Option<String>,
    pub license_type: Option<String>,
    pub license_brand: Option<String>,
    pub license_quantity: Option<i64>,
    pub licensed_version: Option<String>,
    pub installed_version: Option<String>,
    pub license_owner: Option<String>,
    pub license_expiry: Option<String>,
    pub contract_expiry: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

impl Record {
    /// Materialize a draft under a store-assigned id.
    pub fn from_draft(id: RecordId, draft: RecordDraft) -> Self {
        Self {
            id,
            client: draft.client,
            vendor: draft.vendor,
            product_name: draft.product_name,
            modality: draft.modality,
            license_type: draft.license_type,
            license_brand: draft.license_brand,
            license_quantity: draft.license_quantity,
            licensed_version: draft.licensed_version,
            installed_version: draft.installed_version,
            license_owner: draft.license_owner,
            license_expiry: draft.license_expiry,
            contract_expiry: draft.contract_expiry,
            contact_person: draft.contact_person,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            notes: draft.notes,
        }
    }

    /// Empty record with only an id; convenient as a builder base.
    pub fn empty(id: RecordId) -> Self {
        Self::from_draft(id, RecordDraft::default())
    }

    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            client: self.client.clone(),
            vendor: self.vendor.clone(),
            product_name: self.product_name.clone(),
            modality: self.modality.clone(),
            license_type: self.license_type.clone(),
            license_brand: self.license_brand.clone(),
            license_quantity: self.license_quantity,
            licensed_version: self.licensed_version.clone(),
            installed_version: self.installed_version.clone(),
            license_owner: self.license_owner.clone(),
            license_expiry: self.license_expiry.clone(),
            contract_expiry: self.contract_expiry.clone(),
            contact_person: self.contact_person.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            notes: self.notes.clone(),
        }
    }

    /// Flattened text view of every attribute, id and quantity included.
    ///
    /// Absent values render as the empty string.
    pub fn attribute_texts(&self) -> impl Iterator<Item = Cow<'_, str>> {
        let text = [
            &self.client,
            &self.vendor,
            &self.product_name,
            &self.modality,
            &self.license_type,
            &self.license_brand,
            &self.licensed_version,
            &self.installed_version,
            &self.license_owner,
            &self.license_expiry,
            &self.contract_expiry,
            &self.contact_person,
            &self.phone,
            &self.email,
            &self.address,
            &self.notes,
        ]
        .into_iter()
        .map(|v| Cow::Borrowed(v.as_deref().unwrap_or("")));

        let numeric = [
            self.id.to_string(),
            self.license_quantity.map(|q| q.to_string()).unwrap_or_default(),
        ]
        .into_iter()
        .map(Cow::Owned);

        numeric.chain(text)
    }

    /// Unanchored, case-insensitive substring match across all attributes.
    ///
    /// The term comes from a [`SearchQuery`], so it is already trimmed and
    /// lower-cased. An empty term matches every record.
    pub fn matches(&self, search: &SearchQuery) -> bool {
        let term = search.term();
        if term.is_empty() {
            return true;
        }
        self.attribute_texts()
            .any(|value| value.to_lowercase().contains(term))
    }
}

impl Entity for Record {
    type Id = RecordId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> Record {
        Record {
            client: Some("Acme Corp".to_string()),
            vendor: Some("Jane Roe".to_string()),
            license_quantity: Some(250),
            email: Some("IT@acme.example".to_string()),
            ..Record::empty(RecordId::new(17))
        }
    }

    fn term(raw: &str) -> SearchQuery {
        SearchQuery::new(raw, 1)
    }

    #[test]
    fn matches_is_case_insensitive_substring() {
        let record = acme();
        assert!(record.matches(&term("acme")));
        assert!(record.matches(&term("ACME")));
        assert!(record.matches(&term("  Me Co ")));
        assert!(record.matches(&term("it@acme")));
        assert!(!record.matches(&term("globex")));
    }

    #[test]
    fn matches_id_and_quantity_as_text() {
        let record = acme();
        assert!(record.matches(&term("17")));
        assert!(record.matches(&term("25")));
        assert!(!record.matches(&term("999")));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(Record::empty(RecordId::new(1)).matches(&term("")));
        assert!(Record::empty(RecordId::new(1)).matches(&term("   ")));
    }

    #[test]
    fn absent_attributes_never_match_non_empty_terms() {
        let record = Record::empty(RecordId::new(5));
        assert!(!record.matches(&term("none")));
        assert!(!record.matches(&term("null")));
    }

    #[test]
    fn entity_id_is_the_store_id() {
        let record = acme();
        assert_eq!(Entity::id(&record), &RecordId::new(17));
    }

    #[test]
    fn draft_round_trip_keeps_attributes() {
        let record = acme();
        let rebuilt = Record::from_draft(record.id, record.to_draft());
        assert_eq!(record, rebuilt);
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let record: Record =
            serde_json::from_str(r#"{"id": 3, "client": "Globex", "license_quantity": 4}"#).unwrap();
        assert_eq!(record.id, RecordId::new(3));
        assert_eq!(record.client.as_deref(), Some("Globex"));
        assert_eq!(record.license_quantity, Some(4));
        assert!(record.license_expiry.is_none());
    }
}
