//! Editable form model for records.
//!
//! A front end holds raw text input for every field; [`RecordForm::to_draft`]
//! normalizes it into a [`RecordDraft`] ready for the store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use licensedesk_core::{DomainError, DomainResult};

use crate::record::{Record, RecordDraft};

/// Input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    TextArea,
}

/// One editable field: storage key, display label, input kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

const fn field(key: &'static str, label: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec { key, label, kind }
}

/// Editable fields, in display order.
pub static FIELDS: [FieldSpec; 17] = [
    field("client", "Client", FieldKind::Text),
    field("vendor", "Vendor", FieldKind::Text),
    field("product_name", "Software", FieldKind::Text),
    field("modality", "Modality", FieldKind::Text),
    field("license_type", "License type", FieldKind::Text),
    field("license_brand", "License brand", FieldKind::Text),
    field("license_quantity", "License quantity", FieldKind::Number),
    field("licensed_version", "Licensed version", FieldKind::Text),
    field("installed_version", "Installed version", FieldKind::Text),
    field("license_owner", "License owner", FieldKind::Text),
    field("license_expiry", "License expiry", FieldKind::Date),
    field("contract_expiry", "Contract expiry", FieldKind::Date),
    field("contact_person", "Contact person", FieldKind::Text),
    field("phone", "Phone", FieldKind::Text),
    field("email", "Email", FieldKind::Text),
    field("address", "Address", FieldKind::Text),
    field("notes", "Notes", FieldKind::TextArea),
];

fn field_spec(key: &str) -> DomainResult<&'static FieldSpec> {
    FIELDS
        .iter()
        .find(|f| f.key == key)
        .ok_or_else(|| DomainError::validation(format!("unknown field: {key}")))
}

/// Raw form state: one string per field in [`FIELDS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordForm {
    values: BTreeMap<String, String>,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self::empty()
    }
}

impl RecordForm {
    /// Every field present and blank.
    pub fn empty() -> Self {
        Self {
            values: FIELDS
                .iter()
                .map(|f| (f.key.to_string(), String::new()))
                .collect(),
        }
    }

    /// Prefill from an existing record. Dates keep only their `YYYY-MM-DD` prefix.
    pub fn from_record(record: &Record) -> Self {
        let draft = record.to_draft();
        let mut form = Self::empty();
        for spec in &FIELDS {
            let value = draft_value(&draft, spec.key).unwrap_or_default();
            let value = match spec.kind {
                FieldKind::Date => value.chars().take(10).collect(),
                _ => value,
            };
            form.values.insert(spec.key.to_string(), value);
        }
        form
    }

    pub fn get(&self, key: &str) -> DomainResult<&str> {
        field_spec(key)?;
        Ok(self.values.get(key).map(String::as_str).unwrap_or(""))
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) -> DomainResult<()> {
        let spec = field_spec(key)?;
        self.values.insert(spec.key.to_string(), value.into());
        Ok(())
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, key: &str, value: impl Into<String>) -> DomainResult<Self> {
        self.set(key, value)?;
        Ok(self)
    }

    /// Normalize into a store payload.
    ///
    /// Blank text becomes `None`; quantities that are blank or not integers
    /// become `None`; dates are passed through trimmed (validity is decided at
    /// classification time).
    pub fn to_draft(&self) -> RecordDraft {
        let text = |key: &str| -> Option<String> {
            let raw = self.values.get(key)?;
            if raw.is_empty() { None } else { Some(raw.clone()) }
        };
        let date = |key: &str| -> Option<String> {
            let raw = self.values.get(key)?.trim();
            if raw.is_empty() { None } else { Some(raw.to_string()) }
        };
        let number = |key: &str| -> Option<i64> { self.values.get(key)?.trim().parse().ok() };

        RecordDraft {
            client: text("client"),
            vendor: text("vendor"),
            product_name: text("product_name"),
            modality: text("modality"),
            license_type: text("license_type"),
            license_brand: text("license_brand"),
            license_quantity: number("license_quantity"),
            licensed_version: text("licensed_version"),
            installed_version: text("installed_version"),
            license_owner: text("license_owner"),
            license_expiry: date("license_expiry"),
            contract_expiry: date("contract_expiry"),
            contact_person: text("contact_person"),
            phone: text("phone"),
            email: text("email"),
            address: text("address"),
            notes: text("notes"),
        }
    }
}

fn draft_value(draft: &RecordDraft, key: &str) -> Option<String> {
    match key {
        "client" => draft.client.clone(),
        "vendor" => draft.vendor.clone(),
        "product_name" => draft.product_name.clone(),
        "modality" => draft.modality.clone(),
        "license_type" => draft.license_type.clone(),
        "license_brand" => draft.license_brand.clone(),
        "license_quantity" => draft.license_quantity.map(|q| q.to_string()),
        "licensed_version" => draft.licensed_version.clone(),
        "installed_version" => draft.installed_version.clone(),
        "license_owner" => draft.license_owner.clone(),
        "license_expiry" => draft.license_expiry.clone(),
        "contract_expiry" => draft.contract_expiry.clone(),
        "contact_person" => draft.contact_person.clone(),
        "phone" => draft.phone.clone(),
        "email" => draft.email.clone(),
        "address" => draft.address.clone(),
        "notes" => draft.notes.clone(),
        _ => None,
    }
}
