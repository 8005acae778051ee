//! End-to-end flow through the public API: sign in, open the dashboard over a
//! seeded store, search/paginate, edit, sign out.

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use serde_json::json;

use licensedesk_auth::{AuthError, Credentials, Identity, InMemoryIdentity};
use licensedesk_infra::{Dashboard, DashboardError, DeskConfig, InMemoryRecordStore};
use licensedesk_licenses::{ExpiryLevel, LevelCounts, RecordForm};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn day(offset: i64) -> String {
    (today() + Duration::days(offset)).format("%Y-%m-%d").to_string()
}

/// 3 due soon, 2 expired, 1 undated, 6 fine.
fn seed_json() -> String {
    let mut rows = Vec::new();
    let mut id = 0;
    let mut push = |client: &str, license: Option<String>, contract: Option<String>| {
        id += 1;
        rows.push(json!({
            "id": id,
            "client": client,
            "vendor": "North",
            "license_quantity": 5,
            "license_expiry": license,
            "contract_expiry": contract,
        }));
    };
    for i in 0..6 {
        push(&format!("Steady {i}"), Some(day(100)), Some(day(100)));
    }
    push("Undated", None, None);
    for i in 0..2 {
        push(&format!("Lapsed {i}"), Some(day(-30)), Some(day(-1)));
    }
    for i in 0..3 {
        push(&format!("Acme Branch {i}"), Some(day(5)), None);
    }
    serde_json::Value::Array(rows).to_string()
}

fn identity() -> Arc<InMemoryIdentity> {
    Arc::new(
        InMemoryIdentity::new()
            .with_account("admin@example.com", "s3cret")
            .unwrap(),
    )
}

#[test]
fn full_dashboard_session() {
    licensedesk_observability::init();

    let store = Arc::new(InMemoryRecordStore::from_json(&seed_json()).unwrap());
    let identity = identity();
    let config = DeskConfig::from_lookup(|key| (key == "LICENSEDESK_TODAY").then(|| "2026-10-16".to_string()));

    // Not signed in yet.
    let err = Dashboard::open(store.clone(), identity.clone(), config.clock()).unwrap_err();
    assert_eq!(err, DashboardError::Unauthenticated);

    // Blank and wrong credentials are rejected.
    assert_eq!(Credentials::new(" ", "s3cret").unwrap_err(), AuthError::MissingCredentials);
    let wrong = Credentials::new("admin@example.com", "guess").unwrap();
    assert_eq!(identity.sign_in(&wrong).unwrap_err(), AuthError::InvalidCredentials);

    identity
        .sign_in(&Credentials::new("admin@example.com", "s3cret").unwrap())
        .unwrap();
    let mut dashboard = Dashboard::open(store.clone(), identity.clone(), config.clock()).unwrap();

    let view = dashboard.view();
    assert_eq!(view.rows.len(), 10);
    assert_eq!(view.total_pages, 2);
    assert_eq!(
        view.counts,
        LevelCounts {
            expired: 2,
            soon: 3,
            warn: 0,
            ok: 6,
            nofecha: 1,
        }
    );
    // Newest (highest id) first.
    assert_eq!(view.rows[0].record.client.as_deref(), Some("Acme Branch 2"));
    assert_eq!(view.rows[3].status.level, ExpiryLevel::Expired);
    assert_eq!(view.rows[3].status.days_remaining, Some(-30));

    // Search narrows the set and the counts together.
    dashboard.next_page();
    dashboard.set_search("ACME");
    assert_eq!(dashboard.page(), 1);
    let view = dashboard.view();
    assert_eq!(view.total_matching, 3);
    assert_eq!(view.counts.total(), 3);
    assert_eq!(view.counts.soon, 3);

    // Push one Acme branch out of the "soon" bracket.
    let branch = view.rows[0].record.clone();
    let form = RecordForm::from_record(&branch)
        .with("license_expiry", day(30))
        .unwrap();
    dashboard.update(branch.id, &form).unwrap();
    let view = dashboard.view();
    assert_eq!(view.counts.soon, 2);
    assert_eq!(view.counts.warn, 1);

    dashboard.set_search("zzz-no-match");
    let view = dashboard.view();
    assert!(view.is_empty());
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.counts, LevelCounts::default());

    let Ok((_store, identity)) = dashboard.sign_out() else {
        panic!("sign-out should succeed");
    };
    assert!(!identity.is_authenticated().unwrap());
}
