//! Dashboard orchestration: the state a license-tracking screen holds between
//! renders (record collection, search term, page) and the actions it offers.
//!
//! All filtering and classification is delegated to `licensedesk-licenses`;
//! this layer only owns state and talks to the store and identity seams.

use thiserror::Error;

use licensedesk_auth::{AuthError, Identity, Session};
use licensedesk_core::{Clock, DomainError, Entity, RecordId};
use licensedesk_licenses::{QueryResult, Record, RecordForm, SearchQuery, query, total_pages};

use crate::store::{RecordStore, StoreError};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DashboardError {
    #[error("no active session")]
    Unauthenticated,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Single-writer view state over a [`RecordStore`].
///
/// Only constructible through [`Dashboard::open`], which requires an active
/// session.
#[derive(Debug)]
pub struct Dashboard<S, I, C> {
    store: S,
    identity: I,
    clock: C,
    session: Session,
    records: Vec<Record>,
    search: String,
    page: usize,
}

impl<S, I, C> Dashboard<S, I, C>
where
    S: RecordStore,
    I: Identity,
    C: Clock,
{
    /// Check the session, then load the collection.
    pub fn open(store: S, identity: I, clock: C) -> DashboardResult<Self> {
        let Some(session) = identity.current_session()? else {
            tracing::info!("dashboard requested without a session");
            return Err(DashboardError::Unauthenticated);
        };

        let mut dashboard = Self {
            store,
            identity,
            clock,
            session,
            records: Vec::new(),
            search: String::new(),
            page: 1,
        };
        dashboard.refresh()?;

        tracing::info!(
            user_id = %dashboard.session.user_id,
            records = dashboard.records.len(),
            "dashboard opened"
        );
        Ok(dashboard)
    }

    /// Reload the collection from the store.
    pub fn refresh(&mut self) -> DashboardResult<()> {
        self.records = self.store.list().inspect_err(|e| {
            tracing::error!(error = %e, "failed to load records");
        })?;
        Ok(())
    }

    pub fn user_email(&self) -> &str {
        &self.session.email
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Change the search term. A different term starts again from page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page = 1;
        }
    }

    /// Pages available for the current term.
    pub fn total_pages(&self) -> usize {
        let search = SearchQuery::new(&self.search, self.page);
        total_pages(self.records.iter().filter(|r| r.matches(&search)).count())
    }

    /// Advance one page; stays put on the last page.
    pub fn next_page(&mut self) -> usize {
        if self.page < self.total_pages() {
            self.page += 1;
        }
        self.page
    }

    /// Go back one page; stays put on the first page.
    pub fn prev_page(&mut self) -> usize {
        if self.page > 1 {
            self.page -= 1;
        }
        self.page
    }

    /// Current page, counts and totals as of `clock.today()`.
    pub fn view(&self) -> QueryResult<'_> {
        query(&self.records, &self.search, self.page, self.clock.today())
    }

    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| *r.id() == id)
    }

    pub fn create(&mut self, form: &RecordForm) -> DashboardResult<Record> {
        let created = self.store.create(form.to_draft()).inspect_err(|e| {
            tracing::error!(error = %e, "failed to create record");
        })?;
        tracing::info!(record_id = %created.id, user_id = %self.session.user_id, "record created");

        self.refresh()?;
        Ok(created)
    }

    pub fn update(&mut self, id: RecordId, form: &RecordForm) -> DashboardResult<Record> {
        let updated = self.store.update(id, form.to_draft()).inspect_err(|e| {
            tracing::error!(record_id = %id, error = %e, "failed to update record");
        })?;
        tracing::info!(record_id = %id, user_id = %self.session.user_id, "record updated");

        self.refresh()?;
        Ok(updated)
    }

    /// Delete a confirmed record. Leaves the page untouched even if it is now
    /// past the end; [`view`](Self::view) then shows an empty page.
    pub fn delete(&mut self, id: RecordId) -> DashboardResult<()> {
        self.store.delete(id).inspect_err(|e| {
            tracing::error!(record_id = %id, error = %e, "failed to delete record");
        })?;
        tracing::info!(record_id = %id, user_id = %self.session.user_id, "record deleted");

        self.refresh()
    }

    /// End the session. The dashboard is consumed; the store and identity are
    /// handed back.
    ///
    /// If the identity provider refuses, the dashboard comes back untouched
    /// alongside the error.
    pub fn sign_out(self) -> Result<(S, I), (DashboardError, Self)> {
        if let Err(e) = self.identity.sign_out() {
            tracing::error!(user_id = %self.session.user_id, error = %e, "failed to sign out");
            return Err((e.into(), self));
        }
        tracing::info!(user_id = %self.session.user_id, "dashboard closed");
        Ok((self.store, self.identity))
    }
}
