//! Mock stores for the application integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use pmd_importer_repository::{
    ConnectionSettings, LegacyConnector, LegacyRepository, LegacyRepositoryError,
    TargetRepository, TargetRepositoryError,
};
use pmd_importer_shared::types::{
    EntityKind, LegacyCategory, LegacyListing, LegacyUser, PlaceDetail, Post, Term, TermTaxonomy,
    User,
};

// Legacy store holding one category; every other table is empty
#[derive(Default)]
pub struct MockLegacyRepository {
    pub categories: Vec<LegacyCategory>,
    /// Makes the users fetch fail with an undecodable row
    pub broken_users: bool,
    pub dropped: Mutex<Vec<EntityKind>>,
}

impl MockLegacyRepository {
    pub fn with_category() -> Self {
        Self {
            categories: vec![LegacyCategory {
                id: 5,
                title: "Cafes".to_string(),
                friendly_url: "cafes".to_string(),
                parent_id: 0,
                count_total: 12,
            }],
            ..Default::default()
        }
    }

    pub fn dropped_tables(&self) -> Vec<EntityKind> {
        self.dropped.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LegacyRepository for MockLegacyRepository {
    async fn fetch_listings(&self) -> Result<Vec<LegacyListing>, LegacyRepositoryError> {
        Ok(Vec::new())
    }

    async fn fetch_categories(&self) -> Result<Vec<LegacyCategory>, LegacyRepositoryError> {
        Ok(self.categories.clone())
    }

    async fn fetch_users(&self) -> Result<Vec<LegacyUser>, LegacyRepositoryError> {
        if self.broken_users {
            return Err(LegacyRepositoryError::InvalidRow {
                table: "pmd_users".to_string(),
                reason: "id is not a number".to_string(),
            });
        }
        Ok(Vec::new())
    }

    async fn drop_table(&self, kind: EntityKind) -> Result<(), LegacyRepositoryError> {
        self.dropped.lock().unwrap().push(kind);
        Ok(())
    }
}

// WordPress store that accepts every write
#[derive(Default)]
pub struct MockTargetRepository {
    pub terms: Mutex<Vec<Term>>,
}

#[async_trait::async_trait]
impl TargetRepository for MockTargetRepository {
    async fn post_exists(&self, _id: u64) -> Result<bool, TargetRepositoryError> {
        Ok(false)
    }

    async fn term_exists(&self, term_id: u64) -> Result<bool, TargetRepositoryError> {
        Ok(self
            .terms
            .lock()
            .unwrap()
            .iter()
            .any(|term| term.term_id == term_id))
    }

    async fn user_email_exists(&self, _email: &str) -> Result<bool, TargetRepositoryError> {
        Ok(false)
    }

    async fn insert_listing(
        &self,
        _post: &Post,
        _detail: &PlaceDetail,
    ) -> Result<(), TargetRepositoryError> {
        Ok(())
    }

    async fn insert_category(
        &self,
        term: &Term,
        _taxonomy: &TermTaxonomy,
    ) -> Result<(), TargetRepositoryError> {
        self.terms.lock().unwrap().push(term.clone());
        Ok(())
    }

    async fn insert_user(&self, _user: &User) -> Result<(), TargetRepositoryError> {
        Ok(())
    }
}

// Connector handing out the given legacy store
pub struct MockConnector {
    pub legacy: Arc<MockLegacyRepository>,
}

#[async_trait::async_trait]
impl LegacyConnector for MockConnector {
    async fn connect(
        &self,
        _settings: &ConnectionSettings,
    ) -> Result<Arc<dyn LegacyRepository>, LegacyRepositoryError> {
        Ok(self.legacy.clone())
    }
}
