//! Mock stores shared by the pipeline integration tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use pmd_importer_repository::{
    ConnectionSettings, LegacyConnector, LegacyRepository, LegacyRepositoryError,
    TargetRepository, TargetRepositoryError,
};
use pmd_importer_shared::types::{
    EntityKind, LegacyCategory, LegacyListing, LegacyUser, PlaceDetail, Post, Term, TermTaxonomy,
    User,
};

// Mock legacy store serving fixed tables
#[derive(Default)]
pub struct MockLegacyRepository {
    pub listings: Vec<LegacyListing>,
    pub categories: Vec<LegacyCategory>,
    pub users: Vec<LegacyUser>,
    pub fetched: Mutex<Vec<EntityKind>>,
    pub dropped: Mutex<Vec<EntityKind>>,
}

impl MockLegacyRepository {
    pub fn fetch_order(&self) -> Vec<EntityKind> {
        self.fetched.lock().unwrap().clone()
    }

    pub fn dropped_tables(&self) -> Vec<EntityKind> {
        self.dropped.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LegacyRepository for MockLegacyRepository {
    async fn fetch_listings(&self) -> Result<Vec<LegacyListing>, LegacyRepositoryError> {
        self.fetched.lock().unwrap().push(EntityKind::Listing);
        Ok(self.listings.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<LegacyCategory>, LegacyRepositoryError> {
        self.fetched.lock().unwrap().push(EntityKind::Category);
        Ok(self.categories.clone())
    }

    async fn fetch_users(&self) -> Result<Vec<LegacyUser>, LegacyRepositoryError> {
        self.fetched.lock().unwrap().push(EntityKind::User);
        Ok(self.users.clone())
    }

    async fn drop_table(&self, kind: EntityKind) -> Result<(), LegacyRepositoryError> {
        self.dropped.lock().unwrap().push(kind);
        Ok(())
    }
}

// Mock WordPress store keeping ids and emails in memory
#[derive(Default)]
pub struct MockTargetRepository {
    pub posts: Mutex<Vec<(Post, PlaceDetail)>>,
    pub terms: Mutex<Vec<(Term, TermTaxonomy)>>,
    pub users: Mutex<Vec<User>>,
    pub existing_post_ids: Mutex<HashSet<u64>>,
    pub existing_term_ids: Mutex<HashSet<u64>>,
    pub existing_emails: Mutex<HashSet<String>>,
    /// Post id whose insert fails
    pub fail_on_post: Option<u64>,
}

impl MockTargetRepository {
    pub fn with_terms(ids: &[u64]) -> Self {
        let target = Self::default();
        target.existing_term_ids.lock().unwrap().extend(ids);
        target
    }

    pub fn with_emails(emails: &[&str]) -> Self {
        let target = Self::default();
        target
            .existing_emails
            .lock()
            .unwrap()
            .extend(emails.iter().map(|email| email.to_string()));
        target
    }

    pub fn inserted_posts(&self) -> Vec<(Post, PlaceDetail)> {
        self.posts.lock().unwrap().clone()
    }

    pub fn inserted_terms(&self) -> Vec<(Term, TermTaxonomy)> {
        self.terms.lock().unwrap().clone()
    }

    pub fn inserted_users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.posts.lock().unwrap().len()
            + self.terms.lock().unwrap().len()
            + self.users.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl TargetRepository for MockTargetRepository {
    async fn post_exists(&self, id: u64) -> Result<bool, TargetRepositoryError> {
        Ok(self.existing_post_ids.lock().unwrap().contains(&id))
    }

    async fn term_exists(&self, term_id: u64) -> Result<bool, TargetRepositoryError> {
        Ok(self.existing_term_ids.lock().unwrap().contains(&term_id))
    }

    async fn user_email_exists(&self, email: &str) -> Result<bool, TargetRepositoryError> {
        Ok(self.existing_emails.lock().unwrap().contains(email))
    }

    async fn insert_listing(
        &self,
        post: &Post,
        detail: &PlaceDetail,
    ) -> Result<(), TargetRepositoryError> {
        if self.fail_on_post == Some(post.id) {
            return Err(TargetRepositoryError::DatabaseError(sqlx::Error::Protocol(
                "duplicate entry".to_string(),
            )));
        }
        self.existing_post_ids.lock().unwrap().insert(post.id);
        self.posts.lock().unwrap().push((post.clone(), detail.clone()));
        Ok(())
    }

    async fn insert_category(
        &self,
        term: &Term,
        taxonomy: &TermTaxonomy,
    ) -> Result<(), TargetRepositoryError> {
        self.existing_term_ids.lock().unwrap().insert(term.term_id);
        self.terms.lock().unwrap().push((term.clone(), taxonomy.clone()));
        Ok(())
    }

    async fn insert_user(&self, user: &User) -> Result<(), TargetRepositoryError> {
        self.existing_emails.lock().unwrap().insert(user.email.clone());
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
}

// Mock connector handing out one legacy store, or refusing every connection
pub struct MockConnector {
    pub legacy: Arc<MockLegacyRepository>,
    pub reachable: bool,
    pub attempts: Mutex<Vec<ConnectionSettings>>,
}

impl MockConnector {
    pub fn new(legacy: Arc<MockLegacyRepository>) -> Self {
        Self {
            legacy,
            reachable: true,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            legacy: Arc::new(MockLegacyRepository::default()),
            reachable: false,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempt_count(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl LegacyConnector for MockConnector {
    async fn connect(
        &self,
        settings: &ConnectionSettings,
    ) -> Result<Arc<dyn LegacyRepository>, LegacyRepositoryError> {
        self.attempts.lock().unwrap().push(settings.clone());
        if !self.reachable {
            return Err(LegacyRepositoryError::DatabaseError(sqlx::Error::Protocol(
                "access denied".to_string(),
            )));
        }
        Ok(self.legacy.clone())
    }
}

pub fn make_listing(id: u64, slug: &str) -> LegacyListing {
    LegacyListing {
        id,
        user_id: 1,
        title: slug.replace('-', " "),
        friendly_url: slug.to_string(),
        description: "Description".to_string(),
        description_short: "Great place".to_string(),
        primary_category_id: 5,
        status: "active".to_string(),
        twitter_id: "handle".to_string(),
        ..Default::default()
    }
}

pub fn make_category(id: u64, slug: &str) -> LegacyCategory {
    LegacyCategory {
        id,
        title: slug.to_string(),
        friendly_url: slug.to_string(),
        parent_id: 0,
        count_total: 1,
    }
}

pub fn make_user(id: u64, email: &str) -> LegacyUser {
    LegacyUser {
        id,
        login: format!("user{id}"),
        pass: "5f4dcc3b5aa765d61d8327deb882cf99".to_string(),
        user_email: email.to_string(),
        user_first_name: "Joe".to_string(),
        user_last_name: "Smith".to_string(),
        ..Default::default()
    }
}
