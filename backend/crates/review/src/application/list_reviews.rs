//! List Reviews Use Case
//!
//! Paginated listing of all reviews, and the caller's own reviews.

use std::sync::Arc;

use kernel::identity::Identity;

use crate::application::config::ReviewConfig;
use crate::domain::entity::review::Review;
use crate::domain::repository::ReviewRepository;
use crate::error::ReviewResult;

/// 1-based page number
///
/// Parsing is lenient: anything that is not a positive integer means
/// the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumber(u64);

impl PageNumber {
    pub const FIRST: Self = Self(1);

    pub fn new(page: u64) -> Self {
        if page == 0 { Self::FIRST } else { Self(page) }
    }

    /// Parse a raw `?page=` value
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<u64>().ok())
            .map(Self::new)
            .unwrap_or(Self::FIRST)
    }

    pub fn get(&self) -> u64 {
        self.0
    }

    /// Number of records before this page
    pub fn offset(&self, page_size: u32) -> u64 {
        (self.0 - 1).saturating_mul(page_size as u64)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// List reviews use case
pub struct ListReviewsUseCase<R>
where
    R: ReviewRepository,
{
    repo: Arc<R>,
    config: Arc<ReviewConfig>,
}

impl<R> ListReviewsUseCase<R>
where
    R: ReviewRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<ReviewConfig>) -> Self {
        Self { repo, config }
    }

    /// One page of all reviews, newest first. Past the end yields `[]`.
    pub async fn page(&self, page: PageNumber) -> ReviewResult<Vec<Review>> {
        let limit = self.config.page_size;
        self.repo.list_page(page.offset(limit), limit).await
    }

    /// Every review owned by the caller, newest first
    pub async fn owned_by(&self, identity: &Identity) -> ReviewResult<Vec<Review>> {
        self.repo.list_by_owner(&identity.user_id).await
    }
}
