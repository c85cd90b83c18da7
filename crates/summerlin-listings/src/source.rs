//! Listing source trait.

use async_trait::async_trait;
use summerlin_core::Listing;

use crate::error::ListingResult;
use crate::filter::ListingFilter;

/// Read access to a listing catalog.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Get listing by internal ID.
    async fn get_by_id(&self, id: &str) -> ListingResult<Option<Listing>>;

    /// Get listing by MLS number.
    async fn get_by_mls(&self, mls: &str) -> ListingResult<Option<Listing>>;

    /// Search listings by filter, most expensive first.
    async fn search(
        &self,
        filter: &ListingFilter,
        limit: usize,
        offset: usize,
    ) -> ListingResult<Vec<Listing>>;

    /// Count listings matching filter, ignoring pagination.
    async fn count(&self, filter: &ListingFilter) -> ListingResult<u64>;
}
