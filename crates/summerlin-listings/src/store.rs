//! In-memory listing store.

use async_trait::async_trait;
use dashmap::DashMap;
use log::debug;
use summerlin_core::Listing;

use crate::catalog::sample_listings;
use crate::error::ListingResult;
use crate::filter::{result_order, ListingFilter};
use crate::source::ListingSource;

/// In-memory mutable listing store.
///
/// Listings are keyed by ID with a secondary MLS index.
pub struct InMemoryListingStore {
    listings: DashMap<String, Listing>,
    by_mls: DashMap<String, String>,
}

impl InMemoryListingStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            listings: DashMap::new(),
            by_mls: DashMap::new(),
        }
    }

    /// Create a store holding the given listings.
    pub fn with_listings(listings: impl IntoIterator<Item = Listing>) -> Self {
        let store = Self::new();
        for listing in listings {
            store.upsert(listing);
        }
        store
    }

    /// Create a store holding the sample catalog.
    pub fn seeded() -> Self {
        let store = Self::with_listings(sample_listings());
        debug!("seeded listing store with {} listings", store.len());
        store
    }

    /// Insert or update a listing.
    ///
    /// The MLS index points at the most recently upserted listing carrying
    /// that number.
    pub fn upsert(&self, listing: Listing) -> Listing {
        if let Some(previous) = self.listings.insert(listing.id.clone(), listing.clone()) {
            if previous.mls != listing.mls {
                self.unindex(&previous);
            }
        }
        self.by_mls.insert(listing.mls.clone(), listing.id.clone());
        listing
    }

    /// Delete a listing by ID.
    pub fn delete(&self, id: &str) -> Option<Listing> {
        let (_, listing) = self.listings.remove(id)?;
        self.unindex(&listing);
        Some(listing)
    }

    /// Drops the MLS entry if it still points at `listing`, handing it to any
    /// other listing with the same number.
    fn unindex(&self, listing: &Listing) {
        if self.by_mls.remove_if(&listing.mls, |_, id| id == &listing.id).is_none() {
            return;
        }
        let survivor = self
            .listings
            .iter()
            .find(|r| r.value().mls == listing.mls)
            .map(|r| r.key().clone());
        if let Some(id) = survivor {
            debug!("MLS {} now indexes listing {}", listing.mls, id);
            self.by_mls.insert(listing.mls.clone(), id);
        }
    }

    /// Number of listings held.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn matching(&self, filter: &ListingFilter) -> Vec<Listing> {
        self.listings
            .iter()
            .filter(|r| filter.matches(r.value()))
            .map(|r| r.value().clone())
            .collect()
    }
}

impl Default for InMemoryListingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ListingSource for InMemoryListingStore {
    async fn get_by_id(&self, id: &str) -> ListingResult<Option<Listing>> {
        Ok(self.listings.get(id).map(|l| l.clone()))
    }

    async fn get_by_mls(&self, mls: &str) -> ListingResult<Option<Listing>> {
        let Some(id) = self.by_mls.get(mls).map(|id| id.clone()) else {
            return Ok(None);
        };
        Ok(self.listings.get(&id).map(|l| l.clone()))
    }

    async fn search(
        &self,
        filter: &ListingFilter,
        limit: usize,
        offset: usize,
    ) -> ListingResult<Vec<Listing>> {
        filter.validate()?;

        // DashMap iteration order is arbitrary.
        let mut results = self.matching(filter);
        results.sort_by(result_order);

        Ok(results.into_iter().skip(offset).take(limit).collect())
    }

    async fn count(&self, filter: &ListingFilter) -> ListingResult<u64> {
        filter.validate()?;
        Ok(self.listings.iter().filter(|r| filter.matches(r.value())).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summerlin_core::types::PropertyType;

    #[tokio::test]
    async fn test_seeded_lookup() {
        let store = InMemoryListingStore::seeded();
        assert_eq!(store.len(), 4);

        let by_id = store.get_by_id("2").await.unwrap().unwrap();
        assert_eq!(by_id.village, "The Summit");

        let by_mls = store.get_by_mls("2418450").await.unwrap().unwrap();
        assert_eq!(by_mls.id, "3");

        assert!(store.get_by_id("999").await.unwrap().is_none());
        assert!(store.get_by_mls("0000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_sorted_and_paged() {
        let store = InMemoryListingStore::seeded();
        let all = store.search(&ListingFilter::new(), 10, 0).await.unwrap();
        let prices: Vec<u64> = all.iter().map(|l| l.price).collect();
        assert_eq!(prices, vec![3_200_000, 2_495_000, 1_850_000, 689_000]);

        let page = store.search(&ListingFilter::new(), 2, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].id, "2");
        assert_eq!(store.count(&ListingFilter::new()).await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_equal_prices_break_ties_by_id() {
        let store = InMemoryListingStore::seeded();
        let mut twin = store.get_by_id("2").await.unwrap().unwrap();
        twin.id = "10".into();
        twin.mls = "2418460".into();
        store.upsert(twin);

        let filter = ListingFilter::new().price_between(Some(1_850_000), Some(1_850_000));
        let found = store.search(&filter, 10, 0).await.unwrap();
        let ids: Vec<&str> = found.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "2"]);
    }

    #[tokio::test]
    async fn test_count_ignores_pagination() {
        let store = InMemoryListingStore::seeded();
        let filter = ListingFilter::new().property_type(PropertyType::LuxuryEstate);
        assert_eq!(store.search(&filter, 1, 0).await.unwrap().len(), 1);
        assert_eq!(store.count(&filter).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_invalid_filter_rejected() {
        let store = InMemoryListingStore::seeded();
        let filter = ListingFilter::new().price_between(Some(5), Some(1));
        assert!(store.search(&filter, 10, 0).await.is_err());
        assert!(store.count(&filter).await.is_err());
    }

    #[tokio::test]
    async fn test_upsert_and_delete() {
        let store = InMemoryListingStore::new();
        assert!(store.is_empty());

        let mut listing = sample_listings().remove(0);
        store.upsert(listing.clone());
        listing.mls = "9999999".into();
        store.upsert(listing);

        assert_eq!(store.len(), 1);
        assert!(store.get_by_mls("2418448").await.unwrap().is_none());
        assert!(store.get_by_mls("9999999").await.unwrap().is_some());

        let removed = store.delete("1").unwrap();
        assert_eq!(removed.mls, "9999999");
        assert!(store.is_empty());
        assert!(store.get_by_mls("9999999").await.unwrap().is_none());
        assert!(store.delete("1").is_none());
    }

    #[tokio::test]
    async fn test_shared_mls_survives_delete() {
        let store = InMemoryListingStore::new();
        let mut a = sample_listings().remove(0);
        a.mls = "7777777".into();
        let mut b = a.clone();
        b.id = "20".into();
        store.upsert(a.clone());
        store.upsert(b.clone());

        // Removing the listing the index no longer points at.
        store.delete(&a.id);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_mls("7777777").await.unwrap().unwrap().id, "20");

        // Removing the indexed listing hands the number back.
        store.upsert(a.clone());
        store.upsert(b);
        store.delete("20");
        assert_eq!(store.get_by_mls("7777777").await.unwrap().unwrap().id, a.id);

        store.delete(&a.id);
        assert!(store.get_by_mls("7777777").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_renumbering_keeps_shared_entry() {
        let store = InMemoryListingStore::new();
        let a = sample_listings().remove(0);
        let mut b = a.clone();
        b.id = "21".into();
        store.upsert(a.clone());
        store.upsert(b.clone());

        // `a` gives up the shared number; `b` still owns it.
        let mut renumbered = a.clone();
        renumbered.mls = "8888888".into();
        store.upsert(renumbered);

        assert_eq!(store.get_by_mls(&a.mls).await.unwrap().unwrap().id, "21");
        assert_eq!(store.get_by_mls("8888888").await.unwrap().unwrap().id, a.id);
    }
}
