//! Admin list reordering
//!
//! Categories and banners share one mechanic: swap two neighbors locally,
//! then submit the entire id list; the server rewrites `order` from the
//! submitted positions. The engine serializes submissions per collection
//! and never commits an optimistic order: after any submission (success or
//! failure) the authoritative list is re-fetched from the server.
//!
//! State machine per action: `Idle → Submitting → Idle`.

use async_trait::async_trait;

use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;

/// Direction of a single-step move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    Up,
    Down,
}

/// Compute the id list after moving `index` one step, without mutating the
/// input. Returns `None` at the boundaries (first item up, last item down)
/// and for out-of-range indices.
pub fn moved_ids(ids: &[String], index: usize, direction: MoveDirection) -> Option<Vec<String>> {
    let target = match direction {
        MoveDirection::Up => index.checked_sub(1)?,
        MoveDirection::Down => index + 1,
    };
    if index >= ids.len() || target >= ids.len() {
        return None;
    }

    let mut next = ids.to_vec();
    next.swap(index, target);
    Some(next)
}

/// The two calls a collection needs to support reordering
#[async_trait]
pub trait ReorderApi {
    /// Fetch the full id list in current server order
    async fn fetch_ids(&self) -> ClientResult<Vec<String>>;
    /// Submit the full id list in the desired order
    async fn submit_order(&self, ids: Vec<String>) -> ClientResult<()>;
}

/// Outcome of a move request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReorderOutcome {
    /// Boundary move; nothing changed and no request was issued
    NotMoved,
    /// The server accepted the new order; here it is, re-fetched
    Reordered(Vec<String>),
}

/// Reorder engine for one collection
pub struct ReorderEngine<A: ReorderApi> {
    api: A,
    ids: Vec<String>,
    busy: bool,
}

impl<A: ReorderApi> ReorderEngine<A> {
    /// Fetch the initial ordering and build the engine
    pub async fn load(api: A) -> ClientResult<Self> {
        let ids = api.fetch_ids().await?;
        Ok(Self {
            api,
            ids,
            busy: false,
        })
    }

    /// The last ordering confirmed by the server
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Whether a submission is in flight (UI disables the arrows)
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Move the item at `index` one step and persist the new order.
    ///
    /// On failure the server list is re-fetched before the error is
    /// surfaced, so `ids()` never reflects an order the server rejected.
    pub async fn move_item(
        &mut self,
        index: usize,
        direction: MoveDirection,
    ) -> ClientResult<ReorderOutcome> {
        if self.busy {
            return Err(ClientError::Busy);
        }

        let Some(next) = moved_ids(&self.ids, index, direction) else {
            return Ok(ReorderOutcome::NotMoved);
        };

        self.busy = true;
        let submitted = self.api.submit_order(next).await;
        let refreshed = self.api.fetch_ids().await;
        self.busy = false;

        if let Ok(ids) = refreshed {
            self.ids = ids;
        }

        match submitted {
            Ok(()) => Ok(ReorderOutcome::Reordered(self.ids.clone())),
            Err(e) => Err(e),
        }
    }

    /// Re-fetch the ordering (mutation elsewhere invalidated it)
    pub async fn refresh(&mut self) -> ClientResult<&[String]> {
        self.ids = self.api.fetch_ids().await?;
        Ok(&self.ids)
    }
}

// ========== HTTP-backed collections ==========

/// Category collection bound to the admin API
pub struct CategoryReorder {
    client: HttpClient,
}

impl CategoryReorder {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReorderApi for CategoryReorder {
    async fn fetch_ids(&self) -> ClientResult<Vec<String>> {
        let categories = self.client.admin_categories().await?;
        Ok(categories.into_iter().filter_map(|c| c.id).collect())
    }

    async fn submit_order(&self, ids: Vec<String>) -> ClientResult<()> {
        self.client.reorder_categories(ids).await?;
        Ok(())
    }
}

/// Banner collection bound to the admin API (inactive banners included,
/// since they keep their place in the ordering)
pub struct BannerReorder {
    client: HttpClient,
}

impl BannerReorder {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReorderApi for BannerReorder {
    async fn fetch_ids(&self) -> ClientResult<Vec<String>> {
        let banners = self.client.admin_banners().await?;
        Ok(banners.into_iter().filter_map(|b| b.id).collect())
    }

    async fn submit_order(&self, ids: Vec<String>) -> ClientResult<()> {
        self.client.reorder_banners(ids).await?;
        Ok(())
    }
}
