//! Resource APIs: access rights, access cards and licenses.
//!
//! Each API turns its lookups into a route beneath the base URL and hands the
//! request to the shared [`ClientBridge`]. Responses come back untouched; a 404
//! is a normal `Ok` value.
//!
//! | API | Method | Route |
//! |-----|--------|-------|
//! | [`AccessRightsApi`] | `delete` | `access-rights/{lookup}` |
//! | [`AccessCardsApi`] | `delete` | `access-cards/{lookup}` |
//! | [`LicensesApi`] | `delete` | `licenses/{licLookup}` |
//! | [`LicensesApi`] | `delete_plan` | `licenses/{licLookup}/{planLookup}` |
//! | [`LicensesApi`] | `delete_plan_price` | `licenses/{licLookup}/{planLookup}/{priceLookup}` |

use super::bridge::ClientBridge;
use super::utils::resource_path;
use crate::error::Result;
use crate::protocol::constants::segments;
use crate::types::{AdminResponse, RequestInit};

/// Access rights API
#[derive(Clone, Debug)]
pub struct AccessRightsApi {
    bridge: ClientBridge,
}

impl AccessRightsApi {
    pub(crate) fn new(bridge: ClientBridge) -> Self {
        AccessRightsApi { bridge }
    }

    /// Delete an access right
    pub async fn delete(&self, lookup: &str, init: Option<RequestInit>) -> Result<AdminResponse> {
        let path = resource_path(segments::ACCESS_RIGHTS, &[lookup]);
        self.bridge.delete(&path, init).await
    }
}

/// Access cards API
#[derive(Clone, Debug)]
pub struct AccessCardsApi {
    bridge: ClientBridge,
}

impl AccessCardsApi {
    pub(crate) fn new(bridge: ClientBridge) -> Self {
        AccessCardsApi { bridge }
    }

    /// Delete an access card
    pub async fn delete(&self, lookup: &str, init: Option<RequestInit>) -> Result<AdminResponse> {
        let path = resource_path(segments::ACCESS_CARDS, &[lookup]);
        self.bridge.delete(&path, init).await
    }
}

/// Licenses API, including the plans and prices nested under a license.
#[derive(Clone, Debug)]
pub struct LicensesApi {
    bridge: ClientBridge,
}

impl LicensesApi {
    pub(crate) fn new(bridge: ClientBridge) -> Self {
        LicensesApi { bridge }
    }

    /// Delete a license
    pub async fn delete(&self, lic_lookup: &str, init: Option<RequestInit>) -> Result<AdminResponse> {
        let path = resource_path(segments::LICENSES, &[lic_lookup]);
        self.bridge.delete(&path, init).await
    }

    /// Delete a plan of a license
    pub async fn delete_plan(
        &self,
        lic_lookup: &str,
        plan_lookup: &str,
        init: Option<RequestInit>,
    ) -> Result<AdminResponse> {
        let path = resource_path(segments::LICENSES, &[lic_lookup, plan_lookup]);
        self.bridge.delete(&path, init).await
    }

    /// Delete a price of a license plan
    pub async fn delete_plan_price(
        &self,
        lic_lookup: &str,
        plan_lookup: &str,
        price_lookup: &str,
        init: Option<RequestInit>,
    ) -> Result<AdminResponse> {
        let path = resource_path(segments::LICENSES, &[lic_lookup, plan_lookup, price_lookup]);
        self.bridge.delete(&path, init).await
    }
}
