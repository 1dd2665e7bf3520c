//! # Catalog Commands
//!
//! Browse and search over the sample catalog: the home grid, the search
//! screen, and the product detail lookup.

use tracing::debug;

use crate::error::ApiError;
use crate::state::CatalogState;
use toko_core::types::Product;
use toko_core::validation::{validate_product_id, validate_search_query};

/// All catalog products, for the home grid.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    catalog.all().to_vec()
}

/// Looks up one product for the detail screen.
pub fn get_product_by_id(catalog: &CatalogState, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product_by_id command");

    validate_product_id(product_id)?;

    catalog
        .get_by_id(product_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}

/// Searches the catalog by name or store.
///
/// ## Arguments
/// * `query` - Search text; empty returns the full catalog
/// * `limit` - Maximum results to return (default: no limit)
pub fn search_products(
    catalog: &CatalogState,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<Product>, ApiError> {
    debug!(query = %query, limit = ?limit, "search_products command");

    let query = validate_search_query(query)?;
    let mut results: Vec<Product> = catalog.search(&query).into_iter().cloned().collect();
    if let Some(limit) = limit {
        results.truncate(limit);
    }
    Ok(results)
}

/// Suggestions for an empty search box.
pub fn popular_searches(catalog: &CatalogState) -> Vec<String> {
    debug!("popular_searches command");
    catalog
        .popular_searches()
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}
