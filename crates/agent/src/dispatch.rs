//! Operation routing and the external error boundary.

use serde_json::Value;

use storefront_catalog::Catalog;
use storefront_core::{DomainError, ProductId};

use crate::envelope::{Invocation, InvocationResponse};
use crate::error::HandlerError;
use crate::params::ParamMap;

pub const GET_PRODUCT_DETAILS: &str = "/getProductDetails";
pub const SEARCH_PRODUCTS: &str = "/searchProducts";

/// Entry point, called once per request.
///
/// Never fails outward: every internal error kind is folded into a
/// structured body inside the response envelope. Only the error category
/// is logged; messages stay inside the process.
pub fn handle_invocation(catalog: &Catalog, invocation: &Invocation) -> InvocationResponse {
    tracing::info!(
        action_group = %invocation.action_group,
        api_path = %invocation.api_path,
        "received invocation"
    );

    let response = match dispatch(catalog, invocation) {
        Ok(body) => {
            tracing::info!("invocation processed");
            body
        }
        Err(err) => {
            tracing::error!(category = err.category(), "invocation failed");
            err.into_body()
        }
    };

    InvocationResponse { response }
}

fn dispatch(catalog: &Catalog, invocation: &Invocation) -> Result<Value, HandlerError> {
    let params = ParamMap::from_parameters(&invocation.parameters);

    match invocation.api_path.as_str() {
        GET_PRODUCT_DETAILS => get_product_details(catalog, &params),
        SEARCH_PRODUCTS => search_products(catalog, &params),
        other => Err(HandlerError::unsupported_path(other)),
    }
}

/// Fetch one product by identifier. The identifier is validated before
/// the catalog is consulted.
fn get_product_details(catalog: &Catalog, params: &ParamMap) -> Result<Value, HandlerError> {
    let raw = params.required("productId", "Product ID")?;
    let id: ProductId = raw.parse()?;

    let product = catalog
        .get(&id)
        .ok_or_else(|| DomainError::not_found(raw))?;

    serde_json::to_value(product).map_err(HandlerError::unexpected)
}

/// Filter the catalog by sanitized text query and price bounds. Numeric
/// parameters are validated before the search runs.
fn search_products(catalog: &Catalog, params: &ParamMap) -> Result<Value, HandlerError> {
    let criteria = params.search_criteria()?;
    let results = catalog.search(&criteria)?;

    serde_json::to_value(&results).map_err(HandlerError::unexpected)
}
