//! The URIs of the app's pages and API endpoints.
//!
//! Endpoints with a path parameter, such as [TRANSACTION], should be filled in
//! with [format_endpoint].

use crate::transaction::TransactionId;

pub const ROOT: &str = "/";
pub const DASHBOARD_VIEW: &str = "/dashboard";
pub const TRANSACTIONS_VIEW: &str = "/transactions";
pub const INTERNAL_ERROR_VIEW: &str = "/error";
pub const STATIC: &str = "/static";

pub const TRANSACTIONS_API: &str = "/api/transactions";
pub const TRANSACTION: &str = "/api/transactions/{transaction_id}";
pub const CLEAR_TRANSACTIONS: &str = "/api/transactions/clear";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// The parameter is the first `{...}` section of the path. If the path has no
/// parameter it is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: TransactionId) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let Some(param_end) = endpoint_path[param_start..].find('}') else {
        return endpoint_path.to_owned();
    };

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_start + param_end + 1..]
    )
}
