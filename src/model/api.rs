use serde::{Deserialize, Serialize};

use crate::model::query::{AffiliationFilter, ListingQuery, SortOrder};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Query string accepted by `GET /api/listings`.
///
/// Every parameter is optional. `affiliationId=all` and an absent `affiliationId` both
/// disable the affiliation filter, and an unknown `sortBy` falls back to the default order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
#[serde(rename_all = "camelCase")]
pub struct ListingQueryParams {
    /// Affiliation ID to filter by, or `all`
    pub affiliation_id: Option<String>,
    /// Case-insensitive text matched against listing names and amenities
    pub query: Option<String>,
    /// One of `default`, `price-asc`, `price-desc`, `rating-desc`
    pub sort_by: Option<String>,
}

impl From<ListingQueryParams> for ListingQuery {
    fn from(params: ListingQueryParams) -> Self {
        ListingQuery {
            affiliation: AffiliationFilter::from_param(params.affiliation_id.as_deref()),
            text: params.query.unwrap_or_default(),
            sort: params
                .sort_by
                .as_deref()
                .map(SortOrder::from_param)
                .unwrap_or_default(),
        }
    }
}

impl From<&ListingQuery> for ListingQueryParams {
    fn from(query: &ListingQuery) -> Self {
        ListingQueryParams {
            affiliation_id: Some(query.affiliation.as_param().to_string()),
            query: (!query.text.is_empty()).then(|| query.text.clone()),
            sort_by: Some(query.sort.as_str().to_string()),
        }
    }
}
