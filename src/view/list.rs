use crate::api::{ApiError, PlacesClient};
use crate::place::{Place, SUMMARY_SCHEMA};
use crate::resolver::Record;
use crate::view::ListView;
use log::{error, info};
use serde_json::Value;

/// Fetches the whole collection and turns it into cards.
///
/// Never fails: every error is logged and becomes a [`ListView`] variant.
pub async fn load_list(client: &dyn PlacesClient) -> ListView {
    let url = client.collection_url();

    match fetch_list(client, &url).await {
        Ok(view) => view,
        Err(err) => {
            error!("error fetching places from {url}: {err}");
            ListView::Failed
        }
    }
}

async fn fetch_list(client: &dyn PlacesClient, url: &str) -> Result<ListView, ApiError> {
    let response = client.get_collection().await?;

    if !response.is_success() {
        return Ok(ListView::HttpError(response.status));
    }

    let Value::Array(items) = response.json()? else {
        error!("response from {url} is not an array: {}", response.body);
        return Ok(ListView::InvalidResponse);
    };

    if items.is_empty() {
        return Ok(ListView::Empty);
    }

    let empty = Record::new();
    let places: Vec<Place> = items
        .iter()
        .map(|item| Place::from_record(item.as_object().unwrap_or(&empty), &SUMMARY_SCHEMA))
        .collect();

    info!("rendered {} cards from {url}", places.len());

    Ok(ListView::Cards(places))
}
