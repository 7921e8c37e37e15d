use crate::api::{ApiError, PlacesClient};
use crate::place::{Place, DETAIL_SCHEMA};
use crate::view::DetailView;
use log::{error, warn};
use serde_json::Value;

pub async fn load_detail(client: &dyn PlacesClient, id: Option<&str>) -> DetailView {
    let Some(id) = id.filter(|id| !id.is_empty()) else {
        warn!("detail page requested without an id");
        return DetailView::MissingId;
    };

    match fetch_detail(client, id).await {
        Ok(view) => view,
        Err(err) => {
            error!("error loading place {id}: {err}");
            DetailView::Failed
        }
    }
}

async fn fetch_detail(client: &dyn PlacesClient, id: &str) -> Result<DetailView, ApiError> {
    let response = client.get_place(id).await?;

    if !response.is_success() {
        return Ok(DetailView::HttpError {
            status: response.status,
            id: id.to_string(),
        });
    }

    let Value::Object(record) = response.json()? else {
        return Err(ApiError::Message(format!(
            "place {id} is not an object: {}",
            response.body
        )));
    };

    Ok(DetailView::Loaded(Place::from_record(&record, &DETAIL_SCHEMA)))
}
