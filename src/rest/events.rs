use crate::event::{Event, EventRepo};
use crate::feature::{self, GeoJsonFeature};
use crate::log::RequestExtension;
use crate::rest::error::RestResult;
use actix_web::get;
use actix_web::post;
use actix_web::web::Bytes;
use actix_web::web::Data;
use actix_web::web::Json;
use actix_web::web::Query;
use actix_web::HttpMessage;
use actix_web::HttpRequest;
use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PostResponse {
    pub status: String,
    pub message: String,
    pub data: GeoJsonFeature,
}

#[get("")]
pub async fn get(
    req: HttpRequest,
    args: Query<Vec<(String, String)>>,
    repo: Data<EventRepo>,
) -> Json<Vec<Event>> {
    // Repeated params are allowed, the first filename wins
    let filename = args
        .into_inner()
        .into_iter()
        .find(|(key, _)| key == "filename")
        .map(|(_, value)| value);
    let events = repo.load_async(filename).await;
    req.extensions_mut()
        .insert(RequestExtension::new(events.len()));
    Json(events)
}

#[post("/new")]
pub async fn post(body: Bytes) -> RestResult<PostResponse> {
    let feature = feature::ingest(&body)?;
    Ok(Json(PostResponse {
        status: "success".into(),
        message: "New event registered successfully.".into(),
        data: feature,
    }))
}
