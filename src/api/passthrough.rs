//! Raw vendor passthrough routes.
//!
//! Each handler forwards the caller's bearer token to one vendor endpoint
//! and returns the payload untouched. Mandatory-path error mapping (401
//! vs 500) is shared with the dashboard route via [`ApiError`].

use crate::api::{bearer_token, ApiError, AppState};
use crate::dashboard::{isolate, Partial};
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Pagination query parameters, defaulting to the vendor's first page and
/// a full day of 5-minute samples.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size", rename = "pageSize")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    288
}

/// POST body for energy-flow aggregation requests.
#[derive(Debug, Deserialize)]
pub struct EnergyFlowsRequest {
    pub start_date: String,
    pub end_date: String,
    #[serde(default = "default_grouping")]
    pub grouping: String,
}

fn default_grouping() -> String {
    "day".to_string()
}

pub async fn devices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.communication_devices(&token).await?))
}

pub async fn device(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.communication_device(&token, &serial).await?))
}

pub async fn account(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.account(&token).await?))
}

pub async fn inverter_system_data(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.inverter_system_data(&token, &serial).await?))
}

pub async fn inverter_meter_data(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.inverter_meter_data(&token, &serial).await?))
}

pub async fn inverter_data_points(
    State(state): State<Arc<AppState>>,
    Path((serial, date)): Path<(String, String)>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(
        state
            .vendor
            .inverter_data_points(&token, &serial, &date, query.page, query.page_size)
            .await?,
    ))
}

pub async fn inverter_events(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(
        state.vendor.inverter_events(&token, &serial, query.page).await?,
    ))
}

pub async fn inverter_settings(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.inverter_settings(&token, &serial).await?))
}

pub async fn read_inverter_setting(
    State(state): State<Arc<AppState>>,
    Path((serial, id)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(
        state.vendor.read_inverter_setting(&token, &serial, &id).await?,
    ))
}

pub async fn inverter_presets(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.inverter_presets(&token, &serial).await?))
}

pub async fn energy_flows(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
    headers: HeaderMap,
    Json(body): Json<EnergyFlowsRequest>,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(
        state
            .vendor
            .energy_flows(
                &token,
                &serial,
                &body.start_date,
                &body.end_date,
                &body.grouping,
            )
            .await?,
    ))
}

pub async fn ems_system_data(
    State(state): State<Arc<AppState>>,
    Path(serial): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.ems_system_data(&token, &serial).await?))
}

pub async fn sites(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.sites(&token).await?))
}

pub async fn site(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.site(&token, &id).await?))
}

/// Latest cumulative energy figures for one site. The vendor path is
/// `energy-data-latest`; the UI route drops the suffix.
pub async fn site_energy_data(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.site_energy_data_latest(&token, &id).await?))
}

pub async fn site_data_latest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.site_data_latest(&token, &id).await?))
}

pub async fn site_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.site_status(&token, &id).await?))
}

pub async fn ev_chargers(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.ev_chargers(&token).await?))
}

/// Detail bundle for one EV charger, each sub-resource isolated the same
/// way the dashboard fan-out isolates its fields.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvChargerDetails {
    pub charger: Partial,
    pub meter_data: Partial,
    pub commands: Partial,
    pub sessions: Partial,
}

pub async fn ev_charger_details(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
    headers: HeaderMap,
) -> Result<Json<EvChargerDetails>, ApiError> {
    let token = bearer_token(&headers)?;

    let (charger, meter_data, commands, sessions) = tokio::join!(
        isolate(state.vendor.ev_charger(&token, &uuid)),
        isolate(state.vendor.ev_charger_meter_data(&token, &uuid, 1)),
        isolate(state.vendor.ev_charger_commands(&token, &uuid)),
        isolate(state.vendor.ev_charger_sessions(&token, &uuid, 1)),
    );

    Ok(Json(EvChargerDetails {
        charger,
        meter_data,
        commands,
        sessions,
    }))
}

pub async fn ev_charger_meter_data(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(
        state
            .vendor
            .ev_charger_meter_data(&token, &uuid, query.page)
            .await?,
    ))
}

pub async fn ev_charger_sessions(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(
        state
            .vendor
            .ev_charger_sessions(&token, &uuid, query.page)
            .await?,
    ))
}

pub async fn smart_devices(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.smart_devices(&token).await?))
}

pub async fn smart_device(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(state.vendor.smart_device(&token, &uuid).await?))
}

pub async fn smart_device_data(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
    Query(query): Query<PageQuery>,
    headers: HeaderMap,
) -> Result<Json<Value>, ApiError> {
    let token = bearer_token(&headers)?;
    Ok(Json(
        state
            .vendor
            .smart_device_data(&token, &uuid, query.page)
            .await?,
    ))
}
