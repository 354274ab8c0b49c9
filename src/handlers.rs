use crate::errors::AppError;
use crate::models::{EntriesResponse, EntryResponse, SaveEntryRequest, StatsResponse};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::storage;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;
use tracing::info;

const MIN_IDENTITY_LEN: usize = 8;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn get_entries(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> Result<Json<EntriesResponse>, AppError> {
    let identity = checked_identity(&identity)?;
    let collection = storage::load(&state.data_dir, identity).await?;

    let entries = collection
        .entries
        .into_iter()
        .map(|(date, entry)| EntryResponse {
            date,
            value: entry.battery,
            note: entry.note,
        })
        .collect();

    Ok(Json(EntriesResponse { entries }))
}

pub async fn save_entry(
    State(state): State<AppState>,
    Path(identity): Path<String>,
    Json(payload): Json<SaveEntryRequest>,
) -> Result<Json<EntryResponse>, AppError> {
    let identity = checked_identity(&identity)?;
    let date = payload.date.unwrap_or_else(today_string);

    let _guard = state.write_lock.lock().await;
    let (date, entry) =
        storage::upsert(&state.data_dir, identity, &date, payload.value, payload.note).await?;
    info!("saved entry for {identity} on {date}");

    Ok(Json(EntryResponse {
        date,
        value: entry.battery,
        note: entry.note,
    }))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path((identity, date)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let identity = checked_identity(&identity)?;

    let _guard = state.write_lock.lock().await;
    let removed = storage::delete(&state.data_dir, identity, &date).await?;
    if removed {
        info!("deleted entry for {identity} on {date}");
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_stats(
    State(state): State<AppState>,
    Path(identity): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let identity = checked_identity(&identity)?;
    let collection = storage::load(&state.data_dir, identity).await?;
    Ok(Json(build_stats(&collection)))
}

/// Usability rule carried over from the input form: nicknames are at least
/// eight characters so people don't use their real first name.
fn checked_identity(identity: &str) -> Result<&str, AppError> {
    let trimmed = identity.trim();
    if trimmed.chars().count() < MIN_IDENTITY_LEN {
        return Err(AppError::bad_request(format!(
            "nickname must be at least {MIN_IDENTITY_LEN} characters"
        )));
    }
    Ok(trimmed)
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
