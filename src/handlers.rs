use crate::errors::AppError;
use crate::medications::{MedicationNames, MEDICATIONS, TRIGGERS};
use crate::models::{
    CatalogItem, CatalogResponse, DeleteResponse, HeadacheEntry, HealthResponse, NewEntryRequest,
    Statistics, UpdateEntryRequest,
};
use crate::state::AppState;
use crate::stats::build_statistics;
use crate::storage::persist_data;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<HeadacheEntry>>, AppError> {
    let data = state.data.lock().await;
    let mut entries: Vec<HeadacheEntry> = data.entries.values().cloned().collect();
    // ISO date strings compare chronologically; the list view wants newest first.
    entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    Ok(Json(entries))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<NewEntryRequest>,
) -> Result<(StatusCode, Json<HeadacheEntry>), AppError> {
    let raw_date = payload
        .date
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());
    let (Some(raw_date), Some(severity)) = (raw_date, payload.severity) else {
        return Err(AppError::bad_request("date and severity are required"));
    };

    let entry = HeadacheEntry {
        id: Uuid::new_v4().to_string(),
        date: parse_date_field(raw_date)?,
        severity: Some(check_severity(severity)?),
        notes: payload.notes,
        triggers: payload.triggers,
        medications: payload.medications,
    };

    let mut data = state.data.lock().await;
    data.entries.insert(entry.id.clone(), entry.clone());
    persist_data(&state.data_path, &data).await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HeadacheEntry>, AppError> {
    let data = state.data.lock().await;
    let entry = data.entries.get(&id).cloned().ok_or_else(entry_not_found)?;
    Ok(Json(entry))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateEntryRequest>,
) -> Result<Json<HeadacheEntry>, AppError> {
    let mut data = state.data.lock().await;
    let updated = {
        let entry = data.entries.get_mut(&id).ok_or_else(entry_not_found)?;
        if let Some(date) = payload.date.as_deref() {
            entry.date = parse_date_field(date.trim())?;
        }
        if let Some(severity) = payload.severity {
            entry.severity = Some(check_severity(severity)?);
        }
        if let Some(notes) = payload.notes {
            entry.notes = Some(notes);
        }
        if let Some(triggers) = payload.triggers {
            entry.triggers = triggers;
        }
        if let Some(medications) = payload.medications {
            entry.medications = medications;
        }
        entry.clone()
    };

    persist_data(&state.data_path, &data).await?;

    Ok(Json(updated))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut data = state.data.lock().await;
    if data.entries.remove(&id).is_none() {
        return Err(entry_not_found());
    }
    persist_data(&state.data_path, &data).await?;

    Ok(Json(DeleteResponse {
        message: "headache entry deleted".to_string(),
    }))
}

pub async fn get_statistics(
    State(state): State<AppState>,
) -> Result<Json<Statistics>, AppError> {
    let data = state.data.lock().await;
    let mut entries: Vec<HeadacheEntry> = data.entries.values().cloned().collect();
    // Oldest first: medication ranking breaks ties by first appearance.
    entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
    Ok(Json(build_statistics(&entries, &MedicationNames::default())))
}

pub async fn get_catalog() -> Json<CatalogResponse> {
    let to_items = |table: &[(&'static str, &'static str)]| {
        table
            .iter()
            .map(|&(id, name)| CatalogItem { id, name })
            .collect()
    };
    Json(CatalogResponse {
        medications: to_items(MEDICATIONS),
        triggers: to_items(TRIGGERS),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let data = state.data.lock().await;
    Json(HealthResponse {
        status: "ok",
        entries: data.entries.len() as u64,
        timestamp: Utc::now().to_rfc3339(),
    })
}

fn entry_not_found() -> AppError {
    AppError::not_found("headache entry not found")
}

fn parse_date_field(raw: &str) -> Result<String, AppError> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be formatted YYYY-MM-DD"))?;
    Ok(date.to_string())
}

fn check_severity(value: i64) -> Result<i64, AppError> {
    if (1..=5).contains(&value) {
        Ok(value)
    } else {
        Err(AppError::bad_request("severity must be between 1 and 5"))
    }
}
