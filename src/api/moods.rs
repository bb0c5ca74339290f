use axum::{extract::Path, response::Json};
use serde_json::{Value, json};

use crate::{
    catalog::{self, CATALOG},
    error::Result,
};

pub async fn list_moods() -> Json<Value> {
    Json(json!({ "moods": &CATALOG }))
}

/// A mood entry together with its demo tracks.
pub async fn get_mood(Path(name): Path<String>) -> Result<Json<Value>> {
    let entry = catalog::lookup(&name)?;
    let demo = catalog::demo_tracks(entry.mood);
    Ok(Json(json!({
        "mood": entry,
        "demo_tracks": demo,
    })))
}
