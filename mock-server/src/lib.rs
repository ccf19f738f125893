use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};
use uuid::Uuid;

/// A stored ruleset. The server only cares about the string `id` field.
pub type Ruleset = Map<String, Value>;

pub type Db = Arc<RwLock<BTreeMap<String, Ruleset>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/JSON/Ruleset/List", get(list_rulesets))
        .route("/JSON/Ruleset/ListDefinitions", get(list_definitions))
        .route("/JSON/Ruleset/New", post(new_ruleset))
        .route("/JSON/Ruleset/Update", post(update_ruleset))
        .route("/JSON/Ruleset/Delete", post(delete_ruleset))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "ruleset mock server listening");
    }
    axum::serve(listener, app()).await
}

/// Rule definitions served by `ListDefinitions`.
pub fn definitions() -> Value {
    json!([
        {"name": "Period.Number", "type": "Integer", "default": "2"},
        {"name": "Period.Duration", "type": "Time", "default": "30:00"},
        {"name": "Jam.Duration", "type": "Time", "default": "2:00"},
        {"name": "Lineup.Duration", "type": "Time", "default": "0:30"},
        {"name": "Team.Timeouts", "type": "Integer", "default": "3"},
        {"name": "Team.OfficialReviews", "type": "Integer", "default": "1"},
        {"name": "Intermission.Durations", "type": "String", "default": "15:00,60:00"}
    ])
}

async fn list_rulesets(State(db): State<Db>) -> Json<Vec<Ruleset>> {
    let rulesets = db.read().await;
    Json(rulesets.values().cloned().collect())
}

async fn list_definitions() -> Json<Value> {
    Json(definitions())
}

async fn new_ruleset(State(db): State<Db>, body: String) -> Result<Json<Ruleset>, StatusCode> {
    let mut ruleset = parse_ruleset(&body)?;
    let id = match ruleset.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(_) => return Err(StatusCode::BAD_REQUEST),
        None => {
            let id = Uuid::new_v4().to_string();
            ruleset.insert("id".to_string(), Value::String(id.clone()));
            id
        }
    };

    let mut rulesets = db.write().await;
    if rulesets.contains_key(&id) {
        return Err(StatusCode::CONFLICT);
    }
    rulesets.insert(id.clone(), ruleset.clone());
    debug!(%id, "ruleset created");
    Ok(Json(ruleset))
}

async fn update_ruleset(State(db): State<Db>, body: String) -> Result<Json<Ruleset>, StatusCode> {
    let ruleset = parse_ruleset(&body)?;
    let id = ruleset_id(&ruleset)?;

    let mut rulesets = db.write().await;
    let stored = rulesets.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *stored = ruleset.clone();
    debug!(%id, "ruleset updated");
    Ok(Json(ruleset))
}

async fn delete_ruleset(State(db): State<Db>, body: String) -> Result<Json<Ruleset>, StatusCode> {
    let ruleset = parse_ruleset(&body)?;
    let id = ruleset_id(&ruleset)?;

    let removed = db.write().await.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    debug!(%id, "ruleset deleted");
    Ok(Json(removed))
}

/// Bodies are read as text whatever the declared content type.
fn parse_ruleset(body: &str) -> Result<Ruleset, StatusCode> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(ruleset)) => Ok(ruleset),
        _ => Err(StatusCode::BAD_REQUEST),
    }
}

fn ruleset_id(ruleset: &Ruleset) -> Result<String, StatusCode> {
    ruleset
        .get("id")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(StatusCode::BAD_REQUEST)
}
