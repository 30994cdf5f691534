use either::{Either, Left, Right};
use rocket::response::status::{BadRequest, NotFound};
use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket_okapi::{openapi, JsonSchema};

use super::{DeleteOutcome, SaveOutcome, SaveRecord, SaveRequest, SaveStore};
use crate::game::scheduler::{Clock, SystemClock};
use crate::server::validator::RejectCategory;
use crate::status_messages::{new_status, Status};

/// Body returned when a save is refused. `category` tells the caller
/// whether to fix its input (`Invalid`) or surface a suspected-cheating
/// message (`Suspicious`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(crate = "rocket::serde")]
pub struct SaveRejectionBody {
    pub category: RejectCategory,
    pub reason: String,
}

/// Persist a save after running the validation gate. Responds 201 when the
/// record was created, 200 when an existing one was updated.
#[openapi]
#[post("/saves", format = "json", data = "<save_request>")]
pub async fn save_game(
    store: &rocket::State<std::sync::Arc<rocket::futures::lock::Mutex<SaveStore>>>,
    save_request: Json<SaveRequest>,
) -> Result<(rocket::http::Status, Json<SaveOutcome>), BadRequest<Json<SaveRejectionBody>>> {
    let mut store = store.lock().await;
    match store.apply_save(save_request.0, SystemClock.now_ms()) {
        Ok(outcome) => {
            let status = if outcome.created {
                rocket::http::Status::Created
            } else {
                rocket::http::Status::Ok
            };
            Ok((status, Json(outcome)))
        }
        Err(rejection) => Err(BadRequest(Json(SaveRejectionBody {
            category: rejection.category(),
            reason: rejection.to_string(),
        }))),
    }
}

/// Load a player's stored record. A missing record means "new player" and
/// surfaces as 404; the caller starts from defaults.
#[openapi]
#[get("/saves/<player_id>")]
pub async fn load_game(
    store: &rocket::State<std::sync::Arc<rocket::futures::lock::Mutex<SaveStore>>>,
    player_id: String,
) -> Result<Json<SaveRecord>, Either<NotFound<Json<Status>>, BadRequest<Json<Status>>>> {
    if player_id.trim().is_empty() {
        return Err(Right(BadRequest(new_status(
            "Player id must not be empty".to_string(),
        ))));
    }
    let store = store.lock().await;
    match store.load(&player_id) {
        Some(record) => Ok(Json(record.clone())),
        None => Err(Left(NotFound(new_status(format!(
            "No save stored for player {player_id}"
        ))))),
    }
}

/// Ranked leaderboard page. `limit` is clamped server-side to [1, 100].
#[openapi]
#[get("/leaderboard?<limit>")]
pub async fn get_leaderboard(
    store: &rocket::State<std::sync::Arc<rocket::futures::lock::Mutex<SaveStore>>>,
    limit: Option<usize>,
) -> Json<Vec<super::leaderboard::LeaderboardRow>> {
    let store = store.lock().await;
    Json(store.leaderboard(limit))
}

/// Administrative delete, intended for test/ops use only.
#[openapi]
#[delete("/saves/<player_id>")]
pub async fn delete_save(
    store: &rocket::State<std::sync::Arc<rocket::futures::lock::Mutex<SaveStore>>>,
    player_id: String,
) -> Json<DeleteOutcome> {
    let mut store = store.lock().await;
    Json(DeleteOutcome {
        existed: store.delete(&player_id),
    })
}
