use axum::Json;

use crate::dtos::common::MessageResponse;

// GET /ping - Liveness check
pub async fn ping() -> Json<MessageResponse> {
    Json(MessageResponse { message: "pong" })
}
