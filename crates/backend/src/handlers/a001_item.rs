use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a001_item::aggregate::Item;

use crate::domain::a001_item;
use crate::routes::AppState;
use crate::shared::api_error::ApiError;

/// GET /api/v1/items/
pub async fn missing_id() -> ApiError {
    ApiError::BadRequest("Item ID is required".into())
}

/// GET /api/v1/items/:id
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::BadRequest("Item ID is required".into()));
    }

    match a001_item::service::get_enriched(&state.db, id).await? {
        Some(item) => Ok(Json(item)),
        None => {
            tracing::info!("Item {} not found", id);
            Err(ApiError::NotFound("Item not found".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::{db, seed};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    async fn seeded_state() -> AppState {
        let conn = db::connect_in_memory().await.unwrap();
        seed::ensure_demo_item(&conn).await.unwrap();
        AppState::new(conn)
    }

    async fn body_json(resp: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_known_item() {
        let state = seeded_state().await;
        let Json(item) = get_by_id(State(state), Path(seed::DEMO_ITEM_ID.to_string()))
            .await
            .unwrap();

        assert_eq!(item.general_info.title, seed::DEMO_ITEM_TITLE);
        assert_eq!(item.general_info.price, seed::DEMO_ITEM_PRICE);
        assert_eq!(item.images[0].alt, "Vista frontal");
    }

    #[tokio::test]
    async fn test_known_item_wire_shape() {
        let state = seeded_state().await;
        let resp = get_by_id(State(state), Path(seed::DEMO_ITEM_ID.to_string()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["generalInfo"]["title"], seed::DEMO_ITEM_TITLE);
        assert!(json["ratingDistribution"].is_null());
        assert!(json["paymentInfo"]["paymentMethods"].is_array());
    }

    #[tokio::test]
    async fn test_unknown_item() {
        let state = seeded_state().await;
        let resp = get_by_id(State(state), Path("does-not-exist".to_string()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let json = body_json(resp).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Item not found");
    }

    #[tokio::test]
    async fn test_missing_id_route() {
        let resp = missing_id().await.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_blank_id() {
        let state = seeded_state().await;
        let resp = get_by_id(State(state), Path("   ".to_string()))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = body_json(resp).await;
        assert_eq!(json["error"], "Item ID is required");
    }
}
