use crate::bail;
use crate::error::Error;
use crate::state::State;
use axum::{
    extract::{self, Path},
    http::StatusCode,
    Json,
};
use serde_json::Value;

static NOT_FOUND_MESSAGE: &str = "internship not found";

static NOT_AN_OBJECT_MESSAGE: &str = "internship must be a JSON object";

#[tracing::instrument(skip(state))]
pub async fn list(extract::State(state): extract::State<State>) -> Json<Vec<Value>> {
    let internships = state.internships().read().await;

    Json(internships.values().cloned().collect())
}

#[tracing::instrument(skip(state))]
pub async fn create(
    extract::State(state): extract::State<State>,
    Json(mut data): Json<Value>,
) -> Result<(StatusCode, Json<Value>), Error> {
    let Some(fields) = data.as_object_mut() else {
        bail!(NOT_AN_OBJECT_MESSAGE)
    };

    let id = state.next_id();
    fields.insert("id".to_string(), Value::String(id.clone()));

    state.internships().write().await.insert(id, data.clone());

    Ok((StatusCode::CREATED, Json(data)))
}

#[tracing::instrument(skip(state))]
pub async fn get_one(
    extract::State(state): extract::State<State>,
    Path(id): Path<String>,
) -> Result<Json<Value>, Error> {
    state
        .internships()
        .read()
        .await
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(Error::not_found(NOT_FOUND_MESSAGE))
}

#[tracing::instrument(skip(state))]
pub async fn update(
    extract::State(state): extract::State<State>,
    Path(id): Path<String>,
    Json(mut data): Json<Value>,
) -> Result<Json<Value>, Error> {
    let Some(fields) = data.as_object_mut() else {
        bail!(NOT_AN_OBJECT_MESSAGE)
    };

    // the ID in the path wins over anything in the body
    fields.insert("id".to_string(), Value::String(id.clone()));

    let mut internships = state.internships().write().await;
    let Some(existing) = internships.get_mut(&id) else {
        bail!(NOT_FOUND_MESSAGE, StatusCode::NOT_FOUND)
    };

    existing.clone_from(&data);

    Ok(Json(data))
}

#[tracing::instrument(skip(state))]
pub async fn remove(
    extract::State(state): extract::State<State>,
    Path(id): Path<String>,
) -> Result<StatusCode, Error> {
    match state.internships().write().await.remove(&id) {
        Some(_) => Ok(StatusCode::NO_CONTENT),
        None => Err(Error::not_found(NOT_FOUND_MESSAGE)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test_log::test(tokio::test)]
    async fn test_create_assigns_id() {
        let state = State::new();

        let (status, Json(created)) = create(
            extract::State(state.clone()),
            Json(json!({"title": "Data Science Intern", "id": "mine"})),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["id"], "1");
        assert_eq!(created["title"], "Data Science Intern");
        assert_eq!(state.internships().read().await.len(), 1);
    }

    #[test_log::test(tokio::test)]
    async fn test_create_rejects_non_objects() {
        let res = create(extract::State(State::new()), Json(json!([1, 2, 3])))
            .await
            .unwrap_err();

        assert_eq!(
            res.unwrap_custom(),
            (StatusCode::BAD_REQUEST, NOT_AN_OBJECT_MESSAGE.to_string())
        );
    }

    #[test_log::test(tokio::test)]
    async fn test_get_missing() {
        let res = get_one(extract::State(State::new()), Path("404".to_string()))
            .await
            .unwrap_err();

        assert_eq!(res.unwrap_custom().0, StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_update_keeps_id() {
        let state = State::new();
        create(extract::State(state.clone()), Json(json!({"title": "old"})))
            .await
            .unwrap();

        let Json(updated) = update(
            extract::State(state.clone()),
            Path("1".to_string()),
            Json(json!({"title": "new", "id": "999"})),
        )
        .await
        .unwrap();

        assert_eq!(updated, json!({"id": "1", "title": "new"}));

        let Json(stored) = get_one(extract::State(state), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(stored, updated);
    }

    #[test_log::test(tokio::test)]
    async fn test_update_missing() {
        let res = update(
            extract::State(State::new()),
            Path("1".to_string()),
            Json(json!({"title": "new"})),
        )
        .await
        .unwrap_err();

        assert_eq!(res.unwrap_custom().0, StatusCode::NOT_FOUND);
    }

    #[test_log::test(tokio::test)]
    async fn test_remove() {
        let state = State::new();
        create(extract::State(state.clone()), Json(json!({"title": "gone soon"})))
            .await
            .unwrap();

        let status = remove(extract::State(state.clone()), Path("1".to_string()))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::NO_CONTENT);

        let res = remove(extract::State(state), Path("1".to_string()))
            .await
            .unwrap_err();
        assert_eq!(res.unwrap_custom().0, StatusCode::NOT_FOUND);
    }
}
