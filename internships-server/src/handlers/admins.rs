use crate::error::Error;
use axum::Json;
use internships_core::{admins, Credentials};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Resp {
    email: String,
}

#[tracing::instrument(skip(req), fields(email = %req.email))]
pub async fn create(Json(req): Json<admins::Req>) -> Result<Json<Resp>, Error> {
    let credentials = Credentials::new(req.email, req.password);

    if let Err(errors) = credentials.check() {
        let message = [errors.email, errors.password]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        return Err(Error::custom(&message));
    }

    tracing::info!("created admin");

    Ok(Json(Resp {
        email: credentials.email,
    }))
}

#[cfg(test)]
mod test {
    use super::*;
    use axum::http::StatusCode;

    #[test_log::test(tokio::test)]
    async fn test_success() {
        let req = admins::Req {
            email: "admin@example.com".to_string(),
            password: "longenough".to_string(),
        };

        let Json(resp) = create(Json(req)).await.unwrap();

        assert_eq!(resp.email, "admin@example.com");
    }

    #[test_log::test(tokio::test)]
    async fn test_short_password() {
        let req = admins::Req {
            email: "admin@example.com".to_string(),
            password: "short".to_string(),
        };

        let (status, message) = create(Json(req)).await.unwrap_err().unwrap_custom();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, internships_core::credentials::SHORT_PASSWORD);
    }
}
