// src/presentation/http/extractors.rs
use crate::{
    application::error::ApplicationError, presentation::http::state::HttpState,
};
use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use super::error::HttpError;

/// JSON body whose rejection is rendered like every other admin error:
/// `success: false` plus an error notice.
#[derive(Debug, Clone)]
pub struct AdminJson<T>(pub T);

impl<T, S> FromRequest<S> for AdminJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Some(app_state) = req.extensions().get::<HttpState>().cloned() else {
            return Err(HttpError::without_state(ApplicationError::infrastructure(
                "application state missing",
            )));
        };

        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(HttpError::from_error(
                ApplicationError::validation(rejection.body_text()),
                &app_state.services.notices,
            )),
        }
    }
}
