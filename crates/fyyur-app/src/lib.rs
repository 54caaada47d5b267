pub mod artist;
pub mod error;
pub mod home;
pub mod notice;
pub mod pages;
pub mod show;
pub mod state;
pub mod validate;
pub mod venue;

use axum::extract::{FromRequest, Request};
use axum_extra::extract::Form;

#[macro_export]
macro_rules! repository_from_request {
    ($repo:ty) => {
        impl axum::extract::FromRequestParts<$crate::state::AppState> for $repo {
            type Rejection = http::StatusCode;

            fn from_request_parts(
                _parts: &mut http::request::Parts,
                state: &$crate::state::AppState,
            ) -> impl std::future::Future<Output = std::result::Result<Self, Self::Rejection>>
                   + core::marker::Send {
                futures::future::ready(std::result::Result::Ok(<$repo>::new(state.pool().clone())))
            }
        }
    };
}

repository_from_request!(fyyur_dal::venue::VenueRepository);
repository_from_request!(fyyur_dal::artist::ArtistRepository);
repository_from_request!(fyyur_dal::show::ShowRepository);

/// Body of the search boxes on venue and artist pages.
///
/// A body that cannot be decoded, or a term longer than [`SearchForm::MAX_LENGTH`],
/// is rejected as a bad request.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

impl SearchForm {
    pub const MAX_LENGTH: usize = 120;

    /// Term as typed, matched literally.
    pub fn term(&self) -> &str {
        &self.search_term
    }
}

impl FromRequest<state::AppState> for SearchForm {
    type Rejection = error::ApiError;

    async fn from_request(
        req: Request,
        state: &state::AppState,
    ) -> Result<Self, Self::Rejection> {
        let Form(form) = Form::<SearchForm>::from_request(req, state)
            .await
            .map_err(|e| error::ApiError::InvalidRequest(e.to_string()))?;
        if form.search_term.chars().count() > Self::MAX_LENGTH {
            return Err(error::ApiError::InvalidRequest(format!(
                "Search term is longer than {} characters",
                Self::MAX_LENGTH
            )));
        }
        Ok(form)
    }
}
