use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};
use garde::{Report, Validate};
use std::fmt::Display;
use std::ops::Deref;

use crate::error::ApiError;
use crate::state::AppState;

/// Extractor that validates the payload of the inner extractor before a handler sees it.
#[derive(Debug, Clone)]
pub struct Garde<E>(pub E);

impl<E> Deref for Garde<E> {
    type Target = E;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[derive(Debug)]
pub enum ValidationRejection<V, E> {
    /// Payload was decoded but breaks validation rules
    Valid(V),
    /// Inner extractor failed, e.g. malformed form body
    Inner(E),
}

/// Field errors as `field: message` lines.
pub fn report_messages(report: &Report) -> Vec<String> {
    report
        .iter()
        .map(|(path, error)| {
            let path = path.to_string();
            if path.is_empty() {
                error.to_string()
            } else {
                format!("{path}: {error}")
            }
        })
        .collect()
}

impl<E: Display> IntoResponse for ValidationRejection<Report, E> {
    fn into_response(self) -> Response {
        let messages = match self {
            ValidationRejection::Valid(report) => report_messages(&report),
            ValidationRejection::Inner(e) => vec![e.to_string()],
        };
        ApiError::UnprocessableRequest(messages).into_response()
    }
}

pub type GardeRejection<E> = ValidationRejection<Report, E>;

impl<E> From<Report> for GardeRejection<E> {
    fn from(value: Report) -> Self {
        Self::Valid(value)
    }
}

impl<Extractor, T> FromRequest<AppState> for Garde<Extractor>
where
    T: Validate<Context = ()>,
    Extractor: Deref<Target = T> + FromRequest<AppState>,
    <Extractor as FromRequest<AppState>>::Rejection: Display,
{
    type Rejection = GardeRejection<<Extractor as FromRequest<AppState>>::Rejection>;

    async fn from_request(req: Request, state: &AppState) -> Result<Self, Self::Rejection> {
        let inner = Extractor::from_request(req, state)
            .await
            .map_err(GardeRejection::Inner)?;

        inner.deref().validate()?;
        Ok(Garde(inner))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fyyur_dal::show::CreateShow;
    use garde::Path;
    use http::StatusCode;
    use time::macros::datetime;

    #[test]
    fn test_report_messages() {
        let show = CreateShow {
            artist_id: 0,
            venue_id: 1,
            start_time: datetime!(2035-04-01 20:00:00),
        };
        let report = show.validate().unwrap_err();
        let messages = report_messages(&report);
        assert_eq!(messages.len(), 1);
        assert!(messages[0].starts_with("artist_id: "));

        let mut report = Report::new();
        report.append(Path::empty(), garde::Error::new("broken"));
        assert_eq!(report_messages(&report), vec!["broken".to_string()]);
    }

    #[test]
    fn test_rejection_is_unprocessable() {
        let rejection = GardeRejection::<String>::Inner("missing field `name`".to_string());
        assert_eq!(
            rejection.into_response().status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }
}
