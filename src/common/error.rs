use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppError {
    Unexpected,
    DecodingRequestFailed,

    LeaguesNotFound,
    LeaguesInUse,

    TeamsNotFound,
    TeamsInUse,

    MatchesNotFound,
    /// The match time is not an absolute, offset-qualified timestamp
    MatchesInvalidMatchTime,
    MatchesInvalidStatus,
    /// The match references a league or team that does not exist
    MatchesInvalidReference,
}

impl<E: Into<anyhow::Error>> From<E> for AppError {
    #[track_caller]
    fn from(e: E) -> Self {
        unexpected::<(), E>(e).unwrap_err()
    }
}

/// Whether a store error was raised by a foreign key constraint
pub fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    e.as_database_error().is_some_and(|e| e.is_foreign_key_violation())
}

impl AppError {
    pub const fn code(&self) -> &'static str {
        match self {
            AppError::Unexpected => "unexpected",
            AppError::DecodingRequestFailed => "decoding_request_failed",

            AppError::LeaguesNotFound => "leagues.not_found",
            AppError::LeaguesInUse => "leagues.in_use",

            AppError::TeamsNotFound => "teams.not_found",
            AppError::TeamsInUse => "teams.in_use",

            AppError::MatchesNotFound => "matches.not_found",
            AppError::MatchesInvalidMatchTime => "matches.invalid_match_time",
            AppError::MatchesInvalidStatus => "matches.invalid_status",
            AppError::MatchesInvalidReference => "matches.invalid_reference",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            AppError::Unexpected => "An unexpected error has occurred.",
            AppError::DecodingRequestFailed => "Failed to decode request",

            AppError::LeaguesNotFound => "League not found.",
            AppError::LeaguesInUse => "The league still has matches.",

            AppError::TeamsNotFound => "Team not found.",
            AppError::TeamsInUse => "The team still has matches.",

            AppError::MatchesNotFound => "Match not found.",
            AppError::MatchesInvalidMatchTime => {
                "Match time must be an RFC 3339 timestamp with a timezone offset."
            }
            AppError::MatchesInvalidStatus => {
                "Match status must be one of: soon, live, break, ended."
            }
            AppError::MatchesInvalidReference => {
                "The match references a league or team that does not exist."
            }
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed | AppError::MatchesInvalidStatus => {
                StatusCode::BAD_REQUEST
            }

            AppError::MatchesInvalidMatchTime | AppError::MatchesInvalidReference => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            AppError::LeaguesNotFound | AppError::TeamsNotFound | AppError::MatchesNotFound => {
                StatusCode::NOT_FOUND
            }

            AppError::LeaguesInUse | AppError::TeamsInUse => StatusCode::CONFLICT,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub const fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            code: self.code(),
            message: self.message(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_match_time_is_unprocessable() {
        let (status, Json(body)) = AppError::MatchesInvalidMatchTime.response_parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body.code, "matches.invalid_match_time");
    }

    #[test]
    fn not_found_errors_map_to_404() {
        for e in [
            AppError::LeaguesNotFound,
            AppError::TeamsNotFound,
            AppError::MatchesNotFound,
        ] {
            assert_eq!(e.http_status_code(), StatusCode::NOT_FOUND, "{}", e.code());
        }
    }

    #[test]
    fn foreign_errors_collapse_into_unexpected() {
        let e: AppError = anyhow::anyhow!("connection reset").into();
        assert_eq!(e, AppError::Unexpected);
        assert_eq!(e.http_status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
