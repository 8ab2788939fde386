use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use q2bank_core::AppError;
use q2bank_models::FieldOrder;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// First failing rule, taking fields in `T`'s declaration order.
fn first_error<T: FieldOrder>(errors: &ValidationErrors) -> String {
    let field_errors = errors.field_errors();

    T::FIELDS
        .iter()
        .find_map(|field| {
            field_errors
                .get(*field)
                .and_then(|errors| errors.first())
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map(|msg| msg.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field))
                })
        })
        .unwrap_or_else(|| "Invalid request body".to_string())
}

/// Converts `validator` failures into a 400 naming the first offending field.
pub fn validation_error<T: FieldOrder>(errors: &ValidationErrors) -> AppError {
    AppError::validation(anyhow!("{}", first_error::<T>(errors)))
}

fn rejection_error(rejection: &JsonRejection) -> AppError {
    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::validation(anyhow!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::validation(anyhow!("Invalid field type in request"));
    }

    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::validation(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    AppError::validation(anyhow!("Invalid request body"))
}

/// JSON body extractor that also runs `validator` rules.
///
/// Every rejection is a 400: decoding problems name the missing field when
/// serde reports one, and rule failures report the first field that fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + FieldOrder,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| rejection_error(&rejection))?;

        value
            .validate()
            .map_err(|errors| validation_error::<T>(&errors))?;

        Ok(ValidatedJson(value))
    }
}
