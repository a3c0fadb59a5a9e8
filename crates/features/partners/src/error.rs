use rhub_storage::StorageError;
use std::borrow::Cow;

#[rhub_derive::rhub_error]
pub enum PartnerError {
    /// Required submission or lookup input is missing.
    #[error("Validation failed{}: {message}", format_context(context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Code space exhausted{}: {message}", format_context(context))]
    CodeSpaceExhausted { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Persistence failure{}: {source}", format_context(context))]
    Persistence { source: StorageError, context: Option<Cow<'static, str>> },

    #[error("Serialization failure{}: {source}", format_context(context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal partner error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
