use rhub_storage::StorageError;
use std::borrow::Cow;

#[rhub_derive::rhub_error]
pub enum SheetError {
    /// The request body is not a usable row.
    #[error("Invalid payload{}: {message}", format_context(context))]
    Payload { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Sheet storage failure{}: {source}", format_context(context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },

    #[error("Sheet serialization failure{}: {source}", format_context(context))]
    Serialization { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal sheet error{}: {message}", format_context(context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
