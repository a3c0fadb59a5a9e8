use std::borrow::Cow;

/// Why a record did not reach the remote sink. Never surfaced to submitters.
#[rhub_derive::rhub_error]
pub enum MirrorError {
    /// No sink URL is configured (or it is still the placeholder).
    #[error("Mirror not configured{}: {message}", format_context(context))]
    NotConfigured { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Invalid mirror configuration{}: {message}", format_context(context))]
    InvalidConfig { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Mirror transport error{}: {source}", format_context(context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Mirror timed out{}: {message}", format_context(context))]
    Timeout { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The sink answered with a non-success status.
    #[error("Mirror rejected the record{}: {message}", format_context(context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
