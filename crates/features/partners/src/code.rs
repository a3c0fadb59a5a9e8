//! Partner code generation.
//!
//! A code is the marker `P` followed by seven symbols from
//! [`CODE_ALPHABET`], e.g. `P7K4X2M9`. With 32^7 possible suffixes,
//! collisions are rare, so uniqueness is enforced by rejection sampling.

use crate::error::PartnerError;
use fxhash::FxHashSet;
use rhub_domain::constants::{CODE_MARKER, CODE_RANDOM_LEN};
use rhub_kernel::{CODE_ALPHABET, safe_token};

/// Retries before [`generate_unique_code`] gives up.
pub const MAX_CODE_ATTEMPTS: usize = 128;

/// Draws one code. Not cryptographically secure.
#[must_use]
pub fn generate_code() -> String {
    let mut code = String::with_capacity(1 + CODE_RANDOM_LEN);
    code.push(CODE_MARKER);
    code.push_str(&safe_token!(CODE_RANDOM_LEN));
    code
}

/// Draws codes until one is not in `existing`.
///
/// # Errors
/// [`PartnerError::CodeSpaceExhausted`] after [`MAX_CODE_ATTEMPTS`] collisions.
pub fn generate_unique_code<'a, I>(existing: I) -> Result<String, PartnerError>
where
    I: IntoIterator<Item = &'a str>,
{
    generate_unique_code_with(existing, generate_code)
}

/// [`generate_unique_code`] with an injected generator.
///
/// # Errors
/// [`PartnerError::CodeSpaceExhausted`] after [`MAX_CODE_ATTEMPTS`] collisions.
pub fn generate_unique_code_with<'a, I, G>(existing: I, mut generate: G) -> Result<String, PartnerError>
where
    I: IntoIterator<Item = &'a str>,
    G: FnMut() -> String,
{
    let taken: FxHashSet<&str> = existing.into_iter().collect();

    for _ in 0..MAX_CODE_ATTEMPTS {
        let candidate = generate();
        if !taken.contains(candidate.as_str()) {
            return Ok(candidate);
        }
    }

    Err(PartnerError::CodeSpaceExhausted {
        message: format!("no free code after {MAX_CODE_ATTEMPTS} attempts").into(),
        context: Some(format!("{} codes issued", taken.len()).into()),
    })
}

/// Whether `code` has the shape produced by [`generate_code`].
#[must_use]
pub fn is_well_formed(code: &str) -> bool {
    let mut chars = code.chars();
    chars.next() == Some(CODE_MARKER)
        && code.chars().count() == 1 + CODE_RANDOM_LEN
        && chars.all(|c| CODE_ALPHABET.contains(&c))
}
