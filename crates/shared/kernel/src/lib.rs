//! Kernel utilities shared across slices.
//! Keep this crate lightweight: config loading, partner code tokens and,
//! behind the `server` feature, the HTTP state and system routes.
//!
//! ## Code tokens
//! `safe_token!` draws from [`CODE_ALPHABET`], which drops the look-alike
//! glyphs `0`, `1`, `O` and `I`:
//! ```rust
//! # use rhub_kernel::safe_token;
//! let token = safe_token!(7);
//! assert_eq!(token.len(), 7);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use rhub_kernel::config::load_config;
//! use rhub_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("rhub.toml")).unwrap();
//! ```
pub mod config;
#[cfg(feature = "server")]
pub mod server;

/// Upper-case letters and digits without `0`, `1`, `O` and `I` (32 symbols).
pub const CODE_ALPHABET: &[char; 32] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z', '2', '3', '4', '5', '6', '7', '8', '9',
];

pub use nanoid::nanoid;
pub use rhub_domain as domain;

/// Random token over [`CODE_ALPHABET`]. Not cryptographically secure by contract.
#[macro_export]
macro_rules! safe_token {
    () => {
        $crate::nanoid!(7, $crate::CODE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::CODE_ALPHABET)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_no_ambiguous_glyphs() {
        for ambiguous in ['0', '1', 'O', 'I'] {
            assert!(!CODE_ALPHABET.contains(&ambiguous), "{ambiguous} must be excluded");
        }
        let mut sorted = CODE_ALPHABET.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 32);
    }

    #[test]
    fn tokens_use_the_code_alphabet() {
        let token = safe_token!();
        assert_eq!(token.chars().count(), 7);
        assert!(token.chars().all(|c| CODE_ALPHABET.contains(&c)));
        assert_eq!(safe_token!(12).len(), 12);
    }
}
