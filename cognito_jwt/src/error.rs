//! Common errors
//!
//! Every failure to construct a token is reported as an [`Error`], which
//! carries only a [`kind`][Error::kind()] drawn from the closed
//! [`ErrorKind`] taxonomy and a stable, human-readable
//! [`message`][Error::message()]. Errors raised by the underlying
//! cryptographic primitives are never surfaced directly.

#![allow(missing_copy_implementations)]

use std::{borrow::Cow, error::Error as StdError, fmt};

use thiserror::Error;

/// The message reported when a token cannot be decoded
pub const DECODE_FAILED: &str = "Invalid or expired token.";

/// The classification of a token failure
///
/// The set of kinds is closed. Each kind has a stable name, available
/// through [`as_str()`][Self::as_str()], that callers may branch on.
///
/// Besides the four token failures reported by `jsonwebtoken`-style
/// verifiers, [`ClaimInvalid`][Self::ClaimInvalid] covers audience,
/// issuer, subject, and JWT ID mismatches and non-numeric time claims, so
/// an exhaustive match must handle it too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The token is not a three-segment base64url/JSON structure
    TokenMalformed,

    /// The cryptographic check failed under the supplied key
    SignatureInvalid,

    /// The token is past its `exp` claim (or its maximum age)
    TokenExpired,

    /// The token is before its `nbf` claim
    TokenNotYetValid,

    /// A claim does not hold an acceptable value
    ClaimInvalid,
}

impl ErrorKind {
    /// The stable name of this kind
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TokenMalformed => "TokenMalformed",
            Self::SignatureInvalid => "SignatureInvalid",
            Self::TokenExpired => "TokenExpired",
            Self::TokenNotYetValid => "TokenNotYetValid",
            Self::ClaimInvalid => "ClaimInvalid",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failure to decode or verify a token
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct Error {
    kind: ErrorKind,
    message: Cow<'static, str>,
}

impl Error {
    /// The classification of this failure
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The stable message describing this failure
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the token was malformed
    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.kind == ErrorKind::TokenMalformed
    }

    /// Whether the signature was rejected
    #[must_use]
    pub fn is_signature_invalid(&self) -> bool {
        self.kind == ErrorKind::SignatureInvalid
    }

    /// Whether the token has expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.kind == ErrorKind::TokenExpired
    }

    /// Whether the token is not yet valid
    #[must_use]
    pub fn is_not_yet_valid(&self) -> bool {
        self.kind == ErrorKind::TokenNotYetValid
    }
}

#[inline]
fn error(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Error {
    Error {
        kind,
        message: message.into(),
    }
}

pub(crate) fn token_malformed(message: impl Into<Cow<'static, str>>) -> Error {
    error(ErrorKind::TokenMalformed, message)
}

pub(crate) fn signature_invalid(message: impl Into<Cow<'static, str>>) -> Error {
    error(ErrorKind::SignatureInvalid, message)
}

pub(crate) fn token_expired(message: impl Into<Cow<'static, str>>) -> Error {
    error(ErrorKind::TokenExpired, message)
}

pub(crate) fn token_not_yet_valid(message: impl Into<Cow<'static, str>>) -> Error {
    error(ErrorKind::TokenNotYetValid, message)
}

pub(crate) fn claim_invalid(message: impl Into<Cow<'static, str>>) -> Error {
    error(ErrorKind::ClaimInvalid, message)
}

/// The key cannot be used with the requested algorithm
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("key incompatible with algorithm '{alg}'")]
pub struct IncompatibleAlgorithm {
    alg: crate::jwa::Algorithm,
}

#[inline]
pub(crate) fn incompatible_algorithm(alg: crate::jwa::Algorithm) -> IncompatibleAlgorithm {
    IncompatibleAlgorithm { alg }
}

/// The provided name could not be matched with supported algorithms
#[derive(Debug, Error)]
#[error("'{alg}' does not match supported algorithms")]
pub struct UnknownAlgorithm {
    alg: String,
}

#[inline]
pub(crate) fn unknown_algorithm(alg: String) -> UnknownAlgorithm {
    UnknownAlgorithm { alg }
}

/// The signature did not match
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("signature mismatch")]
pub struct SignatureMismatch {
    _p: (),
}

pub(crate) const fn signature_mismatch() -> SignatureMismatch {
    SignatureMismatch { _p: () }
}

/// The key material was rejected
#[derive(Debug, Error)]
#[error("key rejected")]
pub struct KeyRejected {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

#[cfg_attr(not(feature = "rsa"), allow(dead_code))]
pub(crate) fn key_rejected(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> KeyRejected {
    KeyRejected {
        source: source.into(),
    }
}

/// An error occurring while verifying a signature with a key
#[derive(Debug, Error)]
pub enum KeyVerifyError {
    /// The key cannot be used with this algorithm
    #[error(transparent)]
    IncompatibleAlgorithm(#[from] IncompatibleAlgorithm),

    /// Signature is invalid
    #[error(transparent)]
    SignatureMismatch(#[from] SignatureMismatch),
}

impl KeyVerifyError {
    /// Whether the error is due to an incompatible algorithm
    #[must_use]
    pub fn is_incompatible_alg(&self) -> bool {
        matches!(self, Self::IncompatibleAlgorithm(_))
    }

    /// Whether the error is due to a signature mismatch
    #[must_use]
    pub fn is_signature_mismatch(&self) -> bool {
        matches!(self, Self::SignatureMismatch(_))
    }
}
