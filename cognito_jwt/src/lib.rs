//! This crate decodes and verifies the JSON Web Tokens (JWT) issued by
//! OAuth2 and OpenID Connect providers, with a focus on AWS Cognito user
//! pools.
//!
//! A token is viewed through one of several types, each of which exposes
//! the claims defined for that kind of token as typed accessors:
//!
//! * [`JsonWebToken`]: raw claims only
//! * [`AccessToken`]: registered claims, [RFC7519][]
//! * [`IdToken`]: OpenID Connect standard claims, [OIDC Core][]
//! * [`CognitoAccessToken`] and [`CognitoIdToken`]: with the claims added
//!   by Cognito
//!
//! Tokens can be decoded without any authenticity check, or verified
//! against an HMAC secret or RSA public key supplied by the caller. This
//! crate does not fetch or rotate keys.
//!
//! [RFC7519]: https://tools.ietf.org/html/rfc7519
//! [OIDC Core]: https://openid.net/specs/openid-connect-core-1_0.html
//!
//! # Example
//!
//! ```
//! use cognito_jwt::{claims::*, verify::Issuer, CognitoAccessToken, VerificationKey, VerifyOptions};
//!
//! let token = concat!(
//!     "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.",
//!     "eyJzdWIiOiJhbGljZSIsImlzcyI6ImF1dGhvcml0eSIsImNvZ25pdG86Z3JvdXBzIjpbImFkbWlucyJdLCJzY29wZSI6Im9wZW5pZCBwcm9maWxlIn0.",
//!     "yzqGAZ-LZ8lMzGs4zoIOcvAl-qmHpeo1Cfdayr4h-Fs"
//! );
//!
//! let key = VerificationKey::hmac("test");
//! let options = VerifyOptions::default().add_allowed_issuer(Issuer::from_static("authority"));
//!
//! let token = CognitoAccessToken::verify(token, &key, &options)
//!     .expect("JWT was invalid");
//!
//! assert_eq!(token.sub(), Some("alice"));
//! assert_eq!(token.cognito_groups(), Some(vec!["admins"]));
//! assert_eq!(token.scopes(), ["openid", "profile"]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    unused_import_braces,
    unused_imports,
    unused_qualifications
)]
#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_must_use
)]

pub mod claims;
pub mod compact;
pub mod error;
pub mod jwa;
pub mod jws;
mod key;
mod token;
pub mod verify;


#[doc(inline)]
pub use error::{Error, ErrorKind};
#[doc(inline)]
pub use key::VerificationKey;
#[doc(inline)]
pub use token::{
    AccessToken, CognitoAccessToken, CognitoIdToken, IdToken, JsonWebToken, TokenKind,
};
#[doc(inline)]
pub use verify::{Audience, Issuer, Subject, VerifyOptions};
