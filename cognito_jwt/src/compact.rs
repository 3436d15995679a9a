//! The JWS compact serialization
//!
//! A compact token is three base64url-encoded segments separated by `.`:
//!
//! ```text
//! base64url(header).base64url(payload).signature
//! ```
//!
//! The header and payload segments hold JSON objects. The signature is
//! kept as the raw, still encoded, text of the third segment.

use std::fmt;

use aliri_base64::Base64Url;
use serde_json::{Map, Value};

use crate::error;

/// The decoded sections of a compact token
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Parts {
    /// The decoded header
    pub header: Map<String, Value>,

    /// The decoded payload
    pub payload: Map<String, Value>,

    /// The raw base64url-encoded signature
    pub signature: String,
}

impl Parts {
    /// Whether these are the parts of the empty token
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.header.is_empty() && self.payload.is_empty() && self.signature.is_empty()
    }

    /// Re-encodes the parts into their compact serialization
    ///
    /// The header and payload are written as compact JSON in their
    /// original key order. A token produced by a compact JSON encoder
    /// therefore round-trips exactly. The empty parts encode to the
    /// empty string.
    #[must_use]
    pub fn to_compact(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        format!(
            "{}.{}.{}",
            encode_segment(&self.header),
            encode_segment(&self.payload),
            self.signature
        )
    }
}

fn encode_segment(map: &Map<String, Value>) -> Base64Url {
    Base64Url::from_raw(serde_json::to_vec(map).expect("JSON objects always serialize"))
}

/// The reason a compact token could not be parsed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Malformed {
    Segments,
    Header,
    Payload,
    Signature,
}

impl fmt::Display for Malformed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Segments => "token does not have three segments",
            Self::Header => "header is not a base64url-encoded JSON object",
            Self::Payload => "payload is not a base64url-encoded JSON object",
            Self::Signature => "signature is not base64url-encoded",
        };

        f.write_str(s)
    }
}

/// The encoded segments of a compact token
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub(crate) header: &'a str,
    pub(crate) payload: &'a str,
    pub(crate) signature: &'a str,
}

impl<'a> Segments<'a> {
    /// The signed message: the header and payload segments joined by `.`
    pub(crate) fn message(&self, token: &'a str) -> &'a str {
        &token[..self.header.len() + 1 + self.payload.len()]
    }
}

macro_rules! expect_three {
    ($iter:expr) => {{
        let mut i = $iter;
        match (i.next(), i.next(), i.next(), i.next()) {
            (Some(first), Some(second), Some(third), None) => Some((first, second, third)),
            _ => None,
        }
    }};
}

fn is_base64url(segment: &str) -> bool {
    segment
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

pub(crate) fn split(token: &str) -> Result<Segments<'_>, Malformed> {
    let (header, payload, signature) = expect_three!(token.split('.')).ok_or(Malformed::Segments)?;

    if header.is_empty() {
        return Err(Malformed::Header);
    }

    if payload.is_empty() {
        return Err(Malformed::Payload);
    }

    if !is_base64url(signature) {
        return Err(Malformed::Signature);
    }

    Ok(Segments {
        header,
        payload,
        signature,
    })
}

fn decode_object(segment: &str, reason: Malformed) -> Result<Map<String, Value>, Malformed> {
    let raw = Base64Url::from_encoded(segment).map_err(|_| reason)?;
    serde_json::from_slice(raw.as_slice()).map_err(|_| reason)
}

pub(crate) fn decode_segments(segments: Segments) -> Result<Parts, Malformed> {
    Ok(Parts {
        header: decode_object(segments.header, Malformed::Header)?,
        payload: decode_object(segments.payload, Malformed::Payload)?,
        signature: segments.signature.to_owned(),
    })
}

pub(crate) fn parse(token: &str) -> Result<Parts, Malformed> {
    decode_segments(split(token)?)
}

/// Decodes a compact token without verifying it
///
/// The empty string is accepted and yields empty [`Parts`], so that
/// callers without a token need not handle an error.
///
/// **WARNING:** *No authenticity check is performed.* An adversary can
/// place arbitrary data into the header and payload of a token. To verify
/// a token, use [`verify()`][crate::verify::verify()].
///
/// # Errors
///
/// Returns a [`TokenMalformed`][error::ErrorKind::TokenMalformed] error if
/// a non-empty token does not have exactly three segments, if the header
/// or payload is not base64url-encoded JSON object, or if the signature
/// holds characters outside of the base64url alphabet.
pub fn decode(token: &str) -> Result<Parts, error::Error> {
    if token.is_empty() {
        return Ok(Parts::default());
    }

    parse(token).map_err(|_reason| {
        #[cfg(feature = "tracing")]
        tracing::debug!(reason = %_reason, "unable to decode token");

        error::token_malformed(error::DECODE_FAILED)
    })
}

#[cfg(test)]
mod tests {
    use color_eyre::Result;
    use serde_json::json;

    use super::*;
    use crate::{error::ErrorKind, test};

    #[test]
    fn empty_token_decodes_to_empty_parts() -> Result<()> {
        let parts = decode("")?;
        assert!(parts.header.is_empty());
        assert!(parts.payload.is_empty());
        assert_eq!(parts.signature, "");
        assert_eq!(parts.to_compact(), "");
        Ok(())
    }

    #[test]
    fn bogus_token_is_malformed() {
        let err = decode("A1234BogusTokenString").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TokenMalformed);
        assert_eq!(err.message(), "Invalid or expired token.");
    }

    #[test]
    fn wrong_segment_counts_are_malformed() {
        let two = test::cognito::ACCESS_TOKEN.rsplitn(2, '.').nth(1).unwrap();
        let four = format!("{}.extra", test::cognito::ACCESS_TOKEN);

        assert!(decode(two).unwrap_err().is_malformed());
        assert!(decode(&four).unwrap_err().is_malformed());
        assert!(decode("..").unwrap_err().is_malformed());
        assert_eq!(parse(".e30.sig"), Err(Malformed::Header));
    }

    #[test]
    fn bad_base64_or_json_is_malformed() {
        assert_eq!(parse("e30.!!!.sig"), Err(Malformed::Payload));
        // `bm90IGpzb24` is "not json"
        assert_eq!(parse("bm90IGpzb24.e30.sig"), Err(Malformed::Header));
        // `WzFd` is "[1]", which is JSON but not an object
        assert_eq!(parse("e30.WzFd.sig"), Err(Malformed::Payload));
        assert_eq!(parse("e30.e30.s+g"), Err(Malformed::Signature));
    }

    #[test]
    fn signature_is_kept_encoded_and_may_be_empty() -> Result<()> {
        let parts = decode("e30.e30.")?;
        assert_eq!(parts.signature, "");

        let parts = decode(test::cognito::ACCESS_TOKEN)?;
        let signature = test::cognito::ACCESS_TOKEN.rsplit('.').next().unwrap();
        assert_eq!(parts.signature, signature);
        Ok(())
    }

    #[test]
    fn decodes_cognito_header_and_payload() -> Result<()> {
        let parts = decode(test::cognito::ACCESS_TOKEN)?;
        assert_eq!(
            Value::Object(parts.header),
            json!({"kid": "6iqwBUp3ys6BVtcjTF9Lo4J98BgwiVxPE82Rdwv+LEE=", "alg": "RS256"})
        );
        assert_eq!(parts.payload["username"], "aloptima");
        assert_eq!(parts.payload["exp"], 1_510_215_138);
        Ok(())
    }

    #[test]
    fn compact_encoding_round_trips() -> Result<()> {
        let token = test::compact_token(
            &json!({"alg": "HS256", "typ": "JWT"}),
            &json!({"sub": "abc", "cognito:groups": ["b", "a"], "exp": 10}),
            "c2lnbmF0dXJl",
        );

        assert_eq!(decode(&token)?.to_compact(), token);
        Ok(())
    }

    #[test]
    fn payload_keeps_claim_order() -> Result<()> {
        let parts = decode(test::cognito::ACCESS_TOKEN)?;
        let keys: Vec<_> = parts.payload.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["sub", "token_use", "scope", "iss", "exp", "iat", "jti", "client_id", "username"]
        );
        Ok(())
    }

    #[test]
    fn message_covers_header_and_payload() -> Result<()> {
        let token = "aGVhZA.cGF5bG9hZA.c2ln";
        let segments = split(token).map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
        assert_eq!(segments.message(token), "aGVhZA.cGF5bG9hZA");
        assert_eq!(segments.signature, "c2ln");
        Ok(())
    }
}
