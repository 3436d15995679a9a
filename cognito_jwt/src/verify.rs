//! Signature and claim verification
//!
//! [`verify()`] checks a compact token against caller-supplied key
//! material and a set of [`VerifyOptions`]. On success it produces the
//! same [`Parts`] that [`compact::decode()`] would; on failure it produces
//! an [`Error`][error::Error] describing the first check that failed.
//!
//! Checks are made in a fixed order:
//!
//! 1. the token is present and has three segments
//! 2. the header and payload are JSON objects
//! 3. a signature is present
//! 4. the `alg` header names an approved algorithm the key supports
//! 5. the signature matches
//! 6. `nbf`, then `exp`
//! 7. audience, issuer, subject and JWT ID
//! 8. maximum age, measured from `iat`
//!
//! Time checks are skipped for claims that are absent from the payload.

use std::time::Duration;

use aliri_base64::Base64Url;
use aliri_braid::braid;
use aliri_clock::{Clock, System, UnixTime};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::{
    compact::{self, Malformed, Parts},
    error, jwa, jws,
};

/// An audience
#[braid(serde, ref_doc = "A borrowed reference to an [`Audience`]")]
pub struct Audience;

/// An issuer of JWTs
#[braid(serde, ref_doc = "A borrowed reference to an [`Issuer`]")]
pub struct Issuer;

/// The subject of a JWT
#[braid(serde, ref_doc = "A borrowed reference to a [`Subject`]")]
pub struct Subject;

/// Options controlling which tokens [`verify()`] accepts
///
/// The default options accept any well-signed token that is within its
/// validity period, using any algorithm the key supports.
///
/// Options can be built up with the builder methods or deserialized from
/// a camelCase JSON object:
///
/// ```
/// use cognito_jwt::verify::{Audience, VerifyOptions};
///
/// let options: VerifyOptions = serde_json::from_str(
///     r#"{ "audience": "my_client", "clockTolerance": 30 }"#,
/// )?;
///
/// let built = VerifyOptions::default()
///     .add_allowed_audience(Audience::from_static("my_client"))
///     .with_clock_tolerance_secs(30);
///
/// assert_eq!(options, built);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
#[must_use]
pub struct VerifyOptions {
    ignore_expiration: bool,
    ignore_not_before: bool,
    #[serde(deserialize_with = "one_or_many")]
    audience: Vec<Audience>,
    #[serde(deserialize_with = "one_or_many")]
    issuer: Vec<Issuer>,
    subject: Option<Subject>,
    #[serde(rename = "jwtid")]
    jwt_id: Option<String>,
    #[serde(deserialize_with = "seconds")]
    clock_tolerance: Duration,
    #[serde(deserialize_with = "optional_seconds")]
    max_age: Option<Duration>,
    algorithms: Vec<jwa::Algorithm>,
}

impl VerifyOptions {
    /// Skips expiration checks
    #[inline]
    pub fn ignore_expiration(self) -> Self {
        Self {
            ignore_expiration: true,
            ..self
        }
    }

    /// Skips "not valid before" checks
    #[inline]
    pub fn ignore_not_before(self) -> Self {
        Self {
            ignore_not_before: true,
            ..self
        }
    }

    /// Adds a single audience to the set of allowed audiences
    #[inline]
    pub fn add_allowed_audience(self, audience: Audience) -> Self {
        let mut this = self;
        this.audience.push(audience);
        this
    }

    /// Adds multiple audiences to the set of allowed audiences
    #[inline]
    pub fn extend_allowed_audiences<I: IntoIterator<Item = Audience>>(self, aud: I) -> Self {
        let mut this = self;
        this.audience.extend(aud);
        this
    }

    /// Adds a single issuer to the set of allowed issuers
    #[inline]
    pub fn add_allowed_issuer(self, issuer: Issuer) -> Self {
        let mut this = self;
        this.issuer.push(issuer);
        this
    }

    /// Adds multiple issuers to the set of allowed issuers
    #[inline]
    pub fn extend_allowed_issuers<I: IntoIterator<Item = Issuer>>(self, iss: I) -> Self {
        let mut this = self;
        this.issuer.extend(iss);
        this
    }

    /// Requires that the `sub` claim matches a particular subject
    #[inline]
    pub fn require_subject(self, subject: Subject) -> Self {
        Self {
            subject: Some(subject),
            ..self
        }
    }

    /// Requires that the `jti` claim matches a particular JWT ID
    #[inline]
    pub fn require_jwt_id(self, jwt_id: impl Into<String>) -> Self {
        Self {
            jwt_id: Some(jwt_id.into()),
            ..self
        }
    }

    /// Allows a grace period for time-based checks
    ///
    /// Applies to the "not before", "expires", and maximum age checks.
    #[inline]
    pub fn with_clock_tolerance(self, clock_tolerance: Duration) -> Self {
        Self {
            clock_tolerance,
            ..self
        }
    }

    /// Allows a grace period (in seconds) for time-based checks
    ///
    /// Applies to the "not before", "expires", and maximum age checks.
    #[inline]
    pub fn with_clock_tolerance_secs(self, clock_tolerance: u64) -> Self {
        self.with_clock_tolerance(Duration::from_secs(clock_tolerance))
    }

    /// Rejects tokens issued longer ago than `max_age`
    ///
    /// Tokens must carry an `iat` claim when a maximum age is set.
    #[inline]
    pub fn with_max_age(self, max_age: Duration) -> Self {
        Self {
            max_age: Some(max_age),
            ..self
        }
    }

    /// Rejects tokens issued longer ago than `max_age` seconds
    #[inline]
    pub fn with_max_age_secs(self, max_age: u64) -> Self {
        self.with_max_age(Duration::from_secs(max_age))
    }

    /// Approves a single algorithm
    ///
    /// Once any algorithm is approved, tokens signed with algorithms that
    /// have not been approved are rejected.
    #[inline]
    pub fn add_approved_algorithm(self, alg: jwa::Algorithm) -> Self {
        let mut this = self;
        this.algorithms.push(alg);
        this
    }

    /// Approves multiple algorithms
    #[inline]
    pub fn extend_approved_algorithms<I: IntoIterator<Item = jwa::Algorithm>>(
        self,
        alg: I,
    ) -> Self {
        let mut this = self;
        this.algorithms.extend(alg);
        this
    }

    fn approves(&self, alg: jwa::Algorithm) -> bool {
        self.algorithms.is_empty() || self.algorithms.contains(&alg)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(x) => vec![x],
        OneOrMany::Many(v) => v,
    })
}

fn seconds<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    u64::deserialize(deserializer).map(Duration::from_secs)
}

fn optional_seconds<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Duration>, D::Error> {
    Option::<u64>::deserialize(deserializer).map(|s| s.map(Duration::from_secs))
}

/// Verifies a compact token against the system clock
///
/// # Errors
///
/// Returns an error describing the first check the token fails. See the
/// [module documentation][self] for the order of checks.
pub fn verify<K>(token: &str, key: &K, options: &VerifyOptions) -> Result<Parts, error::Error>
where
    K: jws::Verifier + ?Sized,
{
    verify_with_clock(token, key, options, &System)
}

/// Verifies a compact token against the provided clock
///
/// # Errors
///
/// Returns an error describing the first check the token fails. See the
/// [module documentation][self] for the order of checks.
pub fn verify_with_clock<K, C>(
    token: &str,
    key: &K,
    options: &VerifyOptions,
    clock: &C,
) -> Result<Parts, error::Error>
where
    K: jws::Verifier + ?Sized,
    C: Clock + ?Sized,
{
    let result = verify_at(token, key, options, clock.now());

    #[cfg(feature = "tracing")]
    match &result {
        Ok(_) => tracing::trace!("token verified"),
        Err(e) => tracing::debug!(kind = %e.kind(), reason = %e, "token rejected"),
    }

    result
}

fn verify_at<K>(
    token: &str,
    key: &K,
    options: &VerifyOptions,
    now: UnixTime,
) -> Result<Parts, error::Error>
where
    K: jws::Verifier + ?Sized,
{
    if token.is_empty() {
        return Err(error::token_malformed("jwt must be provided"));
    }

    let segments = compact::split(token).map_err(|reason| match reason {
        Malformed::Segments => error::token_malformed("jwt malformed"),
        _ => error::token_malformed("invalid token"),
    })?;

    let parts =
        compact::decode_segments(segments).map_err(|_| error::token_malformed("invalid token"))?;

    if parts.signature.is_empty() {
        return Err(error::signature_invalid("jwt signature is required"));
    }

    let alg = parts
        .header
        .get("alg")
        .and_then(Value::as_str)
        .and_then(|alg| alg.parse::<jwa::Algorithm>().ok())
        .filter(|&alg| options.approves(alg) && key.can_verify(alg))
        .ok_or_else(|| error::signature_invalid("invalid algorithm"))?;

    let signature = Base64Url::from_encoded(&parts.signature)
        .map_err(|_| error::signature_invalid("invalid signature"))?;

    key.verify(alg, segments.message(token).as_bytes(), signature.as_slice())
        .map_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(%alg, error = %_e, "signature verification failed");

            error::signature_invalid("invalid signature")
        })?;

    validate_claims(&parts.payload, options, now)?;

    Ok(parts)
}

fn numeric_claim(
    payload: &Map<String, Value>,
    name: &str,
    invalid: &'static str,
) -> Result<Option<f64>, error::Error> {
    payload
        .get(name)
        .map(|v| v.as_f64().ok_or_else(|| error::claim_invalid(invalid)))
        .transpose()
}

fn expected<'a>(values: impl Iterator<Item = &'a str>, separator: &str) -> String {
    values.collect::<Vec<_>>().join(separator)
}

fn validate_claims(
    payload: &Map<String, Value>,
    options: &VerifyOptions,
    now: UnixTime,
) -> Result<(), error::Error> {
    #[allow(clippy::cast_precision_loss)]
    let now = now.0 as f64;
    let tolerance = options.clock_tolerance.as_secs_f64();

    if !options.ignore_not_before {
        if let Some(nbf) = numeric_claim(payload, "nbf", "invalid nbf value")? {
            if nbf > now + tolerance {
                return Err(error::token_not_yet_valid("jwt not active"));
            }
        }
    }

    if !options.ignore_expiration {
        if let Some(exp) = numeric_claim(payload, "exp", "invalid exp value")? {
            if now >= exp + tolerance {
                return Err(error::token_expired("jwt expired"));
            }
        }
    }

    if !options.audience.is_empty() {
        let allowed = |aud: &str| options.audience.iter().any(|a| a.as_str() == aud);
        let found = match payload.get("aud") {
            Some(Value::String(aud)) => allowed(aud),
            Some(Value::Array(auds)) => auds.iter().filter_map(Value::as_str).any(allowed),
            _ => false,
        };

        if !found {
            return Err(error::claim_invalid(format!(
                "jwt audience invalid. expected: {}",
                expected(options.audience.iter().map(|a| a.as_str()), " or ")
            )));
        }
    }

    if !options.issuer.is_empty() {
        let iss = payload.get("iss").and_then(Value::as_str);
        if !options.issuer.iter().any(|i| Some(i.as_str()) == iss) {
            return Err(error::claim_invalid(format!(
                "jwt issuer invalid. expected: {}",
                expected(options.issuer.iter().map(|i| i.as_str()), ",")
            )));
        }
    }

    if let Some(subject) = &options.subject {
        if payload.get("sub").and_then(Value::as_str) != Some(subject.as_str()) {
            return Err(error::claim_invalid(format!(
                "jwt subject invalid. expected: {}",
                subject
            )));
        }
    }

    if let Some(jwt_id) = &options.jwt_id {
        if payload.get("jti").and_then(Value::as_str) != Some(jwt_id.as_str()) {
            return Err(error::claim_invalid(format!(
                "jwt jwtid invalid. expected: {}",
                jwt_id
            )));
        }
    }

    if let Some(max_age) = options.max_age {
        let iat = payload
            .get("iat")
            .and_then(Value::as_f64)
            .ok_or_else(|| error::claim_invalid("iat required when maxAge is specified"))?;

        if now >= iat + max_age.as_secs_f64() + tolerance {
            return Err(error::token_expired("maxAge exceeded"));
        }
    }

    Ok(())
}
