use std::{fmt, ops::Deref, str::FromStr};

use aliri_clock::{Clock, System};
use serde_json::{Map, Value};

use crate::{
    claims::{
        ClaimSpec, Claims, CognitoAccessClaims, CognitoIdClaims, RegisteredClaims, StandardClaims,
        COGNITO_ACCESS_CLAIMS, COGNITO_ID_CLAIMS, REGISTERED_CLAIMS, STANDARD_CLAIMS,
    },
    compact::{self, Parts},
    error, jws,
    key::VerificationKey,
    verify::{self, VerifyOptions},
};

/// The kind of token a [`JsonWebToken`] is viewed as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A token with no named claims
    Generic,

    /// An access token, with the IETF registered claims
    Access,

    /// An OpenID Connect ID token, with the standard claims
    Id,

    /// An access token issued by a Cognito user pool
    CognitoAccess,

    /// An ID token issued by a Cognito user pool
    CognitoId,
}

impl TokenKind {
    /// The claim sets with named accessors on tokens of this kind
    #[must_use]
    pub fn claim_sets(self) -> &'static [&'static [ClaimSpec]] {
        match self {
            Self::Generic => &[],
            Self::Access => &[REGISTERED_CLAIMS],
            Self::Id => &[STANDARD_CLAIMS],
            Self::CognitoAccess => &[REGISTERED_CLAIMS, COGNITO_ACCESS_CLAIMS],
            Self::CognitoId => &[STANDARD_CLAIMS, COGNITO_ID_CLAIMS],
        }
    }

    /// Whether tokens of this kind have a named accessor for `claim`
    #[must_use]
    pub fn recognizes(self, claim: &str) -> bool {
        self.claim_sets()
            .iter()
            .flat_map(|set| set.iter())
            .any(|spec| spec.claim == claim)
    }
}

/// A decoded JSON Web Token
///
/// A token is either decoded without any authenticity check, with
/// [`decode()`][Self::decode()], or verified against key material, with
/// [`verify()`][Self::verify()]. Either way, construction is all or
/// nothing: a token that fails to decode or verify is never produced.
///
/// Once constructed, a token is immutable.
///
/// The [`Debug`] output of a token never includes the raw token or its
/// signature.
#[derive(Clone, PartialEq, Eq)]
#[must_use]
pub struct JsonWebToken {
    token: String,
    header: Map<String, Value>,
    payload: Map<String, Value>,
    signature: String,
    kind: TokenKind,
}

impl fmt::Debug for JsonWebToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("JsonWebToken")
            .field("token", &"***JWT***")
            .field("header", &self.header)
            .field("payload", &self.payload)
            .field("signature", &"***")
            .field("kind", &self.kind)
            .finish()
    }
}

impl JsonWebToken {
    fn from_parts(token: String, parts: Parts, kind: TokenKind) -> Self {
        Self {
            token,
            header: parts.header,
            payload: parts.payload,
            signature: parts.signature,
            kind,
        }
    }

    fn decode_as(token: String, kind: TokenKind) -> Result<Self, error::Error> {
        let parts = compact::decode(&token)?;

        #[cfg(feature = "tracing")]
        tracing::trace!(?kind, "token decoded");

        Ok(Self::from_parts(token, parts, kind))
    }

    fn verify_as<K, C>(
        token: String,
        key: &K,
        options: &VerifyOptions,
        clock: &C,
        kind: TokenKind,
    ) -> Result<Self, error::Error>
    where
        K: jws::Verifier + ?Sized,
        C: Clock + ?Sized,
    {
        let parts = verify::verify_with_clock(&token, key, options, clock)?;
        Ok(Self::from_parts(token, parts, kind))
    }

    fn new_as(
        token: String,
        key: Option<&VerificationKey>,
        options: &VerifyOptions,
        kind: TokenKind,
    ) -> Result<Self, error::Error> {
        match key {
            Some(key) => Self::verify_as(token, key, options, &System, kind),
            None => Self::decode_as(token, kind),
        }
    }

    /// Decodes a token without verifying it
    ///
    /// The empty string decodes to a token with an empty header, payload
    /// and signature.
    ///
    /// **WARNING:** *No authenticity check is performed.* Claims read from
    /// a token decoded this way cannot be trusted.
    ///
    /// # Errors
    ///
    /// Returns a [`TokenMalformed`][error::ErrorKind::TokenMalformed] error
    /// if a non-empty token cannot be decoded.
    pub fn decode(token: impl Into<String>) -> Result<Self, error::Error> {
        Self::decode_as(token.into(), TokenKind::Generic)
    }

    /// Verifies a token against the provided key, using the system clock
    ///
    /// # Errors
    ///
    /// Returns an error describing the first verification check the token
    /// fails.
    pub fn verify<K>(
        token: impl Into<String>,
        key: &K,
        options: &VerifyOptions,
    ) -> Result<Self, error::Error>
    where
        K: jws::Verifier + ?Sized,
    {
        Self::verify_as(token.into(), key, options, &System, TokenKind::Generic)
    }

    /// Verifies a token against the provided key and clock
    ///
    /// # Errors
    ///
    /// Returns an error describing the first verification check the token
    /// fails.
    pub fn verify_with_clock<K, C>(
        token: impl Into<String>,
        key: &K,
        options: &VerifyOptions,
        clock: &C,
    ) -> Result<Self, error::Error>
    where
        K: jws::Verifier + ?Sized,
        C: Clock + ?Sized,
    {
        Self::verify_as(token.into(), key, options, clock, TokenKind::Generic)
    }

    /// Verifies the token if a key is provided, otherwise decodes it
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be decoded or, when a key is
    /// provided, fails verification.
    pub fn new(
        token: impl Into<String>,
        key: Option<&VerificationKey>,
        options: &VerifyOptions,
    ) -> Result<Self, error::Error> {
        Self::new_as(token.into(), key, options, TokenKind::Generic)
    }

    fn with_kind(self, kind: TokenKind) -> Self {
        Self { kind, ..self }
    }

    /// The raw compact serialization the token was constructed from
    #[inline]
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Alias of [`token()`][Self::token()]
    #[inline]
    #[must_use]
    pub fn raw_token(&self) -> &str {
        &self.token
    }

    /// The decoded header
    #[inline]
    #[must_use]
    pub fn header(&self) -> &Map<String, Value> {
        &self.header
    }

    /// The decoded payload
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    /// The raw base64url-encoded signature
    #[inline]
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// The raw value of any claim, by its name in the payload
    #[inline]
    #[must_use]
    pub fn property_value(&self, name: &str) -> Option<&Value> {
        self.payload.get(name)
    }

    /// The kind of token this is viewed as
    #[inline]
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Payload claims with a named accessor for this kind of token
    #[must_use]
    pub fn recognized_claims(&self) -> Vec<&str> {
        self.claim_names(true)
    }

    /// Payload claims without a named accessor for this kind of token
    ///
    /// These remain available through
    /// [`property_value()`][Self::property_value()].
    #[must_use]
    pub fn unrecognized_claims(&self) -> Vec<&str> {
        self.claim_names(false)
    }

    fn claim_names(&self, recognized: bool) -> Vec<&str> {
        self.payload
            .keys()
            .map(String::as_str)
            .filter(|claim| self.kind.recognizes(claim) == recognized)
            .collect()
    }
}

impl FromStr for JsonWebToken {
    type Err = error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}

impl Claims for JsonWebToken {
    #[inline]
    fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }
}

macro_rules! typed_token {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $kind:ident, $($claims:ident),+;
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        #[must_use]
        pub struct $name(JsonWebToken);

        impl $name {
            /// The kind of token this type views
            pub const KIND: TokenKind = TokenKind::$kind;

            /// Decodes a token without verifying it
            ///
            /// **WARNING:** *No authenticity check is performed.*
            ///
            /// # Errors
            ///
            /// Returns a [`TokenMalformed`][error::ErrorKind::TokenMalformed]
            /// error if a non-empty token cannot be decoded.
            pub fn decode(token: impl Into<String>) -> Result<Self, error::Error> {
                JsonWebToken::decode_as(token.into(), Self::KIND).map(Self)
            }

            /// Verifies a token against the provided key, using the system clock
            ///
            /// # Errors
            ///
            /// Returns an error describing the first verification check the
            /// token fails.
            pub fn verify<K>(
                token: impl Into<String>,
                key: &K,
                options: &VerifyOptions,
            ) -> Result<Self, error::Error>
            where
                K: jws::Verifier + ?Sized,
            {
                JsonWebToken::verify_as(token.into(), key, options, &System, Self::KIND).map(Self)
            }

            /// Verifies a token against the provided key and clock
            ///
            /// # Errors
            ///
            /// Returns an error describing the first verification check the
            /// token fails.
            pub fn verify_with_clock<K, C>(
                token: impl Into<String>,
                key: &K,
                options: &VerifyOptions,
                clock: &C,
            ) -> Result<Self, error::Error>
            where
                K: jws::Verifier + ?Sized,
                C: Clock + ?Sized,
            {
                JsonWebToken::verify_as(token.into(), key, options, clock, Self::KIND).map(Self)
            }

            /// Verifies the token if a key is provided, otherwise decodes it
            ///
            /// # Errors
            ///
            /// Returns an error if the token cannot be decoded or, when a key
            /// is provided, fails verification.
            pub fn new(
                token: impl Into<String>,
                key: Option<&VerificationKey>,
                options: &VerifyOptions,
            ) -> Result<Self, error::Error> {
                JsonWebToken::new_as(token.into(), key, options, Self::KIND).map(Self)
            }

            /// Unwraps the underlying token
            #[inline]
            pub fn into_inner(self) -> JsonWebToken {
                self.0
            }
        }

        impl Deref for $name {
            type Target = JsonWebToken;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = error::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::decode(s)
            }
        }

        impl From<JsonWebToken> for $name {
            #[inline]
            fn from(token: JsonWebToken) -> Self {
                Self(token.with_kind(Self::KIND))
            }
        }

        impl From<$name> for JsonWebToken {
            #[inline]
            fn from(token: $name) -> Self {
                token.0
            }
        }

        impl Claims for $name {
            #[inline]
            fn payload(&self) -> &Map<String, Value> {
                &self.0.payload
            }
        }

        $(impl $claims for $name {})+
    };
}

typed_token! {
    /// An access token, exposing the IETF registered claims
    pub struct AccessToken: Access, RegisteredClaims;
}

typed_token! {
    /// An OpenID Connect ID token, exposing the standard claims
    pub struct IdToken: Id, StandardClaims;
}

typed_token! {
    /// An access token issued by a Cognito user pool
    pub struct CognitoAccessToken: CognitoAccess, RegisteredClaims, CognitoAccessClaims;
}

typed_token! {
    /// An ID token issued by a Cognito user pool
    pub struct CognitoIdToken: CognitoId, StandardClaims, CognitoIdClaims;
}

#[cfg(test)]
mod tests {
    use aliri_clock::{TestClock, UnixTime};
    use color_eyre::Result;
    use serde_json::json;

    use super::*;
    use crate::{error::ErrorKind, test};

    fn reserialized(expected: &str) -> Result<String> {
        let value: Value = serde_json::from_str(expected)?;
        Ok(serde_json::to_string(&value)?)
    }

    #[test]
    fn empty_token_has_no_claims() -> Result<()> {
        let token = AccessToken::decode("")?;
        assert_eq!(token.token(), "");
        assert!(token.header().is_empty());
        assert!(token.payload().is_empty());
        assert_eq!(token.signature(), "");
        assert_eq!(token.aud(), None);
        assert_eq!(token.exp(), None);
        assert_eq!(token.sub(), None);

        let token = IdToken::decode("")?;
        assert_eq!(token.raw_token(), "");
        assert_eq!(token.address(), None);
        assert_eq!(token.email_verified(), None);
        assert_eq!(token.updated_at(), None);
        Ok(())
    }

    #[test]
    fn bogus_token_fails_to_decode() {
        for result in vec![
            AccessToken::decode("A1234BogusTokenString").map(JsonWebToken::from),
            IdToken::decode("A1234BogusTokenString").map(JsonWebToken::from),
            JsonWebToken::decode("A1234BogusTokenString"),
        ] {
            let err = result.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::TokenMalformed);
            assert_eq!(err.to_string(), "Invalid or expired token.");
        }
    }

    #[test]
    fn cognito_access_token_claims() -> Result<()> {
        let token: CognitoAccessToken = test::cognito::ACCESS_TOKEN.parse()?;

        assert_eq!(token.token(), test::cognito::ACCESS_TOKEN);
        assert_eq!(
            serde_json::to_string(token.payload())?,
            reserialized(test::cognito::ACCESS_PAYLOAD)?
        );

        assert_eq!(token.sub(), Some("05166133-b31a-4cb4-9424-22005bb3a216"));
        assert_eq!(token.token_use(), Some("access"));
        assert_eq!(token.scope(), Some("aws.cognito.signin.user.admin"));
        assert_eq!(token.scopes(), ["aws.cognito.signin.user.admin"]);
        assert_eq!(
            token.iss(),
            Some("https://cognito-idp.us-west-2.amazonaws.com/us-west-2_z6m1JIFw4")
        );
        assert_eq!(token.exp(), Some(UnixTime(1_510_215_138)));
        assert_eq!(token.iat(), Some(UnixTime(1_510_211_538)));
        assert_eq!(token.jti(), Some("7a7c9d90-e0eb-40c1-9853-ece05a60e3c4"));
        assert_eq!(token.client_id(), Some("2rsknlteutdes2stihce3kd5mc"));
        assert_eq!(token.username(), Some("aloptima"));

        assert_eq!(token.aud(), None);
        assert_eq!(token.nbf(), None);
        assert_eq!(token.auth_time(), None);
        assert_eq!(token.cognito_groups(), None);
        assert_eq!(token.device_key(), None);
        assert_eq!(token.email(), None);
        assert_eq!(token.email_verified(), None);
        assert_eq!(token.event_id(), None);
        Ok(())
    }

    #[test]
    fn cognito_id_token_claims() -> Result<()> {
        let token: CognitoIdToken = test::cognito::ID_TOKEN.parse()?;

        assert_eq!(
            serde_json::to_string(token.payload())?,
            reserialized(test::cognito::ID_PAYLOAD)?
        );

        assert_eq!(token.aud(), Some("2rsknlteutdes2stihce3kd5mc"));
        assert_eq!(token.auth_time(), Some(UnixTime(1_510_211_538)));
        assert_eq!(token.cognito_username(), Some("aloptima"));
        assert_eq!(token.exp(), Some(UnixTime(1_510_215_138)));
        assert_eq!(token.token_use(), Some("id"));
        assert_eq!(token.scope(), None);
        assert!(token.scopes().is_empty());

        assert_eq!(token.email(), Some("al@optimadental.com"));
        assert_eq!(token.email_verified(), Some(true));
        assert_eq!(token.family_name(), Some("Tabayoyon"));
        assert_eq!(token.given_name(), Some("Al"));
        assert_eq!(token.sub(), Some("05166133-b31a-4cb4-9424-22005bb3a216"));

        assert_eq!(token.address(), None);
        assert_eq!(token.birthdate(), None);
        assert_eq!(token.cognito_groups(), None);
        assert_eq!(token.event_id(), None);
        assert_eq!(token.gender(), None);
        assert_eq!(token.locale(), None);
        assert_eq!(token.middle_name(), None);
        assert_eq!(token.name(), None);
        assert_eq!(token.nickname(), None);
        assert_eq!(token.phone_number(), None);
        assert_eq!(token.phone_number_verified(), None);
        assert_eq!(token.picture(), None);
        assert_eq!(token.preferred_username(), None);
        assert_eq!(token.profile(), None);
        assert_eq!(token.updated_at(), None);
        assert_eq!(token.website(), None);
        assert_eq!(token.zoneinfo(), None);
        Ok(())
    }

    #[test]
    fn cognito_id_token_with_groups() -> Result<()> {
        let token = CognitoIdToken::decode(test::cognito::ID_TOKEN_WITH_GROUPS)?;

        assert_eq!(
            serde_json::to_string(token.payload())?,
            reserialized(test::cognito::ID_WITH_GROUPS_PAYLOAD)?
        );

        assert_eq!(token.cognito_groups(), Some(vec!["admin-super"]));
        assert_eq!(token.cognito_username(), Some("SuperAdmin"));
        assert_eq!(
            token.event_id(),
            Some("454e3853-5142-426a-8ccb-029078ec2300")
        );
        assert_eq!(token.aud(), Some("kcq6nkngrvij2nr32c4k5337i"));

        assert_eq!(token.birthdate(), Some("1972-01-01"));
        assert_eq!(token.gender(), Some("mail"));
        assert_eq!(token.locale(), Some("en"));
        assert_eq!(token.middle_name(), Some("Middle"));
        assert_eq!(token.nickname(), Some("Nick"));
        assert_eq!(token.phone_number(), Some("+15033308402"));
        assert_eq!(token.phone_number_verified(), Some(true));
        assert_eq!(
            token.picture(),
            Some("https://s.gravatar.com/avatar/f438b21335dfb3a5fea226cf41ed6055?s=80")
        );
        assert_eq!(token.website(), Some("https://xedware/alt"));
        assert_eq!(token.zoneinfo(), Some("America/Los_Angeles"));
        assert_eq!(token.name(), None);
        Ok(())
    }

    #[test]
    fn generic_token_exposes_raw_claims() -> Result<()> {
        let token = JsonWebToken::decode(test::cognito::ID_TOKEN_WITH_GROUPS)?;
        assert_eq!(token.kind(), TokenKind::Generic);
        assert_eq!(
            token.property_value("cognito:groups"),
            Some(&json!(["admin-super"]))
        );
        assert_eq!(token.property_value("missing"), None);
        assert_eq!(token.header()["alg"], "RS256");
        Ok(())
    }

    #[test]
    fn retagging_changes_the_view_only() -> Result<()> {
        let generic = JsonWebToken::decode(test::cognito::ACCESS_TOKEN)?;
        let access = CognitoAccessToken::from(generic.clone());

        assert_eq!(access.kind(), TokenKind::CognitoAccess);
        assert_eq!(access.token(), generic.token());
        assert_eq!(access.payload(), generic.payload());

        let back = JsonWebToken::from(access);
        assert_eq!(back.kind(), TokenKind::CognitoAccess);
        assert_eq!(back.with_kind(TokenKind::Generic), generic);
        Ok(())
    }

    #[test]
    fn recognized_claims_depend_on_kind() -> Result<()> {
        let token = CognitoIdToken::decode(test::cognito::ID_TOKEN_WITH_GROUPS)?;
        assert!(token.unrecognized_claims().is_empty());
        assert!(token.recognized_claims().contains(&"cognito:groups"));

        let token = IdToken::from(token.into_inner());
        assert_eq!(
            token.unrecognized_claims(),
            [
                "cognito:groups",
                "iss",
                "cognito:username",
                "aud",
                "event_id",
                "token_use",
                "auth_time",
                "exp",
                "iat"
            ]
        );

        let token = JsonWebToken::decode(test::cognito::ACCESS_TOKEN)?;
        assert!(token.recognized_claims().is_empty());
        Ok(())
    }

    #[test]
    fn debug_output_redacts_token() -> Result<()> {
        let token = CognitoAccessToken::decode(test::cognito::ACCESS_TOKEN)?;
        let debug = format!("{:?}", token);
        assert!(debug.contains("***JWT***"));
        assert!(!debug.contains(test::cognito::ACCESS_TOKEN));
        assert!(!debug.contains(token.signature()));
        Ok(())
    }

    #[test]
    fn new_without_key_only_decodes() -> Result<()> {
        let token = CognitoAccessToken::new(
            test::cognito::ACCESS_TOKEN,
            None,
            &VerifyOptions::default(),
        )?;
        assert_eq!(token.username(), Some("aloptima"));

        let token = AccessToken::new("", None, &VerifyOptions::default())?;
        assert!(token.payload().is_empty());
        Ok(())
    }

    #[test]
    #[cfg(feature = "rsa")]
    fn new_with_key_verifies() -> Result<()> {
        let key = VerificationKey::from_pem(test::rsa::PUBLIC_KEY)?;
        let options = VerifyOptions::default();

        let token = CognitoAccessToken::new(test::rsa::ACCESS_TOKEN, Some(&key), &options)?;
        assert_eq!(token.cognito_groups(), Some(vec!["admin-super", "billing"]));
        assert_eq!(token.scopes(), ["aws.cognito.signin.user.admin", "openid"]);

        let err = CognitoAccessToken::new(test::rsa::EXPIRED_ACCESS_TOKEN, Some(&key), &options)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TokenExpired);

        let expired = CognitoAccessToken::new(
            test::rsa::EXPIRED_ACCESS_TOKEN,
            Some(&key),
            &options.clone().ignore_expiration(),
        )?;
        assert_eq!(expired.exp(), Some(UnixTime(1_510_215_138)));
        assert_eq!(expired.payload()["exp"], 1_510_215_138);

        let err = AccessToken::new("", Some(&key), &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TokenMalformed);
        assert_eq!(err.message(), "jwt must be provided");
        Ok(())
    }

    #[test]
    #[cfg(feature = "rsa")]
    fn unverifiable_cognito_fixture_is_rejected() -> Result<()> {
        let key = VerificationKey::from_pem(test::rsa::PUBLIC_KEY)?;
        let options = VerifyOptions::default().ignore_expiration();

        let err = CognitoIdToken::verify(test::cognito::ID_TOKEN, &key, &options).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SignatureInvalid);
        assert_eq!(err.message(), "invalid signature");
        Ok(())
    }

    #[test]
    #[cfg(feature = "rsa")]
    fn verified_id_token_claims() -> Result<()> {
        let key = VerificationKey::from_pem(test::rsa::PUBLIC_KEY_PKCS1)?;
        let options = VerifyOptions::default()
            .add_allowed_audience(crate::Audience::from_static(test::rsa::CLIENT_ID));

        let token = CognitoIdToken::verify(test::rsa::ID_TOKEN_PS256, &key, &options)?;
        assert_eq!(token.kind(), TokenKind::CognitoId);
        assert_eq!(token.cognito_username(), Some("aloptima"));
        assert_eq!(token.email(), Some("al@example.com"));
        assert_eq!(token.email_verified(), Some(true));
        assert_eq!(token.iss(), Some(test::rsa::ISSUER));
        Ok(())
    }

    #[test]
    #[cfg(feature = "hmac")]
    fn verify_with_clock_controls_time() -> Result<()> {
        let key = VerificationKey::hmac(test::HMAC_SECRET);
        let token = test::hs256_token(&json!({"sub": "abc", "exp": 1000}), test::HMAC_SECRET);
        let options = VerifyOptions::default();

        let clock = TestClock::new(UnixTime(999));
        let verified = AccessToken::verify_with_clock(token.as_str(), &key, &options, &clock)?;
        assert_eq!(verified.sub(), Some("abc"));
        assert_eq!(verified.token(), token);

        clock.set(UnixTime(1000));
        let err = AccessToken::verify_with_clock(token, &key, &options, &clock).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TokenExpired);
        assert_eq!(err.message(), "jwt expired");
        Ok(())
    }

    #[test]
    fn tokens_and_keys_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<JsonWebToken>();
        assert_send_sync::<AccessToken>();
        assert_send_sync::<IdToken>();
        assert_send_sync::<CognitoAccessToken>();
        assert_send_sync::<CognitoIdToken>();
        assert_send_sync::<VerificationKey>();
        assert_send_sync::<VerifyOptions>();
        assert_send_sync::<error::Error>();
    }
}
