//! Typed projections of token claims
//!
//! Each set of claims is a trait whose accessors read straight out of the
//! token payload, along with a table of [`ClaimSpec`]s describing them.
//! Both are generated from a single list, so an accessor cannot exist
//! without its table entry or read from a different claim name.
//!
//! Accessor names are the claim names, with any namespace separator
//! (`:`) replaced by `_`, so `cognito:groups` is read by `cognito_groups()`.
//!
//! Accessors never substitute defaults. A claim that is missing, or that
//! holds a value of a different JSON type, is reported as `None`; the raw
//! value is always available through [`Claims::property_value()`].
//!
//! | Claim set                 | Extends              |
//! |---------------------------|----------------------|
//! | [`RegisteredClaims`]      | [`Claims`]           |
//! | [`StandardClaims`]        | [`Claims`]           |
//! | [`CognitoAccessClaims`]   | [`RegisteredClaims`] |
//! | [`CognitoIdClaims`]       | [`StandardClaims`]   |

use aliri_clock::UnixTime;
use serde_json::{Map, Value};

/// The JSON shape a claim is projected as
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ClaimType {
    /// A string, projected as `Option<&str>`
    String,

    /// Seconds since the Unix epoch, projected as `Option<UnixTime>`
    NumericDate,

    /// A boolean, projected as `Option<bool>`
    Boolean,

    /// An array of strings, projected as `Option<Vec<&str>>`
    StringList,

    /// A JSON object, projected as `Option<&Map<String, Value>>`
    Object,
}

/// Describes a claim with a named accessor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClaimSpec {
    /// The claim name, exactly as it appears in the payload
    pub claim: &'static str,

    /// The name of the accessor that reads the claim
    pub accessor: &'static str,

    /// The shape the claim is projected as
    pub claim_type: ClaimType,
}

/// Access to the payload of a token
pub trait Claims {
    /// The decoded payload
    fn payload(&self) -> &Map<String, Value>;

    /// The raw value of any claim, by its name in the payload
    #[inline]
    fn property_value(&self, name: &str) -> Option<&Value> {
        self.payload().get(name)
    }
}

mod project {
    use aliri_clock::UnixTime;
    use serde_json::{Map, Value};

    #[inline]
    pub(super) fn string(v: Option<&Value>) -> Option<&str> {
        v?.as_str()
    }

    #[inline]
    pub(super) fn numeric_date(v: Option<&Value>) -> Option<UnixTime> {
        v?.as_u64().map(UnixTime)
    }

    #[inline]
    pub(super) fn boolean(v: Option<&Value>) -> Option<bool> {
        v?.as_bool()
    }

    pub(super) fn string_list(v: Option<&Value>) -> Option<Vec<&str>> {
        v?.as_array()?.iter().map(Value::as_str).collect()
    }

    #[inline]
    pub(super) fn object(v: Option<&Value>) -> Option<&Map<String, Value>> {
        v?.as_object()
    }
}

macro_rules! claim_output {
    (String) => { Option<&str> };
    (NumericDate) => { Option<UnixTime> };
    (Boolean) => { Option<bool> };
    (StringList) => { Option<Vec<&str>> };
    (Object) => { Option<&Map<String, Value>> };
}

macro_rules! claim_project {
    (String, $v:expr) => {
        project::string($v)
    };
    (NumericDate, $v:expr) => {
        project::numeric_date($v)
    };
    (Boolean, $v:expr) => {
        project::boolean($v)
    };
    (StringList, $v:expr) => {
        project::string_list($v)
    };
    (Object, $v:expr) => {
        project::object($v)
    };
}

macro_rules! claim_set {
    {
        $(#[$meta:meta])*
        pub trait $name:ident: $parent:ident { $($extra:tt)* }

        $(#[$table_meta:meta])*
        pub const $table:ident;

        $(
            $(#[$claim_meta:meta])*
            $accessor:ident = $claim:literal as $ty:ident;
        )*
    } => {
        $(#[$meta])*
        pub trait $name: $parent {
            $($extra)*

            $(
                $(#[$claim_meta])*
                #[doc = ""]
                #[doc = concat!("Reads the `", $claim, "` claim.")]
                #[inline]
                fn $accessor(&self) -> claim_output!($ty) {
                    claim_project!($ty, self.property_value($claim))
                }
            )*
        }

        $(#[$table_meta])*
        pub const $table: &[ClaimSpec] = &[
            $(
                ClaimSpec {
                    claim: $claim,
                    accessor: stringify!($accessor),
                    claim_type: ClaimType::$ty,
                },
            )*
        ];
    };
}

claim_set! {
    /// Claims registered by [RFC 7519, Section 4.1][RFC7519]
    ///
    ///   [RFC7519]: https://tools.ietf.org/html/rfc7519#section-4.1
    pub trait RegisteredClaims: Claims {}

    /// The claims read by [`RegisteredClaims`]
    pub const REGISTERED_CLAIMS;

    /// Audience
    aud = "aud" as String;
    /// Expiration time
    exp = "exp" as NumericDate;
    /// Issued at
    iat = "iat" as NumericDate;
    /// Issuer
    iss = "iss" as String;
    /// JWT ID
    jti = "jti" as String;
    /// Not before
    nbf = "nbf" as NumericDate;
    /// Subject
    sub = "sub" as String;
}

claim_set! {
    /// Standard claims from [OpenID Connect Core 1.0, Section 5.1][OIDC]
    ///
    ///   [OIDC]: https://openid.net/specs/openid-connect-core-1_0.html#StandardClaims
    pub trait StandardClaims: Claims {}

    /// The claims read by [`StandardClaims`]
    pub const STANDARD_CLAIMS;

    /// Preferred postal address
    address = "address" as Object;
    /// Birthday, as `YYYY-MM-DD` or `YYYY`
    birthdate = "birthdate" as String;
    /// Preferred e-mail address
    email = "email" as String;
    /// Whether the e-mail address has been verified
    email_verified = "email_verified" as Boolean;
    /// Surname(s) or last name(s)
    family_name = "family_name" as String;
    /// Gender
    gender = "gender" as String;
    /// Given name(s) or first name(s)
    given_name = "given_name" as String;
    /// Locale, as a BCP47 language tag
    locale = "locale" as String;
    /// Middle name(s)
    middle_name = "middle_name" as String;
    /// Full name in displayable form
    name = "name" as String;
    /// Casual name
    nickname = "nickname" as String;
    /// Preferred telephone number
    phone_number = "phone_number" as String;
    /// Whether the phone number has been verified
    phone_number_verified = "phone_number_verified" as Boolean;
    /// URL of the profile picture
    picture = "picture" as String;
    /// Shorthand name the user wishes to be referred to as
    preferred_username = "preferred_username" as String;
    /// URL of the profile page
    profile = "profile" as String;
    /// Subject
    sub = "sub" as String;
    /// Time the user's information was last updated
    updated_at = "updated_at" as NumericDate;
    /// URL of the user's web page or blog
    website = "website" as String;
    /// Time zone, from the zoneinfo database
    zoneinfo = "zoneinfo" as String;
}

claim_set! {
    /// Claims added to access tokens by a Cognito user pool
    pub trait CognitoAccessClaims: RegisteredClaims {
        /// The scopes granted to the token, split out of the `scope` claim
        fn scopes(&self) -> Vec<&str> {
            split_scope(self.scope())
        }
    }

    /// The claims read by [`CognitoAccessClaims`]
    pub const COGNITO_ACCESS_CLAIMS;

    /// Time the user authenticated
    auth_time = "auth_time" as NumericDate;
    /// The app client the token was issued to
    client_id = "client_id" as String;
    /// The user pool groups the user belongs to
    cognito_groups = "cognito:groups" as StringList;
    /// The device that was remembered for the user
    device_key = "device_key" as String;
    /// E-mail address
    email = "email" as String;
    /// Whether the e-mail address has been verified
    email_verified = "email_verified" as Boolean;
    /// Identifier of the authentication event
    event_id = "event_id" as String;
    /// Space-delimited OAuth2 scopes
    scope = "scope" as String;
    /// Intended use of the token, `access`
    token_use = "token_use" as String;
    /// User name
    username = "username" as String;
}

claim_set! {
    /// Claims added to ID tokens by a Cognito user pool
    pub trait CognitoIdClaims: StandardClaims {
        /// The scopes granted to the token, split out of the `scope` claim
        fn scopes(&self) -> Vec<&str> {
            split_scope(self.scope())
        }
    }

    /// The claims read by [`CognitoIdClaims`]
    pub const COGNITO_ID_CLAIMS;

    /// Audience, the app client the token was issued to
    aud = "aud" as String;
    /// Time the user authenticated
    auth_time = "auth_time" as NumericDate;
    /// The user pool groups the user belongs to
    cognito_groups = "cognito:groups" as StringList;
    /// User name within the user pool
    cognito_username = "cognito:username" as String;
    /// Identifier of the authentication event
    event_id = "event_id" as String;
    /// Expiration time
    exp = "exp" as NumericDate;
    /// Issued at
    iat = "iat" as NumericDate;
    /// Issuer
    iss = "iss" as String;
    /// Space-delimited OAuth2 scopes
    scope = "scope" as String;
    /// Intended use of the token, `id`
    token_use = "token_use" as String;
}

/// Splits a `scope` claim into its scope tokens
///
/// See [RFC 6749, Section 3.3](https://datatracker.ietf.org/doc/html/rfc6749#section-3.3).
fn split_scope(scope: Option<&str>) -> Vec<&str> {
    scope.map_or_else(Vec::new, |s| s.split_whitespace().collect())
}
