//! Caller-supplied key material

use std::str::FromStr;

use crate::{error, jwa, jws};

/// Key material used to verify a token signature
///
/// The key is treated as already loaded: this crate never fetches or
/// rotates keys.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum VerificationKey {
    /// A shared HMAC secret
    #[cfg(feature = "hmac")]
    #[cfg_attr(docsrs, doc(cfg(feature = "hmac")))]
    Hmac(jwa::Hmac),

    /// An RSA public key
    #[cfg(feature = "rsa")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
    Rsa(jwa::RsaPublicKey),
}

impl VerificationKey {
    /// Uses the provided bytes as a shared HMAC secret
    #[cfg(feature = "hmac")]
    #[cfg_attr(docsrs, doc(cfg(feature = "hmac")))]
    pub fn hmac(secret: impl Into<Vec<u8>>) -> Self {
        Self::Hmac(jwa::Hmac::new(secret.into()))
    }

    /// Imports an RSA public key from a PEM document
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not hold an RSA public key.
    #[cfg(feature = "rsa")]
    #[cfg_attr(docsrs, doc(cfg(feature = "rsa")))]
    pub fn from_pem(pem: &str) -> Result<Self, error::KeyRejected> {
        jwa::RsaPublicKey::from_pem(pem).map(Self::Rsa)
    }

    /// Interprets key material the way it is usually handed around
    ///
    /// Material that looks like a PEM document is imported as a public
    /// key; anything else is taken as a shared secret.
    ///
    /// # Errors
    ///
    /// Returns an error if the material looks like PEM but cannot be
    /// imported, or if the crate lacks support for the required key type.
    pub fn parse(material: &str) -> Result<Self, error::KeyRejected> {
        if material.trim_start().starts_with("-----BEGIN") {
            #[cfg(feature = "rsa")]
            return Self::from_pem(material);

            #[cfg(not(feature = "rsa"))]
            return Err(error::key_rejected("PEM keys require the `rsa` feature"));
        }

        #[cfg(feature = "hmac")]
        return Ok(Self::hmac(material.as_bytes()));

        #[cfg(not(feature = "hmac"))]
        return Err(error::key_rejected("shared secrets require the `hmac` feature"));
    }
}

impl FromStr for VerificationKey {
    type Err = error::KeyRejected;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "hmac")]
impl From<jwa::Hmac> for VerificationKey {
    fn from(key: jwa::Hmac) -> Self {
        Self::Hmac(key)
    }
}

#[cfg(feature = "rsa")]
impl From<jwa::RsaPublicKey> for VerificationKey {
    fn from(key: jwa::RsaPublicKey) -> Self {
        Self::Rsa(key)
    }
}

impl jws::Verifier for VerificationKey {
    type Error = error::KeyVerifyError;

    fn can_verify(&self, alg: jwa::Algorithm) -> bool {
        match self {
            #[cfg(feature = "hmac")]
            Self::Hmac(k) => k.can_verify(alg),

            #[cfg(feature = "rsa")]
            Self::Rsa(k) => k.can_verify(alg),

            #[cfg(not(any(feature = "hmac", feature = "rsa")))]
            _ => {
                let _ = alg;
                unreachable!()
            }
        }
    }

    fn verify(
        &self,
        alg: jwa::Algorithm,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), Self::Error> {
        if !self.can_verify(alg) {
            return Err(error::incompatible_algorithm(alg).into());
        }

        match self {
            #[cfg(feature = "hmac")]
            Self::Hmac(k) => Ok(k.verify(alg, data, signature)?),

            #[cfg(feature = "rsa")]
            Self::Rsa(k) => Ok(k.verify(alg, data, signature)?),

            #[cfg(not(any(feature = "hmac", feature = "rsa")))]
            _ => {
                let _ = (data, signature);
                unreachable!()
            }
        }
    }
}
