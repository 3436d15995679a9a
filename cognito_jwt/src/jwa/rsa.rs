//! RSA JSON Web Algorithm implementations

use spki::{ObjectIdentifier, SubjectPublicKeyInfoRef};

use crate::{error, jwa::Algorithm, jws};

/// `rsaEncryption` from [RFC 8017, Appendix C][RFC8017]
///
///   [RFC8017]: https://datatracker.ietf.org/doc/html/rfc8017#appendix-C
const RSA_ENCRYPTION: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

const SPKI_LABEL: &str = "PUBLIC KEY";
const PKCS1_LABEL: &str = "RSA PUBLIC KEY";

/// An RSA public key
///
/// Held as a DER-encoded PKCS#1 `RSAPublicKey` structure, which is the
/// form `ring` verifies against.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct RsaPublicKey {
    der: Vec<u8>,
}

impl RsaPublicKey {
    /// Imports an RSA public key from a PEM document
    ///
    /// Both `PUBLIC KEY` (SubjectPublicKeyInfo) and `RSA PUBLIC KEY`
    /// (PKCS#1) documents are accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid PEM, is labeled as
    /// something other than a public key, or does not hold an RSA key.
    pub fn from_pem(pem: &str) -> Result<Self, error::KeyRejected> {
        let (label, der) = der::pem::decode_vec(pem.trim_start().as_bytes())
            .map_err(|e| error::key_rejected(e.to_string()))?;

        match label {
            SPKI_LABEL => Self::from_spki_der(&der),
            PKCS1_LABEL => Ok(Self::from_pkcs1_der(der)),
            other => Err(error::key_rejected(format!(
                "unexpected PEM label '{}'",
                other
            ))),
        }
    }

    /// Imports an RSA public key from a DER-encoded SubjectPublicKeyInfo
    ///
    /// # Errors
    ///
    /// Returns an error if the structure cannot be parsed or does not
    /// describe an RSA key.
    pub fn from_spki_der(der: &[u8]) -> Result<Self, error::KeyRejected> {
        let spki =
            SubjectPublicKeyInfoRef::try_from(der).map_err(|e| error::key_rejected(e.to_string()))?;

        if spki.algorithm.oid != RSA_ENCRYPTION {
            return Err(error::key_rejected("public key is not an RSA key"));
        }

        let key = spki
            .subject_public_key
            .as_bytes()
            .ok_or_else(|| error::key_rejected("public key has unused bits"))?;

        Ok(Self::from_pkcs1_der(key.to_vec()))
    }

    /// Wraps a DER-encoded PKCS#1 `RSAPublicKey`
    ///
    /// The structure is only checked when a signature is verified.
    pub fn from_pkcs1_der(der: impl Into<Vec<u8>>) -> Self {
        Self { der: der.into() }
    }
}

fn verification_params(alg: Algorithm) -> Option<&'static ring::signature::RsaParameters> {
    use ring::signature;

    match alg {
        Algorithm::RS256 => Some(&signature::RSA_PKCS1_2048_8192_SHA256),
        Algorithm::RS384 => Some(&signature::RSA_PKCS1_2048_8192_SHA384),
        Algorithm::RS512 => Some(&signature::RSA_PKCS1_2048_8192_SHA512),
        Algorithm::PS256 => Some(&signature::RSA_PSS_2048_8192_SHA256),
        Algorithm::PS384 => Some(&signature::RSA_PSS_2048_8192_SHA384),
        Algorithm::PS512 => Some(&signature::RSA_PSS_2048_8192_SHA512),
        _ => None,
    }
}

impl jws::Verifier for RsaPublicKey {
    type Error = error::SignatureMismatch;

    fn can_verify(&self, alg: Algorithm) -> bool {
        verification_params(alg).is_some()
    }

    fn verify(&self, alg: Algorithm, data: &[u8], signature: &[u8]) -> Result<(), Self::Error> {
        let params = verification_params(alg).ok_or_else(error::signature_mismatch)?;

        ring::signature::UnparsedPublicKey::new(params, &self.der)
            .verify(data, signature)
            .map_err(|_| error::signature_mismatch())
    }
}
