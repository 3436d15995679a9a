//! The JSON Web Signature (JWS) verification contract
//!
//! The specifications for this standard can be found in [RFC7515][].
//!
//! Token verification delegates the cryptographic check to a [`Verifier`].
//! Implementations are provided for the keys in [`jwa`][crate::jwa] and
//! for [`VerificationKey`][crate::VerificationKey], but any primitive can
//! be plugged in. Whatever error a verifier reports is normalized into
//! [`ErrorKind::SignatureInvalid`][crate::error::ErrorKind::SignatureInvalid]
//! before it reaches the caller.
//!
//! [RFC7515]: https://tools.ietf.org/html/rfc7515

use std::error::Error as StdError;

use crate::jwa;

/// A JWS verifier
pub trait Verifier {
    /// The error returned on a failure to verify
    type Error: StdError + Send + Sync + 'static;

    /// Whether the specific algorithm provided is compatible
    /// with this verifier
    fn can_verify(&self, alg: jwa::Algorithm) -> bool;

    /// Attempts to verify the data against the signature using the
    /// specified algorithm
    ///
    /// # Errors
    ///
    /// Returns an error if the signature does not match the data.
    fn verify(&self, alg: jwa::Algorithm, data: &[u8], signature: &[u8])
        -> Result<(), Self::Error>;
}

impl<T> Verifier for &'_ T
where
    T: Verifier + ?Sized,
{
    type Error = T::Error;

    #[inline]
    fn can_verify(&self, alg: jwa::Algorithm) -> bool {
        T::can_verify(&**self, alg)
    }

    #[inline]
    fn verify(
        &self,
        alg: jwa::Algorithm,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), Self::Error> {
        T::verify(&**self, alg, data, signature)
    }
}

impl<T> Verifier for Box<T>
where
    T: Verifier + ?Sized,
{
    type Error = T::Error;

    #[inline]
    fn can_verify(&self, alg: jwa::Algorithm) -> bool {
        T::can_verify(&**self, alg)
    }

    #[inline]
    fn verify(
        &self,
        alg: jwa::Algorithm,
        data: &[u8],
        signature: &[u8],
    ) -> Result<(), Self::Error> {
        T::verify(&**self, alg, data, signature)
    }
}
