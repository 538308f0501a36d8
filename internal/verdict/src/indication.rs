// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use serde::{Deserialize, Serialize};

/// Top-level verdict for a validated token or building block.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Indication {
    /// The checks performed against the token all succeeded.
    #[serde(rename = "VALID")]
    Valid,

    /// A check failed in a way that cannot be cured by additional
    /// information (e.g. a broken digest).
    #[serde(rename = "INVALID")]
    Invalid,

    /// The available information was not sufficient to reach a positive or
    /// negative verdict.
    #[serde(rename = "INDETERMINATE")]
    Indeterminate,
}

impl Indication {
    /// Returns `true` for [`Indication::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Indication::Valid)
    }
}

/// Refinement code explaining why an [`Indication`] is not `VALID`.
///
/// The serialized names follow the ETSI EN 319 102-1 vocabulary.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubIndication {
    /// The token structure does not conform to its format requirements.
    FormatFailure,

    /// No candidate for the signing certificate could be identified.
    NoSigningCertificateFound,

    /// The certificate chain could not be built up to a trust anchor.
    NoCertificateChainFound,

    /// One or more signed data objects referenced by the signature could not
    /// be located.
    SignedDataNotFound,

    /// The digest of a referenced data object does not match the value
    /// protected by the signature.
    HashFailure,

    /// The cryptographic verification of the signature value itself failed.
    SigCryptoFailure,

    /// A constraint on the signature or its attributes is not satisfied.
    SigConstraintsFailure,

    /// A constraint on the certificate chain is not satisfied.
    ChainConstraintsFailure,

    /// The certificate chain could not be processed at all, including
    /// structurally broken chains such as issuer cycles.
    CertificateChainGeneralFailure,

    /// An algorithm or key size used by the token is not acceptable.
    CryptoConstraintsFailure,

    /// An algorithm used by the token is beyond its acceptance period and no
    /// proof of existence predates the expiration.
    CryptoConstraintsFailureNoPoe,

    /// The signing certificate has been revoked.
    Revoked,

    /// The signing certificate was expired at validation time.
    Expired,

    /// The signing certificate was not yet valid at validation time.
    NotYetValid,

    /// No revocation data is available for a certificate in the chain.
    RevocationNotAvailable,

    /// The available revocation data is not fresh enough; retrying later may
    /// yield a conclusive verdict.
    TryLater,

    /// The signature policy required by the validation constraints is not
    /// present in the signature.
    NoPolicy,

    /// The signature policy could not be processed against the validation
    /// constraints.
    PolicyProcessingError,
}

#[cfg(test)]
mod test {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn serialized_names_follow_etsi_vocabulary() {
        assert_eq!(
            serde_json::to_string(&Indication::Indeterminate).unwrap(),
            "\"INDETERMINATE\""
        );

        assert_eq!(
            serde_json::to_string(&SubIndication::NoSigningCertificateFound).unwrap(),
            "\"NO_SIGNING_CERTIFICATE_FOUND\""
        );

        assert_eq!(
            serde_json::to_string(&SubIndication::CryptoConstraintsFailureNoPoe).unwrap(),
            "\"CRYPTO_CONSTRAINTS_FAILURE_NO_POE\""
        );
    }

    #[test]
    fn round_trip() {
        let si: SubIndication = serde_json::from_str("\"SIG_CRYPTO_FAILURE\"").unwrap();
        assert_eq!(si, SubIndication::SigCryptoFailure);
    }
}
