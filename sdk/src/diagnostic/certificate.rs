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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    algorithms::{DigestAlgorithm, EncryptionAlgorithm, KeyUsageBit, SignatureAlgorithm},
    diagnostic::DigestValue,
};

/// One X.509 certificate as seen by the upstream loader.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CertificateNode {
    /// Unique id within the diagnostic model.
    pub id: String,

    /// Subject distinguished name.
    pub subject_name: String,

    /// Issuer distinguished name.
    pub issuer_name: String,

    /// Serial number, decimal encoded.
    pub serial_number: String,

    /// Start of the validity period.
    pub not_before: DateTime<Utc>,

    /// End of the validity period.
    pub not_after: DateTime<Utc>,

    /// Key usage bits asserted by the certificate.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub key_usage: Vec<KeyUsageBit>,

    /// Whether subject and issuer are the same entity.
    #[serde(default)]
    pub self_signed: bool,

    /// Whether the certificate is configured as a trust anchor.
    #[serde(default)]
    pub trusted: bool,

    /// Public key algorithm family.
    pub public_key_algorithm: EncryptionAlgorithm,

    /// Public key size in bits.
    pub public_key_size: u32,

    /// Algorithm suite the issuer used to sign this certificate, when
    /// known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub certificate_signature: Option<SignatureAlgorithm>,

    /// Precomputed digests of the DER encoding, used to match signed
    /// signing-certificate references.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub digests: Vec<CertificateDigest>,

    /// Id of the issuing certificate, when present in the model. `None`
    /// for self-signed certificates and dead ends.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub issuer_certificate_id: Option<String>,

    /// Revocation entries that apply to this certificate.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub revocation_ids: Vec<String>,
}

/// A precomputed digest of a certificate's DER encoding.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CertificateDigest {
    /// Digest algorithm.
    pub algorithm: DigestAlgorithm,

    /// Digest value.
    pub value: DigestValue,
}

impl CertificateNode {
    /// Returns the precomputed digest for the given algorithm, if the
    /// loader provided one.
    pub fn digest(&self, algorithm: DigestAlgorithm) -> Option<&DigestValue> {
        self.digests
            .iter()
            .find(|d| d.algorithm == algorithm)
            .map(|d| &d.value)
    }

    /// Returns `true` when the certificate asserts the given key usage bit.
    pub fn has_key_usage(&self, bit: KeyUsageBit) -> bool {
        self.key_usage.contains(&bit)
    }

    /// Returns `true` when the validity period covers the given instant.
    pub fn is_valid_at(&self, instant: DateTime<Utc>) -> bool {
        self.not_before <= instant && instant <= self.not_after
    }
}
