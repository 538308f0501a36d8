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

//! The diagnostic model: a read-only, in-memory view of everything the
//! upstream signature parsers discovered about a document.
//!
//! The model is produced once per validation run by format-specific parsers
//! and certificate/revocation loaders, then handed to the engine by shared
//! reference. Cryptographic work has already happened upstream: digest
//! matchers carry precomputed `found`/`intact` flags, certificates carry
//! precomputed digests.
//!
//! References between nodes are plain string ids. A reference to an id that
//! is absent from the model is an *orphan reference* — a first-class state
//! the building blocks report on, not a structural error.

mod certificate;
mod revocation;
mod signature;
mod timestamp;

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

pub use certificate::{CertificateDigest, CertificateNode};
pub use revocation::{CertificateRevocationStatus, RevocationNode, RevocationType};
pub use signature::{
    DigestMatcher, DigestMatcherType, IssuerSerial, SignatureNode, SignatureScope, SignerRole,
    SignerRoleCategory, SigningCertificateRef,
};
pub use timestamp::{TimestampNode, TimestampType, TimestampedObject, TimestampedObjectType};

/// A digest value, serialized as a lowercase hex string.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DigestValue(pub Vec<u8>);

impl DigestValue {
    /// Builds a digest value from a hex string.
    pub fn from_hex(hex_str: &str) -> Result<Self, hex::FromHexError> {
        Ok(DigestValue(hex::decode(hex_str)?))
    }
}

impl fmt::Display for DigestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl Serialize for DigestValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for DigestValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DigestValue::from_hex(&s).map_err(de::Error::custom)
    }
}

/// Everything discovered while parsing a document: signatures, the
/// certificates they use, timestamps, and revocation data.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DiagnosticModel {
    /// Signatures, in document order. Counter-signatures appear here too,
    /// linked to their parent via [`SignatureNode::parent_id`].
    #[serde(default)]
    pub signatures: Vec<SignatureNode>,

    /// All certificates used by signatures, timestamps and revocation data.
    #[serde(default)]
    pub certificates: Vec<CertificateNode>,

    /// Timestamp tokens, in document order.
    #[serde(default)]
    pub timestamps: Vec<TimestampNode>,

    /// CRL and OCSP revocation entries.
    #[serde(default)]
    pub revocations: Vec<RevocationNode>,
}

impl DiagnosticModel {
    /// Looks up a signature by id.
    pub fn signature(&self, id: &str) -> Option<&SignatureNode> {
        self.signatures.iter().find(|s| s.id == id)
    }

    /// Looks up a certificate by id.
    pub fn certificate(&self, id: &str) -> Option<&CertificateNode> {
        self.certificates.iter().find(|c| c.id == id)
    }

    /// Looks up a timestamp by id.
    pub fn timestamp(&self, id: &str) -> Option<&TimestampNode> {
        self.timestamps.iter().find(|t| t.id == id)
    }

    /// Looks up a revocation entry by id.
    pub fn revocation(&self, id: &str) -> Option<&RevocationNode> {
        self.revocations.iter().find(|r| r.id == id)
    }

    /// Returns the counter-signatures of the given signature.
    pub fn counter_signatures(&self, signature_id: &str) -> impl Iterator<Item = &SignatureNode> {
        let signature_id = signature_id.to_owned();
        self.signatures
            .iter()
            .filter(move |s| s.parent_id.as_deref() == Some(signature_id.as_str()))
    }

    /// Returns the timestamps covering the given token.
    pub fn timestamps_covering(&self, token_id: &str) -> impl Iterator<Item = &TimestampNode> {
        let token_id = token_id.to_owned();
        self.timestamps.iter().filter(move |t| {
            t.timestamped_objects
                .iter()
                .any(|obj| obj.id == token_id)
        })
    }
}
