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

//! Algorithm identifiers as they appear in the diagnostic model and in the
//! cryptographic constraint tables of a validation policy.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Asymmetric encryption (signature) algorithm family.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EncryptionAlgorithm {
    /// RSA with PKCS#1 v1.5 or PSS padding.
    Rsa,

    /// ECDSA over a named curve.
    Ecdsa,

    /// DSA.
    Dsa,

    /// Edwards-curve signatures (Ed25519/Ed448).
    Eddsa,
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rsa => "RSA",
            Self::Ecdsa => "ECDSA",
            Self::Dsa => "DSA",
            Self::Eddsa => "EDDSA",
        };
        f.write_str(name)
    }
}

/// Digest algorithm.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DigestAlgorithm {
    /// MD5 (long broken; listed so policies can reject it explicitly).
    Md5,

    /// SHA-1.
    Sha1,

    /// SHA-224.
    Sha224,

    /// SHA-256.
    Sha256,

    /// SHA-384.
    Sha384,

    /// SHA-512.
    Sha512,
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
        };
        f.write_str(name)
    }
}

/// The full algorithm suite used to produce a signature value.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SignatureAlgorithm {
    /// Encryption algorithm family.
    pub encryption: EncryptionAlgorithm,

    /// Digest algorithm.
    pub digest: DigestAlgorithm,

    /// Key length in bits, when known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key_length: Option<u32>,
}

/// X.509 key usage bits.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyUsageBit {
    /// digitalSignature
    DigitalSignature,

    /// nonRepudiation (contentCommitment)
    NonRepudiation,

    /// keyEncipherment
    KeyEncipherment,

    /// dataEncipherment
    DataEncipherment,

    /// keyAgreement
    KeyAgreement,

    /// keyCertSign
    KeyCertSign,

    /// cRLSign
    CrlSign,

    /// encipherOnly
    EncipherOnly,

    /// decipherOnly
    DecipherOnly,
}

impl KeyUsageBit {
    /// Returns the RFC 5280 name of this bit, as used in policy constraint
    /// values.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DigitalSignature => "digitalSignature",
            Self::NonRepudiation => "nonRepudiation",
            Self::KeyEncipherment => "keyEncipherment",
            Self::DataEncipherment => "dataEncipherment",
            Self::KeyAgreement => "keyAgreement",
            Self::KeyCertSign => "keyCertSign",
            Self::CrlSign => "cRLSign",
            Self::EncipherOnly => "encipherOnly",
            Self::DecipherOnly => "decipherOnly",
        }
    }
}

impl fmt::Display for KeyUsageBit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
