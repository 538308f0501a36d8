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

use crate::algorithms::{DigestAlgorithm, EncryptionAlgorithm};

/// The acceptable-algorithm table of a validation policy.
///
/// Encryption algorithms are accepted per family with a minimum key size;
/// expiration entries are keyed by algorithm and key size, with the entry
/// for the largest key size not exceeding the actual key applying. Digest
/// algorithms are accepted per algorithm with an optional expiration date.
///
/// An empty table accepts everything; this mirrors a policy that carries no
/// cryptographic constraint.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CryptographicSuite {
    /// Accepted encryption algorithm families.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub acceptable_encryption_algorithms: Vec<EncryptionAlgorithmRule>,

    /// Accepted digest algorithms.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub acceptable_digest_algorithms: Vec<DigestAlgorithmRule>,
}

/// Acceptance rule for one encryption algorithm family.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EncryptionAlgorithmRule {
    /// Algorithm family.
    pub algorithm: EncryptionAlgorithm,

    /// Minimum acceptable key size in bits.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_key_size: Option<u32>,

    /// Expiration dates per key size. The entry with the largest key size
    /// not exceeding the actual key applies.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub expirations: Vec<KeySizeExpiration>,
}

/// Expiration date for keys of at least the given size.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KeySizeExpiration {
    /// Key size threshold in bits.
    pub key_size: u32,

    /// Date after which such keys are no longer acceptable.
    pub date: DateTime<Utc>,
}

/// Acceptance rule for one digest algorithm.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DigestAlgorithmRule {
    /// Digest algorithm.
    pub algorithm: DigestAlgorithm,

    /// Date after which the algorithm is no longer acceptable.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub expiration: Option<DateTime<Utc>>,
}

/// Outcome of checking an algorithm suite against the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CryptoVerdict {
    /// The suite is acceptable at the evaluated instant.
    Reliable,

    /// The encryption algorithm family is not in the accepted set.
    EncryptionAlgorithmNotAuthorised,

    /// The digest algorithm is not in the accepted set.
    DigestAlgorithmNotAuthorised,

    /// The key is smaller than the accepted minimum for its family.
    KeySizeTooSmall,

    /// The suite was acceptable once but is expired at the evaluated
    /// instant.
    Expired,
}

impl CryptographicSuite {
    /// Checks an algorithm suite against the table at the given instant.
    ///
    /// `key_length` may be absent when the parser could not determine it;
    /// the minimum-size check is then skipped.
    pub fn verify(
        &self,
        encryption: EncryptionAlgorithm,
        digest: DigestAlgorithm,
        key_length: Option<u32>,
        at: DateTime<Utc>,
    ) -> CryptoVerdict {
        if !self.acceptable_encryption_algorithms.is_empty() {
            let Some(rule) = self
                .acceptable_encryption_algorithms
                .iter()
                .find(|r| r.algorithm == encryption)
            else {
                return CryptoVerdict::EncryptionAlgorithmNotAuthorised;
            };

            if let (Some(min), Some(actual)) = (rule.min_key_size, key_length) {
                if actual < min {
                    return CryptoVerdict::KeySizeTooSmall;
                }
            }

            if let Some(expiration) = rule.expiration_for(key_length) {
                if at > expiration {
                    return CryptoVerdict::Expired;
                }
            }
        }

        if !self.acceptable_digest_algorithms.is_empty() {
            let Some(rule) = self
                .acceptable_digest_algorithms
                .iter()
                .find(|r| r.algorithm == digest)
            else {
                return CryptoVerdict::DigestAlgorithmNotAuthorised;
            };

            if let Some(expiration) = rule.expiration {
                if at > expiration {
                    return CryptoVerdict::Expired;
                }
            }
        }

        CryptoVerdict::Reliable
    }

    /// Returns the earliest expiration date applying to the given suite, if
    /// the table defines one.
    pub fn expiration_date(
        &self,
        encryption: EncryptionAlgorithm,
        digest: DigestAlgorithm,
        key_length: Option<u32>,
    ) -> Option<DateTime<Utc>> {
        let enc_exp = self
            .acceptable_encryption_algorithms
            .iter()
            .find(|r| r.algorithm == encryption)
            .and_then(|r| r.expiration_for(key_length));

        let dig_exp = self
            .acceptable_digest_algorithms
            .iter()
            .find(|r| r.algorithm == digest)
            .and_then(|r| r.expiration);

        match (enc_exp, dig_exp) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
}

impl EncryptionAlgorithmRule {
    fn expiration_for(&self, key_length: Option<u32>) -> Option<DateTime<Utc>> {
        let key_length = key_length?;
        self.expirations
            .iter()
            .filter(|e| e.key_size <= key_length)
            .max_by_key(|e| e.key_size)
            .map(|e| e.date)
    }
}
