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
    algorithms::SignatureAlgorithm,
    diagnostic::{DigestMatcher, DigestMatcherType, SigningCertificateRef},
};

/// One RFC 3161 timestamp token as seen by the upstream parser.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimestampNode {
    /// Unique id within the diagnostic model.
    pub id: String,

    /// Kind of timestamp.
    pub timestamp_type: TimestampType,

    /// Generation time asserted by the TSA.
    pub production_time: DateTime<Utc>,

    /// Digest comparisons: the message imprint and, when verified, the
    /// timestamp's own signature value.
    #[serde(default)]
    pub digest_matchers: Vec<DigestMatcher>,

    /// The TSA certificate reference, if present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signing_certificate_ref: Option<SigningCertificateRef>,

    /// Algorithm suite used for the timestamp's signature.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signature_algorithm: Option<SignatureAlgorithm>,

    /// Tokens this timestamp covers.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub timestamped_objects: Vec<TimestampedObject>,
}

/// Kind of timestamp, which determines what it proves existence of.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampType {
    /// Covers the signed content, predating the signature.
    ContentTimestamp,

    /// Covers the signature value.
    SignatureTimestamp,

    /// Covers the signature plus its validation data.
    ValidationDataTimestamp,

    /// Covers references to validation data only.
    ValidationDataRefsOnlyTimestamp,

    /// Archive timestamp covering the whole signature structure.
    ArchiveTimestamp,
}

/// A token covered by a timestamp.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TimestampedObject {
    /// Kind of the covered token.
    pub object_type: TimestampedObjectType,

    /// Id of the covered token.
    pub id: String,
}

/// Kind of token a timestamp can cover.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimestampedObjectType {
    /// A signature.
    Signature,

    /// A certificate.
    Certificate,

    /// A revocation entry.
    Revocation,

    /// Another timestamp.
    Timestamp,

    /// Signed data outside the signature structure.
    SignedData,
}

impl TimestampNode {
    /// Returns the message imprint matcher, when the parser provided one.
    pub fn message_imprint(&self) -> Option<&DigestMatcher> {
        self.digest_matchers
            .iter()
            .find(|m| m.matcher_type == DigestMatcherType::MessageImprint)
    }

    /// Returns `true` when the message imprint was located and matched.
    pub fn message_imprint_intact(&self) -> bool {
        self.message_imprint()
            .map(|m| m.found && m.intact)
            .unwrap_or(false)
    }
}
