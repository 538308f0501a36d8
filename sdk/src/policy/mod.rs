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

//! The validation policy: a strongly-typed tree of named constraints.
//!
//! Every constraint is optional; an absent constraint is `IGNORE` — it is
//! never evaluated and never appears in a block result. The types here are
//! plain serde structs so a policy can be loaded from any structured config
//! format; file handling itself is the caller's concern.

mod crypto_suite;
mod rules;

use serde::{Deserialize, Serialize};

pub use crypto_suite::{
    CryptoVerdict, CryptographicSuite, DigestAlgorithmRule, EncryptionAlgorithmRule,
    KeySizeExpiration,
};
pub use rules::{level_of, Level, LevelRule, MultiValuesRule, ValueRule, ANY_VALUE};

use crate::{Context, Error, Result};

/// A full validation policy: one constraint group per validation context,
/// plus the shared cryptographic suite.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ValidationPolicy {
    /// Policy name, carried through to reports.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    /// Constraints applied to top-level signatures.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signature_constraints: Option<TokenConstraints>,

    /// Constraints applied to counter-signatures.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub counter_signature_constraints: Option<TokenConstraints>,

    /// Constraints applied to timestamp tokens.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timestamp_constraints: Option<TokenConstraints>,

    /// Constraints applied to revocation tokens.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revocation_constraints: Option<TokenConstraints>,

    /// The acceptable-algorithm table shared by all contexts.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cryptographic: Option<CryptographicSuite>,
}

impl ValidationPolicy {
    /// Returns the constraint group for the given context.
    ///
    /// Calling this for a context the policy does not define is a
    /// configuration bug and fails fast, in contrast to individual absent
    /// constraints which silently default to `IGNORE`.
    pub fn constraints_for(&self, context: Context) -> Result<&TokenConstraints> {
        let group = match context {
            Context::Signature => self.signature_constraints.as_ref(),
            Context::CounterSignature => self.counter_signature_constraints.as_ref(),
            Context::Timestamp => self.timestamp_constraints.as_ref(),
            Context::Revocation => self.revocation_constraints.as_ref(),
        };
        group.ok_or(Error::UnsupportedContext(context))
    }

    /// Returns the cryptographic suite, or an empty (accept-everything)
    /// table when the policy does not carry one.
    pub fn cryptographic_suite(&self) -> CryptographicSuite {
        self.cryptographic.clone().unwrap_or_default()
    }
}

/// Named constraints for one validation context.
///
/// Field order follows the building blocks that consume them: ISC, XCV,
/// VCI, then SAV.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConstraints {
    // -- identification of the signing certificate --
    /// Key usage bits the signing certificate must assert.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_certificate_key_usage: Option<MultiValuesRule>,

    /// The signing certificate must be referenced exactly once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_signing_certificate_reference: Option<LevelRule>,

    // -- X.509 certificate validation --
    /// The chain must reach a configured trust anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_chain_trust: Option<LevelRule>,

    /// Every chain certificate must be within its validity period.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_validity_range: Option<LevelRule>,

    /// Revocation data must be present for every chain certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_data_available: Option<LevelRule>,

    /// Present revocation data must be fresh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_data_fresh: Option<LevelRule>,

    /// Maximum age in seconds of revocation data without a `next_update`
    /// field before it is no longer considered fresh.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation_freshness_tolerance_seconds: Option<i64>,

    /// Whether revocation data lacking a `next_update` field is rejected
    /// outright by the freshness check.
    pub revocation_next_update_required: bool,

    /// No chain certificate may be revoked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_not_revoked: Option<LevelRule>,

    /// CA certificates in the chain must assert `keyCertSign`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_certificate_key_usage: Option<LevelRule>,

    /// Chain certificates must use acceptable algorithms and key sizes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate_cryptographic: Option<LevelRule>,

    // -- validation context initialisation --
    /// Accepted signature policy identifiers. `*` accepts any explicit
    /// policy; `NO_POLICY` accepts signatures without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_policy: Option<MultiValuesRule>,

    // -- signature acceptance validation --
    /// The signature structure must conform to its format schema.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structural_validation: Option<LevelRule>,

    /// The signed `signing-time` property must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_time: Option<LevelRule>,

    /// Expected `content-type` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ValueRule>,

    /// Expected `content-hints` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hints: Option<ValueRule>,

    /// Expected `content-identifier` value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_identifier: Option<ValueRule>,

    /// Accepted `commitment-type-indication` identifiers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commitment_type_indications: Option<MultiValuesRule>,

    /// The signed `signer-location` property must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signer_location: Option<LevelRule>,

    /// A content timestamp must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_timestamp: Option<LevelRule>,

    /// Claimed roles that must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claimed_roles: Option<MultiValuesRule>,

    /// Certified roles that must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certified_roles: Option<MultiValuesRule>,

    /// A counter-signature must be present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counter_signature: Option<LevelRule>,

    /// The signature value must use acceptable algorithms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_cryptographic: Option<LevelRule>,

    // -- timestamp acceptance --
    /// The timestamp's message imprint data must be found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_imprint_data_found: Option<LevelRule>,

    /// The timestamp's message imprint must verify.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_imprint_data_intact: Option<LevelRule>,
}
