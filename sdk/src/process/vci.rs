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

//! Validation context initialisation (VCI).
//!
//! Determines whether the signature satisfies the policy's signature-policy
//! requirement. The accepted-values set follows the usual convention:
//! `NO_POLICY` accepts signatures without an explicit policy, `ANY_POLICY`
//! (or `*`) accepts any explicit policy, and any other entry is an accepted
//! policy identifier.

use ades_verdict::{
    BlockResult, BlockResultBuilder, BlockType, Check, Indication, MessageTag, SubIndication,
};

use crate::{diagnostic::SignatureNode, policy::TokenConstraints};

/// Accepted-values entry matching signatures without an explicit policy.
pub const NO_POLICY: &str = "NO_POLICY";

/// Accepted-values entry matching any explicit policy.
pub const ANY_POLICY: &str = "ANY_POLICY";

pub(crate) fn initialize_validation_context(
    signature: &SignatureNode,
    constraints: &TokenConstraints,
) -> BlockResult {
    let mut builder = BlockResultBuilder::new(BlockType::Vci);

    if let Some(rule) = &constraints.signature_policy {
        match signature.signature_policy_id.as_deref() {
            None => {
                builder.check(Check::new(
                    MessageTag::BbbVciIspk,
                    rule.accepts(NO_POLICY),
                    rule.level,
                    Indication::Indeterminate,
                    SubIndication::NoPolicy,
                    MessageTag::BbbVciIspkAns1,
                ));
            }
            Some(policy_id) => {
                builder.check(Check::new(
                    MessageTag::BbbVciIspk,
                    true,
                    rule.level,
                    Indication::Indeterminate,
                    SubIndication::NoPolicy,
                    MessageTag::BbbVciIspkAns1,
                ));
                builder.check(
                    Check::new(
                        MessageTag::BbbVciIspa,
                        rule.accepts(policy_id) || rule.accepts(ANY_POLICY),
                        rule.level,
                        Indication::Indeterminate,
                        SubIndication::PolicyProcessingError,
                        MessageTag::BbbVciIspaAns,
                    )
                    .with_info(policy_id.to_owned()),
                );
            }
        }
    }

    builder.finish()
}
