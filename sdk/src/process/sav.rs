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

//! Signature acceptance validation (SAV).
//!
//! Evaluates the policy's qualifying-property constraints in a fixed
//! sequence, each following the shared constraint primitive, then checks
//! the cryptographic suitability of the algorithms used for the signature
//! value itself.
//!
//! An algorithm beyond its acceptance period fails as `INDETERMINATE` /
//! `CRYPTO_CONSTRAINTS_FAILURE_NO_POE` unless a proof of existence predates
//! the expiration; an algorithm the policy never accepts fails as
//! `INVALID` / `SIG_CONSTRAINTS_FAILURE`.

use chrono::{DateTime, Utc};

use ades_verdict::{
    BlockResult, BlockResultBuilder, BlockType, Check, Indication, MessageTag, SubIndication,
};

use crate::{
    diagnostic::{SignatureNode, SignerRoleCategory, TimestampNode, TimestampType},
    policy::{level_of, CryptoVerdict, CryptographicSuite, TokenConstraints},
    process::{poe::PoeSet, token::TokenRef},
    DiagnosticModel,
};

pub(crate) fn signature_acceptance(
    model: &DiagnosticModel,
    signature: &SignatureNode,
    constraints: &TokenConstraints,
    suite: &CryptographicSuite,
    poe: &PoeSet,
    validation_time: DateTime<Utc>,
) -> BlockResult {
    let mut builder = BlockResultBuilder::new(BlockType::Sav);

    builder.check(Check::new(
        MessageTag::BbbSavIssv,
        signature.structurally_valid,
        level_of(constraints.structural_validation.as_ref()),
        Indication::Invalid,
        SubIndication::FormatFailure,
        MessageTag::BbbSavIssvAns,
    ));

    builder.check(Check::new(
        MessageTag::BbbSavIsqpstp,
        signature.claimed_signing_time.is_some(),
        level_of(constraints.signing_time.as_ref()),
        Indication::Invalid,
        SubIndication::SigConstraintsFailure,
        MessageTag::BbbSavIsqpstpAns,
    ));

    if let Some(rule) = &constraints.content_type {
        builder.check(Check::new(
            MessageTag::BbbSavIsqpctp,
            rule.matches(signature.content_type.as_deref()),
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::BbbSavIsqpctpAns,
        ));
    }

    if let Some(rule) = &constraints.content_hints {
        builder.check(Check::new(
            MessageTag::BbbSavIsqpchp,
            rule.matches(signature.content_hints.as_deref()),
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::BbbSavIsqpchpAns,
        ));
    }

    if let Some(rule) = &constraints.content_identifier {
        builder.check(Check::new(
            MessageTag::BbbSavIsqpcip,
            rule.matches(signature.content_identifier.as_deref()),
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::BbbSavIsqpcipAns,
        ));
    }

    if let Some(rule) = &constraints.commitment_type_indications {
        builder.check(Check::new(
            MessageTag::BbbSavIsqpxtip,
            rule.all_accepted(
                signature
                    .commitment_type_indications
                    .iter()
                    .map(String::as_str),
            ),
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::BbbSavIsqpxtipAns,
        ));
    }

    builder.check(Check::new(
        MessageTag::BbbSavIsqpslp,
        signature.signer_location.is_some(),
        level_of(constraints.signer_location.as_ref()),
        Indication::Invalid,
        SubIndication::SigConstraintsFailure,
        MessageTag::BbbSavIsqpslpAns,
    ));

    builder.check(Check::new(
        MessageTag::BbbSavIsqpctsip,
        model
            .timestamps_covering(&signature.id)
            .any(|t| t.timestamp_type == TimestampType::ContentTimestamp),
        level_of(constraints.content_timestamp.as_ref()),
        Indication::Invalid,
        SubIndication::SigConstraintsFailure,
        MessageTag::BbbSavIsqpctsipAns,
    ));

    if let Some(rule) = &constraints.claimed_roles {
        builder.check(Check::new(
            MessageTag::BbbSavIcrm,
            rule.all_present(
                signature
                    .roles_in(SignerRoleCategory::Claimed)
                    .map(|r| r.role.as_str()),
            ),
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::BbbSavIcrmAns,
        ));
    }

    if let Some(rule) = &constraints.certified_roles {
        builder.check(Check::new(
            MessageTag::BbbSavIcerrm,
            rule.all_present(
                signature
                    .roles_in(SignerRoleCategory::Certified)
                    .map(|r| r.role.as_str()),
            ),
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::BbbSavIcerrmAns,
        ));
    }

    builder.check(Check::new(
        MessageTag::BbbSavIuqpcsp,
        model.counter_signatures(&signature.id).next().is_some(),
        level_of(constraints.counter_signature.as_ref()),
        Indication::Invalid,
        SubIndication::SigConstraintsFailure,
        MessageTag::BbbSavIuqpcspAns,
    ));

    cryptographic_check(
        &mut builder,
        TokenRef::Signature(signature),
        constraints,
        suite,
        poe,
        validation_time,
    );

    builder.finish()
}

/// The abbreviated acceptance block for timestamp tokens: message imprint
/// checks plus the cryptographic constraint.
pub(crate) fn timestamp_acceptance(
    timestamp: &TimestampNode,
    constraints: &TokenConstraints,
    suite: &CryptographicSuite,
    poe: &PoeSet,
    validation_time: DateTime<Utc>,
) -> BlockResult {
    let mut builder = BlockResultBuilder::new(BlockType::Sav);

    let imprint = timestamp.message_imprint();

    builder.check(Check::new(
        MessageTag::BbbSavTspImidf,
        imprint.map(|m| m.found).unwrap_or(false),
        level_of(constraints.message_imprint_data_found.as_ref()),
        Indication::Indeterminate,
        SubIndication::SignedDataNotFound,
        MessageTag::BbbSavTspImidfAns,
    ));

    builder.check(Check::new(
        MessageTag::BbbSavTspImivc,
        timestamp.message_imprint_intact(),
        level_of(constraints.message_imprint_data_intact.as_ref()),
        Indication::Invalid,
        SubIndication::HashFailure,
        MessageTag::BbbSavTspImivcAns,
    ));

    cryptographic_check(
        &mut builder,
        TokenRef::Timestamp(timestamp),
        constraints,
        suite,
        poe,
        validation_time,
    );

    builder.finish()
}

fn cryptographic_check(
    builder: &mut BlockResultBuilder,
    token: TokenRef<'_>,
    constraints: &TokenConstraints,
    suite: &CryptographicSuite,
    poe: &PoeSet,
    validation_time: DateTime<Utc>,
) {
    let Some(rule) = &constraints.signature_cryptographic else {
        return;
    };

    let Some(algorithm) = token.signature_algorithm() else {
        // The parser could not determine the algorithm suite, so its
        // acceptability cannot be assessed.
        builder.check(Check::new(
            MessageTag::Asccm,
            false,
            rule.level,
            Indication::Indeterminate,
            SubIndication::CryptoConstraintsFailure,
            MessageTag::AsccmAns4,
        ));
        return;
    };

    let best_time = poe.poe_time(token.id()).min(validation_time);
    let verdict = suite.verify(
        algorithm.encryption,
        algorithm.digest,
        algorithm.key_length,
        best_time,
    );

    let check = match verdict {
        CryptoVerdict::Reliable => Check::new(
            MessageTag::Asccm,
            true,
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::AsccmAns1,
        ),
        CryptoVerdict::EncryptionAlgorithmNotAuthorised => Check::new(
            MessageTag::Asccm,
            false,
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::AsccmAns1,
        ),
        CryptoVerdict::DigestAlgorithmNotAuthorised => Check::new(
            MessageTag::Asccm,
            false,
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::AsccmAns2,
        ),
        CryptoVerdict::KeySizeTooSmall => Check::new(
            MessageTag::Asccm,
            false,
            rule.level,
            Indication::Invalid,
            SubIndication::SigConstraintsFailure,
            MessageTag::AsccmAns3,
        ),
        CryptoVerdict::Expired => Check::new(
            MessageTag::Asccm,
            false,
            rule.level,
            Indication::Indeterminate,
            SubIndication::CryptoConstraintsFailureNoPoe,
            MessageTag::AsccmAns5,
        ),
    };

    builder.check(check);
}
