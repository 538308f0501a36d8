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

//! X.509 certificate validation (XCV).
//!
//! Walks the signing certificate's chain up to a trust anchor and applies
//! the per-certificate constraints: validity period, revocation data
//! presence, freshness and status, key usage of CA links, and cryptographic
//! strength. The trust anchor itself is not validated.
//!
//! Issuer links come from the upstream loader and are expected to be
//! acyclic; a loop is still detected defensively and concludes
//! `INDETERMINATE` / `CERTIFICATE_CHAIN_GENERAL_FAILURE` instead of
//! spinning.

use chrono::{DateTime, Utc};

use ades_verdict::{
    BlockResult, BlockResultBuilder, BlockType, Check, Indication, Level, MessageTag,
    SubIndication,
};

use crate::{
    algorithms::KeyUsageBit,
    diagnostic::{CertificateNode, RevocationNode},
    policy::{level_of, CryptoVerdict, CryptographicSuite, TokenConstraints},
    process::poe::PoeSet,
    Context, DiagnosticModel,
};

pub(crate) fn certificate_chain_validation(
    model: &DiagnosticModel,
    target: Option<&str>,
    context: Context,
    constraints: &TokenConstraints,
    suite: &CryptographicSuite,
    poe: &PoeSet,
    validation_time: DateTime<Utc>,
) -> BlockResult {
    let mut builder = BlockResultBuilder::new(BlockType::Xcv);

    let Some(certificate) = target.and_then(|id| model.certificate(id)) else {
        builder.check(Check::new(
            MessageTag::BbbXcvCccbb,
            false,
            Level::Fail,
            Indication::Indeterminate,
            SubIndication::NoSigningCertificateFound,
            chain_answer(context),
        ));
        return builder.finish();
    };

    let walk = build_chain(model, certificate);

    if let ChainWalk::Cycle(cycle_at) = &walk {
        log::warn!(
            "issuer loop detected while walking the chain of certificate {}",
            certificate.id
        );
        builder.check(
            Check::new(
                MessageTag::BbbXcvCccbb,
                false,
                Level::Fail,
                Indication::Indeterminate,
                SubIndication::CertificateChainGeneralFailure,
                chain_answer(context),
            )
            .with_info(format!("issuer loop detected at certificate {cycle_at}")),
        );
        return builder.finish();
    }

    let (chain, trusted) = match walk {
        ChainWalk::Trusted(chain) => (chain, true),
        ChainWalk::DeadEnd(chain) => (chain, false),
        ChainWalk::Cycle(_) => unreachable!("handled above"),
    };

    builder.check(Check::new(
        MessageTag::BbbXcvCccbb,
        trusted,
        level_of(constraints.certificate_chain_trust.as_ref()),
        Indication::Indeterminate,
        SubIndication::NoCertificateChainFound,
        chain_answer(context),
    ));
    if builder.failed() {
        return builder.finish();
    }

    for (position, certificate) in chain.iter().copied().enumerate() {
        if certificate.trusted {
            // Trust anchors terminate the walk and are not validated.
            break;
        }

        validity_check(&mut builder, certificate, constraints, validation_time);

        if context != Context::Revocation {
            revocation_checks(&mut builder, model, certificate, constraints, validation_time);
        }

        if position > 0 {
            builder.check(
                Check::new(
                    MessageTag::BbbXcvIscgku,
                    certificate.has_key_usage(KeyUsageBit::KeyCertSign),
                    level_of(constraints.ca_certificate_key_usage.as_ref()),
                    Indication::Invalid,
                    SubIndication::ChainConstraintsFailure,
                    MessageTag::BbbXcvIscgkuAns,
                )
                .with_info(certificate.id.clone()),
            );
        }

        cryptographic_check(
            &mut builder,
            certificate,
            constraints,
            suite,
            poe,
            validation_time,
        );
    }

    builder.finish()
}

/// Context-specific flavor of the "chain could not be built" answer.
fn chain_answer(context: Context) -> MessageTag {
    match context {
        Context::Signature | Context::CounterSignature => MessageTag::BbbXcvCccbbSigAns,
        Context::Timestamp => MessageTag::BbbXcvCccbbTspAns,
        Context::Revocation => MessageTag::BbbXcvCccbbRevAns,
    }
}

enum ChainWalk<'a> {
    /// The chain reached a configured trust anchor.
    Trusted(Vec<&'a CertificateNode>),

    /// The chain ended without reaching a trust anchor: a self-signed
    /// non-anchor, a missing issuer link, or an orphan issuer reference.
    DeadEnd(Vec<&'a CertificateNode>),

    /// An issuer link pointed back into the chain; the id is the repeated
    /// certificate.
    Cycle(String),
}

fn build_chain<'a>(model: &'a DiagnosticModel, leaf: &'a CertificateNode) -> ChainWalk<'a> {
    let mut chain = vec![leaf];
    let mut current = leaf;

    loop {
        if current.trusted {
            return ChainWalk::Trusted(chain);
        }
        if current.self_signed {
            return ChainWalk::DeadEnd(chain);
        }

        let Some(issuer_id) = current.issuer_certificate_id.as_deref() else {
            return ChainWalk::DeadEnd(chain);
        };

        if chain.iter().any(|c| c.id == issuer_id) {
            return ChainWalk::Cycle(issuer_id.to_owned());
        }

        match model.certificate(issuer_id) {
            Some(issuer) => {
                chain.push(issuer);
                current = issuer;
            }
            // Orphan issuer reference.
            None => return ChainWalk::DeadEnd(chain),
        }
    }
}

fn validity_check(
    builder: &mut BlockResultBuilder,
    certificate: &CertificateNode,
    constraints: &TokenConstraints,
    validation_time: DateTime<Utc>,
) {
    let sub_indication = if validation_time > certificate.not_after {
        SubIndication::Expired
    } else {
        SubIndication::NotYetValid
    };

    builder.check(
        Check::new(
            MessageTag::BbbXcvIctivrsc,
            certificate.is_valid_at(validation_time),
            level_of(constraints.certificate_validity_range.as_ref()),
            Indication::Indeterminate,
            sub_indication,
            MessageTag::BbbXcvIctivrscAns,
        )
        .with_info(certificate.id.clone()),
    );
}

fn revocation_checks(
    builder: &mut BlockResultBuilder,
    model: &DiagnosticModel,
    certificate: &CertificateNode,
    constraints: &TokenConstraints,
    validation_time: DateTime<Utc>,
) {
    let revocations: Vec<&RevocationNode> = certificate
        .revocation_ids
        .iter()
        .filter_map(|id| model.revocation(id))
        .collect();

    if !builder.check(
        Check::new(
            MessageTag::BbbXcvIrdpfc,
            !revocations.is_empty(),
            level_of(constraints.revocation_data_available.as_ref()),
            Indication::Indeterminate,
            SubIndication::RevocationNotAvailable,
            MessageTag::BbbXcvIrdpfcAns,
        )
        .with_info(certificate.id.clone()),
    ) {
        return;
    }
    if revocations.is_empty() {
        // The availability constraint is IGNORE/WARN/INFORM; there is
        // nothing further to evaluate for this certificate.
        return;
    }

    let freshest = revocations
        .iter()
        .copied()
        .max_by_key(|r| r.this_update.or(r.produced_at));

    if let Some(revocation) = freshest {
        builder.check(
            Check::new(
                MessageTag::BbbXcvIrif,
                is_fresh(revocation, constraints, validation_time),
                level_of(constraints.revocation_data_fresh.as_ref()),
                Indication::Indeterminate,
                SubIndication::TryLater,
                MessageTag::BbbXcvIrifAns,
            )
            .with_info(revocation.id.clone()),
        );
    }

    let revoked_at_validation_time = revocations.iter().any(|r| {
        r.status_for(&certificate.id).is_some_and(|status| {
            status.revoked
                && status
                    .revocation_time
                    .map(|t| t <= validation_time)
                    .unwrap_or(true)
        })
    });

    builder.check(
        Check::new(
            MessageTag::BbbXcvIscr,
            !revoked_at_validation_time,
            level_of(constraints.certificate_not_revoked.as_ref()),
            Indication::Invalid,
            SubIndication::Revoked,
            MessageTag::BbbXcvIscrAns,
        )
        .with_info(certificate.id.clone()),
    );
}

/// Revocation data is fresh when it was issued on or before the validation
/// instant and its `next_update` has not passed. Data without `next_update`
/// falls back to the policy's tolerance window.
fn is_fresh(
    revocation: &RevocationNode,
    constraints: &TokenConstraints,
    validation_time: DateTime<Utc>,
) -> bool {
    let Some(this_update) = revocation.this_update.or(revocation.produced_at) else {
        return false;
    };
    if this_update > validation_time {
        return false;
    }

    match revocation.next_update {
        Some(next_update) => validation_time < next_update,
        None => {
            if constraints.revocation_next_update_required {
                return false;
            }
            match constraints.revocation_freshness_tolerance_seconds {
                Some(tolerance) => (validation_time - this_update).num_seconds() <= tolerance,
                None => true,
            }
        }
    }
}

fn cryptographic_check(
    builder: &mut BlockResultBuilder,
    certificate: &CertificateNode,
    constraints: &TokenConstraints,
    suite: &CryptographicSuite,
    poe: &PoeSet,
    validation_time: DateTime<Utc>,
) {
    let Some(rule) = &constraints.certificate_cryptographic else {
        return;
    };
    // Without the issuer's algorithm suite there is nothing to evaluate.
    let Some(signature) = &certificate.certificate_signature else {
        return;
    };

    let best_time = poe.poe_time(&certificate.id).min(validation_time);
    let verdict = suite.verify(
        certificate.public_key_algorithm,
        signature.digest,
        Some(certificate.public_key_size),
        best_time,
    );

    let (passed, sub_indication, answer) = match verdict {
        CryptoVerdict::Reliable => (true, SubIndication::CryptoConstraintsFailure, MessageTag::AsccmAns1),
        CryptoVerdict::EncryptionAlgorithmNotAuthorised => (
            false,
            SubIndication::CryptoConstraintsFailure,
            MessageTag::AsccmAns1,
        ),
        CryptoVerdict::DigestAlgorithmNotAuthorised => (
            false,
            SubIndication::CryptoConstraintsFailure,
            MessageTag::AsccmAns2,
        ),
        CryptoVerdict::KeySizeTooSmall => (
            false,
            SubIndication::CryptoConstraintsFailure,
            MessageTag::AsccmAns3,
        ),
        CryptoVerdict::Expired => (
            false,
            SubIndication::CryptoConstraintsFailureNoPoe,
            MessageTag::AsccmAns5,
        ),
    };

    builder.check(
        Check::new(
            MessageTag::Asccm,
            passed,
            rule.level,
            Indication::Indeterminate,
            sub_indication,
            answer,
        )
        .with_info(certificate.id.clone()),
    );
}
