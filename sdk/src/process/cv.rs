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

//! Cryptographic verification (CV).
//!
//! Evaluates the digest matchers computed by the upstream parser. The
//! checks are inherent to the model rather than policy-leveled, and their
//! order drives the sub-indication:
//!
//! 1. every referenced data object must have been found
//!    (`SIGNED_DATA_NOT_FOUND` otherwise, nothing else is checked);
//! 2. every content reference must be intact (`HASH_FAILURE`);
//! 3. the signature value itself must verify (`SIG_CRYPTO_FAILURE`).

use ades_verdict::{
    BlockResult, BlockResultBuilder, BlockType, Check, Indication, Level, MessageTag,
    SubIndication,
};

use crate::{diagnostic::DigestMatcherType, process::token::TokenRef};

pub(crate) fn cryptographic_verification(token: TokenRef<'_>) -> BlockResult {
    let mut builder = BlockResultBuilder::new(BlockType::Cv);
    let matchers = token.digest_matchers();

    // `intact` without `found` is contradictory input; `found` governs.
    let all_found = matchers.iter().all(|m| m.found);
    if !builder.check(Check::new(
        MessageTag::BbbCvIrdof,
        all_found,
        Level::Fail,
        Indication::Indeterminate,
        SubIndication::SignedDataNotFound,
        MessageTag::BbbCvIrdofAns,
    )) {
        return builder.finish();
    }

    let references_intact = matchers
        .iter()
        .filter(|m| m.matcher_type != DigestMatcherType::SignatureValue)
        .all(|m| m.intact);
    if !builder.check(Check::new(
        MessageTag::BbbCvIrdoi,
        references_intact,
        Level::Fail,
        Indication::Invalid,
        SubIndication::HashFailure,
        MessageTag::BbbCvIrdoiAns,
    )) {
        return builder.finish();
    }

    let signature_intact = matchers
        .iter()
        .filter(|m| m.matcher_type == DigestMatcherType::SignatureValue)
        .all(|m| m.intact);
    builder.check(Check::new(
        MessageTag::BbbCvIsi,
        signature_intact,
        Level::Fail,
        Indication::Invalid,
        SubIndication::SigCryptoFailure,
        MessageTag::BbbCvIsiAns,
    ));

    builder.finish()
}
