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

use crate::{
    algorithms::SignatureAlgorithm,
    diagnostic::{DigestMatcher, RevocationNode, SignatureNode, SigningCertificateRef, TimestampNode},
};

/// A borrowed view over any token the building blocks can evaluate.
#[derive(Clone, Copy, Debug)]
pub(crate) enum TokenRef<'a> {
    Signature(&'a SignatureNode),
    Timestamp(&'a TimestampNode),
    Revocation(&'a RevocationNode),
}

impl<'a> TokenRef<'a> {
    pub(crate) fn id(&self) -> &'a str {
        match self {
            TokenRef::Signature(s) => &s.id,
            TokenRef::Timestamp(t) => &t.id,
            TokenRef::Revocation(r) => &r.id,
        }
    }

    /// The signed signing-certificate reference; revocation tokens carry
    /// only an issuer link and have none.
    pub(crate) fn signing_certificate_ref(&self) -> Option<&'a SigningCertificateRef> {
        match self {
            TokenRef::Signature(s) => s.signing_certificate_ref.as_ref(),
            TokenRef::Timestamp(t) => t.signing_certificate_ref.as_ref(),
            TokenRef::Revocation(_) => None,
        }
    }

    /// Id of the certificate this token was signed with, as resolved by the
    /// parser.
    pub(crate) fn signing_certificate_id(&self) -> Option<&'a str> {
        match self {
            TokenRef::Signature(s) => s
                .signing_certificate_ref
                .as_ref()
                .and_then(|r| r.certificate_id.as_deref()),
            TokenRef::Timestamp(t) => t
                .signing_certificate_ref
                .as_ref()
                .and_then(|r| r.certificate_id.as_deref()),
            TokenRef::Revocation(r) => r.issuer_certificate_id.as_deref(),
        }
    }

    pub(crate) fn digest_matchers(&self) -> &'a [DigestMatcher] {
        match self {
            TokenRef::Signature(s) => &s.digest_matchers,
            TokenRef::Timestamp(t) => &t.digest_matchers,
            TokenRef::Revocation(_) => &[],
        }
    }

    pub(crate) fn signature_algorithm(&self) -> Option<&'a SignatureAlgorithm> {
        match self {
            TokenRef::Signature(s) => s.signature_algorithm.as_ref(),
            TokenRef::Timestamp(t) => t.signature_algorithm.as_ref(),
            TokenRef::Revocation(_) => None,
        }
    }
}
