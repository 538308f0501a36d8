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
    algorithms::{DigestAlgorithm, SignatureAlgorithm},
    diagnostic::DigestValue,
};

/// One signature as seen by the upstream parser.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignatureNode {
    /// Unique id within the diagnostic model.
    pub id: String,

    /// Id of the signature this one counter-signs, if any.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub parent_id: Option<String>,

    /// Signing time claimed in the signed attributes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub claimed_signing_time: Option<DateTime<Utc>>,

    /// Digest comparisons performed by the parser: signed data references,
    /// signed attributes, and the signature value itself.
    #[serde(default)]
    pub digest_matchers: Vec<DigestMatcher>,

    /// The signed signing-certificate reference, if present.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signing_certificate_ref: Option<SigningCertificateRef>,

    /// Algorithm suite used for the signature value.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signature_algorithm: Option<SignatureAlgorithm>,

    /// Whether the signature's structure conforms to its format schema.
    #[serde(default = "default_true")]
    pub structurally_valid: bool,

    /// Parser messages explaining structural problems, if any.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub structural_messages: Vec<String>,

    /// The signed `content-type` qualifying property.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content_type: Option<String>,

    /// The signed `content-hints` qualifying property.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content_hints: Option<String>,

    /// The signed `content-identifier` qualifying property.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content_identifier: Option<String>,

    /// The signed `commitment-type-indication` identifiers.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub commitment_type_indications: Vec<String>,

    /// The signed `signer-location` qualifying property.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signer_location: Option<String>,

    /// Claimed and certified signer roles.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub signer_roles: Vec<SignerRole>,

    /// Identifier of the signature policy declared by the signature, if an
    /// explicit policy is referenced.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub signature_policy_id: Option<String>,

    /// What the signature covers.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub signature_scopes: Vec<SignatureScope>,
}

fn default_true() -> bool {
    true
}

/// One digest comparison performed by the parser.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DigestMatcher {
    /// What this matcher verifies.
    pub matcher_type: DigestMatcherType,

    /// Reference name (e.g. an XML reference URI), when available.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<String>,

    /// Digest algorithm used for the comparison.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub digest_algorithm: Option<DigestAlgorithm>,

    /// Whether the referenced data could be located.
    pub found: bool,

    /// Whether the computed digest matched the protected value. `intact`
    /// implies `found`; the engine treats an intact-but-not-found matcher as
    /// not found.
    pub intact: bool,
}

/// Kind of data a [`DigestMatcher`] verifies.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DigestMatcherType {
    /// A reference to signed data (detached or enveloped content).
    SignedData,

    /// The signed properties / signed attributes structure.
    SignedProperties,

    /// A timestamp's message imprint.
    MessageImprint,

    /// The signature value verified against the signing certificate's
    /// public key.
    SignatureValue,
}

/// The signed signing-certificate reference.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SigningCertificateRef {
    /// Id of the certificate the reference resolved to, when the parser
    /// found it among the used certificates.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub certificate_id: Option<String>,

    /// Digest of the certificate as declared in the signed attribute.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub digest_algorithm: Option<DigestAlgorithm>,

    /// Declared digest value, paired with `digest_algorithm`.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub digest_value: Option<DigestValue>,

    /// The `issuer-serial` declared in the signed attribute.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub issuer_serial: Option<IssuerSerial>,

    /// How many times the signing certificate is referenced by the signed
    /// attribute. More than once fails the uniqueness constraint.
    #[serde(default = "default_one")]
    pub reference_count: u32,
}

fn default_one() -> u32 {
    1
}

/// Issuer distinguished name and serial number pair.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct IssuerSerial {
    /// Issuer distinguished name.
    pub issuer_name: String,

    /// Certificate serial number, decimal encoded.
    pub serial_number: String,
}

/// A claimed or certified signer role.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SignerRole {
    /// How the role is asserted.
    pub category: SignerRoleCategory,

    /// Role text.
    pub role: String,
}

/// How a signer role is asserted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignerRoleCategory {
    /// Claimed by the signer without third-party attestation.
    Claimed,

    /// Backed by an attribute certificate.
    Certified,
}

/// A portion of the document covered by a signature.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SignatureScope {
    /// Name of the covered object (e.g. a file name or element id).
    pub name: String,

    /// Human-readable description of the coverage.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,
}

impl SignatureNode {
    /// Returns a structurally valid signature with the given id and nothing
    /// else; callers fill in what their document actually contains.
    pub fn new<S: Into<String>>(id: S) -> Self {
        SignatureNode {
            id: id.into(),
            parent_id: None,
            claimed_signing_time: None,
            digest_matchers: vec![],
            signing_certificate_ref: None,
            signature_algorithm: None,
            structurally_valid: true,
            structural_messages: vec![],
            content_type: None,
            content_hints: None,
            content_identifier: None,
            commitment_type_indications: vec![],
            signer_location: None,
            signer_roles: vec![],
            signature_policy_id: None,
            signature_scopes: vec![],
        }
    }

    /// Returns the signer roles in the given category.
    pub fn roles_in(&self, category: SignerRoleCategory) -> impl Iterator<Item = &SignerRole> {
        self.signer_roles
            .iter()
            .filter(move |r| r.category == category)
    }
}
