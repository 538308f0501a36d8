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

/// One CRL or OCSP response as seen by the upstream loader.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RevocationNode {
    /// Unique id within the diagnostic model.
    pub id: String,

    /// Whether this entry is a CRL or an OCSP response.
    pub revocation_type: RevocationType,

    /// Id of the certificate that signed this revocation data, when known.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub issuer_certificate_id: Option<String>,

    /// Production time of the revocation data.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub produced_at: Option<DateTime<Utc>>,

    /// Start of the period this data is authoritative for.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub this_update: Option<DateTime<Utc>>,

    /// Scheduled time of the next issue, when the issuer provides one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub next_update: Option<DateTime<Utc>>,

    /// Per-certificate status assertions carried by this entry.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub statuses: Vec<CertificateRevocationStatus>,
}

/// Kind of revocation data.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RevocationType {
    /// A certificate revocation list.
    Crl,

    /// An OCSP response.
    Ocsp,
}

/// Status asserted for one certificate by a revocation entry.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CertificateRevocationStatus {
    /// Id of the certificate the status applies to.
    pub certificate_id: String,

    /// Whether the certificate is revoked.
    pub revoked: bool,

    /// Revocation time, when revoked.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub revocation_time: Option<DateTime<Utc>>,

    /// Revocation reason, when the issuer provided one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
}

impl RevocationNode {
    /// Returns the status assertion for the given certificate, if this
    /// entry carries one.
    pub fn status_for(&self, certificate_id: &str) -> Option<&CertificateRevocationStatus> {
        self.statuses
            .iter()
            .find(|s| s.certificate_id == certificate_id)
    }
}
