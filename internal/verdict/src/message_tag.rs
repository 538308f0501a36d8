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

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Identifies a single validation rule.
///
/// Question tags (e.g. [`MessageTag::BbbIcsIsci`]) name the constraints
/// listed in a block result; answer tags (the `*Ans` variants) are the codes
/// recorded on a conclusion when the corresponding rule fails.
///
/// Tags serialize as their stable key (e.g. `"BBB_ICS_ISCI"`), which is what
/// report renderers match on.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[allow(missing_docs)] // the per-tag text lives in `description()`
pub enum MessageTag {
    // -- identification of the signing certificate --
    BbbIcsIsci,
    BbbIcsIsciAns,
    BbbIcsIcdvv,
    BbbIcsIcdvvAns,
    BbbIcsAidnasne,
    BbbIcsAidnasneAns,
    BbbIcsIscgku,
    BbbIcsIscgkuAns,
    BbbIcsScioo,
    BbbIcsSciooAns,

    // -- cryptographic verification --
    BbbCvIrdof,
    BbbCvIrdofAns,
    BbbCvIrdoi,
    BbbCvIrdoiAns,
    BbbCvIsi,
    BbbCvIsiAns,

    // -- X.509 certificate validation --
    BbbXcvCccbb,
    BbbXcvCccbbAns,
    BbbXcvCccbbSigAns,
    BbbXcvCccbbTspAns,
    BbbXcvCccbbRevAns,
    BbbXcvIctivrsc,
    BbbXcvIctivrscAns,
    BbbXcvIrdpfc,
    BbbXcvIrdpfcAns,
    BbbXcvIrif,
    BbbXcvIrifAns,
    BbbXcvIscr,
    BbbXcvIscrAns,
    BbbXcvIscgku,
    BbbXcvIscgkuAns,

    // -- validation context initialisation --
    BbbVciIspk,
    BbbVciIspkAns1,
    BbbVciIspa,
    BbbVciIspaAns,

    // -- signature acceptance validation --
    BbbSavIssv,
    BbbSavIssvAns,
    BbbSavIsqpstp,
    BbbSavIsqpstpAns,
    BbbSavIsqpctp,
    BbbSavIsqpctpAns,
    BbbSavIsqpchp,
    BbbSavIsqpchpAns,
    BbbSavIsqpcip,
    BbbSavIsqpcipAns,
    BbbSavIsqpxtip,
    BbbSavIsqpxtipAns,
    BbbSavIsqpslp,
    BbbSavIsqpslpAns,
    BbbSavIsqpctsip,
    BbbSavIsqpctsipAns,
    BbbSavIcrm,
    BbbSavIcrmAns,
    BbbSavIcerrm,
    BbbSavIcerrmAns,
    BbbSavIuqpcsp,
    BbbSavIuqpcspAns,
    BbbSavTspImidf,
    BbbSavTspImidfAns,
    BbbSavTspImivc,
    BbbSavTspImivcAns,

    // -- cryptographic constraints (shared by SAV and XCV) --
    Asccm,
    AsccmAns1,
    AsccmAns2,
    AsccmAns3,
    AsccmAns4,
    AsccmAns5,
}

impl MessageTag {
    /// Returns the stable key for this tag.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BbbIcsIsci => "BBB_ICS_ISCI",
            Self::BbbIcsIsciAns => "BBB_ICS_ISCI_ANS",
            Self::BbbIcsIcdvv => "BBB_ICS_ICDVV",
            Self::BbbIcsIcdvvAns => "BBB_ICS_ICDVV_ANS",
            Self::BbbIcsAidnasne => "BBB_ICS_AIDNASNE",
            Self::BbbIcsAidnasneAns => "BBB_ICS_AIDNASNE_ANS",
            Self::BbbIcsIscgku => "BBB_ICS_ISCGKU",
            Self::BbbIcsIscgkuAns => "BBB_ICS_ISCGKU_ANS",
            Self::BbbIcsScioo => "BBB_ICS_SCIOO",
            Self::BbbIcsSciooAns => "BBB_ICS_SCIOO_ANS",
            Self::BbbCvIrdof => "BBB_CV_IRDOF",
            Self::BbbCvIrdofAns => "BBB_CV_IRDOF_ANS",
            Self::BbbCvIrdoi => "BBB_CV_IRDOI",
            Self::BbbCvIrdoiAns => "BBB_CV_IRDOI_ANS",
            Self::BbbCvIsi => "BBB_CV_ISI",
            Self::BbbCvIsiAns => "BBB_CV_ISI_ANS",
            Self::BbbXcvCccbb => "BBB_XCV_CCCBB",
            Self::BbbXcvCccbbAns => "BBB_XCV_CCCBB_ANS",
            Self::BbbXcvCccbbSigAns => "BBB_XCV_CCCBB_SIG_ANS",
            Self::BbbXcvCccbbTspAns => "BBB_XCV_CCCBB_TSP_ANS",
            Self::BbbXcvCccbbRevAns => "BBB_XCV_CCCBB_REV_ANS",
            Self::BbbXcvIctivrsc => "BBB_XCV_ICTIVRSC",
            Self::BbbXcvIctivrscAns => "BBB_XCV_ICTIVRSC_ANS",
            Self::BbbXcvIrdpfc => "BBB_XCV_IRDPFC",
            Self::BbbXcvIrdpfcAns => "BBB_XCV_IRDPFC_ANS",
            Self::BbbXcvIrif => "BBB_XCV_IRIF",
            Self::BbbXcvIrifAns => "BBB_XCV_IRIF_ANS",
            Self::BbbXcvIscr => "BBB_XCV_ISCR",
            Self::BbbXcvIscrAns => "BBB_XCV_ISCR_ANS",
            Self::BbbXcvIscgku => "BBB_XCV_ISCGKU",
            Self::BbbXcvIscgkuAns => "BBB_XCV_ISCGKU_ANS",
            Self::BbbVciIspk => "BBB_VCI_ISPK",
            Self::BbbVciIspkAns1 => "BBB_VCI_ISPK_ANS_1",
            Self::BbbVciIspa => "BBB_VCI_ISPA",
            Self::BbbVciIspaAns => "BBB_VCI_ISPA_ANS",
            Self::BbbSavIssv => "BBB_SAV_ISSV",
            Self::BbbSavIssvAns => "BBB_SAV_ISSV_ANS",
            Self::BbbSavIsqpstp => "BBB_SAV_ISQPSTP",
            Self::BbbSavIsqpstpAns => "BBB_SAV_ISQPSTP_ANS",
            Self::BbbSavIsqpctp => "BBB_SAV_ISQPCTP",
            Self::BbbSavIsqpctpAns => "BBB_SAV_ISQPCTP_ANS",
            Self::BbbSavIsqpchp => "BBB_SAV_ISQPCHP",
            Self::BbbSavIsqpchpAns => "BBB_SAV_ISQPCHP_ANS",
            Self::BbbSavIsqpcip => "BBB_SAV_ISQPCIP",
            Self::BbbSavIsqpcipAns => "BBB_SAV_ISQPCIP_ANS",
            Self::BbbSavIsqpxtip => "BBB_SAV_ISQPXTIP",
            Self::BbbSavIsqpxtipAns => "BBB_SAV_ISQPXTIP_ANS",
            Self::BbbSavIsqpslp => "BBB_SAV_ISQPSLP",
            Self::BbbSavIsqpslpAns => "BBB_SAV_ISQPSLP_ANS",
            Self::BbbSavIsqpctsip => "BBB_SAV_ISQPCTSIP",
            Self::BbbSavIsqpctsipAns => "BBB_SAV_ISQPCTSIP_ANS",
            Self::BbbSavIcrm => "BBB_SAV_ICRM",
            Self::BbbSavIcrmAns => "BBB_SAV_ICRM_ANS",
            Self::BbbSavIcerrm => "BBB_SAV_ICERRM",
            Self::BbbSavIcerrmAns => "BBB_SAV_ICERRM_ANS",
            Self::BbbSavIuqpcsp => "BBB_SAV_IUQPCSP",
            Self::BbbSavIuqpcspAns => "BBB_SAV_IUQPCSP_ANS",
            Self::BbbSavTspImidf => "BBB_SAV_TSP_IMIDF",
            Self::BbbSavTspImidfAns => "BBB_SAV_TSP_IMIDF_ANS",
            Self::BbbSavTspImivc => "BBB_SAV_TSP_IMIVC",
            Self::BbbSavTspImivcAns => "BBB_SAV_TSP_IMIVC_ANS",
            Self::Asccm => "ASCCM",
            Self::AsccmAns1 => "ASCCM_ANS_1",
            Self::AsccmAns2 => "ASCCM_ANS_2",
            Self::AsccmAns3 => "ASCCM_ANS_3",
            Self::AsccmAns4 => "ASCCM_ANS_4",
            Self::AsccmAns5 => "ASCCM_ANS_5",
        }
    }

    /// Returns the English text for this tag.
    pub fn description(&self) -> &'static str {
        match self {
            Self::BbbIcsIsci => "Is there an identified candidate for the signing certificate?",
            Self::BbbIcsIsciAns => "There is no candidate for the signing certificate!",
            Self::BbbIcsIcdvv => "Is the certificate's digest value valid?",
            Self::BbbIcsIcdvvAns => "The signing certificate digest value does not match!",
            Self::BbbIcsAidnasne => "Are the issuer distinguished name and the serial number equal?",
            Self::BbbIcsAidnasneAns => "The 'issuer-serial' attribute is absent or does not match!",
            Self::BbbIcsIscgku => "Has the signing certificate the expected key-usage?",
            Self::BbbIcsIscgkuAns => "The signing certificate has not the expected key-usage!",
            Self::BbbIcsScioo => "Is the signing certificate referenced only once?",
            Self::BbbIcsSciooAns => "The signing certificate is referenced more than once!",
            Self::BbbCvIrdof => "Is the reference data object(s) found?",
            Self::BbbCvIrdofAns => "The reference data object(s) is not found!",
            Self::BbbCvIrdoi => "Is the reference data object(s) intact?",
            Self::BbbCvIrdoiAns => "The reference data object(s) is not intact!",
            Self::BbbCvIsi => "Is the signature intact?",
            Self::BbbCvIsiAns => "The signature is not intact!",
            Self::BbbXcvCccbb => "Can the certificate chain be built till the trust anchor?",
            Self::BbbXcvCccbbAns => "The certificate chain is not trusted, there is no trusted anchor.",
            Self::BbbXcvCccbbSigAns => {
                "The certificate chain for signature is not trusted, there is no trusted anchor."
            }
            Self::BbbXcvCccbbTspAns => {
                "The certificate chain for timestamp is not trusted, there is no trusted anchor."
            }
            Self::BbbXcvCccbbRevAns => {
                "The certificate chain for revocation data is not trusted, there is no trusted anchor."
            }
            Self::BbbXcvIctivrsc => {
                "Is the current time in the validity range of the signer's certificate?"
            }
            Self::BbbXcvIctivrscAns => {
                "The current time is not in the validity range of the signer's certificate."
            }
            Self::BbbXcvIrdpfc => "Is the revocation data present for the certificate?",
            Self::BbbXcvIrdpfcAns => "No revocation data for the certificate",
            Self::BbbXcvIrif => "Is the revocation information fresh for the certificate?",
            Self::BbbXcvIrifAns => "The revocation status information is not considered as 'fresh'.",
            Self::BbbXcvIscr => "Is the certificate not revoked?",
            Self::BbbXcvIscrAns => "The certificate is revoked!",
            Self::BbbXcvIscgku => "Has the certificate given key-usage?",
            Self::BbbXcvIscgkuAns => "The certificate has not expected key-usage!",
            Self::BbbVciIspk => "Is the signature policy known?",
            Self::BbbVciIspkAns1 => "The signature policy is mandatory!",
            Self::BbbVciIspa => "Is the signature policy available?",
            Self::BbbVciIspaAns => "The signature policy is not available!",
            Self::BbbSavIssv => "Is the structure of the signature valid?",
            Self::BbbSavIssvAns => "The structure of the signature is not valid!",
            Self::BbbSavIsqpstp => "Is signed qualifying property: 'signing-time' present?",
            Self::BbbSavIsqpstpAns => {
                "The signed qualifying property: 'signing-time' is not present!"
            }
            Self::BbbSavIsqpctp => "Is signed qualifying property: 'content-type' present?",
            Self::BbbSavIsqpctpAns => {
                "The signed qualifying property: 'content-type' is not present!"
            }
            Self::BbbSavIsqpchp => "Is signed qualifying property: 'content-hints' present?",
            Self::BbbSavIsqpchpAns => {
                "The signed qualifying property: 'content-hints' is not present!"
            }
            Self::BbbSavIsqpcip => "Is signed qualifying property: 'content-identifier' present?",
            Self::BbbSavIsqpcipAns => {
                "The signed qualifying property: 'content-identifier' is not present!"
            }
            Self::BbbSavIsqpxtip => {
                "Is signed qualifying property: 'commitment-type-indication' present?"
            }
            Self::BbbSavIsqpxtipAns => {
                "The signed qualifying property: 'commitment-type-indication' is not present!"
            }
            Self::BbbSavIsqpslp => "Is signed qualifying property: 'signer-location' present?",
            Self::BbbSavIsqpslpAns => {
                "The signed qualifying property: 'signer-location' is not present!"
            }
            Self::BbbSavIsqpctsip => "Is signed qualifying property: 'content-timestamp' present?",
            Self::BbbSavIsqpctsipAns => {
                "The signed qualifying property: 'content-timestamp' is not present!"
            }
            Self::BbbSavIcrm => "Is the requested claimed role present?",
            Self::BbbSavIcrmAns => "The requested claimed role is not present!",
            Self::BbbSavIcerrm => "Is the requested certified role present?",
            Self::BbbSavIcerrmAns => "The requested certified role is not present!",
            Self::BbbSavIuqpcsp => "Is unsigned qualifying property: 'countersignature' present?",
            Self::BbbSavIuqpcspAns => {
                "The unsigned qualifying property: 'countersignature' is not present!"
            }
            Self::BbbSavTspImidf => "Is message imprint data found?",
            Self::BbbSavTspImidfAns => "The timestamp message imprint data is not found!",
            Self::BbbSavTspImivc => "Is message imprint verification conclusive?",
            Self::BbbSavTspImivcAns => "The timestamp message imprint verification has failed!",
            Self::Asccm => "Are signature cryptographic constraints met?",
            Self::AsccmAns1 => "The encryption algorithm not authorised!",
            Self::AsccmAns2 => "The digest algorithm not authorised!",
            Self::AsccmAns3 => "The public key size is too small!",
            Self::AsccmAns4 => "The algorithm expiration date not found!",
            Self::AsccmAns5 => "The algorithm is expired!",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        ALL_TAGS.iter().find(|tag| tag.key() == key).copied()
    }
}

const ALL_TAGS: &[MessageTag] = &[
    MessageTag::BbbIcsIsci,
    MessageTag::BbbIcsIsciAns,
    MessageTag::BbbIcsIcdvv,
    MessageTag::BbbIcsIcdvvAns,
    MessageTag::BbbIcsAidnasne,
    MessageTag::BbbIcsAidnasneAns,
    MessageTag::BbbIcsIscgku,
    MessageTag::BbbIcsIscgkuAns,
    MessageTag::BbbIcsScioo,
    MessageTag::BbbIcsSciooAns,
    MessageTag::BbbCvIrdof,
    MessageTag::BbbCvIrdofAns,
    MessageTag::BbbCvIrdoi,
    MessageTag::BbbCvIrdoiAns,
    MessageTag::BbbCvIsi,
    MessageTag::BbbCvIsiAns,
    MessageTag::BbbXcvCccbb,
    MessageTag::BbbXcvCccbbAns,
    MessageTag::BbbXcvCccbbSigAns,
    MessageTag::BbbXcvCccbbTspAns,
    MessageTag::BbbXcvCccbbRevAns,
    MessageTag::BbbXcvIctivrsc,
    MessageTag::BbbXcvIctivrscAns,
    MessageTag::BbbXcvIrdpfc,
    MessageTag::BbbXcvIrdpfcAns,
    MessageTag::BbbXcvIrif,
    MessageTag::BbbXcvIrifAns,
    MessageTag::BbbXcvIscr,
    MessageTag::BbbXcvIscrAns,
    MessageTag::BbbXcvIscgku,
    MessageTag::BbbXcvIscgkuAns,
    MessageTag::BbbVciIspk,
    MessageTag::BbbVciIspkAns1,
    MessageTag::BbbVciIspa,
    MessageTag::BbbVciIspaAns,
    MessageTag::BbbSavIssv,
    MessageTag::BbbSavIssvAns,
    MessageTag::BbbSavIsqpstp,
    MessageTag::BbbSavIsqpstpAns,
    MessageTag::BbbSavIsqpctp,
    MessageTag::BbbSavIsqpctpAns,
    MessageTag::BbbSavIsqpchp,
    MessageTag::BbbSavIsqpchpAns,
    MessageTag::BbbSavIsqpcip,
    MessageTag::BbbSavIsqpcipAns,
    MessageTag::BbbSavIsqpxtip,
    MessageTag::BbbSavIsqpxtipAns,
    MessageTag::BbbSavIsqpslp,
    MessageTag::BbbSavIsqpslpAns,
    MessageTag::BbbSavIsqpctsip,
    MessageTag::BbbSavIsqpctsipAns,
    MessageTag::BbbSavIcrm,
    MessageTag::BbbSavIcrmAns,
    MessageTag::BbbSavIcerrm,
    MessageTag::BbbSavIcerrmAns,
    MessageTag::BbbSavIuqpcsp,
    MessageTag::BbbSavIuqpcspAns,
    MessageTag::BbbSavTspImidf,
    MessageTag::BbbSavTspImidfAns,
    MessageTag::BbbSavTspImivc,
    MessageTag::BbbSavTspImivcAns,
    MessageTag::Asccm,
    MessageTag::AsccmAns1,
    MessageTag::AsccmAns2,
    MessageTag::AsccmAns3,
    MessageTag::AsccmAns4,
    MessageTag::AsccmAns5,
];

impl fmt::Display for MessageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl Serialize for MessageTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for MessageTag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        MessageTag::from_key(&key)
            .ok_or_else(|| de::Error::custom(format!("unknown message tag key {key}")))
    }
}
