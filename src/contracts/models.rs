//! Contract records and the draft overlay used while editing them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Exclusive,
    Lease,
    Service,
    Audio,
}

impl ContractType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Exclusive => "exclusive",
            ContractType::Lease => "lease",
            ContractType::Service => "service",
            ContractType::Audio => "audio",
        }
    }
}

impl FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" => Ok(ContractType::Exclusive),
            "lease" => Ok(ContractType::Lease),
            "service" => Ok(ContractType::Service),
            "audio" => Ok(ContractType::Audio),
            other => Err(format!(
                "Unknown contract type '{}', expected one of: exclusive, lease, service, audio",
                other
            )),
        }
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    Draft,
    Signed,
    Pending,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Signed => "signed",
            ContractStatus::Pending => "pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub contract_type: ContractType,
    pub status: ContractStatus,
    pub created: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    /// Simulated document body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub royalty_split: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revenue_split: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pub_notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub producer_signature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_signature: Option<String>,
}

impl Contract {
    /// A signature slot counts as signed only when it holds a non-empty name.
    pub fn producer_signed(&self) -> bool {
        self.producer_signature
            .as_deref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    pub fn client_signed(&self) -> bool {
        self.client_signature
            .as_deref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }
}

/// The negotiable fields of a contract that an edit session can stage.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ContractField {
    Title,
    ClientName,
    Type,
    RoyaltySplit,
    RevenueSplit,
    Notes,
    Terms,
    DistNotes,
    PubNotes,
    PublisherName,
    ProducerSignature,
    ClientSignature,
}

impl ContractField {
    pub const ALL: [ContractField; 12] = [
        ContractField::Title,
        ContractField::ClientName,
        ContractField::Type,
        ContractField::RoyaltySplit,
        ContractField::RevenueSplit,
        ContractField::Notes,
        ContractField::Terms,
        ContractField::DistNotes,
        ContractField::PubNotes,
        ContractField::PublisherName,
        ContractField::ProducerSignature,
        ContractField::ClientSignature,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContractField::Title => "title",
            ContractField::ClientName => "clientName",
            ContractField::Type => "type",
            ContractField::RoyaltySplit => "royaltySplit",
            ContractField::RevenueSplit => "revenueSplit",
            ContractField::Notes => "notes",
            ContractField::Terms => "terms",
            ContractField::DistNotes => "distNotes",
            ContractField::PubNotes => "pubNotes",
            ContractField::PublisherName => "publisherName",
            ContractField::ProducerSignature => "producerSignature",
            ContractField::ClientSignature => "clientSignature",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ContractField::RoyaltySplit | ContractField::RevenueSplit)
    }
}

impl FromStr for ContractField {
    type Err = String;

    /// Accepts camelCase, snake_case and kebab-case spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();
        ContractField::ALL
            .iter()
            .find(|f| f.name().to_lowercase() == normalized)
            .copied()
            .ok_or_else(|| format!("Unknown contract field '{}'", s))
    }
}

/// Parses the leading integer of `s` the way a lenient number input does:
/// optional sign followed by digits, anything after is ignored. Returns 0
/// when there are no leading digits.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        match c.to_digit(10) {
            Some(d) => {
                seen_digit = true;
                value = value.saturating_mul(10).saturating_add(d as i64);
            }
            None => break,
        }
    }

    match (seen_digit, negative) {
        (false, _) => 0,
        (true, true) => -value,
        (true, false) => value,
    }
}

/// Staged edits layered over a stored contract. `None` means "not staged",
/// and the stored value shows through on merge.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContractDraft {
    pub title: Option<String>,
    pub client_name: Option<String>,
    pub contract_type: Option<ContractType>,
    pub royalty_split: Option<i64>,
    pub revenue_split: Option<i64>,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub dist_notes: Option<String>,
    pub pub_notes: Option<String>,
    pub publisher_name: Option<String>,
    pub producer_signature: Option<String>,
    pub client_signature: Option<String>,
}

impl ContractDraft {
    /// Shallow copy of every field the contract currently carries.
    pub fn from_contract(contract: &Contract) -> Self {
        Self {
            title: Some(contract.title.clone()),
            client_name: contract.client_name.clone(),
            contract_type: Some(contract.contract_type),
            royalty_split: contract.royalty_split,
            revenue_split: contract.revenue_split,
            notes: contract.notes.clone(),
            terms: contract.terms.clone(),
            dist_notes: contract.dist_notes.clone(),
            pub_notes: contract.pub_notes.clone(),
            publisher_name: contract.publisher_name.clone(),
            producer_signature: contract.producer_signature.clone(),
            client_signature: contract.client_signature.clone(),
        }
    }

    /// Stages `value` for `field`. Numeric fields go through
    /// [`parse_leading_int`]; the type field must name a known contract type.
    pub fn set(&mut self, field: ContractField, value: &str) -> Result<(), String> {
        let text = Some(value.to_string());
        match field {
            ContractField::Title => self.title = text,
            ContractField::ClientName => self.client_name = text,
            ContractField::Type => self.contract_type = Some(value.parse()?),
            ContractField::RoyaltySplit => self.royalty_split = Some(parse_leading_int(value)),
            ContractField::RevenueSplit => self.revenue_split = Some(parse_leading_int(value)),
            ContractField::Notes => self.notes = text,
            ContractField::Terms => self.terms = text,
            ContractField::DistNotes => self.dist_notes = text,
            ContractField::PubNotes => self.pub_notes = text,
            ContractField::PublisherName => self.publisher_name = text,
            ContractField::ProducerSignature => self.producer_signature = text,
            ContractField::ClientSignature => self.client_signature = text,
        }
        Ok(())
    }

    /// Field-by-field merge: staged values win, unstaged ones keep `base`.
    pub fn apply_to(&self, base: &Contract) -> Contract {
        fn pick<T: Clone>(staged: &Option<T>, stored: &Option<T>) -> Option<T> {
            staged.clone().or_else(|| stored.clone())
        }

        Contract {
            id: base.id.clone(),
            title: self.title.clone().unwrap_or_else(|| base.title.clone()),
            contract_type: self.contract_type.unwrap_or(base.contract_type),
            status: base.status,
            created: base.created.clone(),
            client_name: pick(&self.client_name, &base.client_name),
            content: base.content.clone(),
            royalty_split: pick(&self.royalty_split, &base.royalty_split),
            revenue_split: pick(&self.revenue_split, &base.revenue_split),
            notes: pick(&self.notes, &base.notes),
            terms: pick(&self.terms, &base.terms),
            dist_notes: pick(&self.dist_notes, &base.dist_notes),
            pub_notes: pick(&self.pub_notes, &base.pub_notes),
            publisher_name: pick(&self.publisher_name, &base.publisher_name),
            producer_signature: pick(&self.producer_signature, &base.producer_signature),
            client_signature: pick(&self.client_signature, &base.client_signature),
        }
    }
}
