//! Contract editor state machine.
//!
//! The editor is either viewing the selected contract or editing it through a
//! [`ContractDraft`] overlay. Signing is an orthogonal sub-state that can be
//! entered from either: confirming a signature while editing only stages it
//! in the draft, while confirming it while viewing commits it immediately.

use chrono::Local;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use super::models::{Contract, ContractDraft, ContractField, ContractStatus, ContractType};

pub const NEW_CONTRACT_TITLE: &str = "Untitled Contract";
pub const NEW_CONTRACT_TERMS: &str = "Enter your terms and conditions here. This contract serves as a binding agreement between the Producer and the Licensee.";
pub const NEW_CONTRACT_DISTRIBUTION: &str = "Worldwide";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    #[error("No contract selected")]
    NoSelection,

    #[error("Contract not found: {0}")]
    UnknownContract(String),

    #[error("Not editing, start an edit session first")]
    NotEditing,

    #[error("Already editing the selected contract")]
    AlreadyEditing,

    #[error("No signature in progress")]
    NotSigning,

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Outer state of the editor panel.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Viewing,
    Editing(ContractDraft),
}

pub struct ContractEditor {
    contracts: Vec<Contract>,
    selected_id: Option<String>,
    mode: EditorMode,
    /// Pending signature text while signing.
    signing: Option<String>,
    default_signer: String,
}

impl ContractEditor {
    /// Starts viewing the first contract, if any.
    pub fn new(contracts: Vec<Contract>, default_signer: impl Into<String>) -> Self {
        let selected_id = contracts.first().map(|c| c.id.clone());
        Self {
            contracts,
            selected_id,
            mode: EditorMode::Viewing,
            signing: None,
            default_signer: default_signer.into(),
        }
    }

    pub fn contracts(&self) -> &[Contract] {
        &self.contracts
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing(_))
    }

    pub fn draft(&self) -> Option<&ContractDraft> {
        match &self.mode {
            EditorMode::Editing(draft) => Some(draft),
            EditorMode::Viewing => None,
        }
    }

    /// The pending signature, while signing.
    pub fn signing(&self) -> Option<&str> {
        self.signing.as_deref()
    }

    pub fn default_signer(&self) -> &str {
        &self.default_signer
    }

    pub fn set_default_signer(&mut self, signer: impl Into<String>) {
        self.default_signer = signer.into();
    }

    /// The stored version of the selected contract.
    pub fn selected(&self) -> Option<&Contract> {
        let id = self.selected_id.as_deref()?;
        self.contracts.iter().find(|c| c.id == id)
    }

    /// What the panel shows: the draft merged over the stored contract while
    /// editing, the stored contract otherwise.
    pub fn displayed(&self) -> Option<Contract> {
        let stored = self.selected()?;
        match &self.mode {
            EditorMode::Editing(draft) => Some(draft.apply_to(stored)),
            EditorMode::Viewing => Some(stored.clone()),
        }
    }

    fn selected_index(&self) -> Result<usize, EditorError> {
        let id = self.selected_id.as_deref().ok_or(EditorError::NoSelection)?;
        self.contracts
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| EditorError::UnknownContract(id.to_string()))
    }

    fn reset_panel(&mut self) {
        self.mode = EditorMode::Viewing;
        self.signing = None;
    }

    /// Prepends a fresh draft contract, selects it and opens it for editing.
    pub fn create(&mut self) -> &Contract {
        let contract = Contract {
            id: format!("ct-{}", Uuid::new_v4().simple()),
            title: NEW_CONTRACT_TITLE.to_string(),
            contract_type: ContractType::Lease,
            status: ContractStatus::Draft,
            created: Local::now().format("%Y-%m-%d").to_string(),
            client_name: None,
            content: None,
            royalty_split: Some(50),
            revenue_split: Some(50),
            notes: Some(String::new()),
            terms: Some(NEW_CONTRACT_TERMS.to_string()),
            dist_notes: Some(NEW_CONTRACT_DISTRIBUTION.to_string()),
            pub_notes: Some(String::new()),
            publisher_name: Some(String::new()),
            producer_signature: Some(String::new()),
            client_signature: Some(String::new()),
        };
        info!("Created contract {}", contract.id);

        let draft = ContractDraft::from_contract(&contract);
        self.selected_id = Some(contract.id.clone());
        self.contracts.insert(0, contract);
        self.signing = None;
        self.mode = EditorMode::Editing(draft);
        &self.contracts[0]
    }

    /// Switches to another contract. Any in-flight edit or signature is
    /// dropped without asking.
    pub fn select(&mut self, contract_id: &str) -> Result<(), EditorError> {
        if !self.contracts.iter().any(|c| c.id == contract_id) {
            return Err(EditorError::UnknownContract(contract_id.to_string()));
        }
        if self.is_editing() || self.signing.is_some() {
            debug!("Discarding in-flight edit while switching to {}", contract_id);
        }
        self.selected_id = Some(contract_id.to_string());
        self.reset_panel();
        Ok(())
    }

    pub fn start_edit(&mut self) -> Result<(), EditorError> {
        if self.is_editing() {
            return Err(EditorError::AlreadyEditing);
        }
        let index = self.selected_index()?;
        self.mode = EditorMode::Editing(ContractDraft::from_contract(&self.contracts[index]));
        Ok(())
    }

    /// Stages a field value in the draft. The stored contract is untouched.
    pub fn edit_field(&mut self, field: ContractField, value: &str) -> Result<(), EditorError> {
        match &mut self.mode {
            EditorMode::Editing(draft) => {
                draft
                    .set(field, value)
                    .map_err(|reason| EditorError::InvalidValue {
                        field: field.name(),
                        reason,
                    })
            }
            EditorMode::Viewing => Err(EditorError::NotEditing),
        }
    }

    /// Drops the draft, and any signature started during the session.
    pub fn cancel_edit(&mut self) -> Result<(), EditorError> {
        if !self.is_editing() {
            return Err(EditorError::NotEditing);
        }
        self.reset_panel();
        Ok(())
    }

    /// Merges the draft over the stored contract and writes it back in place.
    pub fn save(&mut self) -> Result<&Contract, EditorError> {
        let index = self.selected_index()?;
        let draft = match &self.mode {
            EditorMode::Editing(draft) => draft,
            EditorMode::Viewing => return Err(EditorError::NotEditing),
        };

        let updated = draft.apply_to(&self.contracts[index]);
        info!("Saved contract {}", updated.id);
        self.contracts[index] = updated;
        self.reset_panel();
        Ok(&self.contracts[index])
    }

    /// Opens the signature input, pre-filled with the current producer
    /// signature (the draft's while editing) or the default signer.
    pub fn start_sign(&mut self) -> Result<(), EditorError> {
        let index = self.selected_index()?;
        let current = match &self.mode {
            EditorMode::Editing(draft) => draft.producer_signature.clone(),
            EditorMode::Viewing => self.contracts[index].producer_signature.clone(),
        };
        let prefill = current
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.default_signer.clone());
        self.signing = Some(prefill);
        Ok(())
    }

    pub fn update_sign_input(&mut self, text: &str) -> Result<(), EditorError> {
        match &mut self.signing {
            Some(pending) => {
                *pending = text.to_string();
                Ok(())
            }
            None => Err(EditorError::NotSigning),
        }
    }

    /// Applies the pending signature. While editing it only lands in the
    /// draft and persists on a later save; while viewing it is committed.
    pub fn confirm_sign(&mut self) -> Result<(), EditorError> {
        let index = self.selected_index()?;
        let pending = self.signing.take().ok_or(EditorError::NotSigning)?;

        match &mut self.mode {
            EditorMode::Editing(draft) => {
                draft.producer_signature = Some(pending);
            }
            EditorMode::Viewing => {
                info!("Signed contract {}", self.contracts[index].id);
                self.contracts[index].producer_signature = Some(pending);
            }
        }
        Ok(())
    }

    pub fn cancel_sign(&mut self) -> Result<(), EditorError> {
        self.signing.take().map(|_| ()).ok_or(EditorError::NotSigning)
    }
}
