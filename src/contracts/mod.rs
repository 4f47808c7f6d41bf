mod editor;
mod fixtures;
mod models;

pub use editor::{
    ContractEditor, EditorError, EditorMode, NEW_CONTRACT_DISTRIBUTION, NEW_CONTRACT_TERMS,
    NEW_CONTRACT_TITLE,
};
pub use fixtures::sample_contracts;
pub use models::{
    parse_leading_int, Contract, ContractDraft, ContractField, ContractStatus, ContractType,
};
