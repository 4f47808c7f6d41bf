use super::models::{Contract, ContractStatus, ContractType};

/// Contracts the session starts with; they live only for the process.
pub fn sample_contracts() -> Vec<Contract> {
    vec![
        Contract {
            id: "ct-exclusive".to_string(),
            title: "Exclusive Rights Agreement".to_string(),
            contract_type: ContractType::Exclusive,
            status: ContractStatus::Signed,
            created: "2024-02-12".to_string(),
            client_name: Some("Jordan Vale".to_string()),
            content: None,
            royalty_split: Some(60),
            revenue_split: Some(40),
            notes: Some("Producer keeps publishing share.".to_string()),
            terms: Some(
                "The Producer transfers exclusive rights to the Licensee for the Composition."
                    .to_string(),
            ),
            dist_notes: Some("Worldwide".to_string()),
            pub_notes: Some("50% writer share retained".to_string()),
            publisher_name: Some("Rae Music Publishing".to_string()),
            producer_signature: Some("Mani Rae".to_string()),
            client_signature: Some("Jordan Vale".to_string()),
        },
        Contract {
            id: "ct-lease".to_string(),
            title: "Standard Lease Agreement".to_string(),
            contract_type: ContractType::Lease,
            status: ContractStatus::Draft,
            created: "2024-03-04".to_string(),
            client_name: None,
            content: None,
            royalty_split: Some(50),
            revenue_split: Some(50),
            notes: None,
            terms: Some(
                "Non-exclusive license to use the beat for up to 50,000 streams.".to_string(),
            ),
            dist_notes: Some("Worldwide".to_string()),
            pub_notes: None,
            publisher_name: None,
            producer_signature: None,
            client_signature: None,
        },
        Contract {
            id: "ct-mixing".to_string(),
            title: "Mixing & Mastering Service".to_string(),
            contract_type: ContractType::Service,
            status: ContractStatus::Pending,
            created: "2024-03-18".to_string(),
            client_name: Some("Lena Ortiz".to_string()),
            content: None,
            royalty_split: Some(0),
            revenue_split: Some(100),
            notes: Some("Two revision rounds included.".to_string()),
            terms: Some("Delivery within 7 business days of receiving stems.".to_string()),
            dist_notes: None,
            pub_notes: None,
            publisher_name: None,
            producer_signature: Some("Mani Rae".to_string()),
            client_signature: None,
        },
    ]
}
