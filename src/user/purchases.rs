use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PurchaseStatus {
    Completed,
    Processing,
    Failed,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PurchaseKind {
    #[serde(rename = "Beat License")]
    BeatLicense,
    #[serde(rename = "Sound Kit")]
    SoundKit,
    Mixing,
    Service,
}

impl PurchaseKind {
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseKind::BeatLicense => "Beat License",
            PurchaseKind::SoundKit => "Sound Kit",
            PurchaseKind::Mixing => "Mixing",
            PurchaseKind::Service => "Service",
        }
    }

    /// Service-like purchases are managed as orders, the rest are downloads.
    pub fn is_order(&self) -> bool {
        matches!(self, PurchaseKind::Mixing | PurchaseKind::Service)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: String,
    pub date: String,
    pub item: String,
    pub seller: String,
    pub amount: f64,
    pub status: PurchaseStatus,
    pub image: String,
    #[serde(rename = "type")]
    pub kind: PurchaseKind,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum PurchaseTab {
    #[default]
    All,
    Beats,
    Kits,
    Services,
}

impl PurchaseTab {
    pub const ALL: [PurchaseTab; 4] = [
        PurchaseTab::All,
        PurchaseTab::Beats,
        PurchaseTab::Kits,
        PurchaseTab::Services,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            PurchaseTab::All => "all",
            PurchaseTab::Beats => "beats",
            PurchaseTab::Kits => "kits",
            PurchaseTab::Services => "services",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PurchaseTab::All => "All Items",
            PurchaseTab::Beats => "Beats & Projects",
            PurchaseTab::Kits => "Sound Packs",
            PurchaseTab::Services => "Services & Orders",
        }
    }

    pub fn matches(&self, kind: PurchaseKind) -> bool {
        match self {
            PurchaseTab::All => true,
            PurchaseTab::Beats => kind == PurchaseKind::BeatLicense,
            PurchaseTab::Kits => kind == PurchaseKind::SoundKit,
            PurchaseTab::Services => kind.is_order(),
        }
    }
}

impl FromStr for PurchaseTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PurchaseTab::ALL
            .into_iter()
            .find(|tab| tab.slug().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown purchases tab: {}", s))
    }
}

impl fmt::Display for PurchaseTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Progress of one step in an order's timeline.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrderStep {
    pub title: &'static str,
    pub date: String,
    pub state: StepState,
}

impl Purchase {
    pub fn is_completed(&self) -> bool {
        self.status == PurchaseStatus::Completed
    }

    /// Receipt number printed on the payment receipt.
    pub fn receipt_id(&self) -> String {
        match self.id.strip_prefix("ORD-") {
            Some(number) => format!("RCPT-{}", number),
            None => format!("RCPT-{}", self.id),
        }
    }

    /// The four fixed steps of an order. The last two only complete once the
    /// purchase has.
    pub fn timeline(&self) -> Vec<OrderStep> {
        let done = self.is_completed();
        vec![
            OrderStep {
                title: "Order Placed",
                date: self.date.clone(),
                state: StepState::Completed,
            },
            OrderStep {
                title: "Requirements Submitted",
                date: self.date.clone(),
                state: StepState::Completed,
            },
            OrderStep {
                title: "Order in Progress",
                date: "In Progress".to_string(),
                state: if done {
                    StepState::Completed
                } else {
                    StepState::Active
                },
            },
            OrderStep {
                title: "Delivery",
                date: if done { "Delivered" } else { "Pending" }.to_string(),
                state: if done {
                    StepState::Completed
                } else {
                    StepState::Pending
                },
            },
        ]
    }
}

pub fn find_purchase<'a>(purchases: &'a [Purchase], id: &str) -> Option<&'a Purchase> {
    purchases.iter().find(|p| p.id.eq_ignore_ascii_case(id))
}

pub fn filter_purchases(purchases: &[Purchase], tab: PurchaseTab) -> Vec<&Purchase> {
    purchases.iter().filter(|p| tab.matches(p.kind)).collect()
}

fn purchase(
    id: &str,
    date: &str,
    item: &str,
    seller: &str,
    amount: f64,
    status: PurchaseStatus,
    kind: PurchaseKind,
) -> Purchase {
    Purchase {
        id: id.to_string(),
        date: date.to_string(),
        item: item.to_string(),
        seller: seller.to_string(),
        amount,
        status,
        image: format!("covers/{}.png", id),
        kind,
    }
}

pub fn mock_purchases() -> Vec<Purchase> {
    use PurchaseKind::*;
    use PurchaseStatus::*;
    vec![
        purchase(
            "ORD-7721",
            "Oct 24, 2025",
            "Velvet Hours (WAV Lease)",
            "Soraya Beats",
            49.99,
            Completed,
            BeatLicense,
        ),
        purchase(
            "ORD-7715",
            "Oct 22, 2025",
            "Dusty Tapes Vol. 1",
            "Lo Motion",
            24.99,
            Completed,
            SoundKit,
        ),
        purchase(
            "ORD-7702",
            "Oct 19, 2025",
            "Full Mix & Master",
            "Kairo",
            150.00,
            Processing,
            Mixing,
        ),
        purchase(
            "ORD-7688",
            "Oct 12, 2025",
            "Vocal Topline Session",
            "Soraya Beats",
            200.00,
            Processing,
            Service,
        ),
        purchase(
            "ORD-7654",
            "Oct 03, 2025",
            "Concrete Jungle (MP3 Lease)",
            "Kairo",
            29.99,
            Failed,
            BeatLicense,
        ),
    ]
}
