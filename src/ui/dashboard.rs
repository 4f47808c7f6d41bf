//! Dashboard sections and the contract editor panel.

use super::screen::Screen;
use crate::app::{AppState, DashboardSection};
use crate::contracts::EditorMode;
use crate::user::{format_money, Purchase, PurchaseTab, StepState, UserProfile};

pub fn dashboard(state: &AppState, section: DashboardSection) -> Screen {
    match section {
        DashboardSection::Overview => overview(state),
        DashboardSection::Studio => studio(state),
        DashboardSection::Sales => sales(),
        DashboardSection::Wallet => wallet(state),
        DashboardSection::Orders => orders(state),
        DashboardSection::Analytics => {
            let mut screen = Screen::new("Analytics");
            screen
                .key_value("Plays (30d)", "48,210")
                .key_value("Listeners", "9,870")
                .key_value("Conversion", "3.4%");
            screen
        }
        DashboardSection::Manage => {
            let mut screen = Screen::new("Manage Services");
            let rows = state
                .profile()
                .services
                .iter()
                .map(|s| vec![s.id.clone(), s.title.clone(), format_money(s.price)])
                .collect();
            screen.table(&["ID", "Service", "Price"], rows);
            screen
        }
        DashboardSection::Messages => {
            let mut screen = Screen::new("Messages");
            screen.empty("No conversations yet.", None);
            screen
        }
    }
}

fn overview(state: &AppState) -> Screen {
    let profile = state.profile();
    let own = state
        .projects()
        .iter()
        .filter(|p| p.producer == profile.username)
        .count();
    let mut screen = Screen::new("Dashboard");
    screen
        .text("System Online")
        .key_value("Projects", own.to_string())
        .key_value("Subscribers", profile.subscribers.to_string())
        .key_value_highlight("Gems", profile.gems.to_string())
        .key_value(
            "Balance",
            state.balance_visibility().format(profile.balance),
        )
        .key_value("Period", "Last 30 days");
    screen
}

fn studio(state: &AppState) -> Screen {
    let username = &state.profile().username;
    let mut screen = Screen::new("Studio");
    let rows: Vec<Vec<String>> = state
        .projects()
        .iter()
        .filter(|p| &p.producer == username)
        .map(|p| {
            vec![
                p.id.clone(),
                p.title.clone(),
                p.kind.label().to_string(),
                p.tracks.len().to_string(),
                p.status
                    .map(|s| format!("{:?}", s))
                    .unwrap_or_else(|| "Published".to_string()),
            ]
        })
        .collect();
    if rows.is_empty() {
        screen.empty("No projects uploaded yet.", Some("upload"));
    } else {
        screen.table(&["ID", "Title", "Type", "Tracks", "Status"], rows);
    }
    screen
}

fn sales() -> Screen {
    let mut screen = Screen::new("Sales History");
    screen
        .key_value_highlight("Total Revenue", "$12,450.00")
        .key_value("Pending Payouts", "$450.00")
        .key_value("Avg. Order Value", "$32.40");
    let rows = (1..=5u32)
        .map(|i| {
            vec![
                format!("#TRX-88{}", i),
                format!("Oct {}, 2025", 25 - i),
                format!("user{}@example.com", i),
                format_money(29.99 * f64::from(i)),
                "Paid".to_string(),
            ]
        })
        .collect();
    screen.table(&["ID", "Date", "Customer", "Amount", "Status"], rows);
    screen
}

fn wallet(state: &AppState) -> Screen {
    let profile = state.profile();
    let mut screen = Screen::new("Wallet");
    screen
        .key_value_highlight("Total Balance", format_money(profile.balance))
        .key_value_highlight("Gem Balance", profile.gems.to_string())
        .list(vec![
            "VISA •••• •••• •••• 4242 (expires 12/28)".to_string(),
            "PAYPAL user@example.com (primary payout method)".to_string(),
        ]);
    screen
}

fn orders(state: &AppState) -> Screen {
    if let Some(purchase) = state.selected_order() {
        return order_detail(purchase);
    }
    let mut screen = Screen::new("Purchases");
    let active = state.purchase_tab();
    let tabs = PurchaseTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{}]", tab.label())
            } else {
                tab.label().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("  ");
    screen.text(tabs);

    let visible = state.visible_purchases();
    if visible.is_empty() {
        screen.empty("No purchases in this category.", None);
        return screen;
    }
    let rows = visible
        .iter()
        .map(|p| {
            vec![
                p.id.clone(),
                p.date.clone(),
                p.item.clone(),
                p.seller.clone(),
                format_money(p.amount),
                format!("{:?}", p.status),
                p.kind.label().to_string(),
                if p.kind.is_order() {
                    "Manage Order"
                } else {
                    "Download Files"
                }
                .to_string(),
            ]
        })
        .collect();
    screen.table(
        &["ID", "Date", "Item", "Seller", "Amount", "Status", "Type", "Action"],
        rows,
    );
    screen.text("'order <id>' opens an order, 'receipt <id>' shows its receipt.");
    screen
}

fn order_detail(purchase: &Purchase) -> Screen {
    let mut screen = Screen::new(purchase.item.clone());
    screen
        .key_value("Order", format!("#{}", purchase.id))
        .key_value("Sold by", &purchase.seller)
        .key_value_highlight("Status", format!("{:?}", purchase.status))
        .key_value("Amount", format_money(purchase.amount));

    let steps = purchase
        .timeline()
        .into_iter()
        .map(|step| {
            vec![
                match step.state {
                    StepState::Completed => "✓",
                    StepState::Active => "●",
                    StepState::Pending => "○",
                }
                .to_string(),
                step.title.to_string(),
                step.date,
            ]
        })
        .collect();
    screen.table(&["", "Order Status", "Date"], steps);

    if purchase.is_completed() {
        screen.list(vec!["Mixed_Master_Final.wav (45 MB)".to_string()]);
    }
    screen
        .text(format!("Chat with {}", purchase.seller))
        .list(vec![
            format!(
                "{}: Thanks for your order! Please submit your requirements and files so I can get started.",
                purchase.seller
            ),
            "You: Just uploaded the vocal stems. Let me know if you need anything else!".to_string(),
        ])
        .text("Use 'orders' to go back to purchases.");
    screen
}

/// Payment receipt for one purchase, billed to the signed-in profile.
pub fn receipt(purchase: &Purchase, profile: &UserProfile) -> Screen {
    let mut screen = Screen::new("Payment Receipt");
    screen
        .key_value("Billed To", format!("{} ({})", profile.username, profile.handle))
        .key_value("Receipt ID", purchase.receipt_id())
        .table(
            &["Item", "Type", "Seller", "Amount"],
            vec![vec![
                purchase.item.clone(),
                purchase.kind.label().to_string(),
                purchase.seller.clone(),
                format_money(purchase.amount),
            ]],
        )
        .key_value("Processing Fee (0%)", format_money(0.0))
        .key_value("Date Paid", &purchase.date)
        .key_value_highlight("Total Paid", format_money(purchase.amount));
    screen
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "signed"
    } else {
        "unsigned"
    }
}

pub fn contracts(state: &AppState) -> Screen {
    let editor = state.contracts();
    let mut screen = Screen::new("Contracts");

    let selected_id = editor.selected().map(|c| c.id.clone());
    let rows = editor
        .contracts()
        .iter()
        .map(|c| {
            vec![
                if Some(&c.id) == selected_id.as_ref() { "◆" } else { "" }.to_string(),
                c.id.clone(),
                c.title.clone(),
                c.contract_type.as_str().to_string(),
                c.status.as_str().to_string(),
                c.created.clone(),
            ]
        })
        .collect();
    screen.table(&["", "ID", "Title", "Type", "Status", "Created"], rows);

    let Some(contract) = editor.displayed() else {
        screen.empty("No contracts yet.", Some("contract-new"));
        return screen;
    };

    match editor.mode() {
        EditorMode::Viewing => screen.text("Viewing"),
        EditorMode::Editing(_) => screen.text("Editing (unsaved changes until 'save')"),
    };

    screen
        .key_value_highlight("Title", &contract.title)
        .key_value("Type", contract.contract_type.as_str())
        .key_value("Status", contract.status.as_str())
        .key_value("Created", &contract.created)
        .key_value("Client", contract.client_name.as_deref().unwrap_or("-"))
        .key_value(
            "Royalty Split",
            contract
                .royalty_split
                .map(|v| format!("{}%", v))
                .unwrap_or_else(|| "-".to_string()),
        )
        .key_value(
            "Revenue Split",
            contract
                .revenue_split
                .map(|v| format!("{}%", v))
                .unwrap_or_else(|| "-".to_string()),
        )
        .key_value("Publisher", contract.publisher_name.as_deref().unwrap_or("-"))
        .key_value("Distribution", contract.dist_notes.as_deref().unwrap_or("-"))
        .key_value("Publishing", contract.pub_notes.as_deref().unwrap_or("-"))
        .key_value("Notes", contract.notes.as_deref().unwrap_or("-"))
        .key_value("Terms", contract.terms.as_deref().unwrap_or("-"))
        .key_value(
            "Producer",
            format!(
                "{} ({})",
                contract.producer_signature.as_deref().unwrap_or(""),
                yes_no(contract.producer_signed())
            ),
        )
        .key_value(
            "Client",
            format!(
                "{} ({})",
                contract.client_signature.as_deref().unwrap_or(""),
                yes_no(contract.client_signed())
            ),
        );

    if let Some(pending) = editor.signing() {
        screen.banner(format!(
            "Signing as '{}'. Use 'sign-confirm' or 'sign-cancel'.",
            pending
        ));
    }
    screen
}
