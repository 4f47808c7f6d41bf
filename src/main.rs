use anyhow::{Context, Result};
use chrono::Local;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use beatmarket_client::app::{AppState, View};
use beatmarket_client::cli_style::{
    get_prompt, get_styles, print_banner, print_command_echo, print_error, print_goodbye,
    print_help, print_info, print_loading, print_success, print_welcome, CommandHelp,
};
use beatmarket_client::config::{AppConfig, CliConfig, EnvConfig, FileConfig};
use beatmarket_client::contracts::ContractField;
use beatmarket_client::remote::{load_from_settings, DataSource};
use beatmarket_client::ui;
use beatmarket_client::user::{mock_profile, PurchaseTab};

use rustyline::{
    completion::Completer, highlight::Highlighter, history::FileHistory, validate::Validator,
    CompletionType, Config, Editor, Helper,
};

fn parse_path(s: &str) -> Result<PathBuf> {
    let original_path = PathBuf::from(s);
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
#[command(styles=get_styles(), version)]
struct CliArgs {
    /// Path to a TOML config file. Its values override the flags below.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Base URL of the listings backend (else SUPABASE_URL).
    #[clap(long)]
    pub base_url: Option<String>,

    /// Anon key for the listings backend (else SUPABASE_ANON_KEY).
    #[clap(long)]
    pub anon_key: Option<String>,
}

#[derive(Parser)]
#[command(styles=get_styles(), name = "")]
struct InnerCli {
    #[command(subcommand)]
    command: InnerCommand,
}

#[derive(Clone, Copy, ValueEnum)]
enum PanelState {
    Expand,
    Minimize,
}

#[derive(Subcommand)]
enum InnerCommand {
    /// Shows the listings.
    Home,

    /// Free-text search over the listings, all terms must match.
    Search { query: Vec<String> },

    /// Filters listings by genre ("All Genres" to clear).
    Genre { genre: Vec<String> },

    /// Filters listings by key ("All Keys" to clear).
    Key { key: Vec<String> },

    /// Clears genre, key and search query.
    ResetFilters,

    /// Lists the genres and keys present in the listings.
    Filters,

    /// Plays a track of a project, the first one if no track is given.
    /// Playing the current track again pauses it.
    Play {
        project_id: String,
        track_id: Option<String>,
    },

    /// Toggles play/pause of the current track.
    Toggle,

    /// Shows the player, optionally expanding or minimizing it.
    Player {
        #[arg(value_enum)]
        state: Option<PanelState>,
    },

    /// Navigates to a view by name, e.g. dashboard-wallet.
    View { view: String },

    /// Follows the current page's back link.
    Back,

    Login,

    Logout,

    /// Claims today's 10 gems.
    ClaimGems,

    /// Starts a new day, re-enabling the gem claim.
    NewDay,

    /// Shows or hides the cash balance.
    Balance,

    /// Shows the account summary.
    Account,

    Contracts,

    /// Selects a contract, discarding any unsaved edit.
    ContractSelect { contract_id: String },

    /// Creates a draft contract and opens it for editing.
    ContractNew,

    /// Starts editing the selected contract.
    Edit,

    /// Sets a field of the draft, e.g. `set royaltySplit 60`.
    Set { field: String, value: Vec<String> },

    /// Saves the draft into the contract.
    Save,

    /// Discards the draft.
    Cancel,

    /// Starts signing as producer.
    Sign,

    /// Changes the pending signature.
    SignInput { text: Vec<String> },

    SignConfirm,

    SignCancel,

    /// Shows purchases, optionally switching tab (all, beats, kits, services).
    Orders { tab: Option<String> },

    /// Opens the detail view of an order.
    Order { order_id: String },

    /// Shows the payment receipt of an order.
    Receipt { order_id: String },

    /// Shows notifications.
    Notifications {
        /// Marks every notification as read.
        #[arg(long)]
        mark_read: bool,
    },

    /// Adds a license of a project to the cart (first license by default).
    CartAdd {
        project_id: String,
        license_id: Option<String>,
        #[arg(long)]
        track: Option<String>,
    },

    Cart,

    Talent,

    Profile,

    Wallet,

    Help,

    /// Close this program.
    Exit,
}

const COMMANDS: &[CommandHelp] = &[
    CommandHelp { name: "home", args: "", description: "Show the listings" },
    CommandHelp { name: "search", args: "<terms...>", description: "Search listings" },
    CommandHelp { name: "genre", args: "<genre>", description: "Filter by genre" },
    CommandHelp { name: "key", args: "<key>", description: "Filter by key" },
    CommandHelp { name: "reset-filters", args: "", description: "Reset search query" },
    CommandHelp { name: "filters", args: "", description: "Available genres and keys" },
    CommandHelp { name: "talent", args: "", description: "Browse talent" },
    CommandHelp { name: "play", args: "<project> [track]", description: "Play or pause a track" },
    CommandHelp { name: "toggle", args: "", description: "Toggle play/pause" },
    CommandHelp { name: "player", args: "[expand|minimize]", description: "Player panel" },
    CommandHelp { name: "contracts", args: "", description: "Open the contracts page" },
    CommandHelp { name: "contract-select", args: "<id>", description: "View a contract" },
    CommandHelp { name: "contract-new", args: "", description: "Create a draft contract" },
    CommandHelp { name: "edit", args: "", description: "Edit the selected contract" },
    CommandHelp { name: "set", args: "<field> <value>", description: "Set a draft field" },
    CommandHelp { name: "save", args: "", description: "Save the draft" },
    CommandHelp { name: "cancel", args: "", description: "Discard the draft" },
    CommandHelp { name: "sign", args: "", description: "Start signing" },
    CommandHelp { name: "sign-input", args: "<name>", description: "Change the signature" },
    CommandHelp { name: "sign-confirm", args: "", description: "Apply the signature" },
    CommandHelp { name: "sign-cancel", args: "", description: "Abandon signing" },
    CommandHelp { name: "login", args: "", description: "Sign in" },
    CommandHelp { name: "logout", args: "", description: "Sign out and go home" },
    CommandHelp { name: "claim-gems", args: "", description: "Claim 10 daily gems" },
    CommandHelp { name: "new-day", args: "", description: "Re-enable the daily claim" },
    CommandHelp { name: "balance", args: "", description: "Show/hide cash balance" },
    CommandHelp { name: "account", args: "", description: "Account summary" },
    CommandHelp { name: "profile", args: "", description: "Your profile" },
    CommandHelp { name: "wallet", args: "", description: "Dashboard wallet" },
    CommandHelp { name: "orders", args: "[tab]", description: "Your purchases" },
    CommandHelp { name: "order", args: "<id>", description: "Order details" },
    CommandHelp { name: "receipt", args: "<id>", description: "Payment receipt" },
    CommandHelp { name: "notifications", args: "[--mark-read]", description: "Your notifications" },
    CommandHelp { name: "cart", args: "", description: "Show the cart" },
    CommandHelp { name: "cart-add", args: "<project> [license] [--track <id>]", description: "Add to cart" },
    CommandHelp { name: "view", args: "<view>", description: "Go to any view" },
    CommandHelp { name: "back", args: "", description: "Back from terms/privacy" },
    CommandHelp { name: "help", args: "", description: "Show this help" },
    CommandHelp { name: "exit", args: "", description: "Quit" },
];

enum CommandExecutionResult {
    /// The command changed something; re-render the current page.
    Ok,
    /// The command printed its own output.
    Printed,
    Exit,
    Error(String),
}

fn joined(words: &[String]) -> String {
    words.join(" ")
}

/// Contract commands only make sense where the contracts page is reachable.
fn require_login(state: &AppState) -> Result<(), CommandExecutionResult> {
    if state.is_logged_in() {
        Ok(())
    } else {
        Err(CommandExecutionResult::Error(
            "Sign in with 'login' to manage contracts.".to_string(),
        ))
    }
}

fn execute_contract_command(
    command: InnerCommand,
    state: &mut AppState,
) -> CommandExecutionResult {
    if let Err(denied) = require_login(state) {
        return denied;
    }
    state.navigate(View::Contracts);
    let editor = state.contracts_mut();
    let result = match command {
        InnerCommand::ContractSelect { contract_id } => editor.select(&contract_id),
        InnerCommand::ContractNew => {
            editor.create();
            Ok(())
        }
        InnerCommand::Edit => editor.start_edit(),
        InnerCommand::Set { field, value } => match field.parse::<ContractField>() {
            Ok(field) => editor.edit_field(field, &joined(&value)),
            Err(e) => return CommandExecutionResult::Error(e),
        },
        InnerCommand::Save => editor.save().map(|_| ()),
        InnerCommand::Cancel => editor.cancel_edit(),
        InnerCommand::Sign => editor.start_sign(),
        InnerCommand::SignInput { text } => editor.update_sign_input(&joined(&text)),
        InnerCommand::SignConfirm => editor.confirm_sign(),
        InnerCommand::SignCancel => editor.cancel_sign(),
        _ => Ok(()),
    };
    match result {
        Ok(()) => CommandExecutionResult::Ok,
        Err(e) => CommandExecutionResult::Error(e.to_string()),
    }
}

fn execute_command(line: String, state: &mut AppState) -> CommandExecutionResult {
    if line.trim().is_empty() {
        return CommandExecutionResult::Printed;
    }

    let args =
        shlex::split(&line).unwrap_or_else(|| line.split_whitespace().map(String::from).collect());

    let cli = InnerCli::try_parse_from(std::iter::once(" ").chain(args.iter().map(String::as_str)));

    let cli = match cli {
        Ok(cli) => cli,
        Err(e) => {
            if e.print().is_err() {
                println!("{}", e);
            }
            return CommandExecutionResult::Printed;
        }
    };

    print_command_echo(&line);
    if state.roll_over_day(Local::now().date_naive()) {
        print_info("A new day has started, your daily gems are ready.");
    }

    match cli.command {
        InnerCommand::Home => state.navigate(View::Home),
        InnerCommand::Search { query } => state.handle_search(&joined(&query)),
        InnerCommand::Genre { genre } => {
            state.set_genre(&joined(&genre));
            state.navigate(View::Home);
        }
        InnerCommand::Key { key } => {
            state.set_key(&joined(&key));
            state.navigate(View::Home);
        }
        InnerCommand::ResetFilters => {
            state.reset_search();
            state.navigate(View::Home);
        }
        InnerCommand::Filters => {
            ui::filter_options(state).print();
            return CommandExecutionResult::Printed;
        }
        InnerCommand::Play {
            project_id,
            track_id,
        } => {
            if let Err(e) = state.play(&project_id, track_id.as_deref()) {
                return CommandExecutionResult::Error(e.to_string());
            }
        }
        InnerCommand::Toggle => state.toggle_play(),
        InnerCommand::Player { state: panel } => {
            match panel {
                Some(PanelState::Expand) => state.player_mut().expand(),
                Some(PanelState::Minimize) => state.player_mut().minimize(),
                None => {}
            }
            match ui::player_bar(state) {
                Some(bar) => bar.print(),
                None => print_info("Nothing selected. Use 'play <project>' to start."),
            }
            return CommandExecutionResult::Printed;
        }
        InnerCommand::View { view } => match view.parse::<View>() {
            Ok(view) => state.navigate(view),
            Err(e) => return CommandExecutionResult::Error(e.to_string()),
        },
        InnerCommand::Back => {
            if !state.back() {
                return CommandExecutionResult::Error("This page has no back link.".to_string());
            }
        }
        InnerCommand::Login => {
            state.login();
            print_success(&format!("Signed in as {}", state.profile().username));
        }
        InnerCommand::Logout => state.logout(),
        InnerCommand::ClaimGems => {
            if !state.is_logged_in() {
                return CommandExecutionResult::Error("Sign in to claim gems.".to_string());
            }
            if state.claim_daily_gems(Local::now().date_naive()) {
                print_success(&format!(
                    "+10 gems! You now have {}.",
                    state.profile().gems
                ));
            } else {
                print_info("Already claimed today. Come back tomorrow.");
            }
            return CommandExecutionResult::Printed;
        }
        InnerCommand::NewDay => {
            state.new_day();
            print_info("Daily claim is available again.");
            return CommandExecutionResult::Printed;
        }
        InnerCommand::Balance => {
            state.toggle_balance();
            ui::top_bar(state).print();
            return CommandExecutionResult::Printed;
        }
        InnerCommand::Account => {
            ui::top_bar(state).print();
            return CommandExecutionResult::Printed;
        }
        InnerCommand::Contracts => state.navigate(View::Contracts),
        command @ (InnerCommand::ContractSelect { .. }
        | InnerCommand::ContractNew
        | InnerCommand::Edit
        | InnerCommand::Set { .. }
        | InnerCommand::Save
        | InnerCommand::Cancel
        | InnerCommand::Sign
        | InnerCommand::SignInput { .. }
        | InnerCommand::SignConfirm
        | InnerCommand::SignCancel) => return execute_contract_command(command, state),
        InnerCommand::Orders { tab } => {
            if let Some(tab) = tab {
                match tab.parse::<PurchaseTab>() {
                    Ok(tab) => state.set_purchase_tab(tab),
                    Err(e) => return CommandExecutionResult::Error(e),
                }
            }
            state.navigate(View::DashboardOrders);
        }
        InnerCommand::Order { order_id } => {
            if let Err(e) = state.open_order(&order_id) {
                return CommandExecutionResult::Error(e.to_string());
            }
        }
        InnerCommand::Receipt { order_id } => {
            if !state.is_logged_in() {
                return CommandExecutionResult::Error("Sign in to see receipts.".to_string());
            }
            match state.purchase(&order_id) {
                Some(purchase) => ui::receipt(purchase, state.profile()).print(),
                None => {
                    return CommandExecutionResult::Error(format!("No order with id {}", order_id))
                }
            }
            return CommandExecutionResult::Printed;
        }
        InnerCommand::Notifications { mark_read } => {
            if mark_read && state.is_logged_in() {
                let changed = state.mark_notifications_read();
                debug!("Marked {} notifications as read", changed);
            }
            ui::notifications(state).print();
            return CommandExecutionResult::Printed;
        }
        InnerCommand::CartAdd {
            project_id,
            license_id,
            track,
        } => {
            match state.add_to_cart(&project_id, track.as_deref(), license_id.as_deref()) {
                Ok(item) => print_success(&format!(
                    "Added {} ({}) to cart",
                    item.project_title, item.license_name
                )),
                Err(e) => return CommandExecutionResult::Error(e.to_string()),
            }
            return CommandExecutionResult::Printed;
        }
        InnerCommand::Cart => {
            ui::cart(state, "Your Cart").print();
            return CommandExecutionResult::Printed;
        }
        InnerCommand::Talent => state.navigate(View::BrowseTalent),
        InnerCommand::Profile => state.navigate(View::Profile),
        InnerCommand::Wallet => state.navigate(View::DashboardWallet),
        InnerCommand::Help => {
            print_help(COMMANDS);
            return CommandExecutionResult::Printed;
        }
        InnerCommand::Exit => return CommandExecutionResult::Exit,
    }
    CommandExecutionResult::Ok
}

fn render_current(state: &AppState) {
    ui::render(state).print();
    if let Some(bar) = ui::player_bar(state) {
        bar.print();
    }
}

#[derive(rustyline_derive::Hinter)]
struct MyHelper {
    commands_names: Vec<String>,
}

impl MyHelper {
    pub fn new() -> Self {
        let commands_names: Vec<String> = InnerCli::command()
            .get_subcommands()
            .map(|sc| sc.get_name().to_string())
            .collect();

        MyHelper { commands_names }
    }
}

impl Completer for MyHelper {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &rustyline::Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        if line.contains(' ') {
            return Ok((0, Vec::with_capacity(0)));
        }
        let matches = self
            .commands_names
            .iter()
            .filter(|c| c.starts_with(line))
            .map(|c| c.to_string())
            .collect::<Vec<_>>();

        Ok((0, matches))
    }
}

impl Highlighter for MyHelper {}
impl Validator for MyHelper {}
impl Helper for MyHelper {}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // Logs go to stderr so they do not interleave with the rendered pages
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")?;

    let file_config = match &cli_args.config {
        Some(path) => match FileConfig::load(path) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                warn!("Ignoring config file: {:#}", e);
                None
            }
        },
        None => None,
    };
    let cli_config = CliConfig {
        base_url: cli_args.base_url.clone(),
        anon_key: cli_args.anon_key.clone(),
    };
    let config = AppConfig::resolve(&cli_config, file_config, &EnvConfig::from_env())?;

    let profile = mock_profile().with_settings(&config.profile);
    let mut state = AppState::new(profile);

    let backend_label = config
        .backend
        .as_ref()
        .map(|b| b.base_url.clone())
        .unwrap_or_else(|| "not configured".to_string());

    print_banner();
    print_loading(&backend_label);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let loaded = runtime.block_on(load_from_settings(config.backend.as_ref()));
    let source_label = match &loaded.source {
        DataSource::Remote => format!("{} projects from backend", loaded.projects.len()),
        DataSource::Fallback(reason) => format!("sample data ({})", reason.kind()),
    };
    state.apply_loaded(loaded);

    print_welcome(&backend_label, &source_label);
    render_current(&state);

    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();

    let mut rl = Editor::<MyHelper, FileHistory>::with_config(config)?;
    rl.set_helper(Some(MyHelper::new()));

    loop {
        let readline = rl.readline(&get_prompt());

        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_command(line, &mut state) {
                    CommandExecutionResult::Ok => render_current(&state),
                    CommandExecutionResult::Printed => {}
                    CommandExecutionResult::Exit => break,
                    CommandExecutionResult::Error(err) => print_error(&err),
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D: exiting.");
                break;
            }
            Err(e) => {
                print_error(&format!("{:?}", e));
                break;
            }
        }
    }

    print_goodbye();
    Ok(())
}
