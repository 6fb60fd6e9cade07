use anyhow::Result;
use budget_tracker_frontend::{FrontendConfig, LocalAuthProvider, Session, SignOutOutcome};
use log::{error, info};
use std::path::PathBuf;
use std::sync::Arc;

/// Walks one session through the settings screen, the theme menu and the
/// profile card, printing what a renderer would show.
///
/// Usage: `budget-tracker-frontend [config.yaml]`
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    info!("Starting budget tracker session");

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(FrontendConfig::default_path);
    let config = FrontendConfig::load_or_default(&config_path)?;

    let auth = Arc::new(LocalAuthProvider::new(config.profile.name.clone()));
    let mut session = Session::start(config, auth);

    let settings = session.settings();
    println!("Payroll date: {}", settings.payroll_date());
    println!("  {}", settings.period_description());
    println!("Budget warning: {}%", settings.budget_warning_threshold());
    println!("  {}", settings.budget_warning_description());
    println!("{}", settings.save().message);

    println!("Themes:");
    for entry in session.theme_selector().entries() {
        let marker = if entry.is_active { "*" } else { " " };
        println!("  {} {:<6} {}", marker, entry.option.label, entry.option.description);
    }

    let profile = session.profile().profile();
    match profile.member_since_year() {
        Some(year) => println!("{} [{}] <{}>, member since {}", profile.name, profile.initial(), profile.email, year),
        None => println!("{} [{}] <{}>", profile.name, profile.initial(), profile.email),
    }

    let confirm = |question: &str| {
        info!("Auto-confirming: {}", question);
        true
    };
    match session.settings().sign_out(&confirm).await {
        Ok(SignOutOutcome::SignedOut) => println!("Signed out"),
        Ok(SignOutOutcome::Cancelled) => println!("Still signed in"),
        Err(e) => error!("{}", e),
    }

    session.end();
    Ok(())
}
