//! PetFriends API test runner
//!
//! This binary runs the full scenario sequence against the PetFriends
//! pet-catalog service and exits non-zero when any scenario fails.

use petfriends_client::core::client::PetFriendsClient;
use petfriends_client::core::config::Config;
use petfriends_client::core::logging::init_logging;
use petfriends_client::scenarios;
use tracing::error;

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Pick up PETFRIENDS_* variables from a local .env file, if any
    dotenv::dotenv().ok();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    // Print startup banner
    print_startup_banner(&config);

    // Validate account credentials before issuing any request
    if !config.validate_credentials() {
        error!("Account credentials are missing or malformed; set [account] in config.toml or PETFRIENDS_EMAIL / PETFRIENDS_PASSWORD");
        std::process::exit(1);
    }

    let client = PetFriendsClient::new(config.base_url.clone(), config.request_timeout);

    // Run the scenario sequence
    let reports = scenarios::run_all(&client, &config.credentials).await;

    let total = reports.len();
    let failed: Vec<_> = reports.iter().filter(|report| !report.passed()).collect();

    println!();
    println!("Scenarios: {} run, {} passed, {} failed", total, total - failed.len(), failed.len());
    for report in &failed {
        println!("  FAILED {}", report.name);
    }

    if !failed.is_empty() {
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🐾 PetFriends API Test Client v{}", env!("CARGO_PKG_VERSION"));
    println!("✅ Configuration loaded successfully");
    println!("   Service: {}", config.base_url);
    println!("   Account: {}", config.credentials.email);
    println!("   Request Timeout: {}s", config.request_timeout);
    println!("   Log Level: {}", config.log_level);
    println!();
}

/// Print help message
fn print_help() {
    println!("PetFriends API Test Client v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: petfriends-client [OPTIONS]");
    println!();
    println!("Runs the scenario sequence against the PetFriends pet-catalog service.");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Configuration file (config.toml, override with CONFIG_PATH):");
    println!("  log_level                  - Logging level (default: info)");
    println!("  [service] base_url         - Service URL (default: https://petfriends.skillfactory.ru)");
    println!("  [service] request_timeout  - Timeout in seconds (default: 25)");
    println!("  [account] email/password   - Test account credentials");
    println!();
    println!("Environment variables (override the file, .env is honored):");
    println!("  PETFRIENDS_BASE_URL - Service base URL");
    println!("  PETFRIENDS_EMAIL    - Test account email");
    println!("  PETFRIENDS_PASSWORD - Test account password");
}
