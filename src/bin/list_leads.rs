//! Prints the lead table fetched from the configured lead server.

use dotenvy::dotenv;

use pushkind_leads::dto::leads::LEAD_COLUMNS;
use pushkind_leads::gateway::HttpLeadGateway;
use pushkind_leads::models::config::ClientConfig;
use pushkind_leads::services::cache::LeadListCache;
use pushkind_leads::services::leads::load_leads;
use pushkind_leads::store::UiStore;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let client_config = match ClientConfig::load() {
        Ok(client_config) => client_config,
        Err(err) => {
            log::error!("Error loading client config: {}", err);
            std::process::exit(1);
        }
    };

    let gateway = match HttpLeadGateway::new(&client_config) {
        Ok(gateway) => gateway,
        Err(err) => {
            log::error!("Error building lead gateway: {}", err);
            std::process::exit(1);
        }
    };

    let mut cache = LeadListCache::new();
    let mut store = UiStore::new();

    let page = match load_leads(&gateway, &mut cache, &mut store) {
        Ok(page) => page,
        Err(err) => {
            log::error!("{}: {}", store.state().toast_message, err);
            std::process::exit(1);
        }
    };

    log::info!(
        "{} leads from {}",
        page.rows.len(),
        client_config.api_base_url
    );
    log::info!("{}", LEAD_COLUMNS[..LEAD_COLUMNS.len() - 1].join(" | "));
    for row in &page.rows {
        log::info!(
            "#{} {} | {} | {} | {} | {} | {}",
            row.id,
            row.company_name,
            row.contact_person,
            row.email,
            row.phone,
            row.lead_source,
            row.follow_up_date
        );
    }
}
