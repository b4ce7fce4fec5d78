use anyhow::{Context, Result};
use kashmir_homes::api::{HttpApi, ListingsApi};
use kashmir_homes::catalog::{self, BEDROOMS, PROPERTY_TYPES};
use kashmir_homes::config::Config;
use kashmir_homes::home::{render_card, HomePage};
use kashmir_homes::models::SearchField;
use kashmir_homes::navigation::TerminalNavigator;
use kashmir_homes::search_form::{FormState, SearchForm};
use kashmir_homes::spinner::LoadingSpinner;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Type a location (3+ characters) to get suggestions, or use a command:
  /pick <n>         choose suggestion n
  /district <name>  /type <kind>  /min <inr>  /max <inr>  /beds <n>
  /show             print the current search
  /submit           search properties
  /quit             leave";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    info!("🏠 Royal Group of Real Estates - Jammu & Kashmir");

    let config = Config::load().context("Failed to load configuration")?;
    let api: Arc<dyn ListingsApi> = Arc::new(HttpApi::new(&config)?);
    info!("Using backend at {}", config.api_base_url);

    show_home(Arc::clone(&api)).await;

    let form = SearchForm::new(api, &config);
    let renderer = tokio::spawn(render_suggestions(form.subscribe()));

    println!("{HELP}");
    run_search_session(&form).await?;

    renderer.abort();
    Ok(())
}

async fn show_home(api: Arc<dyn ListingsApi>) {
    let mut home = HomePage::new(api);
    LoadingSpinner::spin_while("Loading featured properties...", home.load_featured()).await;

    println!("\n== Featured Properties ==\n");
    if home.featured().is_empty() {
        println!("(none)");
    }
    for property in home.featured() {
        println!("{}\n", render_card(property));
    }

    println!("== Explore Our Districts ==");
    for (district, path) in home.district_links() {
        println!("  {:<10} {}", district, path);
    }
    println!();
}

async fn run_search_session(form: &SearchForm) -> Result<()> {
    let navigator = TerminalNavigator;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let (command, arg) = match line.strip_prefix('/') {
            Some(rest) => {
                let (cmd, arg) = rest.split_once(' ').unwrap_or((rest, ""));
                (cmd, arg.trim())
            }
            None => {
                form.on_location_input(&line);
                continue;
            }
        };

        match command {
            "pick" => match arg.parse::<usize>() {
                Ok(n) if n >= 1 && form.select_suggestion(n - 1) => print_criteria(&form.snapshot()),
                _ => println!("No suggestion {:?}", arg),
            },
            "district" => match catalog::find_district(arg) {
                Some(district) => form.set_field(SearchField::District, district),
                None => println!("Unknown district {:?}. Choose one of: {}", arg, catalog::DISTRICTS.join(", ")),
            },
            "type" => match catalog::find_option(&PROPERTY_TYPES, arg) {
                Some(kind) => form.set_field(SearchField::PropertyType, kind),
                None => println!("Unknown property type {:?}", arg),
            },
            "beds" => match catalog::find_option(&BEDROOMS, arg) {
                Some(beds) => form.set_field(SearchField::Bedrooms, beds),
                None => println!("Bedrooms must be 1-4"),
            },
            "min" | "max" => {
                if !arg.is_empty() && arg.parse::<u64>().is_err() {
                    println!("Price must be a whole number of rupees");
                    continue;
                }
                let field = if command == "min" { SearchField::MinPrice } else { SearchField::MaxPrice };
                form.set_field(field, arg);
            }
            "show" => print_criteria(&form.snapshot()),
            "submit" => {
                form.submit(&navigator);
                return Ok(());
            }
            "quit" => return Ok(()),
            "help" => println!("{HELP}"),
            other => {
                warn!("Unknown command /{}", other);
                println!("{HELP}");
            }
        }
    }

    Ok(())
}

async fn render_suggestions(mut rx: watch::Receiver<FormState>) {
    let mut shown = Vec::new();
    let mut was_loading = false;

    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone();

        if state.loading && !was_loading {
            println!("{}", LoadingSpinner::render(0, "Searching locations..."));
        }
        was_loading = state.loading;

        if state.suggestions != shown {
            for (i, suggestion) in state.suggestions.iter().enumerate() {
                match &suggestion.district {
                    Some(district) => println!("  {}. {} ({})", i + 1, suggestion.name, district),
                    None => println!("  {}. {}", i + 1, suggestion.name),
                }
            }
            shown = state.suggestions;
        }
    }
}

fn print_criteria(state: &FormState) {
    let c = &state.criteria;
    println!("Location:      {}", c.location);
    println!("District:      {}", c.district);
    println!("Property type: {}", c.property_type);
    println!("Price:         {} - {}", c.min_price, c.max_price);
    println!("Bedrooms:      {}", c.bedrooms);
    if let (Some(lat), Some(lon)) = (c.latitude, c.longitude) {
        println!("Coordinates:   {:.4}, {:.4}", lat, lon);
    }
    if !state.suggestions.is_empty() {
        println!("{} suggestions open", state.suggestions.len());
    }
}
