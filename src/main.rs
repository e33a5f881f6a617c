//! Storefront plan CLI
//!
//! Usage:
//!   storefront-plan [OPTIONS] [CONTENT]
//!
//! Options:
//!   -s, --store <FILE>           Store config (TOML)
//!   -t, --theme <ID>             Theme id, overriding the store config
//!   -c, --catalog <FILE>         Catalog data (JSON)
//!       --format-amount <AMOUNT> Format an amount in the store currency
//!       --url <ROUTE>            Resolve a named route for the store
//!   -p, --param <KEY=VALUE>      Route parameter for --url
//!       --themes                 List registered themes
//!   -v, --verbose                Debug logging on stderr
//!   -h, --help                   Print help

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use storefront_engine::config::load_json;
use storefront_engine::{
    format_currency, resolve_url, CatalogData, ContentNormalizer, RawContentBundle, RenderPlanner,
    RouteParams, StoreConfig, TenantDescriptor, ThemeRegistry,
};

#[derive(Parser)]
#[command(name = "storefront-plan")]
#[command(about = "Plan storefront sections from tenant configuration and content")]
struct Cli {
    /// Content bundle (JSON); reads from stdin if not provided
    content: Option<PathBuf>,

    /// Store config file (TOML)
    #[arg(short, long)]
    store: Option<PathBuf>,

    /// Tenant slug when no store config is given
    #[arg(long, default_value = "store")]
    slug: String,

    /// Theme id, overriding the store config
    #[arg(short, long)]
    theme: Option<String>,

    /// Catalog data file (JSON)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Format an amount with the store currency and exit
    #[arg(long, value_name = "AMOUNT")]
    format_amount: Option<String>,

    /// Resolve a named route for the store and exit
    #[arg(long, value_name = "ROUTE")]
    url: Option<String>,

    /// Route parameter for --url
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    params: Vec<(String, String)>,

    /// List registered themes and exit
    #[arg(long)]
    themes: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.themes {
        print_themes();
        return;
    }

    let store = match &cli.store {
        Some(path) => match StoreConfig::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error loading store config '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => StoreConfig {
            tenant: TenantDescriptor::with_slug(cli.slug.clone()),
            theme: storefront_engine::theme::DEFAULT_THEME_ID.to_string(),
            currency: None,
            currency_code: None,
            routes: Default::default(),
        },
    };

    if let Some(amount) = &cli.format_amount {
        println!("{}", format_currency(amount.as_str(), Some(&store.currency())));
        return;
    }

    if let Some(route) = &cli.url {
        let params: RouteParams = cli.params.iter().cloned().collect();
        match resolve_url(&store.route_table(), route, &store.tenant, &params) {
            Ok(url) => println!("{}", url),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let raw = match &cli.content {
        Some(path) => load_json::<RawContentBundle>(path),
        None if io::stdin().is_terminal() => Ok(RawContentBundle::new()),
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => RawContentBundle::from_json_str(&buffer).map_err(Into::into),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };
    let raw = match raw {
        Ok(raw) => raw,
        Err(e) => {
            eprintln!("Error reading content: {}", e);
            std::process::exit(1);
        }
    };

    let catalog = match &cli.catalog {
        Some(path) => match load_json::<CatalogData>(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading catalog '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => CatalogData::new(),
    };

    let theme_id = cli.theme.as_deref().unwrap_or(&store.theme);
    let routes = store.route_table();
    let planner = RenderPlanner::new(ContentNormalizer::builtin(), &routes)
        .with_config(store.plan_config());

    match planner.plan(&store.tenant, theme_id, &raw, &catalog) {
        Ok(sections) => match serde_json::to_string_pretty(&sections) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr so stdout stays machine-readable
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn print_themes() {
    let registry = ThemeRegistry::builtin();
    for id in registry.ids() {
        if let Some(theme) = registry.get(id) {
            let sections: Vec<String> = theme.sections.iter().map(|s| s.to_string()).collect();
            println!("{:<12} {:<12} {}", theme.id, theme.label, sections.join(", "));
        }
    }
}
