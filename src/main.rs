// file: src/main.rs
// description: commandline shell owning the state and composing the panels
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use art_collector::utils::logging::{format_error, format_heading, format_item, format_success};
use art_collector::{
    AppState, CollectionApi, Config, FactValue, FacetKey, FeaturePanel, HarvardClient,
    QueryDispatcher, QueryOutcome, SearchPanel, TerminalState, UiEvent,
};
use clap::{ArgAction, Parser, Subcommand};
use maud::Render;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "art_collector")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Search the Harvard Art Museums collection", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the century and classification vocabularies
    Vocab,

    /// Submit the search form
    Search {
        #[arg(short, long, default_value = "")]
        query: String,

        #[arg(long, default_value = "any")]
        century: String,

        #[arg(long, default_value = "any")]
        classification: String,

        /// Feature the result at this index
        #[arg(short, long, value_name = "INDEX")]
        feature: Option<usize>,

        /// Print rendered markup instead of plain text
        #[arg(long)]
        html: bool,
    },

    /// Click a facet value (culture, technique, medium, people)
    Facet {
        key: FacetKey,

        value: String,

        #[arg(short, long, value_name = "INDEX")]
        feature: Option<usize>,

        #[arg(long)]
        html: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    art_collector::utils::logging::init_logger(cli.color, cli.verbose);
    colored::control::set_override(cli.color);

    info!("Loading configuration from: {}", cli.config.display());

    let config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    let state = AppState::new();
    let owner = TerminalState::new(state.clone(), cli.color);
    let api: Arc<dyn CollectionApi> =
        Arc::new(HarvardClient::new(&config.api).context("Failed to create collection client")?);
    let dispatcher =
        QueryDispatcher::new(api, owner).with_ordering(config.search.response_ordering);

    match cli.command {
        Commands::Vocab => {
            cmd_vocab(dispatcher).await;
        }
        Commands::Search {
            query,
            century,
            classification,
            feature,
            html,
        } => {
            let mut panel = SearchPanel::new(dispatcher.clone());
            panel.mount().await;
            panel.set_query_string(query);
            panel.set_century(century);
            panel.set_classification(classification);

            if html {
                println!("{}", panel.render().into_string());
            }

            let outcome = panel.submit(&mut UiEvent::new()).await;
            report(&state, outcome, html);
            show_feature(&state, &dispatcher, feature, html);
        }
        Commands::Facet {
            key,
            value,
            feature,
            html,
        } => {
            let outcome = dispatch_facet(&dispatcher, key, &value).await;
            report(&state, outcome, html);
            show_feature(&state, &dispatcher, feature, html);
        }
    }

    Ok(())
}

async fn cmd_vocab(dispatcher: QueryDispatcher) {
    let mut panel = SearchPanel::new(dispatcher);
    panel.mount().await;

    println!(
        "{}",
        format_heading(&format!("Centuries ({})", panel.century_list().len()))
    );
    for option in panel.century_list() {
        println!("  {:<12} {}", option.id, option.name);
    }

    println!(
        "{}",
        format_heading(&format!(
            "Classifications ({})",
            panel.classification_list().len()
        ))
    );
    for option in panel.classification_list() {
        println!("  {:<12} {}", option.id, option.name);
    }
}

async fn dispatch_facet(dispatcher: &QueryDispatcher, key: FacetKey, value: &str) -> QueryOutcome {
    let fact = art_collector::SearchableFact::new(key, Some(value), dispatcher.clone());
    fact.click(&mut UiEvent::new()).await
}

fn report(state: &AppState, outcome: QueryOutcome, html: bool) {
    if html {
        return;
    }

    if let QueryOutcome::Applied { count } = outcome {
        println!("{}", format_success(&format!("{} results", count)));
    }

    for (index, item) in state.search_results().iter().enumerate() {
        let dated = item.dated.as_deref().unwrap_or("");
        println!("{}", format_item(index, &format!("{} {}", item.display_title(), dated)));
    }
}

fn show_feature(state: &AppState, dispatcher: &QueryDispatcher, index: Option<usize>, html: bool) {
    let Some(index) = index else {
        return;
    };

    if state.feature_index(index).is_none() {
        println!("{}", format_error(&format!("No result at index {}", index)));
        return;
    }

    let featured = state.featured_result();
    let panel = FeaturePanel::new(featured.as_ref(), dispatcher.clone());

    if html {
        println!("{}", panel.render().into_string());
        return;
    }

    if let Some(item) = panel.featured() {
        println!(
            "{}",
            format_heading(&format!(
                "{} {}",
                item.display_title(),
                item.dated.as_deref().unwrap_or("")
            ))
        );
    }

    for row in panel.facts() {
        let values: Vec<String> = row
            .values
            .iter()
            .map(|value| match value {
                FactValue::Searchable(fact) => format!("[{}]", fact.label()),
                FactValue::Plain(text) => text.clone().unwrap_or_default(),
            })
            .collect();
        println!("  {:<11} {}", row.label, values.join(", "));
    }

    if let Some(medium) = panel.medium_fact() {
        println!("  {:<11} [{}]", "Medium", medium.label());
    }

    for image in panel.photos() {
        println!(
            "  {:<11} {}",
            "Photo",
            image.baseimageurl.as_deref().unwrap_or("")
        );
    }
}
