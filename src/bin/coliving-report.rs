//! Command-line report over support conversation data
//!
//! Loads conversations from a JSON file or from a running support API,
//! computes the dashboard aggregates for a chosen time range and prints a
//! text summary. Optionally exports the aggregates as CSV or JSON.
//!
//! Usage:
//!   coliving-report <FILE | BASE_URL> [--range today|week|month|all]
//!                   [--agents FILE] [--export csv|json] [--out DIR]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use coliving_analytics::api::ApiClient;
use coliving_analytics::export::{
    self, generate_export_filename, ExportFormat, ExportableAgentRow, ExportableTopicRow,
};
use coliving_analytics::metrics::sentiment::{topic_sentiment_breakdown, weekly_sentiment_trend};
use coliving_analytics::metrics::summary::dashboard_summary;
use coliving_analytics::models::{Agent, Conversation};
use coliving_analytics::timerange::{
    filter_by_range, RangeSelection, TimestampField, WindowSemantics,
};
use coliving_analytics::trends::{rank_agents, trending_topics, RankingCriterion};
use coliving_analytics::AnalyticsError;

struct Args {
    source: String,
    range: RangeSelection,
    agents_file: Option<PathBuf>,
    export: Option<ExportFormat>,
    out_dir: PathBuf,
}

fn parse_args() -> Result<Args, String> {
    let mut args = std::env::args().skip(1);
    let source = args.next().ok_or_else(usage)?;
    if source == "--help" || source == "-h" {
        return Err(usage());
    }

    let mut parsed = Args {
        source,
        range: RangeSelection::All,
        agents_file: None,
        export: None,
        out_dir: PathBuf::from("."),
    };

    while let Some(flag) = args.next() {
        let mut value = || args.next().ok_or_else(|| format!("{} needs a value", flag));
        match flag.as_str() {
            "--range" => parsed.range = RangeSelection::from(value()?.as_str()),
            "--agents" => parsed.agents_file = Some(PathBuf::from(value()?)),
            "--export" => {
                parsed.export = Some(value()?.parse().map_err(|e: AnalyticsError| e.to_string())?)
            }
            "--out" => parsed.out_dir = PathBuf::from(value()?),
            _ => return Err(format!("unknown flag: {}\n{}", flag, usage())),
        }
    }
    Ok(parsed)
}

fn usage() -> String {
    "usage: coliving-report <FILE | BASE_URL> [--range today|week|month|all] \
     [--agents FILE] [--export csv|json] [--out DIR]"
        .to_string()
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, AnalyticsError> {
    let data = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Agents referenced by the conversations when no profile file is given.
/// Names fall back to the ids.
fn agents_from_conversations(conversations: &[Conversation]) -> Vec<Agent> {
    let mut ids: Vec<&str> = conversations
        .iter()
        .flat_map(|c| c.agent_ids.iter().map(|id| id.as_str()))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids.into_iter()
        .map(|id| Agent {
            id: id.to_string(),
            name: format!("Agent {}", id),
            role: String::new(),
        })
        .collect()
}

async fn load(
    args: &Args,
) -> Result<(Vec<Conversation>, Vec<Agent>), AnalyticsError> {
    if args.source.starts_with("http://") || args.source.starts_with("https://") {
        let client = ApiClient::new(args.source.clone());
        let conversations = client.fetch_conversations().await?;
        let agents = client.fetch_agents().await?;
        Ok((conversations, agents))
    } else {
        let conversations: Vec<Conversation> = load_json_file(Path::new(&args.source))?;
        let agents = match &args.agents_file {
            Some(path) => load_json_file(path)?,
            None => agents_from_conversations(&conversations),
        };
        Ok((conversations, agents))
    }
}

async fn run(args: Args) -> Result<(), AnalyticsError> {
    let (conversations, agents) = load(&args).await?;
    tracing::info!(
        "Loaded {} conversations, {} agents",
        conversations.len(),
        agents.len()
    );

    let now = chrono::Local::now().naive_local();
    let filtered = filter_by_range(
        &conversations,
        &args.range,
        WindowSemantics::Calendar,
        TimestampField::StartedAt,
        now,
    );

    let summary = dashboard_summary(&filtered);
    let weekly = weekly_sentiment_trend(&filtered);
    let topics = topic_sentiment_breakdown(&filtered);
    let trending = trending_topics(&filtered, None);
    let ranked = rank_agents(&filtered, &agents, RankingCriterion::Overall);

    println!("Conversations: {} ({} in range)", conversations.len(), summary.total);
    println!(
        "  in progress: {}  solved: {}  resolution rate: {:.1}%",
        summary.in_progress, summary.solved, summary.resolution_rate
    );
    println!(
        "  negative: {}  urgent: {}  active agents: {}",
        summary.negative, summary.urgent, summary.agent_count
    );

    if !topics.is_empty() {
        println!("\nTopics:");
        for topic in &topics {
            let flag = if topic.needs_attention { "  [needs attention]" } else { "" };
            println!(
                "  {:<12} {:>4}  +{}% ={}% -{}%{}",
                topic.topic,
                topic.total,
                topic.positive_percent,
                topic.neutral_percent,
                topic.negative_percent,
                flag
            );
        }
    }

    if !ranked.is_empty() {
        println!("\nAgents:");
        for row in &ranked {
            println!(
                "  #{} {:<20} {:>3} tickets  {:.1}% resolved  sentiment {:+.2}",
                row.rank, row.agent_name, row.total_tickets, row.resolution_rate, row.avg_sentiment
            );
        }
    }

    if let Some(format) = args.export {
        std::fs::create_dir_all(&args.out_dir)?;
        match format {
            ExportFormat::Csv => {
                let agent_rows: Vec<ExportableAgentRow> =
                    ranked.iter().map(ExportableAgentRow::from).collect();
                let topic_rows: Vec<ExportableTopicRow> =
                    trending.iter().map(ExportableTopicRow::from).collect();

                let agents_path =
                    args.out_dir.join(generate_export_filename("agents", format.extension()));
                export::write_agents_csv(&agent_rows, &agents_path)?;
                let topics_path =
                    args.out_dir.join(generate_export_filename("topics", format.extension()));
                export::write_topics_csv(&topic_rows, &topics_path)?;
                let weekly_path = args
                    .out_dir
                    .join(generate_export_filename("weekly_sentiment", format.extension()));
                export::write_weekly_sentiment_csv(&weekly, &weekly_path)?;
                tracing::info!("Wrote CSV exports to {:?}", args.out_dir);
            }
            ExportFormat::Json => {
                let snapshot = export::DashboardExportJson::new(
                    summary, weekly, topics, trending, ranked,
                );
                let path = args
                    .out_dir
                    .join(generate_export_filename("dashboard", format.extension()));
                export::write_json(&snapshot, &path)?;
                tracing::info!("Wrote JSON export to {:?}", path);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::from(2);
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
