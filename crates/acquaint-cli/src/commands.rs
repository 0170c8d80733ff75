//! CLI command implementations.

use crate::config::{Config, CONFIG_DIR};
use crate::query::{Answer, Query};
use acquaint_graph::{read_graph, GraphStore, SocialGraph};
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Initialize Acquaint in a directory.
pub fn init(path: &Path) -> Result<()> {
    if path.join(CONFIG_DIR).exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    Config::default().save(path)?;

    println!("{} Initialized Acquaint in {}", "✓".green(), path.display());
    println!(
        "  Set {} in {} or pass {}",
        "\"graph\"".cyan(),
        Config::path_in(path).display(),
        "--graph <roster>".cyan()
    );

    Ok(())
}

/// Loads the config in `root`. With a `--graph` flag a broken config only
/// costs its defaults.
fn load_config(root: &Path, flag: Option<&Path>) -> Result<Config> {
    match Config::load(root) {
        Ok(config) => Ok(config.unwrap_or_default()),
        Err(e) if flag.is_some() => {
            warn!("Ignoring {}: {}", Config::path_in(root).display(), e);
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Loads the graph named by the flag or the config in the working directory.
fn open(flag: Option<&Path>) -> Result<(SocialGraph, Config)> {
    let root = std::env::current_dir()?;
    let config = load_config(&root, flag)?;
    let path = config.resolve_graph(flag, &root)?;

    debug!("Loading graph from {}", path.display());
    let graph = read_graph(&path)?;
    Ok((graph, config))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_chain(chain: Option<&[String]>) {
    match chain {
        Some(chain) => {
            let names: Vec<_> = chain.iter().map(|name| name.cyan().to_string()).collect();
            println!("{}", names.join(" -> "));
            println!("  {} {}", "Length:".dimmed(), chain.len() - 1);
        }
        None => println!("No chain"),
    }
}

fn print_groups(groups: &[Vec<String>]) {
    if groups.is_empty() {
        println!("No groups");
        return;
    }
    for (i, group) in groups.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), group.join(", "));
    }
}

fn print_connectors(found: &[String]) {
    if found.is_empty() {
        println!("No connectors");
        return;
    }
    for name in found {
        println!("  {}", name.yellow());
    }
}

/// Shortest chain between two people.
pub fn chain(graph: Option<&Path>, from: &str, to: &str, json: bool) -> Result<()> {
    let (graph, config) = open(graph)?;
    for name in [from, to] {
        if graph.index_of(name).is_none() {
            warn!("{} is not in the graph", name);
        }
    }

    let chain = graph.shortest_chain(from, to);
    if json || config.json {
        return print_json(&chain);
    }
    print_chain(chain.as_deref());
    Ok(())
}

/// Friend groups within one affiliation.
pub fn cliques(graph: Option<&Path>, affiliation: &str, json: bool) -> Result<()> {
    let (graph, config) = open(graph)?;
    let groups = graph.affiliation_groups(affiliation);

    if json || config.json {
        return print_json(&groups);
    }
    println!(
        "{} {} at {}",
        groups.len().to_string().cyan(),
        if groups.len() == 1 { "group" } else { "groups" },
        affiliation.cyan()
    );
    print_groups(&groups);
    Ok(())
}

/// People whose removal disconnects their friends.
pub fn connectors(graph: Option<&Path>, json: bool) -> Result<()> {
    let (graph, config) = open(graph)?;
    let found = graph.connectors();

    if json || config.json {
        return print_json(&found);
    }
    println!("{} connectors", found.len().to_string().cyan());
    print_connectors(&found);
    Ok(())
}

/// Show graph statistics.
pub fn stats(graph: Option<&Path>, json: bool) -> Result<()> {
    let (graph, config) = open(graph)?;
    let stats = graph.stats();

    if json || config.json {
        return print_json(&stats);
    }
    println!("{}", "Acquaint Stats".cyan().bold());
    println!();
    println!("  {} {}", "People:".dimmed(), stats.people);
    println!("  {} {}", "Friendships:".dimmed(), stats.friendships);
    println!("  {} {}", "Affiliations:".dimmed(), stats.affiliations);
    println!("  {} {}", "Components:".dimmed(), stats.components);
    Ok(())
}

/// Export the graph to a JSON snapshot.
pub fn export(graph: Option<&Path>, output: &Path) -> Result<()> {
    let (graph, _) = open(graph)?;
    GraphStore::open(output).save_graph(&graph)?;
    println!("{} Exported to {}", "✓".green(), output.display());
    Ok(())
}

#[derive(Serialize)]
struct BatchResult {
    query: String,
    result: Answer,
}

/// Parses a queries file, skipping blank lines and `#` comments.
fn read_queries(path: &Path) -> Result<Vec<Query>> {
    let text = fs::read_to_string(path)?;
    let mut queries = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let query = Query::parse(line).ok_or_else(|| {
            format!(
                "{}:{}: unrecognized query \"{}\" (expected `chain A|B`, `cliques X` or `connectors`)",
                path.display(),
                i + 1,
                line
            )
        })?;
        queries.push(query);
    }

    Ok(queries)
}

/// Runs each query on the blocking pool; answers come back in input order.
async fn run_batch(
    graph: Arc<SocialGraph>,
    queries: Vec<Query>,
) -> Result<Vec<(Query, Answer)>> {
    debug!("Running {} queries", queries.len());

    let handles: Vec<_> = queries
        .into_iter()
        .map(|query| {
            let graph = Arc::clone(&graph);
            tokio::task::spawn_blocking(move || {
                let answer = query.run(&graph);
                (query, answer)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for handle in handles {
        results.push(handle.await?);
    }
    Ok(results)
}

/// Run a file of queries concurrently against one shared graph.
pub async fn batch(graph: Option<&Path>, queries: &Path, json: bool) -> Result<()> {
    let (graph, config) = open(graph)?;
    let queries = read_queries(queries)?;
    let results = run_batch(Arc::new(graph), queries).await?;

    if json || config.json {
        let results: Vec<_> = results
            .into_iter()
            .map(|(query, result)| BatchResult {
                query: query.to_string(),
                result,
            })
            .collect();
        return print_json(&results);
    }
    for (query, answer) in &results {
        println!("{}", query.to_string().bold());
        match answer {
            Answer::Chain(chain) => print_chain(chain.as_deref()),
            Answer::Groups(groups) => print_groups(groups),
            Answer::Connectors(found) => print_connectors(found),
        }
    }
    Ok(())
}
