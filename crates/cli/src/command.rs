use anyhow::{Context, Result};
use ldscope_analytics::{AnalyticsConfig, Analyzer, RankedNode};
use ldscope_graph::{build_from_str, Graph, GraphSummary};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SummaryOutput {
    #[serde(flatten)]
    graph: GraphSummary,
    top_betweenness: Vec<RankedNode>,
    top_eigenvector: Vec<RankedNode>,
    community_count: usize,
    component_count: usize,
}

pub fn graph(input: &Path) -> Result<Value> {
    let graph = load_graph(input)?;
    serde_json::to_value(&graph).context("Failed to serialize graph")
}

pub fn analyze(input: &Path, config: AnalyticsConfig) -> Result<Value> {
    let graph = load_graph(input)?;
    let report = Analyzer::new(config).analyze(&graph)?;
    serde_json::to_value(&report).context("Failed to serialize report")
}

pub fn summary(input: &Path, top: usize, config: AnalyticsConfig) -> Result<Value> {
    let graph = load_graph(input)?;
    let report = Analyzer::new(config).analyze(&graph)?;
    let output = SummaryOutput {
        graph: GraphSummary::from_graph(&graph, top),
        top_betweenness: report.top_betweenness(top),
        top_eigenvector: report.top_eigenvector(top),
        community_count: report.community_count,
        component_count: report.component_count,
    };
    serde_json::to_value(&output).context("Failed to serialize summary")
}

pub fn render(value: &Value, pretty: bool) -> Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text)
}

fn load_graph(input: &Path) -> Result<Graph> {
    let text = read_input(input)?;
    build_from_str(&text).with_context(|| format!("Failed to parse {}", display(input)))
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(text);
    }
    fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
}

fn display(input: &Path) -> String {
    if input == Path::new("-") {
        "stdin".to_string()
    } else {
        input.display().to_string()
    }
}
