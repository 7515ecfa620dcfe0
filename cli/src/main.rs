//! ppinet CLI: loads the interaction and annotation tables, runs the
//! analysis pipeline, and prints the report.
//!
//! All three inputs are tab-separated files with a header row. The edge
//! list uses its first two columns as source and target gene symbols
//! (further columns are ignored); the annotation tables use their first
//! column as the gene symbol.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use comfy_table::{ContentArrangement, Table};
use ppinet::{run_pipeline, AnalysisReport, PipelineConfig};

#[derive(Parser)]
#[command(name = "ppinet", version, about = "PPI network category and neighborhood analysis")]
struct Cli {
    /// Tab-separated interaction file (source and target in the first two columns)
    #[arg(long)]
    edges: PathBuf,

    /// Tab-separated disease-gene table (gene symbol in the first column)
    #[arg(long)]
    disease: PathBuf,

    /// Tab-separated miRNA-target table (one row per targeting relationship)
    #[arg(long)]
    mirna: PathBuf,

    /// Neighborhood radius in hops
    #[arg(long, default_value_t = 1)]
    radius: usize,

    /// Entries to show from each end of the centrality ranking
    #[arg(long, default_value_t = 5)]
    slice: usize,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let edges = load_edge_list(&cli.edges)?;
    let disease = load_gene_column(&cli.disease)?;
    let mirna = load_gene_column(&cli.mirna)?;

    let config = PipelineConfig {
        radius: cli.radius,
        slice: cli.slice,
    };
    let report = run_pipeline(edges, disease, mirna, &config)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Table => print_report(&report, cli.slice),
    }

    Ok(())
}

/// Read `(source, target)` rows, skipping the header. Rows with a missing
/// endpoint are passed through so the graph builder rejects the run with
/// the offending row number.
fn load_edge_list(path: &Path) -> Result<Vec<(String, String)>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading edge list {}", path.display()))?;

    let mut rows = Vec::new();
    for line in text.lines().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        let mut fields = line.split('\t');
        let source = fields.next().unwrap_or("").trim().to_string();
        let target = fields.next().unwrap_or("").trim().to_string();
        rows.push((source, target));
    }
    Ok(rows)
}

/// Read the first column of an annotation table, skipping the header
fn load_gene_column(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading annotation table {}", path.display()))?;

    let mut genes = Vec::new();
    for line in text.lines().skip(1) {
        let gene = line.split('\t').next().unwrap_or("").trim();
        if !gene.is_empty() {
            genes.push(gene.to_string());
        }
    }
    Ok(genes)
}

fn print_report(report: &AnalysisReport, slice: usize) {
    println!("{}", summary_table(report));

    println!("\n{} highest centrality genes:", slice);
    println!("{}", ranking_table(report, slice, true));
    println!("\n{} lowest centrality genes:", slice);
    println!("{}", ranking_table(report, slice, false));

    println!("\nNeighborhood profile (radius {}):", report.profile.radius());
    println!("{}", profile_table(report, slice));
    let remaining = report.profile.len().saturating_sub(slice);
    if remaining > 0 {
        println!("... and {} more rows", remaining);
    }
}

fn summary_table(report: &AnalysisReport) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["", "full network", "largest component"]);

    let full = &report.full;
    let reduced = &report.reduced;
    table.add_row(vec![
        "nodes".to_string(),
        full.nodes.to_string(),
        reduced.nodes.to_string(),
    ]);
    table.add_row(vec![
        "edges".to_string(),
        full.edges.to_string(),
        reduced.edges.to_string(),
    ]);
    table.add_row(vec![
        "connected".to_string(),
        full.connected.to_string(),
        reduced.connected.to_string(),
    ]);
    table.add_row(vec![
        "normal".to_string(),
        full.categories.normal.to_string(),
        reduced.categories.normal.to_string(),
    ]);
    table.add_row(vec![
        "disease-associated".to_string(),
        full.categories.disease_associated.to_string(),
        reduced.categories.disease_associated.to_string(),
    ]);
    table.add_row(vec![
        "miRNA-targeted".to_string(),
        full.categories.mirna_targeted.to_string(),
        reduced.categories.mirna_targeted.to_string(),
    ]);
    table.add_row(vec![
        "disease+miRNA".to_string(),
        full.categories.disease_and_mirna.to_string(),
        reduced.categories.disease_and_mirna.to_string(),
    ]);
    table.add_row(vec![
        "category sum".to_string(),
        full.categories.total().to_string(),
        reduced.categories.total().to_string(),
    ]);
    table
}

fn ranking_table(report: &AnalysisReport, slice: usize, top: bool) -> Table {
    let entries = if top {
        report.ranking.top(slice)
    } else {
        report.ranking.bottom(slice)
    };

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["gene", "degree centrality"]);
    for entry in entries {
        table.add_row(vec![entry.gene.to_string(), format!("{:.4}", entry.score)]);
    }
    table
}

fn profile_table(report: &AnalysisReport, slice: usize) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "gene",
        "normal",
        "disease",
        "miRNA",
        "disease+miRNA",
    ]);
    for row in report.profile.rows().iter().take(slice) {
        table.add_row(vec![
            row.gene.to_string(),
            row.normal.to_string(),
            row.disease_associated.to_string(),
            row.mirna_targeted.to_string(),
            row.disease_and_mirna.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_tsv_round_trip() {
        let dir = TempDir::new().unwrap();
        let edges = write_file(
            &dir,
            "edges.tsv",
            "Source\tTarget\nA\tB\nB\tC\nA\tB\nD\tE\n",
        );
        let disease = write_file(&dir, "disease.tsv", "genes\tMD\nB\tYes\n");
        let mirna = write_file(
            &dir,
            "mirna.tsv",
            "genes\tmiRNAs\nC\tmir-1\nE\tmir-2\nX\tmir-3\nX\tmir-4\n",
        );

        let edge_rows = load_edge_list(&edges).unwrap();
        assert_eq!(edge_rows.len(), 4); // dedup happens in the builder

        let report = run_pipeline(
            edge_rows,
            load_gene_column(&disease).unwrap(),
            load_gene_column(&mirna).unwrap(),
            &PipelineConfig::default(),
        )
        .unwrap();

        // Duplicate A-B row collapsed
        assert_eq!(report.full.nodes, 5);
        assert_eq!(report.full.edges, 3);
        assert_eq!(report.full.categories.disease_associated, 1);
        assert_eq!(report.full.categories.mirna_targeted, 2);
        assert_eq!(report.reduced.nodes, 3);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let dir = TempDir::new().unwrap();
        let edges = write_file(
            &dir,
            "edges.tsv",
            "Source\tTarget\tConfidence\nA\tB\t0.9\n",
        );

        let rows = load_edge_list(&edges).unwrap();
        assert_eq!(rows, vec![("A".to_string(), "B".to_string())]);
    }

    #[test]
    fn test_missing_column_reaches_builder_as_error() {
        let dir = TempDir::new().unwrap();
        let edges = write_file(&dir, "edges.tsv", "Source\tTarget\nA\n");

        let rows = load_edge_list(&edges).unwrap();
        let err = run_pipeline(
            rows,
            Vec::new(),
            Vec::new(),
            &PipelineConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ppinet::GraphError::MalformedEdge { .. }));
    }
}
