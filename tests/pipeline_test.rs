use ppinet::{run_pipeline, Category, GraphError, PipelineConfig};

fn edges(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_full_scenario() {
    // Two components: {A, B, C} and {D, E}; disease marks B, miRNA marks C and E
    let report = run_pipeline(
        edges(&[("A", "B"), ("B", "C"), ("D", "E")]),
        strings(&["B"]),
        strings(&["C", "E"]),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert_eq!(report.full.nodes, 5);
    assert!(!report.full.connected);
    assert_eq!(report.full.categories.normal, 2);
    assert_eq!(report.full.categories.disease_associated, 1);
    assert_eq!(report.full.categories.mirna_targeted, 2);
    assert_eq!(report.full.categories.disease_and_mirna, 0);

    assert_eq!(report.reduced.nodes, 3);
    assert_eq!(report.reduced.edges, 2);
    assert!(report.reduced.connected);

    let row = report.profile.get("B").unwrap();
    assert_eq!(row.count(Category::Normal), 1);
    assert_eq!(row.count(Category::DiseaseAssociated), 1);
    assert_eq!(row.count(Category::MirnaTargeted), 1);
    assert_eq!(row.count(Category::DiseaseAndMirna), 0);
}

#[test]
fn test_duplicate_edges_collapse() {
    let report = run_pipeline(
        edges(&[("A", "B"), ("A", "B"), ("B", "A")]),
        Vec::new(),
        Vec::new(),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert_eq!(report.full.nodes, 2);
    assert_eq!(report.full.edges, 1);

    // Degree 1 each, so centrality is 1.0 for both in the 2-node component
    for entry in report.ranking.entries() {
        assert_eq!(entry.score, 1.0);
    }
}

#[test]
fn test_ambiguous_mirna_gene_excluded() {
    // X appears twice in the miRNA table, so it must stay unannotated
    let report = run_pipeline(
        edges(&[("X", "Y")]),
        Vec::new(),
        strings(&["X", "X", "Y"]),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert_eq!(report.full.categories.mirna_targeted, 1); // Y only
    assert_eq!(report.full.categories.normal, 1); // X fell back to normal
}

#[test]
fn test_reclassification_matches_full_graph() {
    // Attributes are node-local: retained genes keep their category
    let report = run_pipeline(
        edges(&[("A", "B"), ("B", "C"), ("D", "E")]),
        strings(&["B"]),
        strings(&["C", "E"]),
        &PipelineConfig::default(),
    )
    .unwrap();

    // B and C carried their categories into the reduced graph
    assert_eq!(report.reduced.categories.disease_associated, 1);
    assert_eq!(report.reduced.categories.mirna_targeted, 1);
    assert_eq!(report.reduced.categories.normal, 1);
    assert_eq!(
        report.reduced.categories.total(),
        report.reduced.nodes
    );
}

#[test]
fn test_centrality_scores_bounded() {
    let report = run_pipeline(
        edges(&[("HUB", "A"), ("HUB", "B"), ("HUB", "C"), ("A", "B")]),
        Vec::new(),
        Vec::new(),
        &PipelineConfig::default(),
    )
    .unwrap();

    for entry in report.ranking.entries() {
        assert!((0.0..=1.0).contains(&entry.score));
    }
    // HUB touches every other node
    assert_eq!(report.ranking.top(1)[0].gene.as_str(), "HUB");
    assert_eq!(report.ranking.top(1)[0].score, 1.0);
}

#[test]
fn test_profile_row_sums_monotonic_in_radius() {
    let inputs = || {
        (
            edges(&[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")]),
            strings(&["A"]),
            strings(&["E"]),
        )
    };

    let (e1, d1, m1) = inputs();
    let r1 = run_pipeline(e1, d1, m1, &PipelineConfig { radius: 1, slice: 5 }).unwrap();
    let (e2, d2, m2) = inputs();
    let r2 = run_pipeline(e2, d2, m2, &PipelineConfig { radius: 2, slice: 5 }).unwrap();

    let total = r1.reduced.nodes as u32;
    for (row1, row2) in r1.profile.rows().iter().zip(r2.profile.rows()) {
        assert_eq!(row1.gene, row2.gene);
        assert!(row1.total() <= total);
        assert!(row2.total() >= row1.total());
        assert!(row2.total() <= total);
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let run = || {
        let report = run_pipeline(
            edges(&[("A", "B"), ("B", "C"), ("C", "A"), ("C", "D"), ("E", "F")]),
            strings(&["B", "D"]),
            strings(&["C", "F"]),
            &PipelineConfig { radius: 2, slice: 3 },
        )
        .unwrap();
        serde_json::to_string(&report).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_malformed_edge_fails_the_run() {
    let err = run_pipeline(
        edges(&[("A", "B"), ("C", "")]),
        Vec::new(),
        Vec::new(),
        &PipelineConfig::default(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        GraphError::MalformedEdge {
            row: 2,
            side: "target"
        }
    );
}

#[test]
fn test_invalid_radius_rejected() {
    let err = run_pipeline(
        edges(&[("A", "B")]),
        Vec::new(),
        Vec::new(),
        &PipelineConfig { radius: 0, slice: 5 },
    )
    .unwrap_err();

    assert_eq!(err, GraphError::InvalidRadius(0));
}

#[test]
fn test_single_edge_graph() {
    let report = run_pipeline(
        edges(&[("A", "B")]),
        Vec::new(),
        Vec::new(),
        &PipelineConfig::default(),
    )
    .unwrap();

    assert!(report.full.connected);
    assert_eq!(report.reduced.nodes, 2);
    // Each node reaches itself and its neighbor
    for row in report.profile.rows() {
        assert_eq!(row.total(), 2);
    }
}
