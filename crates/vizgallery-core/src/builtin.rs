//! Built-in visualization set, used when no manifest is configured.

use crate::catalog::{Catalog, FigureItem};

/// (file, title, category, tags, description)
type Entry = (&'static str, &'static str, &'static str, &'static [&'static str], &'static str);

const FIGURES: &[Entry] = &[
    (
        "boxplot.svg",
        "Box Plot",
        "distribution",
        &["stats", "comparison"],
        "Statistical distribution visualization showing median, quartiles, and outliers across experimental conditions. Essential for comparing gene expression levels between different sample groups.",
    ),
    (
        "violin_plot.svg",
        "Violin Plot",
        "distribution",
        &["stats", "density", "single-cell"],
        "Combines box plot statistics with kernel density estimation to show the full distribution shape. Particularly useful for visualizing expression patterns in single-cell RNA-seq data.",
    ),
    (
        "dotplot.svg",
        "Dot Plot",
        "expression",
        &["matrix", "single-cell"],
        "Multi-dimensional visualization displaying gene expression levels across different cell types or conditions using size and color encoding for dual-metric representation.",
    ),
    (
        "single_dotplot.svg",
        "Single Dot Plot",
        "expression",
        &["matrix"],
        "Focused dot plot visualization for comparing expression patterns of selected genes across specific cell populations or experimental timepoints.",
    ),
    (
        "scatterplot.svg",
        "Scatter Plot",
        "expression",
        &["correlation", "qc"],
        "Two-dimensional representation of gene expression relationships, often used for correlation analysis and quality control in RNA-seq experiments.",
    ),
    (
        "lineplot.svg",
        "Line Plot",
        "expression",
        &["temporal"],
        "Time-series visualization tracking gene expression changes across multiple timepoints or developmental stages, ideal for temporal analysis.",
    ),
    (
        "response_plot.svg",
        "Response Plot",
        "expression",
        &["temporal", "dose-response"],
        "Dose-response or treatment-response curves showing biological system reactions to varying stimuli concentrations or treatment conditions.",
    ),
    (
        "maplot.svg",
        "MA Plot",
        "expression",
        &["differential", "stats"],
        "Log-ratio (M) versus mean expression (A) plot for differential expression analysis. Highlights significantly regulated genes with fold-change thresholds.",
    ),
    (
        "umap_plot.svg",
        "UMAP Plot",
        "dimensional",
        &["cluster", "single-cell"],
        "Uniform Manifold Approximation and Projection for dimensionality reduction. Reveals cell clusters and developmental trajectories in single-cell transcriptomics data.",
    ),
    (
        "circos_plot.svg",
        "Circos Plot",
        "genomic",
        &["chromosome", "multi-omics"],
        "Circular visualization of genomic data showing chromosomal interactions, structural variants, and multi-omics relationships in a compact, publication-ready format.",
    ),
];

pub(crate) fn catalog() -> Catalog {
    Catalog::new(
        FIGURES
            .iter()
            .map(|(file, title, category, tags, description)| {
                FigureItem::new(*file)
                    .with_title(*title)
                    .with_category(*category)
                    .with_tags(tags.iter().copied())
                    .with_description(*description)
            })
            .collect(),
    )
}
