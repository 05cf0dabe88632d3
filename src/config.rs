use clap::ValueEnum;

use crate::detect::DEFAULT_SEARCH_DISTANCE;

/// Number of interior position bins in the streamgraph view.
pub const DEFAULT_BINS: usize = 20;

/// Upper bound on the position bins a view will build.
pub const MAX_BINS: usize = 1000;

/// File format of exported results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }
}

/// Options of one corpus analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Words searched on either side of a gendered term.
    pub search_distance: usize,
    pub bins: usize,
    pub export_format: ExportFormat,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            search_distance: DEFAULT_SEARCH_DISTANCE,
            bins: DEFAULT_BINS,
            export_format: ExportFormat::Json,
        }
    }
}
