#![forbid(unsafe_code)]
//! # Gendered Language CLI
//!
//! Command-line interface for the `gendered_language` crate.
//! It reads a corpus of stories, finds gendered terms, counts the verbs and
//! adjectives used around them and exports the results.
//!
//! ## Example
//! ```bash
//! cargo run --release -- data/stories.csv --dictionary data/wordDictionary.json --export-format csv
//! ```
//!
//! See `--help` for all available options.

use clap::Parser;
use log::{error, warn};
use std::path::Path;
use std::process;

use gendered_language::{
    AnalysisOptions, DEFAULT_BINS, DEFAULT_SEARCH_DISTANCE, ExportFormat, GenderWordLists,
    Lexicon, MAX_BINS, Result, StoryFilter, analyze_corpus, export_analysis, load_corpus,
    load_lexicon, load_word_lists, summary,
};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Stories CSV (title, story), a .txt story or a directory of .txt stories
    path: String,

    /// Dictionary JSON with word, simplifiedWord and partOfSpeech for every word
    #[arg(long)]
    dictionary: Option<String>,

    /// Optional JSON file replacing the built-in gendered word lists
    #[arg(long)]
    word_lists: Option<String>,

    /// Words searched on either side of a gendered term (e.g. 5 = ±5)
    #[arg(long, default_value_t = DEFAULT_SEARCH_DISTANCE)]
    context: usize,

    /// Number of position bins reported for the sentence streamgraph
    #[arg(
        long,
        default_value_t = DEFAULT_BINS as u16,
        value_parser = clap::value_parser!(u16).range(1..=MAX_BINS as i64)
    )]
    bins: u16,

    /// Output format for export (txt, csv, tsv, json)
    #[arg(long, default_value = "json")]
    export_format: ExportFormat,

    /// Directory the exported files are written to (default: current directory)
    #[arg(long)]
    out_dir: Option<String>,

    /// Only summarize this story instead of all stories
    #[arg(long)]
    story: Option<String>,
}

fn run(cli: Cli) -> Result<()> {
    let options = AnalysisOptions {
        search_distance: cli.context,
        bins: usize::from(cli.bins),
        export_format: cli.export_format,
    };

    let corpus_path = Path::new(&cli.path);
    let corpus = load_corpus(corpus_path)?;
    let lexicon = match &cli.dictionary {
        Some(path) => load_lexicon(Path::new(path))?,
        None => {
            warn!("no dictionary given; verbs and adjectives will not be counted");
            Lexicon::default()
        }
    };
    let lists = match &cli.word_lists {
        Some(path) => load_word_lists(Path::new(path))?,
        None => GenderWordLists::default(),
    };

    let analysis = analyze_corpus(&corpus, &lexicon, &lists, &options);

    let filter = StoryFilter::from(cli.story);
    if let StoryFilter::Title(title) = &filter {
        if analysis.story(title).is_none() {
            warn!("story {title:?} is not in the corpus");
        }
    }
    println!("{}", summary(&analysis, &filter));

    let prefix = corpus_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "corpus".to_string());
    let out_dir = cli.out_dir.as_deref().unwrap_or(".");
    export_analysis(&analysis, &options, Path::new(out_dir), &prefix)?;
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("Error: {}", e);
        process::exit(1);
    }
}
