//! Loading a corpus, a dictionary and word lists from disk, and exporting
//! the analysis collections.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use chrono::prelude::*;
use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, info};
use serde::Serialize;
use walkdir::WalkDir;

use crate::analysis::Analysis;
use crate::config::{AnalysisOptions, ExportFormat};
use crate::corpus::StoryRecord;
use crate::error::{Error, Result};
use crate::gender::{GenderWordList, GenderWordLists};
use crate::lexicon::{Lexicon, LookupEntry};
use crate::report::summary;
use crate::views::{StoryFilter, position_bins};

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|x| x.eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

///Collects the `.txt` files below `path` (or `path` itself when it is a `.txt` file), sorted.
pub fn collect_files(path: &Path) -> Vec<String> {
    let mut files: Vec<String> = WalkDir::new(path)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && has_extension(e.path(), "txt"))
        .map(|e| e.path().to_string_lossy().into_owned())
        .collect();
    files.sort();
    files
}

///Loads stories from a CSV file (`title` and `story` columns), a single `.txt` story or a
///directory of `.txt` stories. Text files are titled by their file stem.
pub fn load_corpus(path: &Path) -> Result<Vec<StoryRecord>> {
    if !path.exists() {
        return Err(Error::MissingPath(path.display().to_string()));
    }
    if path.is_file() {
        if has_extension(path, "csv") {
            return read_stories_csv(File::open(path)?);
        }
        if !has_extension(path, "txt") {
            return Err(Error::InvalidInput(format!(
                "{} is neither a .csv nor a .txt file",
                path.display()
            )));
        }
    }

    let mut stories = Vec::new();
    for file in collect_files(path) {
        let file = Path::new(&file);
        let title = file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        debug!("reading story {:?} from {}", title, file.display());
        stories.push(StoryRecord::new(title, fs::read_to_string(file)?));
    }
    if stories.is_empty() {
        return Err(Error::InvalidInput(format!(
            "no .txt stories found in {}",
            path.display()
        )));
    }
    Ok(stories)
}

/// Reads story records from CSV with headers `title` and `story` (or `text`).
pub fn read_stories_csv<R: Read>(reader: R) -> Result<Vec<StoryRecord>> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);
    let mut stories = Vec::new();
    for record in rdr.deserialize() {
        stories.push(record?);
    }
    Ok(stories)
}

/// Parses a dictionary JSON array of `{word, simplifiedWord, partOfSpeech}` records.
pub fn parse_lexicon(json: &str) -> Result<Lexicon> {
    let entries: Vec<LookupEntry> = serde_json::from_str(json)?;
    Ok(Lexicon::new(entries))
}

pub fn load_lexicon(path: &Path) -> Result<Lexicon> {
    if !path.exists() {
        return Err(Error::MissingPath(path.display().to_string()));
    }
    let lexicon = parse_lexicon(&fs::read_to_string(path)?)?;
    info!("loaded {} dictionary entries from {}", lexicon.len(), path.display());
    Ok(lexicon)
}

/// Parses word lists of the form `[{"gender": "male", "words": ["he", ...]}, ...]`.
pub fn parse_word_lists(json: &str) -> Result<GenderWordLists> {
    let lists: Vec<GenderWordList> = serde_json::from_str(json)?;
    if lists.iter().all(|l| l.words.is_empty()) {
        return Err(Error::InvalidInput("word lists contain no words".to_string()));
    }
    Ok(GenderWordLists::from_lists(lists))
}

pub fn load_word_lists(path: &Path) -> Result<GenderWordLists> {
    if !path.exists() {
        return Err(Error::MissingPath(path.display().to_string()));
    }
    parse_word_lists(&fs::read_to_string(path)?)
}

///Neutralizes cells that spreadsheet programs would read as formulas by prefixing a single quote.
/// # Example
/// ```
/// use gendered_language::csv_safe_cell;
/// assert_eq!(csv_safe_cell("=SUM(A1)".to_string()), "'=SUM(A1)");
/// assert_eq!(csv_safe_cell("love".to_string()), "love");
/// ```
pub fn csv_safe_cell(cell: String) -> String {
    match cell.chars().next() {
        Some('=' | '+' | '-' | '@' | '\t' | '\r') => format!("'{cell}"),
        _ => cell,
    }
}

fn timestamp() -> String {
    let local: DateTime<Local> = Local::now();
    local.format("%Y%m%d_%H%M%S").to_string()
}

fn create_file(path: &Path) -> Result<BufWriter<File>> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    Ok(BufWriter::new(file))
}

fn write_table(path: &Path, delimiter: u8, header: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(create_file(path)?);
    wtr.write_record(header)?;
    for row in rows {
        wtr.write_record(row.into_iter().map(csv_safe_cell))?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut out = create_file(path)?;
    serde_json::to_writer_pretty(&mut out, value)?;
    out.flush()?;
    Ok(())
}

///Writes the analysis into `out_dir` as `<prefix>_<timestamp>_<table>.<ext>` files and returns
///their paths. `Txt` writes a single report; the other formats write the stories, sentences, hits,
///associations and position bins tables.
pub fn export_analysis(
    analysis: &Analysis,
    options: &AnalysisOptions,
    out_dir: &Path,
    prefix: &str,
) -> Result<Vec<PathBuf>> {
    let format = options.export_format;
    if !out_dir.is_dir() {
        return Err(Error::MissingPath(out_dir.display().to_string()));
    }
    let stem = format!("{}_{}", prefix, timestamp());
    let path_for = |table: &str| out_dir.join(format!("{stem}_{table}.{}", format.extension()));

    let written = match format {
        ExportFormat::Txt => {
            let path = path_for("report");
            let mut out = create_file(&path)?;
            out.write_all(summary(analysis, &StoryFilter::All).as_bytes())?;
            out.flush()?;
            vec![path]
        }
        ExportFormat::Json => {
            let tables = [
                path_for("stories"),
                path_for("sentences"),
                path_for("hits"),
                path_for("associations"),
                path_for("bins"),
            ];
            write_json(&tables[0], &analysis.stories)?;
            write_json(&tables[1], &analysis.sentences)?;
            write_json(&tables[2], &analysis.hits)?;
            write_json(&tables[3], &analysis.associations)?;
            write_json(
                &tables[4],
                &position_bins(&analysis.sentences, &StoryFilter::All, options.bins),
            )?;
            tables.to_vec()
        }
        ExportFormat::Csv | ExportFormat::Tsv => {
            let delimiter = if format == ExportFormat::Tsv { b'\t' } else { b',' };
            export_tables(analysis, options.bins, delimiter, &path_for)?
        }
    };
    for path in &written {
        info!("wrote {}", path.display());
    }
    Ok(written)
}

fn export_tables(
    analysis: &Analysis,
    bins: usize,
    delimiter: u8,
    path_for: &dyn Fn(&str) -> PathBuf,
) -> Result<Vec<PathBuf>> {
    let stories = path_for("stories");
    write_table(
        &stories,
        delimiter,
        &["title", "sentences", "male", "female", "neutral"],
        analysis
            .stories
            .iter()
            .map(|s| {
                vec![
                    s.title.clone(),
                    s.sentence_count.to_string(),
                    s.counts.male.to_string(),
                    s.counts.female.to_string(),
                    s.counts.neutral.to_string(),
                ]
            })
            .collect(),
    )?;

    let sentences = path_for("sentences");
    write_table(
        &sentences,
        delimiter,
        &["story", "index", "position", "male", "female", "neutral", "text"],
        analysis
            .sentences
            .iter()
            .map(|s| {
                vec![
                    s.story.clone(),
                    s.index.to_string(),
                    s.position_ratio.to_string(),
                    s.counts.male.to_string(),
                    s.counts.female.to_string(),
                    s.counts.neutral.to_string(),
                    s.text.clone(),
                ]
            })
            .collect(),
    )?;

    let hits = path_for("hits");
    write_table(
        &hits,
        delimiter,
        &["story", "sentence", "word_index", "word", "gender", "context"],
        analysis
            .hits
            .iter()
            .map(|h| {
                vec![
                    h.story.clone(),
                    h.sentence_index.to_string(),
                    h.word_index.to_string(),
                    h.word.clone(),
                    h.gender.to_string(),
                    h.context.join(" "),
                ]
            })
            .collect(),
    )?;

    let associations = path_for("associations");
    write_table(
        &associations,
        delimiter,
        &["story", "lemma", "gender", "part_of_speech", "count"],
        analysis
            .associations
            .iter()
            .map(|a| {
                vec![
                    a.story.clone(),
                    a.lemma.clone(),
                    a.gender.to_string(),
                    a.part_of_speech.to_string(),
                    a.count.to_string(),
                ]
            })
            .collect(),
    )?;

    let bin_table = path_for("bins");
    write_table(
        &bin_table,
        delimiter,
        &["position", "male", "female", "neutral"],
        position_bins(&analysis.sentences, &StoryFilter::All, bins)
            .iter()
            .map(|b| {
                vec![
                    b.center.to_string(),
                    b.counts.male.to_string(),
                    b.counts.female.to_string(),
                    b.counts.neutral.to_string(),
                ]
            })
            .collect(),
    )?;

    Ok(vec![stories, sentences, hits, associations, bin_table])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gender::Gender;

    #[test]
    fn csv_rows_deserialize_with_story_column() {
        let data = "title,story\nTale,\"He ran. She, too, ran.\"\nOther,Nothing\n";
        let stories = read_stories_csv(data.as_bytes()).unwrap();
        assert_eq!(
            stories,
            vec![
                StoryRecord::new("Tale", "He ran. She, too, ran."),
                StoryRecord::new("Other", "Nothing"),
            ]
        );
    }

    #[test]
    fn csv_accepts_text_column_and_extra_columns() {
        let data = "author,title,text\nAnon,Tale,Once\n";
        let stories = read_stories_csv(data.as_bytes()).unwrap();
        assert_eq!(stories, vec![StoryRecord::new("Tale", "Once")]);
    }

    #[test]
    fn csv_without_title_fails() {
        let data = "name,story\nTale,Once\n";
        assert!(matches!(read_stories_csv(data.as_bytes()), Err(Error::Csv(_))));
    }

    #[test]
    fn word_lists_from_json() {
        let lists =
            parse_word_lists(r#"[{"gender":"female","words":["Queen","she"]}]"#).unwrap();
        assert_eq!(lists.matches("queen").collect::<Vec<_>>(), vec![Gender::Female]);
        assert_eq!(lists.matches("he").count(), 0);
        assert!(parse_word_lists(r#"[{"gender":"male","words":[]}]"#).is_err());
        assert!(parse_word_lists(r#"[{"gender":"other","words":["x"]}]"#).is_err());
    }

    #[test]
    fn lexicon_from_json() {
        let lexicon = parse_lexicon(
            r#"[{"word":"ran","simplifiedWord":"run","partOfSpeech":["verb","noun"]}]"#,
        )
        .unwrap();
        assert_eq!(lexicon.classify("ran").map(|c| c.lemma), Some("run"));
        assert!(matches!(parse_lexicon("{"), Err(Error::Json(_))));
    }

    #[test]
    fn formula_cells_are_neutralized() {
        assert_eq!(csv_safe_cell("-1".to_string()), "'-1");
        assert_eq!(csv_safe_cell("@x".to_string()), "'@x");
        assert_eq!(csv_safe_cell("'@x".to_string()), "'@x");
        assert_eq!(csv_safe_cell(String::new()), "");
    }
}
