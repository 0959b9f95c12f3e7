use std::fs::File;
use std::io;
use std::path::PathBuf;

use csv::{ReaderBuilder, Trim};
use log::{debug, info};

use crate::error::GenError;

pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";
pub const DEFAULT_NATIONALITIES: &[&str] = &["nl", "es", "de"];
pub const DEFAULT_VENDOR_SEED: &str = "42";
pub const DEFAULT_ATTENDEE_SEED: &str = "40320";

/// A person's name as delivered by a [`NameSource`], casing untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    pub first: String,
    pub last: String,
}

impl Name {
    #[must_use]
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Name {
            first: first.into(),
            last: last.into(),
        }
    }

    /// `"<first> <last>"` in title case, the way vendors are displayed
    #[must_use]
    pub fn display_name(&self) -> String {
        title_case(&format!("{} {}", self.first, self.last))
    }
}

pub trait NameSource {
    /// Returns up to `count` names. Sources may return fewer than asked for.
    ///
    /// # Errors
    /// Errors when the names could not be retrieved or parsed.
    fn fetch(&self, count: usize) -> Result<Vec<Name>, GenError>;
}

/// Live source backed by the randomuser.me CSV endpoint.
#[derive(Debug, Clone)]
pub struct RandomUserSource {
    client: reqwest::blocking::Client,
    base_url: String,
    nationalities: Vec<String>,
    seed: String,
}

impl RandomUserSource {
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        RandomUserSource {
            client: reqwest::blocking::Client::new(),
            base_url: DEFAULT_API_URL.to_string(),
            nationalities: DEFAULT_NATIONALITIES
                .iter()
                .map(ToString::to_string)
                .collect(),
            seed: seed.into(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_nationalities(mut self, nationalities: Vec<String>) -> Self {
        self.nationalities = nationalities;
        self
    }

    #[must_use]
    pub fn url(&self, count: usize) -> String {
        format!(
            "{}?results={}&inc=name&nat={}&format=csv&seed={}",
            self.base_url,
            count,
            self.nationalities.join(","),
            self.seed
        )
    }
}

impl NameSource for RandomUserSource {
    fn fetch(&self, count: usize) -> Result<Vec<Name>, GenError> {
        let url = self.url(count);
        info!("Fetching {count} names from {url}");
        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        let mut names = parse_names(body.as_bytes())?;
        names.truncate(count);
        debug!("Received {} names", names.len());
        Ok(names)
    }
}

/// Offline source reading a CSV file in the same format the live endpoint serves.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CsvFileSource { path: path.into() }
    }
}

impl NameSource for CsvFileSource {
    fn fetch(&self, count: usize) -> Result<Vec<Name>, GenError> {
        info!("Reading up to {} names from {}", count, self.path.display());
        let mut names = parse_names(File::open(&self.path)?)?;
        names.truncate(count);
        Ok(names)
    }
}

/// Fixed in-memory source.
#[derive(Debug, Clone, Default)]
pub struct StaticNameSource {
    names: Vec<Name>,
}

impl StaticNameSource {
    #[must_use]
    pub fn new(names: Vec<Name>) -> Self {
        StaticNameSource { names }
    }
}

impl NameSource for StaticNameSource {
    fn fetch(&self, count: usize) -> Result<Vec<Name>, GenError> {
        Ok(self.names.iter().take(count).cloned().collect())
    }
}

/// Parses `title,first,last` rows. The first row is a header and is skipped,
/// the title is dropped.
///
/// # Errors
/// Errors on unreadable CSV or on a row with fewer than three fields.
pub fn parse_names(input: impl io::Read) -> Result<Vec<Name>, GenError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let mut names = Vec::new();
    for record in reader.records() {
        let record = record?;
        match (record.get(1), record.get(2)) {
            (Some(first), Some(last)) => names.push(Name::new(first, last)),
            _ => {
                return Err(GenError::MalformedNameRecord {
                    line: record.position().map_or(0, csv::Position::line),
                    fields: record.len(),
                })
            }
        }
    }
    Ok(names)
}

/// Upper-cases the first character and lower-cases the rest.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Upper-cases every letter that starts a word, lower-cases the others.
/// Any non-alphabetic character starts a new word.
#[must_use]
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    const SAMPLE: &str = "name.title,name.first,name.last\n\
                          Mr,jan,de vries\n\
                          Ms, lucía , GARCÍA \n\
                          Mrs,Anke,Müller\n";

    #[test]
    fn test_parse_names() {
        let names = parse_names(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            names,
            vec![
                Name::new("jan", "de vries"),
                Name::new("lucía", "GARCÍA"),
                Name::new("Anke", "Müller"),
            ]
        );
    }

    #[test]
    fn test_parse_names_header_only() {
        let names = parse_names("name.title,name.first,name.last\n".as_bytes()).unwrap();
        assert!(names.is_empty());
        assert!(parse_names("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_parse_names_short_row() {
        let input = "name.title,name.first,name.last\nMr,jan\n";
        let res = parse_names(input.as_bytes());
        assert!(matches!(
            res,
            Err(GenError::MalformedNameRecord { fields: 2, .. })
        ));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("jan"), "Jan");
        assert_eq!(capitalize("GARCÍA"), "García");
        assert_eq!(capitalize("de vries"), "De vries");
        assert_eq!(capitalize("émile"), "Émile");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("jan de vries"), "Jan De Vries");
        assert_eq!(title_case("ANNA-LENA schmidt"), "Anna-Lena Schmidt");
        assert_eq!(title_case("o'neil"), "O'Neil");
        assert_eq!(Name::new("lucía", "GARCÍA").display_name(), "Lucía García");
    }

    #[test]
    fn test_static_source_caps_count() {
        let source = StaticNameSource::new(vec![
            Name::new("a", "b"),
            Name::new("c", "d"),
            Name::new("e", "f"),
        ]);
        assert_eq!(source.fetch(2).unwrap().len(), 2);
        assert_eq!(source.fetch(10).unwrap().len(), 3);
        assert!(source.fetch(0).unwrap().is_empty());
    }

    #[test]
    fn test_random_user_url() {
        let source = RandomUserSource::new("40320");
        assert_eq!(
            source.url(800),
            "https://randomuser.me/api/?results=800&inc=name&nat=nl,es,de&format=csv&seed=40320"
        );
        let source = RandomUserSource::new("7")
            .with_base_url("http://localhost:8080/api/")
            .with_nationalities(vec!["fr".to_string()]);
        assert_eq!(
            source.url(3),
            "http://localhost:8080/api/?results=3&inc=name&nat=fr&format=csv&seed=7"
        );
    }
}
