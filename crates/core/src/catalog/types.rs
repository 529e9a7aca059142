//! Types for the movie catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Canonical key for a movie on the source site: `lowercase(title)-year`,
/// e.g. `the-nun-2018`. Used both for page lookup and as the on-disk
/// file stem of the downloaded torrent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Wrap an identifier already in site form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build an identifier from a title and release year.
    ///
    /// The title is lowercased; spaces become hyphens so that
    /// `"The Nun"` + 2018 yields `the-nun-2018`.
    pub fn from_title_year(title: &str, year: u32) -> Self {
        let slug = title.trim().to_lowercase().replace(' ', "-");
        Self(format!("{}-{}", slug, year))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name the torrent for this movie is stored under.
    pub fn torrent_file_name(&self) -> String {
        format!("{}.torrent", self.0)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A compact movie reference extracted from an index or search page.
///
/// The rating is optional at this layer: promotional entries on the site
/// sometimes carry no rating element, and the extractor keeps them so
/// that the caller decides whether to drop them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Identifier taken from the last path segment of the listing link.
    pub movie: MovieId,
    /// Rating text as shown on the page, e.g. `5.3 / 10`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

/// The release formats available on a single movie page, mapping a
/// format label (e.g. `720p.WEB`) to the absolute torrent URL.
///
/// A label never maps to more than one URL; the page guarantees at most
/// one format block, and later occurrences of a label overwrite earlier
/// ones. Iteration order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatTable(HashMap<String, String>);

impl FormatTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, url: impl Into<String>) {
        self.0.insert(label.into(), url.into());
    }

    /// Torrent URL for a format label, if the movie is available in it.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.0.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.contains_key(label)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Available format labels.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for FormatTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
