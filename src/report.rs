// Wordsearch – A word search solver
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use indexmap::IndexMap;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Whether each searched word was found in the grid.
///
/// Words are kept in the order they were first inserted. Inserting a
/// word that is already present replaces its result but keeps its
/// original position, so the report has exactly one entry per distinct
/// word.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    words: IndexMap<String, bool>,
}

impl Report {
    pub fn new() -> Report {
        Report::default()
    }

    pub fn insert(&mut self, word: String, found: bool) {
        self.words.insert(word, found);
    }

    pub fn get(&self, word: &str) -> Option<bool> {
        self.words.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn n_found(&self) -> usize {
        self.words.values().filter(|&&found| found).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.words.iter().map(|(word, &found)| (word.as_str(), found))
    }

    /// Pretty-printed JSON object with two-space indentation.
    pub fn to_json(&self) -> String {
        // Serializing a map of strings to booleans can’t fail
        serde_json::to_string_pretty(self).unwrap()
    }

    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        writer.flush()
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        self.write_to(BufWriter::new(File::create(path)?))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample() -> Report {
        let mut report = Report::new();

        report.insert("ZORRO".to_string(), true);
        report.insert("ABEJA".to_string(), false);
        report.insert("MONO".to_string(), true);

        report
    }

    #[test]
    fn insertion_order() {
        let report = sample();

        assert_eq!(
            &report.iter().collect::<Vec<_>>(),
            &[("ZORRO", true), ("ABEJA", false), ("MONO", true)],
        );
        assert_eq!(report.len(), 3);
        assert_eq!(report.n_found(), 2);
        assert_eq!(report.get("ABEJA"), Some(false));
        assert_eq!(report.get("GATO"), None);
    }

    #[test]
    fn duplicates_keep_first_position() {
        let mut report = sample();

        report.insert("ZORRO".to_string(), false);

        assert_eq!(report.len(), 3);
        assert_eq!(
            &report.iter().collect::<Vec<_>>(),
            &[("ZORRO", false), ("ABEJA", false), ("MONO", true)],
        );
    }

    #[test]
    fn empty() {
        let report = Report::new();

        assert!(report.is_empty());
        assert_eq!(report.n_found(), 0);
        assert_eq!(&report.to_json(), "{}");
    }

    #[test]
    fn json() {
        assert_eq!(
            &sample().to_json(),
            "{\n  \"ZORRO\": true,\n  \"ABEJA\": false,\n  \"MONO\": true\n}",
        );
    }

    #[test]
    fn write_to() {
        let mut buf = Vec::new();

        sample().write_to(&mut buf).unwrap();

        assert_eq!(
            std::str::from_utf8(&buf).unwrap(),
            "{\n  \"ZORRO\": true,\n  \"ABEJA\": false,\n  \"MONO\": true\n}\n",
        );
    }

    #[test]
    fn save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("output.json");

        sample().save(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let parsed = serde_json::from_str::<serde_json::Value>(&contents)
            .unwrap();

        assert_eq!(parsed["ZORRO"], serde_json::Value::Bool(true));
        assert_eq!(parsed["ABEJA"], serde_json::Value::Bool(false));
        assert!(contents.ends_with("}\n"));
    }

    #[test]
    fn save_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("output.json");

        assert!(sample().save(&path).is_err());
    }
}
