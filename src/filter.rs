//! Filter panel model: titled sections of checkbox rows.
//!
//! The panel only records what is shown and whether each row is checked.
//! Rendering the rows and reacting to a toggle (re-running visibility and
//! redrawing) belongs to the host.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::collections::BTreeMap;

use crate::error::Error;

/// Placeholder shown by sections without rows.
pub const EMPTY_SECTION_TEXT: &str = "Loading...";

/// One checkbox row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRow {
    pub id: String,
    pub text: String,
    /// Swatch colour shown next to the text.
    pub colour: Option<String>,
    pub checked: bool,
}

/// A titled group of rows, kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSection {
    pub id: String,
    pub title: String,
    rows: Vec<FilterRow>,
}

impl FilterSection {
    #[must_use]
    pub fn rows(&self) -> &[FilterRow] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, row_id: &str) -> Option<&FilterRow> {
        self.rows.iter().find(|r| r.id == row_id)
    }

    fn row_mut(&mut self, row_id: &str) -> Option<&mut FilterRow> {
        self.rows.iter_mut().find(|r| r.id == row_id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sections of filter rows, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPanel {
    sections: Vec<FilterSection>,
}

impl FilterPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty section. Adding an existing id retitles it and keeps its rows.
    pub fn add_section(&mut self, id: &str, title: &str) {
        match self.section_mut(id) {
            Some(section) => title.clone_into(&mut section.title),
            None => self.sections.push(FilterSection {
                id: id.to_owned(),
                title: title.to_owned(),
                rows: Vec::new(),
            }),
        }
    }

    #[must_use]
    pub fn sections(&self) -> &[FilterSection] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: &str) -> Option<&FilterSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    fn section_mut(&mut self, id: &str) -> Option<&mut FilterSection> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    /// Add a checked row to `section_id`.
    ///
    /// Re-adding an existing row replaces it, checked again, at the end of
    /// the section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownFilterSection`] if the section was never added.
    pub fn add_row(&mut self, section_id: &str, row_id: &str, text: &str, colour: Option<&str>) -> Result<(), Error> {
        let Some(section) = self.section_mut(section_id) else {
            tracing::warn!(section = section_id, row = row_id, "filter row for unknown section");
            return Err(Error::UnknownFilterSection(section_id.to_owned()));
        };
        if let Some(pos) = section.rows.iter().position(|r| r.id == row_id) {
            tracing::debug!(section = section_id, row = row_id, "replacing filter row");
            section.rows.remove(pos);
        }
        section.rows.push(FilterRow {
            id: row_id.to_owned(),
            text: text.to_owned(),
            colour: colour.map(str::to_owned),
            checked: true,
        });
        Ok(())
    }

    /// Remove a row. Unknown sections and rows are ignored.
    pub fn remove_row(&mut self, section_id: &str, row_id: &str) {
        if let Some(section) = self.section_mut(section_id) {
            section.rows.retain(|r| r.id != row_id);
        }
    }

    /// Flip a row and return its new status, or `None` if there is no such row.
    pub fn toggle(&mut self, section_id: &str, row_id: &str) -> Option<bool> {
        let row = self.section_mut(section_id)?.row_mut(row_id)?;
        row.checked = !row.checked;
        Some(row.checked)
    }

    /// Remove every row, keeping the sections.
    pub fn clear_rows(&mut self) {
        for section in &mut self.sections {
            section.rows.clear();
        }
    }

    /// Status of every row in a section, keyed by row id. Empty for unknown sections.
    #[must_use]
    pub fn row_status(&self, section_id: &str) -> BTreeMap<String, bool> {
        self.section(section_id)
            .map(|s| s.rows.iter().map(|r| (r.id.clone(), r.checked)).collect())
            .unwrap_or_default()
    }

    /// Whether a row lets its places through. Rows that do not exist filter nothing.
    #[must_use]
    pub fn is_enabled(&self, section_id: &str, row_id: &str) -> bool {
        self.section(section_id)
            .and_then(|s| s.row(row_id))
            .is_none_or(|r| r.checked)
    }
}
