//! Curated catalog of installable models
//!
//! A static table bundled with the application for discovery. Search is a
//! plain case-insensitive substring filter; sorting mirrors the column headers
//! of the "Available Models" panel.

mod data;

use std::cmp::Ordering;

use data::CATALOG;

/// One model the user can install
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Name including tag, as passed to pull
    pub name: &'static str,
    pub family: &'static str,
    /// Approximate download size, e.g. `4.1GB`
    pub size: &'static str,
    /// Release month, e.g. `Sep 2024`
    pub released: &'static str,
    pub description: &'static str,
}

impl CatalogEntry {
    /// Approximate size in bytes parsed from the size label
    pub fn size_bytes(&self) -> f64 {
        parse_size(self.size).unwrap_or(0.0)
    }

    /// `(year, month)` parsed from the release label
    pub fn released_key(&self) -> (u32, u32) {
        parse_month_year(self.released).unwrap_or((0, 0))
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.family.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }

    /// Text for the description pane
    pub fn description_text(&self) -> String {
        format!(
            "Name: {}\nSize: {}\nFamily: {}\n\nDescription:\n{}\n\n\
             Note: Model sizes are approximate and may vary based on quantization.",
            self.name, self.size, self.family, self.description
        )
    }
}

/// The full catalog in table order
pub fn entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// Entries whose name, family or description contains `query`, ignoring case
///
/// A blank query returns the whole catalog.
pub fn search(query: &str) -> Vec<&'static CatalogEntry> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return CATALOG.iter().collect();
    }
    CATALOG.iter().filter(|entry| entry.matches(&needle)).collect()
}

/// Exact lookup by name
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Search then apply the current sort
pub fn view(query: &str, sort: SortState) -> Vec<&'static CatalogEntry> {
    let mut results = search(query);
    sort.apply(&mut results);
    results
}

/// Sortable column of the catalog table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Name,
    Size,
    Family,
    Age,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Name,
        SortColumn::Size,
        SortColumn::Family,
        SortColumn::Age,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            SortColumn::Name => "Name",
            SortColumn::Size => "Size",
            SortColumn::Family => "Family",
            SortColumn::Age => "Age",
        }
    }

    fn compare(&self, a: &CatalogEntry, b: &CatalogEntry) -> Ordering {
        match self {
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Size => a.size_bytes().total_cmp(&b.size_bytes()),
            SortColumn::Family => a.family.to_lowercase().cmp(&b.family.to_lowercase()),
            SortColumn::Age => a.released_key().cmp(&b.released_key()),
        }
    }
}

/// Current sort column and direction; unsorted means table order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<SortColumn>,
    pub descending: bool,
}

impl SortState {
    /// Clicking the active column flips direction; another column sorts ascending
    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.descending = !self.descending;
        } else {
            self.column = Some(column);
            self.descending = false;
        }
    }

    pub fn apply(&self, entries: &mut [&CatalogEntry]) {
        let Some(column) = self.column else {
            return;
        };
        entries.sort_by(|a, b| {
            let ordering = column.compare(a, b);
            if self.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    /// Header text with a direction arrow on the active column
    pub fn header_label(&self, column: SortColumn) -> String {
        if self.column == Some(column) {
            let arrow = if self.descending { "↓" } else { "↑" };
            format!("{} {}", column.title(), arrow)
        } else {
            column.title().to_string()
        }
    }
}

/// Parse labels like `3.1GB`, `700 MB` or `512KB` into bytes
pub fn parse_size(label: &str) -> Option<f64> {
    let upper = label.trim().to_uppercase();
    let number = upper.strip_suffix('B')?.trim_end();

    let (digits, multiplier) = match number.chars().last()? {
        'K' => (&number[..number.len() - 1], 1024.0),
        'M' => (&number[..number.len() - 1], 1024.0 * 1024.0),
        'G' => (&number[..number.len() - 1], 1024.0 * 1024.0 * 1024.0),
        'T' => (&number[..number.len() - 1], 1024.0 * 1024.0 * 1024.0 * 1024.0),
        _ => (number, 1.0),
    };

    digits.trim().parse::<f64>().ok().map(|n| n * multiplier)
}

/// Parse `Sep 2024` into `(2024, 9)`
pub fn parse_month_year(label: &str) -> Option<(u32, u32)> {
    const MONTHS: [&str; 12] = [
        "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
    ];

    let mut parts = label.split_whitespace();
    let month = parts.next()?.to_lowercase();
    let year = parts.next()?.parse::<u32>().ok()?;
    if parts.next().is_some() {
        return None;
    }

    let index = MONTHS.iter().position(|m| month.starts_with(m))?;
    Some((year, index as u32 + 1))
}
