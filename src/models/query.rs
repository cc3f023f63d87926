//! Query dimensions for the top-items dashboard.
//!
//! A [`QueryKey`] is the pair (category, time window) that identifies one
//! cacheable request against the top-items endpoint.

use std::fmt;

/// What the dashboard ranks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    /// Top tracks (default)
    #[default]
    Tracks,
    /// Top artists
    Artists,
}

impl Category {
    /// All categories, in prefetch order.
    pub const ALL: [Category; 2] = [Category::Tracks, Category::Artists];

    /// Path segment used by the `/me/top/{type}` endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tracks => "tracks",
            Category::Artists => "artists",
        }
    }

    /// Label for the toggle button.
    pub fn label(self) -> &'static str {
        match self {
            Category::Tracks => "Top Tracks",
            Category::Artists => "Top Artists",
        }
    }

    /// Heading shown above the grid.
    pub fn title(self) -> &'static str {
        match self {
            Category::Tracks => "Your Top Tracks",
            Category::Artists => "Your Top Artists",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Affinity window the ranking is computed over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TimeWindow {
    /// Roughly the last 4 weeks
    Short,
    /// Roughly the last 6 months (default)
    #[default]
    Medium,
    /// Several years of history
    Long,
}

impl TimeWindow {
    /// All windows, shortest first.
    pub const ALL: [TimeWindow; 3] = [TimeWindow::Short, TimeWindow::Medium, TimeWindow::Long];

    /// Value of the `time_range` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            TimeWindow::Short => "short_term",
            TimeWindow::Medium => "medium_term",
            TimeWindow::Long => "long_term",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeWindow::Short => "4 Weeks",
            TimeWindow::Medium => "6 Months",
            TimeWindow::Long => "All Time",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One cacheable query: a category over a time window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub category: Category,
    pub window: TimeWindow,
}

impl QueryKey {
    /// Separator between the two dimensions in [`QueryKey::cache_key`].
    ///
    /// Neither dimension's value contains it.
    pub const SEPARATOR: char = '-';

    pub const fn new(category: Category, window: TimeWindow) -> Self {
        Self { category, window }
    }

    /// Deterministic string form, e.g. `tracks-short_term`.
    pub fn cache_key(&self) -> String {
        format!(
            "{}{}{}",
            self.category.as_str(),
            Self::SEPARATOR,
            self.window.as_str()
        )
    }

    /// Full cross-product of the dimensions, category-major.
    pub fn all() -> impl Iterator<Item = QueryKey> {
        Category::ALL.into_iter().flat_map(|category| {
            TimeWindow::ALL
                .into_iter()
                .map(move |window| QueryKey::new(category, window))
        })
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cache_key())
    }
}
