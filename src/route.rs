//! Typed navigation targets so voice commands resolve to concrete routes.
//!
//! The interpreter never navigates; it produces one of these targets and the
//! host shell's router performs the jump. `Route::href` renders the same path
//! and query-string shape the marketplace front end expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of item categories recognized in transcripts.
///
/// Declaration order is the scan order: when a transcript mentions more than
/// one category keyword, the first declared match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Clothes,
    Food,
    Electronics,
    Furniture,
    Books,
    Toys,
    Medical,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Clothes,
        Category::Food,
        Category::Electronics,
        Category::Furniture,
        Category::Books,
        Category::Toys,
        Category::Medical,
        Category::Other,
    ];

    /// Lowercase keyword used both for transcript matching and query params.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Clothes => "clothes",
            Category::Food => "food",
            Category::Electronics => "electronics",
            Category::Furniture => "furniture",
            Category::Books => "books",
            Category::Toys => "toys",
            Category::Medical => "medical",
            Category::Other => "other",
        }
    }

    /// First category whose keyword appears as a substring of `text`.
    ///
    /// Expects lowercased input; the interpreter lowercases before matching.
    pub fn scan(text: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| text.contains(category.keyword()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Which side of the feed a browse command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedTab {
    Donations,
    Requests,
}

impl FeedTab {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedTab::Donations => "donations",
            FeedTab::Requests => "requests",
        }
    }
}

impl fmt::Display for FeedTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Navigation target produced by the interpreter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    Home,
    Profile,
    Messages,
    MyListings,
    CreateListing,
    CreateRequest,
    Feed {
        tab: Option<FeedTab>,
        category: Option<Category>,
        search: Option<String>,
    },
}

impl Route {
    /// Feed route with a tab and an optional category filter.
    pub fn feed(tab: FeedTab, category: Option<Category>) -> Route {
        Route::Feed {
            tab: Some(tab),
            category,
            search: None,
        }
    }

    /// Feed route carrying only a free-text search term.
    pub fn search(term: impl Into<String>) -> Route {
        Route::Feed {
            tab: None,
            category: None,
            search: Some(term.into()),
        }
    }

    /// Render the path plus query string handed to the router collaborator.
    ///
    /// The search term is percent-escaped; tab and category values come from
    /// closed enumerations and never need escaping.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::Messages => "/messages".to_string(),
            Route::MyListings => "/my-listings".to_string(),
            Route::CreateListing => "/create-listing".to_string(),
            Route::CreateRequest => "/create-request".to_string(),
            Route::Feed {
                tab,
                category,
                search,
            } => {
                let mut href = String::from("/feed");
                let mut separator = '?';
                if let Some(tab) = tab {
                    href.push(separator);
                    href.push_str("tab=");
                    href.push_str(tab.as_str());
                    separator = '&';
                }
                if let Some(category) = category {
                    href.push(separator);
                    href.push_str("category=");
                    href.push_str(category.keyword());
                    separator = '&';
                }
                if let Some(search) = search {
                    href.push(separator);
                    href.push_str("search=");
                    href.push_str(&urlencoding::encode(search));
                }
                href
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
