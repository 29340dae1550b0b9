use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a recipe was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Instagram,
    Pinterest,
    TikTok,
    YouTube,
    Facebook,
    Website,
}

impl Platform {
    /// Detect the platform from the raw URL text
    pub fn detect(url: &str) -> Self {
        if url.contains("instagram.com") {
            Platform::Instagram
        } else if url.contains("pinterest.com") {
            Platform::Pinterest
        } else if url.contains("tiktok.com") {
            Platform::TikTok
        } else if url.contains("youtube.com") || url.contains("youtu.be") {
            Platform::YouTube
        } else if url.contains("facebook.com") {
            Platform::Facebook
        } else {
            Platform::Website
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Instagram => "Instagram",
            Platform::Pinterest => "Pinterest",
            Platform::TikTok => "TikTok",
            Platform::YouTube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::Website => "Website",
        };
        f.write_str(name)
    }
}

/// Recipe fields shared by drafts and saved recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeContent {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub prep_time: u32,
    pub cook_time: u32,
    pub servings: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub source_url: String,
    pub platform: Platform,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_at: Option<DateTime<Utc>>,
}

impl RecipeContent {
    /// Prep plus cook time, in minutes
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }
}

/// A recipe in the saved collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    #[serde(flatten)]
    pub content: RecipeContent,
    pub saved_at: DateTime<Utc>,
}

impl Recipe {
    pub fn title(&self) -> &str {
        &self.content.title
    }

    pub fn total_time(&self) -> u32 {
        self.content.total_time()
    }
}

/// A draft awaiting save. `id` and `saved_at` are kept by the store when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub content: RecipeContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl From<RecipeContent> for NewRecipe {
    fn from(content: RecipeContent) -> Self {
        NewRecipe {
            id: None,
            content,
            saved_at: None,
        }
    }
}
