use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: u64,
    #[schema(example = "what-is-wordpress")]
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub featured_image: String,
    /// `YYYY-MM-DD`
    #[schema(example = "2026-02-10")]
    pub date: String,
    pub category: String,
    /// HTML body.
    #[serde(default)]
    pub content: String,
}

/// A post as shown on the listing page, without its body.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostSummary {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub featured_image: String,
    pub date: String,
    pub category: String,
}

impl From<&BlogPost> for BlogPostSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            featured_image: post.featured_image.clone(),
            date: post.date.clone(),
            category: post.category.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostPage {
    pub posts: Vec<BlogPostSummary>,
    pub total: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub post: BlogPost,
    pub related: Vec<BlogPostSummary>,
}

pub const MAX_RELATED_POSTS: usize = 3;

impl PostDetail {
    /// Related posts are the first others in list order.
    pub fn from_posts(posts: &[BlogPost], slug: &str) -> Option<Self> {
        let post = posts.iter().find(|p| p.slug == slug)?.clone();
        let related = posts
            .iter()
            .filter(|p| p.slug != post.slug)
            .take(MAX_RELATED_POSTS)
            .map(BlogPostSummary::from)
            .collect();

        Some(Self { post, related })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PostListError {
    #[error("Every post needs a slug")]
    EmptySlug,

    #[error("Slug must not contain whitespace: {0:?}")]
    WhitespaceInSlug(String),

    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),
}

/// Slugs address posts in URLs: present, free of whitespace and unique
/// exactly as stored.
pub fn validate_posts(posts: &[BlogPost]) -> Result<(), PostListError> {
    let mut seen = HashSet::new();
    for post in posts {
        let slug = post.slug.as_str();
        if slug.trim().is_empty() {
            return Err(PostListError::EmptySlug);
        }
        if slug.chars().any(char::is_whitespace) {
            return Err(PostListError::WhitespaceInSlug(slug.to_string()));
        }
        if !seen.insert(slug) {
            return Err(PostListError::DuplicateSlug(slug.to_string()));
        }
    }
    Ok(())
}
