//! In-memory content store for the portfolio site.
//!
//! The site's content (professional summary, projects, timeline,
//! achievements, blog posts) is a fixed set of records seeded at startup
//! and served verbatim. There is no persistence layer; the store is plain
//! data behind a lookup API.

mod seed;

use serde::Serialize;

/// Professional summary shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// One-line headline.
    pub headline: String,
    /// Short introduction paragraph.
    pub blurb: String,
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Stable numeric id.
    pub id: u32,
    /// Project title.
    pub title: String,
    /// Technology stack labels.
    pub stack: Vec<String>,
    /// Short description.
    pub description: String,
    /// Live link, if the project is deployed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Repository URL.
    pub github: String,
}

/// A career timeline entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    /// Display year.
    pub year: String,
    /// Milestone description.
    pub milestone: String,
}

/// An achievement card with an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    /// Stable numeric id.
    pub id: u32,
    /// Achievement title.
    pub title: String,
    /// Short description.
    pub description: String,
    /// Image path under the public directory.
    pub image: String,
    /// Display date.
    pub date: String,
}

/// A blog post with its full article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    /// Stable numeric id.
    pub id: u32,
    /// Post title.
    pub title: String,
    /// Listing excerpt.
    pub excerpt: String,
    /// Raw article body in the site's markdown-like format.
    pub content: String,
    /// Author display name.
    pub author: String,
    /// Display date.
    pub date: String,
    /// Tag labels.
    pub tags: Vec<String>,
}

/// Listing view of a blog post: everything except the article body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPostSummary {
    /// Stable numeric id.
    pub id: u32,
    /// Post title.
    pub title: String,
    /// Listing excerpt.
    pub excerpt: String,
    /// Author display name.
    pub author: String,
    /// Display date.
    pub date: String,
    /// Tag labels.
    pub tags: Vec<String>,
}

impl From<&BlogPost> for BlogPostSummary {
    fn from(post: &BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            author: post.author.clone(),
            date: post.date.clone(),
            tags: post.tags.clone(),
        }
    }
}

/// The site's content collections.
#[derive(Debug, Clone)]
pub struct ContentStore {
    summary: Summary,
    projects: Vec<Project>,
    timeline: Vec<TimelineEntry>,
    achievements: Vec<Achievement>,
    blog_posts: Vec<BlogPost>,
}

impl Default for ContentStore {
    fn default() -> Self {
        seed::content_store()
    }
}

impl ContentStore {
    /// Create a store with the seeded site content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Professional summary.
    #[must_use]
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// All projects, in display order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Career timeline, newest first.
    #[must_use]
    pub fn timeline(&self) -> &[TimelineEntry] {
        &self.timeline
    }

    /// All achievements, in display order.
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    /// Listing views of all blog posts, without article bodies.
    #[must_use]
    pub fn blog_posts(&self) -> Vec<BlogPostSummary> {
        self.blog_posts.iter().map(BlogPostSummary::from).collect()
    }

    /// Look up a blog post by id.
    #[must_use]
    pub fn blog_post(&self, id: u32) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_seeded_store_has_content() {
        let store = ContentStore::new();
        assert!(!store.summary().headline.is_empty());
        assert_eq!(store.projects().len(), 4);
        assert_eq!(store.timeline().len(), 3);
        assert_eq!(store.achievements().len(), 4);
        assert_eq!(store.blog_posts().len(), 3);
    }

    #[test]
    fn test_blog_post_lookup() {
        let store = ContentStore::new();
        let post = store.blog_post(1).expect("post 1 is seeded");
        assert_eq!(post.id, 1);
        assert!(post.content.starts_with("# "));
    }

    #[test]
    fn test_blog_post_lookup_missing() {
        let store = ContentStore::new();
        assert!(store.blog_post(999).is_none());
    }

    #[test]
    fn test_blog_listing_omits_content() {
        let store = ContentStore::new();
        let listing = store.blog_posts();
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json[0].get("content").is_none());
        assert_eq!(json[0]["id"], 1);
        assert!(json[0]["tags"].is_array());
    }

    #[test]
    fn test_project_without_link_omits_field() {
        let store = ContentStore::new();
        let demo = store
            .projects()
            .iter()
            .find(|p| p.link.is_none())
            .expect("one seeded project has no live link");
        let json = serde_json::to_value(demo).unwrap();
        assert!(json.get("link").is_none());
        assert!(json["github"].as_str().is_some());
    }

    #[test]
    fn test_summary_serialization() {
        let summary = Summary {
            headline: "Headline".to_owned(),
            blurb: "Blurb".to_owned(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["headline"], "Headline");
        assert_eq!(json["blurb"], "Blurb");
    }
}
