//! Course read models.
//!
//! Pages only care that a course is addressable by slug and that it either
//! exists or does not; the remaining fields are carried through untouched to
//! the display layer.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Validation errors for course primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CourseValidationError {
    /// Slug was empty.
    #[error("course slug must not be empty")]
    EmptySlug,
    /// Slug carried surrounding whitespace or characters outside `[a-z0-9-]`.
    #[error("course slug may only contain lowercase letters, digits, and hyphens")]
    InvalidSlug,
    /// Title was empty once trimmed.
    #[error("course title must not be empty")]
    EmptyTitle,
}

/// URL-safe course identifier.
///
/// Slugs are non-empty and composed of lowercase ASCII letters, digits, and
/// hyphens; surrounding whitespace is rejected rather than trimmed.
///
/// # Examples
/// ```
/// use coursehub::domain::CourseSlug;
///
/// let slug = CourseSlug::new("intro-to-go").expect("valid slug");
/// assert_eq!(slug.as_str(), "intro-to-go");
/// assert!(CourseSlug::new("Intro To Go").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseSlug(String);

impl CourseSlug {
    /// Validate and construct a slug.
    pub fn new(value: impl Into<String>) -> Result<Self, CourseValidationError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(CourseValidationError::EmptySlug);
        }
        let allowed = raw
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
        if !allowed {
            return Err(CourseValidationError::InvalidSlug);
        }
        Ok(Self(raw))
    }

    /// Borrow the slug as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for CourseSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CourseSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for CourseSlug {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CourseSlug> for String {
    fn from(value: CourseSlug) -> Self {
        value.0
    }
}

/// Display title for a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CourseTitle(String);

impl CourseTitle {
    /// Validate and construct a title, trimming surrounding whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, CourseValidationError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CourseValidationError::EmptyTitle);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the title as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for CourseTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for CourseTitle {
    type Error = CourseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CourseTitle> for String {
    fn from(value: CourseTitle) -> Self {
        value.0
    }
}

/// A single course as shown on its public page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    slug: CourseSlug,
    title: CourseTitle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    owner_id: UserId,
    updated_at: DateTime<Utc>,
}

impl Course {
    /// Assemble a course from validated parts.
    pub fn new(
        slug: CourseSlug,
        title: CourseTitle,
        owner_id: UserId,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            slug,
            title,
            description: None,
            owner_id,
            updated_at,
        }
    }

    /// Attach a free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Course slug.
    pub fn slug(&self) -> &CourseSlug {
        &self.slug
    }

    /// Course title.
    pub fn title(&self) -> &CourseTitle {
        &self.title
    }

    /// Optional description.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Identifier of the user who owns the course.
    pub fn owner_id(&self) -> &UserId {
        &self.owner_id
    }

    /// Timestamp of the last edit.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether `user_id` owns this course.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner_id == user_id
    }

    /// Project the course into its list representation.
    pub fn summary(&self) -> CourseSummary {
        CourseSummary {
            slug: self.slug.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            updated_at: self.updated_at,
        }
    }
}

/// List projection of a course used by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummary {
    /// Course slug.
    pub slug: CourseSlug,
    /// Course title.
    pub title: CourseTitle,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Timestamp of the last edit.
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("intro-to-go")]
    #[case("rust-101")]
    #[case("a")]
    fn accepts_valid_slugs(#[case] raw: &str) {
        let slug = CourseSlug::new(raw).expect("valid slug");
        assert_eq!(slug.as_str(), raw);
    }

    #[rstest]
    #[case("", CourseValidationError::EmptySlug)]
    #[case(" intro", CourseValidationError::InvalidSlug)]
    #[case("Intro", CourseValidationError::InvalidSlug)]
    #[case("intro_to_go", CourseValidationError::InvalidSlug)]
    #[case("intro/../etc", CourseValidationError::InvalidSlug)]
    fn rejects_invalid_slugs(#[case] raw: &str, #[case] expected: CourseValidationError) {
        assert_eq!(CourseSlug::new(raw), Err(expected));
    }

    #[rstest]
    fn title_is_trimmed() {
        let title = CourseTitle::new("  Intro  ").expect("valid title");
        assert_eq!(title.as_str(), "Intro");
    }

    #[rstest]
    fn blank_title_is_rejected() {
        assert_eq!(
            CourseTitle::new("   "),
            Err(CourseValidationError::EmptyTitle)
        );
    }

    #[rstest]
    fn deserialises_seed_shape() {
        let course: Course = serde_json::from_value(serde_json::json!({
            "slug": "intro-to-go",
            "title": "Intro",
            "ownerId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "updatedAt": "2026-01-15T12:00:00Z"
        }))
        .expect("course deserialises");

        assert_eq!(course.slug().as_str(), "intro-to-go");
        assert_eq!(course.title().as_str(), "Intro");
        assert!(course.description().is_none());
        assert_eq!(course.summary().slug, *course.slug());
    }

    #[rstest]
    fn deserialising_rejects_invalid_slug() {
        let result = serde_json::from_value::<Course>(serde_json::json!({
            "slug": "Not A Slug",
            "title": "Intro",
            "ownerId": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "updatedAt": "2026-01-15T12:00:00Z"
        }));
        assert!(result.is_err());
    }
}
