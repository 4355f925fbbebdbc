//! Records for the three hosted collections and their lifecycle rules.
//!
//! The records themselves live in the hosted data store; these types carry
//! them through validation, save preparation, and the minimal field patches
//! the admin screens send back ("update fields on record by id"). Nothing
//! here talks to the network.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::content::{read_time_minutes, slugify};

/// The fixed category list offered by the article editor.
pub const CATEGORIES: [&str; 10] = [
    "General",
    "Football",
    "Basketball",
    "Baseball",
    "Volleyball",
    "Recruiting",
    "Analysis",
    "Feature",
    "Announcement",
    "Opinion",
];

/// Byline used when the editor leaves the author field blank.
pub const DEFAULT_AUTHOR: &str = "Kentucky Sports Chronicle";

/// Validation failures reported inline, before any remote call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a title")]
    EmptyTitle,

    #[error("Please write some content")]
    EmptyContent,

    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("This email is already subscribed!")]
    AlreadySubscribed,
}

/// An article record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub title: String,
    /// Unique URL-safe identifier; derived from the title on save unless
    /// explicitly overridden in the editor.
    pub slug: String,
    pub excerpt: String,
    /// Serialized rich-text markup from the editor.
    pub content: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub is_featured: bool,
    pub is_published: bool,
    /// Stamped on the first transition to published, never cleared.
    pub published_at: Option<DateTime<Utc>>,
    pub author_name: String,
    pub views: u64,
    /// Derived from the word count on save; not independently editable.
    pub read_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for Article {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            slug: String::new(),
            excerpt: String::new(),
            content: String::new(),
            category: "General".to_string(),
            thumbnail_url: None,
            is_featured: false,
            is_published: false,
            published_at: None,
            author_name: String::new(),
            views: 0,
            read_time: 1,
            created_at: None,
        }
    }
}

impl Article {
    /// Check the fields an admin must fill in before saving.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        // The rich-text editor serializes an untouched document as <p></p>
        if self.content.trim().is_empty() || self.content == "<p></p>" {
            return Err(ValidationError::EmptyContent);
        }
        Ok(())
    }

    /// Prepare the record for an insert or full update.
    ///
    /// Validates, derives the slug from the title when no override is set,
    /// recomputes the read time from the content, and fills in the default
    /// byline. With `publish` set, a draft transitions to published and
    /// `published_at` is stamped if the article has never been published.
    pub fn prepare_save(&mut self, publish: bool, now: DateTime<Utc>) -> Result<(), ValidationError> {
        self.validate()?;

        if self.slug.trim().is_empty() {
            self.slug = slugify(&self.title);
        }
        self.read_time = read_time_minutes(&self.content);
        if self.author_name.trim().is_empty() {
            self.author_name = DEFAULT_AUTHOR.to_string();
        }

        if publish && !self.is_published {
            self.is_published = true;
            if self.published_at.is_none() {
                self.published_at = Some(now);
            }
        }
        Ok(())
    }

    /// Build the dashboard publish-toggle patch.
    ///
    /// Publishing a draft stamps `published_at` only if it was never set;
    /// unpublishing leaves the original timestamp in place so the public
    /// feed's chronology survives a publish/unpublish cycle.
    pub fn toggle_publish(&self, now: DateTime<Utc>) -> PublishPatch {
        let publishing = !self.is_published;
        PublishPatch {
            is_published: publishing,
            published_at: if publishing && self.published_at.is_none() {
                Some(now)
            } else {
                None
            },
        }
    }

    /// Build the view-counter increment patch for the article page.
    pub fn record_view(&self) -> ViewPatch {
        ViewPatch {
            views: self.views + 1,
        }
    }
}

/// Field patch for the publish toggle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishPatch {
    pub is_published: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

/// Field patch for a view-count increment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewPatch {
    pub views: u64,
}

/// A message submitted through the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl ContactMessage {
    /// Validate and build a new contact submission.
    pub fn submit(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        for (field, value) in [
            ("name", name),
            ("email", email),
            ("subject", subject),
            ("message", message),
        ] {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }
        if !plausible_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(Self {
            id: None,
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
            is_read: false,
            created_at: now,
        })
    }

    /// Patch marking the message read in the inbox.
    pub fn mark_read(&self) -> ReadPatch {
        ReadPatch { is_read: true }
    }
}

/// Field patch for marking a contact message read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadPatch {
    pub is_read: bool,
}

/// A newsletter subscriber.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscriber {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
}

/// Validate a subscribe-form submission against the current subscriber list.
///
/// Emails are unique case-insensitively; a duplicate yields
/// [`ValidationError::AlreadySubscribed`] and no new record.
pub fn subscribe(
    existing: &[Subscriber],
    email: &str,
    now: DateTime<Utc>,
) -> Result<Subscriber, ValidationError> {
    let email = email.trim();
    if !plausible_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if existing
        .iter()
        .any(|s| s.email.eq_ignore_ascii_case(email))
    {
        return Err(ValidationError::AlreadySubscribed);
    }
    Ok(Subscriber {
        id: None,
        email: email.to_string(),
        is_active: true,
        subscribed_at: now,
    })
}

/// Cheap shape check; the data store's unique constraint is the backstop.
fn plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn draft() -> Article {
        Article {
            title: "Wildcats Stun Tennessee".to_string(),
            content: format!("<p>{}</p>", "word ".repeat(400).trim()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_rejects_blank_title() {
        let article = Article {
            title: "   ".to_string(),
            content: "<p>body</p>".to_string(),
            ..Default::default()
        };
        assert_eq!(article.validate(), Err(ValidationError::EmptyTitle));
    }

    #[test]
    fn test_validate_rejects_empty_editor_document() {
        let article = Article {
            title: "A title".to_string(),
            content: "<p></p>".to_string(),
            ..Default::default()
        };
        assert_eq!(article.validate(), Err(ValidationError::EmptyContent));
    }

    #[test]
    fn test_prepare_save_derives_slug_and_read_time() {
        let mut article = draft();
        article.prepare_save(false, at(0)).unwrap();

        assert_eq!(article.slug, "wildcats-stun-tennessee");
        assert_eq!(article.read_time, 2);
        assert_eq!(article.author_name, DEFAULT_AUTHOR);
        assert!(!article.is_published);
        assert!(article.published_at.is_none());
    }

    #[test]
    fn test_prepare_save_keeps_slug_override() {
        let mut article = draft();
        article.slug = "custom-slug".to_string();
        article.prepare_save(false, at(0)).unwrap();
        assert_eq!(article.slug, "custom-slug");
    }

    #[test]
    fn test_prepare_save_publish_stamps_once() {
        let mut article = draft();
        article.prepare_save(true, at(100)).unwrap();
        assert!(article.is_published);
        assert_eq!(article.published_at, Some(at(100)));

        // Unpublish out-of-band, then publish again later
        article.is_published = false;
        article.prepare_save(true, at(500)).unwrap();
        assert!(article.is_published);
        assert_eq!(article.published_at, Some(at(100)), "stamp must not refresh");
    }

    #[test]
    fn test_toggle_publish_stamps_first_time_only() {
        let mut article = draft();

        let patch = article.toggle_publish(at(100));
        assert!(patch.is_published);
        assert_eq!(patch.published_at, Some(at(100)));

        article.is_published = true;
        article.published_at = Some(at(100));

        // Back to draft: the original stamp stays
        let patch = article.toggle_publish(at(200));
        assert!(!patch.is_published);
        assert_eq!(patch.published_at, None);

        article.is_published = false;

        // Re-publish: no new stamp
        let patch = article.toggle_publish(at(300));
        assert!(patch.is_published);
        assert_eq!(patch.published_at, None);
    }

    #[test]
    fn test_publish_patch_omits_unset_timestamp() {
        let patch = PublishPatch {
            is_published: false,
            published_at: None,
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"is_published":false}"#);
    }

    #[test]
    fn test_record_view_increments() {
        let mut article = draft();
        article.views = 41;
        assert_eq!(article.record_view(), ViewPatch { views: 42 });
    }

    #[test]
    fn test_contact_submit_requires_all_fields() {
        let result = ContactMessage::submit("Ann", "ann@example.com", "", "Hi", at(0));
        assert_eq!(result.unwrap_err(), ValidationError::MissingField("subject"));
    }

    #[test]
    fn test_contact_submit_rejects_bad_email() {
        let result = ContactMessage::submit("Ann", "not-an-email", "Hi", "Hi", at(0));
        assert_eq!(result.unwrap_err(), ValidationError::InvalidEmail);
    }

    #[test]
    fn test_contact_submit_trims_and_defaults_unread() {
        let msg =
            ContactMessage::submit(" Ann ", "ann@example.com", "Hello", "Body", at(7)).unwrap();
        assert_eq!(msg.name, "Ann");
        assert!(!msg.is_read);
        assert_eq!(msg.created_at, at(7));
        assert_eq!(msg.mark_read(), ReadPatch { is_read: true });
    }

    #[test]
    fn test_subscribe_rejects_duplicate_case_insensitively() {
        let existing = vec![Subscriber {
            id: None,
            email: "fan@example.com".to_string(),
            is_active: true,
            subscribed_at: at(0),
        }];

        let result = subscribe(&existing, "FAN@example.com", at(10));
        assert_eq!(result.unwrap_err(), ValidationError::AlreadySubscribed);
    }

    #[test]
    fn test_subscribe_new_email() {
        let sub = subscribe(&[], "fan@example.com", at(10)).unwrap();
        assert_eq!(sub.email, "fan@example.com");
        assert!(sub.is_active);
        assert_eq!(sub.subscribed_at, at(10));
    }

    #[test]
    fn test_plausible_email() {
        assert!(plausible_email("a@b.co"));
        assert!(!plausible_email("a@b"));
        assert!(!plausible_email("@b.co"));
        assert!(!plausible_email("a b@c.co"));
        assert!(!plausible_email("a@.co"));
    }

    #[test]
    fn test_categories_include_default() {
        assert!(CATEGORIES.contains(&"General"));
        assert_eq!(Article::default().category, "General");
    }
}
