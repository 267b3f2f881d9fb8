//! PostEditor - one editor for creating and editing community posts.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PostId, ValidationError};

pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Whether the editor creates a new post or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    Edit(PostId),
}

/// Editable fields of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostContent {
    pub title: String,
    pub content: String,
    pub group_id: Option<String>,
}

/// What the editor hands to the community service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostSubmission {
    Create(PostContent),
    Update { post_id: PostId, content: PostContent },
}

#[derive(Debug, Clone)]
pub struct PostEditor {
    mode: EditorMode,
    original: PostContent,
    current: PostContent,
}

impl PostEditor {
    /// Opens an empty editor for a new post.
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            original: PostContent::default(),
            current: PostContent::default(),
        }
    }

    /// Opens the editor on an existing post.
    pub fn edit(post_id: PostId, existing: PostContent) -> Self {
        Self {
            mode: EditorMode::Edit(post_id),
            original: existing.clone(),
            current: existing,
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn content(&self) -> &PostContent {
        &self.current
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.current.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.current.content = content.into();
    }

    pub fn set_group(&mut self, group_id: Option<String>) {
        self.current.group_id = group_id;
    }

    /// True if anything differs from what the editor was opened with.
    pub fn is_dirty(&self) -> bool {
        self.current != self.original
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let title = self.current.title.trim();
        if title.is_empty() {
            return Err(ValidationError::empty_field("title", "Please enter a title"));
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(ValidationError::out_of_range(
                "title",
                format!("Title must be at most {} characters", MAX_TITLE_CHARS),
            ));
        }
        let content = self.current.content.trim();
        if content.is_empty() {
            return Err(ValidationError::empty_field(
                "content",
                "Please write something to share",
            ));
        }
        if content.chars().count() > MAX_CONTENT_CHARS {
            return Err(ValidationError::out_of_range(
                "content",
                format!("Post must be at most {} characters", MAX_CONTENT_CHARS),
            ));
        }
        Ok(())
    }

    /// Validates and produces the submission for the current mode.
    ///
    /// Editing without changes is rejected so no empty update is sent.
    pub fn build(&self) -> Result<PostSubmission, ValidationError> {
        self.validate()?;
        let content = PostContent {
            title: self.current.title.trim().to_string(),
            content: self.current.content.trim().to_string(),
            group_id: self.current.group_id.clone(),
        };
        match self.mode {
            EditorMode::Create => Ok(PostSubmission::Create(content)),
            EditorMode::Edit(post_id) => {
                if !self.is_dirty() {
                    return Err(ValidationError::invalid_format("post", "No changes to save"));
                }
                Ok(PostSubmission::Update { post_id, content })
            }
        }
    }
}
