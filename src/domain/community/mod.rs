//! Community module - post authoring.

mod post_editor;

pub use post_editor::{
    EditorMode, PostContent, PostEditor, PostSubmission, MAX_CONTENT_CHARS, MAX_TITLE_CHARS,
};
