//! Reply templates for the reporting conversation

mod template;

pub use template::ReplyTemplate;
