pub mod composer;
pub mod metrics;
pub mod prompt_store;
pub mod providers;
pub mod sanitizer;
pub mod topic;

pub use composer::PromptProfile;
pub use prompt_store::PromptStore;
pub use sanitizer::sanitize_html;
pub use topic::page_topic;
