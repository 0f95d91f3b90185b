// Chat-driven deck edits: keyword intent classification and list mutation.

pub mod handlers;
pub mod intent;
pub mod interpreter;
