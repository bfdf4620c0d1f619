mod system;
mod tasks;

pub use system::{system, ASSISTANT_PERSONA};
pub use tasks::task_context;
