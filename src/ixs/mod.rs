mod initialize_project;
mod update_task_completion;

// Explicitly export the instruction functions
pub use initialize_project::*;
pub use update_task_completion::*;
