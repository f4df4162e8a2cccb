use anchor_lang::prelude::*;

#[event]
pub struct ProjectInitialized {
    pub project: Pubkey,
    pub creator: Pubkey,
    pub name: String,
    pub admin_count: u8,
    pub member_count: u8,
    pub github_enabled: bool,
    pub jira_enabled: bool,
    pub created_at: i64,
}

#[event]
pub struct TaskCompletionUpdated {
    pub project: Pubkey,
    pub authority: Pubkey,
    pub previous: u8,
    pub tasks_completed: u8,
    pub total_tasks: u8,
}
