use anchor_lang::prelude::*;

pub mod constants;
pub mod contexts;
pub mod errors;
pub mod events;
pub mod ixs;

pub use ixs::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod garden_registry {
    use super::*;

    pub fn initialize_project(
        ctx: Context<InitializeProject>,
        name: String,
        admins: Vec<Pubkey>,
        members: Vec<Pubkey>,
        github_enabled: bool,
        jira_enabled: bool,
    ) -> Result<()> {
        ixs::initialize_project(ctx, name, admins, members, github_enabled, jira_enabled)
    }

    pub fn update_task_completion(
        ctx: Context<UpdateTaskCompletion>,
        tasks_completed: u8,
    ) -> Result<()> {
        ixs::update_task_completion(ctx, tasks_completed)
    }
}
