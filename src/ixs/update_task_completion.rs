use anchor_lang::prelude::*;
use crate::{constants::*, contexts::*, events::TaskCompletionUpdated};

pub fn update_task_completion(
    ctx: Context<UpdateTaskCompletion>,
    tasks_completed: u8,
) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let project = &mut ctx.accounts.project;

    let previous = project.set_tasks_completed(&authority, tasks_completed)?;

    emit!(TaskCompletionUpdated {
        project: project.key(),
        authority,
        previous,
        tasks_completed,
        total_tasks: project.total_tasks,
    });

    msg!(
        "Tasks completed {} -> {} of {}",
        previous,
        tasks_completed,
        project.total_tasks
    );
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateTaskCompletion<'info> {
    #[account(
        mut,
        seeds = [PROJECT_SEED, &Project::name_seed(&project.name), project.creator.as_ref()],
        bump = project.bump
    )]
    pub project: Account<'info, Project>,

    pub authority: Signer<'info>,
}
