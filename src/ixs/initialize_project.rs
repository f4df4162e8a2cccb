use anchor_lang::prelude::*;
use crate::{constants::*, contexts::*, events::ProjectInitialized};

#[derive(Accounts)]
#[instruction(name: String)]
pub struct InitializeProject<'info> {
    #[account(
        init,
        payer = creator,
        space = Project::SPACE,
        seeds = [PROJECT_SEED, &Project::name_seed(&name), creator.key().as_ref()],
        bump
    )]
    pub project: Account<'info, Project>,

    #[account(mut)]
    pub creator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_project(
    ctx: Context<InitializeProject>,
    name: String,
    admins: Vec<Pubkey>,
    members: Vec<Pubkey>,
    github_enabled: bool,
    jira_enabled: bool,
) -> Result<()> {
    let creator = ctx.accounts.creator.key();
    let created_at = Clock::get()?.unix_timestamp;

    let project = &mut ctx.accounts.project;
    project.initialize(
        name,
        creator,
        admins,
        members,
        github_enabled,
        jira_enabled,
        created_at,
        ctx.bumps.project,
    )?;

    emit!(ProjectInitialized {
        project: project.key(),
        creator,
        name: project.name.clone(),
        admin_count: project.admins.len() as u8,
        member_count: project.members.len() as u8,
        github_enabled,
        jira_enabled,
        created_at,
    });

    msg!(
        "Initialized project {} with {} admins and {} members",
        project.name,
        project.admins.len(),
        project.members.len()
    );
    Ok(())
}
