use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::{constants::*, errors::GardenError};

/// Seeds: [b"project", sha256(name), creator.key()]
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Project {
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    pub creator: Pubkey,
    #[max_len(MAX_ADMINS)]
    pub admins: Vec<Pubkey>,
    #[max_len(MAX_MEMBERS)]
    pub members: Vec<Pubkey>,
    pub github_enabled: bool,
    pub jira_enabled: bool,
    pub created_at: i64,
    pub tasks_completed: u8,
    pub total_tasks: u8,
    pub bump: u8,
}

impl Project {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Project::INIT_SPACE;

    /// SHA-256 of the name bytes. Clients must hash the name the same way when deriving the
    /// project address; the raw name is not a seed since it may exceed 32 bytes.
    pub fn name_seed(name: &str) -> [u8; 32] {
        hash(name.as_bytes()).to_bytes()
    }

    pub fn derive_address(name: &str, creator: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[PROJECT_SEED, &Self::name_seed(name), creator.as_ref()],
            &crate::ID,
        )
    }

    /// Checks run in a fixed order and the first failure is returned.
    pub fn validate_init(
        name: &str,
        admins: &[Pubkey],
        members: &[Pubkey],
        creator: &Pubkey,
    ) -> Result<()> {
        require!(!name.is_empty(), GardenError::EmptyProjectName);
        require!(name.len() <= MAX_NAME_LEN, GardenError::NameTooLong);
        require!(!admins.is_empty(), GardenError::NoAdmins);
        require!(admins.len() <= MAX_ADMINS, GardenError::TooManyAdmins);
        require!(members.len() <= MAX_MEMBERS, GardenError::TooManyMembers);

        validate_addresses(admins)?;
        validate_addresses(members)?;

        require!(admins.contains(creator), GardenError::CreatorNotInAdmins);
        Ok(())
    }

    pub fn initialize(
        &mut self,
        name: String,
        creator: Pubkey,
        admins: Vec<Pubkey>,
        members: Vec<Pubkey>,
        github_enabled: bool,
        jira_enabled: bool,
        created_at: i64,
        bump: u8,
    ) -> Result<()> {
        Self::validate_init(&name, &admins, &members, &creator)?;

        self.name = name;
        self.creator = creator;
        self.admins = admins;
        self.members = members;
        self.github_enabled = github_enabled;
        self.jira_enabled = jira_enabled;
        self.created_at = created_at;
        self.tasks_completed = 0;
        self.total_tasks = TOTAL_TASKS;
        self.bump = bump;
        Ok(())
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admins.contains(key)
    }

    /// Absolute set, not an increment. Returns the previous count.
    pub fn set_tasks_completed(&mut self, authority: &Pubkey, tasks_completed: u8) -> Result<u8> {
        require!(self.is_admin(authority), GardenError::Unauthorized);
        require!(
            tasks_completed <= self.total_tasks,
            GardenError::InvalidTaskCount
        );

        let previous = self.tasks_completed;
        self.tasks_completed = tasks_completed;
        Ok(previous)
    }
}

// Duplicates are reported before zero keys.
fn validate_addresses(addrs: &[Pubkey]) -> Result<()> {
    for (i, addr) in addrs.iter().enumerate() {
        require!(!addrs[i + 1..].contains(addr), GardenError::DuplicateAddress);
    }
    require!(
        !addrs.contains(&Pubkey::default()),
        GardenError::ZeroAddress
    );
    Ok(())
}
