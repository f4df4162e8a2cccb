use anchor_lang::prelude::*;

#[error_code]
pub enum GardenError {
    #[msg("Project name cannot be empty.")]
    EmptyProjectName,

    #[msg("Project name exceeds maximum length of 50 bytes.")]
    NameTooLong,

    #[msg("Admin list cannot be empty.")]
    NoAdmins,

    #[msg("Admin list exceeds maximum of 10 entries.")]
    TooManyAdmins,

    #[msg("Member list exceeds maximum of 50 entries.")]
    TooManyMembers,

    #[msg("Duplicate addresses not allowed.")]
    DuplicateAddress,

    #[msg("Zero address not allowed.")]
    ZeroAddress,

    #[msg("Creator must be in admins list.")]
    CreatorNotInAdmins,

    #[msg("Unauthorized: only admins can perform this action.")]
    Unauthorized,

    #[msg("Invalid task count: cannot exceed total tasks.")]
    InvalidTaskCount
}
