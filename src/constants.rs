// PDA Seeds
pub const PROJECT_SEED: &[u8] = b"project";

// Account Space Constants
pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Project limits
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_ADMINS: usize = 10;
pub const MAX_MEMBERS: usize = 50;

// Progress grid is 10x10
pub const TOTAL_TASKS: u8 = 100;
