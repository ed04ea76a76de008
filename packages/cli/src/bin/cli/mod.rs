pub mod collaborators;
pub mod interactive;
pub mod milestones;
pub mod partnerships;
pub mod utils;
