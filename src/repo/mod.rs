//! Row-level queries. Every function runs on the connection of a caller's unit of work.

mod activities;
mod campers;
mod signups;

pub use activities::ActivityRepo;
pub use campers::CamperRepo;
pub use signups::SignupRepo;
