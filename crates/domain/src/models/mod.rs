pub mod dates;
pub mod hackathon;
pub mod tech_stack;
pub mod user;

pub use hackathon::{Hackathon, HackathonStatus, TeamType};
pub use tech_stack::{TechStack, TechStackInput, normalize_tech_stack};
pub use user::{AuthResponse, User};
