pub mod dto;
pub mod error;
pub mod models;

pub use error::{DomainError, Result};
pub use models::{
    AuthResponse, Hackathon, HackathonStatus, TeamType, TechStack, TechStackInput, User,
    normalize_tech_stack,
};
