//! TalentScout — guided candidate screening conversations.

pub mod channels;
pub mod config;
pub mod error;
pub mod interviewer;
pub mod screening;
