//! Data models module
//!
//! Contains the domain record shapes shared by every aggregator:
//! - Conversation and message types
//! - Tenant and agent profiles with id-keyed lookup

pub mod conversation;
pub mod directory;

pub use conversation::{Conversation, ConversationStatus, Message, SenderRole};
pub use directory::{Agent, BigFivePersonality, Directory, Tenant};
