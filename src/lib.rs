// Balvatika - Coaching Center Request Desk
// Managers submit student assistance requests, admins approve or reject them

pub mod cli;
pub mod desk;
pub mod lifecycle;
pub mod models;
pub mod notify;
pub mod session;
pub mod store;

pub use anyhow::{Context, Result};
pub use colored::Colorize;

// Re-export commonly used types
pub use desk::Desk;
pub use models::{Decision, DeskError, Request, RequestFields, RequestStatus, Role, Session};
pub use store::{JsonFileStore, MemoryStore, RecordStore, StoreError};
