pub mod config;
pub mod error;
pub mod request;
pub mod session;

pub use config::BalvatikaConfig;
pub use error::{DeskError, DeskResult};
pub use request::{Decision, Request, RequestFields, RequestId, RequestStatus, GRADES, SUBJECTS};
pub use session::{Role, Session};
