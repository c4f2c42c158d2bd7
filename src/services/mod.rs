//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions between
//! the shell and the address book. They provide a clean boundary between
//! command handling and the data model.

mod contact_service;

pub use contact_service::{ContactService, ContactSummary};
