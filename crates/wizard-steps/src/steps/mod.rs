//! Steps del wizard de alta.

pub mod account;
pub mod confirm;
pub mod profile;

pub use account::AccountStep;
pub use confirm::ConfirmStep;
pub use profile::ProfileStep;
