pub mod activity;
pub mod enrollment;

pub use activity::{Activity, ActivityCatalog};
pub use enrollment::{ConfirmationMessage, Enrollment};
