pub mod booking_form;
pub mod dashboard;
pub mod forms;
pub mod notifications;

pub use booking_form::*;
pub use dashboard::*;
pub use forms::*;
pub use notifications::*;
