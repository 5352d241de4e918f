pub mod home;
pub mod import_result;
pub mod reports;

pub use home::{home_page, HomeVm};
pub use import_result::import_result_page;
pub use reports::{reports_page, ReportsVm};
