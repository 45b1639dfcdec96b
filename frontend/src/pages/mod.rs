pub mod attendance;
pub mod dashboard;
pub mod home;
pub mod leaves;
pub mod login;
pub mod panel;
pub mod payroll;
pub mod profiles;

pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use leaves::LeavesPage;
pub use login::LoginPage;
pub use panel::PanelPage;
pub use payroll::PayrollPage;
pub use profiles::{ProfileDetailPage, ProfilesPage};
