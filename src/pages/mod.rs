mod admin_clients;
mod admin_reports;
mod admin_topups;
mod client_dashboard;
mod client_reports;
mod client_topups;
mod home;

pub use admin_clients::AdminClientsPage;
pub use admin_reports::AdminReportsPage;
pub use admin_topups::AdminTopupsPage;
pub use client_dashboard::ClientDashboardPage;
pub use client_reports::ClientReportsPage;
pub use client_topups::ClientTopupsPage;
pub use home::HomePage;
