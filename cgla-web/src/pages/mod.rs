mod benefits;
mod dashboard;
mod error;
mod garages;
pub mod login;
mod offers;
mod password_reset;
mod payments;
mod quotas;
mod users;

pub use benefits::BenefitsPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use garages::GaragesPage;
pub use login::LoginPage;
pub use offers::OffersPage;
pub use password_reset::PasswordResetPage;
pub use payments::PaymentsPage;
pub use quotas::QuotasPage;
pub use users::UsersPage;
