pub mod auth;
pub mod benefit;
pub mod envelope;
pub mod garage;
pub mod offer;
pub mod payment;
pub mod quota;
pub mod user;

pub use auth::{ApiErrorBody, FieldError, LoginRequest, LoginResponse, ValidationErrorBody};
pub use benefit::{Benefit, BenefitRequest};
pub use envelope::ApiEnvelope;
pub use garage::{Garage, GarageRequest};
pub use offer::{Offer, OfferRequest};
pub use payment::{Payment, PaymentRequest};
pub use quota::{ManagerQuota, ManagerQuotaRequest};
pub use user::{AuthenticatedUser, Role};
