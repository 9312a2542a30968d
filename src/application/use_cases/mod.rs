/// Use cases module containing application business logic orchestration
mod dashboard;
mod login;

pub use dashboard::DashboardUseCase;
pub use login::{LoginFailure, LoginOutcome, LoginUseCase};
