//! Service layer - composes the stores into account use cases.

mod card_service;
mod user_service;

pub use card_service::{CardManager, CardService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use card_service::MockCardService;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
