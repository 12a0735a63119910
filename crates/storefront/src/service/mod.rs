mod auth;
mod cart;
mod credential;
mod order;
mod product;
mod role_guard;

pub use self::auth::AuthService;
pub use self::cart::CartService;
pub use self::credential::PlaintextCredentials;
pub use self::order::{OrderService, group_order_rows};
pub use self::product::ProductService;
pub use self::role_guard::RoleGuard;
