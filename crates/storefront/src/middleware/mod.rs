pub mod admin;
pub mod validate;

pub use self::admin::admin_role_middleware;
pub use self::validate::ValidatedJson;
