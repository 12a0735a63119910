pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use self::cart::CartRepository;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::user::UserRepository;
