use crate::{
    abstract_trait::{
        auth::{DynAuthService, DynCredentialVerifier, DynIdentityVerifier},
        cart::{DynCartRepository, DynCartService},
        order::{DynOrderRepository, DynOrderService},
        product::{DynProductRepository, DynProductService},
        user::DynUserRepository,
    },
    repository::{CartRepository, OrderRepository, ProductRepository, UserRepository},
    service::{
        AuthService, CartService, OrderService, PlaintextCredentials, ProductService, RoleGuard,
    },
};
use shared::config::ConnectionPool;
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub product_service: DynProductService,
    pub cart_service: DynCartService,
    pub order_service: DynOrderService,
    pub identity: DynIdentityVerifier,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"DynAuthService")
            .field("product_service", &"DynProductService")
            .field("cart_service", &"DynCartService")
            .field("order_service", &"DynOrderService")
            .field("identity", &"DynIdentityVerifier")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let user_repository =
            Arc::new(UserRepository::new(pool.clone())) as DynUserRepository;
        let product_repository =
            Arc::new(ProductRepository::new(pool.clone())) as DynProductRepository;
        let cart_repository = Arc::new(CartRepository::new(pool.clone())) as DynCartRepository;
        let order_repository = Arc::new(OrderRepository::new(pool)) as DynOrderRepository;

        let credentials = Arc::new(PlaintextCredentials) as DynCredentialVerifier;

        let auth_service =
            Arc::new(AuthService::new(user_repository.clone(), credentials)) as DynAuthService;
        let product_service =
            Arc::new(ProductService::new(product_repository)) as DynProductService;
        let cart_service = Arc::new(CartService::new(cart_repository)) as DynCartService;
        let order_service = Arc::new(OrderService::new(order_repository)) as DynOrderService;
        let identity = Arc::new(RoleGuard::new(user_repository)) as DynIdentityVerifier;

        Self {
            auth_service,
            product_service,
            cart_service,
            order_service,
            identity,
        }
    }
}
