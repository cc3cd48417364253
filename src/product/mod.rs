//! The product-catalog route table.
//!
//! Five routes cover the resource: list at the root URL, then detail,
//! create, update, and delete under `product/`. Detail, update, and delete
//! take the product's primary key as an `<int:pk>` placeholder; `create` is
//! a distinct literal segment, so no pattern shadows another regardless of
//! order. None of the routes restrict the HTTP method - method gating, where
//! it exists, belongs to the handlers.
//!
//! ```
//! use routemap::{build_table, product, Router};
//! use http::Method;
//!
//! let router = Router::new(build_table(&product::routes()).unwrap());
//! let m = router.route(Method::GET, "/product/42/").unwrap();
//! assert_eq!(m.handler_name, "product_detail");
//! ```

pub mod handlers;

use crate::dispatcher::Dispatcher;
use crate::table::RouteDef;

/// The product route declarations, in match order.
#[must_use]
pub fn routes() -> Vec<RouteDef> {
    vec![
        RouteDef::new("", "product_list", "product_list"),
        RouteDef::new("product/<int:pk>/", "product_detail", "product_detail"),
        RouteDef::new("product/create/", "product_create", "product_create"),
        RouteDef::new("product/update/<int:pk>/", "product_update", "product_update"),
        RouteDef::new("product/delete/<int:pk>/", "product_delete", "product_delete"),
    ]
}

/// Register every product handler with the dispatcher.
pub fn register_all(dispatcher: &mut Dispatcher) {
    dispatcher.register("product_list", handlers::product_list);
    dispatcher.register("product_detail", handlers::product_detail);
    dispatcher.register("product_create", handlers::product_create);
    dispatcher.register("product_update", handlers::product_update);
    dispatcher.register("product_delete", handlers::product_delete);
}
