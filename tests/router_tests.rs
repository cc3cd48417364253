use routemap::{
    build_table, product,
    router::{RouteMatch, Router},
    table::ParamValue,
};

use http::Method;

fn product_router() -> Router {
    let table = build_table(&product::routes()).expect("product table is valid");
    Router::new(table)
}

fn assert_route_match(router: &Router, method: Method, path: &str, expected_handler: &str) {
    let result = router.route(method.clone(), path);
    match result {
        Some(RouteMatch { handler_name, .. }) => {
            assert_eq!(
                handler_name, expected_handler,
                "Handler mismatch for {} {}: expected '{}', got '{}'",
                method, path, expected_handler, handler_name
            );
        }
        None => {
            assert_eq!(
                expected_handler, "<none>",
                "Expected route to match for {} {}",
                method, path
            );
        }
    }
}

#[test]
fn test_root_dispatches_to_product_list() {
    let router = product_router();
    assert_route_match(&router, Method::GET, "/", "product_list");
    let m = router.route(Method::GET, "/").unwrap();
    assert!(m.path_params.is_empty());
}

#[test]
fn test_product_detail_extracts_typed_pk() {
    let router = product_router();
    let m = router.route(Method::GET, "/product/42/").unwrap();
    assert_eq!(m.handler_name, "product_detail");
    assert_eq!(m.get_path_param("pk"), Some(&ParamValue::Int(42)));
    assert_eq!(m.get_path_param("pk").and_then(ParamValue::as_int), Some(42));
}

#[test]
fn test_product_create_literal() {
    let router = product_router();
    assert_route_match(&router, Method::GET, "/product/create/", "product_create");
}

#[test]
fn test_product_update() {
    let router = product_router();
    let m = router.route(Method::GET, "/product/update/7/").unwrap();
    assert_eq!(m.handler_name, "product_update");
    assert_eq!(m.get_path_param("pk"), Some(&ParamValue::Int(7)));
}

#[test]
fn test_product_delete() {
    let router = product_router();
    let m = router.route(Method::GET, "/product/delete/7/").unwrap();
    assert_eq!(m.handler_name, "product_delete");
    assert_eq!(m.get_path_param("pk"), Some(&ParamValue::Int(7)));
}

#[test]
fn test_non_integer_pk_is_not_found() {
    let router = product_router();
    assert_route_match(&router, Method::GET, "/product/abc/", "<none>");
}

#[test]
fn test_undeclared_path_is_not_found() {
    let router = product_router();
    assert_route_match(&router, Method::GET, "/nonexistent/", "<none>");
}

#[test]
fn test_missing_trailing_slash_is_not_found() {
    let router = product_router();
    assert_route_match(&router, Method::GET, "/product/42", "<none>");
}

#[test]
fn test_create_is_not_shadowed_by_detail() {
    // `product/<int:pk>/` is declared before `product/create/`, but `create`
    // fails the int converter, so the literal route still wins.
    let router = product_router();
    assert_route_match(&router, Method::GET, "/product/create/", "product_create");
}

#[test]
fn test_routes_accept_any_method() {
    let router = product_router();
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        assert_route_match(&router, method.clone(), "/", "product_list");
        assert_route_match(&router, method, "/product/42/", "product_detail");
    }
}

#[test]
fn test_route_names_are_pairwise_unique() {
    let table = build_table(&product::routes()).expect("product table is valid");
    let names: std::collections::HashSet<&str> = table
        .routes()
        .iter()
        .map(|meta| meta.name.as_str())
        .collect();
    assert_eq!(names.len(), 5);
}
