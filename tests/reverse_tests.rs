use routemap::{build_table, product, reverse, ReverseError, RouteTable, Router};

fn product_table() -> RouteTable {
    build_table(&product::routes()).expect("product table is valid")
}

#[test]
fn test_reverse_product_list() {
    let table = product_table();
    assert_eq!(reverse(&table, "product_list", &[]).unwrap(), "/");
}

#[test]
fn test_reverse_product_detail() {
    let table = product_table();
    let url = reverse(&table, "product_detail", &[("pk", 42.into())]).unwrap();
    assert_eq!(url, "/product/42/");
}

#[test]
fn test_reverse_product_create() {
    let table = product_table();
    assert_eq!(
        reverse(&table, "product_create", &[]).unwrap(),
        "/product/create/"
    );
}

#[test]
fn test_reverse_product_update() {
    let table = product_table();
    let url = reverse(&table, "product_update", &[("pk", 7.into())]).unwrap();
    assert_eq!(url, "/product/update/7/");
}

#[test]
fn test_reverse_product_delete() {
    let table = product_table();
    let url = reverse(&table, "product_delete", &[("pk", 7.into())]).unwrap();
    assert_eq!(url, "/product/delete/7/");
}

#[test]
fn test_reverse_unknown_name() {
    let table = product_table();
    assert_eq!(
        reverse(&table, "product_archive", &[]),
        Err(ReverseError::UnknownName("product_archive".to_string()))
    );
}

#[test]
fn test_reverse_missing_argument() {
    let table = product_table();
    let err = reverse(&table, "product_detail", &[]).unwrap_err();
    assert!(matches!(err, ReverseError::MissingArg { ref name, .. } if name == "pk"));
}

#[test]
fn test_reverse_unexpected_argument() {
    let table = product_table();
    let err = reverse(&table, "product_create", &[("pk", 1.into())]).unwrap_err();
    assert!(matches!(err, ReverseError::UnexpectedArg { ref name, .. } if name == "pk"));
}

#[test]
fn test_reverse_rejects_value_converter_would_not_match() {
    let table = product_table();
    let err = reverse(&table, "product_detail", &[("pk", (-5).into())]).unwrap_err();
    assert!(matches!(err, ReverseError::BadArg { ref value, .. } if value == "-5"));

    let err = reverse(&table, "product_detail", &[("pk", "abc".into())]).unwrap_err();
    assert!(matches!(err, ReverseError::BadArg { ref value, .. } if value == "abc"));
}

#[test]
fn test_reverse_round_trips_through_router() {
    use http::Method;

    let table = product_table();
    let router = Router::new(product_table());

    for (name, args) in [
        ("product_list", vec![]),
        ("product_detail", vec![("pk", 42.into())]),
        ("product_create", vec![]),
        ("product_update", vec![("pk", 7.into())]),
        ("product_delete", vec![("pk", 7.into())]),
    ] {
        let url = reverse(&table, name, &args).unwrap();
        let m = router.route(Method::GET, &url).expect("reversed URL matches");
        assert_eq!(m.route.name, name);
    }
}

#[test]
fn test_router_reverse_convenience() {
    let router = Router::new(product_table());
    let url = router.reverse("product_detail", &[("pk", 42.into())]).unwrap();
    assert_eq!(url, "/product/42/");
}
