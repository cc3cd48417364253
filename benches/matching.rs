use criterion::{black_box, criterion_group, criterion_main, Criterion};
use http::Method;
use routemap::{build_table, product, Router};

fn product_router() -> Router {
    Router::new(build_table(&product::routes()).expect("product table is valid"))
}

fn bench_matching(c: &mut Criterion) {
    let router = product_router();

    c.bench_function("match_root", |b| {
        b.iter(|| router.route(Method::GET, black_box("/")))
    });

    c.bench_function("match_product_detail", |b| {
        b.iter(|| router.route(Method::GET, black_box("/product/42/")))
    });

    c.bench_function("match_miss", |b| {
        b.iter(|| router.route(Method::GET, black_box("/nonexistent/")))
    });

    c.bench_function("reverse_product_detail", |b| {
        b.iter(|| router.reverse("product_detail", black_box(&[("pk", routemap::ParamValue::Int(42))])))
    });
}

criterion_group!(benches, bench_matching);
criterion_main!(benches);
