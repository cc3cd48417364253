//! Placeholder product handlers.
//!
//! Each handler acknowledges its operation and echoes the typed `pk` where
//! one was extracted. The actual catalog behavior (persistence, validation,
//! templates) lives with the application embedding this router.

use serde_json::json;

use crate::dispatcher::{HandlerRequest, HandlerResponse};

pub fn product_list(_req: HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(200, json!({ "operation": "product_list" }))
}

pub fn product_detail(req: HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(
        200,
        json!({ "operation": "product_detail", "pk": req.int_param("pk") }),
    )
}

pub fn product_create(_req: HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(201, json!({ "operation": "product_create" }))
}

pub fn product_update(req: HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(
        200,
        json!({ "operation": "product_update", "pk": req.int_param("pk") }),
    )
}

pub fn product_delete(req: HandlerRequest) -> HandlerResponse {
    HandlerResponse::json(
        200,
        json!({ "operation": "product_delete", "pk": req.int_param("pk") }),
    )
}
