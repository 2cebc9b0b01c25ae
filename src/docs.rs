use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::services::list_services,
        crate::api::services::submit_order,
        crate::api::tools::run_tool
    ),
    components(
        schemas(
            crate::models::ServiceSummary,
            crate::models::ServiceView,
            crate::models::FieldView,
            crate::models::StepView,
            crate::models::DetailsView,
            crate::models::FieldType,
            crate::api::services::OrderRequest,
            crate::api::services::OrderResponse,
            crate::api::tools::ToolRequest
        )
    ),
    tags(
        (name = "catalog", description = "Service catalog and search"),
        (name = "orders", description = "Order encoding and handoff"),
        (name = "tools", description = "Smart tools")
    )
)]
pub struct ApiDoc;
