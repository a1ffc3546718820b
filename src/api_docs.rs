use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::lcc::classify,
        api::lcc::generate,
        api::lcc::catalogue,
        api::lcc::normalize_call_number,
        api::lcc::parse_call_number,
        api::lcc::render,
        api::lcc::sort_key,
        api::lcc::shelf_order,
    ),
    components(
        schemas(
            crate::domain::record::RecordView,
            crate::domain::record::Contributor,
            crate::domain::record::ContributorRole,
            crate::modules::cataloguing_pro::CallNumberComponents,
            crate::services::call_number_service::CatalogEntry,
            api::lcc::ClassifyRequest,
            api::lcc::ClassifyResponse,
            api::lcc::SubjectsInput,
            api::lcc::GenerateRequest,
            api::lcc::CatalogueRequest,
            api::lcc::CallNumberRequest,
            api::lcc::CallNumberResponse,
            api::lcc::ParseResponse,
            api::lcc::DisplayResponse,
            api::lcc::SortKeyResponse,
            api::lcc::ShelfOrderRequest,
            api::lcc::ShelfOrderResponse,
        )
    ),
    tags(
        (name = "lcc-catalog", description = "LCC call-number API")
    )
)]
pub struct ApiDoc;
