use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, RecordView};
use crate::infrastructure::AppState;
use crate::modules::cataloguing_pro::{
    CallNumberComponents, build_call_number, normalize, sort_key_for, split, validate_lcc,
};
use crate::services::call_number_service::{self, CatalogEntry};

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassifyResponse {
    pub lcc_class: String,
    pub table_version: String,
}

/// Subject terms as a list, or as one `;`-separated field.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SubjectsInput {
    /// e.g. ["Educación", "Didáctica"]
    List(Vec<String>),
    /// e.g. "Educación; Didáctica"
    Field(String),
}

impl Default for SubjectsInput {
    fn default() -> Self {
        SubjectsInput::List(Vec::new())
    }
}

impl SubjectsInput {
    pub fn to_text(&self) -> String {
        match self {
            SubjectsInput::List(terms) => call_number_service::subjects_text(terms),
            SubjectsInput::Field(field) => {
                call_number_service::subjects_text(&call_number_service::split_subjects(field))
            }
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateRequest {
    #[serde(default)]
    pub record: RecordView,
    #[serde(default)]
    pub subjects: SubjectsInput,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CatalogueRequest {
    #[serde(default)]
    pub record: RecordView,
    #[serde(default)]
    pub subjects: SubjectsInput,
    /// Call number entered by a cataloguer, kept when it parses
    pub call_number: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CallNumberRequest {
    pub call_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CallNumberResponse {
    pub call_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ParseResponse {
    pub components: CallNumberComponents,
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DisplayResponse {
    pub display: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SortKeyResponse {
    pub sort_key: String,
    pub number_sort: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ShelfOrderRequest {
    pub call_numbers: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ShelfOrderResponse {
    pub entries: Vec<CatalogEntry>,
    pub total: usize,
}

#[utoipa::path(
    post,
    path = "/api/lcc/classify",
    request_body = ClassifyRequest,
    responses(
        (status = 200, description = "LCC class for the text", body = ClassifyResponse)
    )
)]
pub async fn classify(
    State(state): State<AppState>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    Json(ClassifyResponse {
        lcc_class: state.generator.table().classify(&req.text),
        table_version: state.table_version().to_string(),
    })
}

#[utoipa::path(
    post,
    path = "/api/lcc/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated call number", body = CatalogEntry)
    )
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Json<CatalogEntry> {
    let subjects = req.subjects.to_text();
    let (code, source) = state.generator.generate(&req.record, &subjects);
    Json(call_number_service::entry_for_code(&code, source))
}

#[utoipa::path(
    post,
    path = "/api/lcc/catalogue",
    request_body = CatalogueRequest,
    responses(
        (status = 200, description = "Manual or generated call number", body = CatalogEntry)
    )
)]
pub async fn catalogue(
    State(state): State<AppState>,
    Json(req): Json<CatalogueRequest>,
) -> Json<CatalogEntry> {
    let subjects = req.subjects.to_text();
    Json(call_number_service::catalogue(
        &state.generator,
        &req.record,
        &subjects,
        req.call_number.as_deref(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/lcc/normalize",
    request_body = CallNumberRequest,
    responses(
        (status = 200, description = "Normalized call number", body = CallNumberResponse)
    )
)]
pub async fn normalize_call_number(Json(req): Json<CallNumberRequest>) -> Json<CallNumberResponse> {
    Json(CallNumberResponse {
        call_number: normalize(&req.call_number),
    })
}

#[utoipa::path(
    post,
    path = "/api/lcc/parse",
    request_body = CallNumberRequest,
    responses(
        (status = 200, description = "Call number components, empty when it does not parse", body = ParseResponse)
    )
)]
pub async fn parse_call_number(Json(req): Json<CallNumberRequest>) -> Json<ParseResponse> {
    Json(ParseResponse {
        components: split(&req.call_number),
        valid: validate_lcc(&req.call_number),
    })
}

#[utoipa::path(
    post,
    path = "/api/lcc/render",
    request_body = CallNumberComponents,
    responses(
        (status = 200, description = "Display form", body = DisplayResponse)
    )
)]
pub async fn render(Json(parts): Json<CallNumberComponents>) -> Json<DisplayResponse> {
    Json(DisplayResponse {
        display: build_call_number(&parts),
    })
}

#[utoipa::path(
    post,
    path = "/api/lcc/sort-key",
    request_body = CallNumberComponents,
    responses(
        (status = 200, description = "Shelf-order sort key", body = SortKeyResponse)
    )
)]
pub async fn sort_key(Json(parts): Json<CallNumberComponents>) -> Json<SortKeyResponse> {
    let (sort_key, number_sort) = sort_key_for(&parts);
    Json(SortKeyResponse {
        sort_key,
        number_sort,
    })
}

#[utoipa::path(
    post,
    path = "/api/lcc/shelf-order",
    request_body = ShelfOrderRequest,
    responses(
        (status = 200, description = "Call numbers in shelf order", body = ShelfOrderResponse),
        (status = 400, description = "Too many call numbers")
    )
)]
pub async fn shelf_order(
    State(state): State<AppState>,
    Json(req): Json<ShelfOrderRequest>,
) -> Result<Json<ShelfOrderResponse>, DomainError> {
    let entries = call_number_service::shelf_order(&req.call_numbers, state.max_batch)?;
    Ok(Json(ShelfOrderResponse {
        total: entries.len(),
        entries,
    }))
}
