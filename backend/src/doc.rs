//! OpenAPI documentation for the directory API.
//!
//! Swagger UI serves this document in debug builds; `openapi-dump` prints it
//! for external tooling.

use utoipa::OpenApi;

use crate::domain::{
    Error, ErrorCode, SortKey, SortOrder, University, UniversityComparison,
};
use crate::inbound::http::health::ReadinessReport;
use crate::inbound::http::universities::{
    ComparisonResponse, CountryListResponse, UniversityListResponse, UniversityResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "University directory API",
        description = "Search, filter, sort and compare a fixed directory of universities.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::universities::list_universities,
        crate::inbound::http::universities::compare_universities,
        crate::inbound::http::universities::get_university,
        crate::inbound::http::universities::list_countries,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        University,
        UniversityComparison,
        UniversityListResponse,
        UniversityResponse,
        ComparisonResponse,
        CountryListResponse,
        ReadinessReport,
        SortKey,
        SortOrder,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "universities", description = "Directory search and comparison"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/v1/universities")]
    #[case("/api/v1/universities/compare")]
    #[case("/api/v1/universities/{id}")]
    #[case("/api/v1/countries")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn university_schema_uses_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let university = schemas.get("University").expect("University schema");
        for field in ["tuitionFee", "establishedYear", "scholarshipAvailable", "ieltsRequirement"] {
            assert_has_field(university, field);
        }
    }
}
