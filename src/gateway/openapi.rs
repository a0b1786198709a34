//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3000/docs`
//! - OpenAPI JSON: `http://localhost:3000/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::directory::{Anchor, AnchorKind, AnchorStatus, Country};
use crate::gateway::handlers::{HealthResponse, ServiceStatuses, TestDbResponse};
use crate::gateway::types::{
    CompareMeta, CompareRoutesRequest, CompareRoutesResponse, ErrorResponse,
    ExecuteTransferRequest, ExecuteTransferResponse, ExecutedTransfer, GenerateProofRequest,
    GenerateProofResponse, ProofDocument,
};
use crate::models::{FeeBreakdown, ProofOfPayment, ProofStatus, RemittanceRoute};
use crate::store::RemittanceRow;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "POP Remittance API",
        version = "0.1.0",
        description = "Mock API surface for comparing cross-border remittance routes, simulating transfers and generating Proof of Payment documents.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::compare_routes,
        crate::gateway::handlers::execute_transfer,
        crate::gateway::handlers::generate_proof,
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::test_db,
    ),
    components(
        schemas(
            ErrorResponse,
            CompareRoutesRequest,
            CompareRoutesResponse,
            CompareMeta,
            ExecuteTransferRequest,
            ExecuteTransferResponse,
            ExecutedTransfer,
            GenerateProofRequest,
            GenerateProofResponse,
            ProofDocument,
            ProofOfPayment,
            ProofStatus,
            RemittanceRoute,
            FeeBreakdown,
            Anchor,
            AnchorKind,
            AnchorStatus,
            Country,
            HealthResponse,
            ServiceStatuses,
            TestDbResponse,
            RemittanceRow,
        )
    ),
    tags(
        (name = "Routes", description = "Route comparison"),
        (name = "Transfers", description = "Mock transfer execution"),
        (name = "Proofs", description = "Proof of Payment documents"),
        (name = "System", description = "Health and diagnostics"),
    )
)]
pub struct ApiDoc;
