use axum::{extract::State, Json};
use contracts::domain::a001_certificate::aggregate::CertificateDto;

use super::AppState;

/// GET /api/certificates
pub async fn list_active(State(state): State<AppState>) -> Json<Vec<CertificateDto>> {
    Json(state.catalog.certificates())
}
