use crate::shared::api_utils::{get_json, LoadError};
use contracts::domain::a001_certificate::aggregate::CertificateDto;

const API_BASE: &str = "/api/certificates";

/// Активные сертификаты в порядке отображения
pub async fn list_certificates() -> Result<Vec<CertificateDto>, LoadError> {
    get_json(API_BASE).await
}
