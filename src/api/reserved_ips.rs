use super::{decode, ClassicApi};
use crate::error::ApiResult;
use crate::models::ClassicEipRecord;

/// Fetch a reserved IP by id.
pub async fn get_classic_eip<A: ClassicApi + ?Sized>(api: &A, eip_id: &str) -> ApiResult<ClassicEipRecord> {
    let value = api.get(eip_id, &[]).await?;
    decode(value)
}
