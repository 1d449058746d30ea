//! 処方エンドポイント

use serde_json::json;

use mediboard_common::{
    decode_list_payload, FilterState, PagedResult, Prescription, PrescriptionDraft,
    PrescriptionStatus, QueryString, Result, PAGE_SIZE,
};

use super::{delete_json, get_json, post_json, put_json};

/// 処方一覧を取得する
///
/// 患者は自分宛の処方だけ、医師は自分が出した処方だけが見える
pub async fn list(
    page: u32,
    filters: &FilterState,
    doctor_scope: Option<&str>,
    patient_scope: Option<&str>,
) -> Result<PagedResult<Prescription>> {
    let mut query = QueryString::new();
    query.push("page", page.to_string());
    query.push("limit", PAGE_SIZE.to_string());
    query.push_opt("status", &filters.status);
    match patient_scope {
        Some(id) => {
            query.push("patient", id);
        }
        None => {
            query.push_opt("patient", &filters.person);
        }
    }
    if let Some(id) = doctor_scope {
        query.push("doctor", id);
    }

    let value = get_json(&format!("/prescriptions{}", query.build())).await?;
    decode_list_payload(value, "prescriptions")
}

/// ステータスを更新する
pub async fn update_status(id: &str, status: PrescriptionStatus) -> Result<()> {
    put_json(
        &format!("/prescriptions/{}", id),
        &json!({ "status": status.as_str() }),
    )
    .await?;
    Ok(())
}

/// 処方を作成する
pub async fn create(draft: &PrescriptionDraft) -> Result<()> {
    post_json("/prescriptions", draft).await?;
    Ok(())
}

/// 処方を削除する（確認ダイアログは呼び出し側で済ませていること）
pub async fn remove(id: &str) -> Result<()> {
    delete_json(&format!("/prescriptions/{}", id)).await?;
    Ok(())
}
