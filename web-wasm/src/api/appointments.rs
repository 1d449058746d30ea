//! 予約エンドポイント

use serde_json::json;

use mediboard_common::{
    decode_list_payload, Appointment, AppointmentDraft, AppointmentStatus, FilterState,
    PagedResult, QueryString, Result, PAGE_SIZE,
};

use super::{delete_json, get_json, post_json, put_json};

/// 予約一覧を取得する
///
/// 医師・患者は自分に紐づく予約しか見えないため、該当ロールでは
/// 他のフィルタと無関係にIDパラメータを常時付与する
pub async fn list(
    page: u32,
    filters: &FilterState,
    doctor_scope: Option<&str>,
    patient_scope: Option<&str>,
) -> Result<PagedResult<Appointment>> {
    let mut query = QueryString::new();
    query.push("page", page.to_string());
    query.push("limit", PAGE_SIZE.to_string());
    query.push_opt("status", &filters.status);
    query.push_opt("date", &filters.date);
    match doctor_scope {
        Some(id) => {
            query.push("doctor", id);
        }
        None => {
            query.push_opt("doctor", &filters.person);
        }
    }
    if let Some(id) = patient_scope {
        query.push("patient", id);
    }

    let value = get_json(&format!("/appointments{}", query.build())).await?;
    decode_list_payload(value, "appointments")
}

/// ステータスを更新する
pub async fn update_status(id: &str, status: AppointmentStatus) -> Result<()> {
    put_json(
        &format!("/appointments/{}", id),
        &json!({ "status": status.as_str() }),
    )
    .await?;
    Ok(())
}

/// 予約を作成する
pub async fn create(draft: &AppointmentDraft) -> Result<()> {
    post_json("/appointments", draft).await?;
    Ok(())
}

/// 予約を削除する（確認ダイアログは呼び出し側で済ませていること）
pub async fn remove(id: &str) -> Result<()> {
    delete_json(&format!("/appointments/{}", id)).await?;
    Ok(())
}
