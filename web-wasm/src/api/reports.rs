//! 医療レポートエンドポイント

use serde_json::json;

use mediboard_common::{
    decode_list_payload, FilterState, MedicalReport, PagedResult, QueryString, ReportDraft,
    ReportStatus, Result, PAGE_SIZE,
};

use super::{delete_json, get_json, post_json, put_json};

/// レポート一覧を取得する
///
/// 医師ロールは自分のレポートに限定される（IDパラメータ常時付与）
pub async fn list(
    page: u32,
    filters: &FilterState,
    doctor_scope: Option<&str>,
) -> Result<PagedResult<MedicalReport>> {
    let mut query = QueryString::new();
    query.push("page", page.to_string());
    query.push("limit", PAGE_SIZE.to_string());
    match doctor_scope {
        Some(id) => {
            query.push("doctor", id);
        }
        None => {
            query.push_opt("doctor", &filters.person);
        }
    }
    query.push_opt("type", &filters.category);
    query.push_opt("status", &filters.status);

    let value = get_json(&format!("/medical-reports{}", query.build())).await?;
    decode_list_payload(value, "reports")
}

/// ステータスを更新する
pub async fn update_status(id: &str, status: ReportStatus) -> Result<()> {
    put_json(
        &format!("/medical-reports/{}", id),
        &json!({ "status": status.as_str() }),
    )
    .await?;
    Ok(())
}

/// レポートを作成する
pub async fn create(draft: &ReportDraft) -> Result<()> {
    post_json("/medical-reports", draft).await?;
    Ok(())
}

/// レポートを削除する（確認ダイアログは呼び出し側で済ませていること）
pub async fn remove(id: &str) -> Result<()> {
    delete_json(&format!("/medical-reports/{}", id)).await?;
    Ok(())
}
