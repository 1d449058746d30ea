//! 検査機器エンドポイント
//!
//! 一覧は {equipment: [...]} 形式（ページングなし）で返る。

use serde_json::json;

use mediboard_common::{
    decode_list_payload, Equipment, EquipmentDraft, EquipmentStatus, PagedResult, Result,
};

use super::{delete_json, get_json, patch_json, post_json, put_json};

/// 機器一覧を取得する
pub async fn list() -> Result<PagedResult<Equipment>> {
    let value = get_json("/lab-equipment").await?;
    decode_list_payload(value, "equipment")
}

/// ステータスを部分更新する
pub async fn update_status(id: &str, status: EquipmentStatus) -> Result<()> {
    patch_json(
        &format!("/lab-equipment/{}/status", id),
        &json!({ "status": status.as_str() }),
    )
    .await?;
    Ok(())
}

/// 機器情報を更新する
pub async fn update(id: &str, draft: &EquipmentDraft) -> Result<()> {
    put_json(&format!("/lab-equipment/{}", id), draft).await?;
    Ok(())
}

/// 機器を登録する
pub async fn create(draft: &EquipmentDraft) -> Result<()> {
    post_json("/lab-equipment", draft).await?;
    Ok(())
}

/// 機器を削除する（確認ダイアログは呼び出し側で済ませていること）
pub async fn remove(id: &str) -> Result<()> {
    delete_json(&format!("/lab-equipment/{}", id)).await?;
    Ok(())
}
