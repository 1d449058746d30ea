//! ケアタスクエンドポイント
//!
//! 一覧は素の配列で返る（サーバー側ページングなし）。絞り込みは
//! すべてクライアント側で行う。

use serde_json::json;

use mediboard_common::{
    decode_list_payload, CareTask, CareTaskDraft, PagedResult, Result, TaskStatus,
};

use super::{delete_json, get_json, patch_json, post_json};

/// ケアタスク一覧を取得する
pub async fn list() -> Result<PagedResult<CareTask>> {
    let value = get_json("/care-tasks").await?;
    decode_list_payload(value, "tasks")
}

/// ステータスを部分更新する
pub async fn update_status(id: &str, status: TaskStatus) -> Result<()> {
    patch_json(
        &format!("/care-tasks/{}/status", id),
        &json!({ "status": status.as_str() }),
    )
    .await?;
    Ok(())
}

/// ケアタスクを作成する
pub async fn create(draft: &CareTaskDraft) -> Result<()> {
    post_json("/care-tasks", draft).await?;
    Ok(())
}

/// ケアタスクを削除する（確認ダイアログは呼び出し側で済ませていること）
pub async fn remove(id: &str) -> Result<()> {
    delete_json(&format!("/care-tasks/{}", id)).await?;
    Ok(())
}
