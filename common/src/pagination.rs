//! ページネーションとレスポンス形状の正規化
//!
//! 一覧エンドポイントは2通りの形で返してくる:
//! - `{items: [...], pagination: {...}}` — サーバー側ページング
//! - 素の配列 — ページングなし（1ページ構成に合成する）
//!
//! 形の判別は HTTP 境界で明示的に行い、どちらでもないペイロードは
//! 黙ってデフォルトに落とさず Decode エラーにする。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// 一覧画面の1ページあたり件数
pub const PAGE_SIZE: u32 = 7;

/// ページ位置と総件数
///
/// サーバーがページングを返す場合はそれが正、返さない場合は
/// `single_page` で合成する
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationState {
    #[serde(alias = "page")]
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(
        alias = "totalAppointments",
        alias = "totalReports",
        alias = "totalPrescriptions",
        alias = "totalItems",
        alias = "totalCount"
    )]
    pub total: u64,
    pub has_next: bool,
    #[serde(alias = "hasPrevious")]
    pub has_prev: bool,
}

impl Default for PaginationState {
    fn default() -> Self {
        PaginationState::single_page(0)
    }
}

impl PaginationState {
    /// ページングなしレスポンス用の1ページ構成
    pub fn single_page(total: usize) -> Self {
        PaginationState {
            current_page: 1,
            total_pages: 1,
            total: total as u64,
            has_next: false,
            has_prev: false,
        }
    }
}

/// 1回のfetchの結果（アイテム列＋ページ情報）
#[derive(Debug, Clone, PartialEq)]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
}

impl<T> PagedResult<T> {
    /// fetch失敗時に戻す空状態
    pub fn empty() -> Self {
        PagedResult {
            items: Vec::new(),
            pagination: PaginationState::single_page(0),
        }
    }
}

/// 一覧レスポンスをデコードする
///
/// - 素の配列 → 1ページ構成に合成
/// - `{<items_key>: [...], pagination: {...}}` → サーバーのページングをそのまま採用
/// - `{<items_key>: [...]}`（paginationなし）→ 配列と同じ扱いで合成
/// - それ以外 → Decode エラー
pub fn decode_list_payload<T: DeserializeOwned>(
    value: Value,
    items_key: &str,
) -> Result<PagedResult<T>> {
    if value.is_array() {
        let items: Vec<T> = serde_json::from_value(value)?;
        let pagination = PaginationState::single_page(items.len());
        return Ok(PagedResult { items, pagination });
    }

    let Some(obj) = value.as_object() else {
        return Err(Error::Decode("想定外のレスポンス形式です".to_string()));
    };

    let Some(raw_items) = obj.get(items_key).filter(|v| v.is_array()) else {
        return Err(Error::Decode(format!(
            "レスポンスにキー '{}' の配列がありません",
            items_key
        )));
    };

    let items: Vec<T> = serde_json::from_value(raw_items.clone())?;
    let pagination = match obj.get("pagination") {
        Some(p) if p.is_object() => serde_json::from_value(p.clone())?,
        _ => PaginationState::single_page(items.len()),
    };

    Ok(PagedResult { items, pagination })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    // =============================================
    // decode_list_payload テスト
    // =============================================

    #[test]
    fn test_decode_bare_array_synthesizes_pagination() {
        let value = json!([{"id": "1"}, {"id": "2"}]);

        let result: PagedResult<Item> = decode_list_payload(value, "tasks").unwrap();
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.pagination.current_page, 1);
        assert_eq!(result.pagination.total_pages, 1);
        assert_eq!(result.pagination.total, 2);
        assert!(!result.pagination.has_next);
        assert!(!result.pagination.has_prev);
    }

    #[test]
    fn test_decode_paged_object_adopts_server_pagination() {
        let value = json!({
            "appointments": [{"id": "1"}],
            "pagination": {
                "currentPage": 3,
                "totalPages": 5,
                "totalAppointments": 31,
                "hasNext": true,
                "hasPrev": true
            }
        });

        let result: PagedResult<Item> = decode_list_payload(value, "appointments").unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.pagination.current_page, 3);
        assert_eq!(result.pagination.total_pages, 5);
        assert_eq!(result.pagination.total, 31);
        assert!(result.pagination.has_next);
        assert!(result.pagination.has_prev);
    }

    #[test]
    fn test_decode_items_without_pagination_synthesizes() {
        // 機器エンドポイントの {equipment: [...]} 形式
        let value = json!({"equipment": [{"id": "eq-1"}, {"id": "eq-2"}, {"id": "eq-3"}]});

        let result: PagedResult<Item> = decode_list_payload(value, "equipment").unwrap();
        assert_eq!(result.items.len(), 3);
        assert_eq!(result.pagination, PaginationState::single_page(3));
    }

    #[test]
    fn test_decode_empty_array() {
        let value = json!([]);

        let result: PagedResult<Item> = decode_list_payload(value, "reports").unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.pagination.total, 0);
    }

    #[test]
    fn test_decode_missing_items_key_is_error() {
        // items配列のないオブジェクトは黙って空にせずエラーにする
        let value = json!({"message": "ok"});

        let result: Result<PagedResult<Item>> = decode_list_payload(value, "appointments");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_items_key_not_array_is_error() {
        let value = json!({"appointments": "oops"});

        let result: Result<PagedResult<Item>> = decode_list_payload(value, "appointments");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_scalar_payload_is_error() {
        let value = json!(42);

        let result: Result<PagedResult<Item>> = decode_list_payload(value, "tasks");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_decode_null_payload_is_error() {
        let value = Value::Null;

        let result: Result<PagedResult<Item>> = decode_list_payload(value, "tasks");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_pagination_alias_page() {
        // "currentPage" でなく "page" で返すバックエンドも受け付ける
        let value = json!({
            "reports": [],
            "pagination": {"page": 2, "totalPages": 4, "totalReports": 28, "hasNext": true, "hasPrev": true}
        });

        let result: PagedResult<Item> = decode_list_payload(value, "reports").unwrap();
        assert_eq!(result.pagination.current_page, 2);
        assert_eq!(result.pagination.total, 28);
    }

    #[test]
    fn test_pagination_missing_fields_fall_back_to_defaults() {
        let value = json!({
            "appointments": [{"id": "1"}],
            "pagination": {"currentPage": 2}
        });

        let result: PagedResult<Item> = decode_list_payload(value, "appointments").unwrap();
        assert_eq!(result.pagination.current_page, 2);
        assert!(!result.pagination.has_next);
    }

    #[test]
    fn test_paged_result_empty() {
        let empty: PagedResult<Item> = PagedResult::empty();
        assert!(empty.items.is_empty());
        assert_eq!(empty.pagination.current_page, 1);
    }
}
