//! ユーザー参照（フォームの患者・医師セレクト用）

use mediboard_common::{decode_list_payload, QueryString, Result, User};

use super::get_json;

/// 指定ロールのユーザー一覧を取得する
///
/// 主エンドポイントが使えない構成向けに /auth/users へフォールバック
/// する。どちらも素の配列と {users: [...]} の両形式を受け付ける
pub async fn by_roles(roles: &[&str]) -> Result<Vec<User>> {
    let mut query = QueryString::new();
    query.push("roles", roles.join(","));
    let suffix = format!("/users{}", query.build());

    let value = match get_json(&suffix).await {
        Ok(value) => value,
        Err(_) => get_json(&format!("/auth{}", suffix)).await?,
    };
    Ok(decode_list_payload(value, "users")?.items)
}
