//! 一覧画面の汎用ビューモデル
//!
//! 各画面で繰り返されるパターン（fetch→保持→絞り込み→ページング→
//! 更新後リフェッチ）を1つの抽象に集約する。取得したアイテム列は
//! fetch成功のたびに丸ごと差し替え、部分マージはしない。

use std::future::Future;

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

use mediboard_common::{
    derive_visible, FilterState, ListRecord, PagedResult, PaginationState, Result, TokenGate,
};

/// 一覧画面ごとに1つ作るビューモデル
///
/// シグナルの束なのでそのままコピーして子コンポーネントへ渡せる
pub struct ListVm<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub items: RwSignal<Vec<T>>,
    pub pagination: RwSignal<PaginationState>,
    pub filters: RwSignal<FilterState>,
    pub page: RwSignal<u32>,
    pub loading: RwSignal<bool>,
    tokens: RwSignal<TokenGate>,
}

impl<T> Clone for ListVm<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListVm<T> where T: Clone + Send + Sync + 'static {}

impl<T> ListVm<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        ListVm {
            items: RwSignal::new(Vec::new()),
            pagination: RwSignal::new(PaginationState::single_page(0)),
            filters: RwSignal::new(FilterState::default()),
            page: RwSignal::new(1),
            loading: RwSignal::new(false),
            tokens: RwSignal::new(TokenGate::new()),
        }
    }

    /// 現在のページ・フィルタでfetchを1回発行する
    ///
    /// 応答は自分のトークンがまだ最新の場合だけ反映する。発行順と
    /// 到着順は一致しないので、追い越された古い応答はここで捨てる。
    /// 失敗時はログを残して空状態に戻す（古いデータは残さない）
    pub fn load<F, Fut>(&self, fetch: F)
    where
        F: FnOnce(u32, FilterState) -> Fut,
        Fut: Future<Output = Result<PagedResult<T>>> + 'static,
    {
        let token = self
            .tokens
            .try_update(|gate| gate.issue())
            .unwrap_or_default();
        self.loading.set(true);

        let page = self.page.get_untracked();
        let filters = self.filters.get_untracked();
        let future = fetch(page, filters);
        let vm = *self;

        spawn_local(async move {
            let outcome = future.await;
            if !vm.tokens.get_untracked().is_current(token) {
                return; // 新しいfetchに追い越された応答は破棄
            }
            match outcome {
                Ok(result) => {
                    vm.items.set(result.items);
                    vm.pagination.set(result.pagination);
                }
                Err(e) => {
                    console::error!(format!("一覧の取得に失敗: {}", e));
                    let empty = PagedResult::empty();
                    vm.items.set(empty.items);
                    vm.pagination.set(empty.pagination);
                }
            }
            vm.loading.set(false);
        });
    }

    /// フィルタを変更する。ページは必ず1に戻してから次のfetchを起こす
    pub fn set_filter(&self, apply: impl FnOnce(&mut FilterState)) {
        self.page.set(1);
        self.filters.update(apply);
    }

    /// 全フィルタを一括でクリアする
    pub fn clear_filters(&self) {
        self.page.set(1);
        self.filters.update(|f| f.clear());
    }

    pub fn set_page(&self, page: u32) {
        self.page.set(page.max(1));
    }

    /// 表示対象（検索・ステータス・日付のANDを取得済みページへ適用）
    pub fn visible(&self) -> Vec<T>
    where
        T: ListRecord,
    {
        derive_visible(&self.items.get(), &self.filters.get())
    }
}

impl<T> Default for ListVm<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        ListVm::new()
    }
}
