//! ページ送りコンポーネント

use leptos::prelude::*;

use mediboard_common::PaginationState;

#[component]
pub fn Pager<F>(pagination: ReadSignal<PaginationState>, on_page: F) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send,
{
    let on_prev = {
        let on_page = on_page.clone();
        move |_| {
            let p = pagination.get_untracked();
            if p.has_prev && p.current_page > 1 {
                on_page(p.current_page - 1);
            }
        }
    };

    let on_next = {
        let on_page = on_page.clone();
        move |_| {
            let p = pagination.get_untracked();
            if p.has_next {
                on_page(p.current_page + 1);
            }
        }
    };

    view! {
        <div class="pager">
            <span class="pager-total">{move || format!("全{}件", pagination.get().total)}</span>
            <button
                class="btn btn-small btn-secondary"
                disabled=move || !pagination.get().has_prev
                on:click=on_prev
            >
                "前へ"
            </button>
            <span class="pager-position">
                {move || {
                    let p = pagination.get();
                    format!("ページ {} / {}", p.current_page, p.total_pages.max(1))
                }}
            </span>
            <button
                class="btn btn-small btn-secondary"
                disabled=move || !pagination.get().has_next
                on:click=on_next
            >
                "次へ"
            </button>
        </div>
    }
}
