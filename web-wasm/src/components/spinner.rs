//! ローディングスピナー

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-overlay">
            <div class="spinner"></div>
            <p>"読み込み中..."</p>
        </div>
    }
}
