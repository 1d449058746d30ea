//! ヘッダーとナビゲーション
//!
//! メニューはロール→画面リストの静的ルックアップから組み立てる

use leptos::prelude::*;

use mediboard_common::{menu_for, Role, Screen, User};

#[component]
pub fn NavBar<F>(
    user: User,
    role: Role,
    screen: ReadSignal<Screen>,
    on_navigate: F,
) -> impl IntoView
where
    F: Fn(Screen) + 'static + Clone + Send,
{
    let menu = menu_for(role);

    view! {
        <header class="header">
            <h1>"MediBoard - 病院管理システム"</h1>
            <div class="user-info">
                <span class="user-name">{user.full_name()}</span>
                <span class="user-role">{role.label()}</span>
            </div>
        </header>
        <nav class="nav">
            {menu
                .iter()
                .map(|item| {
                    let item = *item;
                    let on_navigate = on_navigate.clone();
                    view! {
                        <button
                            class="nav-item"
                            class:active=move || screen.get() == item
                            on:click=move |_| on_navigate(item)
                        >
                            {item.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
