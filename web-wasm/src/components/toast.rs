//! トースト通知
//!
//! すべてのエラー（Network / Request / Validation）と操作の成功は
//! 同じ経路でここに流す。数秒で自動的に消えるが手動でも閉じられる。

use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// トーストの発行ハンドル（コンテキストで配布する）
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    counter: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Toasts {
            list: RwSignal::new(Vec::new()),
            counter: RwSignal::new(0),
        }
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self
            .counter
            .try_update(|c| {
                *c += 1;
                *c
            })
            .unwrap_or_default();
        self.list.update(|l| l.push(Toast { id, kind, message }));

        let list = self.list;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            list.update(|l| l.retain(|t| t.id != id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.list.update(|l| l.retain(|t| t.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Toasts::new()
    }
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.list.get()
                key=|toast| toast.id
                children=move |toast| {
                    let kind_class = match toast.kind {
                        ToastKind::Success => "success",
                        ToastKind::Error => "error",
                    };
                    view! {
                        <div class=format!("toast {}", kind_class)>
                            <span>{toast.message.clone()}</span>
                            <button
                                class="toast-close"
                                on:click=move |_| toasts.dismiss(toast.id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
