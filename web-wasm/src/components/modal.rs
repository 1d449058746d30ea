//! モーダルの共通シェル

use leptos::prelude::*;

#[component]
pub fn Modal<F>(
    title: &'static str,
    open: ReadSignal<bool>,
    on_close: F,
    children: ChildrenFn,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <h3>{title}</h3>
                        <button
                            class="modal-close"
                            on:click={
                                let on_close = on_close.clone();
                                move |_| on_close(())
                            }
                        >
                            "×"
                        </button>
                    </div>
                    <div class="modal-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
