//! 検査機器一覧画面
//!
//! 一覧は {equipment: [...]} 形式（ページングなし）。ステータスの
//! 部分更新（PATCH）に加えて、機器情報そのものの編集（PUT）がある。

use leptos::prelude::*;
use leptos::task::spawn_local;

use mediboard_common::{
    can_create, can_delete, can_update_status, Equipment, EquipmentDraft, EquipmentStatus, Role,
    Screen,
};

use crate::api;
use crate::components::status_badge::status_label_ja;
use crate::components::toast::use_toasts;
use crate::components::{Modal, Spinner, StatusBadge};
use crate::list_vm::ListVm;

#[component]
pub fn EquipmentPage(role: Role) -> impl IntoView {
    let vm: ListVm<Equipment> = ListVm::new();
    let toasts = use_toasts();

    let load = move || {
        vm.load(|_page, _filters| async move { api::equipment::list().await });
    };

    Effect::new(move |_| {
        vm.page.get();
        vm.filters.get();
        load();
    });

    let on_status_change = move |id: String, status: EquipmentStatus| {
        spawn_local(async move {
            match api::equipment::update_status(&id, status).await {
                Ok(()) => {
                    toasts.success("機器ステータスを更新しました");
                    load();
                }
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    let on_delete = move |id: String| {
        let confirmed = web_sys::window()
            .map(|w| {
                w.confirm_with_message("この機器を削除しますか？")
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            match api::equipment::remove(&id).await {
                Ok(()) => {
                    toasts.success("機器を削除しました");
                    load();
                }
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    // 登録と編集で同じモーダルを使う。editing_id が Some なら編集
    let (show_form, set_show_form) = signal(false);
    let (editing_id, set_editing_id) = signal(None::<String>);
    let (draft, set_draft) = signal(EquipmentDraft::default());

    let open_create = move |_| {
        set_editing_id.set(None);
        set_draft.set(EquipmentDraft {
            status: EquipmentStatus::Operational.as_str().to_string(),
            ..Default::default()
        });
        set_show_form.set(true);
    };

    let open_edit = move |item: Equipment| {
        set_editing_id.set(Some(item.id.clone()));
        set_draft.set(EquipmentDraft {
            name: item.name,
            category: item.category,
            location: item.location,
            serial_number: item.serial_number,
            status: item.status,
            notes: item.notes,
        });
        set_show_form.set(true);
    };

    let reset_form = move || {
        set_show_form.set(false);
        set_editing_id.set(None);
        set_draft.set(EquipmentDraft::default());
    };

    let on_submit = move |_| {
        let current = draft.get_untracked();
        if let Err(e) = current.validate() {
            toasts.error(e.user_message());
            return;
        }
        let target = editing_id.get_untracked();
        spawn_local(async move {
            let outcome = match &target {
                Some(id) => api::equipment::update(id, &current).await,
                None => api::equipment::create(&current).await,
            };
            match outcome {
                Ok(()) => {
                    toasts.success(if target.is_some() {
                        "機器情報を更新しました"
                    } else {
                        "機器を登録しました"
                    });
                    reset_form();
                    load();
                }
                Err(e) => toasts.error(e.user_message()),
            }
        });
    };

    let visible = Memo::new(move |_| vm.visible());
    let allow_update = can_update_status(role, Screen::Equipment);
    let allow_edit = can_create(role, Screen::Equipment);
    let allow_delete = can_delete(role, Screen::Equipment);

    view! {
        <section class="page">
            <div class="page-header">
                <h2>"検査機器"</h2>
                <Show when=move || can_create(role, Screen::Equipment)>
                    <button class="btn btn-primary" on:click=open_create>
                        "機器を登録"
                    </button>
                </Show>
            </div>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="機器名・分類・設置場所で検索..."
                    prop:value=move || vm.filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.set_filter(|f| f.search = value);
                    }
                />
                <select
                    class="filter-select"
                    prop:value=move || {
                        let status = vm.filters.get().status;
                        if status.is_empty() { "all".to_string() } else { status }
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        vm.set_filter(|f| f.status = value);
                    }
                >
                    <option value="all" selected=move || vm.filters.get().status.is_empty()>
                        "すべてのステータス"
                    </option>
                    {EquipmentStatus::ALL
                        .iter()
                        .map(|s| {
                            let s = *s;
                            view! {
                                <option
                                    value=s.as_str()
                                    selected=move || vm.filters.get().status == s.as_str()
                                >
                                    {status_label_ja(s.as_str())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <button class="btn btn-small btn-tertiary" on:click=move |_| vm.clear_filters()>
                    "条件をクリア"
                </button>
            </div>

            <Show when=move || vm.loading.get()>
                <Spinner />
            </Show>

            <Show
                when=move || !visible.get().is_empty()
                fallback=move || {
                    view! {
                        <Show when=move || !vm.loading.get()>
                            <p class="text-muted">"該当する機器がありません"</p>
                        </Show>
                    }
                }
            >
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"機器名"</th>
                            <th>"分類"</th>
                            <th>"設置場所"</th>
                            <th>"シリアル"</th>
                            <th>"ステータス"</th>
                            <th>"操作"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible.get()
                            key=|item| format!("{}:{}:{}", item.id, item.status, item.name)
                            children=move |item| {
                                let status = item.status.clone();
                                let row_id = item.id.clone();
                                let delete_id = item.id.clone();
                                let edit_item = item.clone();
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.category.clone()}</td>
                                        <td>{item.location.clone()}</td>
                                        <td>{item.serial_number.clone()}</td>
                                        <td>
                                            {if allow_update {
                                                view! {
                                                    <select
                                                        class="status-select"
                                                        on:change=move |ev| {
                                                            let value = event_target_value(&ev);
                                                            if let Some(s) = EquipmentStatus::ALL
                                                                .iter()
                                                                .find(|s| s.as_str() == value)
                                                            {
                                                                on_status_change(row_id.clone(), *s);
                                                            }
                                                        }
                                                    >
                                                        {EquipmentStatus::ALL
                                                            .iter()
                                                            .map(|s| {
                                                                let selected = s.as_str() == status;
                                                                view! {
                                                                    <option value=s.as_str() selected=selected>
                                                                        {status_label_ja(s.as_str())}
                                                                    </option>
                                                                }
                                                            })
                                                            .collect_view()}
                                                    </select>
                                                }
                                                    .into_any()
                                            } else {
                                                view! { <StatusBadge status=item.status.clone() /> }
                                                    .into_any()
                                            }}
                                        </td>
                                        <td>
                                            <Show when=move || allow_edit>
                                                <button
                                                    class="btn btn-small btn-secondary"
                                                    on:click={
                                                        let edit_item = edit_item.clone();
                                                        move |_| open_edit(edit_item.clone())
                                                    }
                                                >
                                                    "編集"
                                                </button>
                                            </Show>
                                            <Show when=move || allow_delete>
                                                <button
                                                    class="btn btn-small btn-danger"
                                                    on:click={
                                                        let delete_id = delete_id.clone();
                                                        move |_| on_delete(delete_id.clone())
                                                    }
                                                >
                                                    "削除"
                                                </button>
                                            </Show>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>

            <Modal title="機器の登録・編集" open=show_form on_close=move |_| reset_form()>
                <div class="form-group">
                    <label>"機器名"</label>
                    <input
                        type="text"
                        placeholder="例: MRIスキャナ"
                        prop:value=move || draft.get().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.name = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"分類"</label>
                    <input
                        type="text"
                        placeholder="例: 画像診断"
                        prop:value=move || draft.get().category
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.category = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"設置場所"</label>
                    <input
                        type="text"
                        placeholder="例: 放射線科"
                        prop:value=move || draft.get().location
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.location = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"シリアル番号"</label>
                    <input
                        type="text"
                        prop:value=move || draft.get().serial_number
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.serial_number = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"ステータス"</label>
                    <select
                        prop:value=move || draft.get().status
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.status = value);
                        }
                    >
                        {EquipmentStatus::ALL
                            .iter()
                            .map(|s| {
                                let s = *s;
                                view! {
                                    <option
                                        value=s.as_str()
                                        selected=move || draft.get().status == s.as_str()
                                    >
                                        {status_label_ja(s.as_str())}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label>"メモ"</label>
                    <textarea
                        prop:value=move || draft.get().notes
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            set_draft.update(|d| d.notes = value);
                        }
                    ></textarea>
                </div>
                <div class="form-actions">
                    <button class="btn btn-secondary" on:click=move |_| reset_form()>
                        "キャンセル"
                    </button>
                    <button class="btn btn-primary" on:click=on_submit>
                        "保存"
                    </button>
                </div>
            </Modal>
        </section>
    }
}
