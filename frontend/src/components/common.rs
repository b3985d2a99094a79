//! 通用提示组件

use leptos::prelude::*;

/// 表单顶部的错误提示
#[component]
pub fn ErrorAlert(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="alert" class="alert alert-error text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 成功提示
#[component]
pub fn SuccessAlert(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div role="status" class="alert alert-success text-sm py-2">
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// 字段下方的内联错误
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<&'static str>>) -> impl IntoView {
    view! { <span class="text-error text-sm">{move || error.get()}</span> }
}
