//! 设置新密码页（受 `ResetPasswordGuard` 保护）

use crate::api::auth_service;
use crate::components::{ErrorAlert, FieldError};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rentease::forms::FormState;
use rentease::validation::{validate_password, validate_password_match};

const FIELD_PASSWORD: &str = "password";
const FIELD_CONFIRM: &str = "confirmPassword";

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let router = use_router();

    let form = RwSignal::new(
        FormState::new()
            .with_field(FIELD_PASSWORD, vec![validate_password])
            .with_field(FIELD_CONFIRM, vec![]),
    );
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let mismatch = Signal::derive(move || {
        form.with(|f| {
            let touched = f.field(FIELD_CONFIRM).is_some_and(|s| s.is_touched());
            let result = validate_password_match(f.value(FIELD_PASSWORD), f.value(FIELD_CONFIRM));
            match result {
                Err(e) if touched => Some(e.message),
                _ => None,
            }
        })
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.touch_all());
        if !form.with_untracked(|f| f.is_valid()) || mismatch.get_untracked().is_some() {
            return;
        }

        let (password, confirm) = form.with_untracked(|f| {
            (
                f.value(FIELD_PASSWORD).to_string(),
                f.value(FIELD_CONFIRM).to_string(),
            )
        });
        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match auth_service(router).reset_password(&password, &confirm).await {
                Ok(_) => {
                    log_info!("[ResetPassword] password updated");
                    router.navigate("/login");
                }
                Err(e) => set_error_msg.set(Some(e.message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Choose a new password"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"New password"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| form.update(|f| f.set(FIELD_PASSWORD, event_target_value(&ev)))
                                on:blur=move |_| form.update(|f| f.touch(FIELD_PASSWORD))
                                prop:value=move || form.with(|f| f.value(FIELD_PASSWORD).to_string())
                            />
                            <FieldError error=Signal::derive(move || form.with(|f| f.error_for(FIELD_PASSWORD))) />
                        </div>
                        <div class="form-control">
                            <label class="label" for="confirm">
                                <span class="label-text">"Confirm password"</span>
                            </label>
                            <input
                                id="confirm"
                                type="password"
                                class="input input-bordered"
                                on:input=move |ev| form.update(|f| f.set(FIELD_CONFIRM, event_target_value(&ev)))
                                on:blur=move |_| form.update(|f| f.touch(FIELD_CONFIRM))
                                prop:value=move || form.with(|f| f.value(FIELD_CONFIRM).to_string())
                            />
                            <FieldError error=mismatch />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Saving..." } else { "Update password" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
