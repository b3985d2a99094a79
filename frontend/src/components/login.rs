use crate::api::auth_service;
use crate::auth::use_auth;
use crate::components::{ErrorAlert, FieldError};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rentease::forms::FormState;
use rentease::navigation::return_url_from_query;
use rentease::validation::{validate_phone, validate_required};
use rentease::Navigator;

const FIELD_PHONE: &str = "phone";
const FIELD_PASSWORD: &str = "password";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let form = RwSignal::new(
        FormState::new()
            .with_field(FIELD_PHONE, vec![validate_phone])
            .with_field(FIELD_PASSWORD, vec![validate_required]),
    );
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.touch_all());
        if !form.with_untracked(|f| f.is_valid()) {
            return;
        }

        let phone = form.with_untracked(|f| f.value(FIELD_PHONE).to_string());
        let password = form.with_untracked(|f| f.value(FIELD_PASSWORD).to_string());
        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            match auth_service(router).login(&phone, &password).await {
                Ok(user) => {
                    auth.refresh();
                    let current = router.current_url();
                    let target = current
                        .split_once('?')
                        .and_then(|(_, query)| return_url_from_query(query))
                        .unwrap_or_else(|| user.role.dashboard_path().to_string());
                    log_info!("[Login] signed in as {}, continuing to {}", user.role, target);
                    router.navigate(&target);
                }
                Err(e) => set_error_msg.set(Some(e.message)),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Welcome back to RentEase"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />

                        <div class="form-control">
                            <label class="label" for="phone">
                                <span class="label-text">"Phone number"</span>
                            </label>
                            <label class="input input-bordered flex items-center gap-2">
                                "+254"
                                <input
                                    id="phone"
                                    type="tel"
                                    placeholder="712345678"
                                    class="grow"
                                    on:input=move |ev| form.update(|f| f.set(FIELD_PHONE, event_target_value(&ev)))
                                    on:blur=move |_| form.update(|f| f.touch(FIELD_PHONE))
                                    prop:value=move || form.with(|f| f.value(FIELD_PHONE).to_string())
                                />
                            </label>
                            <FieldError error=Signal::derive(move || form.with(|f| f.error_for(FIELD_PHONE))) />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Password"</span>
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
                        <div class="flex justify-between text-sm">
                            <a class="link" on:click=move |_| router.navigate("/forgot-password")>"Forgot password?"</a>
                            <a class="link" on:click=move |_| router.navigate("/register")>"Create an account"</a>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Signing in..." } else { "Sign in" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
