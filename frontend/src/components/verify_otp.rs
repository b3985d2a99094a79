//! OTP 校验页
//!
//! 手机号来自注册页跳转时的 `?phone=` 参数。重发按钮有 60 秒冷却。

use crate::api::auth_service;
use crate::auth::use_auth;
use crate::components::{ErrorAlert, FieldError, SuccessAlert};
use crate::web::Interval;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rentease::Navigator;
use rentease::forms::FormState;
use rentease::navigation::query_param;
use rentease::validation::validate_otp;

const FIELD_OTP: &str = "otp";
const RESEND_COOLDOWN_SECS: u32 = 60;

#[component]
pub fn VerifyOtpPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let phone = query_param(&router.current_url(), "phone").unwrap_or_default();
    let phone = StoredValue::new(phone);

    let form = RwSignal::new(FormState::new().with_field(FIELD_OTP, vec![validate_otp]));
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (info_msg, set_info_msg) = signal(Option::<String>::None);

    let cooldown = RwSignal::new(RESEND_COOLDOWN_SECS);
    let ticker = StoredValue::new_local(None::<Interval>);

    let start_cooldown = move || {
        cooldown.set(RESEND_COOLDOWN_SECS);
        let interval = Interval::new(1000, move || {
            cooldown.update(|c| *c = c.saturating_sub(1));
        });
        if interval.is_none() {
            log_error!("[VerifyOtp] failed to start resend cooldown timer");
            cooldown.set(0);
        }
        ticker.set_value(interval);
    };
    start_cooldown();
    on_cleanup(move || ticker.set_value(None));

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.touch_all());
        if !form.with_untracked(|f| f.is_valid()) {
            return;
        }

        let otp = form.with_untracked(|f| f.value(FIELD_OTP).to_string());
        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let phone = phone.get_value();
            match auth_service(router).verify_otp(&phone, &otp).await {
                Ok(user) => {
                    auth.refresh();
                    log_info!("[VerifyOtp] phone verified, role {}", user.role);
                    router.navigate(user.role.dashboard_path());
                }
                Err(e) => set_error_msg.set(Some(e.message)),
            }
            set_is_submitting.set(false);
        });
    };

    let on_resend = move |_| {
        if cooldown.get_untracked() > 0 {
            return;
        }
        set_error_msg.set(None);
        spawn_local(async move {
            let phone = phone.get_value();
            match auth_service(router).resend_otp(&phone).await {
                Ok(resp) => {
                    set_info_msg.set(Some(resp.message));
                    start_cooldown();
                }
                Err(e) => set_error_msg.set(Some(e.message)),
            }
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Verify your phone"</h1>
                <p class="text-sm opacity-70">
                    "Enter the 6-digit code sent to " {move || phone.get_value()}
                </p>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />
                        <SuccessAlert message=info_msg />
                        <div class="form-control">
                            <input
                                id="otp"
                                inputmode="numeric"
                                maxlength="6"
                                placeholder="123456"
                                class="input input-bordered tracking-widest text-center"
                                on:input=move |ev| form.update(|f| f.set(FIELD_OTP, event_target_value(&ev)))
                                on:blur=move |_| form.update(|f| f.touch(FIELD_OTP))
                                prop:value=move || form.with(|f| f.value(FIELD_OTP).to_string())
                            />
                            <FieldError error=Signal::derive(move || form.with(|f| f.error_for(FIELD_OTP))) />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Verifying..." } else { "Verify" }}
                            </button>
                        </div>
                        <button
                            type="button"
                            class="btn btn-ghost btn-sm"
                            disabled=move || cooldown.get() > 0
                            on:click=on_resend
                        >
                            {move || match cooldown.get() {
                                0 => "Resend code".to_string(),
                                n => format!("Resend code in {}s", n),
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
