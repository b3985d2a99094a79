//! 找回密码页
//!
//! 两步：提交邮箱 → 输入邮件中的验证码。验证通过后核心库写入
//! `otpVerified`，`/reset-password` 的守卫才会放行。

use crate::api::auth_service;
use crate::components::{ErrorAlert, FieldError, SuccessAlert};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rentease::forms::FormState;
use rentease::validation::{validate_email, validate_otp};

const FIELD_EMAIL: &str = "email";
const FIELD_OTP: &str = "otp";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Email,
    Code,
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let router = use_router();

    let form = RwSignal::new(
        FormState::new()
            .with_field(FIELD_EMAIL, vec![validate_email])
            .with_field(FIELD_OTP, vec![validate_otp]),
    );
    let step = RwSignal::new(Step::Email);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (info_msg, set_info_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = step.get_untracked();
        let field = match current {
            Step::Email => FIELD_EMAIL,
            Step::Code => FIELD_OTP,
        };
        form.update(|f| f.touch(field));
        let Some(value) = form.with_untracked(|f| {
            f.field(field)
                .filter(|s| s.is_valid())
                .map(|s| s.value().trim().to_string())
        }) else {
            return;
        };

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let service = auth_service(router);
            match current {
                Step::Email => match service.forgot_password(&value).await {
                    Ok(resp) => {
                        set_info_msg.set(Some(resp.message));
                        step.set(Step::Code);
                    }
                    Err(e) => set_error_msg.set(Some(e.message)),
                },
                Step::Code => match service.verify_reset_otp(&value).await {
                    Ok(_) => router.navigate("/reset-password"),
                    Err(e) => set_error_msg.set(Some(e.message)),
                },
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <h1 class="text-3xl font-bold">"Reset your password"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />
                        <SuccessAlert message=info_msg />
                        <Show
                            when=move || step.get() == Step::Code
                            fallback=move || view! {
                                <div class="form-control">
                                    <label class="label" for="email">
                                        <span class="label-text">"Email address"</span>
                                    </label>
                                    <input
                                        id="email"
                                        type="email"
                                        class="input input-bordered"
                                        on:input=move |ev| form.update(|f| f.set(FIELD_EMAIL, event_target_value(&ev)))
                                        on:blur=move |_| form.update(|f| f.touch(FIELD_EMAIL))
                                        prop:value=move || form.with(|f| f.value(FIELD_EMAIL).to_string())
                                    />
                                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for(FIELD_EMAIL))) />
                                </div>
                            }
                        >
                            <div class="form-control">
                                <label class="label" for="otp">
                                    <span class="label-text">"Verification code"</span>
                                </label>
                                <input
                                    id="otp"
                                    inputmode="numeric"
                                    maxlength="6"
                                    class="input input-bordered tracking-widest text-center"
                                    on:input=move |ev| form.update(|f| f.set(FIELD_OTP, event_target_value(&ev)))
                                    on:blur=move |_| form.update(|f| f.touch(FIELD_OTP))
                                    prop:value=move || form.with(|f| f.value(FIELD_OTP).to_string())
                                />
                                <FieldError error=Signal::derive(move || form.with(|f| f.error_for(FIELD_OTP))) />
                            </div>
                        </Show>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || match (step.get(), is_submitting.get()) {
                                    (_, true) => "Please wait...",
                                    (Step::Email, false) => "Send code",
                                    (Step::Code, false) => "Verify code",
                                }}
                            </button>
                        </div>
                        <a class="link text-sm" on:click=move |_| router.navigate("/login")>"Back to sign in"</a>
                    </form>
                </div>
            </div>
        </div>
    }
}
