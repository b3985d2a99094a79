//! 注册页
//!
//! 注册成功后后端会发送 OTP，页面跳转到 `/verify-otp?phone=…` 完成校验。

use crate::api::auth_service;
use crate::components::{ErrorAlert, FieldError};
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rentease::forms::{FormState, normalize_phone_number};
use rentease::navigation::with_query;
use rentease::validation::{
    ValidationResult, validate_email, validate_id_number, validate_name, validate_password,
    validate_password_match, validate_phone,
};
use rentease_shared::{SignupRequest, UserRole};

const FIELD_NAME: &str = "fullName";
const FIELD_PHONE: &str = "phone";
const FIELD_ID: &str = "idNumber";
const FIELD_EMAIL: &str = "email";
const FIELD_PASSWORD: &str = "password";
const FIELD_CONFIRM: &str = "confirmPassword";

fn optional_email(value: &str) -> ValidationResult {
    if value.trim().is_empty() {
        Ok(())
    } else {
        validate_email(value)
    }
}

fn signup_form() -> FormState {
    FormState::new()
        .with_field(FIELD_NAME, vec![validate_name])
        .with_field(FIELD_PHONE, vec![validate_phone])
        .with_field(FIELD_ID, vec![validate_id_number])
        .with_field(FIELD_EMAIL, vec![optional_email])
        .with_field(FIELD_PASSWORD, vec![validate_password])
        .with_field(FIELD_CONFIRM, vec![])
}

/// 单个文本输入框，绑定到表单字段
#[component]
fn TextField(
    form: RwSignal<FormState>,
    name: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for=name>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=name
                type=input_type
                placeholder=placeholder
                class="input input-bordered"
                on:input=move |ev| form.update(|f| f.set(name, event_target_value(&ev)))
                on:blur=move |_| form.update(|f| f.touch(name))
                prop:value=move || form.with(|f| f.value(name).to_string())
            />
            <FieldError error=Signal::derive(move || form.with(|f| f.error_for(name))) />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let router = use_router();

    let form = RwSignal::new(signup_form());
    let role = RwSignal::new(UserRole::Tenant);
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| f.touch_all());
        let (valid, req, confirm) = form.with_untracked(|f| {
            let email = f.value(FIELD_EMAIL).trim().to_string();
            let req = SignupRequest {
                full_name: f.value(FIELD_NAME).trim().to_string(),
                phone_number: f.value(FIELD_PHONE).to_string(),
                id_number: f.value(FIELD_ID).trim().to_string(),
                email: (!email.is_empty()).then_some(email),
                password: f.value(FIELD_PASSWORD).to_string(),
                role: role.get_untracked(),
            };
            (f.is_valid(), req, f.value(FIELD_CONFIRM).to_string())
        });
        if !valid {
            return;
        }
        if let Err(e) = validate_password_match(&req.password, &confirm) {
            set_error_msg.set(Some(e.message.to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);
        let phone = normalize_phone_number(&req.phone_number);

        spawn_local(async move {
            match auth_service(router).signup(req).await {
                Ok(_) => {
                    router.navigate(&with_query("/verify-otp", "phone", &phone));
                }
                Err(e) => set_error_msg.set(Some(e.message)),
            }
            set_is_submitting.set(false);
        });
    };

    let role_options = UserRole::ALL
        .into_iter()
        .filter(|r| *r != UserRole::Admin)
        .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
        .collect_view();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-lg">
                <h1 class="text-3xl font-bold">"Create your RentEase account"</h1>
                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <ErrorAlert message=error_msg />
                        <TextField form=form name=FIELD_NAME label="Full name" />
                        <TextField form=form name=FIELD_PHONE label="Phone number (+254)" input_type="tel" placeholder="712345678" />
                        <TextField form=form name=FIELD_ID label="National ID number" />
                        <TextField form=form name=FIELD_EMAIL label="Email (optional)" input_type="email" />
                        <div class="form-control">
                            <label class="label" for="role">
                                <span class="label-text">"I am a"</span>
                            </label>
                            <select
                                id="role"
                                class="select select-bordered"
                                on:change=move |ev| {
                                    if let Some(r) = UserRole::parse(&event_target_value(&ev)) {
                                        role.set(r);
                                    }
                                }
                            >
                                {role_options}
                            </select>
                        </div>
                        <TextField form=form name=FIELD_PASSWORD label="Password" input_type="password" />
                        <TextField form=form name=FIELD_CONFIRM label="Confirm password" input_type="password" />
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() { "Creating account..." } else { "Register" }}
                            </button>
                        </div>
                        <a class="link text-sm" on:click=move |_| router.navigate("/login")>"Already registered? Sign in"</a>
                    </form>
                </div>
            </div>
        </div>
    }
}
