//! RentEase 前端应用
//!
//! 核心逻辑（会话、拦截器、守卫、校验）都在 `rentease` 库中，这里只负责浏览器适配与界面：
//! - `web`: fetch / sessionStorage / History API 的轻量封装
//! - `api`: 按需装配带认证管道的服务
//! - `auth`: 会话的响应式副本
//! - `components`: 页面组件

// =========================================================
// 跨平台日志宏
// =========================================================

#[cfg(target_arch = "wasm32")]
macro_rules! log_info {
    ($($t:tt)*) => (web_sys::console::log_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_info {
    ($($t:tt)*) => (println!($($t)*))
}

#[cfg(target_arch = "wasm32")]
macro_rules! log_error {
    ($($t:tt)*) => (web_sys::console::error_1(&format!($($t)*).into()))
}

#[cfg(not(target_arch = "wasm32"))]
macro_rules! log_error {
    ($($t:tt)*) => (eprintln!($($t)*))
}

mod api;
mod auth;
mod components {
    mod common;
    pub use common::*;

    pub mod dashboard;
    pub mod forgot_password;
    pub mod login;
    pub mod register;
    pub mod reset_password;
    pub mod verify_otp;
}

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::forgot_password::ForgotPasswordPage;
use crate::components::login::LoginPage;
use crate::components::register::RegisterPage;
use crate::components::reset_password::ResetPasswordPage;
use crate::components::verify_otp::VerifyOtpPage;

use leptos::prelude::*;

// 浏览器原生 API 封装
pub(crate) mod web {
    mod http;
    mod logging;
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchHttpClient;
    pub use logging::init_logging;
    pub use storage::BrowserSessionStorage;
    pub use timer::Interval;
}

pub use web::init_logging;
use web::route::AppRoute;
use web::router::{Router, RouterOutlet, use_router};

#[component]
fn LandingPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">"RentEase"</h1>
                    <p class="py-6">"Rent collection, maintenance and tenancy in one place."</p>
                    <div class="flex gap-2 justify-center">
                        <button class="btn btn-primary" on:click=move |_| router.navigate("/register")>
                            "Get started"
                        </button>
                        <button class="btn btn-ghost" on:click=move |_| router.navigate("/login")>
                            "Sign in"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Landing => view! { <LandingPage /> }.into_any(),
        AppRoute::Register => view! { <RegisterPage /> }.into_any(),
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::VerifyOtp => view! { <VerifyOtpPage /> }.into_any(),
        AppRoute::ForgotPassword => view! { <ForgotPasswordPage /> }.into_any(),
        AppRoute::ResetPassword => view! { <ResetPasswordPage /> }.into_any(),
        AppRoute::Dashboard(role) => view! { <DashboardPage role=role /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 认证上下文（从 sessionStorage 恢复会话）
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 认证信号注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
