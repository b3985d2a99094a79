//! 路由服务模块 - 核心引擎
//!
//! 封装 History API，所有对 window.history 的操作都集中在此模块。
//! 导航流程："解析 -> 守卫 -> 处理 -> 加载"。守卫本身来自核心库，
//! 这里只决定每个路由使用哪个守卫。
//!
//! `RouterService` 同时实现 `Navigator`，注入到请求管道中供拦截器跳转登录页。

use leptos::prelude::*;
use rentease::guard::{GuardDecision, ResetPasswordGuard, RoleGuard, RouteGuard};
use rentease::navigation::{Navigator, redirect_to_login};
use rentease_shared::Timestamp;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;
use crate::api::app_config;
use crate::auth::session_store;

/// 守卫连续重定向的上限
const MAX_REDIRECTS: usize = 3;

/// 获取当前浏览器地址 (path + query)
fn current_location() -> String {
    web_sys::window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{}{}", path, search)
        })
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

fn replace_history_state(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(url));
        }
    }
}

/// 对目标地址执行守卫，返回最终落地的 (地址, 路由)
fn resolve(url: &str) -> (String, AppRoute) {
    let login_route = app_config().login_route;
    let mut url = url.to_string();
    for _ in 0..MAX_REDIRECTS {
        let Some(route) = AppRoute::from_url(&url, &login_route) else {
            log_info!("[Router] Unknown path {}. Redirecting to root.", url);
            return (AppRoute::Landing.to_path().to_string(), AppRoute::Landing);
        };

        match guard_decision(route, &url) {
            GuardDecision::Allow => return (route.canonical_url(&url, &login_route), route),
            GuardDecision::Redirect(to) => {
                log_info!("[Router] Access to {} denied. Redirecting to {}.", url, to);
                url = to;
            }
        }
    }
    (AppRoute::Landing.to_path().to_string(), AppRoute::Landing)
}

/// **核心守卫逻辑：每个路由对应的守卫**
fn guard_decision(route: AppRoute, url: &str) -> GuardDecision {
    let sessions = session_store();
    let config = app_config();
    match route {
        AppRoute::Dashboard(role) => RoleGuard::new(sessions, &config, role).check(url),
        AppRoute::ResetPassword => ResetPasswordGuard::new(sessions, &config).check(url),
        r if r.should_redirect_when_authenticated() => match sessions.current() {
            Some(s) if !s.is_expired_at(Timestamp::now()) => {
                GuardDecision::Redirect(s.role().dashboard_path().to_string())
            }
            _ => GuardDecision::Allow,
        },
        _ => GuardDecision::Allow,
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
}

impl RouterService {
    fn new() -> Self {
        let (url, initial_route) = resolve(&current_location());
        replace_history_state(&url);
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到指定地址（可带 query），经过守卫后推入 History
    pub fn navigate(&self, url: &str) {
        let (url, route) = resolve(url);
        push_history_state(&url);
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            let requested = current_location();
            let (url, route) = resolve(&requested);
            if url != requested {
                replace_history_state(&url);
            }
            set_route.set(route);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 登出后如果仍停留在面板页，自动跳转登录
    fn setup_auth_redirect(&self, is_authenticated: Signal<bool>) {
        let router = *self;

        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let route = router.current_route.get_untracked();
            if !is_auth && matches!(route, AppRoute::Dashboard(_)) {
                log_info!("[Router] Auth state changed: logged out, redirecting to login.");
                redirect_to_login(&router, &app_config().login_route);
            }
        });
    }
}

impl Navigator for RouterService {
    fn current_url(&self) -> String {
        current_location()
    }

    fn navigate(&self, url: &str) {
        RouterService::navigate(self, url);
    }
}

fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new();

    router.init_popstate_listener();
    router.setup_auth_redirect(is_authenticated);

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
