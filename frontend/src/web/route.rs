//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。

use rentease::navigation::path_of;
use rentease_shared::UserRole;
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    #[default]
    Landing,
    Register,
    Login,
    VerifyOtp,
    ForgotPassword,
    /// 需要完成找回密码前两步
    ResetPassword,
    /// 角色面板 (需要认证且角色匹配)
    Dashboard(UserRole),
}

impl AppRoute {
    /// 将 URL path 解析为路由；未知路径返回 None（调用方重定向到首页）
    ///
    /// 登录页同时响应 `/login` 与 `/auth/login`，后者是拦截器跳转使用的地址。
    pub fn from_path(path: &str) -> Option<Self> {
        let route = match path {
            "/" => Self::Landing,
            "/register" => Self::Register,
            "/login" | "/auth/login" => Self::Login,
            "/verify-otp" => Self::VerifyOtp,
            "/forgot-password" => Self::ForgotPassword,
            "/reset-password" => Self::ResetPassword,
            _ => {
                let role = path.strip_prefix("/dashboard/")?;
                Self::Dashboard(UserRole::parse(role)?)
            }
        };
        Some(route)
    }

    /// 解析完整地址；配置的登录路由（可能是自定义路径）总是映射到登录页
    pub fn from_url(url: &str, login_route: &str) -> Option<Self> {
        let path = path_of(url);
        if path == login_route {
            return Some(Self::Login);
        }
        Self::from_path(path)
    }

    /// 规范化地址：登录页统一落在配置的登录路由上（保留 query），
    /// 使拦截器的“已在登录页”判断对 `/login` 同样成立
    pub fn canonical_url(&self, url: &str, login_route: &str) -> String {
        match self {
            Self::Login => {
                let rest = url.find(['?', '#']).map_or("", |i| &url[i..]);
                format!("{}{}", login_route, rest)
            }
            _ => url.to_string(),
        }
    }

    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Register => "/register",
            Self::Login => "/login",
            Self::VerifyOtp => "/verify-otp",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::Dashboard(role) => role.dashboard_path(),
        }
    }

    /// 已登录用户应离开的页面（登录、注册）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_page_answers_both_paths() {
        assert_eq!(AppRoute::from_path("/login"), Some(AppRoute::Login));
        assert_eq!(AppRoute::from_path("/auth/login"), Some(AppRoute::Login));
    }

    #[test]
    fn dashboard_paths_round_trip_for_every_role() {
        for role in UserRole::ALL {
            let route = AppRoute::Dashboard(role);
            assert_eq!(AppRoute::from_path(route.to_path()), Some(route));
        }
        assert_eq!(AppRoute::from_path("/dashboard/owner"), None);
        assert_eq!(AppRoute::from_path("/dashboard"), None);
    }

    #[test]
    fn login_urls_canonicalize_to_the_configured_route() {
        let route = AppRoute::from_url("/login?returnUrl=%2Fdashboard", "/auth/login").unwrap();
        assert_eq!(route, AppRoute::Login);
        assert_eq!(
            route.canonical_url("/login?returnUrl=%2Fdashboard", "/auth/login"),
            "/auth/login?returnUrl=%2Fdashboard"
        );
        assert_eq!(AppRoute::Login.canonical_url("/login", "/auth/login"), "/auth/login");

        assert_eq!(AppRoute::from_url("/signin", "/signin"), Some(AppRoute::Login));
        assert_eq!(
            AppRoute::Register.canonical_url("/register?x=1", "/auth/login"),
            "/register?x=1"
        );
    }

    #[test]
    fn canonical_login_url_suppresses_interceptor_redirect() {
        use rentease::navigation::{Navigator, redirect_to_login};
        use std::cell::RefCell;

        struct At(RefCell<String>, RefCell<Vec<String>>);
        impl Navigator for At {
            fn current_url(&self) -> String {
                self.0.borrow().clone()
            }
            fn navigate(&self, url: &str) {
                self.1.borrow_mut().push(url.to_string());
            }
        }

        let landed = AppRoute::Login.canonical_url("/login", "/auth/login");
        let nav = At(RefCell::new(landed), RefCell::new(Vec::new()));
        assert!(!redirect_to_login(&nav, "/auth/login"));
        assert!(nav.1.borrow().is_empty());
    }

    #[test]
    fn unknown_paths_are_rejected() {
        assert_eq!(AppRoute::from_path("/settings"), None);
        assert_eq!(AppRoute::from_path(""), None);
    }
}
