//! 认证模块
//!
//! 会话本身保存在 `sessionStorage`（由核心库的 `SessionStore` 读写），
//! 这里只维护一个响应式副本供 UI 使用。拦截器在 401 时会直接清除存储，
//! 因此每次服务调用后应调用 `refresh` 同步状态。

use crate::web::BrowserSessionStorage;
use leptos::prelude::*;
use rentease::{Session, SessionStore};

pub fn session_store() -> SessionStore<BrowserSessionStorage> {
    SessionStore::new(BrowserSessionStorage)
}

/// 认证上下文
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 当前会话（只读副本）
    pub session: RwSignal<Option<Session>>,
}

impl AuthContext {
    /// 从存储中加载已有会话（刷新页面后保持登录）
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(session_store().current()),
        }
    }

    pub fn refresh(&self) {
        self.session.set(session_store().current());
    }

    /// 获取认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.with(|s| s.is_some()))
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 注销并清除状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn logout(ctx: &AuthContext) {
    session_store().clear_session();
    ctx.refresh();
}
