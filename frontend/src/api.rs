//! 服务装配
//!
//! 每次调用按需组装：Fetch 传输 + 认证管道 + 强类型客户端。
//! 所有部件都是零大小或 `Copy` 的句柄。

use crate::auth::session_store;
use crate::web::FetchHttpClient;
use crate::web::router::RouterService;
use crate::web::BrowserSessionStorage;
use rentease::config::{VAR_API_BASE, VAR_LOGIN_ROUTE};
use rentease::services::{ApiClient, AuthService, CaretakerService};
use rentease::{ClientConfig, Pipeline, authenticated_pipeline};
use std::rc::Rc;

pub type AppClient = Rc<Pipeline<FetchHttpClient>>;

/// 构建期注入的配置（`RENTEASE_API_BASE=https://… trunk build`）
pub fn app_config() -> ClientConfig {
    ClientConfig::from_lookup(|name| match name {
        VAR_API_BASE => option_env!("RENTEASE_API_BASE").map(str::to_string),
        VAR_LOGIN_ROUTE => option_env!("RENTEASE_LOGIN_ROUTE").map(str::to_string),
        _ => None,
    })
}

pub fn api_client(router: RouterService) -> ApiClient<AppClient> {
    let config = app_config();
    let pipeline = authenticated_pipeline(FetchHttpClient, session_store(), router, &config);
    ApiClient::new(Rc::new(pipeline), config)
}

pub fn auth_service(router: RouterService) -> AuthService<AppClient, BrowserSessionStorage> {
    AuthService::new(api_client(router), session_store())
}

pub fn caretaker_service(router: RouterService) -> CaretakerService<AppClient> {
    CaretakerService::new(api_client(router))
}
