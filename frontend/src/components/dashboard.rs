//! 角色面板
//!
//! 外壳对所有角色相同（问候 + 注销）。目前只有管理员 (caretaker) 面板接入了后端，
//! 其它角色显示占位内容。

use crate::api::caretaker_service;
use crate::auth::{AuthContext, logout, use_auth};
use crate::components::{ErrorAlert, SuccessAlert};
use crate::web::router::{RouterService, use_router};
use leptos::prelude::*;
use leptos::task::spawn_local;
use rentease_shared::{MaintenanceRequest, MaintenanceStatus, Property, UserRole};

#[component]
pub fn DashboardPage(role: UserRole) -> impl IntoView {
    let auth = use_auth();

    let greeting = move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.user.full_name.clone()))
            .unwrap_or_default()
    };

    let panel = match role {
        UserRole::Caretaker => view! { <CaretakerPanel /> }.into_any(),
        other => view! {
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <p>{format!("The {} workspace is coming soon.", other)}</p>
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <div class="navbar bg-base-100 shadow-sm px-4">
                <div class="flex-1">
                    <span class="text-xl font-bold">"RentEase"</span>
                    <span class="badge badge-outline ml-2">{role.as_str()}</span>
                </div>
                <div class="flex-none gap-2">
                    <span class="text-sm">{greeting}</span>
                    <button class="btn btn-ghost btn-sm" on:click=move |_| logout(&auth)>
                        "Sign out"
                    </button>
                </div>
            </div>
            <main class="container mx-auto p-4">{panel}</main>
        </div>
    }
}

/// 加载管理员的房产与维修工单
///
/// 401 时拦截器已经清空存储，结束后把响应式副本同步过来。
fn load_caretaker_data(
    router: RouterService,
    auth: AuthContext,
    properties: RwSignal<Vec<Property>>,
    requests: RwSignal<Vec<MaintenanceRequest>>,
    set_error: WriteSignal<Option<String>>,
    set_loading: WriteSignal<bool>,
) {
    set_loading.set(true);
    spawn_local(async move {
        let service = caretaker_service(router);
        let (props, reqs) =
            futures::join!(service.assigned_properties(), service.maintenance_requests());
        match props {
            Ok(list) => properties.set(list),
            Err(e) => {
                log_error!("[Dashboard] failed to load properties: {}", e);
                set_error.set(Some(e.message));
            }
        }
        match reqs {
            Ok(list) => requests.set(list),
            Err(e) => {
                log_error!("[Dashboard] failed to load maintenance requests: {}", e);
                set_error.set(Some(e.message));
            }
        }
        auth.refresh();
        set_loading.set(false);
    });
}

#[component]
fn CaretakerPanel() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let properties = RwSignal::new(Vec::<Property>::new());
    let requests = RwSignal::new(Vec::<MaintenanceRequest>::new());
    let (loading, set_loading) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let (info_msg, set_info_msg) = signal(Option::<String>::None);

    load_caretaker_data(router, auth, properties, requests, set_error_msg, set_loading);

    let advance = move |id: String, status: MaintenanceStatus| {
        set_error_msg.set(None);
        spawn_local(async move {
            match caretaker_service(router)
                .update_maintenance_status(&id, status)
                .await
            {
                Ok(updated) => {
                    set_info_msg.set(Some(format!("Request marked {}.", updated.status.label())));
                    requests.update(|list| {
                        if let Some(r) = list.iter_mut().find(|r| r.id == updated.id) {
                            *r = updated;
                        }
                    });
                }
                Err(e) => set_error_msg.set(Some(e.message)),
            }
            auth.refresh();
        });
    };

    view! {
        <div class="space-y-6">
            <ErrorAlert message=error_msg />
            <SuccessAlert message=info_msg />
            <Show when=move || loading.get()>
                <span class="loading loading-spinner"></span>
            </Show>

            <section>
                <h2 class="text-lg font-semibold mb-2">"Assigned properties"</h2>
                <div class="grid gap-4 md:grid-cols-2">
                    <For
                        each=move || properties.get()
                        key=|p| p.id.clone()
                        children=move |p: Property| {
                            let vacant = p.vacant_units();
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body">
                                        <h3 class="card-title">{p.name}</h3>
                                        <p class="text-sm opacity-70">{p.location}</p>
                                        <p class="text-sm">
                                            {format!("{} of {} units occupied, {} vacant", p.occupied_units, p.total_units, vacant)}
                                        </p>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </section>

            <section>
                <h2 class="text-lg font-semibold mb-2">"Maintenance requests"</h2>
                <table class="table bg-base-100">
                    <thead>
                        <tr>
                            <th>"Unit"</th>
                            <th>"Issue"</th>
                            <th>"Reported"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || requests.get()
                            key=|r| (r.id.clone(), r.status.label())
                            children=move |r: MaintenanceRequest| {
                                let reported = r.reported_at.to_rfc3339().unwrap_or_default();
                                let action = r.status.next().map(|next| {
                                    let id = r.id.clone();
                                    view! {
                                        <button
                                            class="btn btn-xs btn-primary"
                                            on:click=move |_| advance(id.clone(), next)
                                        >
                                            {format!("Mark {}", next.label())}
                                        </button>
                                    }
                                });
                                view! {
                                    <tr>
                                        <td>{r.unit}</td>
                                        <td>{r.description}</td>
                                        <td class="text-xs">{reported}</td>
                                        <td>{r.status.label()}</td>
                                        <td>{action}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </section>
        </div>
    }
}
