use crate::api::MachiMeshiClient;
use crate::components::error_banner::ErrorBanner;
use crate::pages::surface_error;
use crate::session::store::SessionState;
use shared::models::Notification;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_store;

/// The bearer's notifications, newest first. Clicking one marks it read.
#[function_component(NotificationsPage)]
pub fn notifications_page() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();
    let notifications = use_state(|| None::<Vec<Notification>>);
    let error = use_state(|| None::<String>);

    let refresh = {
        let notifications = notifications.clone();
        let error = error.clone();
        let dispatch = dispatch.clone();
        Callback::from(move |(): ()| {
            let notifications = notifications.clone();
            let error = error.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.list_notifications().await {
                    Ok(listing) => notifications.set(Some(listing)),
                    Err(err) => surface_error(&err, &dispatch, &error),
                }
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |()| {
            refresh.emit(());
            || ()
        });
    }

    let on_read = {
        let error = error.clone();
        let dispatch = dispatch;
        let refresh = refresh;
        Callback::from(move |id: Uuid| {
            let error = error.clone();
            let dispatch = dispatch.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                let client = MachiMeshiClient::shared();
                match client.mark_notification_read(id).await {
                    Ok(_) => refresh.emit(()),
                    Err(err) => surface_error(&err, &dispatch, &error),
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto">
            <h1 class="text-2xl font-semibold my-4">{"Notifications"}</h1>
            <ErrorBanner message={(*error).clone()} />
            {
                match &*notifications {
                    None => html! { <div class="flex justify-center p-8"><span class="loading loading-spinner"></span></div> },
                    Some(listing) if listing.is_empty() => html! {
                        <p class="text-center text-base-content/70 p-8">{"Nothing here yet."}</p>
                    },
                    Some(listing) => html! {
                        <ul class="space-y-2">
                            { for listing.iter().map(|notification| {
                                let id = notification.id;
                                let on_read = on_read.clone();
                                let onclick = Callback::from(move |_: MouseEvent| on_read.emit(id));
                                let classes = if notification.is_read {
                                    "card bg-base-100 shadow-sm p-4 opacity-60"
                                } else {
                                    "card bg-base-100 shadow p-4 cursor-pointer"
                                };
                                html! {
                                    <li class={classes} {onclick}>
                                        <div class="flex justify-between items-center">
                                            <h3 class="font-semibold">{&notification.title}</h3>
                                            if !notification.is_read {
                                                <span class="badge badge-primary badge-sm">{"new"}</span>
                                            }
                                        </div>
                                        <p class="text-sm text-base-content/80">{&notification.body}</p>
                                        <span class="text-xs text-base-content/60">
                                            {notification.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                        </span>
                                    </li>
                                }
                            }) }
                        </ul>
                    },
                }
            }
        </div>
    }
}
