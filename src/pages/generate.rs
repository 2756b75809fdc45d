//! Generate page: upload a recording and follow its summary task.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route and the one keep-alive view. Its
//! draft lives in an `ArcRwSignal` held by `ViewCache`, so leaving for the
//! profile page and coming back keeps the running task, its progress and the
//! finished summary. Polling writes into the same signal, so it keeps going
//! while the page is away.

#[cfg(test)]
#[path = "generate_test.rs"]
mod generate_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::api::TaskStatus;
use crate::routes::navigator::AppRouter;
use crate::routes::table::ViewId;
use crate::routes::view_cache::ViewCache;

#[cfg(feature = "csr")]
const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_secs(2);

/// Page state retained across navigations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateDraft {
    /// Name of the chosen file, for display.
    pub file_name: String,
    /// Upload in flight; no task id yet.
    pub uploading: bool,
    /// Latest known state of the current task.
    pub task: Option<TaskStatus>,
    pub info: String,
}

impl GenerateDraft {
    /// A task exists and has not reached a final state.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn is_current(&self, task_id: &str) -> bool {
        self.task.as_ref().is_some_and(|task| task.task_id == task_id)
    }
}

/// File name from a file input's value. Browsers report `C:\fakepath\name`.
pub fn file_display_name(raw: &str) -> String {
    raw.rsplit(['\\', '/']).next().unwrap_or_default().to_owned()
}

/// Whether a new upload may start from `draft`.
pub fn check_can_start(draft: &GenerateDraft, has_file: bool) -> Result<(), &'static str> {
    if draft.uploading || draft.is_running() {
        return Err("A summary is already running.");
    }
    if !has_file {
        return Err("Choose an audio or video file first.");
    }
    Ok(())
}

/// Poll `task_id` into `draft` until it finishes, a newer task replaces it,
/// or the user signs out.
#[cfg(feature = "csr")]
async fn poll_task(router: AppRouter, draft: ArcRwSignal<GenerateDraft>, task_id: String) {
    use crate::state::credential::read_credential;

    loop {
        gloo_timers::future::sleep(POLL_INTERVAL).await;
        if !draft.with_untracked(|d| d.is_current(&task_id)) {
            return;
        }
        let Some(token) = read_credential(router.store(), &router.config().token_key) else {
            return;
        };
        match crate::net::api::fetch_summary_status(router.config(), Some(&token), &task_id).await {
            Ok(status) => {
                let finished = status.is_finished();
                draft.update(|d| {
                    if d.is_current(&task_id) {
                        d.task = Some(status);
                    }
                });
                if finished {
                    log::info!("generate: task {task_id} finished");
                    return;
                }
            }
            Err(message) => {
                log::warn!("generate: status for {task_id} failed: {message}");
                draft.update(|d| d.info = message);
                return;
            }
        }
    }
}

#[component]
pub fn GeneratePage(#[prop(optional)] keep_alive: bool) -> impl IntoView {
    let router = expect_context::<AppRouter>();
    let cache = expect_context::<ViewCache>();
    let shared = cache.retain(ViewId::Generate, keep_alive, || ArcRwSignal::new(GenerateDraft::default()));
    let draft = RwSignal::from(shared.clone());
    let file_input = NodeRef::<leptos::html::Input>::new();
    let profile_href = router.href(ViewId::Profile);

    let on_submit = {
        let router = router.clone();
        let shared = shared.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            #[cfg(feature = "csr")]
            let file = file_input.get_untracked().and_then(|input| input.files()).and_then(|files| files.get(0));
            #[cfg(feature = "csr")]
            let has_file = file.is_some();
            #[cfg(not(feature = "csr"))]
            let has_file = false;

            if let Err(message) = draft.with_untracked(|d| check_can_start(d, has_file)) {
                draft.update(|d| d.info = message.to_owned());
                return;
            }

            #[cfg(feature = "csr")]
            {
                use crate::state::credential::read_credential;

                let Some(file) = file else { return };
                let router = router.clone();
                let shared = shared.clone();
                draft.update(|d| {
                    d.uploading = true;
                    d.task = None;
                    d.info = format!("Uploading {}...", file.name());
                });
                leptos::task::spawn_local(async move {
                    let token = read_credential(router.store(), &router.config().token_key);
                    match crate::net::api::start_summary(router.config(), token.as_deref(), &file).await {
                        Ok(task_id) => {
                            log::info!("generate: started task {task_id}");
                            shared.update(|d| {
                                d.uploading = false;
                                d.task = Some(TaskStatus::queued(task_id.clone()));
                                d.info.clear();
                            });
                            poll_task(router, shared, task_id).await;
                        }
                        Err(message) => {
                            log::warn!("generate: upload failed: {message}");
                            shared.update(|d| {
                                d.uploading = false;
                                d.info = message;
                            });
                        }
                    }
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (&router, &shared);
            }
        }
    };

    let on_cancel = move |_: leptos::ev::MouseEvent| {
        let running = draft.with_untracked(|d| d.task.clone().filter(|task| !task.is_finished()));
        let Some(task_id) = running.map(|task| task.task_id) else {
            return;
        };

        #[cfg(feature = "csr")]
        {
            use crate::state::credential::read_credential;

            let router = router.clone();
            let shared = shared.clone();
            leptos::task::spawn_local(async move {
                let token = read_credential(router.store(), &router.config().token_key);
                match crate::net::api::cancel_summary(router.config(), token.as_deref(), &task_id).await {
                    Ok(_) => shared.update(|d| {
                        if let Some(task) = d.task.as_mut().filter(|task| task.task_id == task_id) {
                            task.cancelled = true;
                        }
                    }),
                    Err(message) => {
                        log::warn!("generate: cancel {task_id} failed: {message}");
                        shared.update(|d| d.info = message);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (task_id, &router, &shared);
        }
    };

    let busy = move || draft.with(|d| d.uploading || d.is_running());

    view! {
        <div class="generate-page">
            <header class="generate-page__header">
                <h1>"Summarize a recording"</h1>
                <A href=profile_href>"Profile"</A>
            </header>
            <form class="generate-form" on:submit=on_submit>
                <input
                    class="generate-input"
                    type="file"
                    accept="audio/*,video/*"
                    node_ref=file_input
                    on:change=move |ev| draft.update(|d| d.file_name = file_display_name(&event_target_value(&ev)))
                />
                <button class="auth-button" type="submit" disabled=busy>"Summarize"</button>
                <Show when=move || draft.with(GenerateDraft::is_running)>
                    <button class="auth-button auth-button--secondary" type="button" on:click=on_cancel.clone()>
                        "Cancel"
                    </button>
                </Show>
            </form>
            <p class="generate-page__file">{move || draft.with(|d| d.file_name.clone())}</p>
            <p class="generate-page__info">{move || draft.with(|d| d.info.clone())}</p>
            {move || draft.with(|d| d.task.clone()).map(|task| view! {
                <section class="generate-task">
                    <p class="generate-task__status">{task.describe()}</p>
                    <progress max="100" value=task.progress.unwrap_or(0).to_string()></progress>
                    {task.transcript.map(|text| view! {
                        <details class="generate-task__transcript">
                            <summary>"Transcript"</summary>
                            <p>{text}</p>
                        </details>
                    })}
                    {task.summary.map(|text| view! {
                        <article class="generate-task__summary">
                            <h2>"Summary"</h2>
                            <p>{text}</p>
                        </article>
                    })}
                </section>
            })}
        </div>
    }
}
