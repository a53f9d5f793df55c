/// Popup UI for the Tab Orbit extension

use std::rc::Rc;

use yew::prelude::*;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;

use crate::controller::Controller;
use crate::operations::SortOrder;
use crate::session::{Session, SessionAction};
use crate::ui::adapter::render_node;
use crate::ui::bridge::BrowserHost;
use crate::view::{Binding, ViewKind};

#[derive(Clone, PartialEq)]
enum AppState {
    Loading,
    Ready,
    Error(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let state = use_state(|| AppState::Loading);
    // Reducer dispatch, not clone-and-set: a close completion can land
    // after later edits, and it has to apply to the state it finds then.
    let session = use_reducer(Session::new);
    let controller = use_memo((), |_| Controller::new(Rc::new(BrowserHost)));

    // Query the tab snapshot once on mount
    {
        let state = state.clone();
        let session = session.clone();
        let controller = controller.clone();
        use_effect_with((), move |_| {
            controller.load(Box::new(move |result| match result {
                Ok(snapshot) => {
                    session.dispatch(SessionAction::Ingest(snapshot));
                    state.set(AppState::Ready);
                }
                Err(e) => {
                    state.set(AppState::Error(format!("Failed to load tabs: {}", e)));
                }
            }));
            || ()
        });
    }

    // Search handler
    let on_search_input = {
        let session = session.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                session.dispatch(SessionAction::SetSearch(input.value()));
            }
        })
    };

    // Sort toggle handler
    let on_toggle_sort = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::ToggleSort))
    };

    // View switcher handlers
    let on_view_click = {
        let session = session.clone();
        move |view: ViewKind| {
            let session = session.clone();
            Callback::from(move |_| session.dispatch(SessionAction::SetView(view)))
        }
    };

    // Clicks coming out of the rendered view
    let on_action = {
        let session = session.clone();
        let controller = controller.clone();
        Callback::from(move |binding: Binding| match binding {
            Binding::Activate(id) => {
                controller.activate(id);
            }
            Binding::Remove(id) => {
                let session = session.clone();
                controller.remove(
                    id,
                    Box::new(move || session.dispatch(SessionAction::Remove(id))),
                );
            }
            Binding::ToggleGroup(category) => {
                session.dispatch(SessionAction::ToggleGroup(category));
            }
        })
    };

    let sort_label = match session.order() {
        SortOrder::Ascending => "Sort A-Z",
        SortOrder::Descending => "Sort Z-A",
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Tab Orbit"}</h1>

            <div class="search-container">
                <input
                    type="text"
                    placeholder="Search by title or domain..."
                    value={session.search().to_string()}
                    oninput={on_search_input}
                    class="search-input"
                />
                <Button onclick={on_toggle_sort} variant={ButtonVariant::Secondary}>
                    {sort_label}
                </Button>
            </div>

            // View navigation
            <div class="pf-v5-c-tabs tabs-nav">
                <ul class="pf-v5-c-tabs__list">
                    {for ViewKind::ALL.iter().map(|&view| html! {
                        <li class={if session.view() == view { "pf-v5-c-tabs__item pf-m-current" } else { "pf-v5-c-tabs__item" }}>
                            <button
                                class="pf-v5-c-tabs__link"
                                onclick={on_view_click(view)}
                            >
                                <span class="pf-v5-c-tabs__item-text">{view.display()}</span>
                            </button>
                        </li>
                    })}
                </ul>
            </div>

            <p class="tab-count">{session.status_line()}</p>

            // Status display
            {match &*state {
                AppState::Loading => html! {
                    <div class="loading-text-center">
                        <Spinner />
                        <p class="loading-text">{"Loading tabs..."}</p>
                    </div>
                },
                AppState::Error(err) => html! {
                    <div class="message-top-margin">
                        <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                            {err.clone()}
                        </Alert>
                    </div>
                },
                AppState::Ready => html! {
                    <div class="view-container">
                        {render_node(&session.render(), &on_action)}
                    </div>
                },
            }}

            <p class="footer-popup">
                {"Tab Orbit v0.1.0"}
            </p>
        </div>
    }
}
