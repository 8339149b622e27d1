use crate::components::analytics::render_analytics;
use crate::components::handlers;
use crate::components::results::render_results;
use crate::components::toast::Notice;
use crate::components::upload_section::render_upload_section;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{AppConfig, ImageInfo, Intake, PredictionResult, Predictor, SyntheticPredictor};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Predict,
    Analytics,
}

/// The image currently on the dashboard. Replacing it drops the preview URL.
pub struct UploadedImage {
    pub id: u64,
    pub file: GlooFile,
    pub info: ImageInfo,
    pub preview_url: ObjectUrl,
}

pub enum Msg {
    // Image intake
    FileChosen(GlooFile, Intake),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
    SetDragging(bool),

    // Analysis
    AnalysisReady(u64),

    SelectTab(Tab),
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub config: Rc<AppConfig>,
    pub user_name: String,
    pub on_notify: Callback<Notice>,
}

pub struct Dashboard {
    pub(crate) image: Option<UploadedImage>,
    pub(crate) results: Option<Vec<PredictionResult>>,
    pub(crate) loading: bool,
    pub(crate) is_dragging: bool,
    pub(crate) tab: Tab,
    pub(crate) predictor: Box<dyn Predictor>,
    paste_listener: Option<EventListener>,
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(ctx: &Context<Self>) -> Self {
        let epsilon = ctx.props().config.leftover_epsilon;
        let mut model = Self {
            image: None,
            results: None,
            loading: false,
            is_dragging: false,
            tab: Tab::Predict,
            predictor: Box::new(SyntheticPredictor::from_entropy(epsilon)),
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file, intake) => {
                handlers::handle_file_chosen(self, ctx, file, intake)
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::AnalysisReady(image_id) => handlers::handle_analysis_ready(self, ctx, image_id),
            Msg::SelectTab(tab) => {
                let changed = self.tab != tab;
                self.tab = tab;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tab_button = |tab: Tab, label: &str| {
            html! {
                <button
                    class={classes!("tab", (self.tab == tab).then_some("active"))}
                    onclick={link.callback(move |_| Msg::SelectTab(tab))}
                >
                    { label }
                </button>
            }
        };

        html! {
            <section class="dashboard">
                <div class="dashboard-header">
                    <div>
                        <h1>{"Fruit Ripeness Dashboard"}</h1>
                        <p class="subtitle">{"Analyze fruit ripeness with our AI model"}</p>
                    </div>
                    <div class="welcome-banner">
                        <p>{ format!("Welcome, {}", ctx.props().user_name) }</p>
                    </div>
                </div>

                <div class="tabs">
                    { tab_button(Tab::Predict, "Predict Ripeness") }
                    { tab_button(Tab::Analytics, "Performance Analytics") }
                </div>

                {
                    match self.tab {
                        Tab::Predict => html! {
                            <div class="predict-grid">
                                <div>
                                    <h2>{"Upload Fruit Image"}</h2>
                                    { render_upload_section(self, ctx) }
                                    { render_instructions() }
                                </div>
                                <div>
                                    <h2>{"Analysis Results"}</h2>
                                    { render_results(self) }
                                </div>
                            </div>
                        },
                        Tab::Analytics => render_analytics(),
                    }
                }
            </section>
        }
    }
}

fn render_instructions() -> Html {
    html! {
        <div class="card instructions">
            <h3>{"Instructions"}</h3>
            <p class="subtitle">{"How to get the best results"}</p>
            <ul>
                <li>{"Upload a clear image of a single fruit"}</li>
                <li>{"Ensure good lighting conditions"}</li>
                <li>{"Position the fruit against a plain background"}</li>
                <li>{"The model works best with apples, bananas, oranges, mangoes, and strawberries"}</li>
            </ul>
        </div>
    }
}
