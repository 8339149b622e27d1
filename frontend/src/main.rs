mod components;
mod dashboard;
mod storage;

use components::about::About;
use components::auth_form::{AuthForm, AuthMode, AuthRequest};
use components::landing::render_landing;
use components::navbar::Navbar;
use components::require_auth::RequireAuth;
use components::toast::{Notice, ToastStack};
use components::utils::render_spinner;
use dashboard::Dashboard;
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use shared::route::post_login_target;
use shared::{AppConfig, Route, SessionStore};
use std::collections::HashMap;
use std::rc::Rc;
use storage::BrowserStorage;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const APP_CONFIG: &str = include_str!("../../config/app.yaml");

// Yew msg components
enum Msg {
    // Session
    RestoreSession,
    Authenticate(AuthRequest),
    AuthReady(AuthRequest),
    Logout,

    // Navigation
    HashChanged,
    AccessDenied(Route),

    // Notifications
    Notify(Notice),
    DismissNotice(u64),
}

// Root component: owns the session, the current route and the toast queue
struct Model {
    config: Rc<AppConfig>,
    session: SessionStore<BrowserStorage>,
    route: Route,
    return_to: Option<Route>,
    auth_pending: bool,
    notices: Vec<Notice>,
    notice_timers: HashMap<u64, Timeout>,
    hash_listener: Option<EventListener>,
}

fn current_hash() -> String {
    web_sys::window()
        .and_then(|window| window.location().hash().ok())
        .unwrap_or_default()
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = AppConfig::load_or_default(APP_CONFIG);
        let session = SessionStore::new(BrowserStorage, config.storage_key.clone());

        let mut model = Self {
            config: Rc::new(config),
            session,
            route: Route::from_hash(&current_hash()),
            return_to: None,
            auth_pending: false,
            notices: Vec::new(),
            notice_timers: HashMap::new(),
            hash_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "hashchange", move |_| {
            link.send_message(Msg::HashChanged);
        });
        model.hash_listener = Some(listener);

        // Restored after the first render so the guard sees the initializing phase.
        ctx.link().send_message(Msg::RestoreSession);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::RestoreSession => {
                if let Some(user) = self.session.restore() {
                    log::info!("Welcome back, {}", user.name);
                }
                true
            }
            Msg::Authenticate(request) => self.handle_authenticate(ctx, request),
            Msg::AuthReady(request) => self.handle_auth_ready(ctx, request),
            Msg::Logout => {
                self.session.logout();
                self.notify(ctx, Notice::info("Logged out successfully"));
                if self.route.requires_auth() {
                    self.navigate(Route::Home);
                }
                true
            }
            Msg::HashChanged => {
                let route = Route::from_hash(&current_hash());
                if route == self.route {
                    return false;
                }
                log::debug!("Navigated to {}", route.path());
                self.route = route;
                true
            }
            Msg::AccessDenied(from) => {
                self.return_to = Some(from);
                self.notify(ctx, Notice::error("You must be logged in to access this page"));
                self.navigate(Route::Login);
                true
            }
            Msg::Notify(notice) => {
                self.notify(ctx, notice);
                true
            }
            Msg::DismissNotice(id) => {
                self.notice_timers.remove(&id);
                let before = self.notices.len();
                self.notices.retain(|notice| notice.id != id);
                self.notices.len() != before
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="container">
                <Navbar
                    route={self.route}
                    user={self.session.user().cloned()}
                    on_logout={link.callback(|_| Msg::Logout)}
                />

                <main class="main-content">
                    { self.render_page(ctx) }
                </main>

                <ToastStack
                    notices={self.notices.clone()}
                    on_dismiss={link.callback(Msg::DismissNotice)}
                />

                <footer class="app-footer">
                    <p>{"FruitVision | Fruit ripeness detection demo"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl Model {
    fn handle_authenticate(&mut self, ctx: &Context<Self>, request: AuthRequest) -> bool {
        if self.auth_pending {
            return false;
        }
        self.auth_pending = true;

        let link = ctx.link().clone();
        let delay_ms = self.config.auth_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            link.send_message(Msg::AuthReady(request));
        });

        true
    }

    fn handle_auth_ready(&mut self, ctx: &Context<Self>, request: AuthRequest) -> bool {
        self.auth_pending = false;

        let (result, success) = match request {
            AuthRequest::Login { email, password } => (
                self.session.login(&email, &password),
                "Logged in successfully!",
            ),
            AuthRequest::Signup {
                email,
                password,
                name,
            } => (
                self.session.signup(&email, &password, &name),
                "Account created successfully!",
            ),
        };

        match result {
            Ok(user) => {
                log::info!("Signed in as {}", user.email);
                self.notify(ctx, Notice::success(success));
                let target = post_login_target(self.return_to.take());
                self.navigate(target);
            }
            Err(e) => {
                log::warn!("Authentication rejected: {}", e);
                self.notify(ctx, Notice::error(e.to_string()));
            }
        }

        true
    }

    fn notify(&mut self, ctx: &Context<Self>, notice: Notice) {
        let id = notice.id;
        let link = ctx.link().clone();
        let timeout = Timeout::new(self.config.toast_duration_ms, move || {
            link.send_message(Msg::DismissNotice(id));
        });
        self.notice_timers.insert(id, timeout);
        self.notices.push(notice);
    }

    fn navigate(&mut self, route: Route) {
        self.route = route;
        if current_hash() != route.hash() {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_hash(route.path()) {
                    log::error!("Failed to update location hash: {:?}", e);
                }
            }
        }
    }
}

// Rendering methods
impl Model {
    fn render_page(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        match self.route {
            Route::Home => render_landing(),
            Route::About => html! { <About /> },
            Route::Login | Route::Signup => {
                let mode = if self.route == Route::Login {
                    AuthMode::Login
                } else {
                    AuthMode::Signup
                };
                html! {
                    <AuthForm
                        key={self.route.path().to_string()}
                        mode={mode}
                        pending={self.auth_pending}
                        on_submit={link.callback(Msg::Authenticate)}
                    />
                }
            }
            Route::Dashboard => {
                let user = self.session.user().cloned();
                html! {
                    <RequireAuth
                        route={self.route}
                        user={user.clone()}
                        initializing={self.session.is_initializing()}
                        on_denied={link.callback(Msg::AccessDenied)}
                    >
                        {
                            match user {
                                Some(user) => html! {
                                    <Dashboard
                                        config={self.config.clone()}
                                        user_name={user.name}
                                        on_notify={link.callback(Msg::Notify)}
                                    />
                                },
                                None => render_spinner(None),
                            }
                        }
                    </RequireAuth>
                }
            }
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("FruitVision starting...");
    yew::Renderer::<Model>::new().render();
}
