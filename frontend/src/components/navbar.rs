use shared::{Route, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub route: Route,
    pub user: Option<User>,
    pub on_logout: Callback<()>,
}

fn nav_link(current: Route, target: Route, label: &str) -> Html {
    let active = current == target;
    html! {
        <a href={target.hash()} class={classes!("nav-link", active.then_some("active"))}>
            { label }
        </a>
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let handle_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <nav class="navbar">
            <a href={Route::Home.hash()} class="brand">
                <i class="fa-solid fa-apple-whole"></i>{" FruitVision"}
            </a>

            <div class="nav-links">
                { nav_link(props.route, Route::Home, "Home") }
                { for props.user.as_ref().map(|_| nav_link(props.route, Route::Dashboard, "Dashboard")) }
                { nav_link(props.route, Route::About, "About") }
            </div>

            <div class="auth-button-container">
                {
                    match &props.user {
                        Some(user) => html! {
                            <div class="user-info">
                                <span class="user-name">{ format!("Hello, {}", user.name) }</span>
                                <button class="logout-button" onclick={handle_logout} title="Logout">
                                    <i class="fa-solid fa-sign-out-alt"></i>
                                    {" Logout"}
                                </button>
                            </div>
                        },
                        None => html! {
                            <>
                                <a href={Route::Login.hash()} class="login-button">{"Login"}</a>
                                <a href={Route::Signup.hash()} class="signup-button">{"Sign Up"}</a>
                            </>
                        },
                    }
                }
            </div>
        </nav>
    }
}
