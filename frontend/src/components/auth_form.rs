use shared::Route;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthRequest {
    Login {
        email: String,
        password: String,
    },
    Signup {
        email: String,
        password: String,
        name: String,
    },
}

#[derive(Properties, PartialEq)]
pub struct AuthFormProps {
    pub mode: AuthMode,
    pub pending: bool,
    pub on_submit: Callback<AuthRequest>,
}

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(AuthForm)]
pub fn auth_form(props: &AuthFormProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let name = use_state(String::new);

    // Empty fields are submitted as-is; the session store owns validation.
    let handle_submit = {
        let (email, password, name) = (email.clone(), password.clone(), name.clone());
        let on_submit = props.on_submit.clone();
        let mode = props.mode;
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = match mode {
                AuthMode::Login => AuthRequest::Login {
                    email: (*email).clone(),
                    password: (*password).clone(),
                },
                AuthMode::Signup => AuthRequest::Signup {
                    email: (*email).clone(),
                    password: (*password).clone(),
                    name: (*name).clone(),
                },
            };
            on_submit.emit(request);
        })
    };

    let (title, action, alternate) = match props.mode {
        AuthMode::Login => (
            "Welcome back",
            "Login",
            html! { <p>{"Don't have an account? "}<a href={Route::Signup.hash()}>{"Sign up"}</a></p> },
        ),
        AuthMode::Signup => (
            "Create an account",
            "Sign Up",
            html! { <p>{"Already have an account? "}<a href={Route::Login.hash()}>{"Login"}</a></p> },
        ),
    };

    html! {
        <div class="auth-page">
            <form class="auth-form" onsubmit={handle_submit}>
                <h1>{ title }</h1>
                {
                    if props.mode == AuthMode::Signup {
                        html! {
                            <label>
                                {"Name"}
                                <input type="text" value={(*name).clone()} oninput={bind(&name)} disabled={props.pending} />
                            </label>
                        }
                    } else {
                        html! {}
                    }
                }
                <label>
                    {"Email"}
                    <input type="email" value={(*email).clone()} oninput={bind(&email)} disabled={props.pending} />
                </label>
                <label>
                    {"Password"}
                    <input type="password" value={(*password).clone()} oninput={bind(&password)} disabled={props.pending} />
                </label>
                <button type="submit" class="analyze-btn" disabled={props.pending}>
                    {
                        if props.pending {
                            html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Please wait..."}</> }
                        } else {
                            html! { { action } }
                        }
                    }
                </button>
                { alternate }
            </form>
        </div>
    }
}
