use super::utils::render_spinner;
use shared::route::guard;
use shared::{GuardDecision, Route, User};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub route: Route,
    pub user: Option<User>,
    pub initializing: bool,
    /// Receives the route the visitor was turned away from.
    pub on_denied: Callback<Route>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let decision = guard(props.route, props.user.as_ref(), props.initializing);

    {
        let on_denied = props.on_denied.clone();
        use_effect_with(decision, move |decision| {
            if let GuardDecision::Redirect { from, .. } = *decision {
                log::info!("Redirecting unauthenticated visitor away from {}", from.path());
                on_denied.emit(from);
            }
        });
    }

    match decision {
        GuardDecision::Pending => render_spinner(None),
        GuardDecision::Redirect { .. } => html! {},
        GuardDecision::Allow => html! { <>{ for props.children.iter() }</> },
    }
}
