use super::utils::generate_id;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// A transient notification shown in the corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            id: generate_id(),
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub notices: Vec<Notice>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack">
            { for props.notices.iter().map(|notice| {
                let id = notice.id;
                let (class, icon) = match notice.kind {
                    NoticeKind::Success => ("toast-success", "fa-circle-check"),
                    NoticeKind::Error => ("toast-error", "fa-circle-exclamation"),
                    NoticeKind::Info => ("toast-info", "fa-circle-info"),
                };
                html! {
                    <div class={classes!("toast", class)} key={id.to_string()}>
                        <i class={classes!("fa-solid", icon)}></i>
                        <p>{ &notice.message }</p>
                        <button
                            class="toast-close"
                            title="Dismiss"
                            onclick={props.on_dismiss.reform(move |_: MouseEvent| id)}
                        >
                            <i class="fa-solid fa-times"></i>
                        </button>
                    </div>
                }
            }) }
        </div>
    }
}
