use gloo_timers::callback::Timeout;
use yew::prelude::*;

const AUTO_DISMISS_MS: u32 = 4_000;

/// Visual flavor of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    fn alert_class(self) -> &'static str {
        match self {
            Self::Error => "alert-error",
            Self::Success => "alert-success",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    #[prop_or(ToastKind::Error)]
    pub kind: ToastKind,
    pub on_dismiss: Callback<()>,
}

/// Transient, auto-dismissing notification. All user-visible failures
/// surface through this component rather than full-page error states.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with(props.message.clone(), move |_| {
            let timeout = Timeout::new(AUTO_DISMISS_MS, move || on_dismiss.emit(()));
            move || drop(timeout)
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class="toast toast-top toast-end z-50">
            <div class={classes!("alert", props.kind.alert_class())}>
                <span>{ props.message.clone() }</span>
                <button class="btn btn-ghost btn-xs" onclick={on_close}>{"✕"}</button>
            </div>
        </div>
    }
}
