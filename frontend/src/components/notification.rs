use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew::AppHandle;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn class(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#28a745",
            NotificationKind::Error => "#dc3545",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Phase {
    Entering,
    Shown,
    Leaving,
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    pub kind: NotificationKind,
    /// Fired once the slide-out transition has finished.
    pub on_dismissed: Callback<()>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let phase = use_state(|| Phase::Entering);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let show = {
                    let phase = phase.clone();
                    Timeout::new(100, move || phase.set(Phase::Shown))
                };
                let hide = Timeout::new(5_000, move || phase.set(Phase::Leaving));
                move || {
                    drop(show);
                    drop(hide);
                }
            },
            (),
        );
    }
    {
        let on_dismissed = props.on_dismissed.clone();
        use_effect_with_deps(
            move |phase| {
                let removal = (*phase == Phase::Leaving)
                    .then(|| Timeout::new(300, move || on_dismissed.emit(())));
                move || drop(removal)
            },
            *phase,
        );
    }

    let (opacity, transform) = match *phase {
        Phase::Shown => ("1", "translateX(0)"),
        Phase::Entering | Phase::Leaving => ("0", "translateX(100%)"),
    };
    let style = format!(
        "position: fixed; top: 20px; right: 20px; padding: 15px 25px; border-radius: 10px; \
         color: white; font-weight: 500; z-index: 10000; transition: all 0.3s ease; \
         opacity: {}; transform: {}; background: {};",
        opacity,
        transform,
        props.kind.background()
    );

    html! {
        <div class={classes!("notification", props.kind.class())} style={style} role="status">
            { &props.message }
        </div>
    }
}

/// Shows a toast in the top right corner. The toast removes itself.
pub fn show_notification(message: impl Into<String>, kind: NotificationKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(host) = document.create_element("div") else {
        return;
    };
    if body.append_child(&host).is_err() {
        return;
    }

    let handle: Rc<RefCell<Option<AppHandle<Notification>>>> = Rc::new(RefCell::new(None));
    let on_dismissed = {
        let handle = handle.clone();
        let host = host.clone();
        Callback::from(move |_| {
            if let Some(app) = handle.borrow_mut().take() {
                app.destroy();
            }
            host.remove();
        })
    };
    let app = yew::Renderer::<Notification>::with_root_and_props(
        host,
        NotificationProps {
            message: message.into(),
            kind,
            on_dismissed,
        },
    )
    .render();
    *handle.borrow_mut() = Some(app);
}
