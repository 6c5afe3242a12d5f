use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    /// The message to show; nothing renders when absent.
    #[prop_or_default]
    pub message: Option<String>,
}

/// Inline error banner for non-auth API failures. The page stays mounted.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let Some(message) = &props.message else {
        return html! {};
    };

    html! {
        <div class="alert alert-error my-2">
            <span>{message.clone()}</span>
        </div>
    }
}
