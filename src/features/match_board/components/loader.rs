use leptos::prelude::*;

// Spinner with a caption, shown while a fetch settles

#[component]
pub fn Loader(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <div class="loader">
            <div class="loader-spinner"></div>
            <p class="loader-text">{text}</p>
        </div>
    }
}
