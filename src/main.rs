use yew_touch_gestures::{components::App, logging};

fn main() {
    let level = if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    logging::init(level);
    yew::Renderer::<App>::new().render();
}
