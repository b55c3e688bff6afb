use frontend::config;
use frontend::pages::landing::Landing;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::get_log_level()));
    gloo_console::log!("Mounting site frontend");
    yew::Renderer::<Landing>::new().render();
}
