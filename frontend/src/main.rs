use site_frontend::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting site frontend");
    yew::Renderer::<App>::new().render();
}
