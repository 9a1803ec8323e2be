use dioxus::logger::tracing::Level;
use welding_site::menu;

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");

    menu::validate(&menu::MENU_ITEMS).expect("menu configuration is invalid");
    tracing::info!("menu configuration validated");

    #[cfg(feature = "web")]
    dioxus::launch(welding_site::view::app::App);
}
