use kitchen_mocks::App;

fn main() {
    dioxus::launch(App);
}
