mod catalog;
mod terminal;

fn main() {
    terminal::run_app();
}
