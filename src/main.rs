fn main() {
    heyfiles::app::cli::run();
}
