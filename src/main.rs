fn main() {
    sdbox::app::cli::run();
}
