fn main() {
    parlance::cli::run();
}
