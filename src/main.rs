fn main() {
    chessboard_engine::mock::run_interactive_terminal();
}
