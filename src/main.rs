#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = quantum_forecaster::run(std::env::args_os()).await;
    std::process::exit(exit_code);
}
