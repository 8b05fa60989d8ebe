#[tokio::main]
async fn main() {
    if let Err(e) = symptriage_lib::run().await {
        eprintln!("symptriage: {e}");
        std::process::exit(1);
    }
}
