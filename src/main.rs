#[tokio::main]
async fn main() {
    if let Err(e) = medscan_lib::run().await {
        eprintln!("medscan: {e}");
        std::process::exit(1);
    }
}
