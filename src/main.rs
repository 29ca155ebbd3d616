#[tokio::main]
async fn main() {
    complaint_backend::run().await;
}
