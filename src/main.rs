#[tokio::main]
async fn main() {
    academy_backend::run().await;
}
