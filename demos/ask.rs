use flowise_client::FlowiseClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let chatflow_id = args.next().unwrap_or_else(|| "my-chatflow-id".to_string());
    let question = args
        .next()
        .unwrap_or_else(|| "Why is the sky blue?".to_string());

    let mut builder = FlowiseClient::builder();
    if let Ok(endpoint) = std::env::var("FLOWISE_ENDPOINT") {
        builder = builder.endpoint(endpoint);
    }
    if let Ok(key) = std::env::var("FLOWISE_API_KEY") {
        builder = builder.api_key(key);
    }
    let client = builder.build();

    println!("Connection: {}", client.connection_name().await);

    let answer = client.predict(&chatflow_id, &question).await?;
    println!("\n{answer}");

    Ok(())
}
