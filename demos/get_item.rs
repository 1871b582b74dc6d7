//! Fetch a single catalog item.
//!
//! Reads the four OAuth credentials from the environment:
//! `BRICKLINK_CONSUMER_KEY`, `BRICKLINK_CONSUMER_SECRET`,
//! `BRICKLINK_TOKEN` and `BRICKLINK_TOKEN_SECRET`.
//!
//! Run with: cargo run --example get_item -- SET 10179-1

use bricklink_rs::BricklinkClient;

#[tokio::main]
async fn main() -> bricklink_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let consumer_key = std::env::var("BRICKLINK_CONSUMER_KEY")
        .expect("BRICKLINK_CONSUMER_KEY environment variable required");
    let consumer_secret = std::env::var("BRICKLINK_CONSUMER_SECRET")
        .expect("BRICKLINK_CONSUMER_SECRET environment variable required");
    let token = std::env::var("BRICKLINK_TOKEN")
        .expect("BRICKLINK_TOKEN environment variable required");
    let token_secret = std::env::var("BRICKLINK_TOKEN_SECRET")
        .expect("BRICKLINK_TOKEN_SECRET environment variable required");

    let mut args = std::env::args().skip(1);
    let item_type = args.next().unwrap_or_else(|| "SET".to_string());
    let item_number = args.next().unwrap_or_else(|| "10179-1".to_string());

    let client = BricklinkClient::new(consumer_key, consumer_secret, token, token_secret)?;

    match client.items().get(&item_type, &item_number).await {
        Ok(body) => println!("{}", body),
        Err(e) if e.is_validation_error() => eprintln!("Bad arguments: {}", e),
        Err(e) => {
            eprintln!("Request failed: {}", e);
            if let bricklink_rs::Error::Api { body, .. } = &e {
                eprintln!("{}", body);
            }
            return Err(e);
        }
    }

    Ok(())
}
