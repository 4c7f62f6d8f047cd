use client::NodeClient;
use ledger::{
    Configuration,
    Header,
    Round,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let address = args.next().ok_or("Usage: get_block <address> <round> [api-key]")?;
    let round: Round = args.next().ok_or("missing round")?.parse()?;
    let headers = args.next().map(|key| vec![Header::api_key(&key)]).unwrap_or_default();

    // Connect to the node's REST API
    let client = NodeClient::new(&Configuration::from_params(&address, "", headers))?;

    let block = client.block(round).await?;

    println!("{} -> {} ({} transactions)", round, block.hash, block.transactions().len());

    for tx in block.transactions() {
        println!("  {} {}", tx.id, tx.note.as_text());
    }

    Ok(())
}
