use dotenv::dotenv;
use steel_sales_analytics::llm::{GroqClient, SalesAssistant};
use steel_sales_analytics::{CuttingMaterial, CuttingRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let request = CuttingRequest::new(CuttingMaterial::CarbonSteelA36, 12.70, 2000, 10, 4)?;

    let client = GroqClient::from_env()?;
    let assistant = SalesAssistant::new(client);

    println!("Requesting a cutting quote...");
    let (analysis, quote) = assistant.cutting_quote(request).await?;

    println!("--- Cost analysis ---\n{analysis}\n");
    match quote {
        Some(quote) => {
            println!("Unit price: R$ {:.2}", quote.unit_price);
            println!("Pieces:     {}", quote.request.quantity);
            println!("Total:      R$ {:.2}", quote.total);
        }
        None => println!("No unit price could be extracted; no total was computed."),
    }

    Ok(())
}
