use dotenv::dotenv;
use steel_sales_analytics::llm::{GroqClient, SalesAssistant};
use steel_sales_analytics::{collect_coords, map_view, DashboardState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let region = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Campinas, SP".to_string());

    let mut state = DashboardState::with_demo_data();
    println!(
        "Loaded demo dataset: {} clients, {} sales",
        state.clients.len(),
        state.sales.len()
    );

    let client = GroqClient::from_env()?;
    let assistant = SalesAssistant::new(client);

    println!("Searching for prospects near {region}...");
    match assistant.find_prospects(&region).await? {
        Some(prospects) => {
            println!("{} prospects found:", prospects.len());
            for p in &prospects {
                println!("  - {} ({:.4}, {:.4}): {}", p.name, p.latitude, p.longitude, p.description);
            }
            state.replace_prospects(prospects);
        }
        None => println!("The reply contained no extractable prospect data."),
    }

    let view = map_view(&collect_coords(&state.clients, &state.prospects));
    println!(
        "Map centers at ({:.4}, {:.4}), zoom {}",
        view.center.0, view.center.1, view.zoom
    );

    Ok(())
}
