use colored::*;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::io::{self, Write};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", "🚗 Vehicles API Testing Tool".bright_blue().bold());
    println!("{}", "=====================================".bright_blue());
    println!();

    let base_url = prompt("Vehicles API URL [http://localhost:8080]: ")?;
    let base_url = if base_url.is_empty() {
        "http://localhost:8080".to_string()
    } else {
        base_url.trim_end_matches('/').to_string()
    };
    let pricing_url = prompt("Pricing Service URL [http://localhost:8082]: ")?;
    let pricing_url = if pricing_url.is_empty() {
        "http://localhost:8082".to_string()
    } else {
        pricing_url.trim_end_matches('/').to_string()
    };
    let client = Client::new();

    loop {
        println!();
        println!("{}", "📋 MENÚ PRINCIPAL".bright_green().bold());
        println!("{}", "==================".bright_green());
        println!("1. ➕ Crear vehículo de ejemplo");
        println!("2. 📃 Listar vehículos");
        println!("3. 🔍 Obtener vehículo por id");
        println!("4. 🗑️ Eliminar vehículo por id");
        println!("5. 💰 Consultar precio de un vehículo");
        println!("6. 🚪 Salir");

        let choice = prompt("Selecciona una opción (1-6): ")?;

        match choice.as_str() {
            "1" => create_sample_car(&client, &base_url).await?,
            "2" => list_cars(&client, &base_url).await?,
            "3" => {
                let id = prompt("Id: ")?;
                get_car(&client, &base_url, &id).await?;
            }
            "4" => {
                let id = prompt("Id: ")?;
                delete_car(&client, &base_url, &id).await?;
            }
            "5" => {
                let id = prompt("Vehicle id: ")?;
                get_price(&client, &pricing_url, &id).await?;
            }
            "6" => {
                println!("{}", "👋 ¡Hasta luego!".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Opción inválida. Intenta de nuevo.".bright_red());
            }
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String, Box<dyn std::error::Error>> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut value = String::new();
    io::stdin().read_line(&mut value)?;
    Ok(value.trim().to_string())
}

async fn create_sample_car(client: &Client, base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let payload = json!({
        "condition": "USED",
        "details": {
            "body": "sedan",
            "model": "Impala",
            "manufacturer": { "code": 101, "name": "Chevrolet" },
            "numberOfDoors": 4,
            "fuelType": "Gasoline",
            "engine": "3.6L V6",
            "mileage": 32280,
            "modelYear": 2018,
            "productionYear": 2018,
            "externalColor": "white"
        },
        "location": { "lat": 40.730610, "lon": -73.935242 }
    });

    println!("{}", "📦 Payload:".bright_blue());
    println!("{}", serde_json::to_string_pretty(&payload)?);

    let response = client
        .post(format!("{}/cars", base_url))
        .json(&payload)
        .send()
        .await?;

    if let Some(location) = response.headers().get(reqwest::header::LOCATION) {
        println!("{} {}", "📍 Location:".bright_blue(), location.to_str()?);
    }
    print_response(response.status(), response.json::<Value>().await.ok())
}

async fn list_cars(client: &Client, base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let response = client.get(format!("{}/cars", base_url)).send().await?;
    let status = response.status();
    let body = response.json::<Value>().await.ok();

    if let Some(cars) = body
        .as_ref()
        .and_then(|b| b.pointer("/_embedded/carList"))
        .and_then(Value::as_array)
    {
        println!("{}", format!("🚗 VEHÍCULOS ENCONTRADOS: {}", cars.len()).bright_green().bold());
        for car in cars {
            println!(
                "   #{} {} {} - {}",
                car["id"],
                car["details"]["manufacturer"]["name"].as_str().unwrap_or("?"),
                car["details"]["model"].as_str().unwrap_or("?"),
                car["price"].as_str().unwrap_or("-"),
            );
        }
        return Ok(());
    }

    print_response(status, body)
}

async fn get_car(client: &Client, base_url: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let response = client.get(format!("{}/cars/{}", base_url, id)).send().await?;
    print_response(response.status(), response.json::<Value>().await.ok())
}

async fn delete_car(client: &Client, base_url: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let response = client.delete(format!("{}/cars/{}", base_url, id)).send().await?;
    let status = response.status();

    if status == StatusCode::NO_CONTENT {
        println!("{}", "✅ Vehículo eliminado".bright_green());
        return Ok(());
    }
    print_response(status, response.json::<Value>().await.ok())
}

async fn get_price(client: &Client, pricing_url: &str, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let response = client
        .get(format!("{}/services/price", pricing_url))
        .query(&[("vehicleId", id)])
        .send()
        .await?;
    print_response(response.status(), response.json::<Value>().await.ok())
}

fn print_response(status: StatusCode, body: Option<Value>) -> Result<(), Box<dyn std::error::Error>> {
    println!();
    if status.is_success() {
        println!("{}", format!("📥 RESPUESTA {}", status).bright_green().bold());
    } else {
        println!("{}", format!("❌ RESPUESTA {}", status).bright_red().bold());
    }

    if let Some(body) = body {
        println!("{}", serde_json::to_string_pretty(&body)?);
    }
    Ok(())
}
