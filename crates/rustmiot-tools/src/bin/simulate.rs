use clap::Parser;
use rustmiot_client::{DeviceModel, PowerMode, SimulatedSwitch, SwitchClient};

/// Drive a simulated MIoT switch through poll/toggle cycles.
#[derive(Parser, Debug)]
#[command(name = "miot-simulate")]
struct Args {
    /// Vendor model string (qmi.plug.2a1c1 or qmi.plug.tw02).
    #[arg(long, default_value = "qmi.plug.2a1c1")]
    model: String,
    #[arg(long, default_value_t = 4)]
    cycles: u32,
    /// Power mode token to apply before polling (normal, green, eco).
    #[arg(long)]
    power_mode: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let model: DeviceModel = args.model.parse()?;
    let client = SwitchClient::with_model(model, SimulatedSwitch::new(model));

    if let Some(token) = &args.power_mode {
        let mode: PowerMode = token.parse()?;
        client.set_power_mode(mode).await?;
    }

    for cycle in 0..args.cycles {
        if cycle % 2 == 0 {
            client.turn_on().await?;
        } else {
            client.turn_off().await?;
        }

        let status = client.status().await?;
        println!(
            "cycle {cycle}: on={:?} system={:?} temperature={:?} load_power={:?}",
            status.is_on()?,
            status.system_status()?,
            status.temperature()?,
            status.load_power()?,
        );
    }

    Ok(())
}
