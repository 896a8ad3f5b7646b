use std::path::PathBuf;
use std::process;

use anyhow::Context;
use spirelet::{
    ClientConfig, CoreSpec, GenerationParameters, ModifierCode, SpireClient, SpireResponse, Tier,
    UpgradeLevels,
};
use spire_query::render::{render_core, render_grid};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let options = match parse_args(&args) {
        Ok(v) => v,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            eprintln!("Usage: spire-query [options]");
            eprintln!();
            eprintln!("Options:");
            eprintln!("  --floors <n>           Number of floors [default: 5]");
            eprintln!("  --budget <n>           Resource budget [default: 0]");
            eprintln!("  --fire <level>         Fire trap upgrade level [default: 0]");
            eprintln!("  --frost <level>        Frost trap upgrade level [default: 0]");
            eprintln!("  --poison <level>       Poison trap upgrade level [default: 0]");
            eprintln!("  --lightning <level>    Lightning trap upgrade level [default: 0]");
            eprintln!("  --core-tier <1-7>      Request a core of the given tier");
            eprintln!("  --core-fire <pct>      Core fire modifier percentage");
            eprintln!("  --core-poison <pct>    Core poison modifier percentage");
            eprintln!("  --core-lightning <pct> Core lightning modifier percentage");
            eprintln!("  --core-strength <pct>  Core strength modifier percentage");
            eprintln!("  --core-condenser <pct> Core condenser modifier percentage");
            eprintln!("  --core-runestones <pct> Core runestones modifier percentage");
            eprintln!("  --params <file>        Load parameters from a JSON file instead of flags");
            eprintln!("  --endpoint <url>       Generator endpoint [default: http://localhost:8080/query]");
            process::exit(2);
        }
    };

    if let Err(e) = run(options).await {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

struct Options {
    params: GenerationParameters,
    params_file: Option<PathBuf>,
    endpoint: String,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut floors: u32 = 5;
    let mut budget: u64 = 0;
    let mut upgrades = UpgradeLevels::default();
    let mut core_tier: Option<u32> = None;
    let mut core_mods: Vec<(ModifierCode, u32)> = Vec::new();
    let mut params_file: Option<PathBuf> = None;
    let mut endpoint = ClientConfig::default().endpoint;

    fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str, String> {
        args.get(i)
            .map(String::as_str)
            .ok_or_else(|| format!("{flag} requires a value"))
    }

    fn number<T: std::str::FromStr>(text: &str, flag: &str) -> Result<T, String> {
        text.parse()
            .map_err(|_| format!("{flag} requires a number, got '{text}'"))
    }

    let mut i = 1; // skip argv[0]
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--floors" => {
                i += 1;
                floors = number(value(args, i, flag)?, flag)?;
            }
            "--budget" => {
                i += 1;
                budget = number(value(args, i, flag)?, flag)?;
            }
            "--fire" => {
                i += 1;
                upgrades.fire = number(value(args, i, flag)?, flag)?;
            }
            "--frost" => {
                i += 1;
                upgrades.frost = number(value(args, i, flag)?, flag)?;
            }
            "--poison" => {
                i += 1;
                upgrades.poison = number(value(args, i, flag)?, flag)?;
            }
            "--lightning" => {
                i += 1;
                upgrades.lightning = number(value(args, i, flag)?, flag)?;
            }
            "--core-tier" => {
                i += 1;
                core_tier = Some(number(value(args, i, flag)?, flag)?);
            }
            "--core-fire" | "--core-poison" | "--core-lightning" | "--core-strength"
            | "--core-condenser" | "--core-runestones" => {
                i += 1;
                let magnitude = number(value(args, i, flag)?, flag)?;
                let code = modifier_flag(flag);
                core_mods.push((code, magnitude));
            }
            "--params" => {
                i += 1;
                params_file = Some(PathBuf::from(value(args, i, flag)?));
            }
            "--endpoint" => {
                i += 1;
                endpoint = value(args, i, flag)?.to_string();
            }
            "--help" | "-h" => return Err("".to_string()),
            other => return Err(format!("unknown flag: {other}")),
        }
        i += 1;
    }

    if floors == 0 {
        return Err("--floors must be positive".to_string());
    }

    let core = match core_tier {
        Some(index) => {
            let tier = Tier::from_index(index)
                .ok_or_else(|| format!("--core-tier must be 1-7, got {index}"))?;
            let mut core = CoreSpec::new(tier);
            for (code, magnitude) in core_mods {
                core = core.with_modifier(code, magnitude);
            }
            Some(core)
        }
        None if core_mods.is_empty() => None,
        None => return Err("core modifier flags require --core-tier".to_string()),
    };

    Ok(Options {
        params: GenerationParameters {
            floors,
            budget,
            upgrades,
            core,
        },
        params_file,
        endpoint,
    })
}

fn modifier_flag(flag: &str) -> ModifierCode {
    match flag {
        "--core-fire" => ModifierCode::Fire,
        "--core-poison" => ModifierCode::Poison,
        "--core-lightning" => ModifierCode::Lightning,
        "--core-strength" => ModifierCode::Strength,
        "--core-condenser" => ModifierCode::Condenser,
        _ => ModifierCode::Runestones,
    }
}

async fn run(options: Options) -> anyhow::Result<()> {
    let params = match &options.params_file {
        Some(path) => load_params(path)?,
        None => options.params,
    };

    let client = SpireClient::new(ClientConfig {
        endpoint: options.endpoint,
        ..Default::default()
    });

    match client.generate(&params).await? {
        SpireResponse::Generated { spire, core } => {
            print!("{}", render_grid(&spire));
            println!("core: {}", render_core(core.as_ref()));
            Ok(())
        }
        SpireResponse::Rejected { message } => {
            anyhow::bail!("generator rejected the query: {message}")
        }
    }
}

fn load_params(path: &std::path::Path) -> anyhow::Result<GenerationParameters> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let params = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(params)
}
